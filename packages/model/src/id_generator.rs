use crate::tree::Tree;
use crc32fast::Hasher;

/// Generate an id seed from a document name using CRC32
pub fn get_document_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Id of the synthetic column node at `index` inside grid `grid_id`.
///
/// Derived rather than allocated so that re-materializing a slot always
/// yields the same id.
pub fn column_id(grid_id: &str, index: usize) -> String {
    format!("{}-col-{}", grid_id, index)
}

/// Sequential id generator for content nodes within a document
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Document seed (CRC32)
    count: u64,   // Sequential counter
}

impl IdGenerator {
    pub fn new(document_name: &str) -> Self {
        Self {
            seed: get_document_seed(document_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count = match self.count.checked_add(1) {
            Some(next) => next,
            None => {
                // Counter exhausted: continue under a longer seed
                self.seed = format!("{}-{}", self.seed, self.count);
                1
            }
        };
        format!("{}-{}", self.seed, self.count)
    }

    /// Get id seed
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Advance the counter past every id this generator could have issued
    /// that is already present in `tree`.
    pub fn resume_after(&mut self, tree: &Tree) {
        let prefix = format!("{}-", self.seed);
        let highest = tree
            .ids()
            .into_iter()
            .filter_map(|id| id.strip_prefix(&prefix))
            .filter_map(|rest| rest.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        self.count = self.count.max(highest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Address, NewNode, NodeKind};

    #[test]
    fn test_document_seed_generation() {
        let seed1 = get_document_seed("untitled");
        let seed2 = get_document_seed("untitled");

        // Same name always generates same seed
        assert_eq!(seed1, seed2);

        // Different names generate different seeds
        let seed3 = get_document_seed("brochure");
        assert_ne!(seed1, seed3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("untitled");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        let seed = gen.seed();
        assert!(id1.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_column_ids_are_deterministic() {
        assert_eq!(column_id("abc-4", 0), "abc-4-col-0");
        assert_eq!(column_id("abc-4", 2), column_id("abc-4", 2));
    }

    #[test]
    fn test_resume_after_existing_tree() {
        let mut gen = IdGenerator::from_seed("s".to_string());
        let nodes = vec![
            NewNode::new(NodeKind::Paragraph).into_node("s-7".to_string(), Address::Root),
            NewNode::new(NodeKind::Paragraph).into_node("other-40".to_string(), Address::Root),
        ];
        let tree = Tree::from_roots(nodes);

        gen.resume_after(&tree);
        assert_eq!(gen.new_id(), "s-8");
    }

    #[test]
    fn test_exhausted_counter_moves_to_longer_seed() {
        let mut gen = IdGenerator::from_seed("s".to_string());
        let last = format!("s-{}", u64::MAX);
        let tree = Tree::from_roots(vec![
            NewNode::new(NodeKind::Paragraph).into_node(last.clone(), Address::Root),
        ]);

        gen.resume_after(&tree);
        let next = gen.new_id();
        assert_eq!(next, format!("{}-1", last));
        assert_ne!(next, last);
        assert_eq!(gen.new_id(), format!("{}-2", last));
    }
}
