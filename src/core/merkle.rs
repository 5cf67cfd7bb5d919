use crate::error::{LedgerError, Result};
use crate::utils::sha256_hex;
use serde::{Deserialize, Serialize};

/// Merkle reduction over string identifiers.
///
/// Each level pairs neighbours and replaces them with the hex SHA-256 of their
/// concatenation. An odd element at the end of a level is carried up
/// unchanged rather than paired with itself, so a single id is its own root.
/// Every level is kept, leaves first, root last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleTree {
    levels: Vec<Vec<String>>,
}

impl MerkleTree {
    /// Build the tree for a non-empty list of ids
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self> {
        if ids.is_empty() {
            return Err(LedgerError::InvalidInput(
                "Cannot build Merkle tree from empty id list".to_string(),
            ));
        }

        let mut current_level: Vec<String> = ids.iter().map(|id| id.as_ref().to_string()).collect();
        let mut levels = Vec::new();

        while current_level.len() > 1 {
            let next_level = Self::reduce_level(&current_level);
            levels.push(current_level);
            current_level = next_level;
        }
        levels.push(current_level);

        Ok(MerkleTree { levels })
    }

    fn reduce_level(level: &[String]) -> Vec<String> {
        level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => Self::hash_pair(left, right),
                [odd] => odd.clone(),
                _ => unreachable!("chunks(2) yields one or two elements"),
            })
            .collect()
    }

    fn hash_pair(left: &str, right: &str) -> String {
        let mut combined = String::with_capacity(left.len() + right.len());
        combined.push_str(left);
        combined.push_str(right);
        sha256_hex(combined.as_bytes())
    }

    pub fn root(&self) -> &str {
        // from_ids always pushes a final single-element level
        self.levels[self.levels.len() - 1][0].as_str()
    }

    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of reduction rounds between the leaves and the root
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }
}

/// Merkle root of a non-empty list of ids
pub fn merkle_root<S: AsRef<str>>(ids: &[S]) -> Result<String> {
    MerkleTree::from_ids(ids).map(|tree| tree.root().to_string())
}
