//! Nesting and size limits

use crate::error::{NestError, Result};

/// Limits applied where external data or generated fixtures enter the crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum container nesting depth (default: 64, hard: 127)
    pub max_depth: usize,
    /// Maximum entries per generated container level (default: 1,024, hard: 65,536)
    pub max_generated_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_generated_len: 1_024,
        }
    }
}

impl Limits {
    /// Hard maximum limits that cannot be exceeded
    ///
    /// `max_depth` stops one level short of serde_json's recursion limit of
    /// 128, so every depth that passes [`Limits::validate`] also parses.
    pub fn hard_maximums() -> Self {
        Self {
            max_depth: 127,
            max_generated_len: 65_536,
        }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<()> {
        let hard = Self::hard_maximums();

        if self.max_depth > hard.max_depth {
            return Err(NestError::LimitExceeded(format!(
                "max_depth {} exceeds hard limit {}",
                self.max_depth, hard.max_depth
            )));
        }

        if self.max_generated_len > hard.max_generated_len {
            return Err(NestError::LimitExceeded(format!(
                "max_generated_len {} exceeds hard limit {}",
                self.max_generated_len, hard.max_generated_len
            )));
        }

        Ok(())
    }
}
