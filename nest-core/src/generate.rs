//! Random nested containers for test fixtures
//!
//! A generated container has exactly `max_len` insertion attempts at the top
//! level. Attempt `i` uses the integer key `i`, or roughly half the time a
//! random label; colliding keys overwrite earlier entries, so the result may
//! be shorter than `max_len`. Each value is a random string, or roughly half
//! the time (and never once `depth` reaches 0) a sub-container generated one
//! level shallower with a length drawn from `2..=len` of its parent. Depth is
//! not balanced: some branches stop early.

use crate::error::{NestError, Result};
use crate::key::Key;
use crate::limits::Limits;
use crate::value::{Container, Value};
use rand::seq::index;
use rand::Rng;
use std::ops::RangeInclusive;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Distinct characters in a generated key label
const KEY_LABEL_LEN: RangeInclusive<usize> = 2..=61;

/// Distinct characters in a generated string value
const VALUE_LEN: RangeInclusive<usize> = 3..=10;

/// Shape of a generated container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Levels of sub-containers allowed below the top level
    pub depth: usize,
    /// Insertion attempts at the top level
    pub max_len: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            max_len: 4,
        }
    }
}

impl GeneratorConfig {
    /// Create a config
    pub fn new(depth: usize, max_len: usize) -> Self {
        Self { depth, max_len }
    }

    /// Validate against `limits`
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        limits.validate()?;

        if self.depth >= limits.max_depth {
            return Err(NestError::LimitExceeded(format!(
                "generator depth {} needs {} levels (max: {})",
                self.depth,
                self.depth + 1,
                limits.max_depth
            )));
        }

        if self.max_len > limits.max_generated_len {
            return Err(NestError::LimitExceeded(format!(
                "generator max_len {} exceeds limit {}",
                self.max_len, limits.max_generated_len
            )));
        }

        Ok(())
    }
}

/// Generate a random container shaped by `config`
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    limits: &Limits,
) -> Result<Container> {
    config.validate(limits)?;
    Ok(generate_level(rng, config.depth, config.max_len))
}

fn generate_level<R: Rng + ?Sized>(rng: &mut R, depth: usize, len: usize) -> Container {
    let mut container = Container::with_capacity(len);

    for i in 0..len {
        let key = if coin_flip(rng) {
            Key::from(random_label(rng, KEY_LABEL_LEN))
        } else {
            Key::Int(i as i64)
        };

        let value = if depth == 0 || coin_flip(rng) {
            Value::from(random_label(rng, VALUE_LEN))
        } else {
            let sub_len = rng.gen_range(2..=len.max(2));
            Value::Container(generate_level(rng, depth - 1, sub_len))
        };

        container.insert(key, value);
    }

    container
}

/// Slightly under even odds: 29 even draws out of 3..=61
fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_ratio(29, 59)
}

/// Distinct alphabet characters, kept in alphabet order
fn random_label<R: Rng + ?Sized>(rng: &mut R, len: RangeInclusive<usize>) -> String {
    let amount = rng.gen_range(len);
    let mut picked = index::sample(rng, ALPHABET.len(), amount).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| ALPHABET[i] as char).collect()
}
