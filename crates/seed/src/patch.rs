//! Seed assignment patching
//!
//! `OSTestUtils.kt` seeds the shared test PRNG from `Random.nextInt()`.
//! Pinning replaces that initializer with a literal value so every test
//! in the run, and every re-run, draws the same sequence.

use crate::error::{Result, SeedError};
use std::path::Path;
use tracing::{debug, warn};

/// Initializer replaced when pinning
pub const SEED_PLACEHOLDER: &str = "private val seed = Random.nextInt()";

/// Outcome of patching the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The placeholder was replaced and the file rewritten
    Pinned,
    /// The placeholder was absent; the file was left untouched
    PlaceholderMissing,
}

/// Draw a seed from OS entropy, uniform over the full `i16` range
pub fn random_seed() -> Result<i16> {
    let mut bytes = [0u8; 2];
    getrandom::getrandom(&mut bytes)?;
    Ok(i16::from_le_bytes(bytes))
}

/// Pinned form of the seed assignment
#[must_use]
pub fn seed_assignment(seed: i16) -> String {
    format!("private val seed = {seed}")
}

/// Replace the first occurrence of the seed placeholder
///
/// Returns `None` when the placeholder is absent (already pinned, or the
/// Kotlin source moved on). Everything around the placeholder, including
/// the rest of its own line, is carried over unchanged.
#[must_use]
pub fn pin_in_source(content: &str, seed: i16) -> Option<String> {
    if !content.contains(SEED_PLACEHOLDER) {
        return None;
    }
    Some(content.replacen(SEED_PLACEHOLDER, &seed_assignment(seed), 1))
}

/// Pin `seed` in the file at `path`, rewriting it in place
pub fn pin_seed(path: &Path, seed: i16) -> Result<PatchOutcome> {
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match pin_in_source(&content, seed) {
        Some(patched) => {
            std::fs::write(path, patched).map_err(|source| SeedError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), seed, "seed pinned");
            Ok(PatchOutcome::Pinned)
        }
        None => {
            warn!(path = %path.display(), "seed placeholder not found, file left untouched");
            Ok(PatchOutcome::PlaceholderMissing)
        }
    }
}
