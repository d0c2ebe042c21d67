//! Test seed pinning for the oneSafe 6 Android checkout
//!
//! The JVM test suite draws every random value from one PRNG seeded in
//! `OSTestUtils.kt`. CI pins that seed before running the tests so a
//! failing run can be replayed exactly:
//! - Draw a seed (or take one from the command line)
//! - Rewrite the seed assignment in place
//! - Print the seed so it lands in the build log

pub mod error;
pub mod patch;

pub use error::{Result, SeedError};
pub use patch::{PatchOutcome, pin_in_source, pin_seed, random_seed};

/// Seed assignment rewritten before a CI run, relative to the checkout root
pub const OS_TEST_UTILS_PATH: &str =
    "common-test/src/main/kotlin/studio/lunabee/onesafe/test/OSTestUtils.kt";
