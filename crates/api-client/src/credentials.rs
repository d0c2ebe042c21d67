//! API key resolution
//!
//! Keys come from the command line first, then the environment. The
//! environment lookup is injected so tests exercise both paths without
//! mutating process state.

use thiserror::Error;

/// Neither the command line nor the environment supplied a key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No API key provided: pass --key or set {env_var}")]
pub struct MissingCredential {
    /// Environment variable that was consulted
    pub env_var: String,
}

/// Resolve an API key from a flag value and an environment lookup
///
/// The flag wins; `lookup` is consulted for `env_var` only when the flag
/// is absent.
///
/// # Errors
///
/// Returns [`MissingCredential`] naming `env_var` when neither source
/// supplies a key.
pub fn resolve_with<F>(
    flag: Option<String>,
    env_var: &str,
    lookup: F,
) -> Result<String, MissingCredential>
where
    F: FnOnce(&str) -> Option<String>,
{
    flag.or_else(|| lookup(env_var)).ok_or_else(|| MissingCredential {
        env_var: env_var.to_string(),
    })
}

/// Resolve an API key against the process environment
///
/// # Errors
///
/// Returns [`MissingCredential`] when the flag is absent and `env_var`
/// is unset.
pub fn resolve(flag: Option<String>, env_var: &str) -> Result<String, MissingCredential> {
    resolve_with(flag, env_var, |var| std::env::var(var).ok())
}
