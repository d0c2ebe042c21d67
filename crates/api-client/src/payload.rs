//! Beta build request payload
//!
//! The build request sent to TeamCity lives in a JSON template checked
//! in next to the trigger tool. Only the branch changes between runs,
//! so the template is loaded as-is and exactly one member is rewritten.

use crate::error::{ApiError, ApiResult};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Build request template, resolved against the invocation directory
pub const BETA_PAYLOAD_FILE: &str = "beta_trigger_teamcity_payload.json";

/// Template member overridden with the requested branch
pub const BRANCH_FIELD: &str = "branchName";

/// Load the build request template
///
/// Fails when the file is missing, is not valid JSON, or does not hold
/// a JSON object at the top level. Nothing is sent over the network
/// until the template has loaded.
pub fn load(path: &Path) -> ApiResult<Value> {
    let content = std::fs::read_to_string(path).map_err(|source| ApiError::PayloadRead {
        path: path.to_path_buf(),
        source,
    })?;

    let payload: Value = serde_json::from_str(&content).map_err(|source| ApiError::PayloadParse {
        path: path.to_path_buf(),
        source,
    })?;

    if !payload.is_object() {
        return Err(ApiError::PayloadNotObject);
    }

    debug!(path = %path.display(), "payload template loaded");
    Ok(payload)
}

/// Return the template with [`BRANCH_FIELD`] set to `branch`
///
/// Every other member is carried over untouched.
pub fn with_branch(template: &Value, branch: &str) -> ApiResult<Value> {
    let mut payload = template.clone();
    let object = payload.as_object_mut().ok_or(ApiError::PayloadNotObject)?;
    object.insert(BRANCH_FIELD.to_string(), Value::String(branch.to_string()));
    Ok(payload)
}
