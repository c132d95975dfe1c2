use anyhow::Result;

use crate::models::LicenseCheckResult;

/// Serialize the full result with two-space indentation.
pub fn render(result: &LicenseCheckResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
