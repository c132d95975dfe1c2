use serde::{Deserialize, Serialize};

/// Category a declared license falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseCategory {
    Permissive,
    Copyleft,
    Unknown,
}

impl std::fmt::Display for LicenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseCategory::Permissive => write!(f, "permissive"),
            LicenseCategory::Copyleft => write!(f, "copyleft"),
            LicenseCategory::Unknown => write!(f, "unknown"),
        }
    }
}

/// One installed package and its declared license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageLicense {
    pub name: String,
    pub version: String,
    pub license: Option<String>,
    pub category: LicenseCategory,
}

/// Settings that affect the check itself (output mode lives in [`crate::cli`]).
#[derive(Debug, Clone, Default)]
pub struct LicenseCheckOptions {
    /// Case-insensitive substrings; a matching license counts as denied.
    pub deny: Vec<String>,
}

/// Per-category counters. `denied` overlaps the other three.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseSummary {
    pub permissive: usize,
    pub copyleft: usize,
    pub unknown: usize,
    pub denied: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseCheckResult {
    pub packages: Vec<PackageLicense>,
    pub summary: LicenseSummary,
    pub has_issues: bool,
}
