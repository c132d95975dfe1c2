use crate::models::LicenseCategory;

/// Fragments that mark a license as permissive. Checked before [`COPYLEFT_LICENSES`].
const PERMISSIVE_LICENSES: &[&str] = &[
    "MIT",
    "Apache-2.0",
    "Apache",
    "BSD",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "ISC",
    "Unlicense",
    "0BSD",
    "CC0-1.0",
    "WTFPL",
];

const COPYLEFT_LICENSES: &[&str] = &[
    "GPL",
    "GPL-2.0",
    "GPL-3.0",
    "AGPL",
    "AGPL-3.0",
    "LGPL",
    "LGPL-2.1",
    "LGPL-3.0",
    "MPL-2.0",
    "EPL-1.0",
    "EPL-2.0",
];

/// Classify a declared license string into a [`LicenseCategory`].
///
/// Matching is case-insensitive substring containment, not exact SPDX
/// comparison: `"GPL-3.0-or-later"` hits both `GPL-3.0` and `GPL`. The
/// permissive list wins when both lists match, so `"MIT OR GPL-3.0"` is
/// permissive. A missing license is [`LicenseCategory::Unknown`].
pub fn classify_license(license: Option<&str>) -> LicenseCategory {
    let Some(license) = license.filter(|l| !l.is_empty()) else {
        return LicenseCategory::Unknown;
    };

    let normalized = license.trim().to_uppercase();
    let matches = |list: &[&str]| {
        list.iter()
            .any(|fragment| normalized.contains(&fragment.to_uppercase()))
    };

    if matches(PERMISSIVE_LICENSES) {
        LicenseCategory::Permissive
    } else if matches(COPYLEFT_LICENSES) {
        LicenseCategory::Copyleft
    } else {
        LicenseCategory::Unknown
    }
}

/// Returns `true` when any deny pattern is a case-insensitive substring of `license`.
pub fn is_denied(license: Option<&str>, deny: &[String]) -> bool {
    let Some(license) = license.filter(|l| !l.is_empty()) else {
        return false;
    };

    let normalized = license.trim().to_lowercase();
    deny.iter()
        .any(|pattern| normalized.contains(&pattern.trim().to_lowercase()))
}
