use std::path::Path;

use anyhow::Result;

use crate::license::classifier::is_denied;
use crate::models::{
    LicenseCategory, LicenseCheckOptions, LicenseCheckResult, LicenseSummary, PackageLicense,
};
use crate::scanner::scan_node_modules;

/// Scan `root`, count packages per category and apply the deny list.
///
/// Any copyleft, unknown or denied package sets `has_issues`.
pub fn check_licenses(root: &Path, options: &LicenseCheckOptions) -> Result<LicenseCheckResult> {
    let packages = scan_node_modules(root)?;
    let summary = summarize(&packages, &options.deny);

    let has_issues = summary.copyleft > 0 || summary.unknown > 0 || summary.denied > 0;

    Ok(LicenseCheckResult {
        packages,
        summary,
        has_issues,
    })
}

fn summarize(packages: &[PackageLicense], deny: &[String]) -> LicenseSummary {
    let mut summary = LicenseSummary::default();

    for pkg in packages {
        match pkg.category {
            LicenseCategory::Permissive => summary.permissive += 1,
            LicenseCategory::Copyleft => summary.copyleft += 1,
            LicenseCategory::Unknown => summary.unknown += 1,
        }
        if is_denied(pkg.license.as_deref(), deny) {
            summary.denied += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// node_modules with one MIT, one GPL-3.0 and one unlicensed package.
    fn fixture() -> TempDir {
        let root = TempDir::new().unwrap();
        let nm = root.path().join("node_modules");
        for (dir, manifest) in [
            (
                "mit-package",
                r#"{ "name": "mit-package", "version": "1.0.0", "license": "MIT" }"#,
            ),
            (
                "gpl-package",
                r#"{ "name": "gpl-package", "version": "2.0.0", "license": "GPL-3.0" }"#,
            ),
            (
                "no-license",
                r#"{ "name": "no-license", "version": "0.1.0" }"#,
            ),
        ] {
            fs::create_dir_all(nm.join(dir)).unwrap();
            fs::write(nm.join(dir).join("package.json"), manifest).unwrap();
        }
        root
    }

    fn options(deny: &[&str]) -> LicenseCheckOptions {
        LicenseCheckOptions {
            deny: deny.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_categorizes_packages() {
        let root = fixture();
        let result = check_licenses(root.path(), &options(&[])).unwrap();

        assert_eq!(result.packages.len(), 3);
        assert_eq!(result.summary.permissive, 1);
        assert_eq!(result.summary.copyleft, 1);
        assert_eq!(result.summary.unknown, 1);
        assert_eq!(result.summary.denied, 0);
        assert!(result.has_issues);
    }

    #[test]
    fn test_denied_license_counted() {
        let root = fixture();
        let result = check_licenses(root.path(), &options(&["GPL-3.0"])).unwrap();

        assert_eq!(result.summary.denied, 1);
        assert_eq!(result.summary.copyleft, 1);
        assert!(result.has_issues);
    }

    #[test]
    fn test_missing_node_modules_propagates() {
        let root = TempDir::new().unwrap();
        assert!(check_licenses(root.path(), &options(&[])).is_err());
    }

    #[test]
    fn test_summarize_permissive_only() {
        let packages = vec![PackageLicense {
            name: "a".into(),
            version: "1.0.0".into(),
            license: Some("MIT".into()),
            category: LicenseCategory::Permissive,
        }];
        let summary = summarize(&packages, &[]);
        assert_eq!(summary.permissive, 1);
        assert_eq!(summary.denied, 0);
    }

    #[test]
    fn test_denied_permissive_still_flags_issues() {
        let root = TempDir::new().unwrap();
        let pkg = root.path().join("node_modules").join("only-mit");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(
            pkg.join("package.json"),
            r#"{ "name": "only-mit", "version": "1.0.0", "license": "MIT" }"#,
        )
        .unwrap();

        let clean = check_licenses(root.path(), &options(&[])).unwrap();
        assert!(!clean.has_issues);

        let denied = check_licenses(root.path(), &options(&["mit"])).unwrap();
        assert_eq!(denied.summary.permissive, 1);
        assert_eq!(denied.summary.denied, 1);
        assert!(denied.has_issues);
    }

    #[test]
    fn test_category_counts_cover_every_package() {
        let root = fixture();
        let result = check_licenses(root.path(), &options(&["gpl", "mit"])).unwrap();
        let s = &result.summary;
        assert_eq!(s.permissive + s.copyleft + s.unknown, result.packages.len());
        assert_eq!(s.denied, 2);
    }
}
