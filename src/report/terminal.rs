use crate::license::classifier::is_denied;
use crate::models::{LicenseCategory, LicenseCheckResult, PackageLicense};

/// Condensed per-category counts plus the package total.
pub fn format_summary(result: &LicenseCheckResult) -> String {
    let summary = &result.summary;
    let mut lines = vec![
        "📊 License Summary".to_string(),
        "─────────────────".to_string(),
        format!("✅ Permissive: {}", summary.permissive),
        format!("⚠️  Copyleft:   {}", summary.copyleft),
        format!("❓ Unknown:    {}", summary.unknown),
    ];

    if summary.denied > 0 {
        lines.push(format!("🚫 Denied:     {}", summary.denied));
    }

    lines.push("───────────────────".to_string());
    lines.push(format!("Total packages: {}", result.packages.len()));

    lines.join("\n")
}

/// Copyleft and unknown packages listed individually, followed by the summary.
///
/// Permissive packages are only counted, never listed.
pub fn format_detailed(result: &LicenseCheckResult, deny: &[String]) -> String {
    let mut lines: Vec<String> = Vec::new();

    let copyleft = by_category(&result.packages, LicenseCategory::Copyleft);
    let unknown = by_category(&result.packages, LicenseCategory::Unknown);
    let has_permissive = result
        .packages
        .iter()
        .any(|p| p.category == LicenseCategory::Permissive);

    if !copyleft.is_empty() {
        lines.push("\n⚠️  COPYLEFT LICENSES (Review Required):".to_string());
        lines.push("─────────────────────────────────────────".to_string());
        for pkg in &copyleft {
            let marker = if is_denied(pkg.license.as_deref(), deny) {
                "🚫"
            } else {
                "⚠️ "
            };
            lines.push(format!(
                "{} {}@{} → {}",
                marker,
                pkg.name,
                pkg.version,
                pkg.license.as_deref().unwrap_or("NONE")
            ));
        }
    }

    if !unknown.is_empty() {
        lines.push("\n❓ UNKNOWN/MISSING LICENSES:".to_string());
        lines.push("────────────────────────────".to_string());
        for pkg in &unknown {
            let license = pkg
                .license
                .as_deref()
                .filter(|l| !l.is_empty())
                .unwrap_or("NONE");
            lines.push(format!("❓ {}@{} → {}", pkg.name, pkg.version, license));
        }
    }

    if has_permissive && copyleft.is_empty() && unknown.is_empty() {
        lines.push("\n✅ All licenses are permissive!".to_string());
    }

    lines.push(format!("\n{}", format_summary(result)));

    lines.join("\n")
}

fn by_category(packages: &[PackageLicense], category: LicenseCategory) -> Vec<&PackageLicense> {
    packages.iter().filter(|p| p.category == category).collect()
}
