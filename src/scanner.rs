use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::license::classifier::classify_license;
use crate::models::PackageLicense;

const NODE_MODULES: &str = "node_modules";
const MANIFEST: &str = "package.json";

/// Walk `<root>/node_modules` one level deep (two for `@scope` directories)
/// and read the declared license of every installed package.
///
/// Packages without a readable `package.json` are skipped. Output follows
/// directory-listing order.
pub fn scan_node_modules(root: &Path) -> Result<Vec<PackageLicense>> {
    let node_modules = root.join(NODE_MODULES);
    if !node_modules.exists() {
        bail!("{} not found in {}", NODE_MODULES, root.display());
    }

    let mut packages = Vec::new();

    for entry in read_dir_names(&node_modules)? {
        if entry.starts_with('.') {
            continue;
        }

        let entry_path = node_modules.join(&entry);

        // Scoped packages: node_modules/@scope/name
        if entry.starts_with('@') {
            if !entry_path.is_dir() {
                continue;
            }
            for scoped in read_dir_names(&entry_path)? {
                packages.extend(read_package_info(&entry_path.join(scoped)));
            }
        } else {
            packages.extend(read_package_info(&entry_path));
        }
    }

    Ok(packages)
}

fn read_dir_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Build a record from `<pkg_dir>/package.json`.
///
/// Returns `None` when the manifest is missing, unreadable or not valid JSON.
pub fn read_package_info(pkg_dir: &Path) -> Option<PackageLicense> {
    let manifest_path = pkg_dir.join(MANIFEST);
    if !manifest_path.exists() {
        return None;
    }

    let content = std::fs::read_to_string(&manifest_path).ok()?;
    let manifest: Value = serde_json::from_str(&content).ok()?;

    let name = non_empty_str(&manifest, "name")
        .map(str::to_string)
        .unwrap_or_else(|| {
            pkg_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
    let version = non_empty_str(&manifest, "version")
        .unwrap_or("unknown")
        .to_string();
    let license = license_from_manifest(&manifest);
    let category = classify_license(license.as_deref());

    Some(PackageLicense {
        name,
        version,
        license,
        category,
    })
}

fn non_empty_str<'a>(manifest: &'a Value, key: &str) -> Option<&'a str> {
    manifest
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Shapes a `license` / `licenses[]` entry takes across package.json generations.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseField {
    /// `"license": "MIT"`
    Id(String),
    /// `"license": { "type": "MIT", "url": "..." }` (legacy)
    Typed {
        #[serde(rename = "type")]
        kind: String,
    },
}

impl LicenseField {
    fn parse(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }
}

/// Extract the declared license from a parsed `package.json`.
///
/// Tried in order: a `license` string, a `license` object's `type`, then the
/// first entry of a legacy `licenses` array (its `type`, or the entry itself
/// when it is a plain string).
pub fn license_from_manifest(manifest: &Value) -> Option<String> {
    match manifest.get("license").and_then(LicenseField::parse) {
        Some(LicenseField::Id(id)) => return Some(id),
        Some(LicenseField::Typed { kind }) if !kind.is_empty() => return Some(kind),
        _ => {}
    }

    let first = manifest
        .get("licenses")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())?;

    match LicenseField::parse(first)? {
        LicenseField::Id(id) => Some(id),
        LicenseField::Typed { kind } => Some(kind),
    }
}
