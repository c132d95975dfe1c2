use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.licensecheck/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// License policy rules.
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Policy rules applied on every run, before any `--deny` flags.
#[derive(Debug, Default, Deserialize)]
pub struct PolicyConfig {
    /// License substrings that count as denied (case-insensitive).
    #[serde(default)]
    pub deny: Vec<String>,
}

impl Config {
    /// Config deny patterns followed by `extra`, dropping exact duplicates.
    pub fn deny_list(&self, extra: &[String]) -> Vec<String> {
        let mut deny: Vec<String> = Vec::with_capacity(self.policy.deny.len() + extra.len());
        for pattern in self.policy.deny.iter().chain(extra) {
            if !deny.contains(pattern) {
                deny.push(pattern.clone());
            }
        }
        deny
    }
}

/// Load the policy configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.licensecheck/config.toml`
/// 3. `~/.config/licensecheck/config.toml`
/// 4. Built-in [`Config::default`] (empty deny list)
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".licensecheck").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("licensecheck")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_policy() {
        let cfg: Config = toml::from_str(
            r#"
[policy]
deny = ["GPL-3.0", "AGPL"]
"#,
        )
        .unwrap();
        assert_eq!(cfg.policy.deny, vec!["GPL-3.0", "AGPL"]);
    }

    #[test]
    fn test_empty_file_is_default() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.policy.deny.is_empty());
    }

    #[test]
    fn test_deny_list_merges_in_order() {
        let cfg = Config {
            policy: PolicyConfig {
                deny: vec!["GPL-3.0".into(), "AGPL".into()],
            },
        };
        let merged = cfg.deny_list(&["AGPL".to_string(), "SSPL".to_string()]);
        assert_eq!(merged, vec!["GPL-3.0", "AGPL", "SSPL"]);
    }

    #[test]
    fn test_load_project_config() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join(".licensecheck");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "[policy]\ndeny = [\"LGPL\"]\n").unwrap();

        let cfg = load_config(root.path(), None).unwrap();
        assert_eq!(cfg.policy.deny, vec!["LGPL"]);
    }

    #[test]
    fn test_override_wins_and_errors_are_fatal() {
        let root = TempDir::new().unwrap();
        let custom = root.path().join("custom.toml");
        fs::write(&custom, "[policy]\ndeny = [\"EPL\"]\n").unwrap();
        let cfg = load_config(root.path(), Some(&custom)).unwrap();
        assert_eq!(cfg.policy.deny, vec!["EPL"]);

        let broken = root.path().join("broken.toml");
        fs::write(&broken, "[policy\ndeny = ").unwrap();
        assert!(load_config(root.path(), Some(&broken)).is_err());

        let missing = root.path().join("missing.toml");
        assert!(load_config(root.path(), Some(&missing)).is_err());
    }
}
