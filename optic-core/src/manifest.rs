//! TOML manifest describing an option table.
//!
//! A manifest declares the options a program accepts (name, alias, required,
//! help) without their behavior; actions are attached in code afterwards and
//! merge onto the declared entries through the normal registration path.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::option::OptionSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsManifest {
    pub cli: CliInfo,
    #[serde(default)]
    pub options: Vec<OptionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliInfo {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One declared option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionEntry {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub help: String,
}

impl OptionEntry {
    /// Build the actionless spec this entry declares.
    pub fn to_spec(&self) -> OptionSpec {
        let mut spec = OptionSpec::new(&self.name, &self.help);
        if let Some(alias) = &self.alias {
            spec = spec.alias(alias);
        }
        if self.required {
            spec = spec.required();
        }
        spec
    }
}

impl OptionsManifest {
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Manifest(format!("Failed to read manifest: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| Error::Manifest(format!("Failed to parse manifest: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MANIFEST: &str = r#"
[cli]
name = "demo"
version = "0.1.0"

[[options]]
name = "-test"
help = "help text is good"

[[options]]
name = "-param"
alias = "-p"
required = true
help = "we like parameters"
"#;

    #[test]
    fn parses_declared_options() {
        let manifest: OptionsManifest = toml::from_str(MANIFEST).unwrap();

        assert_eq!(manifest.cli.name, "demo");
        assert_eq!(manifest.options.len(), 2);

        let param = &manifest.options[1];
        assert_eq!(param.alias.as_deref(), Some("-p"));
        assert!(param.required);

        let spec = param.to_spec();
        assert!(spec.handles("-p"));
        assert!(spec.is_required());
        assert_eq!(spec.action_count(), 0);
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MANIFEST.as_bytes()).unwrap();

        let manifest = OptionsManifest::load(file.path()).unwrap();
        assert_eq!(manifest.options[0].name, "-test");
    }

    #[test]
    fn load_reports_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[cli\nname = ").unwrap();

        let err = OptionsManifest::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = OptionsManifest::load("/nonexistent/options.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }
}
