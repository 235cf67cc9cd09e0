//! Help rendering for registered options.
//!
//! The renderer produces a tab-separated text table, plus a serializable
//! projection of the registry for tooling that wants the same data as JSON.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::OptionRegistry;

/// Serializable view of the registered options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpData {
    pub options: Vec<OptionHelp>,
}

/// One option's help entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionHelp {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub help: String,
}

/// Renders the help table for a registry.
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Build the serializable projection, one entry per registered option in
    /// registration order.
    pub fn help_data(&self, registry: &OptionRegistry) -> HelpData {
        HelpData {
            options: registry
                .iter()
                .map(|spec| OptionHelp {
                    name: spec.name().to_string(),
                    alias: spec.alias_token().map(str::to_string),
                    required: spec.is_required(),
                    help: spec.help_text().to_string(),
                })
                .collect(),
        }
    }

    /// Render the text table: a header row followed by one row per option,
    /// columns tab-separated, alias shown as `n/a` when absent, required
    /// shown as `y` or left blank.
    pub fn render(&self, registry: &OptionRegistry) -> String {
        let mut output = String::new();
        output.push_str("arg\talias\trequired\tdesc\n");

        for spec in registry.iter() {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                spec.name(),
                spec.alias_token().unwrap_or("n/a"),
                if spec.is_required() { "y" } else { "" },
                spec.help_text(),
            ));
        }

        output
    }

    /// Render the same data as pretty-printed JSON.
    pub fn render_json(&self, registry: &OptionRegistry) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.help_data(registry))?)
    }
}

impl Default for HelpRenderer {
    fn default() -> Self {
        Self::new()
    }
}
