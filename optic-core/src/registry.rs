//! Registry of registered options.
//!
//! The registry owns every `OptionSpec` in registration order and enforces
//! uniqueness by token: registering a spec whose name an existing spec
//! already handles merges the new actions into the existing spec instead of
//! creating a duplicate.

use tracing::debug;

use crate::error::{Error, Result};
use crate::option::OptionSpec;

/// Ordered collection of option specs with merge-on-register semantics.
#[derive(Debug, Default)]
pub struct OptionRegistry {
    options: Vec<OptionSpec>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spec, merging its actions into an existing spec when one
    /// already handles the same name.
    pub fn register(&mut self, spec: OptionSpec) -> Result<()> {
        if spec.name().is_empty() {
            return Err(Error::InvalidName(spec.name().to_string()));
        }

        match self.options.iter_mut().find(|o| o.handles(spec.name())) {
            Some(existing) => {
                debug!(option = %existing.name(), "merging actions into existing option");
                existing.absorb(spec);
            }
            None => {
                debug!(option = %spec.name(), required = spec.is_required(), "registering option");
                self.options.push(spec);
            }
        }

        Ok(())
    }

    /// First spec, in registration order, that handles the given token.
    pub fn lookup(&self, token: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.handles(token))
    }

    /// Required specs whose name and alias both appear nowhere in `tokens`.
    pub fn required_missing<'a>(&'a self, tokens: &[String]) -> Vec<&'a OptionSpec> {
        self.options
            .iter()
            .filter(|o| o.is_required() && !tokens.iter().any(|t| o.handles(t)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
