//! Argument validation against the registry.
//!
//! Validation runs in two stages and stops at the first failing stage: every
//! flag-like token must resolve to a registered option, then every required
//! option must be present somewhere in the input.

use crate::error::{Error, Result};
use crate::registry::OptionRegistry;

/// Whether a token looks like a flag rather than a positional value.
pub fn looks_like_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Validates a raw argument vector against a registry.
pub struct ArgumentValidator<'a> {
    registry: &'a OptionRegistry,
}

impl<'a> ArgumentValidator<'a> {
    pub fn new(registry: &'a OptionRegistry) -> Self {
        Self { registry }
    }

    /// Check the argument vector, reporting all unknown flags at once or all
    /// missing required options at once.
    pub fn validate(&self, args: &[String]) -> Result<()> {
        let unknown: Vec<String> = args
            .iter()
            .filter(|a| looks_like_flag(a))
            .filter(|a| self.registry.lookup(a).is_none())
            .cloned()
            .collect();

        if !unknown.is_empty() {
            return Err(Error::UnknownOptions(unknown));
        }

        let missing: Vec<String> = self
            .registry
            .required_missing(args)
            .iter()
            .map(|spec| spec.name().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::MissingRequired(missing));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::OptionSpec;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn registry() -> OptionRegistry {
        let mut registry = OptionRegistry::new();
        registry.register(OptionSpec::new("-test", "optional")).unwrap();
        registry
            .register(OptionSpec::new("-param", "mandatory").alias("-p").required())
            .unwrap();
        registry
    }

    #[test]
    fn accepts_known_flags_with_required_present() {
        let registry = registry();
        let validator = ArgumentValidator::new(&registry);
        assert!(validator.validate(&args(&["-test", "x", "-p", "y"])).is_ok());
    }

    #[test]
    fn reports_all_unknown_flags_in_one_error() {
        let registry = registry();
        let validator = ArgumentValidator::new(&registry);

        let err = validator.validate(&args(&["-bogus", "x", "-other"])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument(s): -bogus, -other");
    }

    #[test]
    fn unknown_flags_shadow_missing_required() {
        let registry = registry();
        let validator = ArgumentValidator::new(&registry);

        // -param is also absent here, but the unknown flag wins.
        let err = validator.validate(&args(&["-bogus"])).unwrap_err();
        assert!(matches!(err, Error::UnknownOptions(_)));
    }

    #[test]
    fn reports_missing_required_by_name() {
        let registry = registry();
        let validator = ArgumentValidator::new(&registry);

        let err = validator.validate(&args(&["-test", "v"])).unwrap_err();
        assert_eq!(err.to_string(), "-param is required.");
    }

    #[test]
    fn positional_tokens_are_not_validated_as_flags() {
        let registry = registry();
        let validator = ArgumentValidator::new(&registry);
        assert!(validator.validate(&args(&["positional", "-p", "y"])).is_ok());
    }
}
