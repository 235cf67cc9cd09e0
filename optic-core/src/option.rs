//! Option descriptions and the per-dispatch context passed to actions.
//!
//! An `OptionSpec` describes one named option: its primary flag token, an
//! optional alias, whether it must be present, its help text, and the ordered
//! actions to run when it matches.

use std::fmt;

use tracing::debug;

/// Action invoked when an option matches an argument token.
pub type OptionAction = Box<dyn Fn(OptionContext)>;

/// The context of handling one matched option.
///
/// Built fresh for every dispatch and handed to each action by value; actions
/// must not expect later mutation to be visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionContext {
    /// The option's canonical name (not the alias it may have matched on).
    pub argument: String,

    /// The value token consumed for the option, empty if none followed.
    pub value: String,
}

impl fmt::Display for OptionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.argument, self.value)
    }
}

/// Description of a single command-line option.
pub struct OptionSpec {
    name: String,
    alias: Option<String>,
    required: bool,
    help_text: String,
    actions: Vec<OptionAction>,
}

impl OptionSpec {
    /// Create a spec for the given flag token with its help text.
    pub fn new(name: impl Into<String>, help_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            required: false,
            help_text: help_text.into(),
            actions: Vec::new(),
        }
    }

    /// Set an alternate token that resolves to this option.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Mark the option as mandatory.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Append an action to run when the option matches.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(OptionContext) + 'static,
    {
        self.actions.push(Box::new(action));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias_token(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Whether this spec matches the given token, by name or alias.
    ///
    /// Matching uses an ASCII case fold so it stays deterministic across
    /// environments.
    pub fn handles(&self, token: &str) -> bool {
        self.name.eq_ignore_ascii_case(token)
            || self
                .alias
                .as_deref()
                .is_some_and(|alias| alias.eq_ignore_ascii_case(token))
    }

    /// Run every registered action with a context built from `value`.
    pub fn invoke(&self, value: &str) {
        debug!(option = %self.name, value, actions = self.actions.len(), "dispatching option");

        for action in &self.actions {
            action(OptionContext {
                argument: self.name.clone(),
                value: value.to_string(),
            });
        }
    }

    /// Fold another spec's actions into this one, preserving order.
    pub(crate) fn absorb(&mut self, other: OptionSpec) {
        self.actions.extend(other.actions);
    }
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("required", &self.required)
            .field("help_text", &self.help_text)
            .field("actions", &self.actions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn handles_matches_name_and_alias_case_insensitively() {
        let spec = OptionSpec::new("-param", "a parameter").alias("-p");

        assert!(spec.handles("-param"));
        assert!(spec.handles("-PARAM"));
        assert!(spec.handles("-p"));
        assert!(spec.handles("-P"));
        assert!(!spec.handles("-other"));
    }

    #[test]
    fn handles_without_alias_only_matches_name() {
        let spec = OptionSpec::new("-test", "");
        assert!(spec.handles("-TeSt"));
        assert!(!spec.handles("-t"));
    }

    #[test]
    fn invoke_runs_actions_in_order_with_canonical_name() {
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = seen.clone();
        let second = seen.clone();
        let spec = OptionSpec::new("-param", "")
            .alias("-p")
            .action(move |ctx| first.borrow_mut().push(format!("a:{}", ctx)))
            .action(move |ctx| second.borrow_mut().push(format!("b:{}", ctx)));

        spec.invoke("value");

        assert_eq!(
            *seen.borrow(),
            vec!["a:-param = value".to_string(), "b:-param = value".to_string()]
        );
    }

    #[test]
    fn context_displays_argument_and_value() {
        let ctx = OptionContext {
            argument: "-test".into(),
            value: "x".into(),
        };
        assert_eq!(ctx.to_string(), "-test = x");
    }
}
