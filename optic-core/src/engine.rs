//! The fluent engine façade.
//!
//! `CliEngine` composes the registry, validator, dispatcher, and help
//! renderer behind the public API for registering options and handling the
//! argument vector. Output goes to a caller-supplied sink so the engine
//! itself never owns a console.

use std::io::{self, Write};

use tracing::debug;

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::help::HelpRenderer;
use crate::manifest::OptionsManifest;
use crate::option::OptionSpec;
use crate::registry::OptionRegistry;
use crate::validate::ArgumentValidator;

/// Tokens that request the help table instead of dispatch.
fn is_help_token(token: &str) -> bool {
    token.is_empty()
        || token.eq_ignore_ascii_case("help")
        || token.eq_ignore_ascii_case("-help")
        || token.eq_ignore_ascii_case("-h")
}

/// Fluent option registration and dispatch engine.
///
/// Registration happens first (`option` calls chain with `?`), then a single
/// `handle` call consumes the argument vector. The registry is not meant to
/// be mutated once dispatch has begun.
#[derive(Debug, Default)]
pub struct CliEngine {
    registry: OptionRegistry,
    wait_on_exit: bool,
}

impl CliEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block for one line of input after handling, so interactive
    /// invocations do not close their window immediately.
    pub fn wait_on_exit(mut self) -> Self {
        self.wait_on_exit = true;
        self
    }

    /// Register an option, returning the engine for chaining.
    ///
    /// Fails immediately when the spec's name is empty; a spec whose name an
    /// earlier registration already handles merges its actions into that
    /// registration instead.
    pub fn option(&mut self, spec: OptionSpec) -> Result<&mut Self> {
        self.registry.register(spec)?;
        Ok(self)
    }

    /// Register every option a manifest declares, without actions.
    ///
    /// Later `option` calls with the same names attach behavior through the
    /// normal merge path.
    pub fn options_from_manifest(&mut self, manifest: &OptionsManifest) -> Result<&mut Self> {
        for entry in &manifest.options {
            self.registry.register(entry.to_spec())?;
        }
        Ok(self)
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// The help table for the current registry state.
    pub fn help_text(&self) -> String {
        HelpRenderer::new().render(&self.registry)
    }

    /// Handle the argument vector, writing to stdout.
    pub fn handle(&self, args: &[String]) -> Result<()> {
        self.handle_with_output(args, &mut io::stdout())
    }

    /// Handle the argument vector, writing help or failure messages to `out`.
    ///
    /// An empty vector or a leading help token short-circuits to the help
    /// table. Validation failures are written to `out` and end the call
    /// without an error; only sink failures surface as `Err`.
    pub fn handle_with_output(&self, args: &[String], out: &mut dyn Write) -> Result<()> {
        debug!(count = args.len(), "handling arguments");

        if args.is_empty() || is_help_token(&args[0]) {
            write!(out, "{}", self.help_text())?;
            return self.await_exit(out);
        }

        match ArgumentValidator::new(&self.registry).validate(args) {
            Ok(()) => Dispatcher::new(&self.registry).dispatch(args),
            Err(err) if err.is_validation() => {
                debug!(%err, "validation failed");
                writeln!(out, "{}", err)?;
                return self.await_exit(out);
            }
            Err(err) => return Err(err),
        }

        self.await_exit(out)
    }

    fn await_exit(&self, out: &mut dyn Write) -> Result<()> {
        if self.wait_on_exit {
            writeln!(out, "Press enter to exit..")?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
        }
        Ok(())
    }
}
