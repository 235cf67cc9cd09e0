//! Dispatch of validated arguments to option actions.

use crate::registry::OptionRegistry;

/// Walks the argument vector and invokes actions for every matched option.
///
/// The walker keeps a single left-to-right cursor. When a token resolves to a
/// registered option, the following token is consumed as its value even when
/// that token is itself a flag; there is no lookahead. Known limitation,
/// preserved so that accepted command lines stay stable.
pub struct Dispatcher<'a> {
    registry: &'a OptionRegistry,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a OptionRegistry) -> Self {
        Self { registry }
    }

    /// Dispatch every matched option in `args`, left to right.
    ///
    /// Assumes the vector already passed validation: flag-like tokens all
    /// resolve. A matched option at the final position dispatches with an
    /// empty value.
    pub fn dispatch(&self, args: &[String]) {
        let mut i = 0;

        while i < args.len() {
            match self.registry.lookup(&args[i]) {
                Some(spec) => {
                    if let Some(value) = args.get(i + 1) {
                        spec.invoke(value);
                        i += 2;
                    } else {
                        spec.invoke("");
                        i += 1;
                    }
                }
                None => i += 1,
            }
        }
    }
}
