use crate::error::{RuntimeError, ScriptError};
use crate::script::ScriptUri;

use super::ScriptRuntime;

/// One-shot dispatch guard around a [`ScriptRuntime`].
pub struct RuntimeHost<R: ScriptRuntime> {
    runtime: R,
    prepared: bool,
}

impl<R: ScriptRuntime> RuntimeHost<R> {
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            prepared: false,
        }
    }

    /// Runs `setup` once with exclusive access to a fresh script context.
    ///
    /// A second call is rejected without invoking the callback.
    pub fn dispatch<F, T>(&mut self, setup: F) -> Result<T, RuntimeError>
    where
        F: FnOnce(&mut R::Context) -> T,
    {
        if self.prepared {
            return Err(RuntimeError::AlreadyDispatched);
        }

        let mut out = None;
        self.runtime.dispatch(|ctx| out = Some(setup(ctx)));
        self.prepared = true;

        // A runtime that returns without running the callback breaks its contract.
        out.ok_or(RuntimeError::Construction {
            reason: "runtime returned from dispatch without running setup".to_string(),
        })
    }

    /// Whether the setup dispatch has completed.
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub(crate) fn load_script(&mut self, uri: &ScriptUri) -> Result<(), ScriptError> {
        self.runtime.load_script(uri)
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingRuntime {
        ctx: Vec<&'static str>,
        loaded: Vec<String>,
    }

    impl ScriptRuntime for CountingRuntime {
        type Context = Vec<&'static str>;

        fn dispatch<F>(&mut self, setup: F)
        where
            F: FnOnce(&mut Self::Context),
        {
            setup(&mut self.ctx);
        }

        fn load_script(&mut self, uri: &ScriptUri) -> Result<(), ScriptError> {
            self.loaded.push(uri.to_string());
            Ok(())
        }
    }

    struct LazyRuntime;

    impl ScriptRuntime for LazyRuntime {
        type Context = ();

        fn dispatch<F>(&mut self, _setup: F)
        where
            F: FnOnce(&mut Self::Context),
        {
        }

        fn load_script(&mut self, _uri: &ScriptUri) -> Result<(), ScriptError> {
            Ok(())
        }
    }

    #[test]
    fn dispatch_runs_setup_and_returns_its_value() {
        let mut host = RuntimeHost::new(CountingRuntime::default());
        let n = host
            .dispatch(|ctx| {
                ctx.push("console");
                ctx.len()
            })
            .unwrap();
        assert_eq!(n, 1);
        assert!(host.is_prepared());
        assert_eq!(host.runtime().ctx, vec!["console"]);
    }

    #[test]
    fn second_dispatch_is_rejected_without_running() {
        let mut host = RuntimeHost::new(CountingRuntime::default());
        host.dispatch(|ctx| ctx.push("first")).unwrap();

        let err = host.dispatch(|ctx| ctx.push("second")).unwrap_err();
        assert!(matches!(err, RuntimeError::AlreadyDispatched));
        assert_eq!(host.runtime().ctx, vec!["first"]);
    }

    #[test]
    fn runtime_that_skips_setup_is_an_error() {
        let mut host = RuntimeHost::new(LazyRuntime);
        assert!(matches!(
            host.dispatch(|_| ()),
            Err(RuntimeError::Construction { .. })
        ));
    }
}
