use crate::error::{RuntimeError, ScriptError};
use crate::runtime::{RuntimeHost, ScriptRuntime};

use super::ScriptUri;

/// Loads scripts into a prepared runtime, strictly in caller order.
pub struct ScriptLoader<'a, R: ScriptRuntime> {
    host: &'a mut RuntimeHost<R>,
}

impl<'a, R: ScriptRuntime> ScriptLoader<'a, R> {
    /// Fails if capability registration has not run yet.
    pub fn new(host: &'a mut RuntimeHost<R>) -> Result<Self, RuntimeError> {
        if !host.is_prepared() {
            return Err(RuntimeError::NotPrepared);
        }
        Ok(Self { host })
    }

    pub fn load_script(&mut self, uri: &ScriptUri) -> Result<(), ScriptError> {
        log::debug!("loading script {uri}");
        self.host.load_script(uri)
    }

    /// Loads every script in order, stopping at the first failure.
    ///
    /// Returns the number of scripts loaded.
    pub fn load_all<'u, I>(&mut self, uris: I) -> Result<usize, ScriptError>
    where
        I: IntoIterator<Item = &'u ScriptUri>,
    {
        let mut loaded = 0;
        for uri in uris {
            self.load_script(uri)?;
            loaded += 1;
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        loaded: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl ScriptRuntime for Recorder {
        type Context = ();

        fn dispatch<F>(&mut self, setup: F)
        where
            F: FnOnce(&mut Self::Context),
        {
            setup(&mut ());
        }

        fn load_script(&mut self, uri: &ScriptUri) -> Result<(), ScriptError> {
            if self.fail_on == Some(uri.as_str()) {
                return Err(ScriptError::Execution {
                    uri: uri.to_string(),
                    message: "ReferenceError".to_string(),
                });
            }
            self.loaded.push(uri.to_string());
            Ok(())
        }
    }

    fn uris(raw: &[&str]) -> Vec<ScriptUri> {
        raw.iter().map(|r| ScriptUri::parse(r).unwrap()).collect()
    }

    #[test]
    fn refuses_unprepared_runtime() {
        let mut host = RuntimeHost::new(Recorder::default());
        assert!(matches!(
            ScriptLoader::new(&mut host),
            Err(RuntimeError::NotPrepared)
        ));
    }

    #[test]
    fn loads_in_given_order() {
        let mut host = RuntimeHost::new(Recorder::default());
        host.dispatch(|_| ()).unwrap();

        let list = uris(&super::super::DEFAULT_SCRIPTS);
        let n = ScriptLoader::new(&mut host).unwrap().load_all(&list).unwrap();

        assert_eq!(n, 7);
        assert_eq!(host.runtime().loaded, super::super::DEFAULT_SCRIPTS.to_vec());
    }

    #[test]
    fn stops_at_first_failure() {
        let mut host = RuntimeHost::new(Recorder {
            fail_on: Some("app:///b.js"),
            ..Default::default()
        });
        host.dispatch(|_| ()).unwrap();

        let list = uris(&["app:///a.js", "app:///b.js", "app:///c.js"]);
        let err = ScriptLoader::new(&mut host)
            .unwrap()
            .load_all(&list)
            .unwrap_err();

        assert!(matches!(err, ScriptError::Execution { .. }));
        assert_eq!(host.runtime().loaded, vec!["app:///a.js"]);
    }
}
