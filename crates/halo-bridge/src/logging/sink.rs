/// Log target used for everything the scripts print.
pub const SCRIPT_TARGET: &str = "halo::script";

/// Severity reported by a script console call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScriptLogLevel {
    Log,
    Info,
    Warn,
    Error,
    Debug,
}

impl ScriptLogLevel {
    fn as_level(self) -> log::Level {
        match self {
            Self::Log | Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error => log::Level::Error,
            Self::Debug => log::Level::Debug,
        }
    }
}

/// Forwards formatted console messages to the host logging facility.
///
/// Handed to the console polyfill during capability registration.
#[derive(Debug, Copy, Clone, Default)]
pub struct LogSink;

impl LogSink {
    pub fn write(&self, message: &str, level: ScriptLogLevel) {
        log::log!(target: SCRIPT_TARGET, level.as_level(), "{message}");
    }
}
