use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScriptError;

/// Scheme prefix for application bundled resources.
pub const APP_SCHEME: &str = "app:///";

/// Validated `app:///` script address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScriptUri(String);

impl ScriptUri {
    pub fn parse(raw: &str) -> Result<Self, ScriptError> {
        let malformed = || ScriptError::MalformedUri {
            uri: raw.to_string(),
        };

        let rest = raw.strip_prefix(APP_SCHEME).ok_or_else(malformed)?;
        if rest.is_empty() || rest.ends_with('/') {
            return Err(malformed());
        }

        // Only plain relative segments; the resource must stay inside the bundle.
        let escapes = Path::new(rest)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return Err(malformed());
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the resource relative to the application root.
    pub fn relative_path(&self) -> &str {
        &self.0[APP_SCHEME.len()..]
    }

    /// Resolves the resource against an application asset root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }

    /// Reads the script source from disk.
    ///
    /// Helper for runtime implementations that execute plain source text.
    pub fn read_source(&self, root: &Path) -> Result<String, ScriptError> {
        let path = self.resolve(root);
        std::fs::read_to_string(&path).map_err(|e| ScriptError::Unresolved {
            uri: self.0.clone(),
            reason: format!("{}: {e}", path.display()),
        })
    }
}

impl fmt::Display for ScriptUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ScriptUri {
    type Error = ScriptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ScriptUri> for String {
    fn from(value: ScriptUri) -> Self {
        value.0
    }
}
