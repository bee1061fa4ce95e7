//! Script resources and the ordered loader.
//!
//! Scripts are addressed with the application-relative `app:///` scheme and
//! loaded one after another into a prepared runtime. Later scripts may rely on
//! globals defined by earlier ones, so the loader never reorders.

mod loader;
mod uri;

pub use loader::ScriptLoader;
pub use uri::{ScriptUri, APP_SCHEME};

/// Load order used when no configuration overrides it.
pub const DEFAULT_SCRIPTS: [&str; 7] = [
    "app:///Scripts/ammo.js",
    "app:///Scripts/recast.js",
    "app:///Scripts/babylon.max.js",
    "app:///Scripts/babylonjs.loaders.js",
    "app:///Scripts/babylonjs.materials.js",
    "app:///Scripts/babylon.gui.js",
    "app:///Scripts/experience.js",
];
