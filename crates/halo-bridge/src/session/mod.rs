//! Session Bootstrap.
//!
//! World-tracking setup happens in two phases around the rest of
//! initialization: the provider is created first so the device configuration
//! can capture it, and the session only runs once scripts are loaded so that
//! scripts querying tracking state see a fully wired environment.

mod bootstrap;

pub use bootstrap::{SessionBootstrap, SessionPhase};

use crate::error::SessionError;

/// AR platform services.
pub trait ArPlatform {
    type Config;
    /// Shared handle; cloned into the device configuration.
    type Provider: Clone;
    type ProviderSet;
    type Session;

    fn create_world_tracking_config(&mut self) -> Self::Config;

    fn create_world_tracking_provider(
        &mut self,
        config: &Self::Config,
    ) -> Result<Self::Provider, SessionError>;

    fn create_data_provider_set(&mut self, providers: &[Self::Provider]) -> Self::ProviderSet;

    fn create_session(&mut self) -> Result<Self::Session, SessionError>;

    fn run_session(&mut self, session: &mut Self::Session, providers: &Self::ProviderSet);

    fn stop_session(&mut self, session: &mut Self::Session);
}
