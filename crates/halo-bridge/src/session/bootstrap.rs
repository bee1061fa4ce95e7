use crate::error::SessionError;

use super::ArPlatform;

/// Where the bootstrap is in its lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionPhase {
    /// Provider exists, session not yet running.
    Prepared,
    Running,
    Stopped,
}

/// Owns the world-tracking provider and, once running, the session.
///
/// Field order matters: the session is dropped before the provider set and
/// the provider, which must outlive it.
pub struct SessionBootstrap<A: ArPlatform> {
    session: Option<A::Session>,
    providers: Option<A::ProviderSet>,
    provider: A::Provider,
    _config: A::Config,
    phase: SessionPhase,
}

impl<A: ArPlatform> SessionBootstrap<A> {
    /// Creates the tracking configuration and provider.
    pub fn prepare(ar: &mut A) -> Result<Self, SessionError> {
        let config = ar.create_world_tracking_config();
        let provider = ar.create_world_tracking_provider(&config)?;
        Ok(Self {
            session: None,
            providers: None,
            provider,
            _config: config,
            phase: SessionPhase::Prepared,
        })
    }

    pub fn provider(&self) -> &A::Provider {
        &self.provider
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Starts the session with a provider set holding exactly the world-tracking provider.
    ///
    /// Only the first call from `Prepared` has an effect.
    pub fn run(&mut self, ar: &mut A) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Prepared {
            log::debug!("ar session already {:?}; run ignored", self.phase);
            return Ok(());
        }

        let mut session = ar.create_session()?;
        let providers = ar.create_data_provider_set(std::slice::from_ref(&self.provider));
        ar.run_session(&mut session, &providers);

        self.session = Some(session);
        self.providers = Some(providers);
        self.phase = SessionPhase::Running;
        log::info!("ar session running");
        Ok(())
    }

    /// Stops a running session. The provider stays alive until `self` drops.
    pub fn stop(&mut self, ar: &mut A) {
        if let Some(mut session) = self.session.take() {
            ar.stop_session(&mut session);
            drop(session);
            self.providers = None;
            log::info!("ar session stopped");
        }
        self.phase = SessionPhase::Stopped;
    }
}
