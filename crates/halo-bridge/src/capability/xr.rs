use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Callback the XR module invokes on session state transitions.
pub type SessionStateCallback = Box<dyn Fn(bool) + Send + Sync>;

type Observer = Arc<dyn Fn(bool) + Send + Sync>;

/// Last observed XR session state, shared between the XR module's callback
/// and the bridge facade.
#[derive(Clone, Default)]
pub struct XrActivity {
    active: Arc<AtomicBool>,
    observers: Arc<RwLock<Vec<Observer>>>,
}

impl XrActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Registers an observer notified on every transition.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.observers.write().push(Arc::new(observer));
    }

    /// Builds the callback installed on the XR module.
    pub fn callback(&self) -> SessionStateCallback {
        let activity = self.clone();
        Box::new(move |active| activity.record(active))
    }

    pub(crate) fn record(&self, active: bool) {
        let previous = self.active.swap(active, Ordering::AcqRel);
        log::info!("xr session is {}", if active { "active" } else { "inactive" });
        if previous == active {
            return;
        }

        // Observers run outside the lock so they may subscribe or query freely.
        let observers: Vec<Observer> = self.observers.read().clone();
        for observer in observers {
            observer(active);
        }
    }
}
