//! Connectivity status seam.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Synchronous "is online" source.
///
/// The dispatcher reads the current status once per call and never caches
/// it; hosts keep the flag current from their own network-event hooks.
pub trait Connectivity: Send + Sync {
    /// Current connectivity status; truthy means online.
    fn is_online(&self) -> bool;
}

/// Shared atomic connectivity flag.
///
/// Clones observe the same flag, so one handle can live in the dispatcher
/// while the host flips the other from its network callbacks.
#[derive(Debug, Clone)]
pub struct SharedConnectivity {
    online: Arc<AtomicBool>,
}

impl SharedConnectivity {
    /// Create a flag with an initial status.
    pub fn new(online: bool) -> Self {
        Self {
            online: Arc::new(AtomicBool::new(online)),
        }
    }

    /// Update the status.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }
}

impl Default for SharedConnectivity {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Connectivity for SharedConnectivity {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_flag() {
        let connectivity = SharedConnectivity::new(true);
        let handle = connectivity.clone();
        handle.set_online(false);
        assert!(!connectivity.is_online());
        handle.set_online(true);
        assert!(connectivity.is_online());
    }
}
