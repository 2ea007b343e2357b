// ABOUTME: Optional observer notified while a supplied token is validated
// ABOUTME: Keeps the codec silent unless the caller asks for progress notices

/// Receives progress notices from token validation.
///
/// Observers never see the token itself.
pub trait ValidationObserver {
    /// Called once, before any check runs, when a non-empty token is supplied
    fn validating(&self);
}

/// Forwards validation notices to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ValidationObserver for TracingObserver {
    fn validating(&self) {
        tracing::info!("validating provided bootstrap token");
    }
}

impl<F: Fn()> ValidationObserver for F {
    fn validating(&self) {
        self()
    }
}
