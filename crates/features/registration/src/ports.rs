//! Capabilities the handler borrows from its host.
//!
//! The browser binding implements these over `web-sys`; tests implement them in memory.

use crate::error::RegistrationError;
use tracing::debug;
use wreg_domain::record::RegistrationRecord;

/// Read-only view of the page the handler is bound to.
pub trait Page {
    /// Whether an element with the given id is present.
    fn has_element(&self, id: &str) -> bool;

    /// Current `value` of the form control with the given id.
    fn value_by_id(&self, id: &str) -> Option<String>;

    /// Current `value` of the first form control matching a CSS selector.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Port`] when the host cannot evaluate `selector`.
    fn value_by_selector(&self, selector: &str) -> Result<Option<String>, RegistrationError>;

    /// Text content of the first element matching a CSS selector.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Port`] when the host cannot evaluate `selector`.
    fn text_by_selector(&self, selector: &str) -> Result<Option<String>, RegistrationError>;
}

/// The UI activation that triggered a submit.
pub trait ActivationEvent {
    /// Suppresses the control's native behavior (form submission, link follow).
    fn prevent_default(&self);
}

/// Blocking user-facing messages.
pub trait Notifier {
    /// Shows `message` and returns once the user dismissed it.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Port`] when the host refuses to show the message.
    fn alert(&mut self, message: &str) -> Result<(), RegistrationError>;
}

/// Page navigation.
pub trait Navigator {
    /// Moves the browsing context to `path`, resolved against the current location.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Port`] when the host rejects the location.
    fn navigate(&mut self, path: &str) -> Result<(), RegistrationError>;
}

/// Where an assembled record would be persisted.
pub trait RegistrationSink {
    /// Hands over a freshly assembled record.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Port`] when the record could not be accepted.
    fn submit(&mut self, record: &RegistrationRecord) -> Result<(), RegistrationError>;
}

/// Persistence placeholder: logs the payload that a backend would receive and drops it.
///
/// No request leaves the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSink;

impl RegistrationSink for DisabledSink {
    fn submit(&mut self, record: &RegistrationRecord) -> Result<(), RegistrationError> {
        let payload = serde_json::to_string(record).map_err(|e| RegistrationError::Internal {
            message: e.to_string().into(),
            context: Some("Serializing registration payload".into()),
        })?;
        debug!(%payload, "Persistence disabled, registration not sent");
        Ok(())
    }
}

/// The capabilities a bound handler owns.
#[derive(Debug)]
pub struct Ports<N, V, S = DisabledSink> {
    pub notifier: N,
    pub navigator: V,
    pub sink: S,
}

impl<N: Notifier, V: Navigator> Ports<N, V> {
    /// Ports with persistence disabled.
    pub const fn new(notifier: N, navigator: V) -> Self {
        Self { notifier, navigator, sink: DisabledSink }
    }
}

impl<N: Notifier, V: Navigator, S: RegistrationSink> Ports<N, V, S> {
    /// Replaces the persistence sink.
    pub fn with_sink<T: RegistrationSink>(self, sink: T) -> Ports<N, V, T> {
        Ports { notifier: self.notifier, navigator: self.navigator, sink }
    }
}
