//! Workshop registration feature slice.
//!
//! Binds a validate-then-redirect flow to a registration page through injected
//! [`ports`]: the page is read through [`Page`], alerts go through [`Notifier`],
//! navigation through [`Navigator`]. Persistence is a [`RegistrationSink`] whose only
//! shipped implementation, [`DisabledSink`], sends nothing.
//!
//! ```rust,ignore
//! let mut handler = wreg_registration::initialize(page, Ports::new(alerts, location))?;
//! handler.on_submit_click(&click)?;
//! ```

mod error;
mod handler;
pub mod ports;

pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::handler::{RegistrationFormHandler, SubmissionState};
pub use crate::ports::{
    ActivationEvent, DisabledSink, Navigator, Notifier, Page, Ports, RegistrationSink,
};
pub use wreg_domain::config::FormContract;
pub use wreg_domain::record::RegistrationRecord;

/// Binds the handler to `page` using the default page contract.
///
/// # Errors
/// Returns [`RegistrationError::MissingElement`] when the submit control is absent.
pub fn initialize<P, N, V, S>(
    page: P,
    ports: Ports<N, V, S>,
) -> Result<RegistrationFormHandler<P, N, V, S>, RegistrationError>
where
    P: Page,
    N: Notifier,
    V: Navigator,
    S: RegistrationSink,
{
    RegistrationFormHandler::initialize(page, ports, FormContract::default())
}
