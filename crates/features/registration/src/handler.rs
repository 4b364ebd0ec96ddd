use crate::error::{RegistrationError, RegistrationErrorExt};
use crate::ports::{ActivationEvent, Navigator, Notifier, Page, Ports, RegistrationSink};
use tracing::{debug, info, warn};
use wreg_domain::config::FormContract;
use wreg_domain::record::RegistrationRecord;

/// Where the form stands after the latest click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Bound and waiting; also the state after a rejected submit.
    #[default]
    AwaitingInput,
    /// A record was assembled and the page was sent to the success location.
    Validated,
}

/// Click-triggered validation and redirect flow bound to one page.
///
/// Created by [`RegistrationFormHandler::initialize`] once the page structure is available.
/// Every click reads the page afresh; nothing is cached between submits.
#[derive(Debug)]
pub struct RegistrationFormHandler<P, N, V, S> {
    page: P,
    ports: Ports<N, V, S>,
    contract: FormContract,
    state: SubmissionState,
}

impl<P, N, V, S> RegistrationFormHandler<P, N, V, S>
where
    P: Page,
    N: Notifier,
    V: Navigator,
    S: RegistrationSink,
{
    /// Binds the flow to `page`.
    ///
    /// # Errors
    /// Returns [`RegistrationError::MissingElement`] when the submit control is not on the page.
    pub fn initialize(
        page: P,
        ports: Ports<N, V, S>,
        contract: FormContract,
    ) -> Result<Self, RegistrationError> {
        let button = &contract.elements.submit_button_id;
        if !page.has_element(button) {
            return Err(RegistrationError::missing_element(button.clone()))
                .context("Binding the submit control");
        }

        info!(control = %button, "Registration handler bound");

        Ok(Self { page, ports, contract, state: SubmissionState::AwaitingInput })
    }

    /// Handles one activation of the submit control.
    ///
    /// The default action is suppressed before anything else, whatever the outcome.
    /// On an empty required field the validation alert is shown and
    /// [`RegistrationError::Validation`] is returned without touching any other port.
    /// Otherwise the record is handed to the sink, the success alert is shown and the
    /// page navigates to the success location.
    ///
    /// # Errors
    /// * [`RegistrationError::Validation`] when `name` or `email` is empty.
    /// * [`RegistrationError::MissingElement`] when a field or the heading is absent.
    /// * [`RegistrationError::Port`] when an alert, the sink or navigation fails, or when the
    ///   page cannot evaluate a configured selector.
    pub fn on_submit_click(
        &mut self,
        event: &impl ActivationEvent,
    ) -> Result<RegistrationRecord, RegistrationError> {
        event.prevent_default();

        let elements = &self.contract.elements;
        let name = self
            .page
            .value_by_id(&elements.name_field_id)
            .ok_or_else(|| RegistrationError::missing_element(elements.name_field_id.clone()))
            .context("Reading attendee name")?;
        let email = self
            .page
            .value_by_selector(&elements.email_field_selector)
            .and_then(|value| {
                value.ok_or_else(|| {
                    RegistrationError::missing_element(elements.email_field_selector.clone())
                })
            })
            .context("Reading attendee email")?;

        if let Some(message) = empty_fields(&name, &email) {
            warn!(%message, "Registration rejected");
            self.state = SubmissionState::AwaitingInput;
            self.ports.notifier.alert(&self.contract.messages.validation_failed)?;
            return Err(RegistrationError::Validation { message: message.into(), context: None });
        }

        let workshop = self
            .page
            .text_by_selector(&elements.workshop_heading_selector)
            .and_then(|text| {
                text.ok_or_else(|| {
                    RegistrationError::missing_element(elements.workshop_heading_selector.clone())
                })
            })
            .context("Reading workshop title")?;

        let record = RegistrationRecord::new(name, email, workshop)
            .ok_or("Record rejected fields that passed validation")?;
        debug!(?record, "Registration assembled");

        self.ports.sink.submit(&record).context("Handing over registration")?;

        self.ports.notifier.alert(&self.contract.messages.success)?;
        self.state = SubmissionState::Validated;

        let target = &self.contract.navigation.success_path;
        info!(%target, workshop = record.workshop(), "Registration accepted, navigating");
        self.ports.navigator.navigate(target)?;

        Ok(record)
    }

    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub const fn contract(&self) -> &FormContract {
        &self.contract
    }

    #[must_use]
    pub const fn ports(&self) -> &Ports<N, V, S> {
        &self.ports
    }

    /// Releases the bound page and ports.
    pub fn into_parts(self) -> (P, Ports<N, V, S>) {
        (self.page, self.ports)
    }
}

/// Describes which required fields are empty, if any. No trimming is applied.
fn empty_fields(name: &str, email: &str) -> Option<&'static str> {
    match (name.is_empty(), email.is_empty()) {
        (false, false) => None,
        (true, false) => Some("name is empty"),
        (false, true) => Some("email is empty"),
        (true, true) => Some("name and email are empty"),
    }
}
