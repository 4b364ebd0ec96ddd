use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// One or both required fields were empty; the user can correct and resubmit.
    #[error("Registration validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A page element the handler depends on is absent.
    #[error("Missing page element{}: {element}", format_context(.context))]
    MissingElement { element: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// An injected capability (alert, navigation, sink) failed.
    #[error("Registration port error{}: {message}", format_context(.context))]
    Port { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RegistrationError {
    /// Shorthand for a [`RegistrationError::MissingElement`] without context.
    pub fn missing_element(element: impl Into<Cow<'static, str>>) -> Self {
        Self::MissingElement { element: element.into(), context: None }
    }

    /// Shorthand for a [`RegistrationError::Port`] without context.
    pub fn port(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Port { message: message.into(), context: None }
    }

    /// `true` when the user can recover by editing the form and clicking again.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub trait RegistrationErrorExt<T> {
    /// Attaches a human readable context to the error.
    ///
    /// # Errors
    /// Passes the original error through with the context set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, RegistrationError>;
}

impl<T> RegistrationErrorExt<T> for Result<T, RegistrationError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                RegistrationError::Validation { context: c, .. }
                | RegistrationError::MissingElement { context: c, .. }
                | RegistrationError::Port { context: c, .. }
                | RegistrationError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<&'static str> for RegistrationError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for RegistrationError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
