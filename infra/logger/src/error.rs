use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Occurs if a global tracing subscriber has already been initialized in the current process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// Internal logic errors.
    #[error("Internal logger error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Invalid configuration supplied to the logger builder.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait LoggerErrorExt<T> {
    /// Attaches a human readable context to the error, if any.
    ///
    /// # Errors
    /// Passes the original error through with the context set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoggerError>;
}

impl<T> LoggerErrorExt<T> for Result<T, LoggerError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                LoggerError::Subscriber { context: c, .. }
                | LoggerError::Internal { context: c, .. }
                | LoggerError::InvalidConfiguration { context: c, .. } => {
                    *c = Some(context.into());
                }
            }
            e
        })
    }
}

impl<T> LoggerErrorExt<T> for Result<T, tracing_subscriber::util::TryInitError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoggerError> {
        self.map_err(|source| LoggerError::Subscriber { source, context: Some(context.into()) })
    }
}

impl From<tracing_subscriber::util::TryInitError> for LoggerError {
    #[inline]
    fn from(source: tracing_subscriber::util::TryInitError) -> Self {
        Self::Subscriber { source, context: None }
    }
}

impl From<&'static str> for LoggerError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for LoggerError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
