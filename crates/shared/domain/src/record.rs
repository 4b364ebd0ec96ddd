use serde::Serialize;

/// A transient registration assembled on a successful submit.
///
/// Only ever built from non-empty `name` and `email`; the fields are private so the
/// check in [`RegistrationRecord::new`] cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRecord {
    name: String,
    email: String,
    workshop: String,
}

impl RegistrationRecord {
    /// Builds a record, returning `None` when `name` or `email` is empty.
    ///
    /// Whitespace counts as content: `" "` is a valid name.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        workshop: impl Into<String>,
    ) -> Option<Self> {
        let name = name.into();
        let email = email.into();
        if name.is_empty() || email.is_empty() {
            return None;
        }
        Some(Self { name, email, workshop: workshop.into() })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Workshop title as read from the page heading at submit time.
    #[must_use]
    pub fn workshop(&self) -> &str {
        &self.workshop
    }
}
