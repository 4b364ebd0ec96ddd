use crate::constants::{
    EMAIL_FIELD_SELECTOR, NAME_FIELD_ID, REGISTRATION_SUCCESS_MESSAGE, SUBMIT_BUTTON_ID,
    SUCCESS_PAGE_PATH, VALIDATION_FAILED_MESSAGE, WORKSHOP_HEADING_SELECTOR,
};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Everything the handler needs to know about the page it is bound to.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormContractInner {
    pub elements: ElementsConfig,
    pub messages: MessagesConfig,
    pub navigation: NavigationConfig,
}

/// Thin Arc-wrapped contract for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormContract {
    #[serde(flatten, default)]
    inner: Arc<FormContractInner>,
}

impl Deref for FormContract {
    type Target = FormContractInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for FormContract {
    fn deref_mut(&mut self) -> &mut FormContractInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the handler finds its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementsConfig {
    pub submit_button_id: String,
    pub name_field_id: String,
    pub email_field_selector: String,
    pub workshop_heading_selector: String,
}

/// User-facing alert texts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub validation_failed: String,
    pub success: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Relative to the current page location.
    pub success_path: String,
}

// --- Default ---

impl Default for ElementsConfig {
    fn default() -> Self {
        Self {
            submit_button_id: SUBMIT_BUTTON_ID.to_owned(),
            name_field_id: NAME_FIELD_ID.to_owned(),
            email_field_selector: EMAIL_FIELD_SELECTOR.to_owned(),
            workshop_heading_selector: WORKSHOP_HEADING_SELECTOR.to_owned(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            validation_failed: VALIDATION_FAILED_MESSAGE.to_owned(),
            success: REGISTRATION_SUCCESS_MESSAGE.to_owned(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { success_path: SUCCESS_PAGE_PATH.to_owned() }
    }
}
