//! Literal strings of the registration page contract.
//!
//! The messages are user-facing and must match byte for byte.

/// Id of the control that triggers the submission.
pub const SUBMIT_BUTTON_ID: &str = "checkout-btn";
/// Id of the attendee name input.
pub const NAME_FIELD_ID: &str = "nameField";
/// Selector of the attendee email input (matched by its `name` attribute).
pub const EMAIL_FIELD_SELECTOR: &str = r#"input[name="emailField"]"#;
/// Selector of the heading that names the workshop.
pub const WORKSHOP_HEADING_SELECTOR: &str = "h1";

/// Alert shown when a required field is empty.
pub const VALIDATION_FAILED_MESSAGE: &str = "Please fill all required fields!";
/// Alert shown right before leaving the page.
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "✅ Registration Successful!";

/// Relative location of the static success page.
pub const SUCCESS_PAGE_PATH: &str = "../success.html";

/// Id of the optional `<script type="application/json">` block overriding the contract.
pub const CONFIG_ELEMENT_ID: &str = "registration-config";
