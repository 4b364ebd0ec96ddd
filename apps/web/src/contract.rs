use wreg_registration::{FormContract, RegistrationError};

/// Turns the optional JSON override embedded in the page into a contract.
///
/// No override, or an override made only of whitespace, yields the default contract.
/// Keys left out of the override keep their defaults.
///
/// # Errors
/// Returns [`RegistrationError::Internal`] when the override is not valid JSON for the contract.
pub fn resolve_contract(raw: Option<&str>) -> Result<FormContract, RegistrationError> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Ok(FormContract::default());
    };

    serde_json::from_str(raw).map_err(|e| RegistrationError::Internal {
        message: e.to_string().into(),
        context: Some("Parsing the registration contract override".into()),
    })
}
