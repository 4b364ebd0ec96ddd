use tracing::{debug, error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};
use wreg_domain::constants::CONFIG_ELEMENT_ID;
use wreg_logger::Logger;
use wreg_registration::{
    ActivationEvent, FormContract, Navigator, Notifier, Page, Ports, RegistrationError,
    RegistrationErrorExt, RegistrationFormHandler, RegistrationRecord,
};

/// The live document, read through the DOM on every call.
#[derive(Debug)]
struct DomPage {
    document: Document,
}

impl Page for DomPage {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn value_by_id(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id).map(control_value)
    }

    fn value_by_selector(&self, selector: &str) -> Result<Option<String>, RegistrationError> {
        Ok(self.query(selector)?.map(control_value))
    }

    fn text_by_selector(&self, selector: &str) -> Result<Option<String>, RegistrationError> {
        Ok(self.query(selector)?.map(|e| e.text_content().unwrap_or_default()))
    }
}

impl DomPage {
    /// First match for `selector`; a selector the browser cannot parse is a port error.
    fn query(&self, selector: &str) -> Result<Option<Element>, RegistrationError> {
        self.document.query_selector(selector).map_err(|e| {
            let reason = e.as_string().unwrap_or_else(|| format!("{e:?}"));
            RegistrationError::port(format!("selector '{selector}' rejected: {reason}"))
        })
    }
}

/// `value` of a form control; elements without one read as empty.
fn control_value(element: Element) -> String {
    let element = match element.dyn_into::<HtmlInputElement>() {
        Ok(input) => return input.value(),
        Err(element) => element,
    };
    let element = match element.dyn_into::<HtmlTextAreaElement>() {
        Ok(area) => return area.value(),
        Err(element) => element,
    };
    element.dyn_into::<HtmlSelectElement>().map(|select| select.value()).unwrap_or_default()
}

#[derive(Debug)]
struct WindowAlert {
    window: Window,
}

impl Notifier for WindowAlert {
    fn alert(&mut self, message: &str) -> Result<(), RegistrationError> {
        self.window.alert_with_message(message).map_err(js_port_error)
    }
}

#[derive(Debug)]
struct WindowLocation {
    window: Window,
}

impl Navigator for WindowLocation {
    fn navigate(&mut self, path: &str) -> Result<(), RegistrationError> {
        self.window.location().set_href(path).map_err(js_port_error)
    }
}

struct DomEvent<'a>(&'a Event);

impl ActivationEvent for DomEvent<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

fn js_port_error(value: JsValue) -> RegistrationError {
    RegistrationError::port(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Module start hook: installs logging, then binds once the document structure is parsed.
///
/// # Errors
/// Only when there is no window or document at all; binding failures are logged instead.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if let Err(e) = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init() {
        web_sys::console::warn_1(&e.to_string().into());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        debug!("Waiting for DOMContentLoaded");
        let target = document.clone();
        let on_ready = Closure::once(move || bind_and_report(&window, &document));
        target.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        // Lives as long as the page.
        on_ready.forget();
    } else {
        bind_and_report(&window, &document);
    }

    Ok(())
}

fn bind_and_report(window: &Window, document: &Document) {
    if let Err(e) = bind(window, document) {
        error!(error = %e, "Registration handler not bound");
    }
}

fn bind(window: &Window, document: &Document) -> Result<(), RegistrationError> {
    let contract = load_contract(document);
    let button_id = contract.elements.submit_button_id.clone();

    let page = DomPage { document: document.clone() };
    let ports = Ports::new(
        WindowAlert { window: window.clone() },
        WindowLocation { window: window.clone() },
    );
    let mut handler = RegistrationFormHandler::initialize(page, ports, contract)?;

    let button = document
        .get_element_by_id(&button_id)
        .ok_or_else(|| RegistrationError::missing_element(button_id))
        .context("Attaching the click listener")?;

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        report(&handler.on_submit_click(&DomEvent(&event)));
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(js_port_error)
        .context("Attaching the click listener")?;
    on_click.forget();

    Ok(())
}

fn load_contract(document: &Document) -> FormContract {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|e| e.text_content());
    crate::contract::resolve_contract(raw.as_deref()).unwrap_or_else(|e| {
        error!(error = %e, "Ignoring contract override, using defaults");
        FormContract::default()
    })
}

fn report(result: &Result<RegistrationRecord, RegistrationError>) {
    match result {
        Ok(record) => info!(workshop = record.workshop(), "Registration submitted"),
        Err(e) if e.is_recoverable() => debug!(error = %e, "Waiting for corrected input"),
        Err(e) => error!(error = %e, "Registration flow failed"),
    }
}
