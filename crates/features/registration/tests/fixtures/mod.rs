use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use wreg_registration::*;

/// In-memory page. Clones share state, so a test can edit the page after binding.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    values: Rc<RefCell<HashMap<String, String>>>,
    selected: Rc<RefCell<HashMap<String, String>>>,
    texts: Rc<RefCell<HashMap<String, String>>>,
    unparsable: Rc<RefCell<HashSet<String>>>,
}

impl FakePage {
    /// A page carrying every element of the default contract.
    pub fn registration(name: &str, email: &str, heading: &str) -> Self {
        Self::default()
            .with_id("checkout-btn", "")
            .with_id("nameField", name)
            .with_selector(r#"input[name="emailField"]"#, email)
            .with_text("h1", heading)
    }

    #[must_use]
    pub fn with_id(self, id: &str, value: &str) -> Self {
        self.set_value(id, value);
        self
    }

    #[must_use]
    pub fn with_selector(self, selector: &str, value: &str) -> Self {
        self.selected.borrow_mut().insert(selector.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn with_text(self, selector: &str, text: &str) -> Self {
        self.set_text(selector, text);
        self
    }

    #[must_use]
    pub fn without_id(self, id: &str) -> Self {
        self.values.borrow_mut().remove(id);
        self
    }

    #[must_use]
    pub fn without_selector(self, selector: &str) -> Self {
        self.selected.borrow_mut().remove(selector);
        self.texts.borrow_mut().remove(selector);
        self
    }

    /// Makes the page reject `selector` the way a browser rejects invalid CSS.
    #[must_use]
    pub fn with_unparsable_selector(self, selector: &str) -> Self {
        self.unparsable.borrow_mut().insert(selector.to_owned());
        self
    }

    fn check_selector(&self, selector: &str) -> Result<(), RegistrationError> {
        if self.unparsable.borrow().contains(selector) {
            return Err(RegistrationError::port(format!("'{selector}' is not a valid selector")));
        }
        Ok(())
    }

    pub fn set_value(&self, id: &str, value: &str) {
        self.values.borrow_mut().insert(id.to_owned(), value.to_owned());
    }

    pub fn set_text(&self, selector: &str, text: &str) {
        self.texts.borrow_mut().insert(selector.to_owned(), text.to_owned());
    }
}

impl Page for FakePage {
    fn has_element(&self, id: &str) -> bool {
        self.values.borrow().contains_key(id)
    }

    fn value_by_id(&self, id: &str) -> Option<String> {
        self.values.borrow().get(id).cloned()
    }

    fn value_by_selector(&self, selector: &str) -> Result<Option<String>, RegistrationError> {
        self.check_selector(selector)?;
        Ok(self.selected.borrow().get(selector).cloned())
    }

    fn text_by_selector(&self, selector: &str) -> Result<Option<String>, RegistrationError> {
        self.check_selector(selector)?;
        Ok(self.texts.borrow().get(selector).cloned())
    }
}

/// Everything the handler did to the outside world, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCall {
    Alert(String),
    Navigate(String),
    Submit(RegistrationRecord),
}

pub type CallLog = Rc<RefCell<Vec<UiCall>>>;

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier(pub CallLog);

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) -> Result<(), RegistrationError> {
        self.0.borrow_mut().push(UiCall::Alert(message.to_owned()));
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator(pub CallLog);

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) -> Result<(), RegistrationError> {
        self.0.borrow_mut().push(UiCall::Navigate(path.to_owned()));
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSink(pub CallLog);

impl RegistrationSink for RecordingSink {
    fn submit(&mut self, record: &RegistrationRecord) -> Result<(), RegistrationError> {
        self.0.borrow_mut().push(UiCall::Submit(record.clone()));
        Ok(())
    }
}

/// A navigator whose host refuses every location.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockedNavigator;

impl Navigator for BlockedNavigator {
    fn navigate(&mut self, _path: &str) -> Result<(), RegistrationError> {
        Err(RegistrationError::port("navigation blocked"))
    }
}

/// A notifier whose host refuses to show any message.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockedNotifier;

impl Notifier for BlockedNotifier {
    fn alert(&mut self, _message: &str) -> Result<(), RegistrationError> {
        Err(RegistrationError::port("alerts suppressed"))
    }
}

/// A sink that refuses every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefusingSink;

impl RegistrationSink for RefusingSink {
    fn submit(&mut self, _record: &RegistrationRecord) -> Result<(), RegistrationError> {
        Err(RegistrationError::port("registration store unavailable"))
    }
}

/// Counts how often the native action was suppressed.
#[derive(Debug, Default)]
pub struct Click {
    prevented: Cell<u32>,
}

impl Click {
    pub fn prevented(&self) -> u32 {
        self.prevented.get()
    }
}

impl ActivationEvent for Click {
    fn prevent_default(&self) {
        self.prevented.set(self.prevented.get() + 1);
    }
}

pub type TestHandler =
    RegistrationFormHandler<FakePage, RecordingNotifier, RecordingNavigator, RecordingSink>;

/// Binds a handler with recording ports that all write to one shared log.
pub fn bind(page: FakePage) -> (Result<TestHandler, RegistrationError>, CallLog) {
    let log = CallLog::default();
    let ports = Ports::new(RecordingNotifier(log.clone()), RecordingNavigator(log.clone()))
        .with_sink(RecordingSink(log.clone()));
    (initialize(page, ports), log)
}
