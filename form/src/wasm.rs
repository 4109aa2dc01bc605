use std::time::Duration;

use ::log::{error, info, warn};
use ::wasm_bindgen::{closure::Closure, JsCast, JsValue};
use ::web_sys::{Document, Event, HtmlInputElement, HtmlTextAreaElement};

use crate::{
    CommentBlock, CommentRecord, Controller, ControllerError, Element, Field, Page, Scheduler,
    COMMENTS_DISPLAY_ID, ERROR_BANNER_SELECTOR, FIELD_SELECTOR, FORM_ID, HEADING_SELECTOR,
    INPUT_GROUP_SELECTOR, SUCCESS_BANNER_SELECTOR,
};

impl From<ControllerError> for JsValue {
    fn from(err: ControllerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn dom_err(err: JsValue) -> ControllerError {
    ControllerError::Dom(format!("{err:?}"))
}

// the in-crate browser tests mount their own forms
#[cfg(not(test))]
#[::wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(::log::Level::Debug)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    initialize()
}

/// Hooks the comment form's submit event. Fails when the page has no form.
///
/// Called once by `start`; a second call adds a second listener.
pub fn initialize() -> Result<(), JsValue> {
    let document = document()?;
    let form = document
        .get_element_by_id(FORM_ID)
        .ok_or(ControllerError::MissingElement(FORM_ID))?;

    let target = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();

        let page = DomPage {
            document: document.clone(),
            form: target.clone(),
        };

        if let Err(e) = Controller::new(page, TimeoutScheduler).handle_submit() {
            error!("comment form: {}", e);
        }
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    info!("comment form ready");

    Ok(())
}

fn document() -> Result<Document, ControllerError> {
    ::web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ControllerError::MissingElement("document"))
}

#[derive(Clone)]
struct DomElement(::web_sys::Element);

impl Element for DomElement {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            warn!("failed to add class `{}`: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            warn!("failed to remove class `{}`: {:?}", class, e);
        }
    }
}

struct DomField(::web_sys::Element);

impl Field for DomField {
    type Container = DomElement;

    fn name(&self) -> String {
        self.0.get_attribute("name").unwrap_or_default()
    }

    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn container(&self) -> Option<DomElement> {
        self.0
            .closest(INPUT_GROUP_SELECTOR)
            .ok()
            .flatten()
            .map(DomElement)
    }
}

struct DomPage {
    document: Document,
    form: ::web_sys::Element,
}

impl DomPage {
    fn form_element(&self, selector: &'static str) -> Result<DomElement, ControllerError> {
        self.form
            .query_selector(selector)
            .map_err(dom_err)?
            .map(DomElement)
            .ok_or(ControllerError::MissingElement(selector))
    }
}

impl Page for DomPage {
    type Element = DomElement;
    type Field = DomField;

    fn fields(&self) -> Result<Vec<DomField>, ControllerError> {
        let nodes = self
            .form
            .query_selector_all(FIELD_SELECTOR)
            .map_err(dom_err)?;

        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<::web_sys::Element>().ok())
            .map(DomField)
            .collect())
    }

    fn error_banner(&self) -> Result<DomElement, ControllerError> {
        self.form_element(ERROR_BANNER_SELECTOR)
    }

    fn success_banner(&self) -> Result<DomElement, ControllerError> {
        self.form_element(SUCCESS_BANNER_SELECTOR)
    }

    fn insert_comment(&self, record: &CommentRecord) -> Result<DomElement, ControllerError> {
        use ::askama::Template;

        let heading = self
            .document
            .get_element_by_id(COMMENTS_DISPLAY_ID)
            .ok_or(ControllerError::MissingElement(COMMENTS_DISPLAY_ID))?
            .query_selector(HEADING_SELECTOR)
            .map_err(dom_err)?
            .ok_or(ControllerError::MissingElement(HEADING_SELECTOR))?;

        let html = CommentBlock::fresh(record).render()?;
        heading
            .insert_adjacent_html("afterend", &html)
            .map_err(dom_err)?;

        heading
            .next_element_sibling()
            .map(DomElement)
            .ok_or(ControllerError::MissingElement("new comment"))
    }
}

/// `setTimeout` on the current window.
struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let Some(window) = ::web_sys::window() else {
            warn!("no window, dropping timer");
            return;
        };

        let callback = Closure::once_into_js(move || task());
        let timeout = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            timeout,
        ) {
            warn!("setTimeout failed: {:?}", e);
        }
    }
}
