//! Browser wiring for [`PageInteractions`] on top of `web_sys`.
//!
//! Every listener is registered once, on the document, and leaked with
//! `.forget()`: it lives as long as the page. Tooltip hover is delegated
//! (`mouseover`/`mouseout`), so buttons Leptos renders or removes later
//! carry no handlers of their own.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, Window};

use super::document::{DomNode, HostDocument, Rect};
use super::{tabs, PageInteractions, TAB_CLASS};

// The installed instance; handlers hold their own `Rc` to it.
thread_local! {
    static INTERACTIONS: RefCell<Option<Rc<PageInteractions<WebDocument>>>> = const { RefCell::new(None) };
}

/// The live browser document.
#[derive(Clone)]
pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn raw(&self) -> &Document {
        &self.document
    }

    fn is_loading(&self) -> bool {
        js_sys::Reflect::get(self.document.as_ref(), &JsValue::from_str("readyState"))
            .ok()
            .and_then(|state| state.as_string())
            .map(|state| state == "loading")
            .unwrap_or(false)
    }
}

impl DomNode for Element {
    fn tag_name(&self) -> String {
        Element::tag_name(self)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = Element::set_attribute(self, name, value);
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn style(&self, property: &str) -> Option<String> {
        let html = self.dyn_ref::<HtmlElement>()?;
        html.style()
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, property: &str, value: &str) {
        // SVG and other non-HTML elements have no inline style we care about
        if let Some(html) = self.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn bounding_rect(&self) -> Rect {
        let bounds = self.get_bounding_client_rect();
        Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height())
    }

    fn offset_width(&self) -> f64 {
        self.dyn_ref::<HtmlElement>()
            .map(|html| f64::from(html.offset_width()))
            .unwrap_or(0.0)
    }
}

impl HostDocument for WebDocument {
    type Node = Element;

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn element_from_point(&self, x: f64, y: f64) -> Option<Element> {
        self.document.element_from_point(x as f32, y as f32)
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn append_to_body(&self, node: &Element) -> bool {
        self.document
            .body()
            .map(|body| body.append_child(node).is_ok())
            .unwrap_or(false)
    }

    fn scroll_offset(&self) -> (f64, f64) {
        (
            self.window.scroll_x().unwrap_or(0.0),
            self.window.scroll_y().unwrap_or(0.0),
        )
    }
}

fn current() -> Option<Rc<PageInteractions<WebDocument>>> {
    INTERACTIONS.with(|slot| slot.borrow().clone())
}

/// Installs the page behaviors once the document is ready
/// (right away if `DOMContentLoaded` has already fired).
pub fn install() {
    let Some(document) = WebDocument::current() else {
        log::warn!("page interactions: no document");
        return;
    };

    if document.is_loading() {
        let on_ready = Closure::wrap(Box::new(activate) as Box<dyn FnMut()>);
        let _ = document
            .raw()
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    } else {
        activate();
    }
}

fn activate() {
    if current().is_some() {
        return;
    }
    let Some(document) = WebDocument::current() else {
        return;
    };

    let interactions = Rc::new(PageInteractions::new(document));
    listen_pointer_moves(&interactions);
    listen_tooltip_hover(&interactions);
    INTERACTIONS.with(|slot| *slot.borrow_mut() = Some(interactions));
    log::debug!("page interactions installed");
}

fn listen_pointer_moves(interactions: &Rc<PageInteractions<WebDocument>>) {
    let state = Rc::clone(interactions);
    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
        state.pointer_moved(f64::from(e.client_x()), f64::from(e.client_y()));
    }) as Box<dyn FnMut(MouseEvent)>);

    let _ = interactions
        .document()
        .raw()
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();
}

fn event_element(target: Option<EventTarget>) -> Option<Element> {
    target?.dyn_into::<Element>().ok()
}

fn listen_tooltip_hover(interactions: &Rc<PageInteractions<WebDocument>>) {
    let over_state = Rc::clone(interactions);
    let on_over = Closure::wrap(Box::new(move |e: MouseEvent| {
        if let Some(target) = event_element(e.target()) {
            over_state.pointer_over(&target);
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    let out_state = Rc::clone(interactions);
    let on_out = Closure::wrap(Box::new(move |e: MouseEvent| {
        if let Some(target) = event_element(e.target()) {
            let related = event_element(e.related_target());
            out_state.pointer_out(&target, related.as_ref());
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    let document = interactions.document().raw();
    let _ = document.add_event_listener_with_callback("mouseover", on_over.as_ref().unchecked_ref());
    let _ = document.add_event_listener_with_callback("mouseout", on_out.as_ref().unchecked_ref());
    on_over.forget();
    on_out.forget();
}

/// Hides the tooltip; called on navigation, when the hovered button is about
/// to be unmounted without a `mouseout`.
pub fn hide_tooltip() {
    if let Some(interactions) = current() {
        interactions.pointer_left();
    }
}

/// The `.tab` element an event came from.
fn tab_trigger(event: &Event) -> Option<Element> {
    let current = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .filter(|element| element.class_list().contains(TAB_CLASS));
    if current.is_some() {
        return current;
    }

    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(&format!(".{TAB_CLASS}")).ok().flatten()
}

/// Tab switch for a click on a `.tab` trigger.
pub fn open_tab_from_event(event: &Event, tab_name: &str) {
    let trigger = tab_trigger(event);
    match current() {
        Some(interactions) => {
            interactions.open_tab(trigger.as_ref(), tab_name);
        }
        None => {
            if let Some(document) = WebDocument::current() {
                tabs::open_tab(&document, trigger.as_ref(), tab_name);
            }
        }
    }
}

/// `openTab(event, tabName)` for plain markup handlers.
#[wasm_bindgen(js_name = openTab)]
pub fn open_tab(event: Event, tab_name: &str) {
    open_tab_from_event(&event, tab_name);
}
