//! Page-local interaction glue: tab switcher, custom cursor, button tooltips.
//!
//! The three behaviors share nothing but the document. [`PageInteractions`]
//! owns the cursor and tooltip objects and is handed to the event handlers
//! by reference; [`web`] wires it to the browser with document-level listeners,
//! so buttons rendered later need no extra binding.

pub mod clickable;
pub mod cursor;
pub mod document;
pub mod tabs;
pub mod tooltip;
#[cfg(test)]
pub mod virtual_document;
pub mod web;

use std::cell::RefCell;

use self::cursor::{CursorFollower, CursorOpacity};
use self::document::HostDocument;
use self::tooltip::{TooltipPlacement, TooltipPresenter};

pub const TAB_CONTENT_CLASS: &str = "tab-content";
pub const TAB_CLASS: &str = "tab";
pub const ACTIVE_CLASS: &str = "active";

pub const CURSOR_CLASS: &str = "custom-cursor";

pub const TOOLTIP_ID: &str = "tooltip";
pub const TOOLTIP_ATTRIBUTE: &str = "data-tooltip";
pub const TOOLTIP_BUTTON_CLASSES: [&str; 3] = ["search-button", "details-button", "home-link"];
/// Distance between the button's bottom edge and the tooltip, px.
pub const TOOLTIP_GAP: f64 = 5.0;

pub struct PageInteractions<D: HostDocument> {
    document: D,
    cursor: CursorFollower<D::Node>,
    tooltip: TooltipPresenter<D::Node>,
    // button the tooltip is currently shown for
    hovered: RefCell<Option<D::Node>>,
}

impl<D: HostDocument> PageInteractions<D> {
    /// Appends the synthetic cursor and looks up the shared tooltip.
    /// Call once the document is ready.
    pub fn new(document: D) -> Self {
        let cursor = CursorFollower::attach(&document);
        let tooltip = TooltipPresenter::lookup(&document);
        Self {
            document,
            cursor,
            tooltip,
            hovered: RefCell::new(None),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn cursor(&self) -> &CursorFollower<D::Node> {
        &self.cursor
    }

    pub fn open_tab(&self, trigger: Option<&D::Node>, tab_name: &str) -> bool {
        tabs::open_tab(&self.document, trigger, tab_name)
    }

    pub fn pointer_moved(&self, x: f64, y: f64) -> CursorOpacity {
        self.cursor.follow(&self.document, x, y)
    }

    /// `mouseover` on `target`. Entering a tooltip button from outside it
    /// shows the tooltip; moves between the button's own children do nothing.
    pub fn pointer_over(&self, target: &D::Node) -> Option<TooltipPlacement> {
        let button = TooltipPresenter::button_for(target)?;
        if self.hovered.borrow().as_ref() == Some(&button) {
            return None;
        }
        let placement = self.tooltip.show(&self.document, &button);
        *self.hovered.borrow_mut() = Some(button);
        placement
    }

    /// `mouseout` from `target` towards `related`. Leaving a tooltip button
    /// for anything outside it hides the tooltip.
    pub fn pointer_out(&self, target: &D::Node, related: Option<&D::Node>) {
        let Some(button) = TooltipPresenter::button_for(target) else {
            return;
        };
        let still_inside = related
            .and_then(|node| TooltipPresenter::<D::Node>::button_for(node))
            .is_some_and(|other| other == button);
        if !still_inside {
            self.pointer_left();
        }
    }

    /// Hides the tooltip. Also used when the page changes under a hovered
    /// button, since a removed node never gets `mouseout`.
    pub fn pointer_left(&self) {
        self.hovered.borrow_mut().take();
        self.tooltip.hide();
    }
}
