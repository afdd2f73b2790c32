use super::document::{DomNode, HostDocument};
use super::{ACTIVE_CLASS, TAB_CLASS, TAB_CONTENT_CLASS};

/// Shows the panel with id `tab_name` and marks `trigger` as the active tab.
///
/// Every panel is hidden and every trigger deactivated first, so at most one
/// panel is visible afterwards. A missing panel leaves all panels hidden.
/// Returns whether the panel was found.
pub fn open_tab<D: HostDocument>(document: &D, trigger: Option<&D::Node>, tab_name: &str) -> bool {
    for panel in document.elements_by_class(TAB_CONTENT_CLASS) {
        panel.set_style("display", "none");
    }

    for tab in document.elements_by_class(TAB_CLASS) {
        tab.remove_class(ACTIVE_CLASS);
    }

    let found = match document.element_by_id(tab_name) {
        Some(panel) => {
            panel.set_style("display", "block");
            true
        }
        None => {
            log::debug!("tab panel #{} not found", tab_name);
            false
        }
    };

    if let Some(trigger) = trigger {
        trigger.add_class(ACTIVE_CLASS);
    }

    found
}
