use super::document::{DomNode, HostDocument, Rect};
use super::{TOOLTIP_ATTRIBUTE, TOOLTIP_BUTTON_CLASSES, TOOLTIP_GAP, TOOLTIP_ID};

/// Page coordinates of the tooltip's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

/// Centers a tooltip of `tooltip_width` under `button`, `TOOLTIP_GAP` below its bottom edge.
pub fn place_below(button: Rect, tooltip_width: f64, scroll: (f64, f64)) -> TooltipPlacement {
    let (scroll_x, scroll_y) = scroll;
    TooltipPlacement {
        left: button.left + scroll_x + button.width / 2.0 - tooltip_width / 2.0,
        top: button.bottom() + scroll_y + TOOLTIP_GAP,
    }
}

/// The single shared `#tooltip` element.
pub struct TooltipPresenter<N> {
    tooltip: Option<N>,
}

impl<N: DomNode> TooltipPresenter<N> {
    pub fn lookup<D: HostDocument<Node = N>>(document: &D) -> Self {
        let tooltip = document.element_by_id(TOOLTIP_ID);
        if tooltip.is_none() {
            log::warn!("#{} not found, tooltips are disabled", TOOLTIP_ID);
        }
        Self { tooltip }
    }

    pub fn element(&self) -> Option<&N> {
        self.tooltip.as_ref()
    }

    /// The tooltip button `node` belongs to: itself or its nearest ancestor
    /// carrying one of the tooltip button classes.
    pub fn button_for(node: &N) -> Option<N> {
        let mut current = Some(node.clone());
        while let Some(element) = current {
            if TOOLTIP_BUTTON_CLASSES
                .iter()
                .any(|class| element.has_class(class))
            {
                return Some(element);
            }
            current = element.parent();
        }
        None
    }

    /// Pointer entered `button`: fill, show, then position the tooltip.
    pub fn show<D: HostDocument<Node = N>>(
        &self,
        document: &D,
        button: &N,
    ) -> Option<TooltipPlacement> {
        let tooltip = self.tooltip.as_ref()?;

        tooltip.set_text(&button.attribute(TOOLTIP_ATTRIBUTE).unwrap_or_default());
        tooltip.set_style("display", "block");

        // offsetWidth is only meaningful once the text is in and the tooltip is displayed
        let placement = place_below(
            button.bounding_rect(),
            tooltip.offset_width(),
            document.scroll_offset(),
        );
        tooltip.set_style("left", &format!("{}px", placement.left));
        tooltip.set_style("top", &format!("{}px", placement.top));
        Some(placement)
    }

    /// Pointer left the button.
    pub fn hide(&self) {
        if let Some(tooltip) = &self.tooltip {
            tooltip.set_style("display", "none");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page_interactions::virtual_document::{VirtualDocument, VirtualNode};

    struct Page {
        doc: VirtualDocument,
        search: VirtualNode,
        tooltip: VirtualNode,
    }

    fn page() -> Page {
        let doc = VirtualDocument::new();
        let header = doc.append(&doc.body(), "header");
        doc.append(&header, "a")
            .with_class("home-link")
            .with_attribute("data-tooltip", "Home")
            .with_rect(Rect::new(10.0, 10.0, 80.0, 30.0));
        let search = doc
            .append(&header, "button")
            .with_class("search-button")
            .with_attribute("data-tooltip", "Search")
            .with_rect(Rect::new(200.0, 40.0, 100.0, 40.0));
        let tooltip = doc
            .append(&doc.body(), "div")
            .with_id("tooltip")
            .with_style("display", "none")
            .with_layout_width(60.0);
        Page {
            doc,
            search,
            tooltip,
        }
    }

    #[test]
    fn test_place_below() {
        let placement = place_below(Rect::new(200.0, 40.0, 100.0, 40.0), 60.0, (0.0, 0.0));
        assert_eq!(placement, TooltipPlacement { left: 220.0, top: 85.0 });

        let scrolled = place_below(Rect::new(200.0, 40.0, 100.0, 40.0), 60.0, (15.0, 300.0));
        assert_eq!(scrolled, TooltipPlacement { left: 235.0, top: 385.0 });
    }

    #[test]
    fn test_enter_then_leave() {
        let page = page();
        let presenter = TooltipPresenter::lookup(&page.doc);

        presenter.show(&page.doc, &page.search);
        assert_eq!(page.tooltip.text(), "Search");
        assert_eq!(page.tooltip.style("display").as_deref(), Some("block"));

        presenter.hide();
        assert_eq!(page.tooltip.style("display").as_deref(), Some("none"));
    }

    #[test]
    fn test_position_uses_rendered_width_and_scroll() {
        let page = page();
        page.doc.set_scroll(0.0, 120.0);
        let presenter = TooltipPresenter::lookup(&page.doc);

        // 200 + 0 + 100/2 - 60/2 = 220; 80 + 120 + 5 = 205
        let placement = presenter.show(&page.doc, &page.search).unwrap();
        assert_eq!(placement, TooltipPlacement { left: 220.0, top: 205.0 });
        assert_eq!(page.tooltip.style("left").as_deref(), Some("220px"));
        assert_eq!(page.tooltip.style("top").as_deref(), Some("205px"));
    }

    #[test]
    fn test_missing_attribute_gives_empty_text() {
        let page = page();
        let details = page
            .doc
            .append(&page.doc.body(), "button")
            .with_class("details-button")
            .with_rect(Rect::new(0.0, 0.0, 40.0, 20.0));
        page.tooltip.set_text("stale");
        let presenter = TooltipPresenter::lookup(&page.doc);

        presenter.show(&page.doc, &details);
        assert_eq!(page.tooltip.text(), "");
        assert_eq!(page.tooltip.style("display").as_deref(), Some("block"));
    }

    #[test]
    fn test_missing_tooltip_is_a_no_op() {
        let doc = VirtualDocument::new();
        let button = doc
            .append(&doc.body(), "button")
            .with_class("search-button")
            .with_attribute("data-tooltip", "Search");
        let presenter = TooltipPresenter::lookup(&doc);

        assert!(presenter.element().is_none());
        assert!(presenter.show(&doc, &button).is_none());
        presenter.hide();
    }

    #[test]
    fn test_button_for_walks_ancestors() {
        let page = page();
        let label = page.doc.append(&page.search, "span");
        let card = page.doc.append(&page.doc.body(), "div").with_class("card");
        let details = page
            .doc
            .append(&card, "button")
            .with_class("details-button");
        let tab = page.doc.append(&page.doc.body(), "button").with_class("tab");

        assert_eq!(TooltipPresenter::button_for(&label), Some(page.search.clone()));
        assert_eq!(TooltipPresenter::button_for(&details), Some(details.clone()));
        assert_eq!(TooltipPresenter::button_for(&card), None);
        assert_eq!(TooltipPresenter::button_for(&tab), None);
    }
}
