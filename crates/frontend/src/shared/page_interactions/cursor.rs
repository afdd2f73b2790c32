use super::clickable::is_clickable;
use super::document::{DomNode, HostDocument};
use super::CURSOR_CLASS;

/// What a pointer move did to the cursor's opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorOpacity {
    /// Over a clickable element: the native pointer takes over.
    Transparent,
    Opaque,
    /// Nothing under the pointer; the previous opacity stays.
    Unchanged,
}

/// Synthetic cursor element that tracks the pointer.
pub struct CursorFollower<N> {
    element: Option<N>,
}

impl<N: DomNode> CursorFollower<N> {
    /// Creates `div.custom-cursor` and appends it to `<body>`.
    pub fn attach<D: HostDocument<Node = N>>(document: &D) -> Self {
        let element = document.create_element("div").and_then(|div| {
            div.add_class(CURSOR_CLASS);
            if document.append_to_body(&div) {
                Some(div)
            } else {
                log::warn!("custom cursor not attached: document has no body");
                None
            }
        });
        Self { element }
    }

    pub fn element(&self) -> Option<&N> {
        self.element.as_ref()
    }

    /// Moves the cursor to the pointer and fades it over clickable elements.
    pub fn follow<D: HostDocument<Node = N>>(&self, document: &D, x: f64, y: f64) -> CursorOpacity {
        let Some(cursor) = &self.element else {
            return CursorOpacity::Unchanged;
        };

        cursor.set_style("left", &format!("{x}px"));
        cursor.set_style("top", &format!("{y}px"));

        let Some(under) = document.element_from_point(x, y) else {
            return CursorOpacity::Unchanged;
        };

        if is_clickable(&under) {
            cursor.set_style("opacity", "0");
            CursorOpacity::Transparent
        } else {
            cursor.set_style("opacity", "1");
            CursorOpacity::Opaque
        }
    }
}
