//! Query interface over the host document.
//!
//! The page behaviors never touch `web_sys` directly; they go through
//! [`HostDocument`] and [`DomNode`] so that the same code runs against the
//! live browser DOM ([`super::web::WebDocument`]) and against an in-memory
//! tree in tests (`VirtualDocument`).
//!
//! All mutating methods take `&self`: DOM nodes are shared handles.

/// Viewport-relative bounding box, as returned by `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment, matching how hit testing treats edges.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// A handle to one element of the host document.
pub trait DomNode: Clone + PartialEq {
    /// Tag name as the host reports it (browsers upper-case HTML tags).
    fn tag_name(&self) -> String;

    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    fn parent(&self) -> Option<Self>;

    /// Inline style property, e.g. `display` or `left`.
    fn style(&self, property: &str) -> Option<String>;
    fn set_style(&self, property: &str, value: &str);

    fn set_text(&self, text: &str);

    fn bounding_rect(&self) -> Rect;

    /// Rendered width; 0 while the element is not laid out.
    fn offset_width(&self) -> f64;
}

/// Capability queries against the live document tree.
pub trait HostDocument {
    type Node: DomNode;

    /// Elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Topmost element at viewport coordinates; `None` outside the viewport.
    fn element_from_point(&self, x: f64, y: f64) -> Option<Self::Node>;

    fn create_element(&self, tag: &str) -> Option<Self::Node>;

    /// Appends `node` as the last child of `<body>`. Returns `false` if there is no body.
    fn append_to_body(&self, node: &Self::Node) -> bool;

    /// Current page scroll `(scrollX, scrollY)`.
    fn scroll_offset(&self) -> (f64, f64);
}
