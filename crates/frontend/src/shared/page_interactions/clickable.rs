use super::document::DomNode;

/// One simple selector of the clickable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Tag(&'static str),
    Attribute {
        name: &'static str,
        value: &'static str,
    },
    Class(&'static str),
}

/// `a, button, [role="button"], input, .clickable`
pub const CLICKABLE_SELECTORS: [Selector; 5] = [
    Selector::Tag("a"),
    Selector::Tag("button"),
    Selector::Attribute {
        name: "role",
        value: "button",
    },
    Selector::Tag("input"),
    Selector::Class("clickable"),
];

impl Selector {
    pub fn matches<N: DomNode>(&self, node: &N) -> bool {
        match *self {
            Selector::Tag(tag) => node.tag_name().eq_ignore_ascii_case(tag),
            Selector::Attribute { name, value } => node.attribute(name).as_deref() == Some(value),
            Selector::Class(class) => node.has_class(class),
        }
    }
}

/// Clickable if `node` or any of its ancestors matches one of the selectors.
pub fn is_clickable<N: DomNode>(node: &N) -> bool {
    let mut current = Some(node.clone());
    while let Some(element) = current {
        if CLICKABLE_SELECTORS.iter().any(|s| s.matches(&element)) {
            return true;
        }
        current = element.parent();
    }
    false
}
