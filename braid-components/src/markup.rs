//! A rich-text terminal renderer.
//!
//! [`html`] is an alternative to [`Format::format`]: instead of returning
//! the assembled text as a bare string, it wraps it in a single [`Node`].
//! The core never learns this type's structure; it only receives
//! [`Node::text`] as the base continuation.

use std::fmt;

use braid_core::{Format, IntoArgs};

/// A minimal rich-text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A plain text node; the content is escaped when displayed.
    Text(String),
}

impl Node {
    /// Creates a text node from already-assembled text.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(content) => write!(f, "{}", html_escape::encode_text(content)),
        }
    }
}

/// Terminal application that wraps the assembled text in a single text
/// node.
pub fn html<F, T>(format: &F, args: T) -> Node
where
    F: Format,
    T: IntoArgs<Nested = F::Args>,
{
    format.render(args, Node::text)
}

#[cfg(test)]
mod tests {
    use braid_core::{Format, from_fn, lit};

    use super::*;

    #[test]
    fn html_wraps_the_assembled_text_in_one_node() {
        let string = from_fn(|value: &str| value.to_string());
        let greeting = lit("Hi ").then(string);
        assert_eq!(html(&greeting, ("Kris",)), Node::Text("Hi Kris".into()));
    }

    #[test]
    fn node_text_escapes_on_display() {
        let node = Node::text("a < b & c");
        assert_eq!(node.to_string(), "a &lt; b &amp; c");
    }
}
