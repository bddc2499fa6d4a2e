//! Selector node types.
//!
//! - [`SimpleSelector`]: one compound selector, e.g. `a.nav[href]:hover`
//! - [`CombinedSelector`]: two nodes joined by a [`Combinator`], e.g. `ul > li`
//!
//! Both implement [`SelectorNode`], so combined selectors nest arbitrarily:
//!
//! ```rust
//! use css_selector::{combine, element, Stringify};
//!
//! let inner = combine(element("a"), ">", element("b"));
//! let outer = combine(inner, "~", element("c"));
//! assert_eq!(outer.stringify(), "a > b ~ c");
//! ```

mod combined;
mod simple;

pub use combined::{CombinedSelector, Combinator};
pub use simple::{SelectorParts, SimpleSelector};

use crate::formatter::Format;

/// A node that renders to a CSS selector fragment.
///
/// `write_to` is the only rendering hook; [`Stringify`] is derived from it
/// for every node, so a node renders identically on its own and nested
/// inside a [`CombinedSelector`].
pub trait SelectorNode {
    /// Appends the rendered node to `out`.
    fn write_to(&self, out: &mut String, format: Format);
}

/// Rendering entry points available on every [`SelectorNode`].
pub trait Stringify {
    /// Renders the node in the given format.
    fn format(&self, format: Format) -> String;

    /// Renders the node in the default padded format.
    fn stringify(&self) -> String;
}

impl<T: SelectorNode + ?Sized> Stringify for T {
    fn format(&self, format: Format) -> String {
        let mut out = String::new();
        self.write_to(&mut out, format);
        out
    }

    fn stringify(&self) -> String {
        self.format(Format::Padded)
    }
}
