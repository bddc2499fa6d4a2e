//! Entry points for building selectors.
//!
//! Each seed function returns a fresh [`SimpleSelector`] holding one part.
//! Further parts are chained on the returned selector; [`combine`] joins two
//! nodes into a [`CombinedSelector`]. None of these functions hold state.

use crate::part::PartKind;
use crate::selector::{CombinedSelector, Combinator, SelectorNode, SimpleSelector};

/// Start a selector with an element (tag name).
///
/// ```rust
/// use css_selector::{element, Stringify};
///
/// let selector = element("div").id("main")?.class("container")?.class("draggable")?;
/// assert_eq!(selector.stringify(), "div#main.container.draggable");
/// # Ok::<(), css_selector::SelectorError>(())
/// ```
pub fn element(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(PartKind::Element, value.into())
}

/// Start a selector with an id.
pub fn id(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(PartKind::Id, value.into())
}

/// Start a selector with a class.
pub fn class(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(PartKind::Class, value.into())
}

/// Start a selector with an attribute condition, given without brackets.
pub fn attr(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(PartKind::Attribute, value.into())
}

/// Start a selector with a pseudo-class.
pub fn pseudo_class(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(PartKind::PseudoClass, value.into())
}

/// Start a selector with a pseudo-element.
pub fn pseudo_element(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::seeded(PartKind::PseudoElement, value.into())
}

/// Join two selector nodes with a combinator.
///
/// The token is written with one space on each side, whatever it is:
///
/// ```rust
/// use css_selector::{combine, element, Stringify};
///
/// assert_eq!(combine(element("div"), "+", element("span")).stringify(), "div + span");
/// assert_eq!(combine(element("tr"), " ", element("td")).stringify(), "tr   td");
/// ```
pub fn combine<L, R>(left: L, combinator: impl Into<Combinator>, right: R) -> CombinedSelector
where
    L: SelectorNode + 'static,
    R: SelectorNode + 'static,
{
    CombinedSelector::new(left, combinator, right)
}
