//! Simple (compound) selector built part by part.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{SelectorError, SelectorResult};
use crate::formatter::Format;
use crate::part::PartKind;

use super::{SelectorNode, Stringify};

/// Parts of one simple selector, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorParts {
    /// Tag name.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub element: Option<String>,

    /// Id, without the leading `#`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub id: Option<String>,

    /// Classes in insertion order, without the leading `.`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub classes: Vec<String>,

    /// Attribute conditions in insertion order, without brackets.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub attributes: Vec<String>,

    /// Pseudo-classes in insertion order, without the leading `:`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub pseudo_classes: Vec<String>,

    /// Pseudo-element, without the leading `::`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pseudo_element: Option<String>,
}

impl SelectorParts {
    /// Whether at least one part of `kind` is present.
    pub fn has(&self, kind: PartKind) -> bool {
        match kind {
            PartKind::Element => self.element.is_some(),
            PartKind::Id => self.id.is_some(),
            PartKind::Class => !self.classes.is_empty(),
            PartKind::Attribute => !self.attributes.is_empty(),
            PartKind::PseudoClass => !self.pseudo_classes.is_empty(),
            PartKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// Whether no part of any kind is present.
    pub fn is_empty(&self) -> bool {
        !PartKind::ALL.iter().any(|kind| self.has(*kind))
    }

    /// Checks whether a part of `kind` may be added in the current state.
    ///
    /// Re-evaluated from field state on every call: the duplicate check
    /// applies to non-repeatable kinds only, then any present later-stage
    /// kind is an ordering violation.
    pub fn check(&self, kind: PartKind) -> SelectorResult<()> {
        if !kind.is_repeatable() && self.has(kind) {
            return Err(SelectorError::Duplicate { part: kind });
        }

        if let Some(conflicting) = kind.later_stages().iter().find(|later| self.has(**later)) {
            return Err(SelectorError::Order {
                part: kind,
                conflicting: *conflicting,
            });
        }

        Ok(())
    }

    /// Stores a part without validation.
    fn insert(&mut self, kind: PartKind, value: String) {
        match kind {
            PartKind::Element => self.element = Some(value),
            PartKind::Id => self.id = Some(value),
            PartKind::Class => self.classes.push(value),
            PartKind::Attribute => self.attributes.push(value),
            PartKind::PseudoClass => self.pseudo_classes.push(value),
            PartKind::PseudoElement => self.pseudo_element = Some(value),
        }
    }

    fn write_to(&self, out: &mut String) {
        if let Some(ref element) = self.element {
            PartKind::Element.write(out, element);
        }
        if let Some(ref id) = self.id {
            PartKind::Id.write(out, id);
        }
        for class in &self.classes {
            PartKind::Class.write(out, class);
        }
        for attribute in &self.attributes {
            PartKind::Attribute.write(out, attribute);
        }
        for pseudo_class in &self.pseudo_classes {
            PartKind::PseudoClass.write(out, pseudo_class);
        }
        if let Some(ref pseudo_element) = self.pseudo_element {
            PartKind::PseudoElement.write(out, pseudo_element);
        }
    }
}

/// Builder for one simple selector such as `div#main.container:hover`.
///
/// A `SimpleSelector` is a handle onto shared state: cloning it, or passing
/// it to [`combine`](crate::combine), does not copy the parts. Every part
/// method mutates that shared state and returns another handle to it, so
/// calls chain with `?`:
///
/// ```rust
/// use css_selector::{element, SelectorResult, Stringify};
///
/// fn build() -> SelectorResult<String> {
///     let selector = element("div").id("main")?.class("container")?;
///     Ok(selector.stringify())
/// }
///
/// assert_eq!(build().unwrap(), "div#main.container");
/// ```
///
/// A rejected part leaves the selector unchanged.
#[derive(Clone, Default)]
pub struct SimpleSelector {
    parts: Rc<RefCell<SelectorParts>>,
}

impl SimpleSelector {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector holding the given parts.
    ///
    /// The grouped layout of [`SelectorParts`] cannot express an ordering
    /// violation, so no validation is needed.
    pub fn from_parts(parts: SelectorParts) -> Self {
        Self {
            parts: Rc::new(RefCell::new(parts)),
        }
    }

    /// Create a selector seeded with a single part.
    pub(crate) fn seeded(kind: PartKind, value: String) -> Self {
        let mut parts = SelectorParts::default();
        parts.insert(kind, value);
        Self::from_parts(parts)
    }

    /// Snapshot of the current parts.
    pub fn parts(&self) -> SelectorParts {
        self.parts.borrow().clone()
    }

    /// Whether no part has been added yet.
    pub fn is_empty(&self) -> bool {
        self.parts.borrow().is_empty()
    }

    /// Whether both handles refer to the same selector state.
    pub fn ptr_eq(&self, other: &SimpleSelector) -> bool {
        Rc::ptr_eq(&self.parts, &other.parts)
    }

    /// Independent copy whose later mutations are not shared with `self`.
    pub fn deep_clone(&self) -> Self {
        Self::from_parts(self.parts())
    }

    /// Add a part of the given kind.
    pub fn add(&self, kind: PartKind, value: impl Into<String>) -> SelectorResult<Self> {
        let value = value.into();
        let mut parts = self.parts.borrow_mut();

        if let Err(err) = parts.check(kind) {
            log::debug!(target: "css_selector", "rejected {kind} {value:?}: {err:?}");
            return Err(err);
        }

        log::trace!(target: "css_selector", "adding {kind} {value:?}");
        parts.insert(kind, value);
        drop(parts);

        Ok(self.clone())
    }

    /// Set the element (tag name).
    pub fn element(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.add(PartKind::Element, value)
    }

    /// Set the id.
    pub fn id(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.add(PartKind::Id, value)
    }

    /// Add a class.
    pub fn class(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.add(PartKind::Class, value)
    }

    /// Add an attribute condition, given without brackets.
    pub fn attr(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.add(PartKind::Attribute, value)
    }

    /// Add a pseudo-class.
    pub fn pseudo_class(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.add(PartKind::PseudoClass, value)
    }

    /// Set the pseudo-element.
    pub fn pseudo_element(&self, value: impl Into<String>) -> SelectorResult<Self> {
        self.add(PartKind::PseudoElement, value)
    }
}

impl SelectorNode for SimpleSelector {
    fn write_to(&self, out: &mut String, _format: Format) {
        self.parts.borrow().write_to(out);
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl fmt::Debug for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SimpleSelector")
            .field(&*self.parts.borrow())
            .finish()
    }
}

impl From<SelectorParts> for SimpleSelector {
    fn from(parts: SelectorParts) -> Self {
        Self::from_parts(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let selector = SimpleSelector::new();
        assert!(selector.is_empty());
        assert_eq!(selector.stringify(), "");
    }

    #[test]
    fn test_full_selector() {
        let selector = SimpleSelector::new()
            .element("input")
            .and_then(|s| s.id("email"))
            .and_then(|s| s.class("field"))
            .and_then(|s| s.attr("type=\"email\""))
            .and_then(|s| s.pseudo_class("focus"))
            .and_then(|s| s.pseudo_element("placeholder"))
            .unwrap();
        assert_eq!(
            selector.stringify(),
            "input#email.field[type=\"email\"]:focus::placeholder"
        );
    }

    #[test]
    fn test_repeatable_parts_keep_insertion_order() {
        let selector = SimpleSelector::new();
        selector.class("b").unwrap();
        selector.class("a").unwrap();
        selector.class("b").unwrap();
        selector.attr("x").unwrap();
        selector.attr("y").unwrap();
        selector.pseudo_class("hover").unwrap();
        selector.pseudo_class("first-child").unwrap();
        assert_eq!(selector.stringify(), ".b.a.b[x][y]:hover:first-child");
    }

    #[test]
    fn test_duplicate_singletons() {
        for kind in [PartKind::Element, PartKind::Id, PartKind::PseudoElement] {
            let selector = SimpleSelector::new();
            selector.add(kind, "x").unwrap();
            let err = selector.add(kind, "y").unwrap_err();
            assert_eq!(err, SelectorError::Duplicate { part: kind });
        }
    }

    #[test]
    fn test_duplicate_checked_before_order() {
        let selector = SimpleSelector::new();
        selector.id("main").unwrap();
        selector.class("wide").unwrap();
        let err = selector.id("other").unwrap_err();
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_every_earlier_stage_rejected() {
        for later in PartKind::ALL {
            for earlier in PartKind::ALL.into_iter().filter(|k| k.stage() < later.stage()) {
                let selector = SimpleSelector::new();
                selector.add(later, "x").unwrap();
                let err = selector.add(earlier, "y").unwrap_err();
                assert_eq!(
                    err,
                    SelectorError::Order {
                        part: earlier,
                        conflicting: later,
                    }
                );
            }
        }
    }

    #[test]
    fn test_order_reports_earliest_conflict() {
        let selector = SimpleSelector::new();
        selector.attr("href").unwrap();
        selector.pseudo_class("hover").unwrap();
        let err = selector.class("link").unwrap_err();
        assert_eq!(
            err,
            SelectorError::Order {
                part: PartKind::Class,
                conflicting: PartKind::Attribute,
            }
        );
    }

    #[test]
    fn test_rejected_part_leaves_state_unchanged() {
        let selector = SimpleSelector::new();
        selector.pseudo_element("after").unwrap();
        let before = selector.parts();
        assert!(selector.pseudo_class("hover").is_err());
        assert!(selector.pseudo_element("before").is_err());
        assert_eq!(selector.parts(), before);
        assert_eq!(selector.stringify(), "::after");
    }

    #[test]
    fn test_empty_string_counts_as_set() {
        let selector = SimpleSelector::new();
        selector.element("").unwrap();
        assert!(selector.element("div").unwrap_err().is_duplicate());
    }

    #[test]
    fn test_returned_handle_shares_state() {
        let selector = SimpleSelector::new();
        let returned = selector.element("p").unwrap();
        assert!(returned.ptr_eq(&selector));
        returned.class("lead").unwrap();
        assert_eq!(selector.stringify(), "p.lead");
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let selector = SimpleSelector::new().element("p").unwrap();
        let copy = selector.deep_clone();
        assert!(!copy.ptr_eq(&selector));
        copy.class("lead").unwrap();
        assert_eq!(selector.stringify(), "p");
        assert_eq!(copy.stringify(), "p.lead");
    }

    #[test]
    fn test_from_parts() {
        let parts = SelectorParts {
            element: Some("a".to_string()),
            classes: vec!["nav".to_string(), "active".to_string()],
            ..SelectorParts::default()
        };
        let selector = SimpleSelector::from(parts);
        assert_eq!(selector.stringify(), "a.nav.active");
        assert!(selector.id("x").unwrap_err().is_order());
    }

    #[test]
    fn test_display_and_debug() {
        let selector = SimpleSelector::new().id("main").unwrap();
        assert_eq!(selector.to_string(), "#main");
        assert!(format!("{selector:?}").starts_with("SimpleSelector("));
    }
}
