//! Serialization tests (require the `serde` feature).

#![cfg(feature = "serde")]

use css_selector::{element, Combinator, Format, PartKind, SelectorParts, SimpleSelector, Stringify};

#[test]
fn test_parts_round_trip() {
    let selector = element("a")
        .class("nav")
        .and_then(|s| s.pseudo_class("hover"))
        .unwrap();

    let json = serde_json::to_string(&selector.parts()).unwrap();
    assert_eq!(json, r#"{"element":"a","classes":["nav"],"pseudo_classes":["hover"]}"#);

    let parts: SelectorParts = serde_json::from_str(&json).unwrap();
    let restored = SimpleSelector::from_parts(parts);
    assert_eq!(restored.stringify(), "a.nav:hover");
    assert!(!restored.ptr_eq(&selector));
}

#[test]
fn test_parts_missing_fields_default() {
    let parts: SelectorParts = serde_json::from_str(r#"{"id":"main"}"#).unwrap();
    assert_eq!(SimpleSelector::from(parts).stringify(), "#main");
}

#[test]
fn test_combinator_as_token() {
    assert_eq!(serde_json::to_string(&Combinator::Child).unwrap(), r#"">""#);
    let custom: Combinator = serde_json::from_str(r#""||""#).unwrap();
    assert_eq!(custom, Combinator::Custom("||".to_string()));
    let known: Combinator = serde_json::from_str(r#""~""#).unwrap();
    assert_eq!(known, Combinator::SubsequentSibling);
}

#[test]
fn test_enum_names() {
    assert_eq!(serde_json::to_string(&PartKind::PseudoClass).unwrap(), r#""pseudo_class""#);
    assert_eq!(serde_json::to_string(&Format::Compact).unwrap(), r#""compact""#);
}
