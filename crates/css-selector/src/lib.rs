//! # css-selector
//!
//! A Rust library for building CSS selector strings part by part.
//!
//! This crate provides:
//! - **Simple selectors**: element, id, class, attribute, pseudo-class and
//!   pseudo-element parts, validated for order and uniqueness as they are added
//! - **Combined selectors**: two selectors joined by a combinator, nestable to
//!   any depth
//!
//! ## Usage
//!
//! ```rust
//! use css_selector::{combine, element, id, Stringify};
//!
//! let nav = element("nav").id("top")?;
//! let link = element("a").class("active")?.pseudo_class("hover")?;
//!
//! let selector = combine(nav, ">", link);
//! assert_eq!(selector.stringify(), "nav#top > a.active:hover");
//!
//! // Parts must follow the CSS order and singletons may not repeat.
//! assert!(id("main").id("other").is_err());
//! # Ok::<(), css_selector::SelectorError>(())
//! ```
//!
//! ## Part Order
//!
//! | Stage | Part | Method | Output | Repeatable |
//! |-------|------|--------|--------|------------|
//! | 0 | element | `element` | `div` | no |
//! | 1 | id | `id` | `#main` | no |
//! | 2 | class | `class` | `.container` | yes |
//! | 3 | attribute | `attr` | `[href$=".png"]` | yes |
//! | 4 | pseudo-class | `pseudo_class` | `:focus` | yes |
//! | 5 | pseudo-element | `pseudo_element` | `::after` | no |
//!
//! ## Combinators
//!
//! | Token | Variant | Example |
//! |-------|---------|---------|
//! | `" "` | `Descendant` | `tr   td` |
//! | `>` | `Child` | `ul > li` |
//! | `+` | `NextSibling` | `div + span` |
//! | `~` | `SubsequentSibling` | `h1 ~ p` |
//!
//! The token is always padded with one space on each side, so the
//! descendant token renders as three spaces. Use [`Format::Compact`] to join
//! operands without padding.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod builder;
mod error;
mod formatter;
mod part;
pub mod selector;

pub use builder::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use error::{SelectorError, SelectorResult};
pub use formatter::{Format, FormattedSelector, Formatter};
pub use part::PartKind;
pub use selector::{
    Combinator, CombinedSelector, SelectorNode, SelectorParts, SimpleSelector, Stringify,
};
