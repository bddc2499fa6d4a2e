//! Selector part kinds and their fixed stage order.
//!
//! A simple selector is assembled from six kinds of parts, which must appear
//! in this order:
//!
//! | Stage | Kind | Rendered as | Repeatable |
//! |-------|------|-------------|------------|
//! | 0 | element | `div` | no |
//! | 1 | id | `#main` | no |
//! | 2 | class | `.container` | yes |
//! | 3 | attribute | `[href$=".png"]` | yes |
//! | 4 | pseudo-class | `:focus` | yes |
//! | 5 | pseudo-element | `::before` | no |

use std::fmt;

/// One of the six recognized kinds of selector part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PartKind {
    /// Tag name, e.g. `div`.
    Element,
    /// Id, e.g. `#main`.
    Id,
    /// Class, e.g. `.container`.
    Class,
    /// Attribute, e.g. `[type="text"]`.
    Attribute,
    /// Pseudo-class, e.g. `:hover`.
    PseudoClass,
    /// Pseudo-element, e.g. `::after`.
    PseudoElement,
}

impl PartKind {
    /// All part kinds in stage order.
    pub const ALL: [PartKind; 6] = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ];

    /// Position of this kind in the required ordering (0 = element).
    pub fn stage(self) -> usize {
        match self {
            PartKind::Element => 0,
            PartKind::Id => 1,
            PartKind::Class => 2,
            PartKind::Attribute => 3,
            PartKind::PseudoClass => 4,
            PartKind::PseudoElement => 5,
        }
    }

    /// Whether the part may occur more than once in one selector.
    pub fn is_repeatable(self) -> bool {
        matches!(
            self,
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass
        )
    }

    /// Kinds that must not already be present when adding this kind.
    pub fn later_stages(self) -> &'static [PartKind] {
        &Self::ALL[self.stage() + 1..]
    }

    /// Text written before the part's value.
    pub fn prefix(self) -> &'static str {
        match self {
            PartKind::Element => "",
            PartKind::Id => "#",
            PartKind::Class => ".",
            PartKind::Attribute => "[",
            PartKind::PseudoClass => ":",
            PartKind::PseudoElement => "::",
        }
    }

    /// Text written after the part's value.
    pub fn suffix(self) -> &'static str {
        match self {
            PartKind::Attribute => "]",
            _ => "",
        }
    }

    /// Appends `value` rendered as this kind of part.
    pub(crate) fn write(self, out: &mut String, value: &str) {
        out.push_str(self.prefix());
        out.push_str(value);
        out.push_str(self.suffix());
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartKind::Element => "element",
            PartKind::Id => "id",
            PartKind::Class => "class",
            PartKind::Attribute => "attribute",
            PartKind::PseudoClass => "pseudo-class",
            PartKind::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}
