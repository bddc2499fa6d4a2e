//! Two selectors joined by a combinator.

use std::fmt;
use std::rc::Rc;

use crate::formatter::Format;

use super::{SelectorNode, Stringify};

/// Relational token placed between two selectors.
///
/// Any string converts into a combinator: the four CSS tokens map to their
/// named variants and everything else is kept verbatim as
/// [`Combinator::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Combinator {
    /// `" "`: right is a descendant of left.
    Descendant,
    /// `">"`: right is a child of left.
    Child,
    /// `"+"`: right immediately follows left.
    NextSibling,
    /// `"~"`: right follows left.
    SubsequentSibling,
    /// Unrecognized token, passed through unchanged.
    Custom(String),
}

impl Combinator {
    /// The literal token.
    pub fn as_str(&self) -> &str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::NextSibling => "+",
            Combinator::SubsequentSibling => "~",
            Combinator::Custom(token) => token,
        }
    }
}

impl From<&str> for Combinator {
    fn from(token: &str) -> Self {
        match token {
            " " => Combinator::Descendant,
            ">" => Combinator::Child,
            "+" => Combinator::NextSibling,
            "~" => Combinator::SubsequentSibling,
            other => Combinator::Custom(other.to_string()),
        }
    }
}

impl From<String> for Combinator {
    fn from(token: String) -> Self {
        match Combinator::from(token.as_str()) {
            Combinator::Custom(_) => Combinator::Custom(token),
            known => known,
        }
    }
}

impl From<Combinator> for String {
    fn from(combinator: Combinator) -> Self {
        match combinator {
            Combinator::Custom(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two selector nodes joined by a combinator, e.g. `ul > li`.
///
/// Operands are held by shared reference. A [`SimpleSelector`] operand
/// stays mutable through its other handles and the combined output always
/// reflects its current parts.
///
/// [`SimpleSelector`]: super::SimpleSelector
#[derive(Clone)]
pub struct CombinedSelector {
    left: Rc<dyn SelectorNode>,
    combinator: Combinator,
    right: Rc<dyn SelectorNode>,
}

impl CombinedSelector {
    /// Join `left` and `right` with `combinator`. The token is not validated.
    pub fn new<L, R>(left: L, combinator: impl Into<Combinator>, right: R) -> Self
    where
        L: SelectorNode + 'static,
        R: SelectorNode + 'static,
    {
        Self {
            left: Rc::new(left),
            combinator: combinator.into(),
            right: Rc::new(right),
        }
    }

    /// Left operand.
    pub fn left(&self) -> &dyn SelectorNode {
        &*self.left
    }

    /// Combinator token.
    pub fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    /// Right operand.
    pub fn right(&self) -> &dyn SelectorNode {
        &*self.right
    }
}

impl SelectorNode for CombinedSelector {
    fn write_to(&self, out: &mut String, format: Format) {
        self.left.write_to(out, format);
        match format {
            Format::Padded => {
                out.push(' ');
                out.push_str(self.combinator.as_str());
                out.push(' ');
            }
            Format::Compact => out.push_str(self.combinator.as_str()),
        }
        self.right.write_to(out, format);
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl fmt::Debug for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedSelector")
            .field("left", &self.left.stringify())
            .field("combinator", &self.combinator)
            .field("right", &self.right.stringify())
            .finish()
    }
}
