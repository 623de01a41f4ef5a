use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The closed set of failure kinds raised by this crate.
///
/// Kinds form a shallow hierarchy: [`ErrorKind::InsufficientFunds`] is a specialization of
/// [`ErrorKind::InvalidAmount`], so code matching on the generic kind also catches it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAmount,
    InsufficientFunds,
    DivisionByZero,
}

impl ErrorKind {
    /// Returns the more generic kind this one specializes, if any.
    pub fn parent(self) -> Option<ErrorKind> {
        match self {
            ErrorKind::InsufficientFunds => Some(ErrorKind::InvalidAmount),
            ErrorKind::InvalidAmount | ErrorKind::DivisionByZero => None,
        }
    }

    /// Returns true if `self` is `other` or one of its specializations.
    pub fn is(self, other: ErrorKind) -> bool {
        let mut current: Option<ErrorKind> = Some(self);

        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }

        false
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::InvalidAmount => "invalid amount",
            ErrorKind::InsufficientFunds => "insufficient funds",
            ErrorKind::DivisionByZero => "division by zero",
        };
        write!(f, "{}", name)
    }
}

/// Capability shared by every error type of this crate.
pub trait Kind {
    fn kind(&self) -> ErrorKind;

    /// Checks the error against a kind, honouring the kind hierarchy.
    fn is(&self, kind: ErrorKind) -> bool {
        self.kind().is(kind)
    }
}
