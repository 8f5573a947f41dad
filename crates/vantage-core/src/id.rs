//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a function in the engine's action vocabulary.
///
/// Functions are declared by the engine in a fixed order and assigned
/// sequential IDs. `FunctionId(n)` corresponds to the n-th entry in the
/// [`ActionVocabulary`](crate::ActionVocabulary).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(pub u32);

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FunctionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
