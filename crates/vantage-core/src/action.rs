//! Action vocabulary and structured engine commands.
//!
//! The vocabulary is the engine's fixed table of callable functions.
//! Each function declares an ordered list of argument slots; a slot is
//! *spatial* iff its name is one of the engine's spatial-argument names
//! ([`SPATIAL_ARG_NAMES`]). A function with no spatial slot is
//! classified non-spatial.

use smallvec::SmallVec;
use std::fmt;

use crate::error::ConfigError;
use crate::id::FunctionId;

/// Argument-slot names that take a 2-D map coordinate.
pub const SPATIAL_ARG_NAMES: [&str; 3] = ["screen", "minimap", "screen2"];

/// One named argument slot of a vocabulary function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgSpec {
    /// Engine-declared slot name.
    pub name: String,
}

impl ArgSpec {
    /// Build a slot from its engine-declared name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether this slot takes a 2-D map coordinate.
    pub fn is_spatial(&self) -> bool {
        SPATIAL_ARG_NAMES.contains(&self.name.as_str())
    }
}

/// One entry in the action vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    /// Position in the vocabulary; IDs are contiguous from zero.
    pub id: FunctionId,
    /// Engine-declared function name.
    pub name: String,
    /// Ordered argument slots.
    pub args: Vec<ArgSpec>,
}

impl FunctionDef {
    /// Whether any argument slot is spatial.
    pub fn is_spatial(&self) -> bool {
        self.args.iter().any(ArgSpec::is_spatial)
    }
}

/// The engine's fixed, ordered table of callable functions.
///
/// Loaded once at startup from the engine's declared table and injected
/// into the adapter; immutable for the process lifetime.
///
/// # Examples
///
/// ```
/// use vantage_core::{ActionVocabulary, ArgSpec, FunctionDef, FunctionId};
///
/// let vocab = ActionVocabulary::new(vec![
///     FunctionDef {
///         id: FunctionId(0),
///         name: "no_op".into(),
///         args: vec![],
///     },
///     FunctionDef {
///         id: FunctionId(1),
///         name: "Attack_screen".into(),
///         args: vec![ArgSpec::new("queued"), ArgSpec::new("screen")],
///     },
/// ])
/// .unwrap();
///
/// assert_eq!(vocab.len(), 2);
/// assert!(!vocab.get(FunctionId(0)).unwrap().is_spatial());
/// assert!(vocab.get(FunctionId(1)).unwrap().is_spatial());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionVocabulary {
    functions: Vec<FunctionDef>,
}

impl ActionVocabulary {
    /// Validate and build a vocabulary from an ordered function list.
    ///
    /// Entry IDs must be contiguous from zero so that a function's ID
    /// doubles as its index into availability vectors.
    pub fn new(functions: Vec<FunctionDef>) -> Result<Self, ConfigError> {
        if functions.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }
        for (index, def) in functions.iter().enumerate() {
            let expected = FunctionId(index as u32);
            if def.id != expected {
                return Err(ConfigError::NonContiguousVocabulary {
                    expected,
                    found: def.id,
                });
            }
        }
        Ok(Self { functions })
    }

    /// Number of functions in the vocabulary.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if the vocabulary is empty (never, post-construction).
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Look up a function by ID.
    pub fn get(&self, id: FunctionId) -> Option<&FunctionDef> {
        self.functions.get(id.0 as usize)
    }

    /// Iterate functions in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &FunctionDef> {
        self.functions.iter()
    }
}

/// Value bound to one argument slot of a [`FunctionCall`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgValue {
    /// A 2-D map coordinate for a spatial slot.
    Point {
        /// Column (varies fastest in the flat spatial index).
        x: u32,
        /// Row.
        y: u32,
    },
    /// Placeholder scalar for a non-spatial slot.
    Flag(u32),
}

impl ArgValue {
    /// The engine wire form: `[x, y]` for points, `[v]` for flags.
    pub fn to_raw(self) -> SmallVec<[u32; 2]> {
        match self {
            Self::Point { x, y } => SmallVec::from_slice(&[x, y]),
            Self::Flag(v) => SmallVec::from_slice(&[v]),
        }
    }
}

/// A structured command ready for submission to the engine.
///
/// Pairs a function ID with one value per declared argument slot, in
/// slot order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionCall {
    /// The function to invoke.
    pub function: FunctionId,
    /// One value per argument slot, in declared order.
    pub args: Vec<ArgValue>,
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "call {}(", self.function)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match arg {
                ArgValue::Point { x, y } => write!(f, "[{x}, {y}]")?,
                ArgValue::Flag(v) => write!(f, "[{v}]")?,
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spatial_def(id: u32) -> FunctionDef {
        FunctionDef {
            id: FunctionId(id),
            name: format!("fn_{id}"),
            args: vec![ArgSpec::new("queued"), ArgSpec::new("screen")],
        }
    }

    fn flag_def(id: u32) -> FunctionDef {
        FunctionDef {
            id: FunctionId(id),
            name: format!("fn_{id}"),
            args: vec![ArgSpec::new("select_add")],
        }
    }

    #[test]
    fn spatial_classification_per_slot_name() {
        for name in SPATIAL_ARG_NAMES {
            assert!(ArgSpec::new(name).is_spatial(), "{name} must be spatial");
        }
        assert!(!ArgSpec::new("queued").is_spatial());
        assert!(!ArgSpec::new("select_point_act").is_spatial());
    }

    #[test]
    fn function_spatial_iff_any_slot_spatial() {
        assert!(spatial_def(0).is_spatial());
        assert!(!flag_def(0).is_spatial());
        let no_args = FunctionDef {
            id: FunctionId(0),
            name: "no_op".into(),
            args: vec![],
        };
        assert!(!no_args.is_spatial());
    }

    #[test]
    fn vocabulary_rejects_empty() {
        assert_eq!(
            ActionVocabulary::new(vec![]),
            Err(ConfigError::EmptyVocabulary)
        );
    }

    #[test]
    fn vocabulary_rejects_gaps() {
        let err = ActionVocabulary::new(vec![flag_def(0), spatial_def(2)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonContiguousVocabulary {
                expected: FunctionId(1),
                found: FunctionId(2),
            }
        );
    }

    #[test]
    fn arg_value_wire_forms() {
        let point = ArgValue::Point { x: 3, y: 7 };
        assert_eq!(point.to_raw().as_slice(), &[3, 7]);
        assert_eq!(ArgValue::Flag(0).to_raw().as_slice(), &[0]);
    }

    proptest! {
        #[test]
        fn classification_matches_slot_scan(
            slot_names in prop::collection::vec(
                prop::sample::select(vec![
                    "screen", "minimap", "screen2", "queued", "select_add", "control_group_act",
                ]),
                0..5,
            ),
        ) {
            let def = FunctionDef {
                id: FunctionId(0),
                name: "probe".into(),
                args: slot_names.iter().map(|&n| ArgSpec::new(n)).collect(),
            };
            let any_spatial = slot_names
                .iter()
                .any(|n| SPATIAL_ARG_NAMES.contains(n));
            prop_assert_eq!(def.is_spatial(), any_spatial);
        }

        #[test]
        fn contiguous_vocabularies_always_validate(len in 1usize..64) {
            let defs: Vec<FunctionDef> = (0..len as u32).map(flag_def).collect();
            let vocab = ActionVocabulary::new(defs).unwrap();
            prop_assert_eq!(vocab.len(), len);
            for (index, def) in vocab.iter().enumerate() {
                prop_assert_eq!(def.id, FunctionId(index as u32));
            }
        }
    }
}
