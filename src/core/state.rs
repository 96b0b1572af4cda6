//! State identifiers and the typed `State` trait.
//!
//! The machine itself only knows about integer ids. The `State` trait lets a
//! host describe its states as an enum and convert to and from those ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered state.
///
/// Valid ids live in `[0, max_states)` of the machine they are used with.
/// The id is signed so that out-of-range requests such as `-1` can be
/// expressed and rejected at runtime rather than at the type level.
///
/// # Example
///
/// ```rust
/// use tickstate::core::StateId;
///
/// let walk = StateId::from(1);
/// assert_eq!(walk.index(3), Some(1));
/// assert_eq!(StateId::from(3).index(3), None);
/// assert_eq!(StateId::INVALID.index(3), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub i32);

impl StateId {
    /// Sentinel held by `previous_state` before the machine has started.
    pub const INVALID: StateId = StateId(-1);

    /// Largest state table whose every slot has an id.
    pub const CAPACITY_LIMIT: usize = i32::MAX as usize + 1;

    /// Slot index for this id in a table of `max_states` entries.
    ///
    /// Returns `None` when the id is negative or not below `max_states`.
    pub fn index(self, max_states: usize) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|&i| i < max_states)
    }

    /// Whether this is the `INVALID` sentinel.
    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }
}

impl From<i32> for StateId {
    fn from(id: i32) -> Self {
        StateId(id)
    }
}

impl From<StateId> for i32 {
    fn from(id: StateId) -> Self {
        id.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for typed state enumerations.
///
/// Implementors map each variant to a consecutive, zero-based `StateId`.
/// `COUNT` is the number of variants and doubles as the machine capacity.
/// The `state_enum!` macro generates this for fieldless enums.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{State, StateId};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl State for Light {
///     const COUNT: usize = 2;
///
///     fn id(self) -> StateId {
///         StateId(self as i32)
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///         }
///     }
///
///     fn from_id(id: StateId) -> Option<Self> {
///         match id.0 {
///             0 => Some(Self::Red),
///             1 => Some(Self::Green),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Light::Green.id(), StateId(1));
/// assert_eq!(Light::from_id(StateId(0)), Some(Light::Red));
/// ```
pub trait State: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Number of states; ids run from `0` to `COUNT - 1`.
    const COUNT: usize;

    /// The id this state is registered under.
    fn id(self) -> StateId;

    /// Display name used in log output.
    fn name(&self) -> &'static str;

    /// Inverse of `id`. Returns `None` for ids that name no variant.
    fn from_id(id: StateId) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum TestState {
        Idle,
        Walk,
        Jump,
    }

    impl State for TestState {
        const COUNT: usize = 3;

        fn id(self) -> StateId {
            StateId(self as i32)
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Idle => "Idle",
                Self::Walk => "Walk",
                Self::Jump => "Jump",
            }
        }

        fn from_id(id: StateId) -> Option<Self> {
            match id.0 {
                0 => Some(Self::Idle),
                1 => Some(Self::Walk),
                2 => Some(Self::Jump),
                _ => None,
            }
        }
    }

    #[test]
    fn index_accepts_ids_in_range() {
        assert_eq!(StateId(0).index(3), Some(0));
        assert_eq!(StateId(2).index(3), Some(2));
    }

    #[test]
    fn index_rejects_negative_and_overflowing_ids() {
        assert_eq!(StateId(-1).index(3), None);
        assert_eq!(StateId(3).index(3), None);
        assert_eq!(StateId(i32::MIN).index(3), None);
        assert_eq!(StateId(0).index(0), None);
    }

    #[test]
    fn invalid_sentinel_is_minus_one() {
        assert_eq!(StateId::INVALID, StateId(-1));
        assert!(StateId::INVALID.is_invalid());
        assert!(!StateId(0).is_invalid());
    }

    #[test]
    fn capacity_limit_covers_every_non_negative_id() {
        let last = StateId(i32::MAX).index(StateId::CAPACITY_LIMIT);

        assert_eq!(last, Some(i32::MAX as usize));
    }

    #[test]
    fn id_and_from_id_agree() {
        for state in [TestState::Idle, TestState::Walk, TestState::Jump] {
            assert_eq!(TestState::from_id(state.id()), Some(state));
        }
        assert_eq!(TestState::from_id(StateId(TestState::COUNT as i32)), None);
    }

    #[test]
    fn state_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&StateId(2)).unwrap();
        assert_eq!(json, "2");
        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StateId(2));
    }

    #[test]
    fn state_id_displays_inner_value() {
        assert_eq!(StateId(7).to_string(), "7");
        assert_eq!(StateId::INVALID.to_string(), "-1");
    }
}
