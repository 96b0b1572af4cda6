//! Macros for ergonomic state declaration.

/// Generate a `State` implementation for a simple enum.
///
/// Variants get consecutive ids starting at zero, in declaration order, and
/// the enum converts into `StateId` so it can be passed anywhere an id is
/// expected.
///
/// # Example
///
/// ```
/// use tickstate::core::{State, StateId};
/// use tickstate::state_enum;
///
/// state_enum! {
///     pub enum CharacterState {
///         Idle,
///         Walk,
///         Jump,
///     }
/// }
///
/// assert_eq!(CharacterState::COUNT, 3);
/// assert_eq!(StateId::from(CharacterState::Jump), StateId(2));
/// assert_eq!(CharacterState::Walk.name(), "Walk");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in id order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            const COUNT: usize = Self::ALL.len();

            fn id(self) -> $crate::core::StateId {
                $crate::core::StateId(self as i32)
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn from_id(id: $crate::core::StateId) -> Option<Self> {
                usize::try_from(id.0)
                    .ok()
                    .and_then(|index| Self::ALL.get(index).copied())
            }
        }

        impl From<$name> for $crate::core::StateId {
            fn from(state: $name) -> Self {
                $crate::core::State::id(state)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, StateId};

    state_enum! {
        enum TestState {
            Idle,
            Walk,
            Jump,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::COUNT, 3);
        assert_eq!(TestState::Idle.id(), StateId(0));
        assert_eq!(TestState::Jump.id(), StateId(2));
        assert_eq!(TestState::Walk.name(), "Walk");
    }

    #[test]
    fn from_id_inverts_id() {
        for state in TestState::ALL {
            assert_eq!(TestState::from_id(state.id()), Some(*state));
        }
        assert_eq!(TestState::from_id(StateId(3)), None);
        assert_eq!(TestState::from_id(StateId::INVALID), None);
    }

    #[test]
    fn state_enum_converts_into_state_id() {
        let id: StateId = TestState::Walk.into();
        assert_eq!(id, StateId(1));
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::COUNT, 2);
    }

    #[test]
    fn state_enum_serializes_by_name() {
        let json = serde_json::to_string(&TestState::Jump).unwrap();
        assert_eq!(json, "\"Jump\"");
    }
}
