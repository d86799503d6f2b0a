//! Macros for declaring state and action types.

/// Declare a state type and implement [`State`](crate::core::State) for it.
///
/// Accepts a struct (named fields or unit) or an enum with unit or tuple
/// variants, and attaches the standard derive set.
///
/// # Example
///
/// ```
/// use fluxion::state_type;
///
/// state_type! {
///     pub struct CounterState {
///         pub count: u64,
///     }
/// }
///
/// let state = CounterState { count: 0 };
/// assert_eq!(state.count, 0);
/// ```
#[macro_export]
macro_rules! state_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field : $field_ty
            ),*
        }

        impl $crate::core::State for $name {}
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis struct $name;

        impl $crate::core::State for $name {}
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( ( $( $variant_ty:ty ),* $(,)? ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $( ( $( $variant_ty ),* ) )?
            ),*
        }

        impl $crate::core::State for $name {}
    };
}

/// Declare an action type and implement [`Action`](crate::core::Action) for it.
///
/// Accepts an enum with unit or tuple variants, or a struct, and attaches the
/// standard derive set.
///
/// # Example
///
/// ```
/// use fluxion::action_type;
///
/// action_type! {
///     pub enum CounterAction {
///         Increase(u64),
///         Decrease(u64),
///         Reset,
///     }
/// }
///
/// let action = CounterAction::Increase(5);
/// assert_eq!(action, CounterAction::Increase(5));
/// ```
#[macro_export]
macro_rules! action_type {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( ( $( $variant_ty:ty ),* $(,)? ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $( ( $( $variant_ty ),* ) )?
            ),*
        }

        impl $crate::core::Action for $name {}
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field : $field_ty
            ),*
        }

        impl $crate::core::Action for $name {}
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis struct $name;

        impl $crate::core::Action for $name {}
    };
}

#[cfg(test)]
mod tests {
    state_type! {
        struct TestState {
            count: u64,
        }
    }

    action_type! {
        enum TestAction {
            Increase(u64),
            Reset,
        }
    }

    #[test]
    fn state_type_derives_and_implements() {
        let state = TestState { count: 3 };
        let cloned = state.clone();
        assert_eq!(state, cloned);

        let json = serde_json::to_string(&state).unwrap();
        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn action_type_derives_and_implements() {
        let action = TestAction::Increase(5);
        assert_eq!(action, TestAction::Increase(5));
        assert_ne!(action, TestAction::Reset);

        let json = serde_json::to_string(&action).unwrap();
        let back: TestAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }

    #[test]
    fn macro_types_work_with_store() {
        use crate::Store;

        let store = Store::new(
            TestState { count: 0 },
            |state: &TestState, action: &TestAction| match action {
                TestAction::Increase(n) => TestState {
                    count: state.count + n,
                },
                TestAction::Reset => TestState { count: 0 },
            },
        );

        store.dispatch(TestAction::Increase(4)).unwrap();
        assert_eq!(store.state(), TestState { count: 4 });
    }
}
