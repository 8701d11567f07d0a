//! Primitives for the unidirectional state flow used by both views.
//!
//! Each view owns a state type, an intent enum, and a reducer. The reducer
//! is the only place where state transitions happen; side effects (gateway
//! commands) are issued by the App after inspecting the reduced state.

/// A user action or system event processed by a reducer.
pub trait Intent: Send + 'static {}

/// View state: self-contained, cloneable, comparable for change detection.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}

/// Pure transition function from (state, intent) to the next state.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
