//! Unidirectional data-flow primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The reducer is the single state-transition point; views never
//! mutate state, they only emit intents.

/// Marker trait for view state values.
///
/// States are immutable snapshots: the reducer consumes one and
/// returns the next. `Default` is the pre-initialization state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and decoded server events.
pub trait Intent: Send + 'static {}

/// Pure transition function `(State, Intent) -> State`.
///
/// Total over both arguments: an intent that does not apply to the
/// current state returns it unchanged. No side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
