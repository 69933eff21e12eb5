//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of view state in the console (fetch/mutation tracking,
//! dialogs) changes only through a reducer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of view state
//! - **Intent**: User actions or async completions
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
