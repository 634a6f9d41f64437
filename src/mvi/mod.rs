//! State-machine primitives shared by event-driven components.
//!
//! ```text
//! call / platform event ──→ Intent ──→ Reducer ──→ State
//!                                                   │
//!                              effects (owner) ←────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
