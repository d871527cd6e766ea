//! Actor+Relay primitives
//!
//! - **[`Relay`]** carries typed events from widgets
//! - **[`Actor`]** owns one piece of reactive state and applies those events
//!
//! State is never mutated from a view directly and never read with `.get()`;
//! views send through relays and render from signals.

pub mod actor;
pub mod relay;

pub use actor::Actor;
pub use relay::{Relay, relay};
