//! Cards and the card comparator.
//!
//! ## Key Types
//!
//! - `Card`: Any clonable, ordered, debuggable value
//! - `Comparison`: Higher / Lower / Tie from side A's point of view
//! - `compare`: The comparator used by the resolver
//! - `ensure_comparable`: Up-front configuration check

pub mod compare;

pub use compare::{compare, ensure_comparable, Card, Comparison};
