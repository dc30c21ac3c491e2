//! Core engine types: sides, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every other module.
//! Games are configured via `WarConfig` rather than by modifying the core.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::WarConfig;
pub use error::{Result, WarError};
