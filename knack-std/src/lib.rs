//! # knack-std
//!
//! Standard implementations for the Knack character ability framework.
//!
//! This crate provides:
//! - **Registry**: [`Registry`] mapping characters to ability factories, with
//!   runtime enable/disable toggles
//! - **Dispatch**: [`Dispatcher`] attaching abilities at spawn and forwarding
//!   gameplay events
//! - **Load-time registration**: `register_ability!` (feature `inventory`)
//! - **Bundled abilities**: [`abilities::Frosty`]
//! - **Decorators**: [`hooks::Logged`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use knack_core;

// Modules
pub mod abilities;
#[cfg(feature = "inventory")]
pub mod collected;
pub mod dispatcher;
pub mod hooks;
#[cfg(all(test, feature = "tracing"))]
mod log_capture;
pub mod registry;
pub mod testing;

pub use dispatcher::{Delivery, Dispatcher, SpawnOutcome};
pub use registry::{
    EnabledHandle, RegistrationMeta, Registry, RegistryConfig, RegistryEntry, Resolution,
};

#[cfg(feature = "inventory")]
pub use inventory;
