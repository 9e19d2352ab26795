//! Ability decorators.

pub mod logging;

pub use logging::{Logged, logged_factory};
