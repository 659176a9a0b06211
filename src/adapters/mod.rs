//! Concrete implementations of the collaborator traits.
//!
//! Production adapters talk to the real world; the `mock` module provides
//! scripted stand-ins for tests.

mod artic;
pub mod mock;

pub use artic::ArticClient;
