//! Runtime for a GeoX conversation surface.
//!
//! [`InteractionManager`] wraps a [`geox_core::session::Session`] with the
//! asynchronous parts: the simulated reply delay, teardown suppression, and
//! change notifications.

pub mod deferred;
mod interaction_manager;

pub use deferred::DeferredTask;
pub use interaction_manager::InteractionManager;
