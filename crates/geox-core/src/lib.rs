//! Domain layer of the GeoX conversational analysis engine.
//!
//! Pure, synchronous types: the session state machine, the keyword responder,
//! the onboarding script, and the locale catalog. The async runtime around a
//! session lives in `geox-interaction`.

pub mod analysis;
pub mod config;
pub mod error;
pub mod locale;
pub mod repository;
pub mod responder;
pub mod session;

pub use error::GeoxError;
