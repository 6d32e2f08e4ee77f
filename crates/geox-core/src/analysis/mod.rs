//! Analysis model domain module.
//!
//! The model type selects which canned analysis the assistant talks about.

mod model_type;

pub use model_type::ModelType;
