pub mod ask;
pub mod config;
pub mod models;
pub mod onboarding;
pub mod questions;
