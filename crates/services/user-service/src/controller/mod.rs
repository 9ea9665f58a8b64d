//! Controller layer - outward-facing entry point.

mod user_controller;

pub use user_controller::{UserController, UserHandler};
