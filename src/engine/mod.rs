//! Asynchronous engine wrapper.
//!
//! Runs a search off the caller's thread and delivers the chosen move
//! through a completion callback.

mod controller;
mod error;

pub use controller::AsyncEngine;
pub use error::EngineError;
