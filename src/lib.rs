//! Decision service for a computer-controlled air-hockey paddle.
//!
//! A client sends a snapshot of the puck and both paddles; the [`ai`] module
//! answers with the point the AI paddle should head for. [`server`] exposes
//! that over HTTP and WebSocket.

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod server;

pub use error::{AiError, Result};
