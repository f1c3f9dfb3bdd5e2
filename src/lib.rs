pub mod config;
pub mod error;
pub mod generator;
pub mod inference;
pub mod prompt;
pub mod server;

pub use error::{Error, Result};
