#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
mod error;
pub mod signals;

pub use error::Error;
