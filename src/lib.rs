// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod aggregate;
pub mod column;
pub mod extract;
pub mod table;

pub mod export;
pub mod file;
pub mod report;
pub mod runner;

pub use error::{CoreError, RunError};
