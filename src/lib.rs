pub use crate::errors::{StyleKitError, StyleKitResult};

pub mod bundle;
pub mod cli;
pub mod config;
pub mod errors;
pub mod publish;
pub mod stylesheet;
