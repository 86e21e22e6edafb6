//! CLI commands

pub mod edit;
pub mod export;
pub mod inf;
pub mod slots;
pub mod utils;
