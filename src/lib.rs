//! cursor-inf-util library
//!
//! Builds Windows cursor scheme packages: an `install.inf` that registers the
//! scheme and copies the files, plus a zip bundling both.

pub mod config;
pub mod scheme;
