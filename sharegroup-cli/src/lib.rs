//! Share group configuration CLI library

pub mod commands;

pub use commands::*;
