// wordmask/src/lib.rs
//! # wordmask CLI
//!
//! Command-line front end for `wordmask-core`: loads a dictionary, reads text
//! from a file or stdin, and writes the masked copy or a per-word scan report.

pub mod cli;
pub mod commands;
pub mod logger;
