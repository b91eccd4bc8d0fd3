//! Command-line surface of the claudegw gateway.

#![deny(unsafe_code)]

pub mod parser;

pub use parser::Cli;
