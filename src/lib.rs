//! ignref - reference documentation toolkit for Ignition project trees
//!
//! ignref is a CLI tool and library that scans an Ignition installation, writes
//! markdown reference documents for the asset categories it finds, and validates
//! documentation trees before they are published.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and console reporting)
//! - `config`: Configuration file loading and parsing
//! - `extractor`: Project scanning and category document generation
//! - `issues`: Issue type definitions produced by validation
//! - `markdown`: Fenced code block extraction
//! - `python`: Python syntax checking
//! - `validator`: Documentation tree validation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod extractor;
pub mod issues;
pub mod markdown;
pub mod python;
pub mod utils;
pub mod validator;
