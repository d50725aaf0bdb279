//! tidump - translation text id dumper
//!
//! Scans a C/C++ source tree for marker calls such as `EASYTR("Hello")` and
//! writes every distinct text id to a sorted JSON table, ready to be filled
//! in with translations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: File collection, extraction and the text id table
//! - `json_writer`: Reading and writing the JSON table

pub mod cli;
pub mod config;
pub mod core;
pub mod json_writer;
