//! Propex - configuration placeholder extractor
//!
//! Propex is a CLI tool and library for discovering externally-configurable
//! value references of the form `${key}` or `${key:default}` across a
//! codebase. It aggregates every reference into one deduplicated record per
//! key (known defaults, referencing locations, declared scope and
//! description) and renders the result as a properties template, a tabular
//! per-environment report and/or JSON.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, exit codes)
//! - `commands`: Command handlers (`extract`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `engine`: Core extraction engine (marker parser and aggregation fold)
//! - `render`: Report renderers (properties template, CSV, JSON, terminal)
//! - `scanner`: Source file discovery and raw marker harvesting

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod render;
pub mod scanner;
