// Licensed under the Apache-2.0 license

//! `drm_fourcc.h` to C lookup table generator.
//!
//! This crate reads the kernel's `drm_fourcc.h`, extracts the format and
//! modifier macro names, and generates a C source file with two functions
//! mapping format and modifier values back to their names.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use fourcc_tables_generator::{
//!     generate_tables, generate_tables_from_file, OutputConfig, RuleConfig,
//! };
//!
//! // Generate tables.c from the system header
//! generate_tables_from_file(
//!     Path::new("/usr/include/libdrm/drm_fourcc.h"),
//!     Path::new("tables.c"),
//! ).unwrap();
//!
//! // Or from text, with custom rules and function names
//! let rules = RuleConfig::with_defaults().with_format_prefix("MY_FORMAT_");
//! let config = OutputConfig::with_defaults().with_modifier_fn("modifier_str");
//! let code = generate_tables("#define MY_FORMAT_A fourcc_code('A', ' ', ' ', ' ')", &rules, &config)
//!     .unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Extraction rules ([`RuleConfig`]) and output naming ([`OutputConfig`])
//! - [`extract`]: Per-category symbol extraction ([`Symbols`])
//! - [`afbc`]: Enumeration of AFBC modifier combinations
//! - [`output`]: Generated output types and C code generation
//! - [`util`]: C literal formatting helpers

pub mod afbc;
pub mod config;
pub mod extract;
pub mod output;
pub mod util;

mod codegen;
mod error;
mod scan;

// Re-export main public API
pub use codegen::{
    format_table, generate_file, generate_tables, generate_tables_from_file,
    generate_tables_from_file_with_config, modifier_table,
};
pub use config::{OutputConfig, RuleConfig};
pub use error::{TablesError, TablesResult};
pub use extract::{Category, Symbols};
