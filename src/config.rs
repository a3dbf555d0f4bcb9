//! Names and defaults of the pipeline's file locations.
//!
//! The binary resolves each path with clap: command-line flag, then the
//! environment variable, then the default below.

pub const DATA_DIR_ENV: &str = "INSULIN_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";

pub const RAW_INPUT_ENV: &str = "INSULIN_RAW_INPUT";
pub const DEFAULT_RAW_INPUT: &str = "preproinsulin_seq.txt";
