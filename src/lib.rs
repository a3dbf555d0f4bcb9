//! Analysis of human preproinsulin: cleaning, segmentation, molecular weight
//! and net charge.

pub mod config;
pub mod error;
pub mod seq_analysis;
pub mod workspace;

pub use error::{Error, Result};
