//! Core library for the workload-summary command line application.
//!
//! The library turns a directory of individually authored workbooks into one
//! monthly summary. Each stage is a separate module so it can be exercised
//! without touching the file system: tab labels are screened in [`classify`],
//! values located in [`extract`], combined per file and across files in
//! [`aggregate`], and ordered against the roster in [`reconcile`]. Workbook
//! IO lives under [`io`], shared data types in [`model`], and the end-to-end
//! run in [`summary`].

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod extract;
pub mod io;
pub mod model;
pub mod reconcile;
pub mod summary;

pub use error::{Result, ToolError};
