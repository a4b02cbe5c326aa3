//! dxver - Tool version stamping for DNAnexus pipeline applets.
//!
//! Maps a pipeline applet name to the external command-line tools it uses,
//! queries each tool's installed version via a tool-specific shell command,
//! and emits the aggregated versions as one JSON object on stdout. Progress
//! lines go to stderr so dx app scripts can capture the JSON directly.
//!
//! # Modules
//!
//! - [`catalog`] - Static applet, alias, and tool-command tables
//! - [`cli`] - Command-line argument parsing
//! - [`descriptor`] - `(applet, version)` resolution from a job descriptor
//! - [`error`] - Error types and result aliases
//! - [`report`] - Version collection and report assembly
//! - [`shell`] - Shell command execution with combined-output capture
//!
//! # Example
//!
//! ```no_run
//! use dxver::descriptor::ResolvedApplet;
//! use dxver::report::{collect, CollectOptions};
//!
//! let resolved = ResolvedApplet {
//!     applet: "dme-bg-to-signal".to_string(),
//!     version: "1.1".to_string(),
//! };
//! let report = collect(&resolved, &CollectOptions { quiet: true, verbose: false }).unwrap();
//! println!("{}", serde_json::to_string(&report).unwrap());
//! ```

pub mod catalog;
pub mod cli;
pub mod descriptor;
pub mod error;
pub mod report;
pub mod shell;

pub use error::{DxverError, Result};
