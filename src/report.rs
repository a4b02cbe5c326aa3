//! Version collection and report assembly.
//!
//! Walks an applet's tool list in order, runs each tool's version command,
//! and builds the JSON report map. Progress lines go to stderr so the
//! stdout JSON can be captured directly inside dx app scripts.

use crate::catalog;
use crate::descriptor::ResolvedApplet;
use crate::error::Result;
use crate::shell;
use serde_json::{Map, Value};

/// Output options for a collection run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectOptions {
    /// Suppress all stderr progress lines.
    pub quiet: bool,
    /// Additionally print each version command before running it.
    pub verbose: bool,
}

/// Collect versions for every tool the applet uses.
///
/// The report always starts with a `"DX applet"` entry carrying the
/// caller-supplied name and version, even when the tool list is resolved
/// through a virtual-applet alias. A version command that fails still
/// contributes whatever text it produced.
pub fn collect(resolved: &ResolvedApplet, options: &CollectOptions) -> Result<Map<String, Value>> {
    let mut report = Map::new();
    let mut applet_entry = Map::new();
    applet_entry.insert(
        resolved.applet.clone(),
        Value::String(resolved.version.clone()),
    );
    report.insert("DX applet".to_string(), Value::Object(applet_entry));

    if !options.quiet {
        eprintln!("********");
        eprintln!("* Running {}: {}", resolved.applet, resolved.version);
    }

    let tools = catalog::tools_for(&resolved.applet)?;
    for tool in tools {
        let command = catalog::command_for(tool)?;
        if options.verbose {
            eprintln!("cmd> {}", command);
        }

        tracing::debug!(tool, command, "querying tool version");
        let result = shell::capture_combined(command)?;
        if !result.success() {
            tracing::debug!(tool, exit_code = ?result.exit_code, "version command exited non-zero");
        }

        if !options.quiet {
            eprintln!("* {} version: {}", tool, result.output);
        }
        report.insert((*tool).to_string(), Value::String(result.output));
    }

    if !options.quiet {
        eprintln!("********");
    }

    Ok(report)
}
