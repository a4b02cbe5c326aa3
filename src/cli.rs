//! CLI argument definitions.
//!
//! Flags only, no subcommands: the applet either comes from `--applet` and
//! `--appver` together, or is discovered from a job descriptor file via
//! `--dxjson`. When both are given the descriptor file wins.

use clap::Parser;
use std::path::PathBuf;

/// dxver - Versions reporter for a dx applet.
///
/// Prints version lines to stderr and a JSON string to stdout. MUST
/// specify either --applet and --appver or --dxjson.
#[derive(Debug, Parser)]
#[command(name = "dxver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Applet to print versions for
    #[arg(short, long)]
    pub applet: Option<String>,

    /// Version of applet
    #[arg(long)]
    pub appver: Option<String>,

    /// Use dnanexus json file to discover 'applet' and 'appver'
    #[arg(short = 'j', long)]
    pub dxjson: Option<PathBuf>,

    /// Don't print versions to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the command-line that is used to get the version
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
