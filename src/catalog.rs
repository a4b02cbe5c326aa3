//! Static applet and tool catalog.
//!
//! Three read-only tables drive the whole program: which tools each applet
//! uses, which applet names are aliases for another, and the shell command
//! that extracts each tool's installed version. Extending the system means
//! adding entries here; no code changes are required.

use crate::error::{DxverError, Result};

/// Tools used by each applet script, in query order.
pub const APP_TOOLS: &[(&str, &[&str])] = &[
    (
        "dme-align-pe",
        &["mott-trim-pe.py", "bismark", "bowtie", "samtools"],
    ),
    (
        "dme-align-se",
        &["mott-trim-se.py", "bismark", "bowtie", "samtools"],
    ),
    (
        "dme-extract-pe",
        &[
            "bismark_methylation_extractor",
            "samtools",
            "cxrepo-bed.py",
            "bedToBigBed",
            "bedGraphToBigWig",
            "pigz",
        ],
    ),
    (
        "dme-extract-se",
        &[
            "bismark_methylation_extractor",
            "samtools",
            "cxrepo-bed.py",
            "bedToBigBed",
            "bedGraphToBigWig",
            "pigz",
        ],
    ),
    (
        "dme-extract-meth-se",
        &["bismark_methylation_extractor", "samtools", "pigz"],
    ),
    (
        "dme-extract-meth-pe",
        &["bismark_methylation_extractor", "samtools", "pigz"],
    ),
    ("dme-cx-to-bed", &["cxrepo-bed.py", "bedToBigBed", "pigz"]),
    ("dme-bg-to-signal", &["bedGraphToBigWig"]),
    // utility applets
    ("dme-combine-reports", &["bismark"]),
    (
        "dme-index-bismark-bowtie2",
        &["bismark_genome_preparation", "bowtie2"],
    ),
    (
        "dme-index-bismark",
        &["bismark_genome_preparation", "bowtie"],
    ),
];

/// Virtual applets differ from their parent only by name and version.
pub const VIRTUAL_APPS: &[(&str, &str)] = &[
    ("dme-cx-to-bed-alt", "dme-cx-to-bed"),
    ("dme-bg-to-signal-alt", "dme-bg-to-signal"),
];

/// Shell command that prints each tool's version on its combined output.
///
/// Most of the invoked tools print version info to stderr and may exit
/// non-zero, so every command is run with the exit status ignored.
pub const ALL_TOOLS: &[(&str, &str)] = &[
    (
        "bedGraphToBigWig",
        "bedGraphToBigWig 2>&1 | grep 'bedGraphToBigWig v' | awk '{print $2$3}'",
    ),
    (
        "bedToBigBed",
        "bedToBigBed 2>&1 | grep 'bedToBigBed v' | awk '{print $2$3}'",
    ),
    ("bismark", "bismark --version | grep Version | awk '{print $3}'"),
    (
        "bismark_genome_preparation",
        "bismark_genome_preparation --version | grep Version | awk '{print $5}'",
    ),
    (
        "bismark_methylation_extractor",
        "bismark_methylation_extractor --version | grep Version | awk '{print $4}'",
    ),
    (
        "bismark2bedGraph",
        "bismark2bedGraph --version | grep Version | awk '{print $4}'",
    ),
    (
        "bismark2report",
        "bismark2report --version | grep version | awk '{print $3}'",
    ),
    (
        "coverage2cytosine",
        "coverage2cytosine --version | grep Version | awk '{print $4}'",
    ),
    (
        "deduplicate_bismark",
        "deduplicate_bismark --help | grep modified | awk '{printf \"%s %s %s %s %s %s\\n\",$4,$5,$6,$7,$8,$9}'",
    ),
    ("samtools", "samtools 2>&1 | grep Version | awk '{print $2}'"),
    (
        "bowtie",
        "bowtie --version 2>&1 | grep bowtie | awk '{print $3}'",
    ),
    (
        "bowtie-build",
        "bowtie-build --version 2>&1 | grep bowtie | awk '{print $3}'",
    ),
    (
        "bowtie-inspect",
        "bowtie-inspect --version 2>&1 | grep bowtie | awk '{print $3}'",
    ),
    (
        "bowtie2",
        "bowtie2 --version 2>&1 | grep bowtie | awk '{print $3}'",
    ),
    (
        "bowtie2-build",
        "bowtie2-build --version 2>&1 | grep bowtie | awk '{print $3}'",
    ),
    (
        "bowtie2-inspect",
        "bowtie2-inspect --version 2>&1 | grep bowtie | awk '{print $3}'",
    ),
    ("mott-trim-pe.py", "echo unversioned"),
    ("mott-trim-se.py", "echo unversioned"),
    (
        "cxrepo-bed.py",
        "grep -i copyright /usr/bin/cxrepo-bed.py | awk '{print $2,$3,$4}'",
    ),
    ("pigz", "pigz --version 2>&1 | awk '{print $2}'"),
];

/// Resolve a virtual-applet alias to its canonical applet name.
///
/// Names without an alias entry are returned unchanged. Only tool-list
/// resolution goes through this; the caller-supplied name is still the
/// one reported in output.
pub fn resolve_alias(applet: &str) -> &str {
    VIRTUAL_APPS
        .iter()
        .find(|(alias, _)| *alias == applet)
        .map(|(_, target)| *target)
        .unwrap_or(applet)
}

/// Look up the ordered tool list for an applet, following aliases.
pub fn tools_for(applet: &str) -> Result<&'static [&'static str]> {
    let canonical = resolve_alias(applet);
    APP_TOOLS
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, tools)| *tools)
        .ok_or_else(|| DxverError::UnknownApplet {
            name: applet.to_string(),
        })
}

/// Look up the version-extraction command for a tool.
pub fn command_for(tool: &str) -> Result<&'static str> {
    ALL_TOOLS
        .iter()
        .find(|(name, _)| *name == tool)
        .map(|(_, cmd)| *cmd)
        .ok_or_else(|| DxverError::UnknownTool {
            name: tool.to_string(),
        })
}
