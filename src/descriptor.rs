//! Job descriptor resolution.
//!
//! A DNAnexus job directory carries a `dnanexus-executable.json` describing
//! the running applet. This module extracts the `(applet, version)` pair
//! from that file: the applet is the first token of the `name` field, and
//! the version comes from the `version` field, from a parenthesized suffix
//! on the `title` field, or falls back to `"unknown"`.

use crate::error::{DxverError, Result};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The subset of `dnanexus-executable.json` this tool reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Descriptor {
    /// Applet name, possibly followed by qualifiers after whitespace.
    pub name: Option<String>,
    /// Explicit applet version; wins over any title suffix.
    pub version: Option<String>,
    /// Display title; its last word may carry a `(v...)` or
    /// `(virtual-...)` version suffix.
    pub title: Option<String>,
}

/// An applet name and version ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApplet {
    pub applet: String,
    pub version: String,
}

/// Read and resolve a descriptor file.
///
/// Unreadable or malformed files and descriptors without a usable name
/// are fatal; there is no fallback mode to recover from a bad job
/// directory.
pub fn resolve_file(path: &Path) -> Result<ResolvedApplet> {
    let text = fs::read_to_string(path).map_err(|source| DxverError::DescriptorRead {
        path: path.to_path_buf(),
        source,
    })?;

    let descriptor: Descriptor =
        serde_json::from_str(&text).map_err(|e| DxverError::DescriptorParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    resolve(&descriptor).ok_or_else(|| DxverError::DescriptorMissingName {
        path: path.to_path_buf(),
    })
}

/// Resolve a parsed descriptor, or `None` when it has no usable name.
pub fn resolve(descriptor: &Descriptor) -> Option<ResolvedApplet> {
    let applet = descriptor
        .name
        .as_deref()?
        .split_whitespace()
        .next()?
        .to_string();

    let version = match &descriptor.version {
        Some(version) => version.clone(),
        None => descriptor
            .title
            .as_deref()
            .and_then(title_version)
            .unwrap_or_else(|| "unknown".to_string()),
    };

    Some(ResolvedApplet { applet, version })
}

/// Extract a version from a title's last word.
///
/// Matches `(v<rest>)` and `(virtual-<rest>)`; the `virtual-` alternative
/// must be tried first since it also starts with `(v`.
fn title_version(title: &str) -> Option<String> {
    let last_word = title.split_whitespace().last()?;
    let re = Regex::new(r"^\((?:virtual-|v)(.*)\)$").ok()?;
    re.captures(last_word)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn descriptor(name: &str, version: Option<&str>, title: Option<&str>) -> Descriptor {
        Descriptor {
            name: Some(name.to_string()),
            version: version.map(str::to_string),
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn explicit_version_wins_and_name_is_truncated() {
        let resolved = resolve(&descriptor(
            "dme-align-pe extra",
            Some("1.2"),
            Some("Aligner (v9.9)"),
        ))
        .unwrap();
        assert_eq!(resolved.applet, "dme-align-pe");
        assert_eq!(resolved.version, "1.2");
    }

    #[test]
    fn title_suffix_v_form() {
        let resolved =
            resolve(&descriptor("dme-index-bismark", None, Some("Index Prep (v2.3)"))).unwrap();
        assert_eq!(resolved.applet, "dme-index-bismark");
        assert_eq!(resolved.version, "2.3");
    }

    #[test]
    fn title_suffix_virtual_form() {
        let resolved = resolve(&descriptor(
            "dme-cx-to-bed-alt",
            None,
            Some("Alt tool (virtual-1.0)"),
        ))
        .unwrap();
        assert_eq!(resolved.version, "1.0");
    }

    #[test]
    fn no_version_anywhere_is_unknown() {
        let resolved = resolve(&descriptor("dme-align-se", None, Some("Aligner SE"))).unwrap();
        assert_eq!(resolved.version, "unknown");
    }

    #[test]
    fn missing_title_is_unknown() {
        let resolved = resolve(&descriptor("dme-align-se", None, None)).unwrap();
        assert_eq!(resolved.version, "unknown");
    }

    #[test]
    fn missing_name_is_none() {
        let descriptor = Descriptor {
            name: None,
            version: Some("1.0".into()),
            title: None,
        };
        assert!(resolve(&descriptor).is_none());
    }

    #[test]
    fn blank_name_is_none() {
        assert!(resolve(&descriptor("   ", Some("1.0"), None)).is_none());
    }

    #[test]
    fn title_without_parens_is_ignored() {
        let resolved = resolve(&descriptor("dme-align-se", None, Some("Aligner v2.3"))).unwrap();
        assert_eq!(resolved.version, "unknown");
    }

    #[test]
    fn resolve_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name": "dme-bg-to-signal job", "title": "Signal (v0.4)"}}"#
        )
        .unwrap();

        let resolved = resolve_file(file.path()).unwrap();
        assert_eq!(resolved.applet, "dme-bg-to-signal");
        assert_eq!(resolved.version, "0.4");
    }

    #[test]
    fn resolve_file_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = resolve_file(file.path()).unwrap_err();
        assert!(matches!(err, DxverError::DescriptorParse { .. }));
    }

    #[test]
    fn resolve_file_rejects_missing_file() {
        let err = resolve_file(Path::new("/no/such/descriptor.json")).unwrap_err();
        assert!(matches!(err, DxverError::DescriptorRead { .. }));
    }

    #[test]
    fn resolve_file_rejects_missing_name() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"version": "1.0"}}"#).unwrap();

        let err = resolve_file(file.path()).unwrap_err();
        assert!(matches!(err, DxverError::DescriptorMissingName { .. }));
    }
}
