//! Manifest artifact types and CSV writer
//!
//! The manifest is the sole interface to downstream lookup tooling: a UTF-8
//! CSV with the fixed header `make,model,year,bundle_url`, fully replaced on
//! every run.

use crate::CrawlError;
use serde::Serialize;
use std::path::Path;

/// One row of the manifest artifact
///
/// Entries have no identity beyond their field values. Duplicate rows are
/// possible by design; downstream lookups tolerate them with limit-1
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Canonical (percent-decoded) manufacturer name
    pub make: String,

    /// Model name as it appeared in the listing link text; may be empty
    pub model: String,

    /// Four-digit model year the entry was discovered under
    pub year: String,

    /// Absolute URL of the model's document bundle
    pub bundle_url: String,
}

/// Column order of the manifest CSV
const COLUMNS: [&str; 4] = ["make", "model", "year", "bundle_url"];

/// Replaces the manifest artifact at `path` with the given entries
///
/// Any pre-existing file is deleted first (absence is not an error), then the
/// header and all rows are written in one pass. There is no partial-write
/// recovery: a failure here propagates and the run terminates without a valid
/// manifest.
///
/// # Arguments
///
/// * `path` - Destination of the CSV artifact
/// * `entries` - Accumulated rows, in discovery order
pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<(), CrawlError> {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    // Header is written explicitly so an empty manifest still has one
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(COLUMNS)?;

    for entry in entries {
        writer.serialize(entry)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(make: &str, model: &str, year: &str, bundle_url: &str) -> ManifestEntry {
        ManifestEntry {
            make: make.to_string(),
            model: model.to_string(),
            year: year.to_string(),
            bundle_url: bundle_url.to_string(),
        }
    }

    #[test]
    fn test_header_plus_one_line_per_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.csv");

        let entries = vec![
            entry("Toyota", "Camry LE", "2006", "https://charm.li/bundle/Toyota/2006/camry-le/"),
            entry("Toyota", "Corolla S", "2006", "https://charm.li/bundle/Toyota/2006/corolla-s/"),
        ];
        write_manifest(&path, &entries).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), entries.len() + 1);
        assert_eq!(lines[0], "make,model,year,bundle_url");
        assert!(lines[1].starts_with("Toyota,Camry LE,2006,"));
    }

    #[test]
    fn test_empty_manifest_still_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.csv");

        write_manifest(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert_eq!(content.lines().next(), Some("make,model,year,bundle_url"));
    }

    #[test]
    fn test_embedded_comma_is_quoted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.csv");

        let entries = vec![entry(
            "Toyota",
            "Camry, LE",
            "2006",
            "https://charm.li/bundle/Toyota/2006/camry-le/",
        )];
        write_manifest(&path, &entries).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(r#""Camry, LE""#));
    }

    #[test]
    fn test_replaces_preexisting_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.csv");

        std::fs::write(&path, "stale content from a previous run\n").unwrap();

        let entries = vec![entry("Saab", "900 Turbo", "1985", "https://charm.li/bundle/Saab/1985/900-turbo/")];
        write_manifest(&path, &entries).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale content"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_empty_model_is_a_valid_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.csv");

        let entries = vec![entry("Toyota", "", "2006", "https://charm.li/bundle/Toyota/2006/x/")];
        write_manifest(&path, &entries).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().nth(1).unwrap().starts_with("Toyota,,2006,"));
    }

    #[test]
    fn test_preserves_entry_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.csv");

        let entries = vec![
            entry("Saab", "900", "1985", "https://charm.li/bundle/Saab/1985/900/"),
            entry("Acura", "Integra", "1990", "https://charm.li/bundle/Acura/1990/integra/"),
        ];
        write_manifest(&path, &entries).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[1].starts_with("Saab,"));
        assert!(lines[2].starts_with("Acura,"));
    }
}
