//! JSON export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::{JSON_INDENT, OUTPUT_FILE_EXTENSION, OUTPUT_FILE_PREFIX};
use crate::error_handling::BwError;
use crate::models::TechnologyProfile;

/// File name an exported profile for `domain` is stored under.
pub fn output_file_name(domain: &str) -> String {
    format!("{OUTPUT_FILE_PREFIX}{domain}.{OUTPUT_FILE_EXTENSION}")
}

/// Writes `profile` as 4-space indented UTF-8 JSON to `<dir>/bw_<domain>.json`.
///
/// An existing file is overwritten. The file handle is closed before returning,
/// on success and on error.
///
/// # Returns
///
/// The path written to.
///
/// # Errors
///
/// Returns `BwError::Io` if the file cannot be created or written, and
/// `BwError::Json` if serialization fails.
pub fn export_json(
    profile: &TechnologyProfile,
    domain: &str,
    dir: &Path,
) -> Result<PathBuf, BwError> {
    let path = dir.join(output_file_name(domain));
    let io_err = |source: std::io::Error| BwError::Io {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    {
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        profile
            .serialize(&mut serializer)
            .map_err(|source| BwError::Json {
                path: path.clone(),
                source,
            })?;
    }
    writer.flush().map_err(io_err)?;

    log::info!(
        "Exported {} categories ({} techniques) to {}",
        profile.category_count(),
        profile.technique_count(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Techniques;
    use tempfile::TempDir;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("example.com"), "bw_example.com.json");
    }

    #[test]
    fn test_export_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let mut profile = TechnologyProfile::new();
        let techniques: Techniques = [("nginx".to_string(), "Web server.".to_string())]
            .into_iter()
            .collect();
        profile.insert_category("Web Servers", techniques);

        let path = export_json(&profile, "example.com", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("bw_example.com.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let expected = "{\n    \"Technology Profile\": {\n        \"Web Servers\": {\n            \"nginx\": \"Web server.\"\n        }\n    }\n}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_export_empty_profile() {
        let dir = TempDir::new().unwrap();
        let path = export_json(&TechnologyProfile::new(), "empty.org", dir.path()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text, "{\n    \"Technology Profile\": {}\n}");
    }

    #[test]
    fn test_export_writes_utf8() {
        let dir = TempDir::new().unwrap();
        let mut profile = TechnologyProfile::new();
        let techniques: Techniques = [("Müller CMS".to_string(), "Schöne Seiten – schnell.".to_string())]
            .into_iter()
            .collect();
        profile.insert_category("CMS", techniques);
        let path = export_json(&profile, "example.de", dir.path()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("Müller CMS"));
        assert!(text.contains("Schöne Seiten – schnell."));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bw_example.com.json"), "stale contents that are longer").unwrap();
        let path = export_json(&TechnologyProfile::new(), "example.com", dir.path()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text, "{\n    \"Technology Profile\": {}\n}");
    }

    #[test]
    fn test_export_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does/not/exist");
        let err = export_json(&TechnologyProfile::new(), "example.com", &missing).unwrap_err();
        assert!(matches!(err, BwError::Io { .. }));
        assert!(!err.is_usage());
    }
}
