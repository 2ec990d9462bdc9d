//! Loading exported profiles for replay.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::OUTPUT_FILE_PREFIX;
use crate::error_handling::BwError;
use crate::models::TechnologyProfile;

/// A profile file loaded for re-rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// Domain recovered from the file name
    pub domain: String,
    /// Loaded profiles; one per file
    pub profiles: Vec<TechnologyProfile>,
}

/// Recovers the domain from an export file path.
///
/// `dir/bw_example.com.json` gives `example.com`. For names without the
/// `bw_` prefix the part after the last `_` is used, or the whole name if
/// there is none. The final extension is always dropped.
pub fn domain_from_export_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let rest = match name.strip_prefix(OUTPUT_FILE_PREFIX) {
        Some(rest) => rest,
        None => name.rsplit_once('_').map_or(name.as_str(), |(_, r)| r),
    };
    rest.rsplit_once('.')
        .map_or(rest, |(stem, _)| stem)
        .to_string()
}

/// Reads and deserializes one exported profile.
///
/// # Errors
///
/// - `BwError::MissingFile` if `path` does not exist
/// - `BwError::Io` for other read failures
/// - `BwError::Json` if the contents are not a profile
pub fn load_profile_file(path: &Path) -> Result<TechnologyProfile, BwError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => BwError::MissingFile(path.to_path_buf()),
        _ => BwError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let profile: TechnologyProfile =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| BwError::Json {
            path: PathBuf::from(path),
            source,
        })?;
    debug!(
        "Loaded {} categories from {}",
        profile.category_count(),
        path.display()
    );
    Ok(profile)
}

/// Loads `path` and pairs it with the domain recovered from its name.
///
/// # Errors
///
/// See [`load_profile_file`].
pub fn load_replay(path: &Path) -> Result<Replay, BwError> {
    let profile = load_profile_file(path)?;
    Ok(Replay {
        domain: domain_from_export_path(path),
        profiles: vec![profile],
    })
}
