//! Profile files.
//!
//! This module provides functions to persist a profile as `bw_<domain>.json`
//! and to load such a file back for replay.

mod json;
mod replay;

pub use json::{export_json, output_file_name};
pub use replay::{domain_from_export_path, load_profile_file, load_replay, Replay};
