//! Loading script files from disk.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::{
    error::{Result, ResultExt, ScriptError},
    models::{RawContent, Route},
    parser::build_route_from_text,
};

/// Load raw text content from a Markdown or plain-text file.
///
/// # Errors
///
/// Returns `ScriptError::NotFound` if `path` does not exist,
/// `ScriptError::Decode` if the file is not valid UTF-8, and
/// `ScriptError::FileSystem` for any other read failure.
pub fn load_content<P: AsRef<Path>>(path: P) -> Result<RawContent> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ScriptError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).with_path(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let text = String::from_utf8(bytes).map_err(|source| ScriptError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(RawContent::new(path.to_string_lossy(), text))
}

/// Load a file and parse it into a [`Route`].
///
/// # Errors
///
/// Fails only when loading fails; see [`load_content`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Route> {
    let raw = load_content(path)?;
    let route = build_route_from_text(&raw.text);
    info!(
        "Parsed {} into {} day(s), {} segment(s)",
        raw.path,
        route.days.len(),
        route.segment_count()
    );
    Ok(route)
}
