//! One-shot write of a generated document to disk.

use std::fs;
use std::path::PathBuf;

use crate::config::VideoSessionConfig;
use crate::error::Result;
use crate::sdp::generate_sdp;

/// What [`write_sdp`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    /// Whether the document carries an ST2022-7 secondary leg.
    pub st2022_7: bool,
}

/// Render the session and write it to [`VideoSessionConfig::output_file`].
///
/// The document is fully built before the file is opened. An existing file
/// is overwritten.
pub fn write_sdp(config: &VideoSessionConfig) -> Result<Generated> {
    let document = generate_sdp(config);
    let path = PathBuf::from(config.output_file());
    let st2022_7 = config.secondary_enabled();

    fs::write(&path, document)?;

    tracing::info!(path = %path.display(), st2022_7, "SDP file written");

    Ok(Generated { path, st2022_7 })
}
