//! Session parameters consumed by the SDP builder.
//!
//! A [`VideoSessionConfig`] is built once by a front end (flags or prompts),
//! handed to [`generate_sdp`](crate::sdp::generate_sdp) or
//! [`write_sdp`](crate::output::write_sdp), and dropped afterwards.

use std::fmt;
use std::str::FromStr;

use crate::error::SdpError;
use crate::sanitize::sanitize_filename;

/// Reference clock MAC advertised for the primary stream.
pub const DEFAULT_MAC_1: &str = "00-09-0D-01-2B-EE";
/// Reference clock MAC advertised for the secondary stream.
pub const DEFAULT_MAC_2: &str = "00-09-0D-01-2B-EF";
/// 29.97 Hz, expressed as the exact rational ST2110-20 expects.
pub const DEFAULT_FRAMERATE: &str = "30000/1001";
pub const DEFAULT_SESSION_NAME: &str = "uncompressed_video_feed";
/// Port offered by the interactive prompts.
pub const DEFAULT_PORT: u16 = 30000;

/// Video raster size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT`; the separator is case-insensitive.
impl FromStr for Resolution {
    type Err = SdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SdpError::InvalidResolution {
            input: s.to_string(),
        };

        let lowered = s.to_lowercase();
        let (width, height) = lowered.split_once('x').ok_or_else(invalid)?;
        let width = width.trim().parse().map_err(|_| invalid())?;
        let height = height.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(width, height))
    }
}

/// Everything needed to describe one ST2110-20 stream, optionally with an
/// ST2022-7 duplicate.
///
/// The secondary fields are independent options. The secondary stream only
/// takes part in the document when all three are present, see
/// [`secondary_enabled`](Self::secondary_enabled).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSessionConfig {
    pub source_ip_1: String,
    pub multicast_group_1: String,
    pub port_1: u16,
    pub source_ip_2: Option<String>,
    pub multicast_group_2: Option<String>,
    pub port_2: Option<u16>,
    pub mac_1: String,
    pub mac_2: String,
    pub resolution: Resolution,
    /// Passed through verbatim into `exactframerate=`.
    pub framerate: String,
    pub interlace: bool,
    pub session_name: String,
    /// Explicit output path. When `None` the sanitized session name is used.
    pub output_file: Option<String>,
}

impl VideoSessionConfig {
    /// Primary-only session with every optional parameter at its default.
    pub fn new(
        source_ip_1: impl Into<String>,
        multicast_group_1: impl Into<String>,
        port_1: u16,
        session_name: impl Into<String>,
    ) -> Self {
        Self {
            source_ip_1: source_ip_1.into(),
            multicast_group_1: multicast_group_1.into(),
            port_1,
            source_ip_2: None,
            multicast_group_2: None,
            port_2: None,
            mac_1: DEFAULT_MAC_1.to_string(),
            mac_2: DEFAULT_MAC_2.to_string(),
            resolution: Resolution::default(),
            framerate: DEFAULT_FRAMERATE.to_string(),
            interlace: true,
            session_name: session_name.into(),
            output_file: None,
        }
    }

    pub fn with_secondary(
        mut self,
        source_ip: Option<String>,
        multicast_group: Option<String>,
        port: Option<u16>,
    ) -> Self {
        self.source_ip_2 = source_ip;
        self.multicast_group_2 = multicast_group;
        self.port_2 = port;
        self
    }

    pub fn with_macs(mut self, mac_1: impl Into<String>, mac_2: impl Into<String>) -> Self {
        self.mac_1 = mac_1.into();
        self.mac_2 = mac_2.into();
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_framerate(mut self, framerate: impl Into<String>) -> Self {
        self.framerate = framerate.into();
        self
    }

    pub fn with_interlace(mut self, interlace: bool) -> Self {
        self.interlace = interlace;
        self
    }

    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    /// True only when source, group and port of the secondary are all given.
    ///
    /// Empty strings and port 0 count as absent. A partial secondary is not an
    /// error; it simply leaves the session primary-only.
    pub fn secondary_enabled(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());

        present(&self.source_ip_2)
            && present(&self.multicast_group_2)
            && self.port_2.is_some_and(|port| port != 0)
    }

    /// Path the document is written to. A non-empty explicit path is used verbatim.
    pub fn output_file(&self) -> String {
        match self.output_file.as_deref() {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => sanitize_filename(&self.session_name),
        }
    }
}
