//! SDP (Session Description Protocol) generation for ST2110-20 raw video.
//!
//! The document is assembled as an ordered list of lines, so the position
//! of the optional ST2022-7 parts stays explicit:
//!
//! ```text
//! v=0                                              ← protocol version
//! o=OPERATOR 1112223333 1112223333 IN IP4 <src1>  ← origin (fixed ids)
//! s=<session-name>                                 ← session name
//! t=0 0                                            ← permanent session
//! a=group:DUP primary secondary                    ← ST2022-7 only
//! m=video <port1> RTP/AVP 96                       ┐
//! c=IN IP4 <grp1>/64                               │
//! a=rtpmap:96 raw/90000                            │
//! a=fmtp:96 <format parameters>                    │ primary block
//! a=source-filter: incl IN IP4 <grp1> <src1>       │
//! a=ts-refclk:localmac=<mac1>                      │
//! a=mediaclk:direct=0                              │
//! a=mid:primary                                    ┘
//! m=video <port2> RTP/AVP 96 ...                   ← ST2022-7 only, mid:secondary
//! ```
//!
//! Lines are separated by `\n` and the document ends with exactly one newline.

use crate::config::VideoSessionConfig;

/// Dynamic RTP payload type used for the raw video stream.
pub const PAYLOAD_TYPE: u8 = 96;
/// RTP clock rate for video (ST2110-20 §6.1).
pub const CLOCK_RATE: u32 = 90_000;
/// Multicast TTL carried in the `c=` line.
pub const MULTICAST_TTL: u8 = 64;

const ORIGIN_USERNAME: &str = "OPERATOR";
// Fixed so that regenerating a file with the same inputs is byte-identical.
const ORIGIN_SESSION_ID: u64 = 1_112_223_333;
const ORIGIN_SESSION_VERSION: u64 = 1_112_223_333;

const MID_PRIMARY: &str = "primary";
const MID_SECONDARY: &str = "secondary";

/// One leg of the session, borrowed from a [`VideoSessionConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaStream<'a> {
    pub port: u16,
    pub multicast_group: &'a str,
    pub source_ip: &'a str,
    pub mac: &'a str,
    pub mid: &'a str,
}

impl<'a> MediaStream<'a> {
    pub fn primary(config: &'a VideoSessionConfig) -> Self {
        Self {
            port: config.port_1,
            multicast_group: &config.multicast_group_1,
            source_ip: &config.source_ip_1,
            mac: &config.mac_1,
            mid: MID_PRIMARY,
        }
    }

    /// The ST2022-7 leg, or `None` unless all secondary fields are present.
    pub fn secondary(config: &'a VideoSessionConfig) -> Option<Self> {
        if !config.secondary_enabled() {
            return None;
        }

        Some(Self {
            port: config.port_2?,
            multicast_group: config.multicast_group_2.as_deref()?,
            source_ip: config.source_ip_2.as_deref()?,
            mac: &config.mac_2,
            mid: MID_SECONDARY,
        })
    }
}

/// Build the `a=fmtp` parameter list shared by both legs.
///
/// Always ends with a trailing `;`. `interlace` is inserted between
/// `exactframerate` and `colorimetry` only for interlaced video.
pub fn fmtp_parameters(config: &VideoSessionConfig) -> String {
    let mut params: Vec<String> = vec![
        "sampling=YCbCr-4:2:2".to_string(),
        format!("width={}", config.resolution.width),
        format!("height={}", config.resolution.height),
        "depth=10".to_string(),
        format!("exactframerate={}", config.framerate),
    ];

    if config.interlace {
        params.push("interlace".to_string());
    }

    params.extend(
        [
            "colorimetry=BT709",
            "TCS=SDR",
            "SSN=ST2110-20:2017",
            "TP=2110TPN",
            "PM=2110BPM",
        ]
        .map(String::from),
    );

    format!("{};", params.join("; "))
}

/// Media-level lines for one leg, starting with its `m=` line.
pub fn media_block(stream: &MediaStream<'_>, fmtp: &str) -> Vec<String> {
    vec![
        format!("m=video {} RTP/AVP {}", stream.port, PAYLOAD_TYPE),
        format!("c=IN IP4 {}/{}", stream.multicast_group, MULTICAST_TTL),
        format!("a=rtpmap:{} raw/{}", PAYLOAD_TYPE, CLOCK_RATE),
        format!("a=fmtp:{} {}", PAYLOAD_TYPE, fmtp),
        format!(
            "a=source-filter: incl IN IP4 {} {}",
            stream.multicast_group, stream.source_ip
        ),
        format!("a=ts-refclk:localmac={}", stream.mac),
        "a=mediaclk:direct=0".to_string(),
        format!("a=mid:{}", stream.mid),
    ]
}

/// Generate the SDP document for a session.
///
/// Values are interpolated verbatim; address, port and MAC syntax are the
/// caller's responsibility.
pub fn generate_sdp(config: &VideoSessionConfig) -> String {
    let secondary = MediaStream::secondary(config);
    let fmtp = fmtp_parameters(config);

    let mut sdp: Vec<String> = Vec::new();

    sdp.push("v=0".to_string());
    sdp.push(format!(
        "o={} {} {} IN IP4 {}",
        ORIGIN_USERNAME, ORIGIN_SESSION_ID, ORIGIN_SESSION_VERSION, config.source_ip_1
    ));
    sdp.push(format!("s={}", config.session_name));
    sdp.push("t=0 0".to_string());

    if secondary.is_some() {
        sdp.push(format!("a=group:DUP {} {}", MID_PRIMARY, MID_SECONDARY));
    }

    sdp.extend(media_block(&MediaStream::primary(config), &fmtp));

    if let Some(stream) = &secondary {
        sdp.extend(media_block(stream, &fmtp));
    }

    let body = sdp.join("\n");

    tracing::debug!(st2022_7 = secondary.is_some(), "SDP:\n{}", body);

    format!("{}\n", body.trim())
}
