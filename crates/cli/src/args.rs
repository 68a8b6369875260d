//! Flag-driven parameter resolution.

use std::ffi::OsString;

use clap::{Parser, ValueEnum};
use st2110_sdp::config::{DEFAULT_FRAMERATE, DEFAULT_MAC_1, DEFAULT_MAC_2};
use st2110_sdp::{Resolution, VideoSessionConfig};

/// Single-dash, multi-character spellings accepted for compatibility with
/// older scripts, and the long flag each one stands for.
const LEGACY_FLAGS: [(&str, &str); 8] = [
    ("-s1", "--src1"),
    ("-g1", "--grp1"),
    ("-p1", "--port1"),
    ("-s2", "--src2"),
    ("-g2", "--grp2"),
    ("-p2", "--port2"),
    ("-m1", "--mac1"),
    ("-m2", "--mac2"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

#[derive(Debug, Parser)]
#[command(
    name = "gen-sdp",
    about = "SDPファイル生成（非圧縮映像 / ST2110準拠）Generate SDP file (uncompressed video, ST2110)",
    after_help = "Run without arguments for interactive mode. \
                  -s1/-g1/-p1/-s2/-g2/-p2/-m1/-m2 are accepted as aliases of the long flags."
)]
pub struct Args {
    /// Primary Source IP Address
    #[arg(long, value_name = "IP")]
    pub src1: String,

    /// Primary Multicast IP Address
    #[arg(long, value_name = "IP")]
    pub grp1: String,

    /// Primary Port
    #[arg(long, value_name = "PORT")]
    pub port1: u16,

    /// Secondary Source IP Address (ST2022-7)
    #[arg(long, value_name = "IP")]
    pub src2: Option<String>,

    /// Secondary Multicast IP Address (ST2022-7)
    #[arg(long, value_name = "IP")]
    pub grp2: Option<String>,

    /// Secondary Port (ST2022-7)
    #[arg(long, value_name = "PORT")]
    pub port2: Option<u16>,

    /// Primary MAC Address
    #[arg(long, value_name = "MAC", default_value = DEFAULT_MAC_1)]
    pub mac1: String,

    /// Secondary MAC Address
    #[arg(long, value_name = "MAC", default_value = DEFAULT_MAC_2)]
    pub mac2: String,

    /// Resolution (e.g., 1920x1080)
    #[arg(short, long, value_name = "WIDTHxHEIGHT", default_value_t = Resolution::default())]
    pub resolution: Resolution,

    /// Framerate (e.g., 30000/1001)
    #[arg(short, long, default_value = DEFAULT_FRAMERATE)]
    pub framerate: String,

    /// Interlace (yes/no)
    #[arg(short, long, value_enum, default_value_t = YesNo::Yes)]
    pub interlace: YesNo,

    /// SDP session name (e.g., uncompressed_video_feed)
    #[arg(long)]
    pub session: String,

    /// Output filename (default: derived from the session name)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse argv, accepting the legacy single-dash flag spellings.
    pub fn parse_with_legacy<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_legacy_flags(argv))
    }

    pub fn into_config(self) -> VideoSessionConfig {
        VideoSessionConfig::new(self.src1, self.grp1, self.port1, self.session)
            .with_secondary(self.src2, self.grp2, self.port2)
            .with_macs(self.mac1, self.mac2)
            .with_resolution(self.resolution)
            .with_framerate(self.framerate)
            .with_interlace(self.interlace == YesNo::Yes)
            .with_output_file(self.out)
    }
}

/// Rewrite `-s1 x` / `-s1=x` style flags to their long form.
///
/// Everything after a bare `--` is passed through untouched.
pub fn normalize_legacy_flags<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    argv.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }

            for (legacy, long) in LEGACY_FLAGS {
                if text == legacy {
                    return OsString::from(long);
                }
                if let Some(value) = text
                    .strip_prefix(legacy)
                    .and_then(|rest| rest.strip_prefix('='))
                {
                    return OsString::from(format!("{long}={value}"));
                }
            }
            arg
        })
        .collect()
}
