//! Interactive parameter resolution, used when the tool runs without arguments.

use std::io::{BufRead, Write};

use st2110_sdp::config::{
    DEFAULT_FRAMERATE, DEFAULT_MAC_1, DEFAULT_MAC_2, DEFAULT_PORT, DEFAULT_SESSION_NAME,
};
use st2110_sdp::{Resolution, Result, SdpError, VideoSessionConfig, sanitize_filename};

const BANNER: &str = "🛠 SDPファイルを生成します（対話モード）\n🛠 Generating SDP file (Interactive Mode)\n";

/// Line-based question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask every question in order and assemble the session.
    pub fn run(mut self) -> Result<VideoSessionConfig> {
        writeln!(self.output, "{}", BANNER)?;

        let src1 = self.ask_required(
            "Primary送信元IPアドレス (Primary Source IP Address)",
            "primary source IP",
        )?;
        let grp1 = self.ask_required(
            "PrimaryマルチキャストIPアドレス (Primary Multicast IP Address)",
            "primary multicast IP",
        )?;
        let port1 = self.ask_port("Primaryポート番号 (Primary Port)")?;

        let use_secondary = self
            .ask("セカンダリも設定しますか？ (Do you want to configure secondary/ST2022-7?) [yes/no]")?
            .eq_ignore_ascii_case("yes");

        let (src2, grp2, port2) = if use_secondary {
            let src2 = self.ask("Secondary送信元IPアドレス (Secondary Source IP Address)")?;
            let grp2 =
                self.ask("SecondaryマルチキャストIPアドレス (Secondary Multicast IP Address)")?;
            let port2 = self.ask_port("Secondaryポート番号 (Secondary Port)")?;
            (Some(src2), Some(grp2), Some(port2))
        } else {
            (None, None, None)
        };

        let mac1 =
            self.ask_with_default("Primary MACアドレス (Primary MAC Address)", DEFAULT_MAC_1)?;
        let mac2 =
            self.ask_with_default("Secondary MACアドレス (Secondary MAC Address)", DEFAULT_MAC_2)?;

        let default_resolution = Resolution::default().to_string();
        let resolution: Resolution = self
            .ask_with_default("解像度 (Resolution, e.g., 1920x1080)", &default_resolution)?
            .parse()?;

        let framerate = self.ask_with_default(
            "フレームレート (Framerate, e.g., 30000/1001)",
            DEFAULT_FRAMERATE,
        )?;
        let interlace = self
            .ask_with_default("インターレース？ (Interlace? yes/no)", "yes")?
            .eq_ignore_ascii_case("yes");

        let session = self.ask_with_default(
            "セッション名（Session name, e.g., uncompressed_video_feed）",
            DEFAULT_SESSION_NAME,
        )?;
        let out = self.ask_with_default(
            "出力ファイル名 (Output filename)",
            &sanitize_filename(&session),
        )?;

        Ok(VideoSessionConfig::new(src1, grp1, port1, session)
            .with_secondary(src2, grp2, port2)
            .with_macs(mac1, mac2)
            .with_resolution(resolution)
            .with_framerate(framerate)
            .with_interlace(interlace)
            .with_output_file(Some(out)))
    }

    /// One trimmed answer. End of input reads as an empty answer.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn ask_with_default(&mut self, prompt: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{} [Default: {}]", prompt, default))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn ask_required(&mut self, prompt: &str, field: &'static str) -> Result<String> {
        let answer = self.ask(prompt)?;
        if answer.is_empty() {
            return Err(SdpError::MissingField(field));
        }
        Ok(answer)
    }

    fn ask_port(&mut self, prompt: &str) -> Result<u16> {
        let answer = self.ask_with_default(prompt, &DEFAULT_PORT.to_string())?;
        answer
            .parse()
            .map_err(|_| SdpError::InvalidPort { input: answer })
    }
}
