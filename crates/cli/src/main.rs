mod args;
mod logging;
mod prompt;

use std::env;
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use st2110_sdp::{Result, VideoSessionConfig, write_sdp};

use args::Args;
use prompt::Prompter;

fn resolve(argv: Vec<OsString>) -> Result<VideoSessionConfig> {
    if argv.len() <= 1 {
        logging::init(false);
        let stdin = io::stdin();
        return Prompter::new(stdin.lock(), io::stdout().lock()).run();
    }

    let args = Args::parse_with_legacy(argv);
    logging::init(args.verbose);
    Ok(args.into_config())
}

fn main() -> ExitCode {
    let argv: Vec<OsString> = env::args_os().collect();

    let written = resolve(argv).and_then(|config| {
        tracing::debug!(?config, "session resolved");
        write_sdp(&config)
    });

    let generated = match written {
        Ok(generated) => generated,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (ja, en) = if generated.st2022_7 {
        ("対応", "Enabled")
    } else {
        ("非対応", "Disabled")
    };
    println!(
        "✅ SDPファイルが生成されました / SDP file generated: {} (ST2022-7 {} / {})",
        generated.path.display(),
        ja,
        en
    );

    ExitCode::SUCCESS
}
