//! End-to-end runs of the `gen-sdp` binary inside a scratch directory.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

fn gen_sdp() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gen-sdp"))
}

#[test]
fn flags_write_primary_only_file_named_after_session() {
    let dir = tempfile::tempdir().expect("temp dir");

    let output = gen_sdp()
        .current_dir(dir.path())
        .args([
            "--src1",
            "192.168.1.10",
            "--grp1",
            "239.1.1.1",
            "--port1",
            "30000",
            "--resolution",
            "1920x1080",
            "--framerate",
            "30000/1001",
            "--interlace",
            "yes",
            "--session",
            "cam1",
        ])
        .output()
        .expect("run gen-sdp");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cam1.sdp"));
    assert!(stdout.contains("Disabled"));

    let sdp = fs::read_to_string(dir.path().join("cam1.sdp")).expect("cam1.sdp written");
    assert!(!sdp.contains("a=group:DUP"));
    assert_eq!(sdp.lines().filter(|l| *l == "m=video 30000 RTP/AVP 96").count(), 1);
    assert!(sdp.lines().any(|l| l
        == "a=fmtp:96 sampling=YCbCr-4:2:2; width=1920; height=1080; depth=10; \
            exactframerate=30000/1001; interlace; colorimetry=BT709; TCS=SDR; \
            SSN=ST2110-20:2017; TP=2110TPN; PM=2110BPM;"));
    assert!(sdp.ends_with("a=mid:primary\n"));
}

#[test]
fn legacy_flags_write_redundant_file() {
    let dir = tempfile::tempdir().expect("temp dir");

    let output = gen_sdp()
        .current_dir(dir.path())
        .args([
            "-s1",
            "192.168.1.10",
            "-g1",
            "239.1.1.1",
            "-p1",
            "30000",
            "-s2",
            "192.168.2.10",
            "-g2",
            "239.1.2.1",
            "-p2",
            "30000",
            "--session",
            "Main Feed",
            "-o",
            "main.sdp",
        ])
        .output()
        .expect("run gen-sdp");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Enabled"));

    let sdp = fs::read_to_string(dir.path().join("main.sdp")).expect("main.sdp written");
    assert!(sdp.contains("s=Main Feed\n"));
    assert_eq!(sdp.lines().filter(|l| l.starts_with("m=video")).count(), 2);
    assert_eq!(sdp.lines().filter(|l| *l == "a=group:DUP primary secondary").count(), 1);
}

#[test]
fn malformed_resolution_fails_before_writing() {
    let dir = tempfile::tempdir().expect("temp dir");

    let output = gen_sdp()
        .current_dir(dir.path())
        .args([
            "--src1",
            "192.168.1.10",
            "--grp1",
            "239.1.1.1",
            "--port1",
            "30000",
            "--resolution",
            "1920by1080",
            "--session",
            "cam1",
        ])
        .output()
        .expect("run gen-sdp");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("WIDTHxHEIGHT"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_required_flag_fails() {
    let dir = tempfile::tempdir().expect("temp dir");

    let status = gen_sdp()
        .current_dir(dir.path())
        .args(["--src1", "192.168.1.10", "--session", "cam1"])
        .stderr(Stdio::null())
        .status()
        .expect("run gen-sdp");

    assert!(!status.success());
}

#[test]
fn unwritable_output_path_fails() {
    let dir = tempfile::tempdir().expect("temp dir");

    let output = gen_sdp()
        .current_dir(dir.path())
        .args([
            "--src1",
            "192.168.1.10",
            "--grp1",
            "239.1.1.1",
            "--port1",
            "30000",
            "--session",
            "cam1",
            "--out",
            "missing/dir/cam1.sdp",
        ])
        .output()
        .expect("run gen-sdp");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("I/O error"));
}

#[test]
fn no_arguments_runs_interactive_mode() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut child = gen_sdp()
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn gen-sdp");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"192.168.1.10\n239.1.1.1\n\nno\n\n\n\n\n\nStudio One\n\n")
        .expect("write answers");

    let output = child.wait_with_output().expect("wait for gen-sdp");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let sdp =
        fs::read_to_string(dir.path().join("studio_one.sdp")).expect("studio_one.sdp written");
    assert!(sdp.contains("s=Studio One\n"));
    assert!(sdp.contains("m=video 30000 RTP/AVP 96\n"));
}
