//! SDP file generation for ST2110-20 uncompressed video over RTP, with
//! optional ST2022-7 seamless protection (a duplicate secondary stream).

pub mod config;
pub mod error;
pub mod output;
pub mod sanitize;
pub mod sdp;

pub use config::{Resolution, VideoSessionConfig};
pub use error::{Result, SdpError};
pub use output::{Generated, write_sdp};
pub use sanitize::sanitize_filename;
pub use sdp::generate_sdp;
