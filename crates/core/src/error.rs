//! Error types for the SDP generator library.

/// Errors that can occur while resolving parameters or writing an SDP file.
///
/// Document construction itself cannot fail; every variant comes from either
/// parameter parsing or the final file write:
///
/// - **Parameters**: [`InvalidResolution`](Self::InvalidResolution),
///   [`InvalidPort`](Self::InvalidPort), [`MissingField`](Self::MissingField).
/// - **Output**: [`Io`](Self::Io).
#[derive(Debug, thiserror::Error)]
pub enum SdpError {
    /// Writing the output file failed (permissions, missing directory, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resolution was not of the form `WIDTHxHEIGHT`.
    #[error(
        "解像度は 1920x1080 の形式で指定してください / Format must be WIDTHxHEIGHT like 1920x1080 (got {input:?})"
    )]
    InvalidResolution { input: String },

    /// A port answer could not be parsed as a UDP port number.
    #[error("ポート番号が不正です / Invalid port number: {input:?}")]
    InvalidPort { input: String },

    /// A required parameter was left empty.
    #[error("必須項目が未入力です / Missing required field: {0}")]
    MissingField(&'static str),
}

/// Convenience alias for `Result<T, SdpError>`.
pub type Result<T> = std::result::Result<T, SdpError>;
