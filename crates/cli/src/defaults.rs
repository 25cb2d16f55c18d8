//! Shared default values for the command-line front end.

/// Log filter for each `-v` count.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// MIME type when neither `--mime` nor the extension tells.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Characters of a sequence shown in `list`.
pub const LIST_PREVIEW_CHARS: usize = 24;

/// Characters of decoded text shown after `decode`.
pub const TEXT_PREVIEW_CHARS: usize = 400;
