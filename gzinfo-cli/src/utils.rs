//! Utility functions for the CLI.

use gzinfo::{HeaderDecoder, HeaderInfo, Result};
use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};

/// Input name that selects standard input.
pub const STDIN_MARKER: &str = "-";

/// The decode result for one input, labelled with how the user named it.
pub struct Decoded {
    pub label: String,
    pub result: Result<Option<HeaderInfo>>,
}

/// Build a decoder from the CLI options.
pub fn build_decoder(default_name: Option<&str>) -> HeaderDecoder {
    match default_name {
        Some(name) => HeaderDecoder::new().with_default_filename(name),
        None => HeaderDecoder::new(),
    }
}

/// Decode every input in parallel, keeping the input order.
pub fn decode_all(inputs: &[PathBuf], decoder: &HeaderDecoder) -> Vec<Decoded> {
    inputs
        .par_iter()
        .map(|input| Decoded {
            label: input.display().to_string(),
            result: decode_one(input, decoder),
        })
        .collect()
}

fn decode_one(input: &Path, decoder: &HeaderDecoder) -> Result<Option<HeaderInfo>> {
    if input.as_os_str() == STDIN_MARKER {
        decoder.decode(&mut io::stdin().lock())
    } else {
        decoder.decode_path(input)
    }
}

/// Report a failed input on stderr.
pub fn report_error(label: &str, err: &gzinfo::GzInfoError) {
    eprintln!("Error: {}: {}", label, err);
}

/// Summarize failures as a command error, if there were any.
pub fn failure_summary(
    failed: usize,
    total: usize,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if failed == 0 {
        return Ok(());
    }
    Err(format!("{} of {} inputs failed", failed, total).into())
}

/// Render the flag byte as hex plus the names of the set bits.
pub fn describe_flags(info: &HeaderInfo) -> String {
    let names = info.flag_names();
    if names.is_empty() {
        format!("{:#04x}", info.flag())
    } else {
        format!("{:#04x} [{}]", info.flag(), names.join(", "))
    }
}
