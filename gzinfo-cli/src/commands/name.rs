//! Name command implementation.

use crate::utils::{build_decoder, decode_all, failure_summary, report_error};
use std::path::PathBuf;

pub fn cmd_name(
    files: &[PathBuf],
    default_name: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let decoder = build_decoder(default_name);
    let decoded = decode_all(files, &decoder);
    let labelled = decoded.len() > 1;
    let mut failed = 0;

    for entry in &decoded {
        match &entry.result {
            Ok(Some(info)) if labelled => println!("{}: {}", entry.label, info.fname()),
            Ok(Some(info)) => println!("{}", info.fname()),
            Ok(None) => eprintln!("{}: empty input, no header", entry.label),
            Err(e) => {
                report_error(&entry.label, e);
                failed += 1;
            }
        }
    }

    failure_summary(failed, decoded.len())
}
