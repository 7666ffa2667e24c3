//! Info command implementation.

use crate::utils::{
    Decoded, build_decoder, decode_all, describe_flags, failure_summary, report_error,
};
use gzinfo::HeaderInfo;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON serializable header fields.
#[derive(Debug, Serialize, Deserialize)]
struct HeaderJson {
    fname: String,
    name_in_header: bool,
    method: u8,
    flag: u8,
    flag_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mtime: Option<u32>,
}

impl HeaderJson {
    fn from_info(info: &HeaderInfo) -> Self {
        Self {
            fname: info.fname().to_string(),
            name_in_header: info.name_in_header(),
            method: info.method(),
            flag: info.flag(),
            flag_names: info.flag_names().iter().map(|n| n.to_string()).collect(),
            mtime: (info.last_mtime() != 0).then_some(info.last_mtime()),
        }
    }
}

/// JSON output for one input.
#[derive(Debug, Serialize, Deserialize)]
struct InputJson {
    input: String,
    header: Option<HeaderJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorJson>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ErrorJson {
    kind: String,
    message: String,
}

pub fn cmd_info(
    files: &[PathBuf],
    json: bool,
    default_name: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let decoder = build_decoder(default_name);
    let decoded = decode_all(files, &decoder);
    let failed = decoded.iter().filter(|d| d.result.is_err()).count();

    if json {
        print_json(&decoded)?;
    } else {
        print_text(&decoded);
    }

    failure_summary(failed, decoded.len())
}

fn print_text(decoded: &[Decoded]) {
    for (i, entry) in decoded.iter().enumerate() {
        let info = match &entry.result {
            Ok(Some(info)) => info,
            Ok(None) => {
                if i > 0 {
                    println!();
                }
                println!("File: {}", entry.label);
                println!("  Empty input, no header");
                continue;
            }
            Err(e) => {
                report_error(&entry.label, e);
                continue;
            }
        };

        if i > 0 {
            println!();
        }
        println!("File: {}", entry.label);
        let origin = if info.name_in_header() {
            "header"
        } else {
            "input name"
        };
        println!("  Original filename: {} (from {})", info.fname(), origin);
        println!("  Compression method: {} (deflate)", info.method());
        println!("  Flags: {}", describe_flags(info));
        if info.last_mtime() > 0 {
            println!(
                "  Modification time: {} (Unix timestamp)",
                info.last_mtime()
            );
        } else {
            println!("  Modification time: not set");
        }
    }
}

fn print_json(decoded: &[Decoded]) -> Result<(), Box<dyn std::error::Error>> {
    let output: Vec<InputJson> = decoded
        .iter()
        .map(|entry| {
            let (header, error) = match &entry.result {
                Ok(info) => (info.as_ref().map(HeaderJson::from_info), None),
                Err(e) => (
                    None,
                    Some(ErrorJson {
                        kind: e.kind().to_string(),
                        message: e.to_string(),
                    }),
                ),
            };
            InputJson {
                input: entry.label.clone(),
                header,
                error,
            }
        })
        .collect();

    let json_output = serde_json::to_string_pretty(&output)?;
    println!("{}", json_output);
    Ok(())
}
