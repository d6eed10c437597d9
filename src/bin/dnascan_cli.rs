use dnascan::{ENZYMES, analysis};
use serde::Serialize;
use std::{env, fs};

fn usage() {
    eprintln!(
        "Usage:\n  \
  dnascan_cli analyze <SEQUENCE|@FILE>\n  \
  dnascan_cli enzymes\n\n  \
  Tip: pass @sequence.txt to read the sequence from a file"
    );
}

fn load_sequence_arg(value: &str) -> Result<String, String> {
    if let Some(path) = value.strip_prefix('@') {
        fs::read_to_string(path)
            .map(|text| text.trim().to_string())
            .map_err(|e| format!("Could not read sequence file '{path}': {e}"))
    } else {
        Ok(value.to_string())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Could not serialize JSON output: {e}"))?;
    println!("{text}");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        usage();
        return Err("Missing command".to_string());
    }

    let command = &args[1];

    match command.as_str() {
        "analyze" => {
            if args.len() <= 2 {
                usage();
                return Err("Missing sequence".to_string());
            }
            let raw = load_sequence_arg(&args[2])?;
            let result = analysis::analyze(&raw).map_err(|e| e.to_string())?;
            print_json(&result)
        }
        "enzymes" => print_json(&ENZYMES.restriction_enzymes()),
        _ => {
            usage();
            Err(format!("Unknown command '{command}'"))
        }
    }
}
