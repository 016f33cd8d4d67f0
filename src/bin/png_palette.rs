//! Prints the palette report of an indexed PNG.
//!
//! ```text
//! png_palette <FILE> [OUT.csv]
//! ```
//!
//! With an output path the report is written there instead of to stdout. Set
//! `PNG_PALETTE_LOG` to `debug` to see each chunk as it's scanned.

use std::{path::Path, process::ExitCode};

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::new().filter_or("PNG_PALETTE_LOG", "warn")).init();
  let args: Vec<String> = std::env::args().collect();
  let (input, output) = match args.as_slice() {
    [_, input] => (Path::new(input), None),
    [_, input, output] => (Path::new(input), Some(Path::new(output))),
    _ => {
      eprintln!("usage: png_palette <FILE> [OUT.csv]");
      return ExitCode::FAILURE;
    }
  };

  let bytes = match std::fs::read(input) {
    Ok(bytes) => bytes,
    Err(e) => {
      eprintln!("{}: {e}", input.display());
      return ExitCode::FAILURE;
    }
  };
  log::info!("read {} bytes from {}", bytes.len(), input.display());
  let report = match png_palette::palette_report(&bytes) {
    Ok(report) => report,
    Err(e) => {
      eprintln!("{}: {e}", input.display());
      return ExitCode::FAILURE;
    }
  };

  match output {
    None => print!("{report}"),
    Some(path) => {
      if let Err(e) = std::fs::write(path, report) {
        eprintln!("{}: {e}", path.display());
        return ExitCode::FAILURE;
      }
      log::info!("wrote {}", path.display());
    }
  }
  ExitCode::SUCCESS
}
