use std::{
  path::PathBuf,
  process::{Command, Output},
};

use super::{build_png, ihdr_payload};

fn temp_path(name: &str) -> PathBuf {
  std::env::temp_dir().join(format!("png_palette_{}_{name}", std::process::id()))
}

fn example_png() -> Vec<u8> {
  build_png(&[
    (b"IHDR", &ihdr_payload(2, 1, 8, 3, 0)),
    (b"PLTE", &[255, 0, 0, 0, 255, 0]),
    (b"tRNS", &[128]),
    (b"IDAT", &miniz_oxide::deflate::compress_to_vec_zlib(&[0, 0, 1], 6)),
    (b"IEND", &[]),
  ])
}

fn run(args: &[&std::ffi::OsStr], log_level: Option<&str>) -> Output {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_png_palette"));
  cmd.args(args).env_remove("PNG_PALETTE_LOG");
  if let Some(level) = log_level {
    cmd.env("PNG_PALETTE_LOG", level);
  }
  cmd.output().unwrap()
}

const EXAMPLE_REPORT: &str = "Color index, R value, G value, B value, A value, Frequency\n\
                              0, 255, 0, 0, 128, 1\n\
                              1, 0, 255, 0, 255, 1\n";

#[test]
fn test_cli_stdout_and_csv() {
  let input = temp_path("stdout_and_csv.png");
  let csv = temp_path("stdout_and_csv.csv");
  std::fs::write(&input, example_png()).unwrap();

  let out = run(&[input.as_os_str()], None);
  assert!(out.status.success());
  assert_eq!(String::from_utf8(out.stdout).unwrap(), EXAMPLE_REPORT);
  // nothing below warn is shown by default
  assert!(!String::from_utf8_lossy(&out.stderr).contains("Filled chunk"));

  let out = run(&[input.as_os_str(), csv.as_os_str()], None);
  assert!(out.status.success());
  assert!(out.stdout.is_empty());
  assert_eq!(std::fs::read_to_string(&csv).unwrap(), EXAMPLE_REPORT);

  let _ = std::fs::remove_file(&input);
  let _ = std::fs::remove_file(&csv);
}

#[test]
fn test_cli_log_level_from_env() {
  let input = temp_path("log_level.png");
  std::fs::write(&input, example_png()).unwrap();
  let out = run(&[input.as_os_str()], Some("debug"));
  assert!(out.status.success());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("Filled chunk IHDR"), "{stderr}");
  assert!(stderr.contains("Discarded chunk IDAT"), "{stderr}");
  let _ = std::fs::remove_file(&input);
}

#[test]
fn test_cli_failures_exit_with_one() {
  let not_png = temp_path("not_png.png");
  std::fs::write(&not_png, b"GIF89a, definitely").unwrap();
  let out = run(&[not_png.as_os_str()], None);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  assert!(!out.stderr.is_empty());
  let _ = std::fs::remove_file(&not_png);

  let missing = temp_path("does_not_exist.png");
  assert_eq!(run(&[missing.as_os_str()], None).status.code(), Some(1));
  // wrong argument count
  assert_eq!(run(&[], None).status.code(), Some(1));
}
