/// End-to-end CLI tests — drive `execute` with real temp trees and a real
/// config file, then assert on the artifacts it leaves behind: the two
/// side files and the report file. No process spawning, no mocking.
use dirsift_cli::args::Cli;
use dirsift_cli::execute;
use dirsift_core::config::{Config, OutputPaths};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// A config whose three output paths all live inside `dir`.
fn config_in(dir: &Path) -> (PathBuf, OutputPaths) {
    let paths = OutputPaths {
        bigfiles_output_path: dir.join("bigfiles.txt"),
        permissions_output_path: dir.join("permissions.txt"),
        analysis_output_path: dir.join("output.txt"),
    };
    let config = Config {
        paths: paths.clone(),
        ..Config::default()
    };
    let config_path = dir.join("dirsift.json");
    fs::write(
        &config_path,
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();
    (config_path, paths)
}

fn cli(root: &Path, config: &Path) -> Cli {
    Cli {
        dir_path: root.to_path_buf(),
        size_threshold: 1.0,
        thorough: false,
        config: config.to_path_buf(),
        output: false,
        quiet: true,
    }
}

// ── Full runs ────────────────────────────────────────────────────────────────

#[test]
fn run_writes_both_side_files() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("scanme");
    fs::create_dir(&root).unwrap();
    write_bytes(&root.join("photo.jpg"), 100);
    write_bytes(&root.join("note.txt"), 50);
    let (config_path, paths) = config_in(tmp.path());

    execute(cli(&root, &config_path)).unwrap();

    // Nothing oversized, nothing risky — but both files must exist and
    // be freshly truncated.
    assert_eq!(fs::read_to_string(&paths.bigfiles_output_path).unwrap(), "");
    assert!(paths.permissions_output_path.exists());
}

#[test]
fn run_with_zero_threshold_lists_every_file() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("scanme");
    fs::create_dir(&root).unwrap();
    write_bytes(&root.join("a.bin"), 10);
    write_bytes(&root.join("b.bin"), 20);
    let (config_path, paths) = config_in(tmp.path());

    let mut args = cli(&root, &config_path);
    args.size_threshold = 0.0;
    execute(args).unwrap();

    let listed = fs::read_to_string(&paths.bigfiles_output_path).unwrap();
    let lines: Vec<_> = listed.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.ends_with(".bin")));
}

#[test]
fn output_flag_writes_report_file_instead_of_stdout() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("scanme");
    fs::create_dir(&root).unwrap();
    write_bytes(&root.join("song.mp3"), 1_000);
    let (config_path, paths) = config_in(tmp.path());

    let mut args = cli(&root, &config_path);
    args.output = true;
    execute(args).unwrap();

    let report = fs::read_to_string(&paths.analysis_output_path).unwrap();
    assert!(report.contains("Audio"), "report:\n{report}");
    assert!(report.contains("Totals"));
    assert!(report.contains("Scan took"));
}

// ── Fail-fast validation ─────────────────────────────────────────────────────

#[test]
fn nonexistent_root_fails_without_touching_outputs() {
    let tmp = TempDir::new().unwrap();
    let (config_path, paths) = config_in(tmp.path());

    let args = cli(&tmp.path().join("missing"), &config_path);
    assert!(execute(args).is_err());

    assert!(!paths.bigfiles_output_path.exists());
    assert!(!paths.permissions_output_path.exists());
    assert!(!paths.analysis_output_path.exists());
}

#[test]
fn file_root_fails_fast() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("plain.txt");
    write_bytes(&file, 1);
    let (config_path, _) = config_in(tmp.path());

    assert!(execute(cli(&file, &config_path)).is_err());
}

#[test]
fn negative_threshold_fails_before_scanning() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("scanme");
    fs::create_dir(&root).unwrap();
    let (config_path, paths) = config_in(tmp.path());

    let mut args = cli(&root, &config_path);
    args.size_threshold = -0.5;
    assert!(execute(args).is_err());
    assert!(!paths.bigfiles_output_path.exists());
}
