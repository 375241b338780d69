#![allow(dead_code)]

use confgen::cli::Args;
use confgen::constants::markers;
use std::path::{Path, PathBuf};

/// Fixture template containing every marker exactly once.
pub const FIXTURE: &str = "tests/templates/configuration.nix";

/// Every default marker literal.
pub const ALL_MARKERS: [&str; 5] = [
    markers::BOOT_LOADER_X86,
    markers::BOOT_LOADER_ARM,
    markers::KERNEL_PACKAGES,
    markers::DETECTOR,
    markers::HARDWARE,
];

/// Copies the fixture template into `dir` so tests never mutate repository files.
pub fn copy_fixture(dir: &Path) -> PathBuf {
    let target = dir.join("configuration.nix");
    std::fs::copy(FIXTURE, &target).unwrap();
    target
}

/// Builds CLI arguments for a non-verbose run against `config`.
pub fn args_for(config: &Path, arch: &str, accelerator: Option<&str>, board: Option<&str>) -> Args {
    Args {
        config: config.to_path_buf(),
        arch: arch.to_string(),
        accelerator: accelerator.map(str::to_string),
        board: board.map(str::to_string),
        settings: None,
        verbose: 0,
        dry_run: false,
        keep_pristine: false,
    }
}

/// Asserts that no marker literal survives in `content`.
pub fn assert_no_markers(content: &str) {
    for marker in ALL_MARKERS {
        assert!(!content.contains(marker), "marker {marker:?} left in output:\n{content}");
    }
}
