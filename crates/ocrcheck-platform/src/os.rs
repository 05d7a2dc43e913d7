//! Operating system detection.

use once_cell::sync::Lazy;
use sysinfo::System;

/// Operating system types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OS {
    Windows,
    Macos,
    Linux,
    Unknown,
}

static HOST_OS: Lazy<(OS, String)> = Lazy::new(probe);

fn probe() -> (OS, String) {
    let raw = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
    let os = classify(&raw, std::env::consts::OS);
    (os, raw.to_lowercase())
}

/// Classify a raw OS name string (case-insensitive). Follows the
/// bundle naming convention: any unix-flavored name selects Linux.
pub fn from_raw(raw: &str) -> OS {
    let raw = raw.to_lowercase();
    // "darwin" contains "win"; the mac check has to come first.
    if raw.contains("mac") || raw.contains("darwin") {
        OS::Macos
    } else if raw.contains("win") {
        OS::Windows
    } else if raw.contains("nix") || raw.contains("nux") || raw.contains("aix") {
        OS::Linux
    } else {
        OS::Unknown
    }
}

/// Classify `raw`, falling back to `fallback` when the substring
/// checks miss. The host probe needs this: `System::name()` reports
/// distro names like "Ubuntu" that carry no family marker.
pub fn classify(raw: &str, fallback: &str) -> OS {
    match from_raw(raw) {
        OS::Unknown => from_raw(fallback),
        os => os,
    }
}

/// Detect current operating system.
pub fn detect() -> OS {
    HOST_OS.0
}

/// Raw OS name string as reported by the host, lowercased.
pub fn detect_raw() -> String {
    HOST_OS.1.clone()
}
