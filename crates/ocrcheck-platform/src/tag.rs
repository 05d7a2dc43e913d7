//! Canonical platform tag used to select the native-library bundle
//! subset inside the resource archive.

use crate::arch::{self, Arch};
use crate::error::{Error, Result};
use crate::os::{self, OS};

/// Opaque OS+architecture key, e.g. `linux-x86_64` or `win32-x86-64`.
/// Computed once per run and only used to pick archive entry prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformTag(String);

impl PlatformTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map raw host OS/arch strings to the canonical tag.
///
/// Case-insensitive. Fails with `UnsupportedPlatform` carrying the raw
/// strings for unrecognized OS families; an unrecognized architecture
/// passes through lowercased so a bundle built for it can still match.
pub fn platform_tag(raw_os: &str, raw_arch: &str) -> Result<PlatformTag> {
    tag_for(
        os::from_raw(raw_os),
        arch::from_raw(raw_arch),
        raw_os,
        raw_arch,
    )
}

/// Detect the current host's tag. Uses the probed OS family, which
/// falls back to the compile-time family when the reported name is a
/// bare distro name; the raw strings are kept for diagnostics.
pub fn detect() -> Result<PlatformTag> {
    let raw_os = os::detect_raw();
    let raw_arch = arch::detect_raw();
    tag_for(os::detect(), arch::from_raw(&raw_arch), &raw_os, &raw_arch)
}

fn tag_for(os: OS, arch: Arch, raw_os: &str, raw_arch: &str) -> Result<PlatformTag> {
    let tag = match os {
        OS::Windows => format!("win32-{}", win32_arch(arch, raw_arch)),
        OS::Macos => {
            if arch.is_arm_family() {
                "macos-arm64".to_string()
            } else {
                "macos-x86_64".to_string()
            }
        }
        OS::Linux => format!("linux-{}", unix_arch(arch, raw_arch)),
        OS::Unknown => {
            return Err(Error::UnsupportedPlatform {
                os: raw_os.to_string(),
                arch: raw_arch.to_string(),
            });
        }
    };

    Ok(PlatformTag(tag))
}

// win32 bundles follow the JNA spelling with a dash.
fn win32_arch(arch: Arch, raw: &str) -> String {
    match arch {
        Arch::X86 => "x86".to_string(),
        Arch::X86_64 => "x86-64".to_string(),
        Arch::ARM => "arm".to_string(),
        Arch::ARM64 => "aarch64".to_string(),
        Arch::Unknown => raw.to_lowercase(),
    }
}

fn unix_arch(arch: Arch, raw: &str) -> String {
    match arch {
        Arch::X86 => "x86".to_string(),
        Arch::X86_64 => "x86_64".to_string(),
        Arch::ARM => "arm".to_string(),
        Arch::ARM64 => "aarch64".to_string(),
        Arch::Unknown => raw.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_pairs_map_to_stable_tags() {
        let cases = [
            ("Windows 10", "amd64", "win32-x86-64"),
            ("windows", "x86_64", "win32-x86-64"),
            ("Windows 11", "aarch64", "win32-aarch64"),
            ("macOS", "arm64", "macos-arm64"),
            ("Mac OS X", "aarch64", "macos-arm64"),
            ("macOS", "x86_64", "macos-x86_64"),
            ("Linux", "x86_64", "linux-x86_64"),
            ("GNU/Linux", "amd64", "linux-x86_64"),
            ("Linux", "aarch64", "linux-aarch64"),
            ("Unix", "i686", "linux-x86"),
            ("AIX", "x86_64", "linux-x86_64"),
        ];
        for (os, arch, want) in cases {
            let tag = platform_tag(os, arch).unwrap();
            assert_eq!(tag.as_str(), want, "{os}/{arch}");
        }
    }

    #[test]
    fn mapping_is_case_insensitive() {
        assert_eq!(
            platform_tag("LINUX", "X86_64").unwrap(),
            platform_tag("linux", "x86_64").unwrap()
        );
    }

    #[test]
    fn unknown_arch_passes_through() {
        let tag = platform_tag("Linux", "RISCV64").unwrap();
        assert_eq!(tag.as_str(), "linux-riscv64");
    }

    #[test]
    fn unsupported_os_fails_with_raw_strings() {
        let err = platform_tag("Haiku", "x86_64").unwrap_err();
        match err {
            Error::UnsupportedPlatform { os, arch } => {
                assert_eq!(os, "Haiku");
                assert_eq!(arch, "x86_64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn detect_succeeds_on_known_hosts() {
        // CI hosts are always one of the supported families.
        if os::detect() != OS::Unknown {
            assert!(detect().is_ok());
        }
    }

    #[test]
    fn distro_reported_host_still_tags_as_linux() {
        // sysinfo reports distro names with no family marker; the
        // probed family must win over the raw-string parse.
        let os = os::classify("Ubuntu", "linux");
        let tag = tag_for(os, arch::from_raw("x86_64"), "Ubuntu", "x86_64").unwrap();
        assert_eq!(tag.as_str(), "linux-x86_64");
    }
}
