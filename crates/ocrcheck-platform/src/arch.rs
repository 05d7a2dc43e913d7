//! Architecture detection.

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X86_64,
    ARM,
    ARM64,
    Unknown,
}

/// Detect current architecture.
pub fn detect() -> Arch {
    from_raw(sysinfo::System::cpu_arch().as_str())
}

/// Raw architecture string as reported by the host, lowercased.
pub fn detect_raw() -> String {
    sysinfo::System::cpu_arch().to_lowercase()
}

/// Classify a raw architecture string (case-insensitive).
pub fn from_raw(raw: &str) -> Arch {
    match raw.to_lowercase().as_str() {
        "i386" | "i686" | "x86" => Arch::X86,
        "x86_64" | "x86-64" | "amd64" => Arch::X86_64,
        "arm" | "armv7l" => Arch::ARM,
        "aarch64" | "arm64" => Arch::ARM64,
        _ => Arch::Unknown,
    }
}

impl Arch {
    pub fn is_arm_family(self) -> bool {
        matches!(self, Arch::ARM | Arch::ARM64)
    }
}
