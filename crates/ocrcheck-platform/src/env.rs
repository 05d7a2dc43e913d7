//! Native-library search path publishing.
//!
//! The OCR binding loads its shared libraries through the platform
//! loader, which consults a single process-wide search variable. The
//! extraction directory must be published there before the first
//! native call.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::os::{self, OS};

/// The loader search variable consulted on this host.
pub fn library_path_var() -> &'static str {
    library_path_var_for(os::detect())
}

pub fn library_path_var_for(os: OS) -> &'static str {
    match os {
        OS::Windows => "PATH",
        OS::Macos => "DYLD_LIBRARY_PATH",
        OS::Linux | OS::Unknown => "LD_LIBRARY_PATH",
    }
}

/// Prepend `dir` to the loader search variable, dropping any existing
/// occurrence of the same entry first.
pub fn publish_library_path(dir: &Path) -> Result<()> {
    let var = library_path_var();
    let entries = prepend_entry(env::var_os(var).as_deref(), dir);

    let joined = env::join_paths(entries)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    unsafe { env::set_var(var, joined) };
    Ok(())
}

/// New search list: `dir` first, the existing entries after, minus any
/// previous occurrence of `dir`.
fn prepend_entry(existing: Option<&OsStr>, dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = existing
        .map(|v| env::split_paths(v).collect())
        .unwrap_or_default();
    entries.retain(|p| p != dir);
    entries.insert(0, dir.to_path_buf());
    entries
}
