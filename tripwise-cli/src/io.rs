//! Capability-based file access for CLI inputs and outputs.
//!
//! Paths are resolved against an ambient directory handle from `cap-std`;
//! every lookup below that handle goes through the capability API.

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading.
pub(crate) fn open_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Whether `path` exists and is a regular file.
pub(crate) fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create or truncate `path`, creating missing parent directories first.
pub(crate) fn create_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_and_name(path)?;
    dir.create(name.as_str())
}

fn parent_of(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

fn parent_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent_of(path), ambient_authority())?;
    Ok((dir, name))
}

fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let (base, relative) = anchor(parent_of(path))?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

/// Split `dir` into a handle on its root (or the working directory for
/// relative paths) and the remaining relative path.
fn anchor(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let (root, rest): (Vec<Utf8Component<'_>>, Vec<Utf8Component<'_>>) = dir
        .components()
        .partition(|part| matches!(part, Utf8Component::Prefix(_) | Utf8Component::RootDir));
    let base: Utf8PathBuf = if root.is_empty() {
        Utf8PathBuf::from(".")
    } else {
        root.iter().map(Utf8Component::as_str).collect()
    };
    let relative: Utf8PathBuf = rest
        .iter()
        .filter(|part| !matches!(part, Utf8Component::CurDir))
        .map(Utf8Component::as_str)
        .collect();
    let handle = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((handle, relative))
}
