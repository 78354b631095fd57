//! Capability-scoped file access helpers.
//!
//! Paths are resolved by opening the containing directory as a `cap-std`
//! capability and operating on the bare file name inside it.

use std::io;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Reads a UTF-8 file.
pub(crate) fn read_utf8(path: &Utf8Path) -> io::Result<String> {
    let (dir, file_name) = open_parent(path)?;
    dir.read_to_string(file_name)
}

/// Writes a UTF-8 file, replacing any existing contents.
pub(crate) fn write_utf8(path: &Utf8Path, contents: &str) -> io::Result<()> {
    let (dir, file_name) = open_parent(path)?;
    dir.write(file_name, contents)
}

/// Creates `path` and its parents if needed, then opens it.
pub(crate) fn create_dir(path: &Utf8Path) -> io::Result<Dir> {
    Dir::create_ambient_dir_all(path, ambient_authority())?;
    Dir::open_ambient_dir(path, ambient_authority())
}

/// Opens an existing directory.
pub(crate) fn open_dir(path: &Utf8Path) -> io::Result<Dir> {
    Dir::open_ambient_dir(path, ambient_authority())
}

/// Opens the directory containing `path` and returns it with the file name.
fn open_parent(path: &Utf8Path) -> io::Result<(Dir, &str)> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{path}' does not name a file"),
        )
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Ok((open_dir(parent)?, file_name))
}
