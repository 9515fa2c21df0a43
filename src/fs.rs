//! Capability-scoped access to files named by ambient paths.

use std::io::{self, ErrorKind};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// A file's parent directory opened as a capability, plus the file name
/// within it.
#[derive(Debug)]
pub(crate) struct ParentDir {
    pub(crate) dir: Dir,
    pub(crate) file_name: String,
}

/// Opens the directory holding `path`.
///
/// Symlinks are resolved first so that a link pointing outside its own
/// directory reaches the real file, and saves replace the target rather
/// than the link. A path that does not exist yet is used as given.
pub(crate) fn open_parent_dir(path: &Utf8Path) -> io::Result<ParentDir> {
    let resolved = resolve_symlinks(path)?;
    let file_name = resolved.file_name().ok_or_else(|| {
        io::Error::new(
            ErrorKind::InvalidInput,
            format!("path '{path}' must include a file name"),
        )
    })?;
    let parent = resolved
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;

    Ok(ParentDir {
        dir,
        file_name: file_name.to_owned(),
    })
}

fn resolve_symlinks(path: &Utf8Path) -> io::Result<Utf8PathBuf> {
    match path.canonicalize_utf8() {
        Ok(resolved) => Ok(resolved),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(path.to_owned()),
        Err(err) => Err(err),
    }
}

/// Reads `path` through its parent directory capability.
///
/// Returns `Ok(None)` when the file or its directory does not exist.
pub(crate) fn read_optional(path: &Utf8Path) -> io::Result<Option<String>> {
    let parent = match open_parent_dir(path) {
        Ok(parent) => parent,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };
    match parent.dir.read_to_string(&parent.file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
