//! Capability-based file access for configuration inputs.
//!
//! Paths are UTF-8 ([`camino`]) and every open goes through [`cap_std`], so
//! callers name a file explicitly rather than relying on process-wide path
//! resolution.
#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open the directory containing `path` and return it with the file name.
fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether `path` is a regular file.
///
/// A missing path is reported as an [`io::ErrorKind::NotFound`] error so
/// callers can tell it apart from a directory.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Read the whole of a UTF-8 text file.
pub fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = open_parent(path)?;
    let mut file = dir.open(name)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    #[fixture]
    fn workdir() -> (TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
        (dir, path)
    }

    #[rstest]
    fn reads_existing_file(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        let path = root.join("campuses.json");
        fs::write(&path, "{\"campuses\": []}").expect("write fixture");

        assert!(file_is_file(&path).expect("metadata"));
        assert_eq!(
            read_to_string(&path).expect("read"),
            "{\"campuses\": []}"
        );
    }

    #[rstest]
    fn missing_file_is_not_found(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        let path = root.join("absent.json");

        let err = file_is_file(&path).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        let err = read_to_string(&path).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn missing_parent_is_not_found(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        let path = root.join("no-such-dir").join("campuses.json");

        let err = file_is_file(&path).expect_err("missing parent");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn directory_is_not_a_file(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        let nested = root.join("nested");
        fs::create_dir(&nested).expect("create dir");

        assert!(!file_is_file(&nested).expect("metadata"));
    }
}
