// file_info.rs - File entry descriptor and mode bit constants
//
// The icon resolver only ever sees a FileInfo: display name, Unix-style
// mode bits and the symlink classification.  Everything platform specific
// stays in from_path.

use std::fs::{self, Metadata};
use std::path::Path;

use crate::ehm::AppError;

////////////////////////////////////////////////////////////////////////////////
//
//  Mode bit constants (Unix st_mode layout)
//
////////////////////////////////////////////////////////////////////////////////

pub const S_IFMT:   u32 = 0o170_000;
pub const S_IFSOCK: u32 = 0o140_000;
pub const S_IFLNK:  u32 = 0o120_000;
pub const S_IFREG:  u32 = 0o100_000;
pub const S_IFBLK:  u32 = 0o060_000;
pub const S_IFDIR:  u32 = 0o040_000;
pub const S_IFCHR:  u32 = 0o020_000;
pub const S_IFIFO:  u32 = 0o010_000;

pub const S_ISUID:  u32 = 0o4000;
pub const S_ISGID:  u32 = 0o2000;
pub const S_ISVTX:  u32 = 0o1000;

pub const S_IWOTH:  u32 = 0o0002;
pub const S_IXALL:  u32 = 0o0111;

////////////////////////////////////////////////////////////////////////////////
//
//  Link state
//
////////////////////////////////////////////////////////////////////////////////

/// Symlink classification of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkState {
    #[default]
    NotLink,
    Working,
    Broken,
}

////////////////////////////////////////////////////////////////////////////////
//
//  File information
//
////////////////////////////////////////////////////////////////////////////////

/// A single listed entry as seen by the icon resolver.
///
/// For a working symlink `mode` describes the link target, so a link to a
/// directory is a directory.  For a broken link it is the link's own mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name:       String,
    pub mode:       u32,
    pub link_state: LinkState,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, mode: u32, link_state: LinkState) -> Self {
        FileInfo { name: name.into(), mode, link_state }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_path
    //
    //  Stat a path without following links, then follow a link once to
    //  classify it as working or broken.  `name` is what gets displayed.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_path(path: &Path, name: impl Into<String>) -> Result<Self, AppError> {
        let link_meta = fs::symlink_metadata(path)?;

        let (meta, link_state) = if link_meta.file_type().is_symlink() {
            match fs::metadata(path) {
                Ok(target) => (target, LinkState::Working),
                Err(_)     => (link_meta, LinkState::Broken),
            }
        } else {
            (link_meta, LinkState::NotLink)
        };

        Ok(FileInfo::new(name, mode_of(&meta), link_state))
    }

    pub fn file_type_bits(&self) -> u32 {
        self.mode & S_IFMT
    }

    pub fn is_directory(&self) -> bool {
        self.file_type_bits() == S_IFDIR
    }

    pub fn is_regular(&self) -> bool {
        self.file_type_bits() == S_IFREG
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  mode_of
//
//  Mode bits for a Metadata.  Non-Unix targets have no st_mode, so one is
//  synthesized from the file type and the read-only flag.
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(unix)]
fn mode_of(meta: &Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;

    meta.mode()
}

#[cfg(not(unix))]
fn mode_of(meta: &Metadata) -> u32 {
    let file_type = meta.file_type();
    let type_bits = if file_type.is_dir() {
        S_IFDIR
    } else if file_type.is_symlink() {
        S_IFLNK
    } else {
        S_IFREG
    };

    let perm_bits = if meta.permissions().readonly() { 0o444 } else { 0o644 };
    let exec_bits = if file_type.is_dir() { S_IXALL } else { 0 };

    type_bits | perm_bits | exec_bits
}





#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_and_regular_bits() {
        let dir = FileInfo::new("src", S_IFDIR | 0o755, LinkState::NotLink);
        assert!(dir.is_directory());
        assert!(!dir.is_regular());

        let file = FileInfo::new("main.rs", S_IFREG | 0o644, LinkState::NotLink);
        assert!(file.is_regular());
        assert!(!file.is_directory());
    }

    #[test]
    fn file_type_bits_ignore_permissions() {
        let fi = FileInfo::new("x", S_IFCHR | S_ISUID | 0o777, LinkState::NotLink);
        assert_eq!(fi.file_type_bits(), S_IFCHR);
    }

    #[test]
    fn hidden_is_leading_dot() {
        assert!(FileInfo::new(".bashrc", S_IFREG, LinkState::NotLink).is_hidden());
        assert!(!FileInfo::new("bashrc", S_IFREG, LinkState::NotLink).is_hidden());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_path_regular_and_directory
    //
    //  Verifies from_path classifies a real file and directory.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn from_path_regular_and_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file_path = tmp.path().join("notes.txt");
        fs::write(&file_path, "hi").unwrap();

        let fi = FileInfo::from_path(&file_path, "notes.txt").unwrap();
        assert!(fi.is_regular());
        assert_eq!(fi.link_state, LinkState::NotLink);
        assert_eq!(fi.name, "notes.txt");

        let di = FileInfo::from_path(tmp.path(), "tmp").unwrap();
        assert!(di.is_directory());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_path_symlinks
    //
    //  A link to an existing directory is Working and takes the target's
    //  mode; a dangling link is Broken.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[cfg(unix)]
    #[test]
    fn from_path_symlinks() {
        use std::os::unix::fs::symlink;

        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();

        let good = tmp.path().join("good");
        symlink(&target, &good).unwrap();
        let fi = FileInfo::from_path(&good, "good").unwrap();
        assert_eq!(fi.link_state, LinkState::Working);
        assert!(fi.is_directory());

        let bad = tmp.path().join("bad");
        symlink(tmp.path().join("missing"), &bad).unwrap();
        let fi = FileInfo::from_path(&bad, "bad").unwrap();
        assert_eq!(fi.link_state, LinkState::Broken);
        assert_eq!(fi.file_type_bits(), S_IFLNK);
    }

    #[test]
    fn from_path_missing_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = FileInfo::from_path(&tmp.path().join("nope"), "nope").unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
