// directory_lister.rs - Directory enumeration
//
// Turns a command-line path into the FileInfo entries to display.  A
// directory yields its children sorted by name; anything else yields
// itself.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::ehm::AppError;
use crate::file_info::FileInfo;





////////////////////////////////////////////////////////////////////////////////
//
//  collect_entries
//
//  Collect the entries for one path.  Entries that vanish or cannot be
//  stat'ed between read_dir and stat are skipped with a warning.
//
////////////////////////////////////////////////////////////////////////////////

pub fn collect_entries(path: &Path, show_hidden: bool) -> Result<Vec<FileInfo>, AppError> {
    if fs::symlink_metadata(path).is_err() {
        return Err(AppError::PathNotFound(path.to_path_buf()));
    }

    if !path.is_dir() {
        let name = path.to_string_lossy().into_owned();
        return Ok(vec![FileInfo::from_path(path, name)?]);
    }

    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(path)? {
        let dir_entry = dir_entry?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();

        match FileInfo::from_path(&dir_entry.path(), name) {
            Ok(info) if !show_hidden && info.is_hidden() => {}
            Ok(info) => entries.push(info),
            Err(e) => warn!(path = %dir_entry.path().display(), error = %e, "skipping entry"),
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(path = %path.display(), count = entries.len(), "collected entries");
    Ok(entries)
}





#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[FileInfo]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    ////////////////////////////////////////////////////////////////////////////
    //
    //  lists_sorted_and_hides_dotfiles
    //
    //  Children come back sorted; dot-files only with show_hidden.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn lists_sorted_and_hides_dotfiles() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join("a.rs"), "").unwrap();
        fs::write(tmp.path().join(".hidden"), "").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let entries = collect_entries(tmp.path(), false).unwrap();
        assert_eq!(names(&entries), ["a.rs", "b.txt", "sub"]);
        assert!(entries[2].is_directory());

        let entries = collect_entries(tmp.path(), true).unwrap();
        assert_eq!(names(&entries), [".hidden", "a.rs", "b.txt", "sub"]);
    }

    #[test]
    fn single_file_lists_itself() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("only.md");
        fs::write(&file, "").unwrap();

        let entries = collect_entries(&file, false).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].name.ends_with("only.md"));
    }

    #[test]
    fn missing_path_is_path_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = collect_entries(&tmp.path().join("missing"), false).unwrap_err();
        assert!(matches!(err, AppError::PathNotFound(_)));
    }
}
