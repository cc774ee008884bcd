use crate::filter::FilterSet;
use log::debug;
use std::fs;
use std::path::Path;

/// Lists the filenames of plain files in `dir` that match the filter set.
///
/// A directory that does not exist or cannot be read yields an empty
/// listing. Subdirectories and entries whose names are not valid Unicode are
/// skipped. The result is sorted by filename.
pub fn list_files(dir: &Path, filter: &FilterSet) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut filenames: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| filter.matches(name))
        .collect();

    filenames.sort();
    filenames
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn nonexistent_directory_yields_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let filter = FilterSet::parse("*");
        assert!(list_files(&missing, &filter).is_empty());
    }

    #[test]
    fn listing_excludes_files_not_matching_any_pattern() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.tif");
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "c.png");

        let filter = FilterSet::parse("*.tif *.jpg");
        let listed = list_files(dir.path(), &filter);
        assert_eq!(listed, vec!["a.tif".to_string(), "b.jpg".to_string()]);
    }

    #[test]
    fn listing_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.tif");
        fs::create_dir(dir.path().join("nested.tif")).unwrap();

        let filter = FilterSet::parse("*.tif");
        assert_eq!(list_files(dir.path(), &filter), vec!["a.tif".to_string()]);
    }

    #[test]
    fn listing_is_sorted_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "zebra.tif");
        touch(dir.path(), "apple.tif");
        touch(dir.path(), "mango.tif");

        let filter = FilterSet::parse("*.tif");
        let listed = list_files(dir.path(), &filter);
        assert_eq!(listed, vec!["apple.tif", "mango.tif", "zebra.tif"]);
    }

    #[test]
    fn match_all_filter_lists_every_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.tif");
        touch(dir.path(), "notes.txt");

        let filter = FilterSet::parse("*");
        assert_eq!(list_files(dir.path(), &filter).len(), 2);
    }
}
