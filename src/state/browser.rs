//! Directory, filter, and file-list state, plus the display refresh decision.

use crate::file_utils;
use crate::filter::FilterSet;
use log::debug;
use std::path::{Path, PathBuf};

/// What the controller should do with the display after a listing refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshAction {
    /// Leave the display alone (current file still listed, or nothing to show).
    KeepDisplay,
    /// Load the first file of the fresh listing.
    LoadFirst(PathBuf),
}

/// Manages the watched directory, the filter set, the file listing, and the
/// path of the currently displayed file.
pub struct BrowserState {
    directory: PathBuf,
    filter: FilterSet,
    filenames: Vec<String>,
    current_file_path: Option<PathBuf>,
}

impl BrowserState {
    /// Creates a state for `directory` with an empty listing.
    pub fn new(directory: PathBuf, filter: FilterSet) -> Self {
        Self {
            directory,
            filter,
            filenames: Vec::new(),
            current_file_path: None,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    /// Replaces the watched directory. The listing is stale until the next
    /// `refresh_listing` call.
    pub fn set_directory(&mut self, directory: PathBuf) {
        self.directory = directory;
    }

    /// Replaces the filter set wholesale from a space-separated pattern string.
    pub fn set_filter(&mut self, input: &str) {
        self.filter = FilterSet::parse(input);
    }

    /// Returns the filename at `index` in the current listing.
    pub fn filename_at(&self, index: usize) -> Option<String> {
        self.filenames.get(index).cloned()
    }

    /// Marks the file at `index` as the current one and returns its full path.
    pub fn select_index(&mut self, index: usize) -> Option<PathBuf> {
        let path = self.directory.join(self.filenames.get(index)?);
        self.current_file_path = Some(path.clone());
        Some(path)
    }

    /// Re-lists the directory and decides what the display should do.
    ///
    /// An empty listing leaves the last displayed image on screen. A listing
    /// that still contains the current file in the same directory changes
    /// nothing. Otherwise the first file of the fresh listing becomes current
    /// and is reported for loading, unless it already is the current file.
    pub fn refresh_listing(&mut self) -> RefreshAction {
        self.filenames = file_utils::list_files(&self.directory, &self.filter);
        debug!(
            "Listed {} files in {}",
            self.filenames.len(),
            self.directory.display()
        );

        let Some(first) = self.filenames.first() else {
            return RefreshAction::KeepDisplay;
        };
        let first_path = self.directory.join(first);

        if let Some(current) = &self.current_file_path {
            let same_directory = current.parent() == Some(self.directory.as_path());
            let still_listed = current
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| self.filenames.iter().any(|f| f == name))
                .unwrap_or(false);
            if (same_directory && still_listed) || first_path == *current {
                return RefreshAction::KeepDisplay;
            }
        }

        self.current_file_path = Some(first_path.clone());
        RefreshAction::LoadFirst(first_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    fn state_for(dir: &Path, patterns: &str) -> BrowserState {
        BrowserState::new(dir.to_path_buf(), FilterSet::parse(patterns))
    }

    #[test]
    fn first_refresh_loads_the_first_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "img1.tif");
        touch(dir.path(), "img2.tif");

        let mut state = state_for(dir.path(), "*.tif");
        let action = state.refresh_listing();

        assert_eq!(
            action,
            RefreshAction::LoadFirst(dir.path().join("img1.tif"))
        );
        assert_eq!(state.filenames(), ["img1.tif", "img2.tif"]);
        assert_eq!(state.current_file_path, Some(dir.path().join("img1.tif")));
    }

    #[test]
    fn refresh_keeps_display_while_current_file_is_still_listed() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "img1.tif");
        touch(dir.path(), "img2.tif");

        let mut state = state_for(dir.path(), "*.tif");
        state.refresh_listing();
        state.select_index(1);

        assert_eq!(state.refresh_listing(), RefreshAction::KeepDisplay);
        assert_eq!(state.current_file_path, Some(dir.path().join("img2.tif")));
    }

    #[test]
    fn empty_listing_after_filter_change_leaves_display_untouched() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "img1.tif");
        touch(dir.path(), "img2.tif");

        let mut state = state_for(dir.path(), "*.tif");
        state.refresh_listing();
        state.select_index(1);

        state.set_filter("*.jpg");
        assert_eq!(state.refresh_listing(), RefreshAction::KeepDisplay);
        assert!(state.filenames().is_empty());
        assert_eq!(state.current_file_path, Some(dir.path().join("img2.tif")));
    }

    #[test]
    fn switching_directories_loads_the_first_file_there() {
        let old = tempfile::tempdir().unwrap();
        let new = tempfile::tempdir().unwrap();
        touch(old.path(), "img1.tif");
        touch(new.path(), "other.tif");

        let mut state = state_for(old.path(), "*.tif");
        state.refresh_listing();

        state.set_directory(new.path().to_path_buf());
        assert_eq!(
            state.refresh_listing(),
            RefreshAction::LoadFirst(new.path().join("other.tif"))
        );
        assert_eq!(state.current_file_path, Some(new.path().join("other.tif")));
    }

    #[test]
    fn removing_the_current_file_falls_back_to_the_first() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "img1.tif");
        touch(dir.path(), "img2.tif");

        let mut state = state_for(dir.path(), "*.tif");
        state.refresh_listing();
        state.select_index(1);

        fs::remove_file(dir.path().join("img2.tif")).unwrap();
        assert_eq!(
            state.refresh_listing(),
            RefreshAction::LoadFirst(dir.path().join("img1.tif"))
        );
    }

    #[test]
    fn refresh_on_a_missing_directory_keeps_display() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        let mut state = state_for(&missing, "*.tif");
        assert_eq!(state.refresh_listing(), RefreshAction::KeepDisplay);
        assert!(state.filenames().is_empty());
    }

    #[test]
    fn select_index_out_of_range_is_none() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "img1.tif");

        let mut state = state_for(dir.path(), "*.tif");
        state.refresh_listing();

        assert!(state.select_index(5).is_none());
        assert_eq!(state.filename_at(5), None);
    }
}
