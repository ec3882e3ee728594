//! The staged-upload working set.
//!
//! [`StagedList`] owns the files a user has chosen but not yet
//! submitted.  Entries keep insertion order, can be renamed or removed
//! individually, and project onto the collection a form submission
//! transmits via [`StagedList::synchronized_files`].

use std::borrow::Cow;

use crate::preview::format_file_size;
use crate::types::{FileContent, FileId, StagedFile};

/// Whether the upload form has anything to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing selected: the drop zone prompt is shown and submission
    /// is disabled.
    Empty,
    /// At least one file is staged.
    Pending {
        /// Number of staged files.
        count: usize,
    },
}

/// A file that could not be admitted to the working set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    /// Reading the file would exceed the staging allowance.
    #[error(
        "{name} ({}) does not fit in the remaining {} of staging space",
        human_size(.size),
        human_size(.remaining)
    )]
    TooLarge {
        name: String,
        size: u64,
        remaining: u64,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn human_size(bytes: &u64) -> String {
    format_file_size(*bytes)
}

/// Running allowance of bytes for files about to be read into memory.
///
/// Staged files live in memory until they are submitted, so a batch is
/// admitted file by file against what is left of the configured limit.
/// A file that does not fit is refused before any of it is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagingBudget {
    remaining: u64,
}

impl StagingBudget {
    #[must_use]
    pub const fn new(remaining: u64) -> Self {
        Self { remaining }
    }

    #[must_use]
    pub const fn remaining(self) -> u64 {
        self.remaining
    }

    /// Reserve `size` bytes for the file called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::TooLarge`] when `size` exceeds what is
    /// left; the budget is unchanged in that case.
    pub fn reserve(&mut self, name: &str, size: u64) -> Result<(), StageError> {
        if size > self.remaining {
            return Err(StageError::TooLarge {
                name: name.to_owned(),
                size,
                remaining: self.remaining,
            });
        }
        self.remaining -= size;
        Ok(())
    }
}

/// Ordered working set of files staged for upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedList {
    entries: Vec<StagedFile>,
    next_id: u64,
}

impl StagedList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append files in arrival order and return their new ids.
    ///
    /// Every file gets a fresh entry, even when a file with the same
    /// name is already staged.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = FileContent>) -> Vec<FileId> {
        files
            .into_iter()
            .map(|content| {
                let id = self.issue_id();
                self.entries.push(StagedFile::new(id, content));
                id
            })
            .collect()
    }

    /// Change the name an entry is submitted under.
    ///
    /// Returns `false` without touching anything when `id` is not
    /// staged.  The name is stored as given, including empty names.
    pub fn rename(&mut self, id: FileId, new_name: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id() == id) {
            Some(entry) => {
                entry.set_display_name(new_name.into());
                true
            }
            None => false,
        }
    }

    /// Remove an entry, returning it if it was staged.
    pub fn remove(&mut self, id: FileId) -> Option<StagedFile> {
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Drop every entry.  Ids issued before the reset are not reused.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn get(&self, id: FileId) -> Option<&StagedFile> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StagedFile> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        if self.entries.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Pending {
                count: self.entries.len(),
            }
        }
    }

    /// Combined size of every staged file.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|entry| entry.content().size()).sum()
    }

    /// What is left of `limit` bytes for new files.
    #[must_use]
    pub fn budget(&self, limit: u64) -> StagingBudget {
        StagingBudget::new(limit.saturating_sub(self.total_size()))
    }

    /// Label for the submit button, e.g. `"Upload 3 files"`.
    #[must_use]
    pub fn upload_label(&self) -> String {
        match self.entries.len() {
            1 => "Upload 1 file".to_owned(),
            n => format!("Upload {n} files"),
        }
    }

    /// The files a submission transmits, one per entry, in order.
    ///
    /// Unrenamed entries yield their original content; renamed entries
    /// yield a copy carrying the edited name and the original bytes,
    /// type and timestamp.
    #[must_use]
    pub fn synchronized_files(&self) -> Vec<Cow<'_, FileContent>> {
        self.entries.iter().map(StagedFile::submission).collect()
    }

    fn issue_id(&mut self) -> FileId {
        let id = FileId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl<'a> IntoIterator for &'a StagedList {
    type Item = &'a StagedFile;
    type IntoIter = std::slice::Iter<'a, StagedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn content(name: &str, len: usize) -> FileContent {
        FileContent::new(name, "application/octet-stream", 42, vec![0xAB_u8; len])
    }

    fn names(list: &StagedList) -> Vec<&str> {
        list.iter().map(StagedFile::display_name).collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list = StagedList::new();
        assert!(list.is_empty());
        assert_eq!(list.view_state(), ViewState::Empty);
        assert!(list.synchronized_files().is_empty());
    }

    #[test]
    fn add_preserves_arrival_order() {
        let mut list = StagedList::new();
        list.add_files([content("a.txt", 1), content("b.txt", 2)]);
        list.add_files([content("c.txt", 3)]);
        assert_eq!(names(&list), ["a.txt", "b.txt", "c.txt"]);
        assert_eq!(list.view_state(), ViewState::Pending { count: 3 });
    }

    #[test]
    fn add_returns_one_id_per_file() {
        let mut list = StagedList::new();
        let ids = list.add_files([content("a.txt", 1), content("b.txt", 1)]);
        assert_eq!(ids.len(), 2);
        assert_eq!(list.get(ids[0]).unwrap().display_name(), "a.txt");
        assert_eq!(list.get(ids[1]).unwrap().display_name(), "b.txt");
    }

    #[test]
    fn duplicate_names_create_distinct_entries() {
        let mut list = StagedList::new();
        let first = list.add_files([content("same.txt", 1)]);
        let second = list.add_files([content("same.txt", 1)]);
        assert_ne!(first, second);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn ids_stay_unique_across_remove_and_reset() {
        let mut list = StagedList::new();
        let mut seen = HashSet::new();
        for id in list.add_files([content("a", 1), content("b", 1)]) {
            assert!(seen.insert(id));
        }
        list.remove(*seen.iter().next().unwrap());
        list.reset();
        for id in list.add_files([content("c", 1), content("d", 1)]) {
            assert!(seen.insert(id), "id {id} was issued twice");
        }
    }

    #[test]
    fn rename_updates_display_name_only() {
        let mut list = StagedList::new();
        let ids = list.add_files([content("draft.txt", 4)]);
        assert!(list.rename(ids[0], "final.txt"));
        let entry = list.get(ids[0]).unwrap();
        assert_eq!(entry.display_name(), "final.txt");
        assert_eq!(entry.content().name(), "draft.txt");
    }

    #[test]
    fn rename_unknown_id_is_noop() {
        let mut list = StagedList::new();
        let ids = list.add_files([content("a.txt", 1)]);
        list.remove(ids[0]);
        let before = list.clone();
        assert!(!list.rename(ids[0], "b.txt"));
        assert_eq!(list, before);
    }

    #[test]
    fn rename_accepts_empty_name() {
        let mut list = StagedList::new();
        let ids = list.add_files([content("a.txt", 1)]);
        assert!(list.rename(ids[0], ""));
        assert_eq!(list.synchronized_files()[0].name(), "");
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut list = StagedList::new();
        let ids = list.add_files([content("a.txt", 1), content("b.txt", 1)]);
        let stale = list.remove(ids[0]).unwrap().id();
        let before = list.clone();
        assert!(list.remove(stale).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut list = StagedList::new();
        let ids = list.add_files([content("a", 1), content("b", 1), content("c", 1)]);
        list.remove(ids[1]);
        assert_eq!(names(&list), ["a", "c"]);
    }

    #[test]
    fn removing_last_entry_returns_to_empty() {
        let mut list = StagedList::new();
        let ids = list.add_files([content("only.txt", 1)]);
        list.remove(ids[0]);
        assert_eq!(list.view_state(), ViewState::Empty);
        assert!(list.synchronized_files().is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut list = StagedList::new();
        list.add_files([content("a", 1), content("b", 1)]);
        list.reset();
        assert!(list.is_empty());
        assert_eq!(list.view_state(), ViewState::Empty);
    }

    #[test]
    fn synchronized_files_mirror_entries() {
        let mut list = StagedList::new();
        let ids = list.add_files([content("a.bin", 10), content("b.bin", 20)]);
        list.rename(ids[1], "renamed.bin");

        let synced = list.synchronized_files();
        assert_eq!(synced.len(), list.len());
        assert!(matches!(synced[0], Cow::Borrowed(_)));
        assert_eq!(*synced[0], *list.get(ids[0]).unwrap().content());
        assert_eq!(synced[1].name(), "renamed.bin");
        assert_eq!(synced[1].bytes(), list.get(ids[1]).unwrap().content().bytes());
    }

    #[test]
    fn budget_shrinks_with_staged_bytes() {
        let mut list = StagedList::new();
        assert_eq!(list.budget(100).remaining(), 100);
        let ids = list.add_files([content("a", 30), content("b", 50)]);
        assert_eq!(list.total_size(), 80);
        assert_eq!(list.budget(100).remaining(), 20);
        assert_eq!(list.budget(60).remaining(), 0);
        list.remove(ids[1]);
        assert_eq!(list.budget(100).remaining(), 70);
    }

    #[test]
    fn reserve_refuses_files_that_do_not_fit() {
        let mut budget = StagingBudget::new(3 * 1024);
        budget.reserve("small.txt", 1024).unwrap();
        assert_eq!(budget.remaining(), 2048);

        let err = budget.reserve("movie.mp4", 5 * 1024 * 1024 * 1024).unwrap_err();
        assert_eq!(
            err.to_string(),
            "movie.mp4 (5 GB) does not fit in the remaining 2 KB of staging space"
        );
        assert_eq!(budget.remaining(), 2048);

        // A refused file does not stop later ones that fit.
        budget.reserve("notes.txt", 2048).unwrap();
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn upload_label_pluralizes() {
        let mut list = StagedList::new();
        list.add_files([content("a", 1)]);
        assert_eq!(list.upload_label(), "Upload 1 file");
        list.add_files([content("b", 1)]);
        assert_eq!(list.upload_label(), "Upload 2 files");
    }

    #[test]
    fn random_add_remove_sequences_keep_order() {
        // Deterministic pseudo-random walk over add/remove operations,
        // checked against a plain Vec model.
        let mut list = StagedList::new();
        let mut model: Vec<(FileId, String)> = Vec::new();
        let mut state: u32 = 0x2545_F491;
        for step in 0..200 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            if model.is_empty() || state % 3 != 0 {
                let name = format!("f{step}");
                let id = list.add_files([content(&name, 1)])[0];
                model.push((id, name));
            } else {
                let index = (state as usize) % model.len();
                let (id, _) = model.remove(index);
                assert!(list.remove(id).is_some());
            }
            let expected: Vec<&str> = model.iter().map(|(_, n)| n.as_str()).collect();
            assert_eq!(names(&list), expected);
            assert_eq!(list.synchronized_files().len(), model.len());
        }
    }
}
