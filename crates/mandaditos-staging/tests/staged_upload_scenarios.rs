//! Integration test: walk the upload form through pick, rename, remove,
//! and submit using only the pure staging core.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::borrow::Cow;

use mandaditos_staging::{
    FileContent, FileIcon, Preview, StageError, StagedList, SubmitError, SubmitGate, ViewState,
};

const REPORT_MODIFIED: i64 = 1_718_000_000_000;
const PHOTO_MODIFIED: i64 = 1_718_500_000_000;

fn report() -> FileContent {
    FileContent::new(
        "report.pdf",
        "application/pdf",
        REPORT_MODIFIED,
        vec![0x25_u8; 500_000],
    )
}

fn photo() -> FileContent {
    FileContent::new("photo.png", "image/png", PHOTO_MODIFIED, vec![0x89_u8; 2_000_000])
}

#[test]
fn add_rename_remove_submit() {
    let mut list = StagedList::new();
    let mut gate = SubmitGate::new();

    // Pick both files.
    let ids = list.add_files([report(), photo()]);
    let (report_id, photo_id) = (ids[0], ids[1]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.view_state(), ViewState::Pending { count: 2 });

    let previews: Vec<Preview> = list
        .iter()
        .map(|entry| Preview::for_content(entry.content()))
        .collect();
    assert_eq!(previews, [Preview::Icon(FileIcon::Pdf), Preview::Thumbnail]);

    // Rename the report; the synchronized collection follows.
    assert!(list.rename(report_id, "final.pdf"));
    let synced = list.synchronized_files();
    assert_eq!(synced[0].name(), "final.pdf");
    assert_eq!(synced[0].size(), 500_000);
    assert_eq!(synced[0].mime_type(), "application/pdf");
    assert_eq!(synced[0].last_modified(), REPORT_MODIFIED);
    assert!(synced[0].shares_bytes_with(list.get(report_id).unwrap().content()));
    drop(synced);

    // Remove the photo.
    let removed = list.remove(photo_id).expect("photo was staged");
    assert_eq!(removed.display_name(), "photo.png");
    assert_eq!(list.len(), 1);
    assert!(list.get(photo_id).is_none());
    let remaining: Vec<&str> = list.iter().map(|e| e.display_name()).collect();
    assert_eq!(remaining, ["final.pdf"]);

    // Submit what is left.
    gate.begin(list.len()).expect("submission should start");
    let transmitted: Vec<FileContent> = list
        .synchronized_files()
        .into_iter()
        .map(Cow::into_owned)
        .collect();
    assert_eq!(transmitted.len(), 1);
    assert_eq!(transmitted[0].name(), "final.pdf");
    assert_eq!(transmitted[0].bytes(), report().bytes());

    // Success resets the working set.
    list.reset();
    gate.finish();
    assert_eq!(list.view_state(), ViewState::Empty);
}

#[test]
fn empty_submission_is_blocked() {
    let mut list = StagedList::new();
    let mut gate = SubmitGate::new();
    let err = gate.begin(list.len()).unwrap_err();
    assert_eq!(err, SubmitError::NoFiles);
    assert_eq!(err.to_string(), "Please select at least one file to upload.");
    assert!(!gate.is_busy());

    // Removing the last file brings the form back to the same refusal.
    let ids = list.add_files([report()]);
    list.remove(ids[0]);
    assert_eq!(gate.begin(list.len()), Err(SubmitError::NoFiles));
    assert!(!gate.is_busy());
}

#[test]
fn oversized_batch_is_admitted_file_by_file() {
    let limit = 3_000_000;
    let mut list = StagedList::new();
    list.add_files([report()]);

    // A 4 GB video is refused before it is read; the photo still fits.
    let mut budget = list.budget(limit);
    let video = budget.reserve("holiday.mp4", 4 * 1024 * 1024 * 1024);
    assert!(matches!(video, Err(StageError::TooLarge { .. })));
    budget.reserve("photo.png", photo().size()).unwrap();
    list.add_files([photo()]);

    assert_eq!(list.len(), 2);
    assert_eq!(list.total_size(), 2_500_000);
    assert_eq!(budget, list.budget(limit));
}

#[test]
fn failed_submission_keeps_working_set() {
    let mut list = StagedList::new();
    let mut gate = SubmitGate::new();
    list.add_files([report()]);
    let before = list.clone();

    gate.begin(list.len()).unwrap();
    // Transport failed: clear the busy flag and leave the list alone.
    gate.finish();

    assert_eq!(list, before);
    assert!(gate.begin(list.len()).is_ok());
}

#[test]
fn unrenamed_entries_submit_original_content() {
    let mut list = StagedList::new();
    list.add_files([report(), photo()]);
    for (entry, synced) in list.iter().zip(list.synchronized_files()) {
        assert!(matches!(synced, Cow::Borrowed(_)));
        assert_eq!(*synced, *entry.content());
    }
}
