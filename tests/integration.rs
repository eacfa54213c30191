use vdrive::Drive;
use vdrive::blob::{BlobStore, DownloadLog, MemoryBlobStore};
use vdrive::config::DriveConfig;
use vdrive::entity::{EntityId, Location, PayloadHandle, PreviewKind, RawPayload};
use vdrive::error::{BlobError, DriveError, ErrorKind, NavigateError, StoreError};
use vdrive::navigate::DEFAULT_ROOT_LABEL;
use vdrive::search::filter_children;
use vdrive::selection::ToggleOutcome;

// Helper to build a payload of a given size
fn payload(name: &str, mime: &str, size: usize) -> RawPayload {
    RawPayload::new(name, mime, vec![7; size])
}

// Helper to check the breadcrumb invariant
fn assert_trail_consistent<B: BlobStore>(drive: &Drive<B>) {
    let trail = drive.trail();
    assert_eq!(trail[0].location, Location::Root);
    assert_eq!(trail[0].name, DEFAULT_ROOT_LABEL);
    assert_eq!(trail.last().unwrap().location, drive.location());
}

// Blob store that refuses payloads whose name starts with "bad"
#[derive(Default)]
struct PickyBlobStore {
    inner: MemoryBlobStore,
    released: Vec<PayloadHandle>,
}

impl BlobStore for PickyBlobStore {
    fn obtain_handle(&mut self, payload: &RawPayload) -> Result<PayloadHandle, BlobError> {
        if payload.name.starts_with("bad") {
            return Err(BlobError::Unreadable(payload.name.clone()));
        }
        self.inner.obtain_handle(payload)
    }

    fn release_handle(&mut self, handle: &PayloadHandle) {
        self.released.push(handle.clone());
        self.inner.release_handle(handle);
    }
}

#[test]
fn test_scenario_a_create_folder_under_root() {
    let mut drive = Drive::new();
    let docs = drive.create_folder("Docs").unwrap();

    assert_eq!(drive.store().folder_count(), 1);
    assert_eq!(docs.parent, Location::Root);

    let items = drive.visible_items();
    assert_eq!(items.folders.len(), 1);
    assert_eq!(items.folders[0].id, docs.id);
}

#[test]
fn test_scenario_b_upload_into_folder() {
    let mut drive = Drive::new();
    let docs = drive.create_folder("Docs").unwrap();
    drive.enter(docs.id).unwrap();

    let result = drive
        .upload(vec![payload("x.png", "image/png", 100)])
        .unwrap();
    assert_eq!(result.files.len(), 1);
    let x = &result.files[0];
    assert_eq!(x.parent, Location::Folder(docs.id));
    assert_eq!(x.size, 100);
    assert_eq!(x.preview_kind(), PreviewKind::Image);

    drive.jump_to(0).unwrap();
    let items = drive.visible_items();
    assert!(items.files.is_empty());
    assert_eq!(items.find("x.png"), None);
}

#[test]
fn test_scenario_c_jump_clears_selection() {
    let mut drive = Drive::new();
    let docs = drive.create_folder("Docs").unwrap();
    drive.enter(docs.id).unwrap();
    let x = drive
        .upload(vec![payload("x.png", "image/png", 100)])
        .unwrap()
        .files
        .remove(0);

    assert_eq!(drive.toggle(x.entity_id()), ToggleOutcome::Selected);
    drive.jump_to(0).unwrap();

    assert!(drive.selection().is_empty());
    assert_eq!(drive.toggle(x.entity_id()), ToggleOutcome::Ignored);
    assert!(drive.selection().is_empty());

    drive.enter(docs.id).unwrap();
    assert_eq!(drive.toggle(x.entity_id()), ToggleOutcome::Selected);
}

#[test]
fn test_scenario_d_delete_cascades_to_contents() {
    let mut drive = Drive::new();
    let docs = drive.create_folder("Docs").unwrap();
    drive.enter(docs.id).unwrap();
    let x = drive
        .upload(vec![payload("x.png", "image/png", 100)])
        .unwrap()
        .files
        .remove(0);
    drive.home();

    let result = drive.delete([docs.entity_id()]);

    assert_eq!(result.folders.len(), 1);
    assert_eq!(result.files.len(), 1);
    assert!(drive.store().file(x.id).is_none());
    assert!(!drive.blobs().is_live(&x.handle));
    assert_eq!(drive.blobs().live_handles(), 0);
    assert!(drive.store().verify_integrity().is_empty());
}

#[test]
fn test_tree_has_no_cycles_after_many_creates() {
    let mut drive = Drive::new();
    let mut parents = vec![Location::Root];

    for i in 0..30 {
        let parent = parents[(i * 7) % parents.len()];
        drive.home();
        if let Some(chain) = drive.store().path_to(parent) {
            let ids: Vec<_> = chain.iter().map(|f| f.id).collect();
            for id in ids {
                drive.enter(id).unwrap();
            }
        }
        let folder = drive.create_folder(&format!("f{}", i)).unwrap();
        parents.push(Location::Folder(folder.id));
        assert_trail_consistent(&drive);
    }

    for folder in drive.store().folders() {
        let chain = drive.store().path_to(Location::Folder(folder.id)).unwrap();
        assert_eq!(chain.first().unwrap().parent, Location::Root);
        assert_eq!(chain.last().unwrap().id, folder.id);
    }
    assert!(drive.store().verify_integrity().is_empty());
}

#[test]
fn test_navigation_invariant_holds_across_moves() {
    let mut drive = Drive::new();
    let a = drive.create_folder("a").unwrap();
    drive.enter(a.id).unwrap();
    let b = drive.create_folder("b").unwrap();
    drive.enter(b.id).unwrap();
    let c = drive.create_folder("c").unwrap();
    drive.enter(c.id).unwrap();
    assert_trail_consistent(&drive);
    assert_eq!(drive.trail().len(), 4);

    drive.jump_to(2).unwrap();
    assert_trail_consistent(&drive);
    assert_eq!(drive.location(), Location::Folder(b.id));

    drive.up();
    assert_trail_consistent(&drive);
    assert_eq!(drive.location(), Location::Folder(a.id));

    let err = drive.jump_to(9).unwrap_err();
    assert_eq!(
        err,
        DriveError::Navigate(NavigateError::TrailIndexOutOfRange { index: 9, len: 2 })
    );
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(drive.location(), Location::Folder(a.id));
}

#[test]
fn test_up_clears_selection() {
    let mut drive = Drive::new();
    let a = drive.create_folder("a").unwrap();
    drive.enter(a.id).unwrap();
    let file = drive
        .upload(vec![payload("notes.txt", "text/plain", 3)])
        .unwrap()
        .files
        .remove(0);
    assert_eq!(drive.toggle(file.entity_id()), ToggleOutcome::Selected);

    assert_eq!(drive.up(), Location::Root);

    assert!(drive.selection().is_empty());
    assert_trail_consistent(&drive);
}

#[test]
fn test_rejected_jump_keeps_selection_and_location() {
    let mut drive = Drive::new();
    let a = drive.create_folder("a").unwrap();
    drive.enter(a.id).unwrap();
    let file = drive
        .upload(vec![payload("notes.txt", "text/plain", 3)])
        .unwrap()
        .files
        .remove(0);
    drive.toggle(file.entity_id());

    let err = drive.jump_to(2).unwrap_err();

    assert_eq!(
        err,
        DriveError::Navigate(NavigateError::TrailIndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(drive.location(), Location::Folder(a.id));
    assert_eq!(drive.selection().to_vec(), vec![file.entity_id()]);
}

#[test]
fn test_entering_non_child_is_rejected_without_side_effects() {
    let mut drive = Drive::new();
    let a = drive.create_folder("a").unwrap();
    drive.enter(a.id).unwrap();
    let inner = drive.create_folder("inner").unwrap();
    drive.home();
    drive.toggle(a.entity_id());

    let err = drive.enter(inner.id).unwrap_err();
    assert!(matches!(
        err,
        DriveError::Navigate(NavigateError::NotAChild { .. })
    ));
    assert_eq!(drive.location(), Location::Root);
    assert_eq!(drive.selection().len(), 1);
}

#[test]
fn test_search_is_scoped_and_order_preserving() {
    let mut drive = Drive::new();
    let docs = drive.create_folder("Docs").unwrap();
    drive.create_folder("Reports").unwrap();
    drive
        .upload(vec![
            payload("report-b.txt", "text/plain", 1),
            payload("photo.png", "image/png", 1),
            payload("REPORT-a.txt", "text/plain", 1),
        ])
        .unwrap();
    drive.enter(docs.id).unwrap();
    drive.upload(vec![payload("report-hidden.txt", "", 1)]).unwrap();
    drive.home();

    let (folders, files) = drive.store().children(Location::Root);
    let (all_folders, all_files) = filter_children(&folders, &files, "");
    assert_eq!(all_folders, folders);
    assert_eq!(all_files, files);

    drive.set_query("report");
    let items = drive.visible_items();
    let folder_names: Vec<_> = items.folders.iter().map(|f| f.name.as_str()).collect();
    let file_names: Vec<_> = items.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(folder_names, ["Reports"]);
    assert_eq!(file_names, ["report-b.txt", "REPORT-a.txt"]);
}

#[test]
fn test_delete_twice_matches_delete_once() {
    let mut drive = Drive::new();
    let docs = drive.create_folder("Docs").unwrap();
    let files = drive
        .upload(vec![payload("a", "", 1), payload("b", "", 1)])
        .unwrap()
        .files;
    let ids = vec![docs.entity_id(), files[0].entity_id()];

    drive.delete(ids.clone());
    let folders_after_once = drive.store().folder_count();
    let files_after_once = drive.store().file_count();
    let listing_once = drive.visible_items();

    let second = drive.delete(ids);
    assert!(second.is_empty());
    assert_eq!(drive.store().folder_count(), folders_after_once);
    assert_eq!(drive.store().file_count(), files_after_once);
    assert_eq!(drive.visible_items(), listing_once);
}

#[test]
fn test_upload_preserves_order_regardless_of_size() {
    let mut drive = Drive::new();
    let result = drive
        .upload(vec![
            payload("a", "", 5000),
            payload("b", "", 1),
            payload("c", "", 300),
        ])
        .unwrap();

    let names: Vec<_> = result.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    let listed: Vec<_> = drive
        .visible_items()
        .files
        .iter()
        .map(|f| f.name.clone())
        .collect();
    assert_eq!(listed, ["a", "b", "c"]);
}

#[test]
fn test_upload_partial_failure_skips_unreadable_payloads() {
    let mut drive = Drive::with_blob_store(&DriveConfig::default(), PickyBlobStore::default());

    let result = drive
        .upload(vec![
            payload("one", "", 1),
            payload("bad-two", "", 1),
            payload("three", "", 1),
        ])
        .unwrap();

    let names: Vec<_> = result.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["one", "three"]);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(
        DriveError::from(result.failures[0].error.clone()).kind(),
        ErrorKind::Resource
    );
    assert_eq!(drive.blobs().inner.live_handles(), 2);
}

#[test]
fn test_each_handle_released_exactly_once() {
    let mut drive = Drive::with_blob_store(&DriveConfig::default(), PickyBlobStore::default());
    let docs = drive.create_folder("Docs").unwrap();
    drive.enter(docs.id).unwrap();
    let files = drive
        .upload(vec![payload("a", "", 1), payload("b", "", 1)])
        .unwrap()
        .files;
    drive.home();

    drive.toggle(docs.entity_id());
    drive.delete_selected().unwrap();
    drive.delete([docs.entity_id()]);

    let released = &drive.blobs().released;
    assert_eq!(released.len(), 2);
    for file in &files {
        assert_eq!(released.iter().filter(|h| **h == file.handle).count(), 1);
    }
}

#[test]
fn test_create_folder_validation_is_a_noop() {
    let mut drive = Drive::new();
    let err = drive.create_folder("   ").unwrap_err();
    assert_eq!(err, DriveError::Store(StoreError::EmptyName));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(drive.visible_items().is_empty());
}

#[test]
fn test_selection_survives_unrelated_delete() {
    let mut drive = Drive::new();
    let files = drive
        .upload(vec![payload("a", "", 1), payload("b", "", 1)])
        .unwrap()
        .files;
    drive.toggle(files[0].entity_id());
    drive.toggle(files[1].entity_id());

    drive.delete([files[1].entity_id()]);

    let selected: Vec<EntityId> = drive.selection().ids().collect();
    assert_eq!(selected, vec![files[0].entity_id()]);
}

#[test]
fn test_download_does_not_mutate() {
    let mut drive = Drive::new();
    let file = drive
        .upload(vec![payload("movie.mp4", "video/mp4", 64)])
        .unwrap()
        .files
        .remove(0);
    let before = drive.visible_items();

    let mut downloads = DownloadLog::new();
    drive.download(file.id, &mut downloads).unwrap();

    assert_eq!(drive.visible_items(), before);
    assert_eq!(downloads.last().unwrap().handle, file.handle);
    assert_eq!(drive.preview(file.id).unwrap().kind, PreviewKind::Video);
    assert_eq!(drive.blobs().read(&file.handle).map(<[u8]>::len), Some(64));
}
