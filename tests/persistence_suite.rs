use arthaku_core::domain::{MonthKey, MonthlyBudget, SnapshotPatch};
use arthaku_core::storage::{JsonStorage, StoragePort};
use arthaku_core::store::MonthMap;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn key(value: &str) -> MonthKey {
    value.parse().expect("month key")
}

fn sample_months(income: f64) -> MonthMap {
    let month = key("2024-05");
    let snapshot = MonthlyBudget::blank(month).merged(SnapshotPatch::income(income));
    let mut months = MonthMap::new();
    months.insert(month, snapshot);
    months
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf()), Some(2)).unwrap();

    storage.save(&sample_months(1_000_000.0)).expect("initial save");
    let original = fs::read_to_string(storage.master_path()).expect("read original file");

    // Create a directory that collides with the temp file name to force File::create to fail.
    let tmp_path = tmp_path_for(storage.master_path());
    fs::create_dir_all(&tmp_path).unwrap();

    let result = storage.save(&sample_months(2_000_000.0));
    assert!(
        result.is_err(),
        "expected save to fail when the temp path is a directory"
    );

    let current = fs::read_to_string(storage.master_path()).expect("read after failure");
    assert_eq!(
        current, original,
        "atomic save failure must not corrupt the original file"
    );

    let backups = storage.list_backups().unwrap();
    assert!(
        !backups.is_empty(),
        "backup should be created before attempting the write"
    );

    let _ = fs::remove_dir_all(&tmp_path);
}

#[test]
fn overwrites_back_up_the_previous_blob_verbatim() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf()), Some(5)).unwrap();

    storage.save(&sample_months(1_000_000.0)).expect("first save");
    storage.save(&sample_months(2_000_000.0)).expect("second save");

    let backups = storage.list_backups().unwrap();
    assert!(
        !backups.is_empty(),
        "expected at least one backup after the second save"
    );

    // The newest backup holds the state as it was before the overwrite.
    let backup_raw = fs::read_to_string(storage.backup_path(&backups[0])).unwrap();
    let backed_up: MonthMap = serde_json::from_str(&backup_raw).unwrap();
    assert_eq!(backed_up, sample_months(1_000_000.0));

    let current = storage.load().unwrap().expect("current blob");
    assert_eq!(current, sample_months(2_000_000.0));
}

#[test]
fn mapping_keys_are_the_plain_month_strings() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf()), None).unwrap();

    let mut months = sample_months(5_000.0);
    let extra = key("2023-12");
    months.insert(extra, MonthlyBudget::blank(extra));
    storage.save(&months).expect("save");

    let raw = fs::read_to_string(storage.master_path()).unwrap();
    assert!(raw.contains("\"2024-05\""));
    assert!(raw.contains("\"2023-12\""));

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["2023-12", "2024-05"], "keys stay chronologically sorted");
}

#[test]
fn selection_state_is_independent_of_month_data() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf()), None).unwrap();

    storage.save_selection(&key("2024-07")).expect("save selection");
    assert!(storage.load().expect("load").is_none(), "no month data yet");
    assert_eq!(storage.load_selection().expect("load"), Some(key("2024-07")));

    storage.save(&sample_months(1.0)).expect("save months");
    assert_eq!(
        storage.load_selection().expect("load"),
        Some(key("2024-07")),
        "saving months must not clobber the remembered selection"
    );
}
