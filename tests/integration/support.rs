//! Shared fixtures.

use navtree::hierarchy::{CompareCategory, Hierarchy, ObjectId, PairItem, SyncOperation};
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with the given environment variables set, serialized against all
/// other callers. Previous values are restored afterwards.
pub fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
        .collect();
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let result = catch_unwind(AssertUnwindSafe(f));

    for (key, value) in saved {
        match value {
            Some(v) => std::env::set_var(&key, v),
            None => std::env::remove_var(&key),
        }
    }
    match result {
        Ok(value) => value,
        Err(panic) => resume_unwind(panic),
    }
}

pub fn equal(name: &str) -> PairItem {
    PairItem::new(name, CompareCategory::Equal, SyncOperation::Equal)
}

pub fn left_newer(name: &str) -> PairItem {
    PairItem::new(name, CompareCategory::LeftNewer, SyncOperation::OverwriteRight)
}

pub struct TwoPairs {
    pub hierarchy: Hierarchy,
    pub photos: ObjectId,
    pub docs: ObjectId,
    pub work: ObjectId,
    pub readme: ObjectId,
}

/// photos: /data/photos vs /backup/photos, everything equal
/// ├── 2023/
/// │   ├── a.jpg   100
/// │   └── b.jpg   100
///
/// docs: /data/docs vs /backup/docs
/// ├── work/
/// │   ├── report.pdf   200/150, left newer
/// │   ├── plan.txt     50, equal
/// │   └── archive/
/// │       └── old.txt  10, equal
/// └── readme           5, equal
pub fn two_pairs() -> TwoPairs {
    let mut h = Hierarchy::new();
    let photos = h.add_base_folder("/data/photos".into(), "/backup/photos".into());
    let year = h.add_folder(photos, equal("2023")).unwrap();
    h.add_file(year, equal("a.jpg"), Some(100), Some(100)).unwrap();
    h.add_file(year, equal("b.jpg"), Some(100), Some(100)).unwrap();

    let docs = h.add_base_folder("/data/docs".into(), "/backup/docs".into());
    let work = h.add_folder(docs, equal("work")).unwrap();
    h.add_file(work, left_newer("report.pdf"), Some(200), Some(150))
        .unwrap();
    h.add_file(work, equal("plan.txt"), Some(50), Some(50)).unwrap();
    let archive = h.add_folder(work, equal("archive")).unwrap();
    h.add_file(archive, equal("old.txt"), Some(10), Some(10)).unwrap();
    let readme = h.add_file(docs, equal("readme"), Some(5), Some(5)).unwrap();

    TwoPairs {
        hierarchy: h,
        photos,
        docs,
        work,
        readme,
    }
}

/// The same data as [`two_pairs`], as a JSON snapshot.
pub const TWO_PAIRS_JSON: &str = r#"{
  "base_folders": [
    {
      "left": "/data/photos",
      "right": "/backup/photos",
      "items": [
        { "kind": "folder", "name": "2023", "items": [
          { "kind": "file", "name": "a.jpg", "size_left": 100, "size_right": 100 },
          { "kind": "file", "name": "b.jpg", "size_left": 100, "size_right": 100 }
        ] }
      ]
    },
    {
      "left": "/data/docs",
      "right": "/backup/docs",
      "items": [
        { "kind": "folder", "name": "work", "items": [
          { "kind": "file", "name": "report.pdf", "category": "left_newer",
            "sync_operation": "overwrite_right", "size_left": 200, "size_right": 150 },
          { "kind": "file", "name": "plan.txt", "size_left": 50, "size_right": 50 },
          { "kind": "folder", "name": "archive", "items": [
            { "kind": "file", "name": "old.txt", "size_left": 10, "size_right": 10 }
          ] }
        ] },
        { "kind": "file", "name": "readme", "size_left": 5, "size_right": 5 }
      ]
    }
  ]
}"#;
