use laudo_storage::error::StorageError;
use laudo_storage::history::{HISTORY_FILE, ReportHistory};
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn history() -> (tempfile::TempDir, ReportHistory) {
    let dir = tempfile::tempdir().unwrap();
    let history = ReportHistory::in_dir(dir.path().join("data"));
    (dir, history)
}

#[test]
fn missing_file_is_empty_history() {
    let (_dir, history) = history();
    assert!(history.list().unwrap().is_empty());
}

#[test]
fn save_puts_newest_first() {
    let (_dir, history) = history();
    let first = history.save(Some("Abdome"), "US Abdome - Total", "primeiro").unwrap();
    let second = history.save(None, "US Cervical - Tireoide", "segundo").unwrap();

    let ids: Vec<Uuid> = history.list().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(first.title.starts_with("Abdome - "));
    assert!(second.title.starts_with("Laudo - "));
    assert_eq!(first.created_at, first.updated_at);
}

#[test]
fn get_returns_saved_report() {
    let (_dir, history) = history();
    let saved = history.save(Some("Pelve"), "US Pelve Feminina", "conteúdo").unwrap();

    let loaded = history.get(saved.id).unwrap();
    assert_eq!(loaded.content, "conteúdo");
    assert_eq!(loaded.exam_type, "US Pelve Feminina");
}

#[test]
fn update_replaces_content_and_bumps_timestamp() {
    let (_dir, history) = history();
    let saved = history.save(None, "US Abdome - Total", "antes").unwrap();

    let updated = history.update(saved.id, "depois").unwrap();
    assert_eq!(updated.content, "depois");
    assert_eq!(updated.created_at, saved.created_at);
    assert!(updated.updated_at >= saved.updated_at);
    assert_eq!(history.get(saved.id).unwrap().content, "depois");
}

#[test]
fn unknown_ids_are_not_found() {
    let (_dir, history) = history();
    history.save(None, "US Abdome - Total", "x").unwrap();
    let missing = Uuid::new_v4();

    assert!(matches!(history.get(missing), Err(StorageError::NotFound { id }) if id == missing));
    assert!(matches!(history.update(missing, "y"), Err(StorageError::NotFound { .. })));
    assert!(matches!(history.delete(missing), Err(StorageError::NotFound { .. })));
    assert_eq!(history.list().unwrap().len(), 1);
}

#[test]
fn delete_removes_only_that_report() {
    let (_dir, history) = history();
    let keep = history.save(None, "US Abdome - Total", "a").unwrap();
    let gone = history.save(None, "US Abdome - Total", "b").unwrap();

    history.delete(gone.id).unwrap();

    let ids: Vec<Uuid> = history.list().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![keep.id]);
}

#[test]
fn history_file_is_pretty_json_without_temp_leftovers() {
    let (dir, history) = history();
    history.save(None, "US Abdome - Total", "a").unwrap();

    let data = dir.path().join("data");
    let json = std::fs::read_to_string(data.join(HISTORY_FILE)).unwrap();
    assert!(json.starts_with("[\n"));
    assert!(!data.join(format!("{HISTORY_FILE}.tmp")).exists());
}

#[test]
fn corrupt_history_is_reported_not_discarded() {
    let (dir, history) = history();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join(HISTORY_FILE), "{ not json").unwrap();

    assert!(matches!(history.list(), Err(StorageError::Serialization(_))));
    assert!(history.save(None, "US Abdome - Total", "a").is_err());
    assert_eq!(std::fs::read_to_string(data.join(HISTORY_FILE)).unwrap(), "{ not json");
}

#[cfg(unix)]
#[test]
fn history_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, history) = history();
    history.save(None, "US Abdome - Total", "a").unwrap();

    let mode = std::fs::metadata(history.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
