#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use tudu::libs::error::TaskError;
    use tudu::libs::storage::Storage;
    use tudu::libs::store::TaskStore;
    use tudu::libs::task::{Category, Priority};

    fn storage_in(dir: &TempDir) -> Storage {
        Storage::with_path(dir.path().join("tasks.json"))
    }

    #[test]
    fn test_round_trip_preserves_fields_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        let mut store = TaskStore::new();
        store.add("buy milk", Priority::Low, Category::Shopping).unwrap();
        let done_id = store.add("write report", Priority::Urgent, Category::Work).unwrap().id.clone();
        store.add("water plants", Priority::Medium, Category::Home).unwrap();
        store.toggle_done(&done_id).unwrap();

        storage.save(&store).unwrap();
        let loaded = TaskStore::from_tasks(storage.load().unwrap());

        assert_eq!(loaded.len(), store.len());
        for (original, restored) in store.all().iter().zip(loaded.all()) {
            assert_eq!(original, restored);
        }
    }

    #[test]
    fn test_load_missing_file_returns_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        let tasks = storage.load().unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_load_defaults_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), r#"[{"id":"x","text":"t"}]"#).unwrap();

        let tasks = storage.load().unwrap();
        assert_eq!(tasks.len(), 1);

        let task = &tasks[0];
        // Stored fields are kept
        assert_eq!(task.id, "x");
        assert_eq!(task.text, "t");
        // Missing fields default independently
        assert!(!task.done);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.category, Category::General);
        assert!(!task.created.is_empty());
    }

    #[test]
    fn test_load_generates_id_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), r#"[{"text":"no id"},{"text":"also no id"}]"#).unwrap();

        let tasks = storage.load().unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(!tasks[0].id.is_empty());
        assert!(!tasks[1].id.is_empty());
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn test_load_coerces_unknown_enum_names_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(
            storage.path(),
            r#"[{"id":"x","text":"t","priority":"Critical","category":"Errands"}]"#,
        )
        .unwrap();

        let tasks = storage.load().unwrap();
        assert_eq!(tasks[0].priority, Priority::Medium);
        assert_eq!(tasks[0].category, Category::General);
    }

    #[test]
    fn test_load_accepts_case_insensitive_enum_names() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), r#"[{"id":"x","text":"t","priority":"urgent","category":"work"}]"#).unwrap();

        let tasks = storage.load().unwrap();
        assert_eq!(tasks[0].priority, Priority::Urgent);
        assert_eq!(tasks[0].category, Category::Work);
    }

    #[test]
    fn test_load_invalid_json_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), "not json at all").unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, TaskError::Format(_)));
    }

    #[test]
    fn test_load_non_array_document_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), r#"{"id":"x","text":"t"}"#).unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, TaskError::Format(_)));
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        let mut store = TaskStore::new();
        store.add("first", Priority::Medium, Category::General).unwrap();
        store.add("second", Priority::Medium, Category::General).unwrap();
        storage.save(&store).unwrap();

        let id = store.all()[0].id.clone();
        store.delete(&[id].into_iter().collect());
        storage.save(&store).unwrap();

        let tasks = storage.load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "second");
    }

    #[test]
    fn test_save_writes_a_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        let mut store = TaskStore::new();
        store.add("buy milk", Priority::High, Category::Shopping).unwrap();
        storage.save(&store).unwrap();

        let raw = std::fs::read_to_string(storage.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["text"], "buy milk");
        assert_eq!(entries[0]["done"], false);
        assert_eq!(entries[0]["priority"], "High");
        assert_eq!(entries[0]["category"], "Shopping");
    }
}
