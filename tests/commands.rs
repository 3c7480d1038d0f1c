#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::storage::{Storage, TASKS_FILE_NAME};
    use tudu::libs::store::TaskStore;
    use tudu::libs::task::{Category, Priority};

    struct CommandTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            // The tasks file is resolved relative to the working directory,
            // so point the process at a throwaway one. The working directory
            // is process-global, hence the single flow test below.
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_current_dir(temp_dir.path()).unwrap();
            CommandTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_default_storage_flow(_ctx: &mut CommandTestContext) {
        let storage = Storage::new();
        assert_eq!(storage.path().to_str().unwrap(), TASKS_FILE_NAME);

        // First run: no file yet, the store starts empty
        let mut store = TaskStore::from_tasks(storage.load().unwrap());
        assert!(store.is_empty());

        // Add two tasks and persist, the way the add command does
        store.add("Buy milk", Priority::Medium, Category::Shopping).unwrap();
        let report_id = store.add("Write report", Priority::High, Category::Work).unwrap().id.clone();
        storage.save(&store).unwrap();
        assert!(std::path::Path::new(TASKS_FILE_NAME).exists());

        // Next invocation: reload, mark done, persist
        let mut store = TaskStore::from_tasks(storage.load().unwrap());
        assert_eq!(store.len(), 2);
        let ids: HashSet<String> = [report_id.clone(), "unknown-id".to_string()].into_iter().collect();
        assert_eq!(store.mark_done(&ids), 1);
        storage.save(&store).unwrap();

        let store = TaskStore::from_tasks(storage.load().unwrap());
        assert!(store.find(&report_id).unwrap().done);
        assert_eq!(store.stats().pending, 1);

        // A corrupted file is a load error; commands degrade to an empty
        // store and the next save overwrites the broken contents
        std::fs::write(TASKS_FILE_NAME, "{broken").unwrap();
        assert!(storage.load().is_err());
        storage.save(&TaskStore::new()).unwrap();
        assert!(storage.load().unwrap().is_empty());
    }
}
