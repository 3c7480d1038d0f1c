#[cfg(test)]
mod tests {
    use tudu::libs::filter::{StatusFilter, TaskFilter};
    use tudu::libs::store::TaskStore;
    use tudu::libs::task::{Category, Priority};

    /// Store with the two worked examples: a pending shopping task and a
    /// completed work task.
    fn sample_store() -> TaskStore {
        let mut store = TaskStore::new();
        store.add("buy milk", Priority::Medium, Category::Shopping).unwrap();
        let id = store.add("write report", Priority::High, Category::Work).unwrap().id.clone();
        store.toggle_done(&id).unwrap();
        store
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let store = sample_store();
        let filter = TaskFilter::default();
        assert_eq!(filter.apply(store.all()).len(), 2);
    }

    #[test]
    fn test_status_pending() {
        let store = sample_store();
        let filter = TaskFilter {
            status: StatusFilter::Pending,
            ..Default::default()
        };
        let tasks = filter.apply(store.all());
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "buy milk");
    }

    #[test]
    fn test_status_completed() {
        let store = sample_store();
        let filter = TaskFilter {
            status: StatusFilter::Completed,
            ..Default::default()
        };
        let tasks = filter.apply(store.all());
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "write report");
    }

    #[test]
    fn test_search_substring() {
        let store = sample_store();
        let filter = TaskFilter {
            search: Some("milk".to_string()),
            ..Default::default()
        };
        let tasks = filter.apply(store.all());
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "buy milk");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = sample_store();
        let filter = TaskFilter {
            search: Some("MILK".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(store.all()).len(), 1);

        let filter = TaskFilter {
            search: Some("Report".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(store.all()).len(), 1);
    }

    #[test]
    fn test_empty_search_passes_everything() {
        let store = sample_store();
        let filter = TaskFilter {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.apply(store.all()).len(), 2);
    }

    #[test]
    fn test_category_exact_match() {
        let store = sample_store();
        let filter = TaskFilter {
            category: Some(Category::Work),
            ..Default::default()
        };
        let tasks = filter.apply(store.all());
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "write report");

        let filter = TaskFilter {
            category: Some(Category::Home),
            ..Default::default()
        };
        assert!(filter.apply(store.all()).is_empty());
    }

    #[test]
    fn test_predicates_compose() {
        let mut store = sample_store();
        store.add("buy milk again", Priority::Low, Category::Shopping).unwrap();

        let filter = TaskFilter {
            search: Some("milk".to_string()),
            status: StatusFilter::Pending,
            category: Some(Category::Shopping),
        };
        let tasks = filter.apply(store.all());
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_filter_preserves_order_and_is_idempotent() {
        let mut store = TaskStore::new();
        for i in 1..=5 {
            store.add(&format!("task {}", i), Priority::Medium, Category::General).unwrap();
        }

        let filter = TaskFilter {
            search: Some("task".to_string()),
            ..Default::default()
        };
        let first: Vec<String> = filter.apply(store.all()).iter().map(|t| t.id.clone()).collect();
        let second: Vec<String> = filter.apply(store.all()).iter().map(|t| t.id.clone()).collect();

        assert_eq!(first, second);
        let all: Vec<String> = store.all().iter().map(|t| t.id.clone()).collect();
        assert_eq!(first, all);
    }

    #[test]
    fn test_filter_does_not_mutate_store() {
        let store = sample_store();
        let filter = TaskFilter {
            status: StatusFilter::Completed,
            ..Default::default()
        };
        let _ = filter.apply(store.all());
        assert_eq!(store.len(), 2);
    }
}
