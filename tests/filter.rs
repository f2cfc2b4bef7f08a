#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use taskman::libs::filter::{
        categorize, category_names, resolve, search, CategoryFilter, FilterState, SearchField, SHOW_ALL,
    };
    use taskman::libs::task::Task;

    fn two_tasks() -> Vec<Task> {
        vec![
            Task::with_id(1, "A", "d1", false, "Work"),
            Task::with_id(2, "B", "d2", true, "Home"),
        ]
    }

    fn mixed_tasks() -> Vec<Task> {
        vec![
            Task::with_id(1, "Write Report", "", false, "Work"),
            Task::with_id(2, "Buy milk", "", true, "Home"),
            Task::with_id(3, "Review report draft", "", true, "Work"),
            Task::with_id(4, "Water plants", "", false, "Home"),
            Task::with_id(5, "Stretch", "", false, ""),
        ]
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let tasks = two_tasks();
        let state = FilterState {
            query: "a".to_string(),
            ..FilterState::default()
        };

        let visible = resolve(&tasks, &state);

        assert_eq!(visible, vec![&tasks[0]]);
    }

    #[test]
    fn test_hide_completed() {
        let tasks = two_tasks();
        let state = FilterState {
            include_completed: false,
            ..FilterState::default()
        };

        let visible = resolve(&tasks, &state);

        assert_eq!(visible, vec![&tasks[0]]);
    }

    #[test]
    fn test_default_state_is_identity() {
        let tasks = mixed_tasks();
        let state = FilterState::default();

        assert!(state.is_identity());
        let visible = resolve(&tasks, &state);
        assert_eq!(visible.len(), tasks.len());
        for (shown, task) in visible.iter().zip(&tasks) {
            assert_eq!(*shown, task);
        }
    }

    #[test]
    fn test_query_is_trimmed() {
        let tasks = mixed_tasks();

        let found = search(&tasks, "  REPORT ", SearchField::Name);

        let ids: Vec<_> = found.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }

    #[test]
    fn test_id_search() {
        let tasks = mixed_tasks();

        let found = search(&tasks, "4", SearchField::Id);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Water plants");

        assert!(search(&tasks, "99", SearchField::Id).is_empty());
    }

    #[test]
    fn test_non_numeric_id_query_matches_nothing() {
        let tasks = mixed_tasks();
        assert!(search(&tasks, "four", SearchField::Id).is_empty());
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let tasks = mixed_tasks();
        assert_eq!(search(&tasks, "   ", SearchField::Id).len(), tasks.len());
    }

    #[test]
    fn test_categorize_groups_in_first_seen_order() {
        let tasks = mixed_tasks();

        let groups = categorize(&tasks);

        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["Work", "Home", ""]);
        let work: Vec<_> = groups["Work"].iter().map(|t| t.id).collect();
        assert_eq!(work, vec![Some(1), Some(3)]);

        // Every task lands in exactly one group
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, tasks.len());
    }

    #[test]
    fn test_categorize_empty_input() {
        let tasks: Vec<Task> = Vec::new();
        assert!(categorize(&tasks).is_empty());
    }

    #[test]
    fn test_combined_filters_apply_in_order() {
        let tasks = mixed_tasks();
        let state = FilterState {
            query: "report".to_string(),
            field: SearchField::Name,
            category: CategoryFilter::Only("Work".to_string()),
            include_completed: false,
        };

        let visible = resolve(&tasks, &state);

        assert_eq!(visible, vec![&tasks[0]]);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let tasks = mixed_tasks();
        let state = FilterState {
            category: CategoryFilter::Only("Garden".to_string()),
            ..FilterState::default()
        };

        assert!(resolve(&tasks, &state).is_empty());
    }

    #[test]
    fn test_category_missing_after_search_yields_empty() {
        let tasks = mixed_tasks();
        let state = FilterState {
            query: "milk".to_string(),
            category: CategoryFilter::Only("Work".to_string()),
            ..FilterState::default()
        };

        assert!(resolve(&tasks, &state).is_empty());
    }

    #[test]
    fn test_empty_category_is_selectable() {
        let tasks = mixed_tasks();
        let state = FilterState {
            category: CategoryFilter::from(""),
            ..FilterState::default()
        };

        let visible = resolve(&tasks, &state);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Stretch");
    }

    #[test]
    fn test_category_names_start_with_sentinel() {
        let tasks = mixed_tasks();

        let names = category_names(&tasks);

        assert_eq!(names, vec![SHOW_ALL, "Work", "Home", ""]);
        assert_eq!(category_names(&[]), vec![SHOW_ALL]);
    }

    #[test]
    fn test_category_filter_conversions() {
        assert_eq!(CategoryFilter::from(SHOW_ALL), CategoryFilter::All);
        assert_eq!(CategoryFilter::from("Home"), CategoryFilter::Only("Home".to_string()));
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from(Some("Work".to_string())),
            CategoryFilter::Only("Work".to_string())
        );
    }

    #[test]
    fn test_search_field_from_label() {
        assert_eq!(SearchField::from_str("Name").unwrap(), SearchField::Name);
        assert_eq!(SearchField::from_str("name").unwrap(), SearchField::Name);
        assert_eq!(SearchField::from_str("ID").unwrap(), SearchField::Id);
        assert_eq!(SearchField::from_str("anything").unwrap(), SearchField::Id);
    }

    #[test]
    fn test_filter_state_display() {
        let state = FilterState {
            query: "milk".to_string(),
            field: SearchField::Name,
            category: CategoryFilter::Only("Home".to_string()),
            include_completed: false,
        };

        assert_eq!(
            state.to_string(),
            "search: Name contains 'milk', category: 'Home', completed: hidden"
        );
        assert!(!state.is_identity());
    }
}
