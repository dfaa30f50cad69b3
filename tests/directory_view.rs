use permview::source::{JsonFileSource, MemorySource, RawUserRecord};
use permview::{Config, LoadPhase, PermviewError, UserDirectoryView};
use std::io::Write;

fn users(count: usize) -> Vec<RawUserRecord> {
    (0..count)
        .map(|i| {
            let profile = if i % 3 == 0 { "Admin" } else { "Standard" };
            let role = if i % 2 == 0 { "Eng" } else { "Sales" };
            RawUserRecord::new(format!("User {i:02}"), profile, role, [format!("PS{i}")])
        })
        .collect()
}

fn mounted(count: usize, page_size: usize) -> UserDirectoryView {
    let config = Config {
        page_size,
        ..Default::default()
    };
    let mut view = UserDirectoryView::new(&config, Box::new(MemorySource::with_users(users(count))));
    view.mount().unwrap();
    view
}

fn visible_names(view: &UserDirectoryView) -> Vec<String> {
    view.viewmodel().rows.into_iter().map(|row| row.name).collect()
}

#[test]
fn walking_every_page_covers_the_filtered_set() {
    let mut view = mounted(23, 5);
    assert_eq!(view.state().total_pages, 5);

    let mut seen = visible_names(&view);
    while view.next_page().unwrap() {
        let page = visible_names(&view);
        assert!(!page.is_empty());
        seen.extend(page);
    }

    let expected: Vec<String> = view.state().filtered_users.iter().map(|u| u.name().to_string()).collect();
    assert_eq!(seen, expected);
    assert_eq!(view.viewmodel().rows.len(), 3);
    assert!(!view.viewmodel().pagination.has_next);
}

#[test]
fn search_always_returns_to_first_page() {
    let mut view = mounted(23, 5);
    view.next_page().unwrap();
    view.next_page().unwrap();
    assert_eq!(view.state().page, 3);

    view.search("sales").unwrap();
    assert_eq!(view.state().page, 1);
    assert_eq!(view.state().total_count, 11);

    view.search("").unwrap();
    assert_eq!(view.state().page, 1);
    assert_eq!(view.state().total_count, 23);
}

#[test]
fn aggregate_counts_add_up_after_search() {
    let mut view = mounted(23, 5);
    view.search("eng").unwrap();

    let vm = view.viewmodel();
    let profile_total: usize = vm.profile_counts.iter().map(|c| c.count).sum();
    let role_total: usize = vm.role_counts.iter().map(|c| c.count).sum();
    assert_eq!(profile_total, vm.pagination.total_count);
    assert_eq!(role_total, vm.pagination.total_count);
    assert_eq!(vm.role_counts.len(), 1);
}

#[test]
fn sort_then_page_uses_sorted_order() {
    let mut view = mounted(12, 8);
    view.next_page().unwrap();
    view.sort_column("name", "desc").unwrap();

    assert_eq!(view.state().page, 2);
    assert_eq!(visible_names(&view), ["User 03", "User 02", "User 01", "User 00"]);
    assert_eq!(view.viewmodel().sort.sorted_direction, permview::SortDirection::Desc);
}

#[test]
fn snapshot_failure_payload_surfaces_its_message() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"body":{{"message":"Insufficient privileges"}}}}"#).unwrap();

    let source = JsonFileSource::new(file.path());
    let mut view = UserDirectoryView::new(&Config::default(), Box::new(source));
    view.mount().unwrap();

    assert_eq!(view.state().phase, LoadPhase::Failed);
    let vm = view.viewmodel();
    assert_eq!(vm.error.as_deref(), Some("Insufficient privileges"));
    assert!(vm.rows.is_empty());
    assert_eq!(vm.pagination.total_pages, 0);
}

#[test]
fn missing_snapshot_fails_the_load_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        source_file: Some(dir.path().join("absent.json")),
        ..Default::default()
    };

    let mut view = UserDirectoryView::from_config(&config).unwrap();
    view.mount().unwrap();

    assert_eq!(view.state().phase, LoadPhase::Failed);
    assert!(view.viewmodel().error.is_some());
}

#[test]
fn config_file_drives_page_size() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "page_size = 4").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    let mut view = UserDirectoryView::new(&config, Box::new(MemorySource::with_users(users(9))));
    view.mount().unwrap();

    assert_eq!(view.state().total_pages, 3);
    assert_eq!(view.viewmodel().rows.len(), 4);
}

#[test]
fn invalid_config_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "page_size = 0").unwrap();

    assert!(matches!(Config::from_file(file.path()), Err(PermviewError::Config(_))));
}

#[test]
fn name_sort_orders_accented_names_by_base_letter() {
    let users = ["Zoe", "Émile", "adam"]
        .into_iter()
        .map(|name| RawUserRecord::new(name, "P", "R", Vec::<String>::new()))
        .collect();
    let mut view = UserDirectoryView::new(&Config::default(), Box::new(MemorySource::with_users(users)));
    view.mount().unwrap();

    view.sort_column("name", "asc").unwrap();
    assert_eq!(visible_names(&view), ["adam", "Émile", "Zoe"]);
}
