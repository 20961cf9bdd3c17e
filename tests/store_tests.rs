use spray_wall_editor::core::NewProblem;
use spray_wall_editor::{JsonProblemStore, ProblemStore, ProblemType, StoreError};

fn new_problem(name: &str, kind: ProblemType) -> NewProblem {
    NewProblem {
        owner_id: "local".into(),
        name: name.into(),
        kind,
        image_png: vec![0x89, b'P', b'N', b'G', 1, 2, 3],
        tags: vec!["crimp".into()],
    }
}

#[test]
fn test_json_store_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let saved = {
        let mut store = JsonProblemStore::open(dir.path()).expect("open");
        store
            .save(new_problem("first", ProblemType::Bouldering))
            .expect("save");
        store
            .save(new_problem("second", ProblemType::Endurance))
            .expect("save")
    };

    let store = JsonProblemStore::open(dir.path()).expect("reopen");
    let listed = store
        .list_problems("local", Some(ProblemType::Endurance))
        .expect("list");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, saved.id);
    assert_eq!(listed[0].name, "second");
    assert_eq!(listed[0].image_png, saved.image_png);
    assert_eq!(listed[0].tags, vec!["crimp".to_string()]);
    assert!(dir.path().join(format!("{}.png", saved.id)).exists());
}

#[test]
fn test_json_store_ids_keep_increasing_after_delete() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonProblemStore::open(dir.path()).expect("open");
    let first = store
        .save(new_problem("a", ProblemType::Bouldering))
        .expect("save");
    store.delete(first.id).expect("delete");

    let mut reopened = JsonProblemStore::open(dir.path()).expect("reopen");
    let second = reopened
        .save(new_problem("b", ProblemType::Bouldering))
        .expect("save");

    assert!(second.id > first.id);
    assert!(!dir.path().join(format!("{}.png", first.id)).exists());
}

#[test]
fn test_json_store_update_tags_and_unknown_ids() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonProblemStore::open(dir.path()).expect("open");
    let saved = store
        .save(new_problem("a", ProblemType::Bouldering))
        .expect("save");

    let updated = store
        .update_tags(saved.id, vec!["sloper".into(), " sloper ".into()])
        .expect("update");
    assert_eq!(updated.tags, vec!["sloper".to_string()]);
    assert!(updated.updated_at.is_some());

    assert!(matches!(store.delete(999), Err(StoreError::NotFound(999))));
    assert!(matches!(
        store.update_tags(999, Vec::new()),
        Err(StoreError::NotFound(999))
    ));
}

#[test]
fn test_json_store_rejects_corrupt_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("problems.json"), "{ not json").expect("write");

    assert!(matches!(
        JsonProblemStore::open(dir.path()),
        Err(StoreError::Index(_))
    ));
}

#[test]
fn test_json_store_lists_only_owner_problems() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonProblemStore::open(dir.path()).expect("open");
    let mut foreign = new_problem("foreign", ProblemType::Bouldering);
    foreign.owner_id = "someone-else".into();
    store.save(foreign).expect("save");
    store
        .save(new_problem("mine", ProblemType::Bouldering))
        .expect("save");

    let names: Vec<String> = store
        .list_problems("local", None)
        .expect("list")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["mine".to_string()]);
}
