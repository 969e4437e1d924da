use roster_core::{RepoError, SqliteUserRepository, UpdateOutcome, UserRepository};
use std::path::PathBuf;

fn scratch_db(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("roster.db")
}

#[test]
fn add_assigns_database_ids_and_list_orders_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = SqliteUserRepository::new(scratch_db(&dir));

    let alice = repo.add_user("Alice").unwrap();
    let bob = repo.add_user("Bob").unwrap();

    assert_eq!(alice.id, 1);
    assert_eq!(bob.id, 2);

    let users = repo.list_users().unwrap();
    assert_eq!(users, vec![alice, bob]);
}

#[test]
fn records_persist_across_store_instances_on_the_same_file() {
    // Every operation opens its own connection, so a second store pointed at
    // the same file must observe the first one's writes.
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_db(&dir);

    let mut writer = SqliteUserRepository::new(&path);
    let alice = writer.add_user("Alice").unwrap();
    drop(writer);

    let reader = SqliteUserRepository::new(&path);
    let users = reader.list_users().unwrap();
    assert_eq!(users, vec![alice]);
}

#[test]
fn rename_reports_row_count_driven_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = SqliteUserRepository::new(scratch_db(&dir));

    let alice = repo.add_user("Alice").unwrap();

    assert_eq!(
        repo.rename_user(alice.id, "Alicia").unwrap(),
        UpdateOutcome::Applied
    );
    assert_eq!(repo.list_users().unwrap()[0].name, "Alicia");

    assert_eq!(
        repo.rename_user(alice.id + 10, "Nobody").unwrap(),
        UpdateOutcome::NotFound
    );
    assert_eq!(repo.list_users().unwrap()[0].name, "Alicia");
}

#[test]
fn remove_reports_row_count_driven_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = SqliteUserRepository::new(scratch_db(&dir));

    let alice = repo.add_user("Alice").unwrap();

    assert_eq!(repo.remove_user(99).unwrap(), UpdateOutcome::NotFound);
    assert_eq!(repo.list_users().unwrap().len(), 1);

    assert_eq!(repo.remove_user(alice.id).unwrap(), UpdateOutcome::Applied);
    assert!(repo.list_users().unwrap().is_empty());

    assert_eq!(repo.remove_user(alice.id).unwrap(), UpdateOutcome::NotFound);
}

#[test]
fn removed_ids_are_not_reassigned() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = SqliteUserRepository::new(scratch_db(&dir));

    repo.add_user("a").unwrap();
    let second = repo.add_user("b").unwrap();
    repo.remove_user(second.id).unwrap();

    let third = repo.add_user("c").unwrap();
    assert_eq!(third.id, 3);
}

#[test]
fn duplicate_and_empty_names_are_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = SqliteUserRepository::new(scratch_db(&dir));

    repo.add_user("Alice").unwrap();
    repo.add_user("Alice").unwrap();
    let anonymous = repo.add_user("").unwrap();

    assert_eq!(anonymous.name, "");
    assert_eq!(repo.list_users().unwrap().len(), 3);
}

#[test]
fn unreachable_database_surfaces_a_backend_error() {
    let dir = tempfile::tempdir().unwrap();
    // Parent directory does not exist, so the per-operation open must fail.
    let mut repo = SqliteUserRepository::new(dir.path().join("missing").join("roster.db"));

    let err = repo.add_user("Alice").unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert!(!err.to_string().is_empty());

    let err = repo.list_users().unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn crud_scenario_matches_console_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = SqliteUserRepository::new(scratch_db(&dir));

    repo.add_user("Alice").unwrap();
    repo.add_user("Bob").unwrap();
    assert_eq!(transcript(&repo), vec!["1 - Alice", "2 - Bob"]);

    repo.rename_user(1, "Alicia").unwrap();
    assert_eq!(transcript(&repo), vec!["1 - Alicia", "2 - Bob"]);

    repo.remove_user(1).unwrap();
    assert_eq!(transcript(&repo), vec!["2 - Bob"]);

    assert_eq!(repo.remove_user(1).unwrap(), UpdateOutcome::NotFound);
    assert_eq!(transcript(&repo), vec!["2 - Bob"]);
}

fn transcript(repo: &SqliteUserRepository) -> Vec<String> {
    repo.list_users()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}
