//! Full sessions driven through a scripted terminal.
//!
//! These run against the datasets shipped in the repository's `data/`
//! directory, plus temporary directories for loader failures.

use std::fs;
use std::path::PathBuf;

use zensearch::session::{DATASET_PROMPT, INVALID_TERM, NO_DATA, WELCOME};
use zensearch::{Catalog, CatalogError, Dataset, Session, Theme};
use zensearch_input::MockTerminal;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn shipped_catalog() -> Catalog {
    Catalog::load(data_dir()).unwrap()
}

/// Runs a whole session and returns what was written.
fn transcript(replies: &[&str]) -> String {
    let catalog = shipped_catalog();
    let terminal = MockTerminal::with_responses(replies.iter().copied());
    let session = Session::new(&catalog, terminal, Theme::plain());
    session.run().unwrap();
    session.terminal().transcript()
}

fn search(dataset: &str, field: &str, value: &str) -> String {
    transcript(&["", "1", dataset, field, value, "quit"])
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn shipped_datasets_load() {
    let catalog = shipped_catalog();
    assert_eq!(catalog.records(Dataset::Users).len(), 5);
    assert_eq!(catalog.records(Dataset::Tickets).len(), 4);
    assert_eq!(catalog.records(Dataset::Organizations).len(), 4);
}

#[test]
fn missing_directory_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
    assert_eq!(err.dataset(), Dataset::Users);
}

#[test]
fn malformed_file_is_parse_error_for_that_dataset() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("users.json"), "[]").unwrap();
    fs::write(dir.path().join("tickets.json"), "{not json").unwrap();
    fs::write(dir.path().join("organizations.json"), "[]").unwrap();

    let err = Catalog::load(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
    assert_eq!(err.dataset(), Dataset::Tickets);
    assert!(err.to_string().contains("tickets.json"));
}

#[test]
fn non_array_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("users.json"), r#"{"_id": 1}"#).unwrap();
    let err = Catalog::load(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Parse {
            dataset: Dataset::Users,
            ..
        }
    ));
}

#[test]
fn empty_datasets_load_and_search_empty() {
    let dir = tempfile::tempdir().unwrap();
    for dataset in Dataset::ALL {
        fs::write(dataset.path_in(dir.path()), "[]").unwrap();
    }
    let catalog = Catalog::load(dir.path()).unwrap();
    let terminal = MockTerminal::with_responses(["", "1", "1", "role", "admin", "2", "quit"]);
    let session = Session::new(&catalog, terminal, Theme::plain());
    session.run().unwrap();
    let out = session.terminal().transcript();
    assert!(out.contains(NO_DATA));
    assert!(out.contains("Search Users with\n_"));
}

// ============================================================================
// Searching
// ============================================================================

#[test]
fn users_role_admin() {
    let out = search("1", "role", "admin");
    assert!(out.contains("Francisca Rasmussen"));
    assert!(out.contains("Cross Barlow"));
    assert!(!out.contains("Ingrid Wagner"));
    assert!(!out.contains("Rose Newton"));
}

#[test]
fn tickets_tags_urgent() {
    let out = search("2", "tags", "URGENT");
    assert!(out.contains("A Catastrophe in Korea (North)"));
    assert!(out.contains("A Catastrophe in Hungary"));
    assert!(!out.contains("A Catastrophe in Micronesia"));
    assert!(!out.contains("A Drama in Portugal"));
}

#[test]
fn organizations_nonexistent_field() {
    let out = search("3", "nonexistent_field", "anything");
    assert!(out.contains(&format!("{INVALID_TERM}\n\n\n{DATASET_PROMPT}\n")));
    assert!(!out.contains("Enthaze"));
}

#[test]
fn field_missing_from_one_ticket_aborts_search() {
    // The last ticket has no assignee_id; earlier matches are discarded.
    let out = search("2", "assignee_id", "2");
    assert!(out.contains(INVALID_TERM));
    assert!(!out.contains("A Catastrophe in Korea (North)"));
}

#[test]
fn valid_field_without_match() {
    let out = search("1", "name", "Nobody Here");
    assert!(out.contains(&format!("{NO_DATA}\n\n\n\tSelect search options:\n")));
}

#[test]
fn search_is_case_insensitive() {
    assert_eq!(search("1", "role", "Admin"), search("1", "role", "admin"));
    assert_eq!(search("1", "ROLE", "agent"), search("1", "role", "agent"));
}

#[test]
fn numeric_and_boolean_fields() {
    let out = search("1", "_id", "3");
    assert!(out.contains("Ingrid Wagner"));

    let out = search("3", "shared_tickets", "true");
    assert!(out.contains("Xylar"));
    assert!(!out.contains("Enthaze"));
}

#[test]
fn null_field_matches_none() {
    let out = search("1", "alias", "None");
    assert!(out.contains("Ingrid Wagner"));
    assert!(out.contains("alias                          None\n"));
    assert!(!out.contains("Miss Coffey"));

    let out = search("1", "alias", "");
    assert!(out.contains(NO_DATA));
}

#[test]
fn list_membership_requires_whole_element() {
    let out = search("3", "domain_names", "KAGE.COM");
    assert!(out.contains("Enthaze"));
    let out = search("3", "domain_names", "kage");
    assert!(out.contains(NO_DATA));
}

#[test]
fn non_ascii_values_fold() {
    let out = search("3", "details", "ARTISÂN");
    assert!(out.contains("Qualitern"));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn quit_at_welcome() {
    let out = transcript(&["quit", "never read"]);
    assert_eq!(
        out,
        format!("{WELCOME}\nType 'quit' to exit at any time, Press 'Enter' to continue\n\n")
    );
}

#[test]
fn end_of_input_ends_session() {
    let out = transcript(&["", "1"]);
    assert!(out.ends_with(&format!("{DATASET_PROMPT}\n")));
}

#[test]
fn invalid_selections_repeat_prompt() {
    let out = transcript(&["", "7", "1", "9", "quit"]);
    assert_eq!(out.matches("\tSelect search options:\n").count(), 2);
    assert_eq!(out.matches(DATASET_PROMPT).count(), 2);
}

#[test]
fn list_searchable_fields() {
    let out = transcript(&["", "2", "quit"]);
    assert!(out.contains("Search Users with\n_id\nurl\nexternal_id\nname\nalias\n"));
    assert!(out.contains("Search Tickets with\n_id\nurl\nexternal_id\ncreated_at\ntype\n"));
    assert!(out.contains("Search Organizations with\n_id\nurl\nexternal_id\nname\ndomain_names\n"));
    assert_eq!(out.matches("\tSelect search options:\n").count(), 2);
}

#[test]
fn results_then_another_search() {
    let out = transcript(&["", "1", "1", "_id", "1", "1", "3", "_id", "101", "quit"]);
    assert!(out.contains("Francisca Rasmussen"));
    assert!(out.contains("Enthaze"));
    assert!(!out.contains(INVALID_TERM));
}
