//! Tests for database repository operations.

use tempfile::NamedTempFile;

use connect_four::{
    GameRepository, MatchOutcome, MatchRecord, MatchRecorder, NewGameResult, ResultsService,
};

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
fn setup_test_db() -> (NamedTempFile, GameRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let repo = GameRepository::new(db_path).expect("Failed to create repository");
    repo.run_migrations().expect("Migrations failed");
    (db_file, repo)
}

#[test]
fn test_ensure_player_creates_row_with_zero_tallies() {
    let (_db, repo) = setup_test_db();
    let player = repo.ensure_player("Alice").expect("Ensure failed");
    assert_eq!(player.name(), "Alice");
    assert_eq!(*player.wins(), 0);
    assert_eq!(*player.losses(), 0);
}

#[test]
fn test_ensure_player_is_idempotent() {
    let (_db, repo) = setup_test_db();
    let first = repo.ensure_player("Bob").expect("First ensure failed");
    repo.add_win("Bob").expect("Add win failed");

    let second = repo.ensure_player("Bob").expect("Second ensure failed");
    assert_eq!(second.id(), first.id(), "no duplicate row");
    assert_eq!(*second.wins(), 1, "tallies preserved across ensure calls");
}

#[test]
fn test_get_player_by_name() {
    let (_db, repo) = setup_test_db();
    repo.ensure_player("Carol").expect("Ensure failed");

    let found = repo.get_player_by_name("Carol").expect("Query failed");
    assert!(found.is_some());
    assert_eq!(found.unwrap().name(), "Carol");

    let missing = repo.get_player_by_name("NoSuchPlayer").expect("Query failed");
    assert!(missing.is_none());
}

#[test]
fn test_add_win_and_loss_increment_tallies() {
    let (_db, repo) = setup_test_db();
    repo.ensure_player("Dave").expect("Ensure failed");

    repo.add_win("Dave").expect("Add win failed");
    repo.add_win("Dave").expect("Add win failed");
    repo.add_loss("Dave").expect("Add loss failed");

    let player = repo
        .get_player_by_name("Dave")
        .expect("Query failed")
        .expect("Player missing");
    assert_eq!(*player.wins(), 2);
    assert_eq!(*player.losses(), 1);
    assert_eq!(player.decided_games(), 3);
    assert!((player.win_rate() - 66.666).abs() < 0.01);
}

#[test]
fn test_add_win_for_unknown_player_is_a_noop() {
    let (_db, repo) = setup_test_db();
    repo.add_win("Ghost").expect("Should not error");
    assert!(
        repo.get_player_by_name("Ghost")
            .expect("Query failed")
            .is_none()
    );
}

#[test]
fn test_record_match_returns_stored_row() {
    let (_db, repo) = setup_test_db();

    let result = NewGameResult::new("Eve".to_string(), "Frank".to_string(), "Eve".to_string());
    let recorded = repo.record_match(result).expect("Record failed");

    assert_eq!(recorded.player1(), "Eve");
    assert_eq!(recorded.player2(), "Frank");
    assert_eq!(recorded.winner(), "Eve");
    assert!(*recorded.id() > 0);
}

#[test]
fn test_list_players_orders_by_record() {
    let (_db, repo) = setup_test_db();
    for name in ["Alpha", "Beta", "Gamma"] {
        repo.ensure_player(name).expect("Ensure failed");
    }
    repo.add_win("Beta").expect("Add win failed");
    repo.add_win("Beta").expect("Add win failed");
    repo.add_win("Gamma").expect("Add win failed");
    repo.add_loss("Alpha").expect("Add loss failed");

    let players = repo.list_players().expect("List failed");
    let names: Vec<&str> = players.iter().map(|p| p.name().as_str()).collect();
    assert_eq!(names, vec!["Beta", "Gamma", "Alpha"]);
}

#[test]
fn test_recent_matches_newest_first_with_limit() {
    let (_db, repo) = setup_test_db();
    for winner in ["First", "Second", "Third"] {
        let result =
            NewGameResult::new("P1".to_string(), "P2".to_string(), winner.to_string());
        repo.record_match(result).expect("Record failed");
    }

    let recent = repo.recent_matches(2).expect("Query failed");
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].winner(), "Third");
    assert_eq!(recent[1].winner(), "Second");
}

#[test]
fn test_results_service_records_a_won_match() {
    let (_db, repo) = setup_test_db();
    let service = ResultsService::new(repo);

    service.ensure_player("Alice").expect("Ensure failed");
    service.ensure_player("Bob").expect("Ensure failed");
    service
        .record_win_loss("Alice", "Bob")
        .expect("Win/loss failed");

    let record = MatchRecord::new(
        "Alice".to_string(),
        "Bob".to_string(),
        MatchOutcome::Win {
            winner: "Alice".to_string(),
            loser: "Bob".to_string(),
        },
    );
    service.record_match(&record).expect("Record failed");

    let standings = service.standings().expect("Standings failed");
    assert_eq!(standings[0].name(), "Alice");
    assert_eq!(*standings[0].wins(), 1);
    assert_eq!(*standings[1].losses(), 1);

    let matches = service.recent_matches(5).expect("History failed");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].winner(), "Alice");
}

#[test]
fn test_results_service_records_a_draw() {
    let (_db, repo) = setup_test_db();
    let service = ResultsService::new(repo);

    let record = MatchRecord::new(
        "Alice".to_string(),
        "Bob".to_string(),
        MatchOutcome::Draw,
    );
    service.record_match(&record).expect("Record failed");

    let matches = service.recent_matches(5).expect("History failed");
    assert_eq!(matches[0].winner(), "Draw");
}

#[test]
fn test_match_outcome_marker() {
    let win = MatchOutcome::Win {
        winner: "Alice".to_string(),
        loser: "Bob".to_string(),
    };
    assert_eq!(win.marker(), "Alice");
    assert_eq!(MatchOutcome::Draw.marker(), "Draw");
}
