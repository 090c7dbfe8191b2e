//! Tests for match sessions and recorder emission.

use std::cell::RefCell;

use connect_four::{
    BoardConfig, DbError, DropOutcome, GamePhase, MatchRecord, MatchRecorder, MatchSession,
    NameError, Player, PlayerName,
};

/// Recorder stub that logs every call and optionally fails.
#[derive(Debug, Default)]
struct StubRecorder {
    calls: RefCell<Vec<String>>,
    fail: bool,
}

impl StubRecorder {
    fn failing() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn outcome(&self) -> Result<(), DbError> {
        if self.fail {
            Err(DbError::new("stub failure"))
        } else {
            Ok(())
        }
    }
}

impl MatchRecorder for StubRecorder {
    fn ensure_player(&self, name: &str) -> Result<(), DbError> {
        self.calls.borrow_mut().push(format!("ensure:{}", name));
        self.outcome()
    }

    fn record_win_loss(&self, winner: &str, loser: &str) -> Result<(), DbError> {
        self.calls
            .borrow_mut()
            .push(format!("win_loss:{}>{}", winner, loser));
        self.outcome()
    }

    fn record_match(&self, record: &MatchRecord) -> Result<(), DbError> {
        self.calls.borrow_mut().push(format!(
            "match:{}|{}|{}",
            record.player_one(),
            record.player_two(),
            record.outcome().marker()
        ));
        self.outcome()
    }
}

fn name(raw: &str) -> PlayerName {
    PlayerName::new(raw).expect("valid name")
}

fn session() -> MatchSession {
    MatchSession::new(
        name("Alice"),
        name("Bob"),
        BoardConfig::default(),
        Player::Red,
    )
}

/// Drives Alice (Red) to a vertical win in column 0.
fn play_to_red_win(session: &mut MatchSession, recorder: &dyn MatchRecorder) {
    for col in [0, 1, 0, 1, 0, 1, 0] {
        assert!(matches!(
            session.submit_move(col, recorder),
            DropOutcome::Placed { .. }
        ));
    }
}

#[test]
fn test_player_name_validation() {
    assert!(PlayerName::new("A").is_ok());
    assert!(PlayerName::new("Fifteen chars..").is_ok()); // exactly 15
    assert_eq!(PlayerName::new(""), Err(NameError::Empty));
    assert_eq!(PlayerName::new("Sixteen chars..."), Err(NameError::TooLong));
    assert_eq!(PlayerName::new("tab\there"), Err(NameError::Unprintable));
    assert_eq!(PlayerName::new("Žofia"), Err(NameError::Unprintable));
    assert!(PlayerName::new("name with space").is_ok());
}

#[test]
fn test_status_line_follows_turn_and_phase() {
    let recorder = StubRecorder::default();
    let mut session = session();

    assert_eq!(session.status_line(), "Alice's Turn");
    session.submit_move(3, &recorder);
    assert_eq!(session.status_line(), "Bob's Turn");

    play_to_red_win(&mut session, &recorder);
    assert_eq!(session.status_line(), "Alice Wins!");
}

#[test]
fn test_win_emits_win_loss_then_match_exactly_once() {
    let recorder = StubRecorder::default();
    let mut session = session();
    play_to_red_win(&mut session, &recorder);

    assert_eq!(session.phase(), GamePhase::Won(Player::Red));
    assert_eq!(
        recorder.calls(),
        vec![
            "win_loss:Alice>Bob".to_string(),
            "match:Alice|Bob|Alice".to_string(),
        ]
    );
}

#[test]
fn test_draw_emits_match_record_only() {
    // No line of four fits on a 2x2 board, so filling it is always a draw.
    let recorder = StubRecorder::default();
    let mut session = MatchSession::new(
        name("Alice"),
        name("Bob"),
        BoardConfig::new(2, 2),
        Player::Red,
    );

    for col in [0, 0, 1, 1] {
        assert!(matches!(
            session.submit_move(col, &recorder),
            DropOutcome::Placed { .. }
        ));
    }

    assert_eq!(session.phase(), GamePhase::Draw);
    assert_eq!(session.status_line(), "It's a Draw!");
    assert_eq!(recorder.calls(), vec!["match:Alice|Bob|Draw".to_string()]);
}

#[test]
fn test_rejected_move_emits_nothing_and_keeps_turn() {
    let recorder = StubRecorder::default();
    let mut session = session();

    let outcome = session.submit_move(42, &recorder);
    assert!(matches!(outcome, DropOutcome::Rejected(_)));
    assert_eq!(session.current_player_name().as_str(), "Alice");
    assert!(recorder.calls().is_empty());
}

#[test]
fn test_moves_after_termination_emit_nothing() {
    let recorder = StubRecorder::default();
    let mut session = session();
    play_to_red_win(&mut session, &recorder);
    let emitted = recorder.calls().len();

    assert_eq!(session.submit_move(3, &recorder), DropOutcome::Ignored);
    assert_eq!(
        recorder.calls().len(),
        emitted,
        "a terminal session must not emit again"
    );
}

#[test]
fn test_recorder_failure_does_not_poison_the_session() {
    let recorder = StubRecorder::failing();
    let mut session = session();
    play_to_red_win(&mut session, &recorder);

    // The engine reached the terminal phase even though every recorder
    // call failed, and a new game can start regardless.
    assert_eq!(session.phase(), GamePhase::Won(Player::Red));
    session.reset();
    assert_eq!(session.phase(), GamePhase::InProgress);
    assert_eq!(session.current_player_name().as_str(), "Alice");
    assert_eq!(session.moves_played(), 0);

    let ok_recorder = StubRecorder::default();
    play_to_red_win(&mut session, &ok_recorder);
    assert_eq!(session.phase(), GamePhase::Won(Player::Red));
    assert_eq!(ok_recorder.calls().len(), 2);
}

#[test]
fn test_reset_preserves_first_mover() {
    let recorder = StubRecorder::default();
    let mut session = MatchSession::new(
        name("Alice"),
        name("Bob"),
        BoardConfig::default(),
        Player::Yellow,
    );
    assert_eq!(session.current_player_name().as_str(), "Bob");

    play_to_red_win(&mut session, &recorder); // Yellow opened, so Bob wins
    assert_eq!(session.phase(), GamePhase::Won(Player::Yellow));
    assert_eq!(recorder.calls()[0], "win_loss:Bob>Alice");

    session.reset();
    assert_eq!(session.current_player_name().as_str(), "Bob");
}

#[test]
fn test_player_for_maps_discs_to_seats() {
    let session = session();
    assert_eq!(session.player_for(Player::Red).name.as_str(), "Alice");
    assert_eq!(session.player_for(Player::Yellow).name.as_str(), "Bob");
    assert_eq!(session.current_disc(), Player::Red);
}
