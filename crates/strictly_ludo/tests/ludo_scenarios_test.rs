//! End-to-end turn scenarios driven by scripted dice.

use strictly_ludo::queries::{coin_path_index, finished_coin_count};
use strictly_ludo::{
    CellType, CoinId, GameSetup, PATH_LEN, PlayerId, PlayerState, Position, RuleSet, ScriptedDice,
    TurnReport,
};

fn coin(player: PlayerId, slot: u8) -> CoinId {
    CoinId::new(player, slot).expect("valid slot")
}

fn setup(faces: &[u8]) -> GameSetup {
    let dice = ScriptedDice::new(faces.iter().copied()).expect("valid script");
    GameSetup::new(RuleSet::default()).with_dice(dice)
}

#[test]
fn test_six_releases_coin_and_keeps_turn() {
    let mut game = setup(&[6]).start().expect("valid setup");

    let playable = match game.roll_dice() {
        TurnReport::AwaitingSelection { player, dice, playable } => {
            assert_eq!(player, PlayerId::Red);
            assert_eq!(dice.get(), 6);
            playable
        }
        other => panic!("Expected a selection, got {:?}", other),
    };
    assert_eq!(playable.len(), 4);
    assert_eq!(
        *game.state().current_player().state(),
        PlayerState::SelectingCoin
    );

    let red = coin(PlayerId::Red, 0);
    let report = game.select_coin(red);
    let outcome = report.outcome().expect("coin moved");

    assert_eq!(outcome.to, Position::new(6, 1));
    assert_eq!(coin_path_index(game.state(), red), Some(0));
    assert!(outcome.bonus_turn);
    assert_eq!(game.state().current_player_index(), 0);
    assert_eq!(
        *game.state().current_player().state(),
        PlayerState::WaitingRoll
    );
    assert!(game.state().started());
}

#[test]
fn test_capture_on_normal_cell() {
    let red = coin(PlayerId::Red, 0);
    let green = coin(PlayerId::Green, 0);
    // Red index 14 is Green index 1.
    let target = Position::new(2, 8);
    let mut game = setup(&[4])
        .with_coin_at_index(red, 10)
        .with_coin_at(green, target)
        .start()
        .expect("valid setup");
    let board = game.state().board();
    assert_eq!(*board.get(target).expect("on board").kind(), CellType::Normal);
    let green_origin = *game.state().coin(green).origin();

    assert!(matches!(game.roll_dice(), TurnReport::AwaitingSelection { .. }));
    let report = game.select_coin(red);
    let outcome = report.outcome().expect("coin moved");

    assert_eq!(outcome.to, target);
    assert_eq!(outcome.captures.len(), 1);
    assert_eq!(outcome.captures[0].coin, green);
    assert_eq!(*game.state().coin(green).position(), green_origin);
    let board = game.state().board();
    assert!(board.get(green_origin).expect("on board").holds(green));
    assert!(board.get(target).expect("on board").holds(red));
    // A 4 on a NORMAL cell ends the turn.
    assert_eq!(*game.state().current_player().id(), PlayerId::Green);
}

#[test]
fn test_capture_takes_every_opponent_on_the_cell() {
    let red = coin(PlayerId::Red, 0);
    let green = coin(PlayerId::Green, 1);
    let yellow = coin(PlayerId::Yellow, 2);
    let target = Position::new(2, 8);
    let mut game = setup(&[4])
        .with_coin_at_index(red, 10)
        .with_coin_at(green, target)
        .with_coin_at(yellow, target)
        .start()
        .expect("valid setup");

    game.roll_dice();
    let report = game.select_coin(red);
    let outcome = report.outcome().expect("coin moved");

    assert_eq!(outcome.captures.len(), 2);
    assert!(game.state().coin(green).is_at_origin());
    assert!(game.state().coin(yellow).is_at_origin());
    let cell = game.state().board().get(target).expect("on board");
    assert_eq!(cell.coins(), &[red]);
}

#[test]
fn test_last_coin_reaching_finish_wins() {
    let mut builder = setup(&[2]);
    for slot in 0..3 {
        builder = builder.with_coin_at_index(coin(PlayerId::Red, slot), PATH_LEN - 1);
    }
    let mut game = builder
        .with_coin_at_index(coin(PlayerId::Red, 3), PATH_LEN - 3)
        .start()
        .expect("valid setup");

    // The only playable coin moves without a selection.
    let report = game.roll_dice();
    let outcome = report.outcome().expect("coin moved");

    assert!(outcome.won);
    assert_eq!(outcome.landing, CellType::Finish);
    assert_eq!(finished_coin_count(game.state(), PlayerId::Red), 4);
    assert_eq!(*game.state().player(PlayerId::Red).state(), PlayerState::Won);
    assert_eq!(game.state().standings(), &[PlayerId::Red]);
    assert_eq!(*game.state().current_player().id(), PlayerId::Green);
    assert_eq!(
        *game.state().current_player().state(),
        PlayerState::WaitingRoll
    );
}

#[test]
fn test_exact_roll_needed_to_finish() {
    let mut builder = setup(&[2]);
    for slot in 0..3 {
        builder = builder.with_coin_at_index(coin(PlayerId::Red, slot), PATH_LEN - 1);
    }
    let mut game = builder
        .with_coin_at_index(coin(PlayerId::Red, 3), PATH_LEN - 2)
        .start()
        .expect("valid setup");

    let report = game.roll_dice();

    assert!(matches!(
        report,
        TurnReport::NoMoves { player: PlayerId::Red, .. }
    ));
    assert!(!*game.state().player(PlayerId::Red).has_moves());
    assert_eq!(*game.state().player(PlayerId::Red).state(), PlayerState::Inactive);
    assert_eq!(*game.state().current_player().id(), PlayerId::Green);
    assert_eq!(
        coin_path_index(game.state(), coin(PlayerId::Red, 3)),
        Some(PATH_LEN - 2)
    );
}

#[test]
fn test_select_cell_moves_coin_standing_there() {
    let red = coin(PlayerId::Red, 1);
    let mut game = setup(&[3])
        .with_coin_at_index(red, 20)
        .start()
        .expect("valid setup");
    let at = *game.state().coin(red).position();

    assert!(matches!(game.roll_dice(), TurnReport::AwaitingSelection { .. }));
    assert!(game.select_cell(Position::new(7, 7)).is_ignored());

    let report = game.select_cell(at);
    let outcome = report.outcome().expect("coin moved");
    assert_eq!(outcome.coin, red);
    assert_eq!(outcome.to_index, 23);
}

#[test]
fn test_select_cell_off_the_board_is_ignored() {
    let red = coin(PlayerId::Red, 0);
    // Red index 51 is (7, 1), which row-major order also reaches as (6, 16).
    let mut game = setup(&[3])
        .with_coin_at_index(red, 51)
        .start()
        .expect("valid setup");
    assert_eq!(*game.state().coin(red).position(), Position::new(7, 1));

    assert!(matches!(game.roll_dice(), TurnReport::AwaitingSelection { .. }));
    let before = game.state().clone();

    assert!(game.select_cell(Position::new(6, 16)).is_ignored());
    assert!(game.select_cell(Position::new(20, 0)).is_ignored());
    assert!(game.select_cell(Position::new(usize::MAX, usize::MAX)).is_ignored());

    assert_eq!(game.state(), &before);
    assert_eq!(
        *game.state().current_player().state(),
        PlayerState::SelectingCoin
    );
    assert_eq!(coin_path_index(game.state(), red), Some(51));
}
