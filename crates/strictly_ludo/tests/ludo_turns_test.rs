//! Turn rotation, bonus turns, and the end of the game.

use strictly_ludo::{
    CoinId, Game, GameSetup, PATH_LEN, PlayerId, PlayerState, RuleSet, ScriptedDice, Stimulus,
    TurnReport,
};

fn coin(player: PlayerId, slot: u8) -> CoinId {
    CoinId::new(player, slot).expect("valid slot")
}

fn dice(faces: &[u8]) -> ScriptedDice {
    ScriptedDice::new(faces.iter().copied()).expect("valid script")
}

fn finish_all(mut setup: GameSetup, player: PlayerId) -> GameSetup {
    for slot in 0..4 {
        setup = setup.with_coin_at_index(coin(player, slot), PATH_LEN - 1);
    }
    setup
}

#[test]
fn test_normal_landing_rotates_turn() {
    let mut game = Game::with_dice(RuleSet::default(), dice(&[3])).expect("valid rules");
    let red = coin(PlayerId::Red, 0);

    // Entering on START earns a bonus roll.
    game.roll_dice();
    game.select_coin(red);
    assert_eq!(*game.state().current_player().id(), PlayerId::Red);

    // Index 3 is a NORMAL cell and the roll was not a six.
    game.roll_dice();
    let report = game.select_coin(red);
    let outcome = report.outcome().expect("coin moved");
    assert_eq!(outcome.to_index, 3);
    assert!(!outcome.bonus_turn);

    assert_eq!(*game.state().current_player().id(), PlayerId::Green);
    assert_eq!(*game.state().player(PlayerId::Red).state(), PlayerState::Inactive);
    assert_eq!(
        *game.state().player(PlayerId::Green).state(),
        PlayerState::WaitingRoll
    );
}

#[test]
fn test_six_on_normal_cell_keeps_turn() {
    let red = coin(PlayerId::Red, 0);
    let mut game = GameSetup::new(RuleSet::default())
        .with_dice(dice(&[6]))
        .with_coin_at_index(red, 10)
        .start()
        .expect("valid setup");

    game.roll_dice();
    let report = game.select_coin(red);
    assert!(report.outcome().expect("coin moved").bonus_turn);
    assert_eq!(game.state().current_player_index(), 0);
    assert_eq!(
        *game.state().current_player().state(),
        PlayerState::WaitingRoll
    );
}

#[test]
fn test_bonus_on_six_can_be_disabled() {
    let rules = RuleSet {
        bonus_on_six: false,
        ..RuleSet::default()
    };
    let red = coin(PlayerId::Red, 0);
    let mut game = GameSetup::new(rules)
        .with_dice(dice(&[6]))
        .with_coin_at_index(red, 10)
        .start()
        .expect("valid setup");

    game.roll_dice();
    game.select_coin(red);
    assert_eq!(*game.state().current_player().id(), PlayerId::Green);
}

#[test]
fn test_no_moves_passes_around_the_table() {
    let mut game = Game::with_dice(RuleSet::traditional(), dice(&[1])).expect("valid rules");

    for expected in [PlayerId::Red, PlayerId::Green, PlayerId::Yellow, PlayerId::Blue] {
        assert_eq!(*game.state().current_player().id(), expected);
        assert!(matches!(
            game.roll_dice(),
            TurnReport::NoMoves { player, .. } if player == expected
        ));
    }
    assert_eq!(*game.state().current_player().id(), PlayerId::Red);
    assert!(game.state().started());
}

#[test]
fn test_rotation_skips_winners() {
    let setup = GameSetup::new(RuleSet::traditional()).with_dice(dice(&[1]));
    let mut game = finish_all(setup, PlayerId::Green).start().expect("valid setup");

    assert_eq!(*game.state().current_player().id(), PlayerId::Red);
    game.roll_dice();
    assert_eq!(*game.state().current_player().id(), PlayerId::Yellow);
    game.roll_dice();
    game.roll_dice();
    assert_eq!(*game.state().current_player().id(), PlayerId::Red);
}

#[test]
fn test_last_player_standing_loses() {
    let setup = GameSetup::new(RuleSet::default())
        .with_dice(dice(&[2]))
        .with_current_player(PlayerId::Yellow);
    let mut setup = finish_all(finish_all(setup, PlayerId::Red), PlayerId::Green);
    for slot in 0..3 {
        setup = setup.with_coin_at_index(coin(PlayerId::Yellow, slot), PATH_LEN - 1);
    }
    let mut game = setup
        .with_coin_at_index(coin(PlayerId::Yellow, 3), PATH_LEN - 3)
        .start()
        .expect("valid setup");
    assert!(!game.is_over());

    let report = game.roll_dice();
    assert!(report.outcome().expect("coin moved").won);

    assert_eq!(*game.state().player(PlayerId::Blue).state(), PlayerState::Lost);
    assert_eq!(
        game.state().standings(),
        &[PlayerId::Red, PlayerId::Green, PlayerId::Yellow]
    );
    assert!(game.is_over());
}

#[test]
fn test_stimuli_after_game_over_are_ignored() {
    let setup = GameSetup::new(RuleSet::default()).with_dice(dice(&[6]));
    let setup = [PlayerId::Red, PlayerId::Green, PlayerId::Yellow]
        .into_iter()
        .fold(setup, finish_all);
    let mut game = setup.start().expect("valid setup");

    assert!(game.is_over());
    assert_eq!(*game.state().player(PlayerId::Blue).state(), PlayerState::Lost);

    let before = game.state().clone();
    assert!(game.handle(Stimulus::Roll).is_ignored());
    assert!(game.handle(Stimulus::SelectCoin(coin(PlayerId::Blue, 0))).is_ignored());
    assert_eq!(game.state(), &before);
}

#[test]
fn test_unplayable_selection_is_ignored() {
    let red = coin(PlayerId::Red, 0);
    let mut game = GameSetup::new(RuleSet::traditional())
        .with_dice(dice(&[6]))
        .with_coin_at_index(red, PATH_LEN - 3)
        .start()
        .expect("valid setup");

    // Three yard coins can leave on the six; the coin near FINISH cannot move.
    match game.roll_dice() {
        TurnReport::AwaitingSelection { playable, .. } => {
            assert_eq!(playable.len(), 3);
            assert!(!playable.contains(&red));
        }
        other => panic!("Expected a selection, got {:?}", other),
    }
    assert!(game.select_coin(red).is_ignored());
    assert_eq!(
        *game.state().current_player().state(),
        PlayerState::SelectingCoin
    );
}
