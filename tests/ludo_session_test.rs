//! Tests for the line-driven session and the command line.

use clap::Parser;
use strictly_ludo::{GameSetup, PATH_LEN, CoinId, PlayerId, PlayerState, RuleSet, ScriptedDice};
use strictly_ludo_play::{Cli, Command, Reply, Session, SessionCommand};

fn session(faces: &[u8]) -> Session {
    let dice = ScriptedDice::new(faces.iter().copied()).expect("valid script");
    let game = GameSetup::new(RuleSet::default())
        .with_dice(dice)
        .start()
        .expect("valid setup");
    Session::new(game)
}

fn run(session: &mut Session, input: &str) -> String {
    let mut output = Vec::new();
    session
        .run(input.as_bytes(), &mut output)
        .expect("in-memory I/O");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn test_roll_and_pick_by_slot() {
    let mut session = session(&[6]);
    let output = run(&mut session, "roll\ncoin 0\nquit\n");

    assert!(output.contains("Red rolled 6. Choose a coin: 0, 1, 2, 3"));
    assert!(output.contains("Red#0 moved"));
    assert!(output.contains("Roll again."));
    let red = CoinId::new(PlayerId::Red, 0).expect("valid slot");
    assert!(!session.game().state().coin(red).is_at_origin());
}

#[test]
fn test_pick_by_cell() {
    let mut session = session(&[6]);
    // Red's first yard slot is at (2, 2).
    let output = run(&mut session, "roll\npick 2 2\n");

    assert!(output.contains("Red#0 moved (2, 2) -> (6, 1)"));
}

#[test]
fn test_bad_input_reports_errors_and_continues() {
    let mut session = session(&[6]);
    let output = run(&mut session, "dance\ncoin 9\nroll\nquit\n");

    assert!(output.contains("error: unknown command: dance"));
    assert!(output.contains("error: no coin in slot 9"));
    assert!(output.contains("Red rolled 6"));
}

#[test]
fn test_out_of_turn_selection_is_reported() {
    let mut session = session(&[6]);
    let reply = session.execute(SessionCommand::Coin(0)).expect("valid slot");
    match reply {
        Reply::Text(text) => assert!(text.starts_with("Nothing happened.")),
        Reply::Quit => panic!("Unexpected quit"),
    }
}

#[test]
fn test_state_command_emits_json() {
    let mut session = session(&[6]);
    let reply = session.execute(SessionCommand::State).expect("serializable state");
    let Reply::Text(json) = reply else {
        panic!("Expected text");
    };
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["current_player_index"], 0);
    assert_eq!(value["players"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_session_ends_with_the_game() {
    let dice = ScriptedDice::new([2]).expect("valid script");
    let mut setup = GameSetup::new(RuleSet::default())
        .with_dice(dice)
        .with_current_player(PlayerId::Yellow);
    for player in [PlayerId::Red, PlayerId::Green] {
        for slot in 0..4 {
            let coin = CoinId::new(player, slot).expect("slot");
            setup = setup.with_coin_at_index(coin, PATH_LEN - 1);
        }
    }
    for slot in 0..3 {
        let coin = CoinId::new(PlayerId::Yellow, slot).expect("slot");
        setup = setup.with_coin_at_index(coin, PATH_LEN - 1);
    }
    let game = setup
        .with_coin_at_index(CoinId::new(PlayerId::Yellow, 3).expect("slot"), PATH_LEN - 3)
        .start()
        .expect("valid setup");
    let mut session = Session::new(game);

    let output = run(&mut session, "roll\nroll\n");

    assert!(output.contains("Yellow has all coins home!"));
    assert!(output.contains("Game over. Standings: Red, Green, Yellow"));
    assert_eq!(
        *session.game().state().player(PlayerId::Blue).state(),
        PlayerState::Lost
    );
}

#[test]
fn test_cli_parses_play_options() {
    let cli = Cli::try_parse_from(["strictly_ludo", "play", "--seed", "12"]).expect("valid args");
    match cli.command {
        Command::Play { config, seed } => {
            assert_eq!(seed, Some(12));
            assert_eq!(config, std::path::PathBuf::from("ludo.toml"));
        }
        other => panic!("Expected play, got {:?}", other),
    }

    let cli = Cli::try_parse_from(["strictly_ludo", "rules", "--traditional"]).expect("valid args");
    assert!(matches!(cli.command, Command::Rules { traditional: true }));
}
