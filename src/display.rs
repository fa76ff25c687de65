//! Plain-text rendering of a game.
//!
//! Each cell is two characters wide. A cell holding coins shows the
//! owner's initial and, when more than one coin is there, the count. Coins
//! of different owners sharing a cell show as `+` and the count (`++` past
//! nine). Empty cells show their type:
//!
//! | glyph | cell                  |
//! |-------|-----------------------|
//! | `. `  | normal track          |
//! | `* `  | safe                  |
//! | `> `  | start                 |
//! | `o `  | empty yard slot       |
//! | `# `  | finish                |

use strictly_ludo::{
    BOARD_SIZE, Cell, CellType, Game, GameState, PlayerId, TurnReport,
};

fn initial(player: PlayerId) -> char {
    match player {
        PlayerId::Red => 'R',
        PlayerId::Green => 'G',
        PlayerId::Yellow => 'Y',
        PlayerId::Blue => 'B',
    }
}

/// Two-character glyph for one cell.
pub fn cell_glyph(cell: &Cell) -> String {
    match cell.coins().as_slice() {
        [] => match cell.kind() {
            CellType::Wall => "  ",
            CellType::Normal => ". ",
            CellType::Safe => "* ",
            CellType::Start => "> ",
            CellType::Home => "o ",
            CellType::Finish => "# ",
        }
        .to_string(),
        [only] => format!("{} ", initial(only.player())),
        [first, rest @ ..] if rest.iter().all(|c| c.player() == first.player()) => {
            format!("{}{}", initial(first.player()), rest.len() + 1)
        }
        mixed if mixed.len() < 10 => format!("+{}", mixed.len()),
        _ => "++".to_string(),
    }
}

/// The board with row and column numbers.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{:<2}", col % 10));
    }
    out.push('\n');
    for (row, cells) in state.board().rows().enumerate() {
        out.push_str(&format!("{:>2} ", row));
        for cell in cells {
            out.push_str(&cell_glyph(cell));
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }
    out
}

/// One line per player plus the die.
pub fn render_status(game: &Game) -> String {
    let state = game.state();
    let current = *state.current_player().id();
    let mut out = String::new();
    for player in state.players() {
        let marker = if *player.id() == current && !game.is_over() { "->" } else { "  " };
        let home = strictly_ludo::queries::finished_coin_count(state, *player.id());
        out.push_str(&format!(
            "{} {:<6} {:<13} {}/4 home\n",
            marker,
            player.id().to_string(),
            player.state().to_string(),
            home
        ));
    }
    out.push_str(&format!("   dice: {}", state.dice().value()));
    if !game.playable().is_empty() {
        let choices: Vec<String> = game.playable().iter().map(|c| c.slot().to_string()).collect();
        out.push_str(&format!("  choose coin: {}", choices.join(", ")));
    }
    out.push('\n');
    if !state.standings().is_empty() {
        let names: Vec<String> = state.standings().iter().map(ToString::to_string).collect();
        out.push_str(&format!("   standings: {}\n", names.join(", ")));
    }
    out
}

/// Human-readable summary of what a stimulus did.
pub fn describe(report: &TurnReport) -> String {
    match report {
        TurnReport::Ignored => "Nothing happened.".to_string(),
        TurnReport::NoMoves { player, dice } => {
            format!("{} rolled {} and cannot move.", player, dice)
        }
        TurnReport::AwaitingSelection { player, dice, playable } => {
            let slots: Vec<String> = playable.iter().map(|c| c.slot().to_string()).collect();
            format!(
                "{} rolled {}. Choose a coin: {}",
                player,
                dice,
                slots.join(", ")
            )
        }
        TurnReport::Moved(outcome) => {
            let mut line = format!(
                "{} moved {} -> {} ({:?}).",
                outcome.coin, outcome.from, outcome.to, outcome.landing
            );
            for capture in &outcome.captures {
                line.push_str(&format!(" Captured {}!", capture.coin));
            }
            if outcome.won {
                line.push_str(&format!(" {} has all coins home!", outcome.player()));
            } else if outcome.bonus_turn {
                line.push_str(" Roll again.");
            }
            line
        }
    }
}
