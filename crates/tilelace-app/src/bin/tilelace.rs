//! Line-oriented probe binary for driving a Tilelace session.
//!
//! Reads command words from stdin and prints the projected board after each
//! one. This is a development harness for exercising the game rules end to
//! end, not a game UI.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin tilelace -- --seed 42
//! ```
//!
//! Commands: `left`, `right`, `up`, `down`, `rotate`, `next`, `prev`,
//! `commit`, `show`, `help`, `quit`.

use std::io::{self, BufRead as _, Write as _};

use clap::Parser;
use tilelace_app::{action::Action, handler, session, state::AppState};
use tilelace_game::{CONFLICT, FrameGrid, MoveDirection};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Session seed; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn parse_action(word: &str) -> Option<Action> {
    match word {
        "left" => Some(Action::MovePiece(MoveDirection::Left)),
        "right" => Some(Action::MovePiece(MoveDirection::Right)),
        "up" => Some(Action::MovePiece(MoveDirection::Up)),
        "down" => Some(Action::MovePiece(MoveDirection::Down)),
        "rotate" => Some(Action::RotatePiece),
        "next" => Some(Action::SelectNext),
        "prev" => Some(Action::SelectPrevious),
        "commit" => Some(Action::CommitPiece),
        _ => None,
    }
}

fn render(frames: &FrameGrid) -> String {
    let mut out = String::new();
    for frame in frames.frames() {
        let cell = match frame.value() {
            CONFLICT => "  X".to_string(),
            0 if frame.forbidden() => "  #".to_string(),
            0 => "  .".to_string(),
            value => format!("{value:>3}"),
        };
        out.push_str(&cell);
        if frame.position().x() == 6 {
            out.push('\n');
        }
    }
    out
}

fn print_state(app_state: &AppState) {
    print!("{}", render(app_state.frames()));
    let game = app_state.game();
    if game.is_solved() {
        println!("solved!");
    } else {
        let current = game
            .current_piece()
            .map_or_else(|| "none".to_string(), |piece| piece.id().to_string());
        println!(
            "current: {current}, committed: {}/{}, savable: {}",
            game.committed_ids().len(),
            game.pieces().len(),
            game.is_savable()
        );
    }
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut app_state = AppState::new(session::new_session(seed));

    println!("tilelace probe, seed={seed} (help for commands)");
    print_state(&app_state);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        for word in line.split_whitespace() {
            match word {
                "quit" | "exit" => return Ok(()),
                "help" => println!(
                    "commands: left right up down rotate next prev commit show help quit"
                ),
                "show" => {}
                word => {
                    if let Some(action) = parse_action(word) {
                        handler::handle(&mut app_state, action);
                    } else {
                        println!("unknown command: {word}");
                        continue;
                    }
                }
            }
            // The probe settles immediately; coalescing matters for
            // interactive frontends, not a line-oriented loop.
            app_state.settle_now();
            print_state(&app_state);
        }
    }
    Ok(())
}
