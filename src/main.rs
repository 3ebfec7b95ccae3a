use std::io::{self, BufRead, Write};

use regicide::board::MoveOutcome;
use regicide::game::{Game, GameMode};
use regicide::moves::parse_square;
use regicide::piece::Color;

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mode = prompt_mode(&mut input);
    let mut game = Game::new(mode);
    let mut rng = rand::thread_rng();

    while !game.is_over() {
        println!("{}", game.board);
        if game.is_computer_turn() {
            match game.computer_turn(&mut rng) {
                Some(mv) => println!("Computer plays {mv}"),
                None => {
                    println!("The computer has no moves left.");
                    return;
                }
            }
        } else {
            player_turn(&mut game, &mut input);
        }
    }

    println!("{}", game.board);
    match game.winner {
        Some(Color::White) => println!("White wins!"),
        Some(Color::Black) if game.mode == GameMode::VsComputer => {
            println!("Black (computer) wins!")
        }
        Some(Color::Black) => println!("Black wins!"),
        None => {}
    }
}

/// Ask for the game mode until one of the two choices is given.
fn prompt_mode(input: &mut impl BufRead) -> GameMode {
    loop {
        match read_line(input, "Play a 1-player or a 2-player game? (Enter 1 or 2): ").trim() {
            "1" => return GameMode::VsComputer,
            "2" => return GameMode::TwoPlayer,
            _ => println!("Invalid choice. Please enter 1 or 2."),
        }
    }
}

/// One human half-move: keep prompting until a legal move is played or the
/// game ends on a king capture.
fn player_turn(game: &mut Game, input: &mut impl BufRead) {
    let side = match game.current_turn {
        Color::White => "White",
        Color::Black => "Black",
    };
    println!("{side}'s turn");

    loop {
        let from = read_square(input, "Enter start position (e.g. e2): ");
        let to = read_square(input, "Enter end position (e.g. e4): ");
        match game.try_move(from, to) {
            MoveOutcome::Illegal => println!("Invalid move! Please try again."),
            MoveOutcome::Played | MoveOutcome::KingCaptured => return,
        }
    }
}

/// Keep prompting until the line parses as a board square.
fn read_square(input: &mut impl BufRead, prompt: &str) -> (usize, usize) {
    loop {
        let line = read_line(input, prompt);
        match parse_square(&line) {
            Some(square) => return square,
            None => println!("Squares are a letter a-h followed by a digit 1-8."),
        }
    }
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().expect("failed to flush stdout");
    let mut line = String::new();
    let bytes = input.read_line(&mut line).expect("failed to read stdin");
    if bytes == 0 {
        // EOF: there is no way to continue the game.
        println!();
        std::process::exit(0);
    }
    line
}
