// Random-vs-random self-play. Prints one JSON record per game on stdout and
// a summary on stderr. Useful for eyeballing how long king-capture games run
// and that neither color is favored by the move generator.

use rand::Rng;
use serde::Serialize;

use regicide::game::{Game, GameMode};
use regicide::piece::Color;

const GAMES: usize = 100;
const MAX_HALF_MOVES: u32 = 600;

#[derive(Serialize)]
struct GameRecord {
    game: usize,
    half_moves: u32,
    winner: Option<&'static str>,
}

fn play_game(rng: &mut impl Rng) -> (u32, Option<Color>) {
    let mut game = Game::new(GameMode::TwoPlayer);
    let mut half_moves = 0;
    while !game.is_over() && half_moves < MAX_HALF_MOVES {
        if game.computer_turn(rng).is_none() {
            break;
        }
        half_moves += 1;
    }
    (half_moves, game.winner)
}

fn main() {
    let mut rng = rand::thread_rng();

    let mut white_wins = 0u32;
    let mut black_wins = 0u32;
    let mut unfinished = 0u32;

    for game in 1..=GAMES {
        let (half_moves, winner) = play_game(&mut rng);
        match winner {
            Some(Color::White) => white_wins += 1,
            Some(Color::Black) => black_wins += 1,
            None => unfinished += 1,
        }

        let record = GameRecord {
            game,
            half_moves,
            winner: winner.map(|c| match c {
                Color::White => "white",
                Color::Black => "black",
            }),
        };
        println!("{}", serde_json::to_string(&record).expect("record serializes"));
    }

    eprintln!(
        "white {white_wins}, black {black_wins}, unfinished {unfinished} (of {GAMES} games)"
    );
}
