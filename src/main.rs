use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use minimax_chess::game::{Game, GameConfig};

const USAGE: &str = "usage: minimax_chess [--color white|black] [--depth 1-8] [--fen \"<record>\"]";

const HELP: &str = "commands: <move> (e.g. e2e4, e7e8q), moves, undo, fen, reset, help, quit";

fn main() {
    let config = match GameConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    println!("{HELP}");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", game.board());
        println!("{}", game.status_message());

        if game.is_engine_turn() && !game.is_over() {
            println!("Engine thinking...");
            match game.play_engine_move() {
                Ok(Some(result)) => println!(
                    "Engine plays {} (score {}, {} nodes, {} evaluations)",
                    result.best_move,
                    result.score,
                    result.stats.nodes_searched,
                    result.stats.positions_evaluated
                ),
                Ok(None) => {}
                Err(err) => println!("{err}"),
            }
            continue;
        }

        print!("> ");
        io::stdout().flush().ok();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("error: {err}");
                break;
            }
            None => break,
        };

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "fen" => println!("{}", game.fen()),
            "reset" => game.reset(),
            "moves" => {
                let moves: Vec<String> = game.legal_moves().iter().map(ToString::to_string).collect();
                println!("{}", moves.join(" "));
            }
            "undo" => match game.undo_turn() {
                Ok(plies) => println!("Took back {plies} ply(s)"),
                Err(err) => println!("{err}"),
            },
            notation => {
                if let Err(err) = game.play_player_notation(notation) {
                    println!("{err}");
                }
            }
        }
    }
}
