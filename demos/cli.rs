//! CLI example playing the game in a terminal.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use ocho::{Game, GameOptions, GameState, PlayOutcome};

fn main() {
    println!("Crazy-eights solitaire (p <n> to play, d to draw, r to restart, q to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    game.start_game();

    loop {
        print_table(&game);

        if game.state() == GameState::Won {
            println!("You have won! Game over.");
        }

        let line = prompt_line("> ");
        let mut words = line.split_whitespace();

        match words.next() {
            Some("q") => {
                println!("Goodbye.");
                break;
            }
            Some("r") => {
                game.start_game();
                println!("New game dealt.");
            }
            Some("d") => match game.draw() {
                Ok(card) => println!("Drew {card}."),
                Err(err) => println!("Cannot draw: {err}"),
            },
            Some("p") => {
                let Some(index) = words.next().and_then(|w| w.parse::<usize>().ok()) else {
                    println!("Usage: p <hand index>");
                    continue;
                };
                let Some(card) = game.hand().get(index).copied() else {
                    println!("No card at index {index}.");
                    continue;
                };
                match game.play(card) {
                    Ok(PlayOutcome::Continue | PlayOutcome::Won) => println!("Played {card}."),
                    Err(err) => println!("{err}"),
                }
            }
            _ => println!("Commands: p <n>, d, r, q"),
        }
    }
}

fn print_table(game: &Game) {
    match game.active_card() {
        Some(card) => println!("\nActive card: {card}"),
        None => println!("\nActive card: (none)"),
    }
    println!("Draw pile: {} cards", game.draw_count());
    println!("Hand:");
    for (i, card) in game.hand().iter().enumerate() {
        println!("  [{i}] {card}");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_lowercase()
}
