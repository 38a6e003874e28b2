//! CLI Crazy Eights example.
//!
//! Set `RUST_LOG=crazy_eights=debug` to watch the engine's transitions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crazy_eights::{Card, Game, GameOptions, GameState, GameStatus, Hand, Party, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Crazy Eights CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    game.start_new_game();

    loop {
        let state = game.state();
        println!("\n{}", state.last_action);

        match state.status {
            GameStatus::Idle => game.start_new_game(),
            GameStatus::GameOver => {
                match prompt_line("Play again? (y/n): ").as_str() {
                    "y" | "yes" => game.start_new_game(),
                    _ => {
                        println!("Goodbye.");
                        return;
                    }
                }
            }
            GameStatus::ChoosingSuit => {
                let line = prompt_line("Choose a suit [h]earts [d]iamonds [c]lubs [s]pades: ");
                if line == "q" || line == "quit" {
                    return;
                }
                let Some(suit) = parse_suit(&line) else {
                    println!("Unknown suit.");
                    continue;
                };
                if let Err(err) = game.choose_suit(suit) {
                    println!("Suit error: {err}");
                }
            }
            GameStatus::Playing if state.turn == Party::Opponent => {
                let Some(pending) = game.schedule_opponent_turn() else {
                    continue;
                };
                println!("{} is thinking...", game.options.opponent_name);
                if let Err(err) = game.wait_and_run_opponent_turn(pending) {
                    println!("Opponent error: {err}");
                }
            }
            GameStatus::Playing => {
                print_table(&game, &state);
                let line = prompt_line("Card number to play, [d]raw, or [q]uit: ");
                let result = match line.as_str() {
                    "q" | "quit" => return,
                    "d" | "draw" => game.draw_card().map(|_| ()).map_err(|e| e.to_string()),
                    other => match other.parse::<usize>() {
                        Ok(index) => match state.player_hand.cards().get(index) {
                            Some(&card) => game.play_card(card).map_err(|e| e.to_string()),
                            None => Err("no card at that position".to_string()),
                        },
                        Err(_) => Err("unknown action".to_string()),
                    },
                };
                if let Err(err) = result {
                    println!("Action error: {err}");
                }
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn parse_suit(input: &str) -> Option<Suit> {
    match input {
        "h" | "hearts" => Some(Suit::Hearts),
        "d" | "diamonds" => Some(Suit::Diamonds),
        "c" | "clubs" => Some(Suit::Clubs),
        "s" | "spades" => Some(Suit::Spades),
        _ => None,
    }
}

fn print_table(game: &Game, state: &GameState) {
    println!(
        "\nDeck: {} cards | {}: {} cards",
        state.deck.len(),
        game.options.opponent_name,
        state.opponent_hand.len()
    );

    if let (Some(active), Some(suit)) = (state.active_card(), state.active_suit) {
        println!(
            "Table: {} (suit in play: {})",
            format_card(active),
            colorize(&suit.symbol().to_string(), suit_color(suit))
        );
    }

    println!("Your hand: {}", format_hand(game, &state.player_hand));
}

fn format_hand(game: &Game, hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let text = format!("{index}:{}", format_card(card));
            if game.is_legal_play(card) {
                text
            } else {
                colorize(&format!("{index}:{}{}", card.label(), card.suit.symbol()), "90")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    colorize(
        &format!("{}{}", card.label(), card.suit.symbol()),
        suit_color(card.suit),
    )
}

const fn suit_color(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
