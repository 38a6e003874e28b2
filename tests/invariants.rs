//! Property tests for table invariants over random games.

use core::time::Duration;

use crazy_eights::{Game, GameOptions, GameStatus, Party, Suit};
use proptest::prelude::*;

fn play_random_game(seed: u64, choices: &[u8]) -> Game {
    let game = Game::new(
        GameOptions::default().with_opponent_delay(Duration::ZERO),
        seed,
    );
    game.start_new_game();
    assert!(game.state().check_invariants());

    for &choice in choices {
        let state = game.state();
        match state.status {
            GameStatus::GameOver => break,
            GameStatus::ChoosingSuit => {
                let suit = Suit::ALL[usize::from(choice) % Suit::ALL.len()];
                game.choose_suit(suit).unwrap();
                let next = game.state();
                assert_eq!(next.active_suit, Some(suit));
                assert_eq!(next.turn, Party::Opponent);
            }
            GameStatus::Playing if state.turn == Party::Opponent => {
                let pending = game.schedule_opponent_turn().unwrap();
                game.run_opponent_turn(pending).unwrap();
                let next = game.state();
                assert!(next.turn == Party::Player || next.status == GameStatus::GameOver);
            }
            GameStatus::Playing => {
                let legal = game.legal_plays(Party::Player);
                let pick = usize::from(choice) % (legal.len() + 1);
                if let Some(&card) = legal.get(pick) {
                    game.play_card(card).unwrap();
                    let next = game.state();
                    assert_eq!(next.active_card(), Some(&card));
                    assert!(!next.player_hand.contains(&card));
                } else {
                    let before = state.deck.len();
                    game.draw_card().unwrap();
                    let next = game.state();
                    assert_eq!(next.turn, Party::Opponent);
                    assert_eq!(next.deck.len(), before.saturating_sub(1));
                }
            }
            GameStatus::Idle => unreachable!("game was dealt"),
        }

        assert!(game.state().check_invariants());
    }

    game
}

proptest! {
    #[test]
    fn cards_are_conserved_through_random_games(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let game = play_random_game(seed, &choices);
        let state = game.state();
        prop_assert!(state.check_invariants());
        prop_assert_eq!(state.winner.is_some(), state.status == GameStatus::GameOver);
    }

    #[test]
    fn rejected_commands_never_change_state(seed in any::<u64>(), rank in 1u8..=13) {
        let game = Game::new(GameOptions::default(), seed);
        game.start_new_game();
        let before = game.state();

        let foreign = before.opponent_hand.cards()[usize::from(rank) % 8];
        prop_assert!(game.play_card(foreign).is_err());
        prop_assert!(game.choose_suit(Suit::Spades).is_err());
        prop_assert!(game.take_opponent_turn().is_err());
        prop_assert_eq!(game.state(), before);
    }
}
