use core::time::Duration;

use crazy_eights::{
    Card, Game, GameOptions, GameState, GameStatus, OpponentMove, Party, PendingTurn, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, opponent_delay_ms: u32) -> Self {
        Self {
            game: Game::new(options(opponent_delay_ms), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32, opponent_delay_ms: u32) {
        self.game = Game::new(options(opponent_delay_ms), seed as u64);
    }

    pub fn start_new_game(&self) {
        self.game.start_new_game();
    }

    pub fn play_card(&self, suit: &str, rank: u8) -> Result<(), JsValue> {
        let card = Card::new(parse_suit(suit)?, rank);
        self.game.play_card(card).map_err(js_err)
    }

    pub fn draw_card(&self) -> Result<JsValue, JsValue> {
        let drawn = self.game.draw_card().map_err(js_err)?;
        to_js_value(&drawn.map(card_to_js))
    }

    pub fn choose_suit(&self, suit: &str) -> Result<(), JsValue> {
        self.game.choose_suit(parse_suit(suit)?).map_err(js_err)
    }

    pub fn is_legal_play(&self, suit: &str, rank: u8) -> Result<bool, JsValue> {
        let card = Card::new(parse_suit(suit)?, rank);
        Ok(self.game.is_legal_play(&card))
    }

    /// Returns `{ generation, delay_ms }` when the opponent should act, so the
    /// page can wait `delay_ms` and then call `run_opponent_turn(generation)`.
    pub fn schedule_opponent_turn(&self) -> Result<JsValue, JsValue> {
        let pending = self.game.schedule_opponent_turn().map(|pending| JsPendingTurn {
            generation: pending.generation,
            delay_ms: pending.delay.as_millis() as u32,
        });
        to_js_value(&pending)
    }

    pub fn run_opponent_turn(&self, generation: u64) -> Result<JsValue, JsValue> {
        let pending = PendingTurn {
            generation,
            delay: self.game.options.opponent_delay,
        };
        let chosen = self.game.run_opponent_turn(pending).map_err(js_err)?;
        to_js_value(&JsOpponentMove::from(chosen))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let legal = self.game.legal_plays(Party::Player);
        to_js_value(&Snapshot::new(&state, &legal, self.game.generation()))
    }
}

fn options(opponent_delay_ms: u32) -> GameOptions {
    GameOptions::default().with_opponent_delay(Duration::from_millis(opponent_delay_ms.into()))
}

#[derive(Serialize)]
struct Snapshot {
    status: &'static str,
    turn: &'static str,
    winner: Option<&'static str>,
    player_hand: Vec<JsCard>,
    opponent_cards: u32,
    deck_remaining: u32,
    discard_pile: Vec<JsCard>,
    active_suit: Option<&'static str>,
    legal_plays: Vec<JsCard>,
    last_action: String,
    generation: u64,
}

impl Snapshot {
    fn new(state: &GameState, legal: &[Card], generation: u64) -> Self {
        Self {
            status: status_to_str(state.status),
            turn: party_to_str(state.turn),
            winner: state.winner.map(party_to_str),
            player_hand: state.player_hand.cards().iter().copied().map(card_to_js).collect(),
            opponent_cards: state.opponent_hand.len() as u32,
            deck_remaining: state.deck.len() as u32,
            discard_pile: state.discard_pile.iter().copied().map(card_to_js).collect(),
            active_suit: state.active_suit.map(Suit::name),
            legal_plays: legal.iter().copied().map(card_to_js).collect(),
            last_action: state.last_action.clone(),
            generation,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    id: u8,
    suit: &'static str,
    rank: u8,
    label: &'static str,
}

#[derive(Serialize)]
struct JsPendingTurn {
    generation: u64,
    delay_ms: u32,
}

#[derive(Serialize)]
struct JsOpponentMove {
    kind: &'static str,
    card: Option<JsCard>,
}

impl From<OpponentMove> for JsOpponentMove {
    fn from(chosen: OpponentMove) -> Self {
        match chosen {
            OpponentMove::Play(card) => Self {
                kind: "play",
                card: Some(card_to_js(card)),
            },
            OpponentMove::Draw => Self {
                kind: "draw",
                card: None,
            },
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        id: card.id().get(),
        suit: card.suit.name(),
        rank: card.rank,
        label: card.label(),
    }
}

fn parse_suit(suit: &str) -> Result<Suit, JsValue> {
    Suit::ALL
        .into_iter()
        .find(|s| s.name() == suit)
        .ok_or_else(|| JsValue::from_str("unknown suit"))
}

fn status_to_str(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "idle",
        GameStatus::Playing => "playing",
        GameStatus::ChoosingSuit => "choosing_suit",
        GameStatus::GameOver => "game_over",
    }
}

fn party_to_str(party: Party) -> &'static str {
    match party {
        Party::Player => "player",
        Party::Opponent => "opponent",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
