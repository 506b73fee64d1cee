use crate::board::{NUM_SLOTS, free_slot_at, is_adjacent};
use crate::config::MorrisConfig;
use crate::error::{MorrisError, MorrisResult};
use crate::event_log::{EventSink, GameEvent, NullSink};
use crate::motion::{Step, advance};
use crate::token::{TokenId, TokenRegistry};
use crate::types::{
    Banner, GameState, IndicatorPhase, Phase, Player, Point, TokenView, TurnIndicator,
};
use crate::win::{WIN_MASKS, has_won};

pub const TOKENS_PER_PLAYER: u8 = 3;

/// Menu screens reachable with `Intent::NavigateTo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Instructions,
    About,
}

/// Abstract player input, already separated from raw pointer handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    NavigateTo(Screen),
    BeginGame,
    Reset,
    /// Leave the game from the win screen.
    Exit,
    /// The host window was closed.
    Close,
    PlaceAt(Point),
    SelectAt(Point),
    MoveSelectedTo(Point),
    /// A board click, dispatched by phase the way a mouse press is.
    Click(Point),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Preconditions failed; nothing changed.
    Ignored,
    Accepted,
    /// The host should shut down.
    Quit,
}

impl From<bool> for Response {
    fn from(accepted: bool) -> Self {
        if accepted { Self::Accepted } else { Self::Ignored }
    }
}

pub struct GameInstance {
    config: MorrisConfig,
    phase: Phase,
    turn: Player,
    placed: [u8; 2],
    tokens: TokenRegistry,
    selected: Option<TokenId>,
    winner: Option<Player>,
    log: Box<dyn EventSink>,
}

impl GameInstance {
    pub fn new(config: MorrisConfig, log: Box<dyn EventSink>) -> MorrisResult<Self> {
        config.validate()?;
        Ok(Self::build(config, log))
    }

    pub fn new_with_default_config(log: Box<dyn EventSink>) -> Self {
        Self::build(MorrisConfig::default(), log)
    }

    pub fn new_unlogged() -> Self {
        Self::new_with_default_config(Box::new(NullSink))
    }

    fn build(config: MorrisConfig, log: Box<dyn EventSink>) -> Self {
        let mut game = Self {
            config,
            phase: Phase::Start,
            turn: Player::A,
            placed: [0; 2],
            tokens: TokenRegistry::new(),
            selected: None,
            winner: None,
            log,
        };
        game.log.record(&GameEvent::Launched);
        game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn placed(&self, player: Player) -> u8 {
        self.placed[player_index(player)]
    }

    pub fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }

    /// The selected token, if the reference is still valid.
    pub fn selected(&self) -> Option<TokenId> {
        self.selected
            .filter(|&id| self.tokens.get(id).is_some_and(|t| t.owner == self.turn))
    }

    pub fn config(&self) -> &MorrisConfig {
        &self.config
    }

    pub fn apply(&mut self, intent: Intent) -> Response {
        let response: Response = match intent {
            Intent::NavigateTo(screen) => self.navigate(screen).into(),
            Intent::BeginGame => self.begin_game().into(),
            Intent::Reset => self.reset().into(),
            Intent::Exit => self.exit(),
            Intent::Close => {
                self.log.record(&GameEvent::Closed);
                Response::Quit
            }
            Intent::PlaceAt(pos) => self.place_at(pos).into(),
            Intent::SelectAt(pos) => self.select_at(pos).into(),
            Intent::MoveSelectedTo(pos) => self.move_selected_to(pos).into(),
            Intent::Click(pos) => self.click(pos).into(),
        };
        tracing::debug!(?intent, ?response, phase = ?self.phase, turn = ?self.turn, "intent");
        response
    }

    /// Advances sliding tokens by `dt` seconds and resolves arrivals.
    /// Non-finite or non-positive deltas are dropped.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            tracing::debug!(dt, "dropping unusable frame delta");
            return;
        }
        let moving: Vec<TokenId> = self.tokens.moving().collect();
        for id in moving {
            let Some(token) = self.tokens.get_mut(id) else {
                continue;
            };
            if advance(token, dt, self.config.speed) == Step::Arrived {
                self.arrive(id);
            }
        }
    }

    /// Records a fatal asset failure and hands the error back to the host.
    pub fn report_asset_failure(&mut self, name: &str) -> MorrisError {
        self.log.record(&GameEvent::AssetsFailed {
            name: name.to_string(),
        });
        MorrisError::AssetLoad {
            name: name.to_string(),
        }
    }

    pub fn to_game_state(&self) -> GameState {
        let mut board = vec![0u8; NUM_SLOTS];
        for token in self.tokens.iter() {
            board[token.slot] = token.owner.code();
        }

        let selected = self.selected();
        let tokens = self
            .tokens
            .iter()
            .enumerate()
            .map(|(id, t)| TokenView {
                owner: t.owner,
                slot: t.slot as u8,
                destination: t.destination.map(|d| d as u8),
                x: t.position.x,
                y: t.position.y,
                selected: selected == Some(id),
                moving: t.is_moving(),
            })
            .collect();

        GameState {
            phase: self.phase,
            turn: self.turn,
            placed_a: self.placed(Player::A),
            placed_b: self.placed(Player::B),
            winner: self.winner,
            board,
            tokens,
            banner: self.banner(),
        }
    }

    pub fn banner(&self) -> Banner {
        match self.phase {
            Phase::Start => Banner::StartScreen,
            Phase::Instructions => Banner::Instructions,
            Phase::About => Banner::About,
            Phase::Win => Banner::Winner(self.winner.unwrap_or(self.turn)),
            Phase::Placement => Banner::Board(TurnIndicator {
                player: self.turn,
                phase: IndicatorPhase::Placement,
            }),
            // The indicator flips to the next player as soon as a slide starts.
            Phase::Movement => Banner::Board(TurnIndicator {
                player: if self.tokens.any_moving() {
                    self.turn.opponent()
                } else {
                    self.turn
                },
                phase: IndicatorPhase::Movement,
            }),
        }
    }

    fn navigate(&mut self, screen: Screen) -> bool {
        let next = match (self.phase, screen) {
            (Phase::Start, Screen::Instructions) => Phase::Instructions,
            (Phase::Start, Screen::About) => Phase::About,
            (Phase::Instructions | Phase::About, Screen::Start) => Phase::Start,
            _ => return false,
        };
        self.phase = next;
        true
    }

    fn begin_game(&mut self) -> bool {
        if self.phase != Phase::Start {
            return false;
        }
        self.clear_board();
        self.phase = Phase::Placement;
        self.log.record(&GameEvent::Started);
        true
    }

    fn reset(&mut self) -> bool {
        match self.phase {
            Phase::Win => {
                self.clear_board();
                self.phase = Phase::Start;
            }
            Phase::Placement | Phase::Movement => {
                self.clear_board();
                self.phase = Phase::Placement;
                self.log.record(&GameEvent::Reset);
            }
            Phase::Start | Phase::About | Phase::Instructions => return false,
        }
        true
    }

    fn exit(&mut self) -> Response {
        if self.phase != Phase::Win {
            return Response::Ignored;
        }
        self.log.record(&GameEvent::Exited);
        Response::Quit
    }

    fn place_at(&mut self, pos: Point) -> bool {
        if self.phase != Phase::Placement || self.placed(self.turn) >= TOKENS_PER_PLAYER {
            return false;
        }
        let Some(slot) = free_slot_at(pos, &self.tokens, self.config.slot_extent) else {
            return false;
        };
        if self
            .tokens
            .place_token(self.turn, slot, self.config.token_extent)
            .is_err()
        {
            return false;
        }

        if has_won(&self.tokens, self.turn, &WIN_MASKS) {
            self.declare_winner(self.turn);
            return true;
        }

        self.placed[player_index(self.turn)] += 1;
        if self.placed.iter().all(|&n| n == TOKENS_PER_PLAYER) {
            self.phase = Phase::Movement;
        }
        self.turn = self.turn.opponent();
        true
    }

    fn select_at(&mut self, pos: Point) -> bool {
        if self.phase != Phase::Movement || self.tokens.any_moving() {
            return false;
        }
        match self.tokens.token_at(pos, self.turn, self.config.token_extent) {
            Some(id) => {
                self.selected = Some(id);
                true
            }
            None => false,
        }
    }

    fn move_selected_to(&mut self, pos: Point) -> bool {
        if self.phase != Phase::Movement || self.tokens.any_moving() {
            return false;
        }
        let Some(id) = self.selected() else {
            return false;
        };
        let Some(origin) = self.tokens.get(id).map(|t| t.slot) else {
            return false;
        };
        let Some(target) = free_slot_at(pos, &self.tokens, self.config.slot_extent) else {
            return false;
        };
        if !is_adjacent(origin, target) {
            return false;
        }
        if self
            .tokens
            .begin_move(id, target, self.config.token_extent)
            .is_err()
        {
            return false;
        }

        self.selected = None;
        true
    }

    fn click(&mut self, pos: Point) -> bool {
        match self.phase {
            Phase::Placement => self.place_at(pos),
            Phase::Movement => {
                let hits_own = self
                    .tokens
                    .token_at(pos, self.turn, self.config.token_extent)
                    .is_some();
                if hits_own {
                    self.select_at(pos)
                } else {
                    self.move_selected_to(pos)
                }
            }
            _ => false,
        }
    }

    fn arrive(&mut self, id: TokenId) {
        if let Err(err) = self.tokens.complete_move(id) {
            tracing::warn!(%err, id, "arrival for a token that is not sliding");
            return;
        }
        self.selected = None;

        let Some(owner) = self.tokens.get(id).map(|t| t.owner) else {
            return;
        };
        tracing::debug!(id, ?owner, "token arrived");

        // Attributed to the mover, never to whoever the turn variable names.
        if has_won(&self.tokens, owner, &WIN_MASKS) {
            self.declare_winner(owner);
        } else {
            self.turn = owner.opponent();
        }
    }

    fn declare_winner(&mut self, player: Player) {
        self.winner = Some(player);
        self.phase = Phase::Win;
        self.selected = None;
        self.log.record(&GameEvent::Won(player));
    }

    fn clear_board(&mut self) {
        self.tokens.clear();
        self.placed = [0; 2];
        self.turn = Player::A;
        self.selected = None;
        self.winner = None;
    }
}

fn player_index(player: Player) -> usize {
    match player {
        Player::A => 0,
        Player::B => 1,
    }
}
