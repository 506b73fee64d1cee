use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::MorrisConfig;
use crate::event_log::MemoryLog;
use crate::game::{GameInstance, Intent, Response, Screen};
use crate::motion::FrameClock;
use crate::types::Point;

/// Result of an intent as seen by the JS host.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentResult {
    Ignored = 0,
    Accepted = 1,
    Quit = 2,
}

impl From<Response> for IntentResult {
    fn from(response: Response) -> Self {
        match response {
            Response::Ignored => Self::Ignored,
            Response::Accepted => Self::Accepted,
            Response::Quit => Self::Quit,
        }
    }
}

/// Game handle owned by the presentation layer.
#[wasm_bindgen]
pub struct MorrisGame {
    game: GameInstance,
    log: Rc<RefCell<MemoryLog>>,
    clock: FrameClock,
}

#[wasm_bindgen]
impl MorrisGame {
    /// `config` may be `undefined`, `null`, or a partial `MorrisConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<MorrisGame, JsValue> {
        let config: MorrisConfig = if config.is_undefined() || config.is_null() {
            MorrisConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(to_js_error)?
        };

        let log = Rc::new(RefCell::new(MemoryLog::new()));
        let game = GameInstance::new(config, Box::new(Rc::clone(&log))).map_err(to_js_error)?;

        Ok(Self {
            game,
            log,
            clock: FrameClock::new(),
        })
    }

    pub fn begin_game(&mut self) -> IntentResult {
        self.game.apply(Intent::BeginGame).into()
    }

    /// `screen` is one of `"start"`, `"instructions"`, `"about"`.
    pub fn navigate(&mut self, screen: &str) -> IntentResult {
        let screen = match screen {
            "start" => Screen::Start,
            "instructions" => Screen::Instructions,
            "about" => Screen::About,
            _ => return IntentResult::Ignored,
        };
        self.game.apply(Intent::NavigateTo(screen)).into()
    }

    pub fn reset(&mut self) -> IntentResult {
        self.game.apply(Intent::Reset).into()
    }

    pub fn exit(&mut self) -> IntentResult {
        self.game.apply(Intent::Exit).into()
    }

    pub fn close(&mut self) -> IntentResult {
        self.game.apply(Intent::Close).into()
    }

    pub fn place_at(&mut self, x: f32, y: f32) -> IntentResult {
        self.game.apply(Intent::PlaceAt(Point::new(x, y))).into()
    }

    pub fn select_at(&mut self, x: f32, y: f32) -> IntentResult {
        self.game.apply(Intent::SelectAt(Point::new(x, y))).into()
    }

    pub fn move_selected_to(&mut self, x: f32, y: f32) -> IntentResult {
        self.game
            .apply(Intent::MoveSelectedTo(Point::new(x, y)))
            .into()
    }

    pub fn click(&mut self, x: f32, y: f32) -> IntentResult {
        self.game.apply(Intent::Click(Point::new(x, y))).into()
    }

    /// Advances slides by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.game.tick(dt);
    }

    /// Advances slides by the time elapsed since the previous call.
    /// Returns the delta that was applied.
    pub fn tick_from_clock(&mut self) -> f32 {
        let dt = self.clock.restart();
        self.game.tick(dt);
        dt
    }

    /// Snapshot for rendering; see `GameState`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.game.to_game_state()).map_err(to_js_error)
    }

    /// Returns log lines recorded since the previous call, oldest first.
    pub fn drain_log(&mut self) -> Vec<String> {
        self.log.borrow_mut().drain()
    }

    /// Call when a required image fails to load. Always returns an error the
    /// host should treat as fatal.
    pub fn asset_load_failed(&mut self, name: &str) -> Result<(), JsValue> {
        Err(to_js_error(self.game.report_asset_failure(name)))
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
