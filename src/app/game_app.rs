// src/app/game_app.rs

// --- 必要なものをインポート ---
use js_sys::{Array, Error, Function};
use log::{error, info, warn};
use wasm_bindgen::prelude::*;

use crate::app::state_getter;
use crate::components::card::CardId;
use crate::components::position::Position;
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::MoveError;

fn js_error(message: &str) -> JsValue {
    Error::new(message).into()
}

fn move_error(err: MoveError) -> JsValue {
    js_error(&err.to_string())
}

// --- JS から使うゲーム本体 ---
/// レンダラーは入力やアニメーション終了の合図をここに送って、
/// `get_state_json` / `drain_events_json` で結果を受け取るよ。
#[wasm_bindgen]
pub struct GameApp {
    engine: Engine,
}

#[wasm_bindgen]
impl GameApp {
    /// `config_json` を省略するとデフォルト設定。まだ配ってはいないので `new_game` を呼んでね。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameApp, JsValue> {
        info!("GameApp: 初期化中...");
        let config = match config_json {
            Some(json) => EngineConfig::from_json(&json).map_err(|e| {
                let error_msg = format!("Invalid engine config: {}", e);
                error!("{}", error_msg);
                js_error(&error_msg)
            })?,
            None => EngineConfig::default(),
        };
        let engine = Engine::freecell(config).map_err(move_error)?;
        info!("GameApp: 初期化完了。");
        Ok(GameApp { engine })
    }

    /// カードを配って新しいゲームを始める。
    pub fn new_game(&mut self, seed: Option<u32>) -> Result<(), JsValue> {
        let seed = seed.map(u64::from);
        let result = if self.engine.setup_has_run() {
            self.engine.new_game(seed)
        } else {
            self.engine.deal_new_game(seed)
        };
        result.map_err(move_error)
    }

    /// ドラッグ開始。置けるスタック名の配列を返す (空ならドラッグ不可)。
    pub fn attempt_drag(&self, card_id: &str) -> Array {
        self.engine
            .attempt_drag(&CardId::from(card_id))
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// 持ち上げられるかだけを返す (置ける場所が無くても true)。
    pub fn can_drag(&self, card_id: &str) -> bool {
        self.engine.can_drag(&CardId::from(card_id))
    }

    pub fn attempt_drop(&self, card_id: &str, stack_name: &str) -> bool {
        self.engine.attempt_drop(&CardId::from(card_id), stack_name)
    }

    pub fn drop_card(&mut self, card_id: &str, stack_name: &str) -> bool {
        self.engine.drop_card(&CardId::from(card_id), stack_name)
    }

    /// ルールを通さずに移動を確定する。成功したら移動の記録 (JSON) を返す。
    pub fn commit_move(&mut self, card_ids: Vec<String>, stack_name: &str) -> Result<String, JsValue> {
        let cards: Vec<CardId> = card_ids.into_iter().map(CardId::from).collect();
        let mv = self.engine.commit_move(&cards, stack_name).map_err(|e| {
            warn!("GameApp: commit_move failed: {}", e);
            move_error(e)
        })?;
        serde_json::to_string(&mv).map_err(|e| js_error(&e.to_string()))
    }

    pub fn click_move(&mut self, card_id: &str) -> bool {
        self.engine.click_move(&CardId::from(card_id))
    }

    pub fn undo(&mut self) -> bool {
        self.engine.undo()
    }

    /// 配り終わった直後の並びからやり直す。
    pub fn reset(&mut self) -> bool {
        self.engine.reset_to_initial_layout()
    }

    /// スライドの transitionend で呼んでね。
    pub fn on_slide_settled(&mut self) -> bool {
        self.engine.on_slide_settled()
    }

    /// `settle_delay_ms` だけ待ってから呼んでね。
    pub fn on_settle_elapsed(&mut self) -> bool {
        self.engine.on_settle_elapsed()
    }

    pub fn record_position(&mut self, card_id: &str, x: f32, y: f32) -> bool {
        self.engine.record_position(&CardId::from(card_id), Position::new(x, y))
    }

    pub fn set_dragging(&mut self, card_id: &str, dragging: bool) -> bool {
        self.engine.set_dragging(&CardId::from(card_id), dragging)
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    pub fn is_win(&self) -> bool {
        self.engine.is_win()
    }

    pub fn settle_delay_ms(&self) -> u32 {
        self.engine.settle_delay_ms()
    }

    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_state_json(&self.engine)
    }

    /// たまったイベントを JSON 配列で取り出す。
    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        let events = self.engine.drain_events();
        state_getter::events_json(&events)
    }

    /// イベントが起きるたびに `callback(eventJson)` を呼ぶ。
    /// コールバックの中から GameApp を触るのはダメ (処理が終わってから)。
    pub fn add_event_listener(&mut self, callback: Function) {
        self.engine.add_observer(move |event| {
            let json = match state_getter::event_json(event) {
                Ok(json) => json,
                Err(e) => {
                    error!("GameApp: could not serialize event {:?}: {:?}", event, e);
                    return;
                }
            };
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                error!("GameApp: event listener threw: {:?}", e);
            }
        });
    }
}
