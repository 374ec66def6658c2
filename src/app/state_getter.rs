//! エンジンの状態やイベントを JSON 文字列にして JS 側に渡すよ。

use log::error;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::engine::{Engine, EngineEvent};

fn to_json<T: Serialize>(value: &T, what: &str) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| {
        let error_msg = format!("Failed to serialize {}: {}", what, e);
        error!("{}", error_msg);
        JsValue::from_str(&error_msg)
    })
}

/// ゲーム全体のスナップショットを JSON にする。
pub fn get_state_json(engine: &Engine) -> Result<String, JsValue> {
    to_json(&engine.snapshot(), "game state")
}

/// イベントの列を JSON 配列にする。
pub fn events_json(events: &[EngineEvent]) -> Result<String, JsValue> {
    to_json(&events, "events")
}

/// イベント1つぶん。リスナーに1つずつ渡す時に使う。
pub fn event_json(event: &EngineEvent) -> Result<String, JsValue> {
    to_json(event, "event")
}
