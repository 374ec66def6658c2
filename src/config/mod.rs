// src/config/mod.rs
//! エンジンの設定まわりをまとめるモジュールだよ！⚙️
//!
//! 定数は `layout` と `timing` に置いて、実行時に変えたいものだけ
//! `EngineConfig` に入れる。JS 側から JSON で渡してもらえる。

pub mod layout;
pub mod timing;

use serde::{Deserialize, Serialize};

/// 並んだ束をどうやって動かすか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SequenceMode {
    /// 束まるごとで1手。
    #[default]
    Atomic,
    /// 先頭の1枚だけ動かして、残りは1枚ずつ連鎖で追いかける。
    CardByCard,
}

/// 実行時に変えられるエンジン設定。足りない項目はデフォルト値で埋まるよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub sequence_mode: SequenceMode,
    /// 着地後、次の移動 (連鎖・自動移動) を始めるまでの待ち時間。
    pub settle_delay_ms: u32,
    pub slow_slide_ms: u32,
    pub fast_slide_ms: u32,
    /// 広げた列でカード1枚ごとにずらす量。
    pub spread_factor: f32,
    /// 着地のたびに組札への自動移動を探すかどうか。
    pub auto_move: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sequence_mode: SequenceMode::Atomic,
            settle_delay_ms: timing::SETTLE_DELAY_MILLIS,
            slow_slide_ms: timing::SLOW_SLIDE_MILLIS,
            fast_slide_ms: timing::FAST_SLIDE_MILLIS,
            spread_factor: layout::SPREAD_FACTOR,
            auto_move: true,
        }
    }
}

impl EngineConfig {
    /// JSON 文字列から設定を読み込むよ。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
