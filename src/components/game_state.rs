// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// スタックを並べたりカードを配ったりしてる最中。履歴は記録しない。
    Setup,
    /// ゲームが進行中。
    Playing,
    /// 勝利！🏆
    Won,
}

impl GameStatus {
    pub fn is_won(&self) -> bool {
        matches!(self, GameStatus::Won)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Setup
    }
}
