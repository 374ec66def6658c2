// src/components/stack.rs

use serde::{Deserialize, Serialize};

use super::card::CardId;
use super::position::Position;

/// スタックの役割だよ。名前の頭文字から推測するんじゃなくて、作る時に明示するよ！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StackRole {
    /// フリーセル (1枚だけ置ける一時置き場)。
    FreeCell,
    /// 組札 (Foundation)。スートごとに A から K まで積む。
    Foundation,
    /// 場札 (Tableau) の列。
    Tableau,
}

/// カードの山 (スタック) だよ。
///
/// `cards` はカード ID の並びで、0 番目が一番下、最後が一番上！
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub name: String,
    pub role: StackRole,
    pub cards: Vec<CardId>,
    /// 画面上のアンカー座標 (スライドの到着点)。
    pub position: Position,
    /// true ならカードを縦にずらして広げて表示する。
    pub spread: bool,
}

impl Stack {
    /// 空のスタックを作るよ。
    pub fn new(name: impl Into<String>, role: StackRole) -> Self {
        Self {
            name: name.into(),
            role,
            cards: Vec::new(),
            position: Position::default(),
            spread: false,
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn spread(mut self, spread: bool) -> Self {
        self.spread = spread;
        self
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード ID。
    pub fn top(&self) -> Option<&CardId> {
        self.cards.last()
    }

    /// スタック内でのカードの位置 (下から何番目か)。
    pub fn index_of(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|id| id == card_id)
    }
}
