// src/components/position.rs

use serde::{Deserialize, Serialize};

/// 2D空間での位置 (x, y) だよ。📍
///
/// カードの最終観測位置や、スタックの画面上のアンカーとして使う。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// (dx, dy) だけずらした位置を返す。
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// `self` から `target` までの移動量。スライドの translate に使う。
    pub fn delta_to(self, target: Position) -> Position {
        Position {
            x: target.x - self.x,
            y: target.y - self.y,
        }
    }
}
