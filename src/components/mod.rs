// src/components/mod.rs

// ゲームの状態を作るデータ型たち！
pub mod card;
pub mod game_state;
pub mod position;
pub mod stack;

pub use card::{Card, CardColor, CardId, Rank, Suit};
pub use game_state::GameStatus;
pub use position::Position;
pub use stack::{Stack, StackRole};
