// src/logic/rules/mod.rs
//! フリーセルのルール関連モジュールをまとめるよ！

pub mod common;
pub mod foundation;
pub mod free_cell;
pub mod move_validation;
pub mod sequence;
pub mod tableau;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::CardColor;
pub use foundation::{can_drop_on_foundation, foundation_accepts};
pub use free_cell::can_drop_on_free_cell;
pub use move_validation::can_drop;
pub use sequence::{can_drag, is_valid_run};
pub use tableau::{can_drop_on_tableau, max_movable_cards};
pub use win_condition::check_win_condition;
