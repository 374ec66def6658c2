// src/logic/mod.rs
//! ゲームのルールや判断ロジックをまとめるモジュールだよ！🧠
//! World の中身は変えない、読むだけの関数たち。

pub mod auto_move;
pub mod deck;
pub mod rules;
pub mod ruleset;
pub mod stack_selection;
