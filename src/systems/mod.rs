// src/systems/mod.rs
//! World の中身を実際に書き換える処理をまとめるモジュールだよ！

pub mod animation;
pub mod move_executor;
pub mod undo;
