// src/app/mod.rs
//! JS 側 (レンダラー) とエンジンをつなぐ部分を役割ごとに分けて置くモジュールだよ！

pub mod game_app;
pub mod logger;
pub mod state_getter;
