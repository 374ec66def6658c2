// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod logic;
pub mod systems;
pub mod world;

// よく使う型はクレートのトップからも使えるようにしておく
pub use app::game_app::GameApp;
pub use config::{EngineConfig, SequenceMode};
pub use engine::{Engine, EngineEvent, GameSnapshot};
pub use error::MoveError;
pub use logic::ruleset::{FreeCellRules, Ruleset};
pub use systems::move_executor::Move;
pub use world::World;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::logger::init_logger(log::LevelFilter::Info);
    log::info!("Panic hook and console logger set!");
}
