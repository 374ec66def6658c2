// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! スタックのアンカー座標や、広げたカードのずらし幅など。

/// 広げて表示する列で、カード1枚ごとに下へずらす量 (px)。
pub const SPREAD_FACTOR: f32 = 45.0;

// --- 各エリアの開始位置 ---
pub const FREE_CELL_START_X: f32 = 20.0; // フリーセルの開始X座標
pub const FREE_CELL_START_Y: f32 = 20.0; // フリーセルのY座標
pub const FREE_CELL_X_OFFSET: f32 = 120.0; // フリーセル間のX方向の間隔

pub const FOUNDATION_START_X: f32 = 540.0; // 組札 (Foundation) の開始X座標
pub const FOUNDATION_START_Y: f32 = 20.0; // 組札のY座標
pub const FOUNDATION_X_OFFSET: f32 = 120.0; // 組札間のX方向の間隔

pub const TABLEAU_START_X: f32 = 20.0; // 場札 (Tableau) の開始X座標
pub const TABLEAU_START_Y: f32 = 200.0; // 場札の開始Y座標
pub const TABLEAU_X_OFFSET: f32 = 130.0; // 場札の列間のX方向の間隔
