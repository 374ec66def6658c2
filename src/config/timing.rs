// src/config/timing.rs
//! アニメーションの時間に関する定数だよ (単位はミリ秒)。

/// クリックで動かした時のゆっくりスライド。
pub const SLOW_SLIDE_MILLIS: u32 = 300;
/// 自動移動や連鎖移動の速いスライド。
pub const FAST_SLIDE_MILLIS: u32 = 150;
/// 着地してから次の移動を始めるまでの待ち時間。
pub const SETTLE_DELAY_MILLIS: u32 = 50;
