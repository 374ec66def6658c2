// src/systems/animation.rs
//! スライドアニメーションの状態を管理するよ！🎞️
//!
//! 状態は3つだけ:
//! - `Idle`: 何も動いてない
//! - `Sliding`: カードが飛んでる途中。カードは取り外し済みで、どのスタックにもいない
//! - `Settling`: 着地した直後。次の移動を始める前のちょっとした待ち時間
//!
//! 状態を進めるのはレンダラーからの合図 (スライド終了 / 待ち時間終了) だけ。
//! 間違った状態で届いた合図は無視して `false` を返す。

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::position::Position;
use crate::config::EngineConfig;
use crate::systems::move_executor::Move;
use crate::world::World;

/// スライドの速さ。違うのは時間だけ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideType {
    /// ユーザーのクリック移動。
    Slow,
    /// 自動移動や連鎖移動。
    Fast,
}

/// 飛んでる途中のカードたちの情報。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideState {
    pub cards: Vec<CardId>,
    pub from_stack: String,
    pub to_stack: String,
    pub slide_type: SlideType,
    /// 出発点 (先頭カードの最後の観測位置)。
    pub from: Position,
    /// 到着点 (移動先のアンカー、広げた列ならずらした位置)。
    pub to: Position,
    /// レンダラーが translate に使う移動量。
    pub delta: Position,
    pub duration_ms: u32,
    /// 着地したら取り付ける移動。
    #[serde(skip)]
    pub pending: Move,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Sliding(SlideState),
    Settling,
}

/// アニメーションの状態機械だよ。
#[derive(Debug, Default)]
pub struct AnimationCoordinator {
    phase: AnimationPhase,
}

impl AnimationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &AnimationPhase {
        &self.phase
    }

    /// スライド中か着地待ちなら true。この間はドラッグもアンドゥも受け付けない。
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, AnimationPhase::Idle)
    }

    pub fn sliding(&self) -> Option<&SlideState> {
        match &self.phase {
            AnimationPhase::Sliding(state) => Some(state),
            _ => None,
        }
    }

    /// スライド開始。Idle か Settling (続きの移動) からだけ。
    pub fn begin_slide(&mut self, state: SlideState) -> bool {
        match self.phase {
            AnimationPhase::Idle | AnimationPhase::Settling => {
                debug!("Animation: {:?} slide of {:?} -> {}", state.slide_type, state.cards, state.to_stack);
                self.phase = AnimationPhase::Sliding(state);
                true
            }
            AnimationPhase::Sliding(_) => {
                warn!("Animation: a slide is already running, ignoring new slide");
                false
            }
        }
    }

    /// スライド終了の合図。Sliding → Settling にして、飛んでたカードの情報を返す。
    pub fn finish_slide(&mut self) -> Option<SlideState> {
        match std::mem::take(&mut self.phase) {
            AnimationPhase::Sliding(state) => {
                self.phase = AnimationPhase::Settling;
                Some(state)
            }
            other => {
                debug!("Animation: slide-end signal ignored in {:?}", other);
                self.phase = other;
                None
            }
        }
    }

    /// スライドなしの移動 (ドロップ) の後、すぐ着地待ちに入る。
    pub fn begin_settle(&mut self) -> bool {
        match self.phase {
            AnimationPhase::Idle => {
                self.phase = AnimationPhase::Settling;
                true
            }
            _ => false,
        }
    }

    /// 待ち時間終了。Settling → Idle。
    pub fn finish_settle(&mut self) -> bool {
        match self.phase {
            AnimationPhase::Settling => {
                self.phase = AnimationPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.phase = AnimationPhase::Idle;
    }
}

/// 取り外し済みの移動 `mv` から、スライドの出発点と到着点を計算するよ。
///
/// 出発点はカードの最後の観測位置。まだ一度も描かれてないカードなら、
/// 移動元スタックのアンカー (広げた列ならずらした位置) を使う。
pub fn plan_slide(world: &World, mv: Move, slide_type: SlideType, config: &EngineConfig) -> SlideState {
    let source = world.expect_stack(&mv.from_stack);
    let destination = world.expect_stack(&mv.to_stack);

    let spread_offset = |spread: bool, index: usize| {
        if spread {
            index as f32 * config.spread_factor
        } else {
            0.0
        }
    };

    let from = mv
        .cards
        .first()
        .and_then(|id| world.card(id))
        .and_then(|card| card.position)
        .unwrap_or_else(|| source.position.offset(0.0, spread_offset(source.spread, mv.from_index)));
    let to = destination.position.offset(0.0, spread_offset(destination.spread, mv.to_index));

    let duration_ms = match slide_type {
        SlideType::Slow => config.slow_slide_ms,
        SlideType::Fast => config.fast_slide_ms,
    };

    SlideState {
        cards: mv.cards.clone(),
        from_stack: mv.from_stack.clone(),
        to_stack: mv.to_stack.clone(),
        slide_type,
        from,
        to,
        delta: from.delta_to(to),
        duration_ms,
        pending: mv,
    }
}
