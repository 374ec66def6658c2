// src/engine.rs
//! ゲーム全体の進行役、`Engine` だよ！🎮
//!
//! World・履歴・アニメーション・連鎖移動のキュー・イベントのキューを全部ここで持つ。
//! 入力 (ドラッグ / ドロップ / クリック / アンドゥ) はまずルールで判定して、
//! 通ったらアニメーションを通して World に反映する。
//!
//! ```text
//! 入力 → ルール判定 → スライド (Sliding) → 取り付け・履歴・勝利判定
//!      → 着地待ち (Settling) → 連鎖移動 or 自動移動 or Idle
//! ```

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::components::card::{Card, CardId};
use crate::components::game_state::GameStatus;
use crate::components::position::Position;
use crate::components::stack::Stack;
use crate::config::{EngineConfig, SequenceMode};
use crate::error::MoveError;
use crate::logic::ruleset::{FreeCellRules, Ruleset};
use crate::logic::stack_selection;
use crate::systems::animation::{plan_slide, AnimationCoordinator, AnimationPhase, SlideType};
use crate::systems::move_executor::{self, Move};
use crate::systems::undo;
use crate::world::World;

/// エンジンから外 (レンダラー) に知らせる出来事。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EngineEvent {
    #[serde(rename_all = "camelCase")]
    SlideStarted {
        cards: Vec<CardId>,
        from_stack: String,
        to_stack: String,
        slide_type: SlideType,
        delta: Position,
        duration_ms: u32,
    },
    #[serde(rename_all = "camelCase")]
    SlideEnded { cards: Vec<CardId>, to_stack: String },
    MoveCommitted(Move),
    MoveSettled,
    Undone { moves: Vec<Move> },
    Won,
    Reset,
}

/// 移動をどこから頼まれたか。連鎖移動をキューに積むかどうかが変わる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveOrigin {
    Setup,
    User,
    Cascade,
    Auto,
}

/// 連鎖移動のキューに積む1枚ぶんの移動。
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingMove {
    card: CardId,
    to_stack: String,
}

/// JS 側に渡すゲーム全体のスナップショット。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub stacks: Vec<Stack>,
    pub cards: Vec<Card>,
    pub history: Vec<Move>,
    pub animating: bool,
    pub sliding_cards: Vec<Card>,
    pub sliding_to_stack: Option<String>,
    pub slide_type: Option<SlideType>,
    pub slide_delta: Option<Position>,
    pub slide_duration_ms: Option<u32>,
}

type Observer = Box<dyn FnMut(&EngineEvent)>;

pub struct Engine {
    world: World,
    rules: Box<dyn Ruleset>,
    config: EngineConfig,
    status: GameStatus,
    history: Vec<Move>,
    animation: AnimationCoordinator,
    cascade: VecDeque<PendingMove>,
    events: VecDeque<EngineEvent>,
    observers: Vec<Observer>,
    setup_has_run: bool,
    /// 配る前の並び (新しいゲーム用)。
    initial_layout: Option<Vec<Stack>>,
    /// 配り終わった直後の並び (やり直し用)。
    dealt_layout: Option<Vec<Stack>>,
}

impl Engine {
    /// 空っぽの World でエンジンを作るよ。スタックは `add_stack` で足していく。
    pub fn new(rules: Box<dyn Ruleset>, config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            rules,
            config,
            status: GameStatus::Setup,
            history: Vec::new(),
            animation: AnimationCoordinator::new(),
            cascade: VecDeque::new(),
            events: VecDeque::new(),
            observers: Vec::new(),
            setup_has_run: false,
            initial_layout: None,
            dealt_layout: None,
        }
    }

    /// ルールが決めたレイアウトを全部登録したエンジンを作る。まだ配ってはいない。
    pub fn with_layout(rules: Box<dyn Ruleset>, config: EngineConfig) -> Result<Self, MoveError> {
        let mut engine = Self::new(rules, config);
        for (stack, cards) in engine.rules.layout() {
            engine.add_stack(stack, cards)?;
        }
        Ok(engine)
    }

    /// フリーセルのレイアウトで作るよ。
    pub fn freecell(config: EngineConfig) -> Result<Self, MoveError> {
        Self::with_layout(Box::new(FreeCellRules), config)
    }

    // --- セットアップ ---

    pub fn add_stack(&mut self, stack: Stack, initial_cards: Vec<Card>) -> Result<(), MoveError> {
        if self.setup_has_run {
            return Err(MoveError::SetupAlreadyRun);
        }
        self.world.add_stack(stack, initial_cards)
    }

    /// セットアップ中の移動はその場で反映して、履歴には残さない。
    fn setup_move(&mut self, cards: &[CardId], to_stack: &str) -> Result<Move, MoveError> {
        self.execute(cards, to_stack, MoveOrigin::Setup, None)
    }

    /// セットアップ完了！ここから先の移動は履歴に残るよ。
    pub fn finish_setup(&mut self) -> Result<(), MoveError> {
        if self.setup_has_run {
            return Err(MoveError::SetupAlreadyRun);
        }
        self.setup_has_run = true;
        self.dealt_layout = Some(self.world.stack_layout());
        self.status = if self.rules.is_win(&self.world) { GameStatus::Won } else { GameStatus::Playing };
        info!("Engine: setup finished, {} stacks, {} cards", self.world.stacks().len(), self.world.card_count());
        Ok(())
    }

    /// カードを配ってゲーム開始。`seed` を渡すと同じ配り方を再現できる。
    pub fn deal_new_game(&mut self, seed: Option<u64>) -> Result<(), MoveError> {
        if self.setup_has_run {
            return Err(MoveError::SetupAlreadyRun);
        }
        if self.initial_layout.is_none() {
            self.initial_layout = Some(self.world.stack_layout());
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let plan = self.rules.deal(&self.world, &mut rng);
        info!("Engine: dealing {} cards (seed {:?})", plan.len(), seed);
        for (card, to_stack) in plan {
            self.setup_move(&[card], &to_stack)?;
        }
        self.finish_setup()
    }

    /// 配る前の並びに戻して、配り直す。
    /// `add_stack` + `finish_setup` で手で並べた盤面には配る前の並びが無いので `NotDealt`。
    pub fn new_game(&mut self, seed: Option<u64>) -> Result<(), MoveError> {
        if self.setup_has_run && self.initial_layout.is_none() {
            warn!("Engine: new_game needs a dealt board, this one was set up by hand");
            return Err(MoveError::NotDealt);
        }
        self.interrupt();
        if let Some(layout) = &self.initial_layout {
            self.world.restore_layout(layout);
        }
        self.history.clear();
        self.setup_has_run = false;
        self.status = GameStatus::Setup;
        self.deal_new_game(seed)?;
        self.emit(EngineEvent::Reset);
        Ok(())
    }

    /// 配り終わった直後の並びに戻す (同じゲームをやり直す)。
    pub fn reset_to_initial_layout(&mut self) -> bool {
        let layout = match &self.dealt_layout {
            Some(layout) => layout.clone(),
            None => {
                warn!("Engine: nothing to reset, setup has not run");
                return false;
            }
        };
        self.interrupt();
        self.world.restore_layout(&layout);
        self.history.clear();
        self.status = if self.rules.is_win(&self.world) { GameStatus::Won } else { GameStatus::Playing };
        info!("Engine: reset to the dealt layout");
        self.emit(EngineEvent::Reset);
        true
    }

    /// 動いてるアニメーションと連鎖移動を止める。
    fn interrupt(&mut self) {
        self.animation.reset();
        self.cascade.clear();
    }

    // --- 入力 ---

    fn accepts_input(&self) -> bool {
        self.setup_has_run && !self.animation.is_animating()
    }

    /// カードを置けるスタックの名前を、登録順で全部返すよ。
    pub fn legal_destinations(&self, card_id: &CardId) -> Vec<String> {
        let own_stack = match self.world.find_stack(card_id) {
            Some((stack, _)) => stack.name.as_str(),
            None => return Vec::new(),
        };
        self.world
            .stacks()
            .iter()
            .filter(|stack| stack.name != own_stack)
            .filter(|stack| self.rules.can_drop(&self.world, &stack.name, card_id))
            .map(|stack| stack.name.clone())
            .collect()
    }

    /// ドラッグ開始の判定。持てるなら置ける場所の一覧、持てないなら空っぽ。
    ///
    /// 持てるけど置ける場所が1つも無い時も空っぽになる。
    /// 持ち上げられるかだけ知りたいなら `can_drag` を使ってね。
    pub fn attempt_drag(&self, card_id: &CardId) -> Vec<String> {
        if !self.can_drag(card_id) {
            debug!("Engine: {} cannot be dragged", card_id);
            return Vec::new();
        }
        self.legal_destinations(card_id)
    }

    /// カードを持ち上げられるか (置ける場所があるかは見ない)。
    pub fn can_drag(&self, card_id: &CardId) -> bool {
        self.accepts_input() && !self.status.is_won() && self.rules.can_drag(&self.world, card_id)
    }

    /// ドロップしていいか判定するだけ。World は変えない。
    pub fn attempt_drop(&self, card_id: &CardId, target_stack: &str) -> bool {
        if !self.accepts_input() || self.status.is_won() {
            return false;
        }
        match self.world.find_stack(card_id) {
            Some((stack, _)) if stack.name == target_stack => false,
            Some(_) => self.rules.can_drop(&self.world, target_stack, card_id),
            None => false,
        }
    }

    /// ドロップを確定する。通ればすぐ World に反映して、着地待ちに入るよ。
    pub fn drop_card(&mut self, card_id: &CardId, target_stack: &str) -> bool {
        if !self.attempt_drop(card_id, target_stack) {
            self.set_dragging(card_id, false);
            return false;
        }
        let cards = match self.moving_unit(card_id) {
            Some(cards) => cards,
            None => return false,
        };
        match self.execute(&cards, target_stack, MoveOrigin::User, None) {
            Ok(_) => true,
            Err(err) => {
                warn!("Engine: drop of {} on {} failed: {}", card_id, target_stack, err);
                false
            }
        }
    }

    /// ルールを通さずに移動を確定する。
    ///
    /// セットアップ前ならその場で反映して履歴には残さない。
    /// セットアップ後は履歴に残して、着地待ちに入る。アニメーション中はエラー。
    pub fn commit_move(&mut self, cards: &[CardId], to_stack: &str) -> Result<Move, MoveError> {
        if !self.setup_has_run {
            return self.setup_move(cards, to_stack);
        }
        if self.animation.is_animating() {
            return Err(MoveError::Animating);
        }
        self.execute(cards, to_stack, MoveOrigin::User, None)
    }

    /// クリックしたカードを、一番よさそうな場所へゆっくりスライドさせるよ。
    pub fn click_move(&mut self, card_id: &CardId) -> bool {
        if !self.accepts_input() || self.status.is_won() {
            return false;
        }
        if !self.rules.can_drag(&self.world, card_id) {
            return false;
        }

        let candidates: Vec<&Stack> = self
            .legal_destinations(card_id)
            .iter()
            .filter_map(|name| self.world.stack(name))
            .collect();
        let rules = &self.rules;
        let to_stack = match stack_selection::select_destination(candidates, |a, b| rules.compare_move_stacks(a, b)) {
            Some(stack) => stack.name.clone(),
            None => {
                debug!("Engine: no destination for {}", card_id);
                return false;
            }
        };

        let cards = match self.moving_unit(card_id) {
            Some(cards) => cards,
            None => return false,
        };
        match self.execute(&cards, &to_stack, MoveOrigin::User, Some(SlideType::Slow)) {
            Ok(_) => true,
            Err(err) => {
                warn!("Engine: click move of {} failed: {}", card_id, err);
                false
            }
        }
    }

    /// 1手戻す。連鎖の途中の手なら、ルールが止めるまで続けて戻すよ。
    pub fn undo(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let mut moves = Vec::new();
        match undo::undo_last(&mut self.world, &mut self.history) {
            Some(mv) => moves.push(mv),
            None => return false,
        }
        while self.rules.should_cascade_undo(&self.history) {
            match undo::undo_last(&mut self.world, &mut self.history) {
                Some(mv) => moves.push(mv),
                None => break,
            }
        }

        self.status = if self.rules.is_win(&self.world) { GameStatus::Won } else { GameStatus::Playing };
        info!("Engine: undid {} move(s), {} left in history", moves.len(), self.history.len());
        self.emit(EngineEvent::Undone { moves });
        true
    }

    // --- アニメーションの合図 ---

    /// レンダラーから「スライドが終わったよ」の合図。ここでやっと移動先に取り付ける。
    pub fn on_slide_settled(&mut self) -> bool {
        let slide = match self.animation.finish_slide() {
            Some(slide) => slide,
            None => return false,
        };
        move_executor::attach_cards(&mut self.world, &slide.pending);
        self.emit(EngineEvent::SlideEnded {
            cards: slide.cards.clone(),
            to_stack: slide.to_stack.clone(),
        });
        self.record(slide.pending);
        true
    }

    /// 着地待ちの時間が過ぎたよ、の合図。次の連鎖移動か自動移動を始める。
    pub fn on_settle_elapsed(&mut self) -> bool {
        if !matches!(self.animation.phase(), AnimationPhase::Settling) {
            return false;
        }

        if !self.status.is_won() {
            while let Some(next) = self.cascade.pop_front() {
                match self.execute(&[next.card.clone()], &next.to_stack, MoveOrigin::Cascade, Some(SlideType::Fast)) {
                    Ok(_) => return true,
                    Err(err) => warn!("Engine: cascade move of {} dropped: {}", next.card, err),
                }
            }

            if self.config.auto_move {
                if let Some(auto) = self.rules.find_auto_move(&self.world) {
                    match self.execute(&[auto.card.clone()], &auto.to_stack, MoveOrigin::Auto, Some(SlideType::Fast)) {
                        Ok(_) => return true,
                        Err(err) => warn!("Engine: auto move of {} failed: {}", auto.card, err),
                    }
                }
            }
        }

        self.cascade.clear();
        self.animation.finish_settle();
        self.emit(EngineEvent::MoveSettled);
        true
    }

    // --- カードのフラグ ---

    /// カードの画面上の位置を覚えておく (次のスライドの出発点)。
    pub fn record_position(&mut self, card_id: &CardId, position: Position) -> bool {
        match self.world.card_mut(card_id) {
            Some(card) => {
                card.position = Some(position);
                true
            }
            None => false,
        }
    }

    /// ドラッグ中フラグを付け外しする。束の途中なら上のカードもまとめて。
    pub fn set_dragging(&mut self, card_id: &CardId, dragging: bool) -> bool {
        let ids: Vec<CardId> = match self.world.find_stack(card_id) {
            Some((stack, index)) if self.rules.drags_multiple() => stack.cards[index..].to_vec(),
            Some(_) => vec![card_id.clone()],
            None => return false,
        };
        for id in &ids {
            if let Some(card) = self.world.card_mut(id) {
                card.is_dragging = dragging;
            }
        }
        true
    }

    // --- 読み取り ---

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_win(&self) -> bool {
        self.status.is_won()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn setup_has_run(&self) -> bool {
        self.setup_has_run
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn animation_phase(&self) -> &AnimationPhase {
        self.animation.phase()
    }

    /// 飛んでる途中のカード本体。
    pub fn sliding_cards(&self) -> Vec<&Card> {
        self.animation
            .sliding()
            .map(|slide| slide.cards.iter().filter_map(|id| self.world.card(id)).collect())
            .unwrap_or_default()
    }

    pub fn sliding_to_stack(&self) -> Option<&str> {
        self.animation.sliding().map(|slide| slide.to_stack.as_str())
    }

    pub fn settle_delay_ms(&self) -> u32 {
        self.config.settle_delay_ms
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut cards: Vec<Card> = self.world.cards().cloned().collect();
        cards.sort_by(|a, b| a.id.cmp(&b.id));
        let slide = self.animation.sliding();

        GameSnapshot {
            status: self.status,
            stacks: self.world.stack_layout(),
            cards,
            history: self.history.clone(),
            animating: self.is_animating(),
            sliding_cards: self.sliding_cards().into_iter().cloned().collect(),
            sliding_to_stack: slide.map(|slide| slide.to_stack.clone()),
            slide_type: slide.map(|slide| slide.slide_type),
            slide_delta: slide.map(|slide| slide.delta),
            slide_duration_ms: slide.map(|slide| slide.duration_ms),
        }
    }

    // --- イベント ---

    /// たまったイベントを全部取り出す。
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    /// イベントが起きるたびに呼ばれるコールバックを登録する。
    pub fn add_observer(&mut self, observer: impl FnMut(&EngineEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: EngineEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
        self.events.push_back(event);
    }

    // --- 内部処理 ---

    /// `card_id` と一緒に動くカード。Atomic なら上まで全部、CardByCard なら1枚だけ。
    fn moving_unit(&self, card_id: &CardId) -> Option<Vec<CardId>> {
        let (stack, index) = self.world.find_stack(card_id)?;
        Some(match self.config.sequence_mode {
            SequenceMode::Atomic => stack.cards[index..].to_vec(),
            SequenceMode::CardByCard => vec![card_id.clone()],
        })
    }

    /// 移動の本体。取り外して、スライドありなら飛ばし始め、なしならすぐ取り付ける。
    fn execute(
        &mut self,
        cards: &[CardId],
        to_stack: &str,
        origin: MoveOrigin,
        slide: Option<SlideType>,
    ) -> Result<Move, MoveError> {
        let mv = move_executor::detach_cards(&mut self.world, cards, to_stack)?;

        if origin == MoveOrigin::Setup {
            move_executor::attach_cards(&mut self.world, &mv);
            return Ok(mv);
        }

        // 束の途中から動かしたなら、残りを1枚ずつ追いかけさせる
        if !mv.from_top && origin != MoveOrigin::Cascade {
            let remaining = self.world.expect_stack(&mv.from_stack).cards[mv.from_index..].to_vec();
            debug!("Engine: queueing {} cascade move(s) to {}", remaining.len(), mv.to_stack);
            // 順番待ちの間は元の列に見えていないとダメ
            for id in &remaining {
                if let Some(card) = self.world.card_mut(id) {
                    card.is_dragging = false;
                }
            }
            self.cascade.extend(remaining.into_iter().map(|card| PendingMove {
                card,
                to_stack: mv.to_stack.clone(),
            }));
        }

        match slide {
            Some(slide_type) => {
                let state = plan_slide(&self.world, mv.clone(), slide_type, &self.config);
                let event = EngineEvent::SlideStarted {
                    cards: state.cards.clone(),
                    from_stack: state.from_stack.clone(),
                    to_stack: state.to_stack.clone(),
                    slide_type,
                    delta: state.delta,
                    duration_ms: state.duration_ms,
                };
                self.animation.begin_slide(state);
                self.emit(event);
            }
            None => {
                move_executor::attach_cards(&mut self.world, &mv);
                self.record(mv.clone());
                self.animation.begin_settle();
            }
        }
        Ok(mv)
    }

    /// 取り付け終わった移動を履歴に残して、勝ったか調べる。
    fn record(&mut self, mv: Move) {
        debug!("Engine: committed {:?} {} -> {}", mv.cards, mv.from_stack, mv.to_stack);
        self.history.push(mv.clone());
        self.emit(EngineEvent::MoveCommitted(mv));

        if !self.status.is_won() && self.rules.is_win(&self.world) {
            info!("Engine: all foundations complete, you win! 🏆");
            self.status = GameStatus::Won;
            self.emit(EngineEvent::Won);
        }
    }
}

#[cfg(test)]
mod tests;
