// src/logic/ruleset.rs
//! ゲームのバリエーションごとに差し替えるルールのまとまりだよ！
//!
//! エンジンは `Ruleset` トレイトしか知らない。フリーセルの実装は `FreeCellRules`。

use std::cmp::Ordering;

use log::debug;
use rand::RngCore;

use crate::components::card::{Card, CardId};
use crate::components::position::Position;
use crate::components::stack::{Stack, StackRole};
use crate::config::layout;
use crate::logic::auto_move::{self, AutoMove};
use crate::logic::deck;
use crate::logic::rules;
use crate::logic::stack_selection;
use crate::systems::move_executor::Move;
use crate::world::World;

/// 1つのゲームのルール一式。
pub trait Ruleset {
    /// 最初に並べるスタックと、その中のカード。
    fn layout(&self) -> Vec<(Stack, Vec<Card>)>;

    /// カードを持ち上げていいか。
    fn can_drag(&self, world: &World, card_id: &CardId) -> bool;

    /// カード (と、その上の束) を `target_stack` に置いていいか。
    fn can_drop(&self, world: &World, target_stack: &str, card_id: &CardId) -> bool;

    fn is_win(&self, world: &World) -> bool;

    /// クリック移動の移動先の優先順位。小さいほうが優先。
    fn compare_move_stacks(&self, a: &Stack, b: &Stack) -> Ordering;

    fn find_auto_move(&self, world: &World) -> Option<AutoMove>;

    /// アンドゥした後、さらにもう1手戻すべきか。
    /// 最後の手が束の途中から動かしたもの (1枚ずつ連鎖の途中) なら続けて戻す。
    fn should_cascade_undo(&self, history: &[Move]) -> bool {
        history.last().map_or(false, |last| !last.from_top)
    }

    /// 束の途中のカードを持ったとき、上のカードも一緒にドラッグ中にするか。
    fn drags_multiple(&self) -> bool {
        true
    }

    /// 配り方。`(カード, 配り先スタック)` を配る順番に返す。
    fn deal(&self, world: &World, rng: &mut dyn RngCore) -> Vec<(CardId, String)>;
}

/// フリーセルのルール。
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeCellRules;

impl FreeCellRules {
    pub const FREE_CELLS: [&'static str; 4] = ["spaceA", "spaceB", "spaceC", "spaceD"];
    pub const FOUNDATIONS: [&'static str; 4] = ["suit1", "suit2", "suit3", "suit4"];
    pub const COLUMNS: [&'static str; 8] = ["col1", "col2", "col3", "col4", "col5", "col6", "col7", "col8"];

    /// クリック移動の優先順: 組札 → 場札 → フリーセル。
    pub const PREFERRED_ORDER: [&'static str; 16] = [
        "suit1", "suit2", "suit3", "suit4", "col1", "col2", "col3", "col4", "col5", "col6", "col7", "col8", "spaceA",
        "spaceB", "spaceC", "spaceD",
    ];
}

impl Ruleset for FreeCellRules {
    /// デッキ全部を spaceA に入れた状態から始めて、`deal` で配る。
    fn layout(&self) -> Vec<(Stack, Vec<Card>)> {
        let mut stacks = Vec::with_capacity(16);

        for (i, name) in Self::FREE_CELLS.iter().enumerate() {
            let x = layout::FREE_CELL_START_X + i as f32 * layout::FREE_CELL_X_OFFSET;
            let stack = Stack::new(*name, StackRole::FreeCell).at(Position::new(x, layout::FREE_CELL_START_Y));
            let cards = if i == 0 { deck::create_standard_deck() } else { Vec::new() };
            stacks.push((stack, cards));
        }
        for (i, name) in Self::FOUNDATIONS.iter().enumerate() {
            let x = layout::FOUNDATION_START_X + i as f32 * layout::FOUNDATION_X_OFFSET;
            let stack = Stack::new(*name, StackRole::Foundation).at(Position::new(x, layout::FOUNDATION_START_Y));
            stacks.push((stack, Vec::new()));
        }
        for (i, name) in Self::COLUMNS.iter().enumerate() {
            let x = layout::TABLEAU_START_X + i as f32 * layout::TABLEAU_X_OFFSET;
            let stack = Stack::new(*name, StackRole::Tableau)
                .at(Position::new(x, layout::TABLEAU_START_Y))
                .spread(true);
            stacks.push((stack, Vec::new()));
        }
        stacks
    }

    fn can_drag(&self, world: &World, card_id: &CardId) -> bool {
        match world.find_stack(card_id) {
            // 組札からは持ち上げられない
            Some((stack, _)) if stack.role == StackRole::Foundation => false,
            Some((stack, _)) => rules::can_drag(world, &stack.name, card_id),
            None => false,
        }
    }

    fn can_drop(&self, world: &World, target_stack: &str, card_id: &CardId) -> bool {
        rules::can_drop(world, target_stack, card_id)
    }

    fn is_win(&self, world: &World) -> bool {
        rules::check_win_condition(world)
    }

    fn compare_move_stacks(&self, a: &Stack, b: &Stack) -> Ordering {
        stack_selection::compare_move_stacks(&Self::PREFERRED_ORDER, a, b)
    }

    fn find_auto_move(&self, world: &World) -> Option<AutoMove> {
        auto_move::find_auto_move(world)
    }

    /// spaceA のデッキをシャッフルして、col1 から col8 へ順番に1枚ずつ配る。
    fn deal(&self, world: &World, rng: &mut dyn RngCore) -> Vec<(CardId, String)> {
        let mut cards = match world.stack(Self::FREE_CELLS[0]) {
            Some(stack) => stack.cards.clone(),
            None => return Vec::new(),
        };
        deck::shuffle_deck(&mut cards, rng);
        debug!("FreeCellRules: dealing {} cards", cards.len());

        deck::deal_round_robin(cards, Self::COLUMNS.len())
            .into_iter()
            .zip(Self::COLUMNS)
            .flat_map(|(pile, column)| pile.into_iter().map(move |card| (card, column.to_string())))
            .collect()
    }
}
