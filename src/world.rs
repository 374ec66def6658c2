// src/world.rs

// HashMap: カード ID からカード本体を引くため。
use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, warn};

use crate::components::card::{Card, CardId};
use crate::components::stack::{Stack, StackRole};
use crate::error::MoveError;

/// ゲーム世界の全カードと全スタックを持つ入れ物だよ！
///
/// ルールは一切チェックしない、ただのストア。
/// - `cards`: カード ID → カード本体。カードはここにしか存在しない。
/// - `stacks`: 登録順に並んだスタック。この順番が「列挙順」になる。
#[derive(Debug, Clone, Default)]
pub struct World {
    cards: HashMap<CardId, Card>,
    stacks: Vec<Stack>,
    stack_index: HashMap<String, usize>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// スタックを登録して、最初のカードたちもカード表に入れるよ。
    /// 初期配置のときだけ呼ぶ想定！
    pub fn add_stack(&mut self, mut stack: Stack, initial_cards: Vec<Card>) -> Result<(), MoveError> {
        if self.stack_index.contains_key(&stack.name) {
            return Err(MoveError::DuplicateStack(stack.name));
        }
        if let Some(card) = initial_cards.iter().find(|card| self.cards.contains_key(&card.id)) {
            return Err(MoveError::DuplicateCard(card.id.clone()));
        }
        // 同じカードを2回渡されてもダメ
        if let Some(id) = initial_cards.iter().map(|card| &card.id).duplicates().next() {
            return Err(MoveError::DuplicateCard(id.clone()));
        }
        // カード表に無い ID が混ざらないように、中身は initial_cards だけにする
        if !stack.cards.is_empty() {
            warn!("World: stack {} came with {} card ids, ignoring them", stack.name, stack.cards.len());
            stack.cards.clear();
        }

        debug!("World: adding stack {} ({:?}) with {} cards", stack.name, stack.role, initial_cards.len());
        for card in initial_cards {
            stack.cards.push(card.id.clone());
            self.cards.insert(card.id.clone(), card);
        }
        self.stack_index.insert(stack.name.clone(), self.stacks.len());
        self.stacks.push(stack);
        Ok(())
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.get_mut(id)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn stack(&self, name: &str) -> Option<&Stack> {
        self.stack_index.get(name).map(|&index| &self.stacks[index])
    }

    /// 名前でスタックを引く。無ければプログラムのバグなのでパニック！
    pub fn expect_stack(&self, name: &str) -> &Stack {
        match self.stack(name) {
            Some(stack) => stack,
            None => panic!("World: stack {} is not registered", name),
        }
    }

    pub fn expect_stack_mut(&mut self, name: &str) -> &mut Stack {
        match self.stack_index.get(name) {
            Some(&index) => &mut self.stacks[index],
            None => panic!("World: stack {} is not registered", name),
        }
    }

    /// 登録順に全スタックを返すよ。
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn stacks_with_role(&self, role: StackRole) -> impl Iterator<Item = &Stack> {
        self.stacks.iter().filter(move |stack| stack.role == role)
    }

    /// スタックの一番上のカード本体。
    pub fn top_card(&self, stack: &Stack) -> Option<&Card> {
        stack.top().and_then(|id| self.cards.get(id))
    }

    /// カードがどのスタックの何番目にいるか、全スタックを順番に探すよ。
    /// インデックスは持ってないので O(スタック数 × 枚数)。この規模なら十分！
    pub fn find_stack(&self, card_id: &CardId) -> Option<(&Stack, usize)> {
        self.stacks
            .iter()
            .find_map(|stack| stack.index_of(card_id).map(|index| (stack, index)))
    }

    /// `stack` の中の `from_index` から上のカード本体を順番に返す。
    pub fn cards_from(&self, stack: &Stack, from_index: usize) -> Vec<&Card> {
        stack
            .cards
            .iter()
            .skip(from_index)
            .filter_map(|id| self.cards.get(id))
            .collect()
    }

    /// スタックの並びを丸ごとコピーする (リセット用のスナップショット)。
    pub fn stack_layout(&self) -> Vec<Stack> {
        self.stacks.clone()
    }

    /// スナップショットからスタックの中身を戻すよ。カード表はそのまま。
    pub fn restore_layout(&mut self, layout: &[Stack]) {
        for saved in layout {
            let stack = self.expect_stack_mut(&saved.name);
            stack.cards = saved.cards.clone();
        }
        for card in self.cards.values_mut() {
            card.is_dragging = false;
        }
    }
}
