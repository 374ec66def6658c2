// src/systems/move_executor.rs
//! カードの移動を World に反映する処理だよ！🖱️💨
//!
//! 移動は「取り外し (detach)」と「取り付け (attach)」の2段階。
//! スライド中は取り外しだけ済んでいて、カードはどのスタックにもいない。
//! ルールのチェックはしない。それは呼び出し側 (エンジン) の仕事！

use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::error::MoveError;
use crate::world::World;

/// 1回の移動の記録。作ったら変わらないよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// 動かしたカード (下から順)。移動元でひと続きだったもの。
    pub cards: Vec<CardId>,
    pub from_stack: String,
    pub to_stack: String,
    /// 移動元で先頭カードがいた位置。
    pub from_index: usize,
    /// 移動先で先頭カードが入る位置 (= 移動前の移動先の枚数)。
    pub to_index: usize,
    /// 移動元の一番上まで全部持っていったなら true。
    pub from_top: bool,
}

/// `cards` を元のスタックから取り外して、移動の記録を作るよ。
///
/// 先頭カードのスタックを探して、そこから `cards` がひと続きに並んでることを確かめる。
pub fn detach_cards(world: &mut World, cards: &[CardId], to_stack: &str) -> Result<Move, MoveError> {
    let first = cards.first().ok_or(MoveError::EmptyMove)?;
    let to_index = world
        .stack(to_stack)
        .map(|stack| stack.len())
        .ok_or_else(|| MoveError::UnknownStack(to_stack.to_string()))?;
    let (from_stack, from_index) = world
        .find_stack(first)
        .map(|(stack, index)| (stack.name.clone(), index))
        .ok_or_else(|| MoveError::CardNotFound(first.clone()))?;

    if from_stack == to_stack {
        return Err(MoveError::SameStack(from_stack));
    }

    let source = world.expect_stack_mut(&from_stack);
    let end = from_index + cards.len();
    if end > source.len() || source.cards[from_index..end] != *cards {
        return Err(MoveError::NotContiguous(from_stack));
    }
    let from_top = end == source.len();
    source.cards.drain(from_index..end);

    for id in cards {
        if let Some(card) = world.card_mut(id) {
            card.is_dragging = false;
        }
    }

    debug!(
        "MoveExecutor: detached {} card(s) from {}[{}] for {} (from_top={})",
        cards.len(),
        from_stack,
        from_index,
        to_stack,
        from_top
    );
    Ok(Move {
        cards: cards.to_vec(),
        from_stack,
        to_stack: to_stack.to_string(),
        from_index,
        to_index,
        from_top,
    })
}

/// 取り外したカードを移動先の一番上に積むよ。
pub fn attach_cards(world: &mut World, mv: &Move) {
    let destination = world.expect_stack_mut(&mv.to_stack);
    destination.cards.extend(mv.cards.iter().cloned());
    debug!("MoveExecutor: attached {} card(s) to {}", mv.cards.len(), mv.to_stack);
}

/// 取り外しと取り付けをまとめて一気にやる (テストで盤面を作る用)。
#[cfg(test)]
pub(crate) fn execute_move(world: &mut World, cards: &[CardId], to_stack: &str) -> Result<Move, MoveError> {
    let mv = detach_cards(world, cards, to_stack)?;
    attach_cards(world, &mv);
    Ok(mv)
}
