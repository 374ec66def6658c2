//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, CardId, Rank};
use crate::world::World;

use super::common::moving_unit_len;

/// 組札の一番上 (`top`) に `card` を置けるか？
///
/// - 空なら A だけ。
/// - カードがあるなら同じスートで、ちょうど1つ上のランクだけ。
pub fn foundation_accepts(top: Option<&Card>, card: &Card) -> bool {
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => top.suit == card.suit && top.rank.value() + 1 == card.rank.value(),
    }
}

/// 指定されたカードが、組札 `target_stack` の一番上に置けるかチェックする。
/// 組札は1枚ずつしか受け付けないよ。
pub fn can_drop_on_foundation(world: &World, target_stack: &str, card_id: &CardId) -> bool {
    let card = match world.card(card_id) {
        Some(card) => card,
        None => {
            debug!("[Foundation Rule] no card {}", card_id);
            return false;
        }
    };
    let target = match world.stack(target_stack) {
        Some(stack) => stack,
        None => return false,
    };
    if moving_unit_len(world, card_id) != Some(1) {
        debug!("[Foundation Rule] {} is not a single card, rejected", card_id);
        return false;
    }

    let result = foundation_accepts(world.top_card(target), card);
    debug!("[Foundation Rule] {:?} {:?} -> {}: {}", card.rank, card.suit, target_stack, result);
    result
}
