//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::CardId;
use crate::components::stack::StackRole;
use crate::world::World;

use super::common::{count_empty, moving_unit_len};

/// 一度に動かせる束の最大枚数 `(F + 1) * 2^S`。
///
/// - `empty_free_cells`: 空いてるフリーセルの数 (F)
/// - `empty_columns`: 移動先以外の空いてる場札の数 (S)
pub fn max_movable_cards(empty_free_cells: usize, empty_columns: usize) -> usize {
    let doubling = u32::try_from(empty_columns)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .unwrap_or(usize::MAX);
    (empty_free_cells + 1).saturating_mul(doubling)
}

/// 指定されたカード (と、その上の束) が、場札 `target_stack` に置けるかチェックする。
pub fn can_drop_on_tableau(world: &World, target_stack: &str, card_id: &CardId) -> bool {
    let card = match world.card(card_id) {
        Some(card) => card,
        None => return false,
    };
    let target = match world.stack(target_stack) {
        Some(stack) => stack,
        None => return false,
    };
    let unit_len = match moving_unit_len(world, card_id) {
        Some(len) => len,
        None => return false,
    };

    if unit_len > 1 {
        // 束を動かすときは空きマスの数で上限が決まる。毎回数え直す！
        let free_cells = count_empty(world, StackRole::FreeCell, None);
        let empty_columns = count_empty(world, StackRole::Tableau, Some(target_stack));
        let capacity = max_movable_cards(free_cells, empty_columns);
        if unit_len > capacity {
            debug!(
                "[Tableau Rule] {} cards > capacity {} (F={}, S={}), rejected",
                unit_len, capacity, free_cells, empty_columns
            );
            return false;
        }
    }

    match world.top_card(target) {
        None => {
            debug!("[Tableau Rule] {} onto empty {}: ok", card_id, target_stack);
            true
        }
        Some(top) => {
            let result = top.accepts_in_sequence(card);
            debug!(
                "[Tableau Rule] {:?}({:?}) onto {:?}({:?}): {}",
                card.rank,
                card.colour(),
                top.rank,
                top.colour(),
                result
            );
            result
        }
    }
}
