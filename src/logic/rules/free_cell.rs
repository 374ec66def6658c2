//! フリーセルへのカード移動ルールだよ。

use log::debug;

use crate::components::card::CardId;
use crate::world::World;

use super::common::moving_unit_len;

/// フリーセルは空っぽの時だけ、しかも1枚だけ受け付ける。束は入らない！
pub fn can_drop_on_free_cell(world: &World, target_stack: &str, card_id: &CardId) -> bool {
    let target = match world.stack(target_stack) {
        Some(stack) => stack,
        None => return false,
    };
    let unit_len = match moving_unit_len(world, card_id) {
        Some(len) => len,
        None => return false,
    };

    let result = target.is_empty() && unit_len == 1;
    debug!("[FreeCell Rule] {} -> {}: empty={} unit={} -> {}", card_id, target_stack, target.is_empty(), unit_len, result);
    result
}
