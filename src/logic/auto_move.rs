// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! 組札に上げても困らないカードを1枚だけ探すんだ。

use log::debug;
use serde::Serialize;

use crate::components::card::{Card, CardId};
use crate::components::stack::{Stack, StackRole};
use crate::logic::rules::foundation_accepts;
use crate::world::World;

/// 自動移動の候補。1手ぶんだけ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoMove {
    pub card: CardId,
    pub from_stack: String,
    pub to_stack: String,
}

/// 組札以外のスタックの一番上を順番に見て、組札に上げていいカードを探すよ。
///
/// 他の列の一番上に「このカードの上に積めるカード」(色違いで1つ下) があるなら、
/// まだ場に必要かもしれないので上げない。先読みはこの1段だけ！
pub fn find_auto_move(world: &World) -> Option<AutoMove> {
    let playable: Vec<(&Stack, &Card)> = world
        .stacks()
        .iter()
        .filter(|stack| stack.role != StackRole::Foundation)
        .filter_map(|stack| world.top_card(stack).map(|card| (stack, card)))
        .collect();

    for &(stack, candidate) in &playable {
        let still_needed = playable
            .iter()
            .any(|&(other, top)| other.name != stack.name && candidate.accepts_in_sequence(top));
        if still_needed {
            debug!("[AutoMove] {} is still needed on the board", candidate.id);
            continue;
        }

        let destination = world
            .stacks_with_role(StackRole::Foundation)
            .find(|foundation| foundation_accepts(world.top_card(foundation), candidate));
        if let Some(foundation) = destination {
            debug!("[AutoMove] {} -> {}", candidate.id, foundation.name);
            return Some(AutoMove {
                card: candidate.id.clone(),
                from_stack: stack.name.clone(),
                to_stack: foundation.name.clone(),
            });
        }
    }
    None
}
