//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::CardId;
use crate::components::stack::StackRole;
use crate::world::World;

pub use crate::components::card::CardColor;

/// 動かそうとしているカードの束の枚数を数えるよ。
/// そのカードからスタックの一番上までが「一緒に動く束」。
pub(crate) fn moving_unit_len(world: &World, card_id: &CardId) -> Option<usize> {
    world
        .find_stack(card_id)
        .map(|(stack, index)| stack.len() - index)
}

/// 空っぽのスタックを役割ごとに数える。`excluding` に渡した名前は数えない。
pub(crate) fn count_empty(world: &World, role: StackRole, excluding: Option<&str>) -> usize {
    world
        .stacks_with_role(role)
        .filter(|stack| stack.is_empty() && Some(stack.name.as_str()) != excluding)
        .count()
}
