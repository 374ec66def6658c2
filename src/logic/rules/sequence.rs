//! カードを持ち上げられるか (ドラッグ開始の判定) を決めるルールだよ。

use itertools::Itertools;
use log::debug;

use crate::components::card::{Card, CardId};
use crate::world::World;

/// 下から順に並んだカードが「1つずつ下がる色違いの並び」になってるか？
pub fn is_valid_run(cards: &[&Card]) -> bool {
    cards
        .iter()
        .tuple_windows()
        .all(|(lower, upper)| lower.accepts_in_sequence(upper))
}

/// `stack_name` の中の `card_id` を持ち上げられるかチェックする。
///
/// 一番上のカードなら無条件で OK。そうじゃなければ、そのカードから上が
/// 全部きれいな並びになってる時だけ、束の先頭として持ち上げられる。
pub fn can_drag(world: &World, stack_name: &str, card_id: &CardId) -> bool {
    let stack = match world.stack(stack_name) {
        Some(stack) => stack,
        None => return false,
    };
    let index = match stack.index_of(card_id) {
        Some(index) => index,
        None => return false,
    };

    if index + 1 == stack.len() {
        return true;
    }

    let run = world.cards_from(stack, index);
    let result = run.len() == stack.len() - index && is_valid_run(&run);
    debug!("[Drag Rule] {} in {} (index {}): sequence of {} -> {}", card_id, stack_name, index, run.len(), result);
    result
}
