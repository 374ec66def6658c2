// src/systems/undo.rs
//! 履歴から1手ずつ移動を巻き戻す処理だよ！⏪

use log::debug;

use crate::systems::move_executor::Move;
use crate::world::World;

/// `mv` を逆向きに適用する。
///
/// 移動先の `to_index` から `cards.len()` 枚を抜いて、移動元の `from_index` に差し戻す。
/// 記録と盤面が食い違ってたら、それはバグなのでパニック！
pub fn revert_move(world: &mut World, mv: &Move) {
    let destination = world.expect_stack_mut(&mv.to_stack);
    let end = mv.to_index + mv.cards.len();
    if end > destination.len() || destination.cards[mv.to_index..end] != mv.cards[..] {
        panic!(
            "Undo: history is out of sync with stack {} (expected {:?} at {})",
            mv.to_stack, mv.cards, mv.to_index
        );
    }
    let cards: Vec<_> = destination.cards.drain(mv.to_index..end).collect();

    let source = world.expect_stack_mut(&mv.from_stack);
    if mv.from_index > source.len() {
        panic!("Undo: stack {} is too short to restore index {}", mv.from_stack, mv.from_index);
    }
    source.cards.splice(mv.from_index..mv.from_index, cards);

    debug!("Undo: {} card(s) back from {} to {}[{}]", mv.cards.len(), mv.to_stack, mv.from_stack, mv.from_index);
}

/// 履歴の最後の1手を取り出して巻き戻すよ。履歴が空なら何もしない。
pub fn undo_last(world: &mut World, history: &mut Vec<Move>) -> Option<Move> {
    let mv = history.pop()?;
    revert_move(world, &mv);
    Some(mv)
}
