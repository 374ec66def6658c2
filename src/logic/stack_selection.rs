// src/logic/stack_selection.rs
//! クリックで動かす時に、どのスタックへ飛ばすか決めるための並べ替えだよ。

use std::cmp::Ordering;

use crate::components::stack::Stack;

/// 移動先候補の比べ方。
///
/// 1. カードが載ってるスタックを空のスタックより先に。
/// 2. 同じなら `preference` の順番 (載ってない名前は一番後ろ)。
pub fn compare_move_stacks(preference: &[&str], a: &Stack, b: &Stack) -> Ordering {
    let rank = |stack: &Stack| {
        preference
            .iter()
            .position(|name| *name == stack.name)
            .unwrap_or(usize::MAX)
    };

    a.is_empty()
        .cmp(&b.is_empty())
        .then_with(|| rank(a).cmp(&rank(b)))
}

/// 候補を並べ替えて、一番いいものを返す。`sort_by` は安定ソートだよ。
pub fn select_destination<'a, F>(mut candidates: Vec<&'a Stack>, compare: F) -> Option<&'a Stack>
where
    F: Fn(&Stack, &Stack) -> Ordering,
{
    candidates.sort_by(|a, b| compare(*a, *b));
    candidates.into_iter().next()
}
