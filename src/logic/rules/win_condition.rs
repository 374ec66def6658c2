//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::stack::StackRole;
use crate::world::World;

/// 1つの組札に積み上がる枚数 (A〜K)。
pub const FOUNDATION_SIZE: usize = 13;
pub const FOUNDATION_COUNT: usize = 4;

/// 4つの組札が全部13枚ずつになったらクリア！🏆
pub fn check_win_condition(world: &World) -> bool {
    let foundation_sizes: Vec<usize> = world
        .stacks_with_role(StackRole::Foundation)
        .map(|stack| stack.len())
        .collect();

    foundation_sizes.len() == FOUNDATION_COUNT
        && foundation_sizes.iter().all(|&len| len == FOUNDATION_SIZE)
}
