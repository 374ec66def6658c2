// src/logic/rules/move_validation.rs
//! 移動先スタックの役割に応じて、どのルールでチェックするか振り分ける。

use crate::components::card::CardId;
use crate::components::stack::StackRole;
use crate::logic::rules::{foundation, free_cell, tableau};
use crate::world::World;

/// `card_id` (とその上の束) を `target_stack` に落とせるか検証する。
pub fn can_drop(world: &World, target_stack: &str, card_id: &CardId) -> bool {
    let role = match world.stack(target_stack) {
        Some(stack) => stack.role,
        None => return false,
    };

    match role {
        StackRole::FreeCell => free_cell::can_drop_on_free_cell(world, target_stack, card_id),
        StackRole::Foundation => foundation::can_drop_on_foundation(world, target_stack, card_id),
        StackRole::Tableau => tableau::can_drop_on_tableau(world, target_stack, card_id),
    }
}
