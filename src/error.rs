// src/error.rs
//! エンジンの公開 API が返すエラー型だよ。
//!
//! ルール違反の移動はエラーじゃなくて `false` で返す。ここに来るのは呼び出し方の間違いだけ！

use thiserror::Error;

use crate::components::card::CardId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("card {0} is not in any stack")]
    CardNotFound(CardId),

    #[error("stack {0} does not exist")]
    UnknownStack(String),

    #[error("cards are not a contiguous run of stack {0}")]
    NotContiguous(String),

    #[error("cards are already in stack {0}")]
    SameStack(String),

    #[error("a move needs at least one card")]
    EmptyMove,

    #[error("a move is still animating")]
    Animating,

    #[error("setup has already run")]
    SetupAlreadyRun,

    #[error("stack {0} is registered twice")]
    DuplicateStack(String),

    #[error("card {0} is registered twice")]
    DuplicateCard(CardId),

    #[error("the board was set up by hand, there is no pre-deal layout to deal from")]
    NotDealt,
}
