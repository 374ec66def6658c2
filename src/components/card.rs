// src/components/card.rs

use std::fmt;

// serde を使う宣言！カード情報を JSON にして JS 側のレンダラーに渡すよ。
use serde::{Deserialize, Serialize};

use super::position::Position;

/// カードのスート（マーク）を表す列挙型だよ！❤️♠️♦️♣️
///
/// JSON では `"hearts"` みたいな複数形の小文字で表すよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "hearts")]
    Heart,
    #[serde(rename = "spades")]
    Spade,
    #[serde(rename = "diamonds")]
    Diamond,
    #[serde(rename = "clubs")]
    Club,
}

impl Suit {
    /// カード ID の組み立てに使う名前。
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Heart => "hearts",
            Suit::Spade => "spades",
            Suit::Diamond => "diamonds",
            Suit::Club => "clubs",
        }
    }
}

/// デッキを作る時の並び順 (ハート、スペード、ダイヤ、クラブ)。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Spade, Suit::Diamond, Suit::Club];

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `Ace = 1` から `King = 13` まで。`value()` で数値として比べられる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 1〜13 の数値を返すよ。
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// カードの色（赤か黒か）。スートから決まるよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// カードを識別するための ID だよ。中身はただの文字列 (`"hearts-1"` とか)。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        CardId(value.to_string())
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        CardId(value)
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// スートとランクは作ったら変わらない。変わるのは一時的なフラグ2つだけ！
/// - `is_dragging`: ドラッグ中かどうか (レンダラーが元の場所で隠すのに使う)
/// - `position`: 最後に画面上で観測された座標 (スライドアニメーションの出発点)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default)]
    pub is_dragging: bool,
    #[serde(default)]
    pub position: Option<Position>,
}

impl Card {
    /// `"{suit}-{rank}"` 形式の ID を付けてカードを作るよ。例: ハートの A は `"hearts-1"`。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self::with_id(format!("{}-{}", suit.name(), rank.value()), suit, rank)
    }

    pub fn with_id(id: impl Into<CardId>, suit: Suit, rank: Rank) -> Self {
        Self {
            id: id.into(),
            suit,
            rank,
            is_dragging: false,
            position: None,
        }
    }

    pub fn colour(&self) -> CardColor {
        CardColor::from_suit(self.suit)
    }

    /// `upper` をこのカードの上に積めるか？ (色違い かつ ランクがちょうど1つ下)
    pub fn accepts_in_sequence(&self, upper: &Card) -> bool {
        self.colour() != upper.colour() && upper.rank.value() + 1 == self.rank.value()
    }
}
