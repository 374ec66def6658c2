// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use rand::seq::SliceRandom;
use rand::Rng;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート (ハート、スペード、ダイヤ、クラブ) ごとに A から K の順で並ぶ。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52); // 52枚入る容量を確保しておくと効率的！

    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// デッキをシャッフルする関数だよ。
/// 乱数生成器は外から渡す (シード付きで同じ配り方を再現できるように)。
pub fn shuffle_deck<T, R: Rng + ?Sized>(deck: &mut [T], rng: &mut R) {
    deck.shuffle(rng);
}

/// 上から順に1枚ずつ、`columns` 個の列へ順番に配るよ。
/// 1枚目は0列目、2枚目は1列目… 最後の列まで行ったら0列目に戻る。
pub fn deal_round_robin<T>(cards: Vec<T>, columns: usize) -> Vec<Vec<T>> {
    let mut piles: Vec<Vec<T>> = (0..columns).map(|_| Vec::new()).collect();
    if columns == 0 {
        return piles;
    }
    for (i, card) in cards.into_iter().enumerate() {
        piles[i % columns].push(card);
    }
    piles
}
