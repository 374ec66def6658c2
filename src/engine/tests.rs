// src/engine/tests.rs
//! Engine のテスト。盤面を手で組んで、入力 → アニメーションの合図 → 結果 を確かめるよ。

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::components::card::{Rank, Suit, ALL_RANKS};
use crate::logic::rules::max_movable_cards;

// --- テスト用ヘルパー関数 ---

/// フリーセルの16スタックを並べて、`layout` のカードを置いた状態でセットアップ完了にする。
fn engine_with(layout: &[(&str, Vec<(Suit, Rank)>)], config: EngineConfig) -> Engine {
    let mut engine = Engine::new(Box::new(FreeCellRules), config);
    for (stack, _) in FreeCellRules.layout() {
        let cards: Vec<Card> = layout
            .iter()
            .filter(|(name, _)| *name == stack.name)
            .flat_map(|(_, cards)| cards.iter().map(|&(suit, rank)| Card::new(suit, rank)))
            .collect();
        engine.add_stack(stack, cards).expect("スタックの登録");
    }
    engine.finish_setup().expect("セットアップ完了");
    engine
}

fn no_auto_move() -> EngineConfig {
    EngineConfig {
        auto_move: false,
        ..EngineConfig::default()
    }
}

fn id(suit: Suit, rank: Rank) -> CardId {
    Card::new(suit, rank).id
}

fn stack_cards(engine: &Engine, name: &str) -> Vec<CardId> {
    engine.world().expect_stack(name).cards.clone()
}

/// スライドと着地待ちを、止まるまで全部進める。
fn run_until_idle(engine: &mut Engine) {
    loop {
        if engine.on_slide_settled() {
            continue;
        }
        if engine.on_settle_elapsed() {
            continue;
        }
        break;
    }
}

fn is_slide_started(event: &EngineEvent) -> bool {
    matches!(event, EngineEvent::SlideStarted { .. })
}

// --- セットアップ ---

#[test]
fn test_deal_with_seed_is_reproducible() {
    let mut first = Engine::freecell(EngineConfig::default()).unwrap();
    let mut second = Engine::freecell(EngineConfig::default()).unwrap();
    first.deal_new_game(Some(1)).unwrap();
    second.deal_new_game(Some(1)).unwrap();

    assert_eq!(first.world().stack_layout(), second.world().stack_layout());
    assert!(first.world().expect_stack("spaceA").is_empty(), "spaceA のデッキは全部配られるはず");
    let sizes: Vec<usize> = FreeCellRules::COLUMNS
        .iter()
        .map(|name| first.world().expect_stack(name).len())
        .collect();
    assert_eq!(sizes, vec![7, 7, 7, 7, 6, 6, 6, 6]);
    assert!(first.history().is_empty(), "配った手は履歴に残らない");
    assert_eq!(first.status(), GameStatus::Playing);
    assert!(first.setup_has_run());
    println!("配り方のテスト、成功！🎉");
}

#[test]
fn test_setup_only_runs_once() {
    let mut engine = Engine::freecell(EngineConfig::default()).unwrap();
    engine.deal_new_game(Some(3)).unwrap();

    assert_eq!(engine.deal_new_game(Some(3)), Err(MoveError::SetupAlreadyRun));
    assert_eq!(engine.finish_setup(), Err(MoveError::SetupAlreadyRun));
    assert_eq!(
        engine.add_stack(Stack::new("extra", crate::components::stack::StackRole::Tableau), vec![]),
        Err(MoveError::SetupAlreadyRun)
    );
}

#[test]
fn test_commit_before_setup_is_not_recorded() {
    let mut engine = Engine::new(Box::new(FreeCellRules), EngineConfig::default());
    for (stack, cards) in FreeCellRules.layout() {
        engine.add_stack(stack, cards).unwrap();
    }

    let mv = engine.commit_move(&[CardId::from("clubs-13")], "col1").unwrap();
    assert_eq!(mv.to_stack, "col1");
    assert_eq!(stack_cards(&engine, "col1"), vec![CardId::from("clubs-13")]);
    assert!(engine.history().is_empty());
    assert!(!engine.is_animating(), "セットアップ中はアニメーションしない");
}

// --- ドラッグ & ドロップ ---

#[test]
fn test_drop_commits_immediately_then_settles() {
    let mut engine = engine_with(
        &[("col1", vec![(Suit::Spade, Rank::Eight)]), ("col2", vec![(Suit::Diamond, Rank::Seven)])],
        EngineConfig::default(),
    );
    let seven = id(Suit::Diamond, Rank::Seven);

    let destinations = engine.attempt_drag(&seven);
    assert!(destinations.contains(&"col1".to_string()));
    assert!(destinations.contains(&"spaceA".to_string()));
    assert!(!destinations.contains(&"col2".to_string()), "自分のスタックは入らない");
    assert!(engine.attempt_drop(&seven, "col1"));

    assert!(engine.drop_card(&seven, "col1"));
    assert_eq!(stack_cards(&engine, "col1"), vec![id(Suit::Spade, Rank::Eight), seven.clone()]);
    assert_eq!(engine.history().len(), 1);
    assert!(engine.is_animating(), "ドロップの後は着地待ち");

    // 着地待ちの間は何も受け付けない
    assert!(engine.attempt_drag(&seven).is_empty());
    assert!(!engine.undo());
    assert!(!engine.on_slide_settled(), "スライドしてないので無視");

    assert!(engine.on_settle_elapsed());
    assert!(!engine.is_animating());
    let events = engine.drain_events();
    assert!(matches!(events.as_slice(), [EngineEvent::MoveCommitted(_), EngineEvent::MoveSettled]));
    println!("ドロップのテスト、成功！🎉");
}

#[test]
fn test_illegal_drop_returns_false_and_clears_dragging() {
    let mut engine = engine_with(
        &[("col1", vec![(Suit::Spade, Rank::Eight)]), ("col2", vec![(Suit::Club, Rank::Seven)])],
        EngineConfig::default(),
    );
    let seven = id(Suit::Club, Rank::Seven);
    assert!(engine.set_dragging(&seven, true));

    assert!(!engine.drop_card(&seven, "col1"), "黒8に黒7は置けない");
    assert!(!engine.drop_card(&seven, "nowhere"));
    assert!(!engine.world().card(&seven).unwrap().is_dragging);
    assert!(engine.history().is_empty());
    assert!(!engine.is_animating());
}

#[test]
fn test_set_dragging_flags_cards_above() {
    let mut engine = engine_with(
        &[("col1", vec![(Suit::Heart, Rank::King), (Suit::Spade, Rank::Five), (Suit::Heart, Rank::Four)])],
        EngineConfig::default(),
    );

    assert!(engine.set_dragging(&id(Suit::Spade, Rank::Five), true));
    let flags: Vec<bool> = stack_cards(&engine, "col1")
        .iter()
        .map(|card| engine.world().card(card).unwrap().is_dragging)
        .collect();
    assert_eq!(flags, vec![false, true, true]);
    assert!(!engine.set_dragging(&CardId::from("ghost"), true));
}

// --- クリック移動 ---

#[test]
fn test_click_move_prefers_occupied_stack() {
    let mut engine = engine_with(
        &[("col1", vec![(Suit::Heart, Rank::Four)]), ("col3", vec![(Suit::Spade, Rank::Five)])],
        EngineConfig::default(),
    );
    let four = id(Suit::Heart, Rank::Four);
    engine.record_position(&four, Position::new(0.0, 0.0));

    assert!(engine.click_move(&four));
    assert_eq!(engine.sliding_to_stack(), Some("col3"));
    assert_eq!(engine.sliding_cards().iter().map(|card| card.id.clone()).collect::<Vec<_>>(), vec![four.clone()]);
    // スライド中はどこにもいない
    assert!(engine.world().find_stack(&four).is_none());
    assert!(engine.history().is_empty(), "取り付けるまで履歴には入らない");

    let snapshot = engine.snapshot();
    assert!(snapshot.animating);
    assert_eq!(snapshot.slide_type, Some(SlideType::Slow));
    let anchor = engine.world().expect_stack("col3").position;
    assert_eq!(snapshot.slide_delta, Some(anchor.offset(0.0, engine.config().spread_factor)));

    assert!(engine.on_slide_settled());
    assert_eq!(stack_cards(&engine, "col3"), vec![id(Suit::Spade, Rank::Five), four]);
    assert_eq!(engine.history().len(), 1);
    assert!(engine.on_settle_elapsed());
    assert!(!engine.is_animating());
}

#[test]
fn test_click_move_without_destination_is_silent() {
    let mut engine = engine_with(
        &[
            ("spaceA", vec![(Suit::Club, Rank::King)]),
            ("spaceB", vec![(Suit::Spade, Rank::King)]),
            ("spaceC", vec![(Suit::Diamond, Rank::King)]),
            ("spaceD", vec![(Suit::Heart, Rank::King)]),
            ("col1", vec![(Suit::Heart, Rank::Two)]),
            ("col2", vec![(Suit::Club, Rank::Ten)]),
            ("col3", vec![(Suit::Spade, Rank::Ten)]),
            ("col4", vec![(Suit::Club, Rank::Jack)]),
            ("col5", vec![(Suit::Spade, Rank::Jack)]),
            ("col6", vec![(Suit::Club, Rank::Queen)]),
            ("col7", vec![(Suit::Spade, Rank::Queen)]),
            ("col8", vec![(Suit::Diamond, Rank::Ten)]),
        ],
        EngineConfig::default(),
    );

    assert!(!engine.click_move(&id(Suit::Heart, Rank::Two)));
    assert!(!engine.is_animating());
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_auto_move_runs_after_settle() {
    let mut engine = engine_with(
        &[
            ("col1", vec![(Suit::Heart, Rank::Ace), (Suit::Club, Rank::Nine)]),
            ("col2", vec![(Suit::Heart, Rank::Ten)]),
        ],
        EngineConfig::default(),
    );

    assert!(engine.click_move(&id(Suit::Club, Rank::Nine)));
    assert_eq!(engine.sliding_to_stack(), Some("col2"));
    assert!(engine.on_slide_settled());

    // 着地待ちが終わると、出てきたハートの A が自動で組札へ
    assert!(engine.on_settle_elapsed());
    assert_eq!(engine.sliding_to_stack(), Some("suit1"));
    assert_eq!(engine.snapshot().slide_type, Some(SlideType::Fast));
    assert!(engine.on_slide_settled());
    assert!(engine.on_settle_elapsed());
    assert!(!engine.is_animating());

    assert_eq!(stack_cards(&engine, "suit1"), vec![id(Suit::Heart, Rank::Ace)]);
    assert_eq!(engine.history().len(), 2);
    let events = engine.drain_events();
    assert_eq!(events.iter().filter(|event| is_slide_started(event)).count(), 2);
    assert_eq!(events.last(), Some(&EngineEvent::MoveSettled));
    println!("自動移動のテスト、成功！🎉");
}

// --- 束の移動と連鎖 ---

fn run_layout() -> Vec<(&'static str, Vec<(Suit, Rank)>)> {
    vec![
        ("col1", vec![(Suit::Spade, Rank::Five), (Suit::Heart, Rank::Four), (Suit::Club, Rank::Three)]),
        ("col2", vec![(Suit::Diamond, Rank::Six)]),
    ]
}

#[test]
fn test_atomic_sequence_moves_as_one() {
    let mut engine = engine_with(&run_layout(), EngineConfig::default());

    assert!(engine.drop_card(&id(Suit::Spade, Rank::Five), "col2"));
    run_until_idle(&mut engine);

    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.history()[0].cards.len(), 3);
    assert!(engine.history()[0].from_top);
    assert_eq!(stack_cards(&engine, "col2").len(), 4);
    assert!(stack_cards(&engine, "col1").is_empty());
}

#[test]
fn test_card_by_card_sequence_cascades_and_undoes_together() {
    let config = EngineConfig {
        sequence_mode: SequenceMode::CardByCard,
        ..EngineConfig::default()
    };
    let mut engine = engine_with(&run_layout(), config);
    let dealt = engine.world().stack_layout();

    assert!(engine.drop_card(&id(Suit::Spade, Rank::Five), "col2"));
    assert_eq!(stack_cards(&engine, "col1"), vec![id(Suit::Heart, Rank::Four), id(Suit::Club, Rank::Three)]);

    // 残りの2枚が1枚ずつ速いスライドで追いかける
    assert!(engine.on_settle_elapsed());
    assert_eq!(engine.snapshot().slide_type, Some(SlideType::Fast));
    run_until_idle(&mut engine);

    assert_eq!(
        stack_cards(&engine, "col2"),
        vec![
            id(Suit::Diamond, Rank::Six),
            id(Suit::Spade, Rank::Five),
            id(Suit::Heart, Rank::Four),
            id(Suit::Club, Rank::Three)
        ]
    );
    let from_top: Vec<bool> = engine.history().iter().map(|mv| mv.from_top).collect();
    assert_eq!(from_top, vec![false, false, true]);

    // アンドゥ1回で3手まとめて戻る
    assert!(engine.undo());
    assert!(engine.history().is_empty());
    assert_eq!(engine.world().stack_layout(), dealt);
    let undone = engine.drain_events().into_iter().find_map(|event| match event {
        EngineEvent::Undone { moves } => Some(moves.len()),
        _ => None,
    });
    assert_eq!(undone, Some(3));
    println!("1枚ずつ移動の連鎖テスト、成功！🎉");
}

#[test]
fn test_partial_commit_queues_remaining_cards() {
    let mut engine = engine_with(&run_layout(), no_auto_move());

    let mv = engine.commit_move(&[id(Suit::Spade, Rank::Five)], "col2").unwrap();
    assert!(!mv.from_top);
    run_until_idle(&mut engine);

    assert!(stack_cards(&engine, "col1").is_empty(), "上のカードも全部ついてくる");
    assert_eq!(engine.history().len(), 3);
}

#[test]
fn test_card_by_card_drop_keeps_waiting_cards_visible() {
    let config = EngineConfig {
        sequence_mode: SequenceMode::CardByCard,
        ..no_auto_move()
    };
    let mut engine = engine_with(&run_layout(), config);
    let dragging = |engine: &Engine, name: &str| -> Vec<bool> {
        stack_cards(engine, name)
            .iter()
            .map(|card| engine.world().card(card).unwrap().is_dragging)
            .collect()
    };

    assert!(engine.set_dragging(&id(Suit::Spade, Rank::Five), true));
    assert_eq!(dragging(&engine, "col1"), vec![true, true, true]);

    assert!(engine.drop_card(&id(Suit::Spade, Rank::Five), "col2"));
    assert!(engine.is_animating());
    // 順番待ちの2枚はまだ col1 にいて、ドラッグ中じゃない
    assert_eq!(stack_cards(&engine, "col1"), vec![id(Suit::Heart, Rank::Four), id(Suit::Club, Rank::Three)]);
    assert_eq!(dragging(&engine, "col1"), vec![false, false]);

    run_until_idle(&mut engine);
    assert_eq!(dragging(&engine, "col2"), vec![false, false, false, false]);
    println!("1枚ずつ移動でも待ってるカードが消えない！👍");
}

#[test]
fn test_can_drag_separates_pickup_from_destinations() {
    let mut layout: Vec<(&str, Vec<(Suit, Rank)>)> = vec![
        ("spaceA", vec![(Suit::Heart, Rank::King)]),
        ("spaceB", vec![(Suit::Spade, Rank::King)]),
        ("spaceC", vec![(Suit::Diamond, Rank::King)]),
        ("spaceD", vec![(Suit::Club, Rank::King)]),
        ("suit1", vec![(Suit::Heart, Rank::Ace)]),
        ("col1", vec![(Suit::Club, Rank::Nine)]),
    ];
    // 残りの列は黒9を受けない低いダイヤで埋める
    let fillers = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight];
    let columns = ["col2", "col3", "col4", "col5", "col6", "col7", "col8"];
    for (&column, &rank) in columns.iter().zip(fillers.iter()) {
        layout.push((column, vec![(Suit::Diamond, rank)]));
    }
    let engine = engine_with(&layout, no_auto_move());

    let nine = id(Suit::Club, Rank::Nine);
    assert!(engine.can_drag(&nine), "持ち上げるだけならできる");
    assert!(engine.attempt_drag(&nine).is_empty(), "でも置ける場所は無い");

    let ace = id(Suit::Heart, Rank::Ace);
    assert!(!engine.can_drag(&ace), "組札のカードは持てない");
    assert!(engine.attempt_drag(&ace).is_empty());
}

// --- アンドゥ・勝利・リセット ---

#[test]
fn test_undo_restores_and_tracks_history() {
    let mut engine = engine_with(
        &[
            ("col1", vec![(Suit::Spade, Rank::Eight)]),
            ("col2", vec![(Suit::Diamond, Rank::Seven)]),
            ("col3", vec![(Suit::Club, Rank::Six)]),
        ],
        EngineConfig::default(),
    );
    let dealt = engine.world().stack_layout();

    assert!(!engine.undo(), "履歴が空なら何もしない");

    assert!(engine.drop_card(&id(Suit::Diamond, Rank::Seven), "col1"));
    run_until_idle(&mut engine);
    assert!(engine.drop_card(&id(Suit::Club, Rank::Six), "col1"));
    run_until_idle(&mut engine);
    assert_eq!(engine.history().len(), 2);

    assert!(engine.undo());
    assert_eq!(engine.history().len(), 1);
    assert_eq!(stack_cards(&engine, "col3"), vec![id(Suit::Club, Rank::Six)]);
    assert!(engine.undo());
    assert_eq!(engine.world().stack_layout(), dealt);
    assert!(!engine.undo());
}

#[test]
fn test_win_flips_on_final_promotion_only() {
    let foundations = [("suit1", Suit::Heart), ("suit2", Suit::Spade), ("suit3", Suit::Diamond), ("suit4", Suit::Club)];
    let mut layout: Vec<(&str, Vec<(Suit, Rank)>)> = foundations
        .iter()
        .map(|&(name, suit)| (name, ALL_RANKS[..12].iter().map(|&rank| (suit, rank)).collect()))
        .collect();
    let columns = ["col1", "col2", "col3", "col4"];
    for (&column, &(_, suit)) in columns.iter().zip(foundations.iter()) {
        layout.push((column, vec![(suit, Rank::King)]));
    }
    let mut engine = engine_with(&layout, no_auto_move());

    for (&(foundation, suit), last) in foundations.iter().zip([false, false, false, true]) {
        assert!(engine.drop_card(&id(suit, Rank::King), foundation));
        assert_eq!(engine.is_win(), last, "{} のキングで勝利判定", foundation);
        assert!(engine.on_settle_elapsed());
    }
    assert_eq!(engine.status(), GameStatus::Won);
    let wins = engine.drain_events().iter().filter(|event| **event == EngineEvent::Won).count();
    assert_eq!(wins, 1, "Won は1回だけ");

    assert!(engine.undo());
    assert_eq!(engine.status(), GameStatus::Playing);
    println!("勝利判定のテスト、成功！🏆");
}

#[test]
fn test_reset_and_new_game() {
    let mut engine = Engine::freecell(EngineConfig::default()).unwrap();
    engine.deal_new_game(Some(5)).unwrap();
    let dealt = engine.world().stack_layout();

    let top = engine.world().expect_stack("col1").top().cloned().unwrap();
    engine.commit_move(&[top], "spaceA").unwrap();
    run_until_idle(&mut engine);
    assert!(!engine.history().is_empty());

    assert!(engine.reset_to_initial_layout());
    assert_eq!(engine.world().stack_layout(), dealt);
    assert!(engine.history().is_empty());
    assert!(engine.drain_events().contains(&EngineEvent::Reset));

    engine.new_game(Some(5)).unwrap();
    assert_eq!(engine.world().stack_layout(), dealt, "同じシードなら同じ配り方");
    engine.new_game(Some(6)).unwrap();
    assert_ne!(engine.world().stack_layout(), dealt);
    assert_eq!(engine.world().card_count(), 52);
}

#[test]
fn test_new_game_refuses_a_hand_built_board() {
    let mut engine = engine_with(
        &[("col1", vec![(Suit::Spade, Rank::Five)]), ("spaceA", vec![(Suit::Heart, Rank::Ace)])],
        no_auto_move(),
    );
    let before = engine.world().stack_layout();

    assert_eq!(engine.new_game(Some(3)), Err(MoveError::NotDealt));
    assert_eq!(engine.world().stack_layout(), before, "盤面はそのまま");
    assert!(engine.setup_has_run());
    assert_eq!(engine.status(), GameStatus::Playing);

    // やり直しはできる
    assert!(engine.reset_to_initial_layout());
    assert_eq!(engine.world().stack_layout(), before);
}

#[test]
fn test_reset_before_setup_does_nothing() {
    let mut engine = Engine::freecell(EngineConfig::default()).unwrap();
    assert!(!engine.reset_to_initial_layout());
}

// --- アニメーションの合図のずれ ---

#[test]
fn test_signals_in_wrong_phase_are_ignored() {
    let mut engine = engine_with(
        &[("col1", vec![(Suit::Heart, Rank::Four)]), ("col3", vec![(Suit::Spade, Rank::Five)])],
        EngineConfig::default(),
    );
    assert!(!engine.on_slide_settled());
    assert!(!engine.on_settle_elapsed());

    assert!(engine.click_move(&id(Suit::Heart, Rank::Four)));
    assert!(!engine.on_settle_elapsed(), "スライド中に着地待ちの合図は来ない");
    assert!(!engine.undo());
    assert!(!engine.click_move(&id(Suit::Spade, Rank::Five)));
    assert_eq!(
        engine.commit_move(&[id(Suit::Spade, Rank::Five)], "col2"),
        Err(MoveError::Animating)
    );
    assert!(engine.on_slide_settled());
    assert!(!engine.on_slide_settled());
}

#[test]
fn test_commit_move_reports_misuse() {
    let mut engine = engine_with(&run_layout(), EngineConfig::default());

    assert_eq!(engine.commit_move(&[], "col2"), Err(MoveError::EmptyMove));
    assert_eq!(
        engine.commit_move(&[id(Suit::Club, Rank::Three)], "col9"),
        Err(MoveError::UnknownStack("col9".into()))
    );
    assert_eq!(
        engine.commit_move(&[id(Suit::Spade, Rank::Five), id(Suit::Club, Rank::Three)], "col3"),
        Err(MoveError::NotContiguous("col1".into()))
    );
    assert!(!engine.is_animating(), "失敗した移動では着地待ちにならない");
}

// --- イベント ---

#[test]
fn test_observers_see_every_event() {
    let mut engine = engine_with(
        &[("col1", vec![(Suit::Spade, Rank::Eight)]), ("col2", vec![(Suit::Diamond, Rank::Seven)])],
        EngineConfig::default(),
    );
    let seen: Rc<RefCell<Vec<EngineEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    engine.add_observer(move |event| sink.borrow_mut().push(event.clone()));

    assert!(engine.drop_card(&id(Suit::Diamond, Rank::Seven), "col1"));
    run_until_idle(&mut engine);

    assert_eq!(*seen.borrow(), engine.drain_events());
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_snapshot_serializes_for_the_renderer() {
    let engine = engine_with(&run_layout(), EngineConfig::default());
    let json = serde_json::to_value(engine.snapshot()).expect("スナップショットは JSON にできるはず");

    assert_eq!(json["status"], "playing");
    assert_eq!(json["animating"], false);
    assert_eq!(json["stacks"].as_array().map(|stacks| stacks.len()), Some(16));
    assert_eq!(json["cards"].as_array().map(|cards| cards.len()), Some(4));
    assert!(json["slidingCards"].as_array().map_or(false, |cards| cards.is_empty()));
    assert!(json["slidingToStack"].is_null());

    let event = serde_json::to_value(EngineEvent::MoveSettled).unwrap();
    assert_eq!(event["type"], "moveSettled");
}

// --- プロパティテスト ---

proptest! {
    #[test]
    fn prop_capacity_doubles_per_empty_column(free in 0usize..5, empty in 0usize..8) {
        prop_assert_eq!(max_movable_cards(free, empty), (free + 1) * (1usize << empty));
        prop_assert_eq!(max_movable_cards(free, empty + 1), 2 * max_movable_cards(free, empty));
    }

    #[test]
    fn prop_commit_then_undo_restores_layout(
        seed in any::<u64>(),
        picks in prop::collection::vec((0usize..16, 0usize..16), 1..20),
    ) {
        let mut engine = Engine::freecell(no_auto_move()).unwrap();
        engine.deal_new_game(Some(seed)).unwrap();
        let dealt = engine.world().stack_layout();

        let mut committed = 0;
        for (from, to) in picks {
            let stacks = engine.world().stacks();
            if from == to {
                continue;
            }
            let card = match stacks[from].top() {
                Some(card) => card.clone(),
                None => continue,
            };
            let to_name = stacks[to].name.clone();
            engine.commit_move(&[card], &to_name).unwrap();
            prop_assert!(engine.on_settle_elapsed());
            committed += 1;
            prop_assert_eq!(engine.history().len(), committed);
        }

        for _ in 0..committed {
            prop_assert!(engine.undo());
        }
        prop_assert!(engine.history().is_empty());
        prop_assert_eq!(engine.world().stack_layout(), dealt);
    }
}
