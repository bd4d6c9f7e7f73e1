mod common;

use common::{Fixture, HIGH, LOW, ScriptedRng, fight, keys, press};
use lokarta_core::{
    BaseMode, InputKey, MessageKey, ModeKind, OpponentId, OpponentTurn, ResourceMeter, Scene,
    Tick, env::roll,
};
use lokarta_runtime::{Event, InMemoryPersistence, Outcome, Session};
use proptest::prelude::*;

#[test]
fn attack_without_opponents_narrates_no_target() {
    let fixture = Fixture::new(ScriptedRng::constant(HIGH));
    let mut router = fixture.router(InMemoryPersistence::new());
    router
        .state_mut()
        .set_mode(BaseMode::Explore(Scene::Forest));
    router.state_mut().player.level = 3;
    let player = router.state().player.clone();
    let opponents = router.state().opponents.clone();

    let report = press(&mut router, 'a');

    assert_eq!(report.outcome, Outcome::Resolved);
    assert_eq!(keys(&report), [MessageKey::NoTarget]);
    assert_eq!(router.state().player, player);
    assert_eq!(router.state().opponents, opponents);
    assert_eq!(router.state().nonce, 0);
    assert_eq!(router.state().base_mode(), &BaseMode::Explore(Scene::Forest));
    assert!(!report.events.iter().any(|e| matches!(e, Event::Strike(_))));
}

#[test]
fn forced_miss_still_gives_opponents_their_turn() {
    let rng = ScriptedRng::constant(HIGH).force(0, OpponentId::PLAYER_ACTOR, roll::MISS, LOW);
    let fixture = Fixture::new(rng);
    let mut router = fixture.router(InMemoryPersistence::new());
    fight(&fixture, &mut router, &["slime"]);

    let report = press(&mut router, 'a');

    assert_eq!(keys(&report), [MessageKey::PlayerMiss, MessageKey::OpponentHits]);
    assert!(report.events.iter().any(|e| matches!(
        e,
        Event::Strike(outcome) if outcome.was_miss && outcome.damage == 0
    )));
    assert!(report.events.iter().any(|e| matches!(
        e,
        Event::OpponentTurn(OpponentTurn::Attacked(outcome)) if !outcome.was_miss
    )));
    let state = router.state();
    assert_eq!(state.opponents.len(), 1);
    assert_eq!(state.player.hp.current(), 9);
    assert_eq!(state.base_mode(), &BaseMode::Combat);
    assert_eq!(state.nonce, 1);
}

#[test]
fn boost_prompt_times_out_to_the_base_cost() {
    let fixture = Fixture::new(ScriptedRng::constant(HIGH));
    let mut router = fixture.router(InMemoryPersistence::new());
    fight(&fixture, &mut router, &["slime"]);
    let mut session = Session::new(router);

    let report = session.frame(Tick(0), Some(InputKey::Char('m'))).unwrap();
    assert!(report.suppress_actions);

    let report = session.frame(Tick(0), Some(InputKey::Char('2'))).unwrap();
    assert_eq!(report.outcome, Outcome::Pending);
    let state = session.router().state();
    assert_eq!(state.mode().kind(), ModeKind::Prompt);
    assert_eq!(state.base_mode(), &BaseMode::Combat);
    assert_eq!(state.prompt().and_then(|p| p.deadline()), Some(Tick(30)));

    let report = session.frame(Tick(29), None).unwrap();
    assert_eq!(report.outcome, Outcome::Idle);
    assert!(session.router().state().prompt().is_some());

    let report = session.frame(Tick(30), None).unwrap();
    assert_eq!(report.outcome, Outcome::Resolved);
    assert_eq!(
        keys(&report),
        [MessageKey::SpellStrike, MessageKey::OpponentDefeated, MessageKey::Victory]
    );
    assert!(report.events.iter().any(|e| matches!(
        e,
        Event::Spell(cast) if !cast.boosted && cast.mp_spent == 2
    )));
    assert_eq!(report.anim.as_deref(), Some("spark"));

    let state = session.router().state();
    assert_eq!(state.player.mp.current(), 8);
    assert_eq!(state.base_mode(), &BaseMode::Explore(Scene::Forest));
    assert_eq!(session.router().persistence().save_count(), 1);
}

#[test]
fn accepting_the_boost_pays_the_boosted_cost() {
    let fixture = Fixture::new(ScriptedRng::constant(HIGH));
    let mut router = fixture.router(InMemoryPersistence::new());
    fight(&fixture, &mut router, &["troll"]);

    press(&mut router, 'm');
    press(&mut router, '2');
    let report = press(&mut router, 'y');

    assert!(report.events.iter().any(|e| matches!(
        e,
        Event::Spell(cast) if cast.boosted && cast.mp_spent == 6
    )));
    assert_eq!(router.state().player.mp.current(), 4);
    assert_eq!(router.state().base_mode(), &BaseMode::Combat);
}

#[test]
fn boost_is_skipped_when_mp_is_short() {
    let fixture = Fixture::new(ScriptedRng::constant(HIGH));
    let mut router = fixture.router(InMemoryPersistence::new());
    fight(&fixture, &mut router, &["troll"]);
    router.state_mut().player.mp = ResourceMeter::new(5, 10);

    press(&mut router, 'm');
    let report = press(&mut router, '2');

    assert_eq!(report.outcome, Outcome::Resolved);
    assert_eq!(router.state().player.mp.current(), 3);
}

#[test]
fn several_opponents_open_target_selection() {
    let fixture = Fixture::new(ScriptedRng::constant(HIGH));
    let mut router = fixture.router(InMemoryPersistence::new());
    fight(&fixture, &mut router, &["slime", "bat"]);

    let report = press(&mut router, 'a');
    assert_eq!(report.outcome, Outcome::Pending);
    assert_eq!(
        router.state().prompt().and_then(|p| p.highlighted()),
        Some(OpponentId(1))
    );

    let report = router.handle_input(InputKey::Right).unwrap();
    assert_eq!(report.outcome, Outcome::Pending);
    assert_eq!(
        router.state().prompt().and_then(|p| p.highlighted()),
        Some(OpponentId(2))
    );

    let report = router.handle_input(InputKey::Confirm).unwrap();
    assert_eq!(report.outcome, Outcome::Resolved);
    assert_eq!(
        keys(&report),
        [
            MessageKey::PlayerHit,
            MessageKey::OpponentDefeated,
            MessageKey::OpponentHits
        ]
    );
    assert_eq!(report.anim.as_deref(), Some("slash"));
    let names: Vec<&str> = router
        .state()
        .opponents
        .iter()
        .map(|o| o.name.as_str())
        .collect();
    assert_eq!(names, ["Slime"]);
}

#[test]
fn cancelling_target_selection_resumes_combat() {
    let fixture = Fixture::new(ScriptedRng::constant(HIGH));
    let mut router = fixture.router(InMemoryPersistence::new());
    fight(&fixture, &mut router, &["slime", "bat"]);

    press(&mut router, 'a');
    let report = press(&mut router, 'b');

    assert_eq!(report.outcome, Outcome::Cancelled);
    assert_eq!(router.state().mode().kind(), ModeKind::Combat);
    assert_eq!(router.state().nonce, 0);
    assert_eq!(router.state().opponents.len(), 2);
}

#[test]
fn entering_the_forest_rolls_an_encounter() {
    let fixture = Fixture::new(ScriptedRng::constant(HIGH));
    let mut router = fixture.router(InMemoryPersistence::new());
    common::in_town(&mut router);

    let report = press(&mut router, 'f');

    assert_eq!(
        keys(&report),
        [MessageKey::EnterScene, MessageKey::OpponentAppears]
    );
    assert_eq!(router.state().base_mode(), &BaseMode::Combat);
    let names: Vec<&str> = router
        .state()
        .opponents
        .iter()
        .map(|o| o.name.as_str())
        .collect();
    assert_eq!(names, ["Bat"]);
    assert!(report.events.contains(&Event::ModeChanged {
        from: ModeKind::Explore,
        to: ModeKind::Combat,
    }));
}

#[test]
fn victory_levels_up_and_allocation_returns_to_the_forest() {
    let fixture = Fixture::new(ScriptedRng::constant(HIGH));
    let mut router = fixture.router(InMemoryPersistence::new());
    fight(&fixture, &mut router, &["slime"]);
    router.state_mut().player.xp = 49;

    let report = press(&mut router, 'a');
    assert_eq!(
        keys(&report),
        [
            MessageKey::PlayerHit,
            MessageKey::OpponentDefeated,
            MessageKey::Victory,
            MessageKey::LevelUp
        ]
    );
    let state = router.state();
    assert_eq!(state.base_mode(), &BaseMode::LevelUp);
    assert_eq!(state.player.level, 2);
    assert_eq!(state.player.stat_points, 10);
    assert_eq!(state.player.gold, 16);

    let report = press(&mut router, 'h');
    assert_eq!(keys(&report), [MessageKey::StatAllocated]);
    assert_eq!(router.state().player.stat_points, 9);

    let report = press(&mut router, 'b');
    assert_eq!(
        keys(&report),
        [MessageKey::BalancedAllocation, MessageKey::AllocationComplete]
    );
    let player = &router.state().player;
    assert_eq!(player.stat_points, 0);
    assert_eq!(player.hp.maximum(), 14);
    assert_eq!(player.mp.maximum(), 12);
    assert_eq!(player.attack, 12);
    assert_eq!(player.defense, 12);
    assert!(player.is_fully_rested());
    assert_eq!(router.state().base_mode(), &BaseMode::Explore(Scene::Forest));
    assert_eq!(router.persistence().save_count(), 2);
}

#[test]
fn random_allocation_spends_every_point() {
    let fixture = Fixture::new(ScriptedRng::constant(HIGH));
    let mut router = fixture.router(InMemoryPersistence::new());
    let state = router.state_mut();
    state.player.stat_points = 10;
    state.set_mode(BaseMode::LevelUp);

    let report = press(&mut router, 'r');

    assert_eq!(
        keys(&report),
        [MessageKey::RandomAllocation, MessageKey::AllocationComplete]
    );
    let player = &router.state().player;
    let gained = player.hp.maximum() + player.mp.maximum() + player.attack + player.defense - 40;
    assert_eq!(gained, 10);
    assert_eq!(press(&mut router, 'r').outcome, Outcome::Unbound);
}

#[test]
fn defeat_costs_gold_and_wakes_in_town() {
    let rng = ScriptedRng::constant(HIGH).force(0, 1, roll::ACTION, LOW);
    let fixture = Fixture::new(rng);
    let mut router = fixture.router(InMemoryPersistence::new());
    fight(&fixture, &mut router, &["troll"]);
    router.state_mut().player.hp = ResourceMeter::new(1, 10);

    let report = press(&mut router, 'a');

    assert_eq!(
        keys(&report),
        [
            MessageKey::PlayerHit,
            MessageKey::OpponentHits,
            MessageKey::Defeat
        ]
    );
    let state = router.state();
    assert_eq!(state.player.gold, 5);
    assert!(state.player.is_fully_rested());
    assert!(state.opponents.is_empty());
    assert_eq!(state.base_mode(), &BaseMode::Explore(Scene::Town));
    assert_eq!(router.persistence().save_count(), 1);
}

#[test]
fn hesitating_opponents_do_no_damage() {
    let fixture = Fixture::new(ScriptedRng::constant(HIGH));
    let mut router = fixture.router(InMemoryPersistence::new());
    fight(&fixture, &mut router, &["troll"]);

    let report = press(&mut router, 'a');

    assert_eq!(
        keys(&report),
        [MessageKey::PlayerHit, MessageKey::OpponentHesitates]
    );
    assert_eq!(router.state().player.hp.current(), 10);
}

fn any_key() -> impl Strategy<Value = InputKey> {
    prop_oneof![
        prop::sample::select(vec!['a', 'b', 'e', 'f', 'h', 'i', 'm', 'n', 'r', 't', 'y', '1', '2'])
            .prop_map(InputKey::Char),
        Just(InputKey::Left),
        Just(InputKey::Right),
        Just(InputKey::Confirm),
        Just(InputKey::Cancel),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_input_keeps_the_session_consistent(
        inputs in prop::collection::vec((any_key(), 0u64..40), 1..40),
        seed_value in any::<u32>(),
    ) {
        let fixture = Fixture::new(ScriptedRng::constant(seed_value));
        let mut router = fixture.router(InMemoryPersistence::new());
        fight(&fixture, &mut router, &["slime", "bat"]);
        let mut session = Session::new(router);
        let mut now = 0;

        for (key, advance) in inputs {
            now += advance;
            let nonce = session.router().state().nonce;
            session.frame(Tick(now), Some(key)).unwrap();

            let router = session.router();
            let state = router.state();
            prop_assert!(state.nonce >= nonce);
            prop_assert!(state.opponents.len() <= 3);
            prop_assert!(state.player.hp.current() <= state.player.hp.maximum());
            prop_assert!(state.player.mp.current() <= state.player.mp.maximum());
            prop_assert_eq!(
                router.available_actions().unwrap().is_empty(),
                state.prompt().is_some()
            );
            if state.base_mode() == &BaseMode::Combat {
                prop_assert!(!state.opponents.is_empty());
            }
        }
    }
}
