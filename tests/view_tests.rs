use assembly_endgame::{GameEngine, KeyState, Roster, StatusBanner};

#[test]
fn test_letter_slots_reveal_guessed_letters() {
    let mut engine = GameEngine::new("hello", Roster::standard()).unwrap();
    engine.guess('l').unwrap();
    engine.guess('z').unwrap();
    let shown: Vec<Option<char>> = engine.letter_slots().iter().map(|s| s.display()).collect();
    assert_eq!(shown, vec![None, None, Some('L'), Some('L'), None]);
    assert!(engine.letter_slots().iter().all(|s| !s.missed));
}

#[test]
fn test_letter_slots_full_reveal_on_loss() {
    let roster = Roster::new(Roster::standard().languages()[..3].to_vec()).unwrap();
    let mut engine = GameEngine::new("hello", roster).unwrap();
    engine.guess('h').unwrap();
    engine.guess('x').unwrap();
    engine.guess('y').unwrap();
    assert!(engine.is_lost());

    let slots = engine.letter_slots();
    let shown: String = slots.iter().filter_map(|s| s.display()).collect();
    assert_eq!(shown, "HELLO");
    assert!(!slots[0].missed);
    assert!(slots[1..].iter().all(|s| s.missed));
}

#[test]
fn test_chips_eliminated_in_roster_order() {
    let mut engine = GameEngine::new("rust", Roster::standard()).unwrap();
    engine.guess('a').unwrap();
    engine.guess('r').unwrap();
    engine.guess('b').unwrap();
    let chips = engine.chips();
    assert_eq!(chips.len(), 9);
    let eliminated: Vec<&str> = chips
        .iter()
        .filter(|c| c.eliminated)
        .map(|c| c.language.name.as_str())
        .collect();
    assert_eq!(eliminated, vec!["HTML", "CSS"]);
}

#[test]
fn test_keyboard_states() {
    let mut engine = GameEngine::new("rust", Roster::standard()).unwrap();
    engine.guess('r').unwrap();
    engine.guess('q').unwrap();
    let keys = engine.keyboard();
    assert_eq!(keys.len(), 26);
    assert_eq!(keys[0].letter, 'a');
    assert_eq!(keys[25].letter, 'z');
    let r = keys.iter().find(|k| k.letter == 'r').unwrap();
    let q = keys.iter().find(|k| k.letter == 'q').unwrap();
    let s = keys.iter().find(|k| k.letter == 's').unwrap();
    assert_eq!(r.state, KeyState::Correct);
    assert_eq!(q.state, KeyState::Wrong);
    assert_eq!(s.state, KeyState::Unused);
    assert!(r.guessed && q.guessed && !s.guessed);
    assert!(keys.iter().all(|k| !k.disabled));
}

#[test]
fn test_keyboard_disabled_when_over() {
    let mut engine = GameEngine::new("go", Roster::standard()).unwrap();
    engine.guess('g').unwrap();
    engine.guess('o').unwrap();
    assert!(engine.keyboard().iter().all(|k| k.disabled));
}

#[test]
fn test_banner_transitions() {
    let mut engine = GameEngine::new("go", Roster::standard()).unwrap();
    assert_eq!(engine.banner(), StatusBanner::Empty);

    engine.guess('x').unwrap();
    match engine.banner() {
        StatusBanner::Farewell(lang) => assert_eq!(lang.name, "HTML"),
        other => panic!("expected farewell, got {:?}", other),
    }

    engine.guess('y').unwrap();
    match engine.banner() {
        StatusBanner::Farewell(lang) => assert_eq!(lang.name, "CSS"),
        other => panic!("expected farewell, got {:?}", other),
    }

    engine.guess('g').unwrap();
    assert_eq!(engine.banner(), StatusBanner::Empty);

    engine.guess('o').unwrap();
    assert_eq!(engine.banner(), StatusBanner::Won);
}

#[test]
fn test_banner_lost_not_farewell() {
    let roster = Roster::new(Roster::standard().languages()[..2].to_vec()).unwrap();
    let mut engine = GameEngine::new("go", roster).unwrap();
    engine.guess('x').unwrap();
    assert_eq!(engine.banner(), StatusBanner::Lost);
    assert_eq!(engine.last_eliminated().map(|l| l.name.as_str()), Some("HTML"));
}
