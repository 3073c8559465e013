use assembly_endgame::{GameEngine, GameError, GameStatus, GuessOutcome, Language, Roster};

fn roster_of(n: usize) -> Roster {
    let langs = Roster::standard().languages()[..n].to_vec();
    Roster::new(langs).unwrap()
}

#[test]
fn test_guessing_every_letter_wins() {
    let mut engine = GameEngine::new("cat", Roster::standard()).unwrap();
    assert_eq!(engine.guess('c').unwrap(), GuessOutcome::Correct);
    assert!(!engine.is_won());
    assert_eq!(engine.guess('a').unwrap(), GuessOutcome::Correct);
    assert!(!engine.is_won());
    assert_eq!(engine.guess('t').unwrap(), GuessOutcome::Correct);
    assert!(engine.is_won());
    assert!(engine.is_over());
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.wrong_guess_count(), 0);
}

#[test]
fn test_repeated_letters_in_word_need_one_guess() {
    let mut engine = GameEngine::new("bubble", Roster::standard()).unwrap();
    for c in ['b', 'u', 'l'] {
        engine.guess(c).unwrap();
    }
    assert!(!engine.is_won());
    engine.guess('e').unwrap();
    assert!(engine.is_won());
}

#[test]
fn test_loss_after_roster_len_minus_one_wrong_guesses() {
    let mut engine = GameEngine::new("cat", roster_of(8)).unwrap();
    let wrong = ['b', 'd', 'e', 'f', 'g', 'h', 'i'];
    for (i, &c) in wrong.iter().enumerate() {
        assert!(!engine.is_lost(), "lost too early before guess {}", i + 1);
        assert_eq!(engine.guess(c).unwrap(), GuessOutcome::Wrong);
    }
    assert_eq!(engine.wrong_guess_count(), 7);
    assert!(engine.is_lost());
    assert_eq!(engine.status(), GameStatus::Lost);
    assert_eq!(engine.attempts_left(), 0);
}

#[test]
fn test_six_wrong_guesses_not_lost_with_roster_of_eight() {
    let mut engine = GameEngine::new("cat", roster_of(8)).unwrap();
    for c in ['b', 'd', 'e', 'f', 'g', 'h'] {
        engine.guess(c).unwrap();
    }
    assert!(!engine.is_lost());
    assert_eq!(engine.attempts_left(), 1);
    assert_eq!(engine.status(), GameStatus::Playing);
}

#[test]
fn test_guess_after_game_over_is_ignored() {
    let mut engine = GameEngine::new("ab", Roster::standard()).unwrap();
    engine.guess('a').unwrap();
    engine.guess('b').unwrap();
    assert!(engine.is_over());

    let before = engine.state();
    assert_eq!(engine.guess('z').unwrap(), GuessOutcome::GameOver);
    assert_eq!(engine.state(), before);
    assert_eq!(engine.wrong_guess_count(), 0);
    assert_eq!(engine.last_guessed_letter(), Some('b'));
}

#[test]
fn test_guess_after_loss_is_ignored() {
    let mut engine = GameEngine::new("cat", roster_of(2)).unwrap();
    assert_eq!(engine.guess('x').unwrap(), GuessOutcome::Wrong);
    assert!(engine.is_lost());
    assert_eq!(engine.guess('c').unwrap(), GuessOutcome::GameOver);
    assert_eq!(engine.guessed_letters(), &['x']);
    assert!(!engine.is_won());
}

#[test]
fn test_repeated_guess_is_noop() {
    let mut engine = GameEngine::new("rust", Roster::standard()).unwrap();
    assert_eq!(engine.guess('q').unwrap(), GuessOutcome::Wrong);
    let once = engine.state();
    assert_eq!(engine.guess('q').unwrap(), GuessOutcome::Repeated);
    assert_eq!(engine.state(), once);
    assert_eq!(engine.wrong_guess_count(), 1);
    assert_eq!(engine.guessed_letters(), &['q']);
}

#[test]
fn test_invalid_letter_rejected_without_change() {
    let mut engine = GameEngine::new("rust", Roster::standard()).unwrap();
    assert_eq!(engine.guess('R'), Err(GameError::InvalidLetter('R')));
    assert_eq!(engine.guess('1'), Err(GameError::InvalidLetter('1')));
    assert_eq!(engine.guess('é'), Err(GameError::InvalidLetter('é')));
    assert!(engine.guessed_letters().is_empty());
}

#[test]
fn test_new_game_resets_state() {
    let mut engine = GameEngine::new("cat", roster_of(3)).unwrap();
    engine.guess('x').unwrap();
    engine.guess('y').unwrap();
    assert!(engine.is_lost());

    engine.new_game("dog").unwrap();
    assert_eq!(engine.word(), "dog");
    assert_eq!(engine.wrong_guess_count(), 0);
    assert!(!engine.is_over());
    assert!(engine.guessed_letters().is_empty());
    assert_eq!(engine.last_guessed_letter(), None);
    assert_eq!(engine.status(), GameStatus::Playing);
}

#[test]
fn test_new_game_rejects_bad_word_and_keeps_round() {
    let mut engine = GameEngine::new("cat", Roster::standard()).unwrap();
    engine.guess('c').unwrap();
    assert_eq!(engine.new_game(""), Err(GameError::EmptyWord));
    assert_eq!(engine.new_game("Dog"), Err(GameError::InvalidWord));
    assert_eq!(engine.word(), "cat");
    assert_eq!(engine.guessed_letters(), &['c']);
}

#[test]
fn test_constructor_validation() {
    assert_eq!(
        GameEngine::new("", Roster::standard()).unwrap_err(),
        GameError::EmptyWord
    );
    assert_eq!(
        GameEngine::new("two words", Roster::standard()).unwrap_err(),
        GameError::InvalidWord
    );
    let one = vec![Language::new("Rust", "#000000", "#FFFFFF")];
    assert_eq!(Roster::new(one).unwrap_err(), GameError::RosterTooShort(1));
}

#[test]
fn test_last_guess_tracking() {
    let mut engine = GameEngine::new("cat", Roster::standard()).unwrap();
    assert_eq!(engine.last_guessed_letter(), None);
    assert!(!engine.is_last_guess_incorrect());

    engine.guess('z').unwrap();
    assert_eq!(engine.last_guessed_letter(), Some('z'));
    assert!(engine.is_last_guess_incorrect());

    engine.guess('a').unwrap();
    assert_eq!(engine.last_guessed_letter(), Some('a'));
    assert!(!engine.is_last_guess_incorrect());

    // A repeat does not move the last guess.
    engine.guess('z').unwrap();
    assert_eq!(engine.last_guessed_letter(), Some('a'));
}

#[test]
fn test_standard_roster_allows_eight_wrong_guesses() {
    let engine = GameEngine::new("cat", Roster::standard()).unwrap();
    assert_eq!(engine.roster().len(), 9);
    assert_eq!(engine.max_wrong_guesses(), 8);
    assert_eq!(engine.attempts_left(), 8);
}
