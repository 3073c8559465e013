use assembly_endgame::{
    ai, AiPlayer, GameEngine, GameStatus, LetterSet, Player, Roster, Session, WordList,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_ai_finishes_every_round() {
    let mut rng = SmallRng::seed_from_u64(123);
    let words = WordList::builtin();
    let mut ai = AiPlayer::new(&words);
    let mut session = Session::new(Box::new(words), Roster::standard(), &mut rng).unwrap();

    let mut wins = 0;
    for round in 0..40 {
        if round > 0 {
            session.new_game(&mut rng).unwrap();
        }
        let status = session.play_round(&mut ai, &mut rng).unwrap();
        assert!(matches!(status, GameStatus::Won | GameStatus::Lost));
        assert!(session.engine().guessed_letters().len() <= 26);
        if status == GameStatus::Won {
            wins += 1;
        }
    }
    // With the secret word in its dictionary the AI should win most rounds.
    assert!(wins >= 28, "AI won only {} of 40", wins);
}

#[test]
fn test_ai_never_repeats_a_letter() {
    let mut rng = SmallRng::seed_from_u64(9);
    let words = WordList::new(["zebra"]).unwrap();
    let mut ai = AiPlayer::new(&WordList::builtin());
    let mut session = Session::new(Box::new(words), Roster::standard(), &mut rng).unwrap();
    while !session.engine().is_over() {
        let letter = ai.select_letter(&mut rng, &session).unwrap();
        assert!(!session.engine().guessed_set().contains(letter));
        session.guess(letter, &mut rng).unwrap();
    }
}

#[test]
fn test_matches_pattern() {
    let mut guessed = LetterSet::new();
    guessed.insert('a').unwrap();
    guessed.insert('x').unwrap();
    let pattern = [None, Some('a'), None];
    assert!(ai::matches_pattern("cat", &pattern, &guessed));
    assert!(!ai::matches_pattern("cats", &pattern, &guessed));
    // Blank positions cannot hold a letter that was already guessed.
    assert!(!ai::matches_pattern("aaa", &pattern, &guessed));
    assert!(!ai::matches_pattern("xay", &pattern, &guessed));
}

#[test]
fn test_pdf_only_counts_consistent_candidates() {
    let dictionary: Vec<String> = ["cat", "cot", "dog", "bat"].iter().map(|s| s.to_string()).collect();
    let mut engine = GameEngine::new("cat", Roster::standard()).unwrap();
    engine.guess('t').unwrap();
    engine.guess('o').unwrap();
    let guessed = engine.guessed_set();
    let pdf = ai::calc_pdf(&ai::word_pattern(&engine), &guessed, &dictionary);

    // Candidates are "cat" and "bat": 'a' occurs in both.
    let idx = |c: char| (c as u8 - b'a') as usize;
    assert!((pdf[idx('a')] - 0.5).abs() < 1e-9);
    assert!((pdf[idx('c')] - 0.25).abs() < 1e-9);
    assert!((pdf[idx('b')] - 0.25).abs() < 1e-9);
    assert_eq!(pdf[idx('t')], 0.0);
    assert_eq!(pdf[idx('d')], 0.0);
    assert_eq!(ai::best_letter(&pdf, &guessed), Some('a'));
}

#[test]
fn test_pdf_falls_back_to_letter_frequency() {
    let engine = GameEngine::new("qwerty", Roster::standard()).unwrap();
    let dictionary = vec!["cat".to_string()];
    let guessed = engine.guessed_set();
    let pdf = ai::calc_pdf(&ai::word_pattern(&engine), &guessed, &dictionary);
    let total: f64 = pdf.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(ai::best_letter(&pdf, &guessed), Some('e'));
}

#[test]
fn test_sample_pdf_none_when_alphabet_exhausted() {
    let mut rng = SmallRng::seed_from_u64(0);
    let pdf = [0.0; 26];
    assert_eq!(ai::sample_pdf(&pdf, &LetterSet::full(), 0.5, &mut rng), None);
}

#[test]
fn test_sample_pdf_picks_unguessed_when_pdf_empty() {
    let mut rng = SmallRng::seed_from_u64(0);
    let pdf = [0.0; 26];
    let mut guessed = LetterSet::full();
    guessed = guessed.difference(&LetterSet::from_word("k").unwrap());
    assert_eq!(ai::sample_pdf(&pdf, &guessed, 0.5, &mut rng), Some('k'));
}
