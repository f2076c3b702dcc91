use proptest::prelude::*;
use wordle_grid::core::{Feedback, ScoringMode, Word, evaluate};
use wordle_grid::game::{Cursor, GameConfig, GameController, KeyOutcome, Phase};
use wordle_grid::wordlists::{DICTIONARY, Dictionary};

fn new_game() -> GameController {
    GameController::new(GameConfig::reference()).unwrap()
}

fn type_word(game: &mut GameController, word: &str) -> KeyOutcome {
    let mut last = KeyOutcome::Ignored;
    for ch in word.chars() {
        last = game.handle_key(&ch.to_string());
    }
    last
}

/// Raw key identifiers: mostly single letters, plus digits and named keys
fn key_stream() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            8 => "[a-zA-Z]",
            1 => "[0-9]",
            1 => prop::sample::select(vec!["Enter", "Backspace", "Shift", " "]).prop_map(String::from),
        ],
        0..80,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Whatever was typed, reset returns to the initial state
    #[test]
    fn reset_restores_blank_game(keys in key_stream()) {
        let mut game = new_game();
        for key in &keys {
            game.handle_key(key);
        }
        game.reset();

        prop_assert!(game.grid().is_blank());
        prop_assert_eq!(game.grid().len(), 30);
        prop_assert_eq!(game.cursor(), Cursor::default());
        prop_assert!(game.store().guessed_words().is_empty());
        prop_assert!(!game.store().is_solved());
        prop_assert_eq!(game.phase(), Phase::Idle);
    }

    /// A word scored against itself is all green in both modes
    #[test]
    fn exact_match_is_all_green(target in "[A-Z]{5}", strict in any::<bool>()) {
        let word = Word::new(&target).unwrap();
        let evaluation = evaluate(&word, &word, ScoringMode::from_strict(strict));
        prop_assert!(evaluation.is_exact_match());
        prop_assert!(evaluation.classes().iter().all(|&c| c == Feedback::Green));
    }

    /// Strict scoring never awards more than lenient scoring
    #[test]
    fn strict_never_exceeds_lenient(guess in "[A-E]{5}", target in "[A-E]{5}") {
        let guess = Word::new(&guess).unwrap();
        let target = Word::new(&target).unwrap();
        let lenient = evaluate(&guess, &target, ScoringMode::Lenient);
        let strict = evaluate(&guess, &target, ScoringMode::Strict);

        prop_assert_eq!(lenient.count_greens(), strict.count_greens());
        prop_assert!(strict.count_yellows() <= lenient.count_yellows());
        prop_assert_eq!(lenient.is_exact_match(), strict.is_exact_match());
    }

    /// Unknown words never advance the row or touch the guess list
    #[test]
    fn unknown_word_is_idempotent(word in "[A-Z]{5}", prefix in 0usize..5) {
        prop_assume!(!Dictionary::builtin().contains(&word));

        let mut game = new_game();
        for valid in &DICTIONARY[..prefix] {
            if *valid != "GRIND" {
                type_word(&mut game, valid);
            }
        }
        let row_before = game.cursor().row;
        let guesses_before = game.store().guessed_words().to_vec();

        let outcome = type_word(&mut game, &word);

        let is_rejected = matches!(outcome, KeyOutcome::Rejected { .. });
        prop_assert!(is_rejected);
        prop_assert_eq!(game.cursor(), Cursor { row: row_before, col: 0 });
        prop_assert_eq!(game.store().guessed_words(), guesses_before.as_slice());
        prop_assert!(game.grid().row(row_before).unwrap().iter().all(|c| c.is_empty()));
    }

    /// Any fresh dictionary word is scored as soon as its last letter lands
    #[test]
    fn dictionary_word_is_scored(word in prop::sample::select(DICTIONARY.to_vec())) {
        let mut game = new_game();
        let outcome = type_word(&mut game, &word.to_lowercase());

        let is_final = matches!(outcome, KeyOutcome::Scored { row: 0, .. } | KeyOutcome::Won { row: 0, .. });
        prop_assert!(is_final);
        prop_assert!(game.grid().is_row_scored(0));
        prop_assert_eq!(game.grid().row_text(0), word);
    }

    /// After a win the grid is frozen
    #[test]
    fn won_game_ignores_keys(keys in key_stream()) {
        let mut game = new_game();
        type_word(&mut game, "GRIND");
        let frozen = game.grid().clone();

        for key in &keys {
            prop_assert_eq!(game.handle_key(key), KeyOutcome::Ignored);
        }
        prop_assert_eq!(game.grid(), &frozen);
        prop_assert_eq!(game.phase(), Phase::Won);
    }

    /// Cursor stays in bounds while the game is running
    #[test]
    fn cursor_in_bounds_while_idle(keys in key_stream()) {
        let mut game = new_game();
        for key in &keys {
            game.handle_key(key);
            if game.phase() == Phase::Idle {
                prop_assert!(game.cursor().row < 6);
                prop_assert!(game.cursor().col < 5);
            }
            prop_assert_ne!(game.phase(), Phase::RowSubmitted(game.cursor().row));
        }
    }
}

#[test]
fn invalid_sixth_guess_keeps_game_open() {
    let mut game = new_game();
    for word in ["ROUND", "HOCUS", "ARGUE", "SWILL", "BOUND"] {
        type_word(&mut game, word);
    }
    type_word(&mut game, "ZZZZZ");
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.cursor().row, 5);

    type_word(&mut game, "PLANT");
    assert_eq!(game.phase(), Phase::Exhausted);
}
