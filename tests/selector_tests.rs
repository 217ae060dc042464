use snowman_player::simulate::reveal;
use snowman_player::{
    load_dictionary, Alphabet, ConfigError, CorpusIndex, EntropySelector, GameConfig,
    PatternMatcher, PlayerError, SelectorState,
};

fn get_test_index() -> CorpusIndex {
    CorpusIndex::build(&["cat", "car", "can", "cap"], GameConfig::default()).unwrap()
}

#[test]
fn test_selector_creation() {
    let index = get_test_index();
    let selector = EntropySelector::new(&index);
    assert_eq!(selector.state(), SelectorState::Done);
    assert_eq!(selector.remaining_count(), 0);
}

#[test]
fn test_start_word_seeds_candidates() {
    let index = get_test_index();
    let mut selector = EntropySelector::new(&index);
    selector.start_word(3).unwrap();

    assert_eq!(selector.state(), SelectorState::Fresh);
    assert_eq!(selector.word_length(), 3);
    assert_eq!(
        selector.candidates().collect::<Vec<_>>(),
        vec!["cat", "car", "can", "cap"]
    );
}

#[test]
fn test_first_guess_is_opening_guess() {
    let index = get_test_index();
    let mut selector = EntropySelector::new(&index);
    selector.start_word(3).unwrap();

    assert_eq!(selector.next_guess("***", "").unwrap(), 'a');
    assert_eq!(selector.state(), SelectorState::InProgress);
    assert_eq!(selector.turn(), 1);
    // The opening guess does not filter.
    assert_eq!(selector.remaining_count(), 4);
}

#[test]
fn test_letter_in_every_candidate_is_chosen() {
    let index = get_test_index();
    let mut selector = EntropySelector::new(&index);
    selector.start_word(3).unwrap();
    selector.next_guess("***", "").unwrap();

    assert_eq!(selector.next_guess("c**", "c").unwrap(), 'a');
    assert_eq!(selector.remaining_count(), 4);
}

#[test]
fn test_infinite_score_beats_higher_entropy() {
    // 'b' splits the candidates three ways, but 'z' is in all of them.
    let index = CorpusIndex::build(&["bbz", "bzb", "zbb", "zaa"], GameConfig::default()).unwrap();
    let mut selector = EntropySelector::new(&index);
    selector.resume_word(3).unwrap();

    assert_eq!(selector.next_guess("***", "").unwrap(), 'z');

    let analysis = selector.letter_analysis();
    assert_eq!(analysis[0].letter, 'z');
    assert_eq!(analysis[0].score, f64::INFINITY);
    assert_eq!(analysis[1].letter, 'b');
    assert!((analysis[1].score - 3.375).abs() < 1e-9);
}

#[test]
fn test_ties_break_by_alphabet_order() {
    let index = get_test_index();
    let mut selector = EntropySelector::new(&index);
    selector.resume_word(3).unwrap();

    assert_eq!(selector.next_guess("ca*", "ac").unwrap(), 'n');

    let analysis = selector.letter_analysis();
    let letters: Vec<char> = analysis.iter().map(|a| a.letter).collect();
    assert_eq!(letters, vec!['n', 'p', 'r', 't']);
    for a in &analysis {
        assert_eq!(a.score, analysis[0].score);
        assert_eq!(a.occurrences, 1);
        assert_eq!(a.non_occurrences, 3);
    }
}

#[test]
fn test_misses_narrow_candidates() {
    let index = get_test_index();
    let mut selector = EntropySelector::new(&index);
    selector.resume_word(3).unwrap();

    assert_eq!(selector.next_guess("ca*", "acn").unwrap(), 'p');
    assert_eq!(
        selector.candidates().collect::<Vec<_>>(),
        vec!["cat", "car", "cap"]
    );

    assert_eq!(selector.next_guess("ca*", "acnp").unwrap(), 'r');
    assert_eq!(selector.remaining_count(), 2);

    assert_eq!(selector.next_guess("ca*", "acnpr").unwrap(), 't');
    assert_eq!(selector.candidates().collect::<Vec<_>>(), vec!["cat"]);
}

#[test]
fn test_turn_stats_are_reset_each_turn() {
    let index = get_test_index();
    let alphabet = index.config().alphabet.clone();
    let mut selector = EntropySelector::new(&index);
    selector.resume_word(3).unwrap();

    selector.next_guess("ca*", "ac").unwrap();
    let n = alphabet.index_of('n').unwrap();
    let c = alphabet.index_of('c').unwrap();
    assert_eq!(selector.stats().occurrence(c), 4);
    assert_eq!(selector.stats().occurrence(n), 1);

    selector.next_guess("ca*", "acn").unwrap();
    assert_eq!(selector.stats().occurrence(c), 3);
    assert_eq!(selector.stats().occurrence(n), 0);
    assert_eq!(selector.stats().non_occurrence(n), 3);
    assert_eq!(selector.stats().score(n), None);
    assert_eq!(selector.stats().score(c), None);
}

#[test]
fn test_opening_guess_skipped_when_already_guessed() {
    let index = get_test_index();
    let mut selector = EntropySelector::new(&index);
    selector.start_word(3).unwrap();

    assert_eq!(selector.next_guess("*a*", "a").unwrap(), 'c');
    assert_eq!(selector.state(), SelectorState::InProgress);
}

#[test]
fn test_single_candidate() {
    let index = CorpusIndex::build(&["dog"], GameConfig::default()).unwrap();
    let mut selector = EntropySelector::new(&index);
    selector.start_word(3).unwrap();

    assert_eq!(selector.next_guess("***", "").unwrap(), 'd');
    assert_eq!(selector.next_guess("d**", "d").unwrap(), 'g');
    assert_eq!(selector.next_guess("d*g", "dg").unwrap(), 'o');
}

#[test]
fn test_never_repeats_a_guess() {
    let words = load_dictionary();
    let index = CorpusIndex::build(&words, GameConfig::default()).unwrap();
    let wildcard = index.config().wildcard;

    for target in index.words_of_length(5).take(40) {
        let mut selector = EntropySelector::new(&index);
        selector.start_word(5).unwrap();
        let mut guessed = String::new();
        let mut pattern = reveal(target, &guessed, wildcard);
        while pattern.contains(wildcard) {
            let letter = selector.next_guess(&pattern, &guessed).unwrap();
            assert!(!guessed.contains(letter), "{} guessed twice for {}", letter, target);
            guessed.push(letter);
            pattern = reveal(target, &guessed, wildcard);
        }
    }
}

#[test]
fn test_filtering_is_monotonic_and_consistent() {
    let words = load_dictionary();
    let index = CorpusIndex::build(&words, GameConfig::default()).unwrap();
    let config = index.config().clone();
    let mut selector = EntropySelector::new(&index);
    selector.resume_word(5).unwrap();

    let turns = [("*****", "s"), ("****e", "se"), ("*r**e", "ser"), ("*r**e", "sera")];
    let mut before = selector.remaining_count();
    for (pattern, guessed) in turns {
        assert!(
            selector.next_guess(pattern, guessed).is_ok(),
            "no guess for {} with {}",
            pattern,
            guessed
        );
        let after = selector.remaining_count();
        assert!(after <= before);
        before = after;

        let matcher = PatternMatcher::compile(pattern, guessed, 5, &config).unwrap();
        let kept: Vec<&str> = selector.candidates().collect();
        for word in &kept {
            assert!(matcher.matches_str(word), "{} kept for {}", word, pattern);
        }
        let expected = index
            .words_of_length(5)
            .filter(|w| matcher.matches_str(w))
            .count();
        assert_eq!(kept.len(), expected);
    }
}

#[test]
fn test_deterministic() {
    let words = load_dictionary();
    let index = CorpusIndex::build(&words, GameConfig::default()).unwrap();

    let mut first = EntropySelector::new(&index);
    let mut second = EntropySelector::new(&index);
    first.resume_word(6).unwrap();
    second.resume_word(6).unwrap();

    for (pattern, guessed) in [("******", "e"), ("****e*", "eo")] {
        assert_eq!(
            first.next_guess(pattern, guessed).unwrap(),
            second.next_guess(pattern, guessed).unwrap()
        );
    }
}

#[test]
fn test_guess_without_word() {
    let index = get_test_index();
    let mut selector = EntropySelector::new(&index);
    assert_eq!(selector.next_guess("***", ""), Err(PlayerError::NoActiveWord));

    selector.start_word(3).unwrap();
    selector.next_guess("***", "").unwrap();
    selector.finish_word();
    assert_eq!(selector.state(), SelectorState::Done);
    assert_eq!(selector.next_guess("*a*", "a"), Err(PlayerError::NoActiveWord));
}

#[test]
fn test_length_out_of_range() {
    let index = get_test_index();
    let mut selector = EntropySelector::new(&index);
    assert_eq!(
        selector.start_word(30),
        Err(PlayerError::Configuration(ConfigError::LengthOutOfRange {
            length: 30,
            min: 1,
            max: 20,
        }))
    );
}

#[test]
fn test_exhausted_candidates() {
    let index = get_test_index();
    let mut selector = EntropySelector::new(&index);
    selector.resume_word(3).unwrap();
    assert_eq!(
        selector.next_guess("zzz", "z"),
        Err(PlayerError::ExhaustedCandidates)
    );

    // No words of this length at all.
    selector.start_word(5).unwrap();
    assert_eq!(
        selector.next_guess("*****", ""),
        Err(PlayerError::ExhaustedCandidates)
    );
}

#[test]
fn test_all_letters_exhausted() {
    let config = GameConfig::default().with_alphabet(Alphabet::new("abc").unwrap());
    let index = CorpusIndex::build(&["cab"], config).unwrap();
    let mut selector = EntropySelector::new(&index);
    selector.resume_word(3).unwrap();
    assert_eq!(
        selector.next_guess("cab", "abc"),
        Err(PlayerError::AllLettersExhausted)
    );

    // Only letters absent from every candidate are left.
    let index = CorpusIndex::build(&["cat"], GameConfig::default()).unwrap();
    let mut selector = EntropySelector::new(&index);
    selector.resume_word(3).unwrap();
    assert_eq!(
        selector.next_guess("cat", "act"),
        Err(PlayerError::AllLettersExhausted)
    );
}

#[test]
fn test_invalid_pattern_length() {
    let index = get_test_index();
    let mut selector = EntropySelector::new(&index);
    selector.resume_word(3).unwrap();
    assert!(matches!(
        selector.next_guess("c***", "c"),
        Err(PlayerError::InvalidPattern { .. })
    ));
}

/// Words symmetric under swapping 'a' and 'b': each letter splits them into
/// groups of 1, 2, 3, 5 and 7 words, so both score exactly the same.
fn mirrored_words() -> Vec<String> {
    let mut fillers = "cdefghijklmnopqrst".chars();
    let mut words = Vec::new();
    for (position, size) in [(0, 1), (1, 2), (2, 3), (3, 5), (4, 7)] {
        for _ in 0..size {
            let filler = fillers.next().unwrap();
            for letter in ['a', 'b'] {
                let word: String = (0..5)
                    .map(|i| if i == position { letter } else { filler })
                    .collect();
                words.push(word);
            }
        }
    }
    words
}

#[test]
fn test_equal_scores_always_pick_earlier_letter() {
    let index = CorpusIndex::build(&mirrored_words(), GameConfig::default()).unwrap();

    for _ in 0..200 {
        let mut selector = EntropySelector::new(&index);
        selector.resume_word(5).unwrap();
        assert_eq!(selector.next_guess("*****", "").unwrap(), 'a');

        let analysis = selector.letter_analysis();
        assert_eq!(analysis[0].letter, 'a');
        assert_eq!(analysis[1].letter, 'b');
        assert_eq!(analysis[0].score, analysis[1].score);
    }
}
