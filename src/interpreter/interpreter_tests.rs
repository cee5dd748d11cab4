#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::models::{Genre, Interpretation, Mood};

    fn interpret(text: &str) -> Interpretation {
        Interpreter::new().interpret(text)
    }

    #[test]
    fn test_single_canonical_phrase_per_mood() {
        // Each phrase belongs to exactly one mood and to no genre
        let cases = [
            ("joyful", Mood::Happy),
            ("heartbroken", Mood::Sad),
            ("furious", Mood::Angry),
            ("affectionate", Mood::Romantic),
            ("serene", Mood::Chill),
            ("pumped", Mood::Energetic),
            ("meh", Mood::Neutral),
        ];

        for (phrase, mood) in cases {
            let result = interpret(&format!("I feel {phrase} today"));
            assert_eq!(result.mood, Some(mood), "phrase '{phrase}'");
        }
    }

    #[test]
    fn test_mood_without_genre_gets_default_genre() {
        for mood in Mood::ALL {
            let result = interpret(mood.as_str());
            assert_eq!(result.mood, Some(mood));
            // "chill" and "romantic" are r&b words too, which is also their default
            assert_eq!(result.genre, Some(mood.default_genre()), "mood {mood}");
        }
    }

    #[test]
    fn test_mood_and_genre_found_together() {
        let result = interpret("Fed up with everything, play some METAL");
        assert_eq!(result.mood, Some(Mood::Angry));
        assert_eq!(result.genre, Some(Genre::Rock));
    }

    #[test]
    fn test_multi_word_mood_phrase() {
        assert_eq!(interpret("I'm in my feels tonight").mood, Some(Mood::Sad));
        assert_eq!(interpret("honestly mad af").mood, Some(Mood::Angry));
        assert_eq!(interpret("i guess whatever").mood, Some(Mood::Neutral));
    }

    #[test]
    fn test_phrase_at_earlier_position_wins() {
        // "not okay" (sad) starts before "okay" (neutral)
        assert_eq!(interpret("not okay at all").mood, Some(Mood::Sad));
        // "slow" (r&b) comes before "dance" (pop)
        let result = interpret("slow dance");
        assert_eq!(result.mood, Some(Mood::Romantic));
        assert_eq!(result.genre, Some(Genre::RnB));
    }

    #[test]
    fn test_shared_words_resolve_to_first_declared_label() {
        assert_eq!(interpret("so excited").mood, Some(Mood::Happy));
        assert_eq!(interpret("vibing").mood, Some(Mood::Happy));
        assert_eq!(interpret("something soft").mood, Some(Mood::Romantic));
        assert_eq!(interpret("let's dance").genre, Some(Genre::Pop));
        assert_eq!(interpret("hard").genre, Some(Genre::Rock));
    }

    #[test]
    fn test_genre_without_mood_gets_reverse_default() {
        let result = interpret("let's dance");
        assert_eq!(result.mood, Some(Mood::Happy));

        let result = interpret("hard");
        assert_eq!(result.mood, Some(Mood::Angry));

        let result = interpret("some techno");
        assert_eq!(result.genre, Some(Genre::Edm));
        assert_eq!(result.mood, Some(Mood::Energetic));
    }

    #[test]
    fn test_genre_with_no_reverse_default_leaves_mood_empty() {
        assert_eq!(
            interpret("some rap please"),
            Interpretation {
                mood: None,
                genre: Some(Genre::Rap),
            }
        );
        assert_eq!(
            interpret("Reggaeton!"),
            Interpretation {
                mood: None,
                genre: Some(Genre::Latin),
            }
        );
    }

    #[test]
    fn test_punctuated_genre_tokens() {
        assert_eq!(interpret("old school hip-hop").genre, Some(Genre::Rap));
        assert_eq!(interpret("R&B, please").genre, Some(Genre::RnB));
    }

    #[test]
    fn test_unknown_or_empty_input_gives_nothing() {
        for text in ["", "   ", "¿Qué tal? 🎧", "\u{0}\t\n", "zzzz qqqq"] {
            assert_eq!(interpret(text), Interpretation::default(), "input {text:?}");
        }
    }

    #[test]
    fn test_interpret_is_repeatable() {
        let interpreter = Interpreter::new();
        let text = "chill lofi beats for a rainy day";
        let first = interpreter.interpret(text);
        for _ in 0..5 {
            assert_eq!(interpreter.interpret(text), first);
        }
    }

    #[test]
    fn test_custom_lexicon_replaces_builtin_words() {
        let lexicons = LexiconSet::from_json(
            r#"{
                "moods": [{"label": "chill", "phrases": ["sunday morning"]}],
                "genres": [{"label": "latin", "phrases": ["bossa nova"]}]
            }"#,
        )
        .unwrap();
        let interpreter = Interpreter::with_lexicon(lexicons);

        let result = interpreter.interpret("Sunday morning bossa nova");
        assert_eq!(result.mood, Some(Mood::Chill));
        assert_eq!(result.genre, Some(Genre::Latin));

        // Built-in words are gone
        assert_eq!(interpreter.interpret("happy rock"), Interpretation::default());
    }

    #[test]
    fn test_words_joined_by_punctuation_are_matched() {
        let result = interpret("sad/lonely");
        assert_eq!(result.mood, Some(Mood::Sad));
        assert_eq!(result.genre, Some(Genre::RnB));

        assert_eq!(interpret("rock,pop").genre, Some(Genre::Rock));
        assert_eq!(interpret("angry+metal").mood, Some(Mood::Angry));
        assert_eq!(interpret("something lovey-dovey").mood, Some(Mood::Romantic));
    }

    #[test]
    fn test_custom_phrases_with_punctuation_match_same_text() {
        let lexicons = LexiconSet::from_json(
            r#"{
                "moods": [{"label": "happy", "phrases": ["what's up?"]}],
                "genres": [{"label": "edm", "phrases": ["drum/bass!"]}]
            }"#,
        )
        .unwrap();
        let interpreter = Interpreter::with_lexicon(lexicons);

        let result = interpreter.interpret("what's up? drum/bass!");
        assert_eq!(result.mood, Some(Mood::Happy));
        assert_eq!(result.genre, Some(Genre::Edm));
    }
}
