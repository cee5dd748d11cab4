use super::lexicon::Lexicon;

/// A lexicon phrase found in the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch<L> {
    pub label: L,
    pub start: usize, // token index
    pub len: usize,   // tokens covered
}

/// Stateless phrase and token lookups over tokenized text
pub struct PhraseMatcher;

impl PhraseMatcher {
    /// Lowercase the text and split it into word tokens.
    /// Splits on whitespace and on any character other than alphanumerics, `-`, `&` and `'`,
    /// so `sad/lonely` gives two tokens while `hip-hop` and `r&b` stay whole.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '-' || c == '&' || c == '\''))
            .map(|word| {
                word.trim_matches(|c: char| !(c.is_alphanumeric() || c == '&' || c == '\''))
                    .to_string()
            })
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Earliest phrase occurrence in `tokens`.
    /// At one position the longest phrase wins, then the first declared label.
    pub fn find_phrase<L: Copy + PartialEq>(
        tokens: &[String],
        lexicon: &Lexicon<L>,
    ) -> Option<PhraseMatch<L>> {
        for start in 0..tokens.len() {
            let rest = &tokens[start..];
            let mut best: Option<PhraseMatch<L>> = None;

            for (label, phrases) in lexicon.entries() {
                for phrase in phrases {
                    let longer = best.is_none_or(|b| phrase.len() > b.len);
                    if longer && rest.starts_with(phrase) {
                        best = Some(PhraseMatch {
                            label: *label,
                            start,
                            len: phrase.len(),
                        });
                    }
                }
            }

            if best.is_some() {
                return best;
            }
        }
        None
    }

    /// Label of the first token that equals a single-word phrase
    pub fn find_token<L: Copy + PartialEq>(tokens: &[String], lexicon: &Lexicon<L>) -> Option<L> {
        tokens.iter().find_map(|token| {
            lexicon.entries().iter().find_map(|(label, phrases)| {
                phrases
                    .iter()
                    .any(|phrase| phrase.len() == 1 && phrase[0] == *token)
                    .then_some(*label)
            })
        })
    }
}
