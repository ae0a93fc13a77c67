//! Polarity scoring.
//!
//! The HTTP layer only depends on [`PolarityAnalyzer`]; [`LexiconAnalyzer`] is the
//! in-process implementation used by the server.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("polarity score is not a finite number: {0}")]
    NonFinite(f64),

    #[error("analyzer failed: {0}")]
    Analyzer(String),
}

/// Turns raw text into a polarity score in `[-1.0, 1.0]`.
pub trait PolarityAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64, AnalysisError>;
}

/// Multiplier applied to a word preceded by a negation.
const NEGATION_FACTOR: f64 = -0.5;

/// How many tokens back a negation still applies.
const NEGATION_WINDOW: usize = 2;

/// Averages the polarity of every lexicon word found in the text, adjusting each one
/// for a directly preceding intensifier and for nearby negations.
pub struct LexiconAnalyzer {
    lexicon: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: Self::build_lexicon(),
            intensifiers: Self::build_intensifiers(),
            negations: Self::build_negations(),
        }
    }

    pub fn with_words(mut self, words: impl IntoIterator<Item = (&'static str, f64)>) -> Self {
        for (word, score) in words {
            self.lexicon.insert(word, score.clamp(-1.0, 1.0));
        }
        self
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .replace(['\u{2018}', '\u{2019}'], "'")
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|token| token.trim_matches('\''))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn assess(&self, tokens: &[String], index: usize, mut score: f64) -> f64 {
        if index > 0 {
            if let Some(&factor) = self.intensifiers.get(tokens[index - 1].as_str()) {
                score *= factor;
            }
        }

        let start = index.saturating_sub(NEGATION_WINDOW);
        if tokens[start..index]
            .iter()
            .any(|prev| self.negations.contains(prev.as_str()))
        {
            score *= NEGATION_FACTOR;
        }

        score
    }

    fn build_lexicon() -> HashMap<&'static str, f64> {
        [
            // Positive
            ("love", 0.5),
            ("loved", 0.7),
            ("lovely", 0.5),
            ("good", 0.7),
            ("great", 0.8),
            ("excellent", 1.0),
            ("amazing", 0.6),
            ("awesome", 1.0),
            ("fantastic", 0.4),
            ("wonderful", 1.0),
            ("perfect", 1.0),
            ("best", 1.0),
            ("better", 0.5),
            ("nice", 0.6),
            ("happy", 0.8),
            ("glad", 0.5),
            ("beautiful", 0.85),
            ("brilliant", 0.9),
            ("fun", 0.3),
            ("funny", 0.25),
            ("cool", 0.35),
            ("enjoy", 0.4),
            ("enjoyed", 0.4),
            ("fine", 0.4),
            ("pleasant", 0.73),
            ("positive", 0.23),
            ("impressive", 1.0),
            ("interesting", 0.5),
            ("helpful", 0.5),
            ("useful", 0.3),
            ("favorite", 0.5),
            ("incredible", 0.9),
            ("superb", 1.0),
            ("delightful", 1.0),
            ("exciting", 0.3),
            ("excited", 0.38),
            ("thanks", 0.2),
            ("correct", 0.2),
            ("easy", 0.43),
            ("bueno", 0.7),
            ("genial", 0.8),
            ("feliz", 0.8),
            ("excelente", 1.0),
            // Negative
            ("hate", -0.8),
            ("hated", -0.9),
            ("bad", -0.7),
            ("worse", -0.4),
            ("worst", -1.0),
            ("terrible", -1.0),
            ("awful", -1.0),
            ("horrible", -1.0),
            ("poor", -0.4),
            ("sad", -0.5),
            ("angry", -0.5),
            ("ugly", -0.7),
            ("boring", -1.0),
            ("stupid", -0.8),
            ("wrong", -0.5),
            ("disappointing", -0.6),
            ("disappointed", -0.75),
            ("annoying", -0.8),
            ("useless", -0.5),
            ("broken", -0.4),
            ("painful", -0.7),
            ("nasty", -1.0),
            ("disgusting", -1.0),
            ("pathetic", -1.0),
            ("weak", -0.375),
            ("difficult", -0.5),
            ("hard", -0.29),
            ("negative", -0.3),
            ("sick", -0.71),
            ("scary", -0.5),
            ("malo", -0.7),
            ("triste", -0.5),
            ("odio", -0.8),
        ]
        .into_iter()
        .collect()
    }

    fn build_intensifiers() -> HashMap<&'static str, f64> {
        [
            ("very", 1.3),
            ("really", 1.3),
            ("so", 1.2),
            ("too", 1.2),
            ("extremely", 1.5),
            ("incredibly", 1.4),
            ("absolutely", 1.4),
            ("totally", 1.3),
            ("completely", 1.4),
            ("super", 1.3),
            ("quite", 1.1),
            ("pretty", 1.1),
            ("most", 1.3),
            ("muy", 1.3),
        ]
        .into_iter()
        .collect()
    }

    fn build_negations() -> HashSet<&'static str> {
        [
            "not", "no", "never", "nothing", "nobody", "neither", "nor", "none", "isn't",
            "aren't", "wasn't", "weren't", "don't", "doesn't", "didn't", "won't", "wouldn't",
            "can't", "cannot", "couldn't", "shouldn't", "hardly", "nunca",
        ]
        .into_iter()
        .collect()
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> Result<f64, AnalysisError> {
        let tokens = Self::tokenize(text);

        let assessments: Vec<f64> = tokens
            .iter()
            .enumerate()
            .filter_map(|(i, token)| {
                self.lexicon
                    .get(token.as_str())
                    .map(|&score| self.assess(&tokens, i, score))
            })
            .collect();

        if assessments.is_empty() {
            return Ok(0.0);
        }

        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        if !mean.is_finite() {
            return Err(AnalysisError::NonFinite(mean));
        }

        Ok(mean.clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconAnalyzer::new().polarity(text).unwrap()
    }

    #[test]
    fn scores_simple_sentences() {
        assert!(score("I love this!") > 0.0);
        assert!(score("I hate this.") < 0.0);
        assert_eq!(score("I love this!"), 0.5);
    }

    #[test]
    fn empty_and_neutral_text_score_exactly_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   \n\t"), 0.0);
        assert_eq!(score("The meeting is on Tuesday at noon."), 0.0);
        assert_eq!(score("!!! ??? ..."), 0.0);
    }

    #[test]
    fn balanced_words_cancel_out() {
        assert_eq!(score("good and bad"), 0.0);
    }

    #[test]
    fn intensifier_scales_next_word() {
        let plain = score("good");
        let boosted = score("very good");
        assert!(boosted > plain);
        assert!((boosted - 0.91).abs() < 1e-9);
    }

    #[test]
    fn negation_flips_and_dampens() {
        assert!((score("this is not good") + 0.35).abs() < 1e-9);
        assert!(score("I don't hate it") > 0.0);
        // Out of range: three tokens back.
        assert!(score("not that it is good") > 0.0);
    }

    #[test]
    fn typographic_apostrophes_keep_negations() {
        assert_eq!(score("I don\u{2019}t hate it"), score("I don't hate it"));
        assert_eq!(score("it isn\u{2018}t good"), score("it isn't good"));
        assert!(score("I don\u{2019}t hate it") > 0.0);
    }

    #[test]
    fn result_is_clamped() {
        assert_eq!(score("absolutely perfect"), 1.0);
        assert_eq!(score("extremely awful"), -1.0);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        assert_eq!(score("GREAT!!!"), score("great"));
        assert_eq!(score("'great'"), score("great"));
    }

    #[test]
    fn custom_words_extend_lexicon() {
        let analyzer = LexiconAnalyzer::new().with_words([("rusty", -0.4), ("ferris", 3.0)]);
        assert_eq!(analyzer.polarity("rusty").unwrap(), -0.4);
        assert_eq!(analyzer.polarity("ferris").unwrap(), 1.0);
    }

    #[test]
    fn deterministic() {
        let analyzer = LexiconAnalyzer::new();
        let text = "Not bad, really great and a bit boring";
        assert_eq!(analyzer.polarity(text).unwrap(), analyzer.polarity(text).unwrap());
    }
}
