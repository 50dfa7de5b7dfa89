//! Polarity scoring
//!
//! The scorer is a black box to the rest of the pipeline: text in, a value in
//! [-1.0, 1.0] out. The bundled implementation is lexicon based, averaging
//! the polarity of every recognised word and emoji after applying intensity
//! boosters and negation from the preceding words.

use std::collections::HashMap;

/// Text → polarity in [-1.0, 1.0]
pub trait PolarityScorer: Send + Sync {
    /// Score a piece of text
    fn polarity(&self, text: &str) -> f64;

    /// Scorer name for logging
    fn name(&self) -> &str;
}

/// Lexicon-based scorer for English social-media text
pub struct LexiconScorer {
    /// Word-level polarity
    lexicon: HashMap<String, f64>,
    /// Emoji polarity
    emoji_lexicon: HashMap<char, f64>,
    /// Intensity modifiers (very, extremely, etc.)
    boosters: HashMap<String, f64>,
    /// Negation words
    negations: Vec<String>,
    /// How many words back a modifier reaches
    window: usize,
}

impl LexiconScorer {
    /// Create a scorer with the default English lexicons
    pub fn new() -> Self {
        let mut scorer = Self {
            lexicon: HashMap::new(),
            emoji_lexicon: HashMap::new(),
            boosters: HashMap::new(),
            negations: Vec::new(),
            window: 3,
        };
        scorer.init_lexicons();
        scorer
    }

    /// Add or override a word's polarity (clamped to [-1.0, 1.0])
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.lexicon
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    fn init_lexicons(&mut self) {
        let positive_words = [
            ("good", 0.7),
            ("great", 0.8),
            ("excellent", 1.0),
            ("amazing", 0.6),
            ("awesome", 1.0),
            ("fantastic", 0.4),
            ("wonderful", 1.0),
            ("best", 1.0),
            ("better", 0.5),
            ("love", 0.5),
            ("loving", 0.6),
            ("loved", 0.7),
            ("like", 0.2),
            ("nice", 0.6),
            ("happy", 0.8),
            ("glad", 0.5),
            ("fun", 0.3),
            ("beautiful", 0.85),
            ("cool", 0.35),
            ("perfect", 1.0),
            ("brilliant", 0.9),
            ("strong", 0.43),
            ("win", 0.8),
            ("winning", 0.5),
            ("success", 0.3),
            ("successful", 0.75),
            ("interesting", 0.5),
            ("exciting", 0.3),
            ("excited", 0.4),
            ("impressive", 1.0),
            ("favorite", 0.5),
            ("thanks", 0.2),
            ("thank", 0.2),
            ("helpful", 0.3),
            ("positive", 0.23),
            ("free", 0.4),
            ("easy", 0.43),
            ("fast", 0.2),
            ("new", 0.14),
            ("right", 0.29),
        ];

        let negative_words = [
            ("bad", -0.7),
            ("terrible", -1.0),
            ("awful", -1.0),
            ("horrible", -1.0),
            ("poor", -0.4),
            ("worst", -1.0),
            ("worse", -0.4),
            ("hate", -0.8),
            ("hated", -0.9),
            ("dislike", -0.4),
            ("sad", -0.5),
            ("angry", -0.5),
            ("ugly", -0.7),
            ("boring", -1.0),
            ("stupid", -0.8),
            ("annoying", -0.8),
            ("disappointing", -0.6),
            ("disappointed", -0.75),
            ("wrong", -0.5),
            ("weak", -0.375),
            ("lose", -0.4),
            ("losing", -0.4),
            ("lost", -0.3),
            ("fail", -0.5),
            ("failed", -0.5),
            ("failure", -0.32),
            ("broken", -0.4),
            ("slow", -0.3),
            ("difficult", -0.5),
            ("hard", -0.29),
            ("negative", -0.3),
            ("scary", -0.5),
            ("crazy", -0.6),
            ("sick", -0.71),
            ("dead", -0.2),
            ("crash", -0.6),
            ("scam", -0.9),
            ("fake", -0.5),
        ];

        for (word, score) in positive_words.iter().chain(negative_words.iter()) {
            self.lexicon.insert(word.to_string(), *score);
        }

        let emojis = [
            ('😀', 0.6),
            ('😂', 0.5),
            ('😍', 0.8),
            ('🙂', 0.4),
            ('👍', 0.5),
            ('❤', 0.6),
            ('🎉', 0.6),
            ('🔥', 0.4),
            ('🚀', 0.6),
            ('😢', -0.5),
            ('😭', -0.6),
            ('😡', -0.8),
            ('👎', -0.5),
            ('💔', -0.6),
            ('😱', -0.5),
        ];

        for (emoji, score) in emojis {
            self.emoji_lexicon.insert(emoji, score);
        }

        let boosters = [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.5),
            ("absolutely", 1.4),
            ("completely", 1.4),
            ("totally", 1.3),
            ("so", 1.2),
            ("super", 1.3),
            ("incredibly", 1.4),
            ("highly", 1.3),
            ("quite", 1.1),
            ("slightly", 0.7),
            ("somewhat", 0.8),
        ];

        for (word, factor) in boosters {
            self.boosters.insert(word.to_string(), factor);
        }

        self.negations = [
            "not", "no", "never", "none", "neither", "nobody", "nothing", "nowhere", "isn't",
            "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't", "doesn't", "don't",
            "didn't", "won't", "wouldn't", "can't", "cannot", "couldn't", "shouldn't",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
    }

    /// Strip punctuation but keep apostrophes for negations
    fn clean_word(&self, word: &str) -> String {
        word.chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'')
            .collect::<String>()
            .to_lowercase()
    }

    /// Apply boosters and negations from up to `window` preceding words
    fn apply_modifiers(&self, words: &[String], index: usize, mut score: f64) -> f64 {
        let start = index.saturating_sub(self.window);

        for prev_word in &words[start..index] {
            if let Some(&factor) = self.boosters.get(prev_word) {
                score *= factor;
            }
            if self.negations.contains(prev_word) {
                score *= -0.5; // flip and dampen
            }
        }

        score.clamp(-1.0, 1.0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores: Vec<f64> = text
            .chars()
            .filter_map(|c| self.emoji_lexicon.get(&c).copied())
            .collect();

        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| self.clean_word(w))
            .filter(|w| !w.is_empty())
            .collect();

        for (i, word) in words.iter().enumerate() {
            if let Some(&score) = self.lexicon.get(word) {
                scores.push(self.apply_modifiers(&words, i, score));
            }
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}
