//! Local, lexicon-based sentiment scoring.
//!
//! Valence-shifted word scoring with negation and intensifier handling,
//! normalized to a compound polarity in [-1, 1]. Pure and stateless; every
//! input, including the empty string, produces a result.

mod lexicon;

use serde::{ Serialize, Deserialize };

use self::lexicon::{ BOOSTERS, LEXICON, NEGATORS };

// How far back a degree modifier or negator can reach, and how much its
// effect decays per intervening word.
const LOOKBACK: usize = 3;
const DECAY: [f64; LOOKBACK] = [1.0, 0.95, 0.9];

const NEGATION_FACTOR: f64 = -0.74;
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Thresholds are part of the contract: the boundary values themselves
    /// are Neutral.
    pub fn from_compound(compound: f64) -> Self {
        if compound > 0.05 {
            SentimentLabel::Positive
        } else if compound < -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SentimentResult {
    pub score: f64,
    pub label: SentimentLabel,
}

/// Lexicon-backed analyzer. Construct once at startup and share; it holds
/// no mutable state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        SentimentAnalyzer
    }

    pub fn score(&self, text: &str) -> SentimentResult {
        let tokens = tokenize(text);
        let mut total = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = LEXICON.get(token.as_str()) else {
                continue;
            };
            let mut adjusted = valence;

            for dist in 1..=LOOKBACK.min(i) {
                let prev = tokens[i - dist].as_str();
                if let Some(&boost) = BOOSTERS.get(prev) {
                    let scaled = boost * DECAY[dist - 1];
                    adjusted += if valence >= 0.0 { scaled } else { -scaled };
                } else if NEGATORS.contains(prev) {
                    adjusted *= NEGATION_FACTOR;
                }
            }

            total += adjusted;
        }

        // Trailing punctuation emphasis, sign-aligned with the running sum.
        let bangs = text.chars().filter(|c| *c == '!').count().min(MAX_EXCLAMATIONS) as f64;
        if total > 0.0 {
            total += bangs * EXCLAMATION_BOOST;
        } else if total < 0.0 {
            total -= bangs * EXCLAMATION_BOOST;
        }

        let compound = normalize(total);
        SentimentResult {
            score: compound,
            label: SentimentLabel::from_compound(compound),
        }
    }
}

fn normalize(sum: f64) -> f64 {
    let compound = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    compound.clamp(-1.0, 1.0)
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}
