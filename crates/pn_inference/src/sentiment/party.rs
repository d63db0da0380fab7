//! Party-context adjustment.
//!
//! Re-weights a compound score by looking at which success/failure words
//! appear in the same sentence as the target party. This is a keyword
//! heuristic and is expected to be noisy on short or ambiguous sentences.

use pn_core::{round_to, PartyContext, SentimentResult};
use tracing::debug;

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "win", "victory", "success", "support", "growth", "gain", "lead", "majority",
    "praise", "boost", "progress", "achievement", "landslide", "popular", "celebrate",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "defeat", "loss", "lose", "scandal", "crisis", "criticized", "criticism", "controvers",
    "corruption", "fail", "protest", "decline", "setback", "slam", "allegation",
];

pub const OPPOSITION_TERMS: &[&str] = &["opposition", "rival", "competitor", "against"];

/// Score change per net keyword hit.
pub const STEP: f64 = 0.1;
/// Cap on the absolute adjustment.
pub const MAX_ADJUSTMENT: f64 = 0.3;
/// Adjustments beyond this magnitude get a directional note.
pub const NOTE_THRESHOLD: f64 = 0.05;

/// Positive and negative tallies for sentences mentioning `party`.
///
/// Both arguments are expected lowercase. A negative keyword counts half a
/// positive hit when the sentence also names an opposition term and the
/// party's first mention comes after the keyword.
pub fn keyword_tally(text: &str, party: &str) -> (f64, f64) {
    let mut positive = 0.0;
    let mut negative = 0.0;

    for sentence in text.split('.') {
        let Some(party_pos) = sentence.find(party) else {
            continue;
        };

        positive += POSITIVE_KEYWORDS
            .iter()
            .filter(|kw| sentence.contains(*kw))
            .count() as f64;

        let names_opposition = OPPOSITION_TERMS.iter().any(|t| sentence.contains(t));
        for keyword in NEGATIVE_KEYWORDS {
            let Some(keyword_pos) = sentence.find(keyword) else {
                continue;
            };
            if names_opposition && party_pos > keyword_pos {
                positive += 0.5;
            } else {
                negative += 1.0;
            }
        }
    }

    (positive, negative)
}

/// Raw adjustment for the tallies, capped at ±0.3.
pub fn adjustment_for(positive: f64, negative: f64) -> f64 {
    let raw = if positive > negative {
        STEP * (positive - negative)
    } else if negative > positive {
        -STEP * (negative - positive)
    } else {
        0.0
    };
    round_to(raw.clamp(-MAX_ADJUSTMENT, MAX_ADJUSTMENT), 4)
}

fn note_for(adjustment: f64, party: &str) -> String {
    if adjustment > NOTE_THRESHOLD {
        format!("Sentiment adjusted more positive for {} based on favorable context", party)
    } else if adjustment < -NOTE_THRESHOLD {
        format!("Sentiment adjusted more negative for {} based on unfavorable context", party)
    } else {
        format!("Sentiment directly reflects impact on {}", party)
    }
}

/// Adjusts `base` for how `text` reads from `target_party`'s point of view.
///
/// When the party is not mentioned the scores are left alone and the note
/// says so. Never fails.
pub fn adjust_for_party(base: SentimentResult, text: &str, target_party: &str) -> SentimentResult {
    let party = target_party.trim();
    let party_lower = party.to_lowercase();
    let text_lower = text.to_lowercase();
    let original = base.compound_score;

    let mut result = base;
    result.party_specific = true;

    if party_lower.is_empty() || !text_lower.contains(&party_lower) {
        result.party_context = Some(PartyContext {
            target_party: party.to_string(),
            context_adjustment: 0.0,
            original_compound: original,
            context_note: format!("This article may not be directly about {}", party),
        });
        return result;
    }

    let (positive, negative) = keyword_tally(&text_lower, &party_lower);
    let adjustment = adjustment_for(positive, negative);
    debug!(
        "party context for {}: +{} / -{} -> {:+.2}",
        party, positive, negative, adjustment
    );

    result.set_compound(original + adjustment);
    result.party_context = Some(PartyContext {
        target_party: party.to_string(),
        context_adjustment: adjustment,
        original_compound: original,
        context_note: note_for(adjustment, party),
    });
    result
}
