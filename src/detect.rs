//! Entity detection - score-based entity identification using the signal library
//!
//! Each candidate type is scored from its strong, medium, keyword and negative
//! signals, corroborated by page structure, then normalized to a confidence in
//! [0, 1]. Types above the threshold are extracted, ranked and passed through
//! mutual-exclusion resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::context::{is_in_comparison_context, is_negated};
use crate::extract::{extract_description, extract_faq_pairs, extract_name, extract_properties};
use crate::resolve::{resolve_exclusions, sort_by_confidence};
use crate::signals::{
    library, negative_multiplier, strong_boost, EntityType, SignalPattern, SignalSet, BYLINE_RE,
    COMPARISON_KEYWORD_WEIGHT, CONFIDENCE_THRESHOLD, DOMINANT_STRUCTURE_COUNT, EXCLUSION_PENALTY,
    KEYWORD_WEIGHT, MEDIUM_WEIGHT, MIN_CONTENT_LENGTH, NEGATED_KEYWORD_WEIGHT, NEGATIVE_WEIGHT,
    NO_STRONG_CEILING, PRICE_RE, PRODUCT_ACTION_RE, PUBLISH_DATE_RE, STRONG_SIGNAL_MATCHES,
    STRONG_WEIGHT, STRUCTURE_MISMATCH_PENALTY, STRUCTURE_WEIGHT, VERY_STRONG_FLOOR,
};
use crate::structure::{classify, StructureScores};

/// An entity found in page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedEntity {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub name: String,
    pub description: String,
    pub properties: BTreeMap<String, Value>,
    /// Final confidence (0.0 - 1.0), after exclusion adjustments
    pub confidence: f64,
}

/// Full scoring breakdown for one candidate type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityScore {
    pub entity_type: EntityType,
    pub raw_score: f64,
    pub max_score: f64,
    pub strong_matches: usize,
    pub medium_matches: usize,
    pub negative_matches: usize,
    /// Confidence (0.0 - 1.0)
    pub confidence: f64,
    /// Which signals contributed, in scoring order
    pub evidence: Vec<String>,
}

/// Price together with a purchase action
pub fn has_very_strong_product_signal(content: &str) -> bool {
    PRICE_RE.is_match(content) && PRODUCT_ACTION_RE.is_match(content)
}

/// Publish date together with a byline
pub fn has_very_strong_article_signal(content: &str) -> bool {
    PUBLISH_DATE_RE.is_match(content) && BYLINE_RE.is_match(content)
}

/// At least one complete Q:/A: pair
pub fn has_very_strong_faq_signal(content: &str) -> bool {
    !extract_faq_pairs(content).is_empty()
}

/// Cross-type combinations that justify scoring short content
pub fn has_very_strong_signal(content: &str) -> bool {
    has_very_strong_product_signal(content)
        || has_very_strong_faq_signal(content)
        || has_very_strong_article_signal(content)
}

/// Score every candidate type, highest confidence first.
///
/// Returns nothing for content under 100 characters unless a very strong
/// signal combination is present.
pub fn score_entities(content: &str) -> Vec<EntityScore> {
    if content.chars().count() < MIN_CONTENT_LENGTH && !has_very_strong_signal(content) {
        trace!(len = content.len(), "content too short for detection");
        return Vec::new();
    }

    let structure = classify(content);
    let strong_counts: Vec<(EntityType, usize)> = library()
        .iter()
        .map(|set| (set.entity_type, matching(&set.strong, content).len()))
        .collect();

    let mut scores: Vec<EntityScore> = library()
        .iter()
        .map(|set| score_type(content, set, &strong_counts, &structure))
        .collect();

    scores.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scores
}

/// Detect entities in content: at most two, sorted by confidence descending
pub fn detect_entities(content: &str) -> Vec<DetectedEntity> {
    let mut entities: Vec<DetectedEntity> = score_entities(content)
        .into_iter()
        .filter(|score| score.confidence >= CONFIDENCE_THRESHOLD)
        .map(|score| DetectedEntity {
            entity_type: score.entity_type,
            name: extract_name(content, score.entity_type),
            description: extract_description(content),
            properties: extract_properties(content, score.entity_type),
            confidence: score.confidence,
        })
        .collect();

    sort_by_confidence(&mut entities);
    resolve_exclusions(entities)
}

fn matching<'a>(patterns: &'a [SignalPattern], content: &str) -> Vec<&'a SignalPattern> {
    patterns.iter().filter(|p| p.is_match(content)).collect()
}

/// Score one candidate type
fn score_type(
    content: &str,
    set: &SignalSet,
    strong_counts: &[(EntityType, usize)],
    structure: &StructureScores,
) -> EntityScore {
    let entity_type = set.entity_type;
    let mut score = 0.0;
    let mut evidence = Vec::new();

    // Strong signals, and negative signals scaled down by strong evidence
    let strong = matching(&set.strong, content);
    for pattern in &strong {
        score += STRONG_WEIGHT;
        evidence.push(format!("strong:{}", pattern.name));
    }

    let negative = matching(&set.negative, content);
    if !negative.is_empty() {
        score += NEGATIVE_WEIGHT * negative.len() as f64 * negative_multiplier(strong.len());
        for pattern in &negative {
            evidence.push(format!("negative:{}", pattern.name));
        }
    }

    // A competing exclusive type with a strong signal suppresses this one
    if strong.len() < STRONG_SIGNAL_MATCHES {
        let rival = strong_counts.iter().find(|(other, count)| {
            *other != entity_type
                && *count >= STRONG_SIGNAL_MATCHES
                && entity_type.is_exclusive_with(*other)
        });
        if let Some((other, _)) = rival {
            score += EXCLUSION_PENALTY;
            evidence.push(format!("exclusion:{}", other));
        }
    }

    let medium = matching(&set.medium, content);
    for pattern in &medium {
        score += MEDIUM_WEIGHT;
        evidence.push(format!("medium:{}", pattern.name));
    }

    // Keywords only count once there is other positive evidence
    if !strong.is_empty() || score > 0.0 {
        for keyword in set.keywords.iter().filter(|k| k.is_present(content)) {
            if is_negated(content, keyword.text) {
                score += NEGATED_KEYWORD_WEIGHT;
                evidence.push(format!("negated:{}", keyword.text));
            } else if is_in_comparison_context(content, keyword.text) {
                score += COMPARISON_KEYWORD_WEIGHT;
                evidence.push(format!("keyword:{} (comparison)", keyword.text));
            } else {
                score += KEYWORD_WEIGHT;
                evidence.push(format!("keyword:{}", keyword.text));
            }
        }
    }

    // Page structure corroboration
    let expected = entity_type.expected_structure();
    let expected_count = expected.map_or(0, |s| structure.count(s));
    if expected_count > 0 {
        score += STRUCTURE_WEIGHT * expected_count as f64;
        if let Some(s) = expected {
            evidence.push(format!("structure:{} x{}", s, expected_count));
        }
    } else if let Some((other, count)) = structure.dominant_other(expected) {
        if count >= DOMINANT_STRUCTURE_COUNT {
            score += STRUCTURE_MISMATCH_PENALTY;
            evidence.push(format!("structure-mismatch:{} x{}", other, count));
        }
    }

    let max_score = set.max_possible_score();
    let mut confidence = if max_score > 0.0 {
        (score / max_score).max(0.0)
    } else {
        0.0
    };
    confidence = (confidence + strong_boost(strong.len())).min(1.0);

    // Product and Article carry hard floors and ceilings
    let very_strong = match entity_type {
        EntityType::Product => Some(has_very_strong_product_signal(content)),
        EntityType::Article => Some(has_very_strong_article_signal(content)),
        _ => None,
    };
    if let Some(very_strong) = very_strong {
        if very_strong {
            confidence = confidence.max(VERY_STRONG_FLOOR);
            evidence.push("floor:very-strong".to_string());
        }
        if strong.is_empty() {
            confidence = confidence.min(NO_STRONG_CEILING);
        }
    }

    let confidence = confidence.clamp(0.0, 1.0);

    debug!(
        entity = %entity_type,
        score,
        max_score,
        confidence,
        strong = strong.len(),
        medium = medium.len(),
        negative = negative.len(),
        evidence = ?evidence,
        "scored entity type"
    );

    EntityScore {
        entity_type,
        raw_score: score,
        max_score,
        strong_matches: strong.len(),
        medium_matches: medium.len(),
        negative_matches: negative.len(),
        confidence,
        evidence,
    }
}
