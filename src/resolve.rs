//! Mutual exclusion between competing entity hypotheses

use tracing::debug;

use crate::detect::DetectedEntity;
use crate::signals::{EXCLUSION_CONFIDENCE, MAX_ENTITIES};

/// Sort by confidence, highest first. Equal confidences keep their order.
pub fn sort_by_confidence(entities: &mut [DetectedEntity]) {
    entities.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Drop entities that conflict with a confident top entity, then keep the top two
pub fn resolve_exclusions(mut entities: Vec<DetectedEntity>) -> Vec<DetectedEntity> {
    sort_by_confidence(&mut entities);

    if let Some(top) = entities.first() {
        if top.confidence >= EXCLUSION_CONFIDENCE {
            let top_type = top.entity_type;
            entities.retain(|entity| {
                let conflicts = top_type.is_exclusive_with(entity.entity_type);
                if conflicts {
                    debug!(
                        dropped = %entity.entity_type,
                        confidence = entity.confidence,
                        winner = %top_type,
                        "removed mutually exclusive entity"
                    );
                }
                !conflicts
            });
        }
    }

    entities.truncate(MAX_ENTITIES);
    entities
}
