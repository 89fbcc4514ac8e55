//! Page structure classification
//!
//! Counts layout cues (bylines, cart buttons, Q:/A: markers, numbered steps)
//! per structure type. The counts corroborate entity scores; they never decide
//! an entity on their own.

use std::collections::BTreeMap;

use crate::signals::{PageStructure, STRUCTURE_INDICATORS};

/// Indicator match counts per page structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureScores {
    counts: BTreeMap<PageStructure, usize>,
}

impl StructureScores {
    /// Match count for one structure type
    pub fn count(&self, structure: PageStructure) -> usize {
        self.counts.get(&structure).copied().unwrap_or(0)
    }

    /// Structure with the highest count, if any indicator matched.
    /// Ties resolve to the earliest type in `PageStructure::ALL`.
    pub fn dominant(&self) -> Option<(PageStructure, usize)> {
        let mut best: Option<(PageStructure, usize)> = None;
        for structure in PageStructure::ALL {
            let count = self.count(structure);
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((structure, count));
            }
        }
        best
    }

    /// Highest count among structures other than `expected`
    pub fn dominant_other(&self, expected: Option<PageStructure>) -> Option<(PageStructure, usize)> {
        let mut best: Option<(PageStructure, usize)> = None;
        for structure in PageStructure::ALL {
            if Some(structure) == expected {
                continue;
            }
            let count = self.count(structure);
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((structure, count));
            }
        }
        best
    }

    pub fn as_map(&self) -> &BTreeMap<PageStructure, usize> {
        &self.counts
    }
}

/// Count structural indicators in one pass over the indicator table
pub fn classify(content: &str) -> StructureScores {
    let counts = STRUCTURE_INDICATORS
        .iter()
        .map(|(structure, patterns)| {
            let count = patterns.iter().map(|re| re.find_iter(content).count()).sum();
            (*structure, count)
        })
        .collect();

    StructureScores { counts }
}
