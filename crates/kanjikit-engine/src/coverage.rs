//! The coverage engine: scanning card text and classifying observed kanji.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::Result;
use crate::grades::{GRADES, GradeIndex, NON_JOUYOU};
use crate::ideograph::is_kanji;
use crate::report;
use crate::source::{Collection, Schema, Scope};

/// Configuration for a coverage scan.
#[derive(Debug, Clone)]
pub struct CoverageConfig {
    /// Note fields whose text is scanned for kanji.
    pub src_fields: Vec<String>,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            src_fields: vec!["Expression".to_string(), "Kanji".to_string()],
        }
    }
}

/// Unique characters observed in one scan, with per-grade subsets.
///
/// Built fresh on every [`CoverageEngine::scan`] call and owned by the
/// caller; nothing is cached across scans. The per-grade subsets hold
/// only observed characters that pass [`is_kanji`], ordered by code
/// point so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanjiSets {
    pub(crate) observed: HashSet<char>,
    pub(crate) by_grade: [BTreeSet<char>; 6],
}

impl KanjiSets {
    /// Observed kanji classified into `grade`.
    ///
    /// # Panics
    ///
    /// Panics if `grade` is not a valid index into [`GRADES`].
    pub fn grade(&self, grade: usize) -> &BTreeSet<char> {
        debug_assert!(grade < GRADES.len());
        &self.by_grade[grade]
    }

    /// Every unique character seen, kanji or not.
    pub fn observed(&self) -> &HashSet<char> {
        &self.observed
    }

    /// Total unique kanji across all grades, including non-jouyou.
    pub fn total_kanji(&self) -> usize {
        self.by_grade.iter().map(BTreeSet::len).sum()
    }

    /// Per-grade coverage counts, for machine-readable output.
    pub fn summary(&self) -> CoverageSummary {
        CoverageSummary {
            total_unique_kanji: self.total_kanji(),
            non_jouyou: self.by_grade[NON_JOUYOU].len(),
            grades: GRADES
                .iter()
                .enumerate()
                .skip(1)
                .map(|(index, grade)| GradeCoverage {
                    grade: grade.name.to_string(),
                    seen: self.by_grade[index].len(),
                    total: grade.chars.chars().count(),
                })
                .collect(),
        }
    }
}

/// Machine-readable counterpart of the HTML summary report.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageSummary {
    /// Total unique kanji seen, including non-jouyou.
    pub total_unique_kanji: usize,
    /// Observed kanji outside the standard grade set.
    pub non_jouyou: usize,
    /// Seen/total counts for grades 1-5.
    pub grades: Vec<GradeCoverage>,
}

/// Coverage counts for a single grade.
#[derive(Debug, Clone, Serialize)]
pub struct GradeCoverage {
    /// Grade display name.
    pub grade: String,
    /// Number of the grade's members observed in the scan.
    pub seen: usize,
    /// Size of the grade's canonical member set.
    pub total: usize,
}

/// Scans eligible card text and classifies every observed ideograph.
///
/// The engine is read-only with respect to the store: one [`scan`]
/// followed by report rendering is a single unit of work with no state
/// carried across calls.
///
/// [`scan`]: CoverageEngine::scan
#[derive(Debug)]
pub struct CoverageEngine<S> {
    source: S,
    scope: Scope,
    config: CoverageConfig,
    index: GradeIndex,
}

impl<S: Schema + Collection> CoverageEngine<S> {
    /// Create an engine over a source for the given scope.
    pub fn new(source: S, scope: Scope, config: CoverageConfig) -> Self {
        Self {
            source,
            scope,
            config,
            index: GradeIndex::new(),
        }
    }

    /// Scan eligible card text and build the observed character sets.
    ///
    /// A note type is eligible when the schema classifies its lowercased
    /// name as Japanese; a field is eligible when its name matches one
    /// of the configured source fields. Note types with no eligible
    /// fields are skipped. Zero eligible note types is a valid empty
    /// result, not an error.
    pub async fn scan(&self) -> Result<KanjiSets> {
        let mut sets = KanjiSets::default();

        for note_type in self.source.note_types().await? {
            if !self
                .source
                .is_japanese_note_type(&note_type.name.to_lowercase())
            {
                continue;
            }

            let names = self.source.field_names(&note_type).await?;
            let indices: Vec<usize> = names
                .iter()
                .enumerate()
                .filter(|(_, name)| self.config.src_fields.iter().any(|f| f == *name))
                .map(|(i, _)| i)
                .collect();
            if indices.is_empty() {
                continue;
            }

            let rows = self
                .source
                .matching_field_text(&note_type, &indices, self.scope)
                .await?;
            for row in &rows {
                for value in row {
                    sets.observed.extend(value.chars());
                }
            }
        }

        for &c in &sets.observed {
            if is_kanji(c) {
                sets.by_grade[self.index.classify(c)].insert(c);
            }
        }

        Ok(sets)
    }

    /// Scan and render the full HTML report: summary, seen, missing,
    /// and non-jouyou sections, in that order.
    pub async fn report(&self) -> Result<String> {
        let sets = self.scan().await?;
        let mut out = report::summary(&sets, self.scope);
        out.push_str(&report::seen(&sets));
        out.push_str(&report::missing(&sets));
        out.push_str(&report::non_jouyou(&sets));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn grade_rejects_out_of_range_indices() {
        let sets = KanjiSets::default();
        let _ = sets.grade(GRADES.len());
    }

    #[test]
    fn grade_covers_every_valid_index() {
        let sets = KanjiSets::default();
        for grade in 0..GRADES.len() {
            assert!(sets.grade(grade).is_empty());
        }
    }
}
