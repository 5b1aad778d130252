//! Coverage engine tests against an in-memory source.

use std::collections::HashMap;

use kanjikit_engine::{
    Collection, CoverageConfig, CoverageEngine, GRADES, NoteType, Result, Schema, Scope,
};

/// In-memory stand-in for the Anki collection and its schema.
#[derive(Debug, Default)]
struct FakeSource {
    note_types: Vec<NoteType>,
    fields: HashMap<i64, Vec<String>>,
    notes: HashMap<i64, Vec<Vec<String>>>,
}

impl FakeSource {
    fn new() -> Self {
        Self::default()
    }

    /// Add a note type with its field names and full field rows.
    fn with_note_type(mut self, id: i64, name: &str, fields: &[&str], notes: &[&[&str]]) -> Self {
        self.note_types.push(NoteType {
            id,
            name: name.to_string(),
        });
        self.fields
            .insert(id, fields.iter().map(|f| f.to_string()).collect());
        self.notes.insert(
            id,
            notes
                .iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
        );
        self
    }
}

impl Schema for FakeSource {
    async fn note_types(&self) -> Result<Vec<NoteType>> {
        Ok(self.note_types.clone())
    }

    async fn field_names(&self, note_type: &NoteType) -> Result<Vec<String>> {
        Ok(self.fields.get(&note_type.id).cloned().unwrap_or_default())
    }

    fn is_japanese_note_type(&self, name: &str) -> bool {
        name.contains("japanese")
    }
}

impl Collection for FakeSource {
    async fn matching_field_text(
        &self,
        note_type: &NoteType,
        field_indices: &[usize],
        _scope: Scope,
    ) -> Result<Vec<Vec<String>>> {
        let rows = self.notes.get(&note_type.id).cloned().unwrap_or_default();
        Ok(rows
            .into_iter()
            .map(|row| {
                field_indices
                    .iter()
                    .filter_map(|&i| row.get(i).cloned())
                    .collect()
            })
            .collect())
    }
}

fn engine_for(source: FakeSource) -> CoverageEngine<FakeSource> {
    CoverageEngine::new(source, Scope::WholeCollection, CoverageConfig::default())
}

#[tokio::test]
async fn scan_classifies_observed_kanji() {
    let source = FakeSource::new().with_note_type(
        1,
        "Japanese Vocabulary",
        &["Expression", "Meaning"],
        &[&["一", "one"], &["働", "to work"]],
    );

    let sets = engine_for(source).scan().await.unwrap();

    assert_eq!(sets.grade(1).iter().collect::<Vec<_>>(), vec![&'一']);
    assert_eq!(sets.grade(3).iter().collect::<Vec<_>>(), vec![&'働']);
    assert_eq!(sets.total_kanji(), 2);
}

#[tokio::test]
async fn seen_and_missing_partition_a_grade() {
    let source = FakeSource::new().with_note_type(
        1,
        "Japanese Vocabulary",
        &["Expression", "Meaning"],
        &[&["一", "one"]],
    );

    let engine = engine_for(source);
    let report = engine.report().await.unwrap();

    // 一 is seen, its JLPT 5 sibling 右 is not.
    assert!(report.contains("JLPT 5: 1 of 80 ("));
    let seen_at = report.find("<h1>Seen</h1>").unwrap();
    let missing_at = report.find("<h1>Missing</h1>").unwrap();
    let non_jouyou_at = report.find("<h1>Non-Jouyou</h1>").unwrap();
    let seen_html = &report[seen_at..missing_at];
    let missing_html = &report[missing_at..non_jouyou_at];

    assert!(seen_html.contains('一'));
    assert!(!seen_html.contains('右'));
    assert!(missing_html.contains('右'));
    assert!(!missing_html.contains('一'));

    // Every graded member lands in exactly one of the two sections.
    for grade in GRADES.iter().skip(1) {
        for c in grade.chars.chars() {
            assert!(seen_html.contains(c) ^ missing_html.contains(c), "{c}");
        }
    }
}

#[tokio::test]
async fn report_sections_come_in_fixed_order() {
    let source = FakeSource::new().with_note_type(
        1,
        "Japanese Vocabulary",
        &["Expression"],
        &[&["日本語"]],
    );

    let report = engine_for(source).report().await.unwrap();

    let summary = report.find("<h1>Kanji statistics</h1>").unwrap();
    let seen = report.find("<h1>Seen</h1>").unwrap();
    let missing = report.find("<h1>Missing</h1>").unwrap();
    let non_jouyou = report.find("<h1>Non-Jouyou</h1>").unwrap();
    assert!(summary < seen && seen < missing && missing < non_jouyou);
}

#[tokio::test]
async fn non_jouyou_kanji_stay_out_of_graded_reports() {
    let source = FakeSource::new().with_note_type(
        1,
        "Japanese Vocabulary",
        &["Expression", "Meaning"],
        &[&["鰻", "eel"]],
    );

    let engine = engine_for(source);
    let sets = engine.scan().await.unwrap();
    assert_eq!(sets.grade(0).iter().collect::<Vec<_>>(), vec![&'鰻']);
    for grade in 1..=5 {
        assert!(sets.grade(grade).is_empty());
    }

    let report = engine.report().await.unwrap();
    let non_jouyou_at = report.find("<h1>Non-Jouyou</h1>").unwrap();
    assert!(!report[..non_jouyou_at].contains('鰻'));
    assert!(report[non_jouyou_at..].contains('鰻'));
}

#[tokio::test]
async fn non_kanji_characters_are_discarded_after_observation() {
    let source = FakeSource::new().with_note_type(
        1,
        "Japanese Vocabulary",
        &["Expression"],
        &[&["あA一"]],
    );

    let sets = engine_for(source).scan().await.unwrap();

    assert_eq!(sets.observed().len(), 3);
    assert_eq!(sets.total_kanji(), 1);
}

#[tokio::test]
async fn ineligible_note_types_are_skipped() {
    let source = FakeSource::new().with_note_type(
        1,
        "Spanish Vocabulary",
        &["Expression"],
        &[&["一"]],
    );

    let sets = engine_for(source).scan().await.unwrap();
    assert!(sets.observed().is_empty());
}

#[tokio::test]
async fn note_types_without_source_fields_are_skipped() {
    let source = FakeSource::new().with_note_type(
        1,
        "Japanese Vocabulary",
        &["Front", "Back"],
        &[&["一", "one"]],
    );

    let sets = engine_for(source).scan().await.unwrap();
    assert!(sets.observed().is_empty());
}

#[tokio::test]
async fn configured_source_fields_override_the_default() {
    let source = FakeSource::new().with_note_type(
        1,
        "Japanese Vocabulary",
        &["Expression", "Reading"],
        &[&["一", "二"]],
    );

    let config = CoverageConfig {
        src_fields: vec!["Reading".to_string()],
    };
    let engine = CoverageEngine::new(source, Scope::WholeCollection, config);

    let sets = engine.scan().await.unwrap();
    assert_eq!(sets.grade(1).iter().collect::<Vec<_>>(), vec![&'二']);
}

#[tokio::test]
async fn characters_aggregate_across_note_types() {
    let source = FakeSource::new()
        .with_note_type(1, "Japanese Vocabulary", &["Expression"], &[&["一"]])
        .with_note_type(2, "Japanese Sentences", &["Expression"], &[&["右"]]);

    let sets = engine_for(source).scan().await.unwrap();
    assert_eq!(
        sets.grade(1).iter().collect::<Vec<_>>(),
        vec![&'一', &'右']
    );
}

#[tokio::test]
async fn scan_is_idempotent() {
    let source = FakeSource::new().with_note_type(
        1,
        "Japanese Vocabulary",
        &["Expression"],
        &[&["日本語を勉強する"]],
    );

    let engine = engine_for(source);
    let first = engine.scan().await.unwrap();
    let second = engine.scan().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_collection_yields_zero_counts() {
    let engine = engine_for(FakeSource::new());
    let report = engine.report().await.unwrap();

    assert!(report.contains("<li>0 total unique kanji.</li>"));
    assert!(report.contains("JLPT 5: 0 of 80 (0.0%)."));
    // Nothing seen, so the seen section has no grade headings at all,
    // while the missing section lists every grade in full.
    assert!(report.contains("<h1>Seen</h1><br/><h1>Missing</h1>"));
    assert!(report.contains("<h2>JLPT 1</h2>"));
    assert!(report.contains("<h1>Non-Jouyou</h1><font size=+2></font><br/>"));
}
