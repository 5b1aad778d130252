//! HTML report rendering.
//!
//! Pure functions over a finished [`KanjiSets`]. Seen and missing
//! listings follow each grade's canonical member order; the non-jouyou
//! listing is in code point order.

use std::collections::BTreeSet;

use crate::coverage::KanjiSets;
use crate::grades::{GRADES, NON_JOUYOU};
use crate::source::Scope;

/// WWWJDIC dictionary lookup endpoint for kanji links.
const EDICT_BASE: &str = "http://nihongo.monash.edu/cgi-bin/wwwjdic?1MMJ";

/// The dictionary takes about ten kanji per lookup link.
const LINK_BATCH: usize = 10;

/// The summary section: total unique kanji plus per-grade counts.
///
/// The non-jouyou tier contributes to the total but gets no count line
/// of its own, since it has no fixed membership to compare against.
pub fn summary(sets: &KanjiSets, scope: Scope) -> String {
    let place = match scope {
        Scope::CurrentDeck => "deck",
        Scope::WholeCollection => "collection",
    };
    let mut out = format!(
        "<h1>Kanji statistics</h1>The seen cards in this {place} contain:<ul>\
         <li>{} total unique kanji.</li></ul><p/>JLPT levels:<p/><ul>",
        sets.total_kanji()
    );
    for (index, grade) in GRADES.iter().enumerate().skip(1) {
        let total = grade.chars.chars().count();
        out.push_str(&grade_line(grade.name, sets.grade(index).len(), total));
    }
    out.push_str("</ul>");
    out
}

/// One `<li>` count line, percent to one decimal place.
fn grade_line(name: &str, seen: usize, total: usize) -> String {
    let percent = seen as f64 / total as f64 * 100.0;
    format!("<li>{name}: {seen} of {total} ({percent:.1}%).</li>")
}

/// The seen section: per grade, the members present in the scan.
pub fn seen(sets: &KanjiSets) -> String {
    grade_listing("Seen", sets, |c, observed| observed.contains(&c))
}

/// The missing section: per grade, the members absent from the scan.
pub fn missing(sets: &KanjiSets) -> String {
    grade_listing("Missing", sets, |c, observed| !observed.contains(&c))
}

/// Seen and missing share one algorithm: filter each grade's canonical
/// member list by a membership predicate against the observed subset.
/// Grades with an empty result are skipped entirely.
fn grade_listing(
    title: &str,
    sets: &KanjiSets,
    keep: impl Fn(char, &BTreeSet<char>) -> bool,
) -> String {
    let mut out = format!("<h1>{title}</h1>");
    for (index, grade) in GRADES.iter().enumerate().skip(1) {
        let observed = sets.grade(index);
        let listed: String = grade.chars.chars().filter(|&c| keep(c, observed)).collect();
        if listed.is_empty() {
            continue;
        }
        out.push_str(&format!("<h2>{}</h2>", grade.name));
        out.push_str(&linked_kanji(&listed));
    }
    out.push_str("<br/>");
    out
}

/// The non-jouyou section: every observed ideograph outside grades 1-5,
/// as a flat list with no per-grade breakdown.
pub fn non_jouyou(sets: &KanjiSets) -> String {
    let kanji: String = sets.grade(NON_JOUYOU).iter().collect();
    format!("<h1>Non-Jouyou</h1>{}<br/>", linked_kanji(&kanji))
}

/// Render a character list as dictionary links, [`LINK_BATCH`] kanji
/// per link. The batching keeps each link within what the dictionary
/// accepts; order follows the input.
fn linked_kanji(kanji: &str) -> String {
    let chars: Vec<char> = kanji.chars().collect();
    let mut out = String::from("<font size=+2>");
    for batch in chars.chunks(LINK_BATCH) {
        let batch: String = batch.iter().collect();
        out.push_str(&format!("<a href=\"{EDICT_BASE}{batch}\">{batch}</a>"));
    }
    out.push_str("</font>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_renders_to_one_decimal_place() {
        assert_eq!(
            grade_line("JLPT 5", 3, 10),
            "<li>JLPT 5: 3 of 10 (30.0%).</li>"
        );
        assert_eq!(grade_line("JLPT 4", 0, 165), "<li>JLPT 4: 0 of 165 (0.0%).</li>");
    }

    #[test]
    fn links_batch_ten_characters() {
        let rendered = linked_kanji("一二三四五六七八九十百");
        // Eleven characters make two links: ten plus one.
        assert_eq!(rendered.matches("<a href=").count(), 2);
        assert!(rendered.contains("wwwjdic?1MMJ一二三四五六七八九十\""));
        assert!(rendered.contains(">百</a>"));
        assert!(rendered.starts_with("<font size=+2>"));
        assert!(rendered.ends_with("</font>"));
    }

    #[test]
    fn empty_list_renders_empty_link_block() {
        assert_eq!(linked_kanji(""), "<font size=+2></font>");
    }
}
