//! Walks the whole index document and assembles the record collection.

use std::sync::OnceLock;

use scraper::{Html, Selector};

use crate::error::ExtractError;
use crate::model::Mod;
use crate::report::Report;
use crate::table;

/// First id handed out; ids 1-3 belong to the DLC entries shipped in the
/// auxiliary file.
const ID_BASE: u32 = 4;

fn heading_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("h5").unwrap())
}

fn table_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("div.inner > table").unwrap())
}

/// Extract every mod in the index, in document order, with globally
/// sequential ids. The Nth data table belongs to the Nth section heading;
/// a table without a heading means the document shape changed and the run
/// aborts.
pub fn mods_from_html(html: &str, report: &mut Report) -> Result<Vec<Mod>, ExtractError> {
    let doc = Html::parse_document(html);

    let sections: Vec<String> = doc
        .select(heading_sel())
        .map(|h| h.text().collect::<String>().trim().to_string())
        .collect();
    let tables: Vec<_> = doc.select(table_sel()).collect();

    let mut mods = Vec::new();
    let mut id_base = ID_BASE;
    for (index, table) in tables.iter().enumerate() {
        let section = sections.get(index).ok_or(ExtractError::SectionMismatch {
            tables: tables.len(),
            headings: sections.len(),
        })?;
        let records = table::table_to_records(*table, section, id_base, report);
        id_base += records.len() as u32;
        mods.extend(records);
    }

    Ok(mods)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_fixture() -> (Vec<Mod>, Report) {
        let html = std::fs::read_to_string("tests/fixtures/index.html").unwrap();
        let mut report = Report::new();
        let mods = mods_from_html(&html, &mut report).unwrap();
        (mods, report)
    }

    #[test]
    fn fixture_sections_and_ids() {
        let (mods, _) = parse_fixture();
        assert_eq!(mods.len(), 3);
        assert_eq!(
            mods.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![4, 5, 6]
        );
        assert_eq!(mods[0].category.as_deref(), Some("1. Graphics"));
        assert_eq!(mods[1].category.as_deref(), Some("1. Graphics"));
        assert_eq!(mods[2].category.as_deref(), Some("2. Gameplay"));
    }

    #[test]
    fn fixture_field_extraction() {
        let (mods, report) = parse_fixture();

        let first = &mods[0];
        assert_eq!(first.name, "Climates of Tamriel");
        assert_eq!(first.description, "Weather and lighting overhaul.");
        assert_eq!(first.oldrim.requirements.len(), 1);
        assert_eq!(first.oldrim.requirements[0].name, "Dawnguard");
        assert_eq!(first.notes, vec!["Recommended"]);
        assert!(first.oldrim.webpages.nexus.is_some());
        assert_eq!(first.media.images.len(), 1);
        assert_eq!(first.media.videos.len(), 1);

        let deprecated = &mods[2];
        assert!(deprecated.deprecated);

        // The fixture's broken row and its bad media link.
        assert_eq!(report.events().len(), 2);
    }

    #[test]
    fn more_tables_than_headings_is_fatal() {
        let html = r#"
            <h5>Only Section</h5>
            <div class="inner"><table></table></div>
            <div class="inner"><table></table></div>
        "#;
        let mut report = Report::new();
        let err = mods_from_html(html, &mut report).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::SectionMismatch {
                tables: 2,
                headings: 1,
            }
        ));
    }

    #[test]
    fn empty_document_yields_no_mods() {
        let mut report = Report::new();
        let mods = mods_from_html("<html><body></body></html>", &mut report).unwrap();
        assert!(mods.is_empty());
        assert!(report.is_empty());
    }
}
