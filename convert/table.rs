//! Turns one section table into Mod records.

use std::sync::OnceLock;

use scraper::{ElementRef, Selector};

use crate::error::ExtractError;
use crate::fields;
use crate::model::{Mod, Oldrim, Sse};
use crate::report::Report;

fn row_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("tr").unwrap())
}

fn cell_sels() -> &'static [Selector; 3] {
    static SELS: OnceLock<[Selector; 3]> = OnceLock::new();
    SELS.get_or_init(|| {
        [
            Selector::parse("td.col1").unwrap(),
            Selector::parse("td.col2").unwrap(),
            Selector::parse("td.col3").unwrap(),
        ]
    })
}

/// Extract one record per valid data row. A data row carries all three
/// column cells (media, name link, description); anything else is a
/// header or spacer row and is passed over. Ids start at `id_base` and
/// are only consumed by rows that produce a record, so the next table's
/// base is `id_base + result.len()`.
pub fn table_to_records(
    table: ElementRef,
    section: &str,
    id_base: u32,
    report: &mut Report,
) -> Vec<Mod> {
    let [col1_sel, col2_sel, col3_sel] = cell_sels();
    let mut mods = Vec::new();

    for row in table.select(row_sel()) {
        let col1 = row.select(col1_sel).next();
        let col2 = row.select(col2_sel).next();
        let col3 = row.select(col3_sel).next();
        let (Some(col1), Some(col2), Some(col3)) = (col1, col2, col3) else {
            continue;
        };

        let id = id_base + mods.len() as u32;
        match build_mod(id, section, col1, col2, col3, report) {
            Ok(mod_entry) => mods.push(mod_entry),
            Err(err) => report.row_skipped(section, err.to_string()),
        }
    }

    mods
}

fn build_mod(
    id: u32,
    section: &str,
    media_cell: ElementRef,
    name_cell: ElementRef,
    desc_cell: ElementRef,
    report: &mut Report,
) -> Result<Mod, ExtractError> {
    let name = fields::name_from_cell(name_cell)?;
    let webpages = fields::webpages_from_cell(name_cell)?;
    let requirements = fields::requirements_from_cell(desc_cell);

    Ok(Mod {
        id,
        name,
        description: fields::description_from_cell(desc_cell),
        notes: fields::notes_from_cell(desc_cell),
        category: Some(section.to_string()),
        media: fields::media_from_cell(media_cell, report),
        oldrim: Oldrim {
            is_available: true,
            webpages,
            requirements,
        },
        sse: Sse::placeholder(),
        tags: Vec::new(),
        deprecated: fields::deprecated_from_cell(desc_cell),
        verified: false,
    })
}
