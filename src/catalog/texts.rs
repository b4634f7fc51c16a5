// src/catalog/texts.rs
// Groups the flat texts resource into titled units. The resource is an
// ordered list of lines; lines belong to the same unit only while their
// derived titles match consecutively, so a title that reappears later
// starts a new unit.

use super::{DictionaryEntry, TextEntryLine, TextUnit};

/// Title for a line that has no usable `::` segment in its deck path.
pub const UNTITLED: &str = "Untitled";

/// Derives a unit title from a deck path ("Xhosa Texts::Title" → "Title").
/// A missing separator or an empty segment falls back to `UNTITLED`.
pub fn text_title(deck: &str) -> &str {
    deck.split("::")
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .unwrap_or(UNTITLED)
}

/// Groups raw lines into units by consecutive run of equal derived title.
/// Unit ids are synthesized from the unit's position.
pub fn group_texts(lines: &[DictionaryEntry]) -> Vec<TextUnit> {
    let mut units: Vec<TextUnit> = Vec::new();

    for line in lines {
        let title = text_title(&line.deck);
        let start_new = units
            .last()
            .map_or(true, |unit| unit.title != title);
        if start_new {
            units.push(TextUnit {
                id: format!("text-{}", units.len() + 1),
                title: title.to_string(),
                entries: Vec::new(),
            });
        }

        // `start_new` guarantees a unit exists here.
        if let Some(unit) = units.last_mut() {
            unit.entries.push(TextEntryLine {
                id: line.id,
                source_text: line.source_text.clone(),
                target_text: line.target_text.clone(),
                source_context: line.source_context.clone(),
                target_context: line.target_context.clone(),
            });
        }
    }

    units
}

/// One searchable row: a text line paired with its unit's title.
#[derive(Debug, Clone, Copy)]
pub struct TextRow<'a> {
    pub title: &'a str,
    pub line: &'a TextEntryLine,
}

/// Flattens grouped units back into rows for searching and pagination,
/// preserving unit and line order.
pub fn flatten_units(units: &[TextUnit]) -> Vec<TextRow<'_>> {
    units
        .iter()
        .flat_map(|unit| {
            unit.entries
                .iter()
                .map(move |line| TextRow { title: &unit.title, line })
        })
        .collect()
}
