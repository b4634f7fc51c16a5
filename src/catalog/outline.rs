// src/catalog/outline.rs
// Parses the legacy LessonList.csv course outline. The file is
// line-oriented with "Part N: ..." section headers between lesson rows;
// lesson fields may be quoted and may contain commas or line breaks inside
// the quotes.

use log::warn;

/// One row of the legacy course outline.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub lesson: String,
    pub structures: String,
    pub vocabulary: String,
    pub part: Option<String>,
}

const HEADER_LESSON: &str = "Lesson";
const HEADER_STRUCTURES: &str = "Key Structures Learned";
const HEADER_VOCABULARY: &str = "Key Vocabulary Introduced";

/// Parses the outline CSV. Rows with the wrong number of fields are
/// skipped with a warning; a missing required header column is fatal.
pub fn parse_lesson_outline(csv: &str) -> Result<Vec<OutlineEntry>, String> {
    let mut logical_lines = assemble_logical_lines(csv).into_iter();

    let header_line = logical_lines
        .next()
        .ok_or_else(|| "outline is empty".to_string())?;
    let headers = split_fields(&header_line);

    let lesson_col = header_index(&headers, HEADER_LESSON)?;
    let structures_col = header_index(&headers, HEADER_STRUCTURES)?;
    let vocabulary_col = header_index(&headers, HEADER_VOCABULARY)?;

    let mut current_part: Option<String> = None;
    let mut entries = Vec::new();

    for line in logical_lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Section headers like "Part 1: Foundations" carry no fields of
        // their own; they label the rows that follow.
        if let Some(label) = trimmed.strip_prefix("Part ") {
            current_part = Some(label.to_string());
            continue;
        }

        let values = split_fields(trimmed);
        if values.len() != headers.len() {
            warn!(
                "skipping outline row with {} fields (expected {}): {:?}",
                values.len(),
                headers.len(),
                trimmed
            );
            continue;
        }

        entries.push(OutlineEntry {
            lesson: values[lesson_col].clone(),
            structures: values[structures_col].clone(),
            vocabulary: values[vocabulary_col].clone(),
            part: current_part.clone(),
        });
    }

    Ok(entries)
}

/// Groups outline rows by part, preserving first-seen part order. Rows
/// without a part land under "Other".
pub fn group_outline_by_part(entries: &[OutlineEntry]) -> Vec<(String, Vec<OutlineEntry>)> {
    let mut groups: Vec<(String, Vec<OutlineEntry>)> = Vec::new();

    for entry in entries {
        let part = entry.part.as_deref().unwrap_or("Other");
        match groups.iter_mut().find(|(name, _)| name == part) {
            Some((_, rows)) => rows.push(entry.clone()),
            None => groups.push((part.to_string(), vec![entry.clone()])),
        }
    }

    groups
}

/// Rejoins physical lines into logical CSV lines: a line with an odd
/// number of quote characters is still inside a quoted field, so the
/// following line belongs to it.
fn assemble_logical_lines(csv: &str) -> Vec<String> {
    let mut logical = Vec::new();
    let mut pending = String::new();

    for line in csv.lines() {
        if pending.is_empty() {
            pending.push_str(line);
        } else {
            pending.push('\n');
            pending.push_str(line);
        }

        if pending.matches('"').count() % 2 == 0 {
            logical.push(std::mem::take(&mut pending));
        }
    }
    // An unterminated quote at EOF still yields its partial line.
    if !pending.is_empty() {
        logical.push(pending);
    }

    logical
}

/// Splits one logical line on commas, honoring quotes: commas inside
/// quotes do not split, and the quote characters themselves are dropped.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields.into_iter().map(|field| field.trim().to_string()).collect()
}

fn header_index(headers: &[String], name: &str) -> Result<usize, String> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| format!("outline is missing the {:?} column", name))
}
