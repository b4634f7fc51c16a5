// src/sanitize.rs
// Cleans up dictionary and text entry fields before they are searched or
// displayed. Lesson dialogue is never run through here: its inline markup
// is meaningful and belongs to the presentation layer.

/// Strips markup from an entry field, decodes common HTML entities, and
/// collapses whitespace. Empty input stays empty. Idempotent.
pub fn sanitize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let stripped = strip_markup(raw);
    let decoded = decode_entities(&stripped);
    collapse_whitespace(&decoded)
}

/// Strips tags while retaining their text content.
/// If parsing fails, the raw string passes through to the later stages.
fn strip_markup(raw: &str) -> String {
    let dom = match tl::parse(raw, tl::ParserOptions::default()) {
        Ok(dom) => dom,
        Err(_) => return raw.to_string(),
    };

    let parser = dom.parser();
    let mut out = String::new();
    for handle in dom.children() {
        extract_text(*handle, parser, &mut out);
    }
    out
}

fn extract_text(handle: tl::NodeHandle, parser: &tl::Parser, out: &mut String) {
    if let Some(node) = handle.get(parser) {
        match node {
            tl::Node::Tag(tag) => {
                for child in tag.children().top().to_vec() {
                    extract_text(child, parser, out);
                }
                // Keep block breaks as whitespace so adjacent words don't fuse.
                if let "br" | "p" | "div" | "li" = tag.name().as_utf8_str().as_ref() {
                    out.push(' ');
                }
            }
            tl::Node::Raw(text) => out.push_str(&text.as_utf8_str()),
            _ => {}
        }
    }
}

/// Decodes the entities that actually occur in the exported notes.
/// `&lt;`/`&gt;` stay encoded: their decoded forms would be re-stripped as
/// tags on a second pass.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
