// src/catalog/mod.rs
// This module owns the catalog data model and its assembly. Collections are
// built once by the loader and read-only afterwards; every filtered view is
// a new list of references, never a mutation.

pub mod loader;
pub mod outline;
pub mod texts;

use serde::Deserialize;

use crate::error::NotFoundError;

/// One dictionary record as exported from the source deck.
///
/// The wire format uses `xh`/`en` field names; only `id` and `deck` are
/// required. A record missing a text field deserializes with that field
/// blank rather than rejecting the whole collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DictionaryEntry {
    pub id: i64,
    #[serde(rename = "xh", default)]
    pub source_text: String,
    #[serde(rename = "en", default)]
    pub target_text: String,
    #[serde(rename = "xh_context", default)]
    pub source_context: Option<String>,
    #[serde(rename = "en_context", default)]
    pub target_context: Option<String>,
    // Hierarchical tag path, e.g. "Xhosa Notes::Greetings".
    pub deck: String,
    #[serde(default)]
    pub tag: Option<String>,
}

/// One line of an annotated text, stripped of its grouping fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntryLine {
    pub id: i64,
    pub source_text: String,
    pub target_text: String,
    pub source_context: Option<String>,
    pub target_context: Option<String>,
}

/// A titled run of consecutive text lines. Titles are derived from the
/// `deck` field, not authoritative; see `texts::text_title`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextUnit {
    pub id: String,
    pub title: String,
    pub entries: Vec<TextEntryLine>,
}

/// A word/meaning pair from a lesson's key vocabulary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VocabItem {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meaning: String,
}

/// One prompt/answer flashcard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PracticeItem {
    pub prompt: String,
    pub answer: String,
}

/// One exchange step within a lesson's guided dialogue.
///
/// Dialogue lines may carry inline `**emphasis**` markup. That markup is an
/// opaque formatted value owned by the presentation layer; nothing in this
/// crate interprets or strips it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Turn {
    #[serde(rename = "turn_number")]
    pub index: u32,
    #[serde(default)]
    pub section: String,
    #[serde(rename = "teacher_dialogue", default)]
    pub teacher_line: String,
    #[serde(rename = "student_dialogue", default)]
    pub student_line: Option<String>,
    #[serde(default)]
    pub justification: Option<String>,
}

/// One course lesson.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lesson {
    #[serde(rename = "lesson_title")]
    pub title: String,
    #[serde(default)]
    pub objective: String,
    #[serde(rename = "thinking_method_focus", default)]
    pub focus_tags: Vec<String>,
    #[serde(rename = "key_vocabulary", default)]
    pub vocabulary: Vec<VocabItem>,
    #[serde(default)]
    pub turns: Vec<Turn>,
    #[serde(default)]
    pub practice: Vec<PracticeItem>,
    // Not on the wire; filled in from the owning shard during assembly.
    #[serde(skip)]
    pub part: String,
}

impl Lesson {
    /// The lesson's practice deck: the explicit list when present,
    /// otherwise one card per turn with a non-empty student line, in turn
    /// order.
    pub fn practice_items(&self) -> Vec<PracticeItem> {
        if !self.practice.is_empty() {
            return self.practice.clone();
        }
        self.turns
            .iter()
            .filter_map(|turn| {
                turn.student_line
                    .as_deref()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
            })
            .enumerate()
            .map(|(i, answer)| PracticeItem {
                prompt: format!("Say it in isiXhosa (card {})", i + 1),
                answer: answer.to_string(),
            })
            .collect()
    }
}

/// One course shard as fetched from disk: a named contiguous slice of the
/// course's lessons.
#[derive(Debug, Clone, Deserialize)]
pub struct LessonPart {
    pub course_name: String,
    pub part_name: String,
    #[serde(default)]
    pub lessons_covered: String,
    pub lessons: Vec<Lesson>,
}

/// The whole course, assembled from its shards in declared order.
///
/// A lesson's global number is its 1-based position in `lessons`. Numbers
/// are recomputed on every assembly and are only meaningful for the shard
/// set they came from.
#[derive(Debug, Clone)]
pub struct Course {
    pub course_name: String,
    pub part_names: Vec<String>,
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Concatenates the given parts, tagging each lesson with its part
    /// name. Part order is the caller's declared order.
    pub fn assemble(parts: Vec<LessonPart>) -> Self {
        let course_name = parts
            .first()
            .map(|part| part.course_name.clone())
            .unwrap_or_default();
        let mut part_names = Vec::with_capacity(parts.len());
        let mut lessons = Vec::new();

        for part in parts {
            part_names.push(part.part_name.clone());
            for mut lesson in part.lessons {
                lesson.part = part.part_name.clone();
                lessons.push(lesson);
            }
        }

        Course { course_name, part_names, lessons }
    }

    /// Looks up a lesson by its 1-based global number.
    pub fn lesson(&self, number: usize) -> Result<&Lesson, NotFoundError> {
        if number < 1 || number > self.lessons.len() {
            return Err(NotFoundError::Lesson {
                number,
                available: self.lessons.len(),
            });
        }
        Ok(&self.lessons[number - 1])
    }

    /// Lessons paired with their global numbers.
    pub fn numbered_lessons(&self) -> impl Iterator<Item = (usize, &Lesson)> {
        self.lessons.iter().enumerate().map(|(i, lesson)| (i + 1, lesson))
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::test_data::{lesson, part, turn};
    use super::*;

    fn three_two_course() -> Course {
        let a = part(
            "Foundations",
            vec![
                lesson("A1", vec![]),
                lesson("A2", vec![]),
                lesson("A3", vec![]),
            ],
        );
        let b = part("Part 2", vec![lesson("B1", vec![]), lesson("B2", vec![])]);
        Course::assemble(vec![a, b])
    }

    #[test]
    fn numbering_follows_shard_order() {
        let course = three_two_course();
        assert_eq!(course.len(), 5);
        // Lesson 4 is the second lesson of the second shard.
        let fourth = course.lesson(4).unwrap();
        assert_eq!(fourth.title, "B1");
        assert_eq!(course.lesson(5).unwrap().title, "B2");
        assert_eq!(fourth.part, "Part 2");
        assert_eq!(course.lesson(1).unwrap().part, "Foundations");
    }

    #[test]
    fn out_of_range_lookup_is_not_found() {
        let course = three_two_course();
        assert_eq!(
            course.lesson(0),
            Err(NotFoundError::Lesson { number: 0, available: 5 })
        );
        assert_eq!(
            course.lesson(6),
            Err(NotFoundError::Lesson { number: 6, available: 5 })
        );
    }

    #[test]
    fn numbered_lessons_are_gapless() {
        let course = three_two_course();
        let numbers: Vec<usize> = course.numbered_lessons().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn explicit_practice_wins_over_derived() {
        let mut subject = lesson("L", vec![turn(1, "Molo.", Some("Molo, mfundisi."))]);
        subject.practice = vec![PracticeItem {
            prompt: "Greet your teacher".to_string(),
            answer: "Molo, mfundisi.".to_string(),
        }];
        let items = subject.practice_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].prompt, "Greet your teacher");
    }

    #[test]
    fn derived_practice_uses_student_lines_in_turn_order() {
        let subject = lesson(
            "L",
            vec![
                turn(1, "Molo.", None),
                turn(2, "Say hello.", Some("  Molo  ")),
                turn(3, "Again.", Some("")),
                turn(4, "And goodbye.", Some("Hamba kakuhle")),
            ],
        );
        let items = subject.practice_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].prompt, "Say it in isiXhosa (card 1)");
        assert_eq!(items[0].answer, "Molo");
        assert_eq!(items[1].prompt, "Say it in isiXhosa (card 2)");
        assert_eq!(items[1].answer, "Hamba kakuhle");
    }

    #[test]
    fn course_lesson_wire_shape_deserializes() {
        let raw = r#"{
            "course_name": "Xhosa",
            "part_name": "Foundations",
            "lessons_covered": "1-10",
            "lessons": [{
                "lesson_title": "**Lesson 1**",
                "objective": "Greet people",
                "thinking_method_focus": ["build-up"],
                "key_vocabulary": [{"word": "molo", "meaning": "hello"}],
                "turns": [{
                    "turn_number": 1,
                    "section": "Warmup",
                    "teacher_dialogue": "Say **molo**.",
                    "student_dialogue": "Molo.",
                    "justification": "Start simple."
                }]
            }]
        }"#;
        let shard: LessonPart = serde_json::from_str(raw).unwrap();
        assert_eq!(shard.part_name, "Foundations");
        let first = &shard.lessons[0];
        assert_eq!(first.title, "**Lesson 1**");
        assert_eq!(first.vocabulary[0].word, "molo");
        assert_eq!(first.turns[0].teacher_line, "Say **molo**.");
        assert_eq!(first.turns[0].student_line.as_deref(), Some("Molo."));
    }

    #[test]
    fn missing_optional_fields_deserialize_blank() {
        let raw = r#"[{"id": 7, "xh": "molo", "deck": "Xhosa Notes::Greetings"}]"#;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(raw).unwrap();
        assert_eq!(entries[0].target_text, "");
        assert_eq!(entries[0].source_context, None);
        assert_eq!(entries[0].tag, None);
    }
}
