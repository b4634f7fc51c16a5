// src/session/vocab.rs
// Vocabulary recall drills: flashcard decks built from lesson vocabulary
// at lesson, part, or whole-course scope.

use crate::catalog::{Course, PracticeItem, VocabItem};
use crate::error::NotFoundError;

/// Which slice of the course a vocabulary drill covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabScope {
    /// One lesson, by its 1-based global number.
    Lesson(usize),
    /// One part, by its 0-based position in the shard order.
    Part(usize),
    /// Every lesson in the course.
    Course,
}

/// Builds the flashcards for a vocabulary drill. Prompts carry the quoted
/// meaning; answers are the trimmed word. Pairs with a blank word or
/// meaning are skipped.
pub fn vocab_practice_items(
    course: &Course,
    scope: VocabScope,
) -> Result<Vec<PracticeItem>, NotFoundError> {
    let vocabulary: Vec<&VocabItem> = match scope {
        VocabScope::Lesson(number) => course.lesson(number)?.vocabulary.iter().collect(),
        VocabScope::Part(index) => {
            let part_name = course.part_names.get(index).ok_or(NotFoundError::Part {
                index,
                available: course.part_names.len(),
            })?;
            course
                .lessons
                .iter()
                .filter(|lesson| &lesson.part == part_name)
                .flat_map(|lesson| lesson.vocabulary.iter())
                .collect()
        }
        VocabScope::Course => course
            .lessons
            .iter()
            .flat_map(|lesson| lesson.vocabulary.iter())
            .collect(),
    };

    Ok(vocabulary
        .into_iter()
        .filter(|item| !item.word.trim().is_empty() && !item.meaning.trim().is_empty())
        .map(|item| PracticeItem {
            prompt: format!("\u{201c}{}\u{201d}", item.meaning),
            answer: item.word.trim().to_string(),
        })
        .collect())
}
