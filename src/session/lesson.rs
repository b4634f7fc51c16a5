// src/session/lesson.rs
// Walks one lesson's guided dialogue turn by turn and gates the handoff
// into flashcard practice at the end.

use crate::catalog::{Lesson, Turn};

use super::PracticeSession;

/// A walkthrough of one lesson's dialogue.
///
/// Movement has the same boundary semantics as `PracticeSession`: no
/// wrapping, no-ops past either end. At the last turn the caller swaps
/// "next" for a completion action and, when `practice_available`, offers
/// the jump into practice.
#[derive(Debug, Clone)]
pub struct LessonSession {
    lesson: Lesson,
    turn_index: usize,
}

impl LessonSession {
    pub fn new(lesson: Lesson) -> Self {
        LessonSession {
            lesson,
            turn_index: 0,
        }
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    /// The turn under the cursor, `None` for a lesson with no turns.
    pub fn current_turn(&self) -> Option<&Turn> {
        self.lesson.turns.get(self.turn_index)
    }

    pub fn next_turn(&mut self) {
        if self.turn_index + 1 < self.lesson.turns.len() {
            self.turn_index += 1;
        }
    }

    pub fn prev_turn(&mut self) {
        if self.turn_index > 0 {
            self.turn_index -= 1;
        }
    }

    /// Replaces the lesson being walked and resets the cursor.
    pub fn set_lesson(&mut self, lesson: Lesson) {
        self.lesson = lesson;
        self.turn_index = 0;
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn turn_count(&self) -> usize {
        self.lesson.turns.len()
    }

    pub fn is_first_turn(&self) -> bool {
        self.turn_index == 0
    }

    /// True on the last turn; a lesson with no turns reports true as well.
    pub fn is_last_turn(&self) -> bool {
        self.turn_index + 1 >= self.lesson.turns.len()
    }

    /// Whether this lesson has anything to practice: an explicit practice
    /// list, or turns to derive one from.
    pub fn practice_available(&self) -> bool {
        !self.lesson.practice_items().is_empty()
    }

    /// Builds the practice session for this lesson, `None` when there is
    /// nothing to practice.
    pub fn practice_session(&self) -> Option<PracticeSession> {
        let items = self.lesson.practice_items();
        if items.is_empty() {
            None
        } else {
            Some(PracticeSession::new(items))
        }
    }
}
