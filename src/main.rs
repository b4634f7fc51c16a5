// funda - main.rs
// Headless driver for the catalog engine: loads every collection from a
// base URL, reports what it found, and runs an optional dictionary search.
// The real presentation layer sits on top of the same modules.

use std::env;

mod browse;
mod catalog;
mod config;
mod error;
mod pagination;
mod query;
mod sanitize;
mod session;

use browse::BrowseState;
use catalog::loader::CatalogLoader;
use catalog::outline;
use config::Config;
use error::LoadError;
use sanitize::sanitize;
use session::{vocab_practice_items, LessonSession, VocabScope};

pub fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        let error_msg = format!(
            "Usage: {} <base-url> [search-term]",
            args.first().map(String::as_str).unwrap_or("funda")
        );
        eprintln!("{}", error_msg);
        return Err(error_msg);
    }
    let base_url = &args[1];
    let search_term = args.get(2).map(String::as_str).unwrap_or("");

    let config = Config::new();
    let loader = CatalogLoader::new(base_url);

    // Each view loads independently: a failure is shown in place of that
    // view's data and does not take the others down.
    match loader.load_dictionary(config.dictionary_file) {
        Ok(dictionary) => {
            println!("Dictionary: {} entries", dictionary.len());
            if !search_term.is_empty() {
                show_search(dictionary, search_term, config.entries_per_page);
            }
        }
        Err(error) => report_load_failure("dictionary", &error),
    }

    match loader.load_texts(config.texts_file) {
        Ok(units) => {
            println!("Texts: {} units", units.len());
            for unit in &units {
                println!("  {} ({} lines)", unit.title, unit.entries.len());
            }
        }
        Err(error) => report_load_failure("texts", &error),
    }

    match loader.load_course(config.course_shards) {
        Ok(course) => {
            println!(
                "Course {:?}: {} lessons in {} parts",
                course.course_name,
                course.len(),
                course.part_names.len()
            );
            for (number, lesson) in course.numbered_lessons() {
                let walkthrough = LessonSession::new(lesson.clone());
                println!(
                    "  Lesson {}: {} ({} turns{})",
                    number,
                    lesson.title,
                    walkthrough.turn_count(),
                    if walkthrough.practice_available() {
                        ", practice"
                    } else {
                        ""
                    }
                );
            }
            match vocab_practice_items(&course, VocabScope::Course) {
                Ok(cards) => println!("Vocabulary drill: {} cards course-wide", cards.len()),
                Err(error) => eprintln!("No vocabulary drill: {}", error),
            }
            if let Ok(first) = course.lesson(1) {
                show_practice_walk(&LessonSession::new(first.clone()));
            }
        }
        Err(error) => report_load_failure("course", &error),
    }

    match loader.load_outline(config.outline_file) {
        Ok(entries) => {
            println!("Outline: {} lessons", entries.len());
            for (part, rows) in outline::group_outline_by_part(&entries) {
                println!("  {}: {} lessons", part, rows.len());
            }
        }
        Err(error) => report_load_failure("outline", &error),
    }

    Ok(())
}

/// Prints the first page of dictionary matches for the given term.
fn show_search(dictionary: Vec<catalog::DictionaryEntry>, term: &str, page_size: usize) {
    let mut view = BrowseState::new(dictionary, page_size);
    view.set_search_term(term);
    let page = view.page();

    println!(
        "Search {:?}: page {} of {}",
        term, page.page_number, page.total_pages
    );
    for found in &page.items {
        println!(
            "  {} - {}",
            sanitize(&found.source_text),
            sanitize(&found.target_text)
        );
    }
    if page.items.is_empty() {
        println!("  no matches");
    }
}

/// Steps through a lesson's practice deck card by card.
fn show_practice_walk(walkthrough: &LessonSession) {
    let Some(mut drill) = walkthrough.practice_session() else {
        return;
    };

    println!("Practice for {:?}:", walkthrough.lesson().title);
    while let Some(card) = drill.current().cloned() {
        drill.reveal();
        println!("  {} -> {}", card.prompt, card.answer);
        if drill.is_last() {
            break;
        }
        drill.next();
    }
}

/// A load failure is terminal for its view; show it, never an empty list.
fn report_load_failure(view: &str, error: &LoadError) {
    eprintln!("Could not load the {} view: {}", view, error);
}
