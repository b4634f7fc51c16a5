// src/catalog/loader.rs
// Fetches the static catalog resources and turns them into collections.
// Resources are idempotent anonymous GETs; a superseded load is simply
// dropped by the caller, never cancelled.

use std::sync::mpsc;
use std::thread;

use log::{debug, info};
use serde::de::DeserializeOwned;

use super::outline::{self, OutlineEntry};
use super::texts;
use super::{Course, DictionaryEntry, LessonPart, TextUnit};
use crate::error::LoadError;

/// Fetches catalog resources relative to one base URL.
pub struct CatalogLoader {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CatalogLoader {
    pub fn new(base_url: &str) -> Self {
        CatalogLoader {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Loads the flat dictionary collection.
    pub fn load_dictionary(&self, resource: &str) -> Result<Vec<DictionaryEntry>, LoadError> {
        let entries: Vec<DictionaryEntry> = self.fetch_json(resource)?;
        info!("loaded {} dictionary entries from {}", entries.len(), resource);
        Ok(entries)
    }

    /// Loads the texts resource and groups its lines into titled units.
    pub fn load_texts(&self, resource: &str) -> Result<Vec<TextUnit>, LoadError> {
        let lines: Vec<DictionaryEntry> = self.fetch_json(resource)?;
        let units = texts::group_texts(&lines);
        info!(
            "loaded {} text lines into {} units from {}",
            lines.len(),
            units.len(),
            resource
        );
        Ok(units)
    }

    /// Fetches every course shard concurrently and assembles the course.
    ///
    /// All shards are awaited before anything is inspected; if any failed,
    /// the whole load fails with the error of the earliest failing shard in
    /// declared order. A partially assembled course is never produced.
    pub fn load_course(&self, shards: &[&str]) -> Result<Course, LoadError> {
        let mut results: Vec<Option<Result<LessonPart, LoadError>>> =
            (0..shards.len()).map(|_| None).collect();

        thread::scope(|scope| {
            let (tx, rx) = mpsc::channel();
            for (index, shard) in shards.iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    let result = self.fetch_json::<LessonPart>(shard);
                    // The receive loop below runs until every sender hangs up.
                    let _ = tx.send((index, result));
                });
            }
            drop(tx);

            for (index, result) in rx {
                results[index] = Some(result);
            }
        });

        let mut parts = Vec::with_capacity(shards.len());
        for (shard, result) in shards.iter().zip(results) {
            match result {
                Some(Ok(part)) => parts.push(part),
                Some(Err(error)) => return Err(error),
                // A panicked fetch thread never sent its result.
                None => {
                    return Err(LoadError::Shape {
                        resource: shard.to_string(),
                        message: "shard fetch did not complete".to_string(),
                    })
                }
            }
        }

        let course = Course::assemble(parts);
        info!(
            "assembled course {:?}: {} lessons across {} parts",
            course.course_name,
            course.len(),
            course.part_names.len()
        );
        Ok(course)
    }

    /// Loads the legacy CSV course outline.
    pub fn load_outline(&self, resource: &str) -> Result<Vec<OutlineEntry>, LoadError> {
        let body = self.fetch_text(resource)?;
        let entries = outline::parse_lesson_outline(&body).map_err(|message| {
            LoadError::Shape {
                resource: resource.to_string(),
                message,
            }
        })?;
        info!("loaded {} outline rows from {}", entries.len(), resource);
        Ok(entries)
    }

    fn fetch_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, LoadError> {
        let body = self.fetch_text(resource)?;
        serde_json::from_str(&body).map_err(|source| LoadError::Json {
            resource: resource.to_string(),
            source,
        })
    }

    fn fetch_text(&self, resource: &str) -> Result<String, LoadError> {
        let url = format!("{}/{}", self.base_url, resource);
        debug!("GET {}", url);

        let response =
            self.client
                .get(&url)
                .send()
                .map_err(|source| LoadError::Request {
                    resource: resource.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| LoadError::Request {
            resource: resource.to_string(),
            source,
        })
    }
}
