//! Course data ingestion for Coursegate.
//!
//! This crate provides a trait-based source interface with a JSON file
//! implementation. Every source validates what it loads, so the progress
//! layer only ever sees well-formed courses.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_source;

pub use trait_::{CourseSource, StorageError, Result};
pub use json_source::{CourseDocument, JsonCourseSource};
