//! JSON file course source.
//!
//! Reads a course document from disk. The document is either a bare array
//! of modules or an object with a `modules` array and an optional embedded
//! `policy`. A separate policy file, when given, takes precedence over the
//! embedded policy; with neither, the default policy applies.

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use coursegate_core::{validate_modules, Module, UnlockPolicyConfig};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};
use super::{CourseSource, StorageError, Result};

/// On-disk course document.
///
/// Module and submodule `id`s must be ULID strings; documents keyed by
/// numeric or slug ids fail to parse with [`StorageError::Json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDocument {
    /// Modules, in display order
    pub modules: Vec<Module>,

    /// Tenant policy bundled with the course
    #[serde(default)]
    pub policy: Option<UnlockPolicyConfig>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCourse {
    Document(CourseDocument),
    Modules(Vec<Module>),
}

impl From<RawCourse> for CourseDocument {
    fn from(raw: RawCourse) -> Self {
        match raw {
            RawCourse::Document(doc) => doc,
            RawCourse::Modules(modules) => CourseDocument { modules, policy: None },
        }
    }
}

/// File-based JSON course source. Read-only.
pub struct JsonCourseSource {
    course_path: PathBuf,
    policy_path: Option<PathBuf>,
}

impl JsonCourseSource {
    /// Create a source for a course file.
    pub fn new(course_path: impl AsRef<Path>) -> Self {
        Self {
            course_path: course_path.as_ref().to_path_buf(),
            policy_path: None,
        }
    }

    /// Read the policy from a separate file.
    pub fn with_policy_file(mut self, policy_path: impl AsRef<Path>) -> Self {
        self.policy_path = Some(policy_path.as_ref().to_path_buf());
        self
    }

    /// Path of the course file.
    pub fn course_path(&self) -> &Path {
        &self.course_path
    }

    async fn read(path: &Path) -> Result<String> {
        match fs::read_to_string(path).await {
            Ok(s) => Ok(s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load and parse the course document without validating it.
    pub async fn load_document(&self) -> Result<CourseDocument> {
        let json = Self::read(&self.course_path).await?;
        let raw: RawCourse = serde_json::from_str(&json)?;
        let doc = CourseDocument::from(raw);
        debug!(
            path = %self.course_path.display(),
            modules = doc.modules.len(),
            "loaded course document"
        );
        Ok(doc)
    }
}

#[async_trait]
impl CourseSource for JsonCourseSource {
    async fn load_modules(&self) -> Result<Vec<Module>> {
        let doc = self.load_document().await?;
        if let Err(e) = validate_modules(&doc.modules) {
            warn!(path = %self.course_path.display(), "rejected course: {}", e);
            return Err(e.into());
        }
        Ok(doc.modules)
    }

    async fn load_policy(&self) -> Result<UnlockPolicyConfig> {
        let policy: UnlockPolicyConfig = match &self.policy_path {
            Some(path) => {
                let json = Self::read(path).await?;
                debug!(path = %path.display(), "loaded policy file");
                serde_json::from_str(&json)?
            }
            None => self.load_document().await?.policy.unwrap_or_default(),
        };

        if let Err(e) = policy.validate() {
            warn!("rejected unlock policy: {}", e);
            return Err(e.into());
        }
        Ok(policy)
    }
}
