//! Portfolio data model (`portfolio.json`).
//!
//! The data file is produced by an external generator and is read-only for
//! the lifetime of a build. Only two things are fatal: a file that is not
//! JSON, and a top level that is not an object. Every field below is
//! optional and degrades to its empty default through [`lenient`].
//!
//! ```json
//! {
//!   "name": "Ada Lovelace",
//!   "headline": "Analyst",
//!   "projects": [{ "title": "Engine notes", "description": "...", "year": "1843" }],
//!   "githubStats": { "totalRepos": 3, "totalStars": 10, "totalCommits": 120 },
//!   "socialLinks": { "github": "https://github.com/ada" },
//!   "contact": { "email": "ada@example.com" }
//! }
//! ```

mod lenient;

use crate::debug;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Keys the generator emits that the page does not use.
const GENERATOR_KEYS: &[&str] = &[
    "avatarUrl",
    "achievements",
    "featuredRepos",
    "interests",
    "sections",
];

/// Errors that prevent reading the data file at all.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("portfolio data is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("portfolio data must be a JSON object, found {0}")]
    NotObject(&'static str),
}

// ============================================================================
// Portfolio
// ============================================================================

/// The configuration object describing all portfolio content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub headline: String,
    #[serde(deserialize_with = "lenient::text")]
    pub bio: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,

    #[serde(deserialize_with = "lenient::seq")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "lenient::seq")]
    pub experience: Vec<Job>,
    #[serde(deserialize_with = "lenient::seq")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "lenient::seq")]
    pub projects: Vec<Project>,

    #[serde(deserialize_with = "lenient::record")]
    pub github_stats: Option<GithubStats>,
    #[serde(deserialize_with = "lenient::record")]
    pub leetcode_stats: Option<LeetcodeStats>,

    /// Platform → URL, kept in file order.
    #[serde(deserialize_with = "lenient::links")]
    pub social_links: Vec<SocialLink>,
    #[serde(deserialize_with = "lenient::record")]
    pub contact: Option<Contact>,
    #[serde(deserialize_with = "lenient::record")]
    pub template_metadata: Option<TemplateMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
}

/// A position listed in the experience section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub company: String,
    #[serde(deserialize_with = "lenient::text")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::seq")]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "lenient::text")]
    pub institution: String,
    #[serde(deserialize_with = "lenient::text")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::text")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub field_of_study: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::seq")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GithubStats {
    #[serde(deserialize_with = "lenient::count")]
    pub total_repos: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub total_stars: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub total_commits: u64,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub primary_language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeetcodeStats {
    #[serde(deserialize_with = "lenient::count")]
    pub total_solved: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub easy_solved: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub medium_solved: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub hard_solved: u64,
    #[serde(deserialize_with = "lenient::opt_count")]
    pub ranking: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub email: Option<String>,
}

/// Generator metadata; only the availability badge is rendered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateMetadata {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub availability_status: Option<String>,
}

// ============================================================================
// Loading
// ============================================================================

impl Portfolio {
    /// Read and parse the data file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| DataError::Io(path.to_path_buf(), err))?;
        Self::from_json(&content)
    }

    /// Parse data from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, DataError> {
        let raw: Value = serde_json::from_str(content)?;
        match &raw {
            Value::Object(_) => {}
            Value::Array(_) => return Err(DataError::NotObject("a list")),
            Value::Null => return Err(DataError::NotObject("null")),
            _ => return Err(DataError::NotObject("a scalar")),
        }

        let mut ignored = Vec::new();
        let portfolio: Self = serde_ignored::deserialize(raw, |path| {
            ignored.push(path.to_string());
        })?;

        ignored.retain(|key| !GENERATOR_KEYS.contains(&key.as_str()));
        if !ignored.is_empty() {
            debug!("data"; "ignoring unknown keys: {}", ignored.join(", "));
        }

        Ok(portfolio)
    }

    /// Contact email, if one is set.
    pub fn email(&self) -> Option<&str> {
        self.contact.as_ref()?.email.as_deref()
    }

    /// Availability badge text, if one is set.
    pub fn availability(&self) -> Option<&str> {
        self.template_metadata.as_ref()?.availability_status.as_deref()
    }
}

// ============================================================================
// Tests
// ============================================================================
