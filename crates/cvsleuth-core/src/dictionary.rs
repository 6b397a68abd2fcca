/// Keyword category dictionaries.
///
/// A dictionary is an ordered list of named categories, each holding an
/// ordered list of keywords. Order is significant: results and charts list
/// categories and keywords exactly as the dictionary declares them.
///
/// The built-in dictionary is created once per process and shared through
/// an `Arc`. Custom dictionaries are read from JSON of the form
/// `[{"name": "Languages", "keywords": ["python", "java"]}, ...]`.
use crate::error::AnalysisError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// One named keyword group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// An ordered, validated set of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategoryDictionary {
    categories: Vec<Category>,
}

impl CategoryDictionary {
    /// Build a dictionary, rejecting empty or duplicate names and blank keywords.
    pub fn new(categories: Vec<Category>) -> Result<Self, AnalysisError> {
        let mut seen = HashSet::new();
        for category in &categories {
            let name = category.name.trim();
            if name.is_empty() {
                return Err(AnalysisError::Config("category name is empty".into()));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(AnalysisError::Config(format!(
                    "duplicate category {name:?}"
                )));
            }
            if category.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(AnalysisError::Config(format!(
                    "category {name:?} contains a blank keyword"
                )));
            }
        }
        Ok(Self { categories })
    }

    /// Parse a dictionary from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let categories: Vec<Category> = serde_json::from_str(json)
            .map_err(|e| AnalysisError::Config(format!("dictionary JSON: {e}")))?;
        Self::new(categories)
    }

    /// Read a dictionary from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let json = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The shared built-in dictionary.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total keyword count across all categories.
    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

impl TryFrom<Vec<Category>> for CategoryDictionary {
    type Error = AnalysisError;

    fn try_from(categories: Vec<Category>) -> Result<Self, Self::Error> {
        Self::new(categories)
    }
}

impl From<CategoryDictionary> for Vec<Category> {
    fn from(dict: CategoryDictionary) -> Self {
        dict.categories
    }
}

static BUILTIN: Lazy<Arc<CategoryDictionary>> = Lazy::new(|| {
    Arc::new(CategoryDictionary {
        categories: vec![
            Category::new(
                "Programming Languages",
                &["python", "sql", "java", "javascript", "r", "scala", "c++", "c#"],
            ),
            Category::new(
                "Data & Analytics",
                &[
                    "data",
                    "analytics",
                    "machine learning",
                    "ai",
                    "statistics",
                    "visualization",
                    "tableau",
                    "power bi",
                ],
            ),
            Category::new(
                "Cloud Platforms",
                &["aws", "azure", "gcp", "google cloud", "cloud"],
            ),
            Category::new(
                "Databases",
                &["mysql", "postgresql", "mongodb", "oracle", "sql server", "redis"],
            ),
            Category::new(
                "Management Skills",
                &["leadership", "project management", "team", "strategy", "planning"],
            ),
            Category::new(
                "Technical Skills",
                &["api", "microservices", "docker", "kubernetes", "git", "ci/cd"],
            ),
        ],
    })
});
