//! Search query and result types

use serde::{Deserialize, Serialize};
use shopfront_core::{Category, ProductRecord};

/// Search query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free text matched against product names
    pub query: String,

    /// Department filter (`All` = no filter)
    pub category: Category,

    /// Maximum number of results (None = everything)
    pub limit: Option<usize>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Plain department browse
    pub fn browse(category: Category) -> Self {
        Self::default().with_category(category)
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A product paired with its name score against the query
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub product: &'a ProductRecord,
    pub score: f64,
}

/// How a result list was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Empty query, department listing in catalog order
    Browse,

    /// Ranked name/keyword matches
    Matched,

    /// Nothing matched; the whole department is shown instead
    Fallback,
}

/// Products returned for a query
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub kind: MatchKind,
    pub products: Vec<&'a ProductRecord>,
}

impl<'a> SearchOutcome<'a> {
    pub fn is_fallback(&self) -> bool {
        self.kind == MatchKind::Fallback
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
