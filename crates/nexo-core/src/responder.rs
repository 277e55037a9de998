//! Canned Responder - deterministic answers without understanding
//!
//! An ordered rule table of keyword predicates over the lower-cased query.
//! The first matching rule wins; a default bundle answers everything else,
//! so [`Responder::answer`] is total and referentially transparent.
//!
//! Rule order is a priority order. Overlapping keyword sets resolve by
//! first-match, not best-match: a query containing both "stock" and
//! "viernes" resolves to whichever rule is listed first.

use crate::types::AnswerBundle;
use serde::{Deserialize, Serialize};

/// Keyword test against the lower-cased query
///
/// Keywords are stored lower-cased; matching is plain substring search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Matches when any keyword is a substring of the query
    Any(Vec<String>),
    /// Matches when every keyword is a substring of the query
    All(Vec<String>),
}

impl Predicate {
    /// Disjunctive predicate from keyword literals
    #[must_use]
    pub fn any<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Any(keywords.into_iter().map(|k| k.into().to_lowercase()).collect())
    }

    /// Conjunctive predicate from keyword literals
    #[must_use]
    pub fn all<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::All(keywords.into_iter().map(|k| k.into().to_lowercase()).collect())
    }

    /// Test against an already lower-cased query
    #[must_use]
    pub fn matches(&self, lower_query: &str) -> bool {
        match self {
            Self::Any(keywords) => keywords.iter().any(|k| lower_query.contains(k.as_str())),
            Self::All(keywords) => keywords.iter().all(|k| lower_query.contains(k.as_str())),
        }
    }
}

/// One (predicate, bundle) pair of the rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRule {
    /// When this rule applies
    pub predicate: Predicate,
    /// What it answers
    pub bundle: AnswerBundle,
}

impl ResponseRule {
    /// Create a rule
    #[inline]
    #[must_use]
    pub fn new(predicate: Predicate, bundle: AnswerBundle) -> Self {
        Self { predicate, bundle }
    }
}

/// The keyword-matched responder
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Vec<ResponseRule>,
    default_bundle: AnswerBundle,
}

impl Responder {
    /// Create a responder from an ordered rule table and a fallback bundle
    #[must_use]
    pub fn new(rules: Vec<ResponseRule>, default_bundle: AnswerBundle) -> Self {
        Self {
            rules,
            default_bundle,
        }
    }

    /// Answer a free-text query
    ///
    /// Pure lookup: same query, same bundle, no hidden state. Empty input
    /// matches no keyword rule and falls through to the default bundle.
    #[must_use]
    pub fn answer(&self, query: &str) -> AnswerBundle {
        let lower = query.to_lowercase();

        for (i, rule) in self.rules.iter().enumerate() {
            if rule.predicate.matches(&lower) {
                tracing::debug!(rule = i, "query matched rule");
                return rule.bundle.clone();
            }
        }

        tracing::debug!("query matched no rule, using default bundle");
        self.default_bundle.clone()
    }

    /// The ordered rule table
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    /// The fallback bundle
    #[inline]
    #[must_use]
    pub fn default_bundle(&self) -> &AnswerBundle {
        &self.default_bundle
    }
}
