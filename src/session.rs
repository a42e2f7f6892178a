// src/session.rs

//! Search Session: the browsing state behind the UI
//!
//! A session owns everything a browsing page mutates: the current query and
//! the facet selection. It also keeps the store and the facet vocabulary,
//! which is computed once from the full collection when the session starts.
//!
//! UI input arrives as typed [`SessionEvent`]s. After any event the caller
//! asks for [`SearchSession::results`], which re-runs the filter engine over
//! the whole collection.
//!
//! # Event lines
//!
//! Events also have a one-line text form, used by `platter browse`:
//!
//! ```text
//! query tarte aux pommes
//! add ingredient Lait de coco
//! add appliance blender
//! remove ingredient lait de coco
//! clear
//! ```

use crate::error::{Error, Result};
use crate::filter::{extract_facets, filter, FacetVocabulary};
use crate::recipe::Recipe;
use crate::selection::{Facet, SelectionState};
use crate::store::RecipeStore;
use std::str::FromStr;
use tracing::debug;

/// A single UI interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The search box now holds this text
    Query(String),
    /// The search box was cleared
    Clear,
    /// A facet value was picked
    Select(Facet, String),
    /// A selected facet value was dismissed
    Deselect(Facet, String),
}

impl FromStr for SessionEvent {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "query" | "search" => Ok(Self::Query(rest.to_string())),
            "clear" if rest.is_empty() => Ok(Self::Clear),
            "add" | "select" => {
                let (facet, value) = parse_facet_value(rest)?;
                Ok(Self::Select(facet, value))
            }
            "remove" | "deselect" => {
                let (facet, value) = parse_facet_value(rest)?;
                Ok(Self::Deselect(facet, value))
            }
            "" => Err(Error::InvalidEvent("empty line".to_string())),
            _ => Err(Error::InvalidEvent(format!("unknown command '{}'", line))),
        }
    }
}

fn parse_facet_value(rest: &str) -> Result<(Facet, String)> {
    let (facet, value) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| Error::InvalidEvent(format!("expected '<facet> <value>', got '{}'", rest)))?;

    let facet = facet
        .parse::<Facet>()
        .map_err(|_| Error::InvalidEvent(format!("unknown facet '{}'", facet)))?;

    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidEvent("missing facet value".to_string()));
    }

    Ok((facet, value.to_string()))
}

/// Browsing state over one recipe store
#[derive(Debug, Clone)]
pub struct SearchSession {
    store: RecipeStore,
    vocabulary: FacetVocabulary,
    query: String,
    selection: SelectionState,
}

impl SearchSession {
    /// Start a session with an empty query and selection
    pub fn new(store: RecipeStore) -> Self {
        let vocabulary = extract_facets(store.recipes());
        debug!(
            "Session over {} recipes, {} facet choices",
            store.len(),
            vocabulary.len()
        );
        Self {
            store,
            vocabulary,
            query: String::new(),
            selection: SelectionState::new(),
        }
    }

    /// Replace the query; returns whether it changed
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        self.query = query;
        true
    }

    /// Empty the query; returns whether it was non-empty
    pub fn clear_query(&mut self) -> bool {
        self.set_query(String::new())
    }

    /// Select a facet value; returns whether it was newly selected
    pub fn select(&mut self, facet: Facet, value: &str) -> bool {
        self.selection.add(facet, value)
    }

    /// Deselect a facet value; returns whether it was selected
    pub fn deselect(&mut self, facet: Facet, value: &str) -> bool {
        self.selection.remove(facet, value)
    }

    /// Apply one UI event; returns whether the state changed
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        debug!("Applying {:?}", event);
        match event {
            SessionEvent::Query(query) => self.set_query(query),
            SessionEvent::Clear => self.clear_query(),
            SessionEvent::Select(facet, value) => self.select(facet, &value),
            SessionEvent::Deselect(facet, value) => self.deselect(facet, &value),
        }
    }

    /// Recipes matching the current query and selection
    pub fn results(&self) -> Vec<&Recipe> {
        filter(self.store.recipes(), &self.query, &self.selection)
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current facet selection
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Facet choices of the full collection
    pub fn vocabulary(&self) -> &FacetVocabulary {
        &self.vocabulary
    }

    /// Underlying recipe store
    pub fn store(&self) -> &RecipeStore {
        &self.store
    }
}
