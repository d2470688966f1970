//! # Pricing
//!
//! Glue between formula documents and pricing requests. A [`SchemaRegistry`]
//! maps schema identifiers to parsed documents, parsing each one once. [`price`]
//! evaluates the requested terms for every item of a [`Priceable`], giving
//! each item its own evaluation session seeded with the injected values.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::ast::Program;
use crate::error::Error;
use crate::interpreter::{Evaluator, Overrides, RValue};
use crate::parser::parse_source;
use crate::validate::validate;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Unknown schema '{0}'.")]
    UnknownSchema(String),

    #[error("Cannot read formula document {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parsed formula documents keyed by schema identifier
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    documents: HashMap<String, Program>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `source` and store it under `schema`, replacing any previous document.
    pub fn register_source(&mut self, schema: impl Into<String>, source: &str) -> Result<(), Error> {
        let schema = schema.into();
        let program = parse_source(source)?;

        for diagnostic in validate(&program).iter().filter(|d| d.is_error()) {
            warn!(schema = %schema, %diagnostic, "formula document has validation errors");
        }

        debug!(
            schema = %schema,
            definitions = program.definitions.len(),
            "registered formula document"
        );
        self.documents.insert(schema, program);
        Ok(())
    }

    /// Read a formula document from disk and register it under `schema`.
    pub fn register_file(&mut self, schema: impl Into<String>, path: &Path) -> Result<(), Error> {
        let source = std::fs::read_to_string(path).map_err(|source| PricingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.register_source(schema, &source)
    }

    pub fn program(&self, schema: &str) -> Result<&Program, PricingError> {
        self.documents
            .get(schema)
            .ok_or_else(|| PricingError::UnknownSchema(schema.to_string()))
    }

    pub fn contains(&self, schema: &str) -> bool {
        self.documents.contains_key(schema)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    pub name: String,
    pub schema: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Priceable {
    pub items: Vec<PricedItem>,
}

/// A complete pricing request as read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRequest {
    #[serde(flatten)]
    pub priceable: Priceable,
    pub terms: Vec<String>,
    #[serde(default)]
    pub values: Overrides,
}

/// Item name to term name to value.
pub type PriceSheet = BTreeMap<String, BTreeMap<String, RValue>>;

/// Evaluate `terms` for every item of `priceable`.
pub fn price(
    registry: &SchemaRegistry,
    priceable: &Priceable,
    terms: &[String],
    injected: &Overrides,
) -> Result<PriceSheet, Error> {
    let mut sheet = PriceSheet::new();

    for item in &priceable.items {
        let program = registry.program(&item.schema)?;
        let evaluator = Evaluator::new(program);
        let mut overrides = injected.clone();

        let mut priced = BTreeMap::new();
        for term in terms {
            let value = evaluator.resolve(term, &mut overrides)?;
            priced.insert(term.clone(), value);
        }

        debug!(item = %item.name, schema = %item.schema, terms = terms.len(), "priced item");
        sheet.insert(item.name.clone(), priced);
    }

    Ok(sheet)
}
