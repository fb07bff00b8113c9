//! Metaforge - PlantUML entity diagrams to metadata-registry SQL
//!
//! This library converts a PlantUML entity-relationship diagram into the
//! SQL script that populates a metadata-driven schema registry
//! (`datamodel_business_domain` / `datamodel_object_type` /
//! `datamodel_property`). It is a one-shot, offline generator: parse the
//! diagram source, render the script, write it out.

pub mod config;

mod emit;
mod error;

pub use metaforge_core::{model, naming, types};

pub use error::MetaforgeError;

use indexmap::IndexMap;
use log::{debug, info};

use config::AppConfig;
use model::Entity;

/// Builder for parsing diagrams and rendering registry SQL.
///
/// # Examples
///
/// ```
/// use metaforge::{ScriptBuilder, config::AppConfig};
///
/// let source = r#"entity Veh as "Vehicle" { * id : string }"#;
///
/// let builder = ScriptBuilder::new(AppConfig::default());
/// let entities = builder.parse(source);
/// let sql = builder.render_sql(&entities);
///
/// assert!(sql.contains("v_veh_type_id"));
/// ```
#[derive(Default)]
pub struct ScriptBuilder {
    config: AppConfig,
}

impl ScriptBuilder {
    /// Create a new script builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse diagram source into the ordered entity model.
    ///
    /// Parsing is tolerant by design and cannot fail: diagram syntax
    /// that is not an entity block is skipped, and a source without
    /// entity blocks yields an empty model.
    pub fn parse(&self, source: &str) -> IndexMap<String, Entity> {
        info!("Parsing diagram source");
        let entities = metaforge_parser::parse_entities(source);
        debug!(entities = entities.len(); "Diagram parsed");
        entities
    }

    /// Render the registry SQL script for a parsed entity model.
    ///
    /// Attribute sort order is global across the whole script: numbering
    /// starts at 1 and continues across entity boundaries without
    /// resetting.
    pub fn render_sql(&self, entities: &IndexMap<String, Entity>) -> String {
        info!(entities = entities.len(); "Rendering SQL script");
        emit::render_script(entities, &self.config)
    }
}
