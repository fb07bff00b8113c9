//! # Metaforge Parser
//!
//! Tolerant parser for PlantUML `entity` blocks. This crate extracts the
//! entity/property model consumed by the SQL emitter from a diagram
//! source file.
//!
//! The parser is deliberately lenient: it scans the whole source for
//! blocks of the shape `entity Code as "Name" { ... }` and silently skips
//! everything else (relationships, notes, skinparam directives, and any
//! body line that is not an attribute declaration). Parsing therefore
//! never fails; a source without entity blocks simply yields an empty
//! model.
//!
//! ## Usage
//!
//! ```
//! let source = r#"
//!     entity Veh as "Vehicle" {
//!         * id : string
//!         ' 车牌号
//!         plateNo : string
//!     }
//! "#;
//!
//! let entities = metaforge_parser::parse_entities(source);
//! assert_eq!(entities.len(), 1);
//! assert_eq!(entities["Veh"].properties().len(), 2);
//! ```

mod parser;

pub use parser::parse_entities;
