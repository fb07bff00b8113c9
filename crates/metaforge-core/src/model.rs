//! Parsed data-model types.
//!
//! This module contains the in-memory representation of a parsed entity
//! diagram: [`Entity`] blocks and their ordered [`Property`] lists. The
//! model is built in a single parsing pass and never mutated afterwards;
//! everything the SQL emitter needs (variable names, registry codes,
//! section headings) is derived from it on demand.

use serde::Serialize;

use crate::naming;

/// One entity block from the diagram.
///
/// `code` is the diagram identifier exactly as written; the upper-cased
/// form used as the registry-code fallback is derived via
/// [`Entity::registry_code`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Diagram identifier as written (e.g. `TollRoad`)
    code: String,
    /// Quoted display name from the block header
    name: String,
    /// Properties in encounter order
    properties: Vec<Property>,
}

impl Entity {
    /// Create a new entity with an empty property list.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// The diagram identifier as written.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The quoted display name from the block header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties in the order they appeared in the block body.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Append a property, preserving encounter order.
    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// The PL/pgSQL variable holding this entity's resolved registry id,
    /// e.g. `v_tollroad_type_id` for `TollRoad`.
    pub fn variable_name(&self) -> String {
        format!("v_{}_type_id", self.code.to_lowercase())
    }

    /// The object-type code expected to exist in the registry.
    ///
    /// Resolved through the fixed mapping table; codes without an entry
    /// fall back to the upper-cased diagram code.
    pub fn registry_code(&self) -> String {
        naming::registry_code(&self.code)
    }

    /// Human-readable heading used in the generated script's comments,
    /// e.g. `Toll Road` for `toll_road`.
    pub fn heading(&self) -> String {
        naming::heading(&self.code)
    }
}

/// One typed attribute belonging to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Attribute identifier as written (never case-folded)
    code: String,
    /// Display label: the nearest preceding comment, or the code itself
    name: String,
    /// Raw diagram type token, lower-cased
    type_token: String,
    /// True iff the attribute carried the primary-key marker
    required: bool,
}

impl Property {
    /// Create a property. The type token is lower-cased before storage.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        type_token: &str,
        required: bool,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            type_token: type_token.to_lowercase(),
            required,
        }
    }

    /// The attribute identifier as written.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lower-cased diagram type token.
    pub fn type_token(&self) -> &str {
        &self.type_token
    }

    /// Whether the attribute was marked as a primary/key attribute.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The physical field name derived from the attribute code,
    /// e.g. `plate_no` for `plateNo`.
    pub fn field_name(&self) -> String {
        naming::snake_case(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_variable_name() {
        let entity = Entity::new("TollRoad", "收费公路");
        assert_eq!(entity.variable_name(), "v_tollroad_type_id");
    }

    #[test]
    fn test_entity_property_order_preserved() {
        let mut entity = Entity::new("Veh", "Vehicle");
        entity.push_property(Property::new("id", "id", "string", true));
        entity.push_property(Property::new("plateNo", "车牌号", "STRING", false));

        let codes: Vec<_> = entity.properties().iter().map(Property::code).collect();
        assert_eq!(codes, ["id", "plateNo"]);
        // Type tokens are case-folded, codes are not
        assert_eq!(entity.properties()[1].type_token(), "string");
    }

    #[test]
    fn test_property_field_name() {
        let prop = Property::new("ownerFlag", "ownerFlag", "boolean", false);
        assert_eq!(prop.field_name(), "owner_flag");
    }
}
