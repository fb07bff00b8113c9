//! SQL script emitter.
//!
//! Renders the parsed entity model into the anonymous PL/pgSQL block
//! consumed by the deployment tooling. The script resolves the business
//! domain and every object type by code, then inserts one property row
//! per attribute. The output text is an operational artifact: its shape
//! (comments, indentation, statement order) is fixed.

use std::fmt::Write as _;

use indexmap::IndexMap;
use log::debug;

use metaforge_core::{model::Entity, types};

use crate::config::AppConfig;

/// Fixed header comment block of the generated script.
const HEADER: &str = "\
-- ============================================
-- 省中心联网收费业务数据模型 - 完整属性SQL
-- 根据PlantUML实体关系图生成
-- 注意：此文件需要在主SQL脚本执行后运行
-- ============================================

";

/// Escape a string for inclusion in a single-quoted SQL literal.
fn sql_literal(text: &str) -> String {
    text.replace('\'', "''")
}

/// Render the property insert section for one entity.
///
/// `sort_counter` is the global sort order shared across all entities:
/// it continues from wherever the previous entity left off and is never
/// reset. An entity with no matched attributes still gets its section,
/// with an empty value list, exactly as the original generator emitted
/// it.
fn property_insert(entity: &Entity, sort_counter: &mut usize) -> String {
    let mut sql_lines = vec![
        format!(
            "    -- {} 属性 - {}个属性",
            entity.heading(),
            entity.properties().len()
        ),
        "    INSERT INTO datamodel_property (object_type_id, property_code, property_name, \
         data_type, field_name, field_type, required, sort_order, create_time, update_time, \
         status, is_deleted) VALUES"
            .to_string(),
    ];

    let variable = entity.variable_name();
    let values: Vec<String> = entity
        .properties()
        .iter()
        .map(|prop| {
            let sort_order = *sort_counter;
            *sort_counter += 1;

            format!(
                "    ({variable}, '{code}', '{name}', '{data_type}', '{field_name}', \
                 '{field_type}', {required}, {sort_order}, CURRENT_TIMESTAMP, \
                 CURRENT_TIMESTAMP, 1, 0)",
                code = prop.code(),
                name = sql_literal(prop.name()),
                data_type = types::logical_type(prop.type_token()),
                field_name = prop.field_name(),
                field_type = types::field_type(prop.type_token()),
                required = if prop.required() { "TRUE" } else { "FALSE" },
            )
        })
        .collect();

    sql_lines.push(values.join(",\n") + ";");
    sql_lines.join("\n")
}

/// Render the full SQL script for an ordered entity model.
pub fn render_script(entities: &IndexMap<String, Entity>, config: &AppConfig) -> String {
    let mut script = String::from(HEADER);

    script.push_str("DO $$\nDECLARE\n    v_domain_id BIGINT;\n");
    for entity in entities.values() {
        let _ = writeln!(script, "    {} BIGINT;", entity.variable_name());
    }

    script.push_str("BEGIN\n    -- 获取业务域ID和对象类型ID\n");
    let _ = writeln!(
        script,
        "    SELECT id INTO v_domain_id FROM datamodel_business_domain \
         WHERE domain_code = '{}' LIMIT 1;\n",
        config.domain_code
    );

    for entity in entities.values() {
        let _ = writeln!(
            script,
            "    SELECT id INTO {} FROM datamodel_object_type \
             WHERE object_type_code = '{}' AND domain_id = v_domain_id LIMIT 1;",
            entity.variable_name(),
            entity.registry_code()
        );
    }
    script.push('\n');

    // Sort order is global: it keeps counting across entity boundaries.
    let mut sort_counter = 1;
    for entity in entities.values() {
        debug!(
            code = entity.code(),
            properties = entity.properties().len(),
            next_sort = sort_counter;
            "Emitting property section"
        );
        script.push_str(&property_insert(entity, &mut sort_counter));
        script.push_str("\n\n");
    }

    script.push_str("END $$;\n");
    script
}

#[cfg(test)]
mod tests {
    use metaforge_core::model::Property;

    use super::*;

    fn vehicle_entity() -> Entity {
        let mut entity = Entity::new("Veh", "Vehicle");
        entity.push_property(Property::new("id", "id", "string", true));
        entity.push_property(Property::new("plateNo", "车牌号", "string", false));
        entity.push_property(Property::new("ownerFlag", "ownerFlag", "boolean", false));
        entity
    }

    fn model_of(entities: Vec<Entity>) -> IndexMap<String, Entity> {
        entities
            .into_iter()
            .map(|e| (e.code().to_string(), e))
            .collect()
    }

    #[test]
    fn test_declares_one_variable_per_entity_plus_domain() {
        let model = model_of(vec![
            Entity::new("Veh", "Vehicle"),
            Entity::new("TollRoad", "收费公路"),
        ]);
        let script = render_script(&model, &AppConfig::default());

        let declare: Vec<&str> = script
            .lines()
            .skip_while(|l| *l != "DECLARE")
            .take_while(|l| *l != "BEGIN")
            .collect();
        assert_eq!(
            declare,
            [
                "DECLARE",
                "    v_domain_id BIGINT;",
                "    v_veh_type_id BIGINT;",
                "    v_tollroad_type_id BIGINT;",
            ]
        );
    }

    #[test]
    fn test_domain_and_object_type_lookups() {
        let model = model_of(vec![Entity::new("TollRoad", "收费公路")]);
        let script = render_script(&model, &AppConfig::default());

        assert!(script.contains(
            "SELECT id INTO v_domain_id FROM datamodel_business_domain \
             WHERE domain_code = 'TOLL_COLLECTION' LIMIT 1;"
        ));
        assert!(script.contains(
            "SELECT id INTO v_tollroad_type_id FROM datamodel_object_type \
             WHERE object_type_code = 'TOLL_ROAD' AND domain_id = v_domain_id LIMIT 1;"
        ));
    }

    #[test]
    fn test_unmapped_entity_falls_back_to_uppercase_code() {
        let model = model_of(vec![Entity::new("Veh", "Vehicle")]);
        let script = render_script(&model, &AppConfig::default());

        assert!(script.contains("WHERE object_type_code = 'VEH' AND domain_id = v_domain_id"));
    }

    #[test]
    fn test_vehicle_scenario_rows() {
        let model = model_of(vec![vehicle_entity()]);
        let script = render_script(&model, &AppConfig::default());

        assert!(script.contains("-- Veh 属性 - 3个属性"));
        assert!(script.contains(
            "    (v_veh_type_id, 'id', 'id', 'STRING', 'id', 'VARCHAR', TRUE, 1, \
             CURRENT_TIMESTAMP, CURRENT_TIMESTAMP, 1, 0),"
        ));
        assert!(script.contains(
            "    (v_veh_type_id, 'plateNo', '车牌号', 'STRING', 'plate_no', 'VARCHAR', FALSE, 2, \
             CURRENT_TIMESTAMP, CURRENT_TIMESTAMP, 1, 0),"
        ));
        assert!(script.contains(
            "    (v_veh_type_id, 'ownerFlag', 'ownerFlag', 'BOOLEAN', 'owner_flag', 'BOOLEAN', \
             FALSE, 3, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP, 1, 0);"
        ));
    }

    #[test]
    fn test_sort_order_continues_across_entities() {
        let mut second = Entity::new("Medium", "通行介质");
        second.push_property(Property::new("id", "id", "string", true));
        second.push_property(Property::new("mediumType", "mediumType", "integer", false));

        let model = model_of(vec![vehicle_entity(), second]);
        let script = render_script(&model, &AppConfig::default());

        // First entity uses 1..=3, the second continues at 4 without a gap.
        assert!(script.contains("'INTEGER', FALSE, 5, CURRENT_TIMESTAMP"));
        assert!(!script.contains("'INTEGER', FALSE, 1, CURRENT_TIMESTAMP"));
    }

    #[test]
    fn test_single_quotes_doubled_in_display_name() {
        let mut entity = Entity::new("Owner", "Owner");
        entity.push_property(Property::new("name", "O'Brien", "string", false));

        let script = render_script(&model_of(vec![entity]), &AppConfig::default());
        assert!(script.contains("'name', 'O''Brien', 'STRING'"));
    }

    #[test]
    fn test_entity_without_properties_emits_empty_value_list() {
        let script = render_script(
            &model_of(vec![Entity::new("Empty", "Empty")]),
            &AppConfig::default(),
        );

        // Matches the original generator: a bare terminator after VALUES.
        assert!(script.contains("is_deleted) VALUES\n;"));
        assert!(script.contains("-- Empty 属性 - 0个属性"));
    }

    #[test]
    fn test_script_frame() {
        let script = render_script(&model_of(vec![vehicle_entity()]), &AppConfig::default());

        assert!(script.starts_with("-- ============================================\n"));
        assert!(script.contains("-- 省中心联网收费业务数据模型 - 完整属性SQL\n"));
        assert!(script.ends_with("END $$;\n"));
    }

    #[test]
    fn test_custom_domain_code() {
        let config = AppConfig {
            domain_code: "FOO".to_string(),
        };
        let script = render_script(&model_of(vec![]), &config);
        assert!(script.contains("WHERE domain_code = 'FOO' LIMIT 1;"));
    }
}
