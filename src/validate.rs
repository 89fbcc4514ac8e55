//! Schema validation and the JSON round trip
//!
//! Validation is a fixed required-property checklist per entity type, not a
//! check against the full schema.org vocabulary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LdgenError, Result};
use crate::schema::{GeneratedSchema, SCHEMA_CONTEXT};

/// A single problem found in a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// `@type` of the offending entity, `None` for document-level problems
    pub entity_type: Option<String>,
    pub property: String,
    pub message: String,
}

impl ValidationError {
    fn document(property: &str, message: impl Into<String>) -> Self {
        Self {
            entity_type: None,
            property: property.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.entity_type {
            Some(t) => write!(f, "{}.{}: {}", t, self.property, self.message),
            None => write!(f, "{}: {}", self.property, self.message),
        }
    }
}

/// Outcome of `validate_schema`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check `@context`, a non-empty `@graph`, and each entity's required properties
pub fn validate_schema(schema: &GeneratedSchema) -> ValidationReport {
    let mut errors = Vec::new();

    if schema.context != SCHEMA_CONTEXT {
        errors.push(ValidationError::document(
            "@context",
            format!("expected \"{}\", found \"{}\"", SCHEMA_CONTEXT, schema.context),
        ));
    }

    if schema.graph.is_empty() {
        errors.push(ValidationError::document("@graph", "graph contains no entities"));
    }

    for entity in &schema.graph {
        let Some(entity_type) = entity.entity_type() else {
            continue;
        };
        for &property in entity_type.required_properties() {
            let present = entity.get(property).is_some_and(|v| !v.is_null());
            if !present {
                errors.push(ValidationError {
                    entity_type: Some(entity.schema_type.clone()),
                    property: property.to_string(),
                    message: "missing required property".to_string(),
                });
            }
        }
    }

    ValidationReport::from_errors(errors)
}

/// Pretty-printed JSON-LD
pub fn serialize(schema: &GeneratedSchema) -> Result<String> {
    Ok(serde_json::to_string_pretty(schema)?)
}

/// Parse a JSON-LD document, rejecting a wrong `@context` or a non-array `@graph`
pub fn parse(json: &str) -> Result<GeneratedSchema> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(doc) = &value else {
        return Err(LdgenError::InvalidGraph("document is not a JSON object".into()));
    };

    match doc.get("@context") {
        Some(Value::String(ctx)) if ctx == SCHEMA_CONTEXT => {}
        Some(other) => return Err(LdgenError::InvalidContext(other.to_string())),
        None => return Err(LdgenError::InvalidContext("missing".into())),
    }

    let graph = match doc.get("@graph") {
        Some(Value::Array(graph)) => graph,
        Some(other) => return Err(LdgenError::InvalidGraph(format!("expected an array, found {}", other))),
        None => return Err(LdgenError::InvalidGraph("missing".into())),
    };

    for (i, member) in graph.iter().enumerate() {
        if !member.get("@type").is_some_and(Value::is_string) {
            return Err(LdgenError::InvalidEntity(format!("@graph[{}] has no string @type", i)));
        }
    }

    Ok(serde_json::from_value(value)?)
}

/// Both sides of a serialize/parse cycle
#[derive(Debug, Clone)]
pub struct RoundTrip {
    pub original: GeneratedSchema,
    pub serialized: String,
    pub parsed: GeneratedSchema,
    pub is_equal: bool,
}

pub fn round_trip(schema: &GeneratedSchema) -> Result<RoundTrip> {
    let serialized = serialize(schema)?;
    let parsed = parse(&serialized)?;
    let is_equal = &parsed == schema;

    Ok(RoundTrip {
        original: schema.clone(),
        serialized,
        parsed,
        is_equal,
    })
}

/// True when `parse(serialize(schema))` equals `schema`
pub fn validate_round_trip(schema: &GeneratedSchema) -> bool {
    round_trip(schema).map(|rt| rt.is_equal).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{generate_from_content, generate_schema, SchemaEntity};
    use serde_json::json;

    #[test]
    fn test_empty_graph_is_invalid() {
        let report = validate_schema(&generate_schema(&[], None));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].property, "@graph");
        assert_eq!(report.errors[0].entity_type, None);
    }

    #[test]
    fn test_missing_required_properties() {
        let schema = GeneratedSchema::new(vec![
            SchemaEntity::new("Product").with("name", "Mouse"),
            SchemaEntity::new("Organization").with("name", "Acme").with("url", Value::Null),
        ]);
        let report = validate_schema(&schema);
        let missing: Vec<String> = report.errors.iter().map(|e| e.to_string()).collect();

        assert!(!report.valid);
        assert_eq!(
            missing,
            vec![
                "Product.description: missing required property",
                "Product.offers: missing required property",
                "Organization.url: missing required property",
            ]
        );
    }

    #[test]
    fn test_unknown_types_are_not_checked() {
        let schema = GeneratedSchema::new(vec![SchemaEntity::new("Recipe")]);
        assert!(validate_schema(&schema).valid);
    }

    #[test]
    fn test_wrong_context() {
        let mut schema = GeneratedSchema::new(vec![SchemaEntity::new("WebPage")]);
        schema.context = "http://schema.org".into();
        let report = validate_schema(&schema);
        assert_eq!(report.errors[0].property, "@context");
    }

    #[test]
    fn test_parse_rejects_bad_documents() {
        assert!(matches!(
            parse(r#"{"@context":"http://schema.org","@graph":[]}"#),
            Err(LdgenError::InvalidContext(_))
        ));
        assert!(matches!(
            parse(r#"{"@context":"https://schema.org","@graph":{}}"#),
            Err(LdgenError::InvalidGraph(_))
        ));
        assert!(matches!(
            parse(r#"{"@context":"https://schema.org","@graph":[{"name":"x"}]}"#),
            Err(LdgenError::InvalidEntity(_))
        ));
        assert!(matches!(parse("[1, 2]"), Err(LdgenError::InvalidGraph(_))));
        assert!(matches!(parse("{"), Err(LdgenError::JsonError(_))));
    }

    #[test]
    fn test_round_trip_generated() {
        let schema = generate_from_content(
            "# Wireless Mouse\n\nBuy now for $29.99!\n\nIn stock\n\nAdd to cart",
            Some("https://shop.test/mouse"),
        );
        let rt = round_trip(&schema).unwrap();

        assert!(rt.is_equal);
        assert_eq!(rt.parsed, rt.original);
        assert!(rt.serialized.contains("\n  \"@context\": \"https://schema.org\""));
        assert!(validate_round_trip(&schema));
    }

    #[test]
    fn test_round_trip_keeps_float_bits() {
        for (i, j) in [(1.0, 11.0), (2.0, 11.0), (1.0, 3.0), (7.0, 59.0), (1999.0, 7.0)] {
            let rating: f64 = i / j;
            let schema = GeneratedSchema::new(vec![SchemaEntity::new("Thing").with("ratingValue", rating)]);
            let parsed = parse(&serialize(&schema).unwrap()).unwrap();

            assert_eq!(parsed, schema, "{} did not survive", rating);
            assert_eq!(parsed.graph[0].get("ratingValue").and_then(|v| v.as_f64()), Some(rating));
        }
    }

    #[test]
    fn test_parse_keeps_extra_fields() {
        let parsed = parse(
            &json!({
                "@context": "https://schema.org",
                "@graph": [{ "@type": "Thing", "@id": "#t", "sku": 42, "tags": ["a"] }]
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(parsed.graph[0].get("sku"), Some(json!(42)));
        assert_eq!(parsed.graph[0].id.as_deref(), Some("#t"));
    }
}
