//! Schema synthesis - JSON-LD records from detected entities
//!
//! Every graph member is built fresh per call. Nothing here mutates an entity
//! after it has been placed in a `GeneratedSchema`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::detect::{detect_entities, DetectedEntity};
use crate::extract::FaqPair;
use crate::howto::steps_from_texts;
use crate::signals::EntityType;

/// The only `@context` this engine emits or accepts
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// One member of a JSON-LD `@graph`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEntity {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// All other fields (`name`, `offers`, `author`, ...)
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl SchemaEntity {
    pub fn new(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: schema_type.into(),
            id: None,
            properties: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.properties.insert(key.to_string(), value.into());
    }

    /// Look up a field, including `@type` and `@id`
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "@type" => Some(Value::String(self.schema_type.clone())),
            "@id" => self.id.clone().map(Value::String),
            _ => self.properties.get(key).cloned(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }

    /// Entity type behind `@type`, if it is one the engine knows
    pub fn entity_type(&self) -> Option<EntityType> {
        EntityType::from_schema_type(&self.schema_type)
    }

    pub fn is_type(&self, entity_type: EntityType) -> bool {
        self.entity_type() == Some(entity_type)
    }
}

/// A complete JSON-LD document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@graph")]
    pub graph: Vec<SchemaEntity>,
}

impl GeneratedSchema {
    pub fn new(graph: Vec<SchemaEntity>) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            graph,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Graph members of one entity type
    pub fn entities_of_type(&self, entity_type: EntityType) -> impl Iterator<Item = &SchemaEntity> {
        self.graph.iter().filter(move |e| e.is_type(entity_type))
    }
}

/// `{pageUrl}#{fragment}`, or `#{fragment}` without a URL
pub fn entity_id(page_url: Option<&str>, fragment: &str) -> String {
    match page_url {
        Some(url) => format!("{}#{}", url, fragment),
        None => format!("#{}", fragment),
    }
}

/// Convert detected entities into a JSON-LD graph.
///
/// A WebPage node using the first entity's name is prepended when the graph
/// is non-empty and does not already contain one.
pub fn generate_schema(entities: &[DetectedEntity], page_url: Option<&str>) -> GeneratedSchema {
    let mut graph: Vec<SchemaEntity> = entities
        .iter()
        .map(|entity| synthesize(entity, page_url))
        .collect();

    if let Some(first) = entities.first() {
        if !graph.iter().any(|e| e.is_type(EntityType::WebPage)) {
            let mut page = SchemaEntity::new(EntityType::WebPage.schema_type())
                .with_id(entity_id(page_url, &EntityType::WebPage.fragment()))
                .with("name", first.name.clone());
            if let Some(url) = page_url {
                page.insert("url", url);
            }
            graph.insert(0, page);
        }
    }

    debug!(entities = entities.len(), nodes = graph.len(), "synthesized schema graph");
    GeneratedSchema::new(graph)
}

/// Detect entities in `content` and synthesize their schema
pub fn generate_from_content(content: &str, page_url: Option<&str>) -> GeneratedSchema {
    let entities = detect_entities(content);
    generate_schema(&entities, page_url)
}

fn synthesize(entity: &DetectedEntity, page_url: Option<&str>) -> SchemaEntity {
    let entity_type = entity.entity_type;
    let mut node = SchemaEntity::new(entity_type.schema_type())
        .with_id(entity_id(page_url, &entity_type.fragment()))
        .with("name", entity.name.clone());

    if !entity.description.is_empty() {
        node.insert("description", entity.description.clone());
    }

    let prop = |key: &str| entity.properties.get(key).filter(|v| !v.is_null()).cloned();

    match entity_type {
        EntityType::Product => {
            let mut offer = Map::new();
            for key in ["price", "priceCurrency", "availability"] {
                if let Some(value) = prop(key) {
                    offer.insert(key.to_string(), value);
                }
            }
            if !offer.is_empty() {
                offer.insert("@type".to_string(), json!("Offer"));
                node.insert("offers", Value::Object(offer));
            }
        }
        EntityType::Article => {
            node.insert("headline", entity.name.clone());
            if let Some(date) = prop("datePublished") {
                node.insert("datePublished", date);
            }
            if let Some(Value::String(author)) = prop("author") {
                node.insert("author", person_node(&author, None, &[], None));
            }
        }
        EntityType::Organization => {
            if let Some(date) = prop("foundingDate") {
                node.insert("foundingDate", date);
            }
            if let Some(url) = page_url {
                node.insert("url", url);
            }
        }
        EntityType::Person | EntityType::WebPage => {
            if let Some(url) = page_url {
                node.insert("url", url);
            }
        }
        EntityType::Faq => {
            let pairs: Vec<FaqPair> = prop("questions")
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default();
            if !pairs.is_empty() {
                node.insert("mainEntity", faq_main_entity(&pairs));
            }
        }
        EntityType::HowTo => {
            let texts: Vec<String> = prop("steps")
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default();
            let steps = steps_from_texts(texts);
            if !steps.is_empty() {
                node.insert("step", Value::Array(steps.iter().map(|s| s.to_json()).collect()));
            }
        }
        EntityType::BreadcrumbList => {
            let items: Vec<String> = prop("items")
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default();
            if !items.is_empty() {
                let trail: Vec<BreadcrumbItem> = items
                    .into_iter()
                    .map(|name| BreadcrumbItem { name, url: None })
                    .collect();
                node.insert("itemListElement", list_items(&trail));
            }
        }
    }

    node
}

fn faq_main_entity(pairs: &[FaqPair]) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|pair| {
                json!({
                    "@type": "Question",
                    "name": pair.question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": pair.answer,
                    },
                })
            })
            .collect(),
    )
}

/// A Person node for nesting inside another entity (no `@id`)
pub(crate) fn person_node(
    name: &str,
    job_title: Option<&str>,
    same_as: &[String],
    url: Option<&str>,
) -> Value {
    let mut person = Map::new();
    person.insert("@type".to_string(), json!("Person"));
    person.insert("name".to_string(), json!(name));
    if let Some(title) = job_title {
        person.insert("jobTitle".to_string(), json!(title));
    }
    if let Some(url) = url {
        person.insert("url".to_string(), json!(url));
    }
    if !same_as.is_empty() {
        person.insert("sameAs".to_string(), json!(same_as));
    }
    Value::Object(person)
}

/// Order-preserving de-duplication of profile URLs, kept exactly as given
pub(crate) fn dedup_urls<'a>(urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for url in urls {
        if !url.is_empty() && !out.iter().any(|u| u == url) {
            out.push(url.to_string());
        }
    }
    out
}

/// Options for `create_person_schema`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonOptions {
    pub job_title: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    /// Employer name, emitted as an Organization
    pub works_for: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub same_as: Vec<String>,
    pub credentials: Vec<String>,
    /// Page the person is described on, used for `@id`
    pub page_url: Option<String>,
}

/// Standalone Person entity. `sameAs` always includes the LinkedIn URL when given.
pub fn create_person_schema(name: &str, options: &PersonOptions) -> SchemaEntity {
    let mut person = SchemaEntity::new(EntityType::Person.schema_type())
        .with_id(entity_id(options.page_url.as_deref(), &EntityType::Person.fragment()))
        .with("name", name);

    if let Some(title) = &options.job_title {
        person.insert("jobTitle", title.as_str());
    }
    if let Some(description) = &options.description {
        person.insert("description", description.as_str());
    }
    if let Some(url) = &options.url {
        person.insert("url", url.as_str());
    }
    if let Some(image) = &options.image {
        person.insert("image", image.as_str());
    }
    if let Some(employer) = &options.works_for {
        person.insert("worksFor", json!({ "@type": "Organization", "name": employer }));
    }

    let same_as = dedup_urls(
        options
            .linkedin_url
            .iter()
            .chain(options.twitter_url.iter())
            .chain(options.same_as.iter())
            .map(String::as_str),
    );
    if !same_as.is_empty() {
        person.insert("sameAs", json!(same_as));
    }

    if !options.credentials.is_empty() {
        let credentials: Vec<Value> = options
            .credentials
            .iter()
            .map(|c| json!({ "@type": "EducationalOccupationalCredential", "name": c }))
            .collect();
        person.insert("hasCredential", Value::Array(credentials));
    }

    person
}

/// One step of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

fn list_items(trail: &[BreadcrumbItem]) -> Value {
    Value::Array(
        trail
            .iter()
            .enumerate()
            .map(|(i, crumb)| {
                let mut item = Map::new();
                item.insert("@type".to_string(), json!("ListItem"));
                item.insert("position".to_string(), json!(i + 1));
                item.insert("name".to_string(), json!(crumb.name));
                if let Some(url) = &crumb.url {
                    item.insert("item".to_string(), json!(url));
                }
                Value::Object(item)
            })
            .collect(),
    )
}

/// BreadcrumbList entity from an explicit trail, positions starting at 1
pub fn create_breadcrumb_schema(trail: &[BreadcrumbItem], page_url: Option<&str>) -> SchemaEntity {
    SchemaEntity::new(EntityType::BreadcrumbList.schema_type())
        .with_id(entity_id(page_url, &EntityType::BreadcrumbList.fragment()))
        .with("itemListElement", list_items(trail))
}
