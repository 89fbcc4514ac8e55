//! EEAT augmentation - folds provenance signals into a copy of a schema
//!
//! Author, publisher, reviewer and citations only land on Article entities.
//! Dates land on Article and WebPage entities and are copied verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::schema::{dedup_urls, person_node, GeneratedSchema};
use crate::signals::EntityType;

/// Who wrote the content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorSignal {
    pub name: String,
    /// The first credential becomes the author's `jobTitle`
    pub credentials: Vec<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub same_as: Vec<String>,
    pub url: Option<String>,
}

impl AuthorSignal {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Profile URLs, LinkedIn first, without duplicates
    pub fn profiles(&self) -> Vec<String> {
        dedup_urls(
            self.linkedin_url
                .iter()
                .chain(self.twitter_url.iter())
                .chain(self.same_as.iter())
                .map(String::as_str),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublisherSignal {
    pub name: String,
    pub url: Option<String>,
    /// Logo image URL
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewerSignal {
    pub name: String,
    pub credentials: Vec<String>,
}

/// Provenance bundle supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EeatSignals {
    pub author: Option<AuthorSignal>,
    /// ISO date, copied as given
    pub date_published: Option<String>,
    /// ISO date, copied as given
    pub date_modified: Option<String>,
    pub publisher: Option<PublisherSignal>,
    pub reviewer: Option<ReviewerSignal>,
    /// Source URLs, emitted as `citation` WebPages
    pub citations: Vec<String>,
}

impl EeatSignals {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Return a copy of `schema` with `signals` applied. `schema` is left untouched.
pub fn add_eeat_signals(schema: &GeneratedSchema, signals: &EeatSignals) -> GeneratedSchema {
    let mut augmented = schema.clone();

    for entity in augmented.graph.iter_mut() {
        let is_article = entity.is_type(EntityType::Article);

        if is_article {
            if let Some(author) = &signals.author {
                entity.insert(
                    "author",
                    person_node(
                        &author.name,
                        author.credentials.first().map(String::as_str),
                        &author.profiles(),
                        author.url.as_deref(),
                    ),
                );
            }
            if let Some(publisher) = &signals.publisher {
                entity.insert("publisher", publisher_node(publisher));
            }
            if let Some(reviewer) = &signals.reviewer {
                entity.insert(
                    "reviewedBy",
                    person_node(
                        &reviewer.name,
                        reviewer.credentials.first().map(String::as_str),
                        &[],
                        None,
                    ),
                );
            }
            if !signals.citations.is_empty() {
                let citations: Vec<Value> = signals
                    .citations
                    .iter()
                    .map(|url| json!({ "@type": "WebPage", "url": url }))
                    .collect();
                entity.insert("citation", Value::Array(citations));
            }
        }

        if is_article || entity.is_type(EntityType::WebPage) {
            if let Some(date) = &signals.date_published {
                entity.insert("datePublished", date.as_str());
            }
            if let Some(date) = &signals.date_modified {
                entity.insert("dateModified", date.as_str());
            }
        }
    }

    augmented
}

fn publisher_node(publisher: &PublisherSignal) -> Value {
    let mut org = Map::new();
    org.insert("@type".to_string(), json!("Organization"));
    org.insert("name".to_string(), json!(publisher.name));
    if let Some(url) = &publisher.url {
        org.insert("url".to_string(), json!(url));
    }
    if let Some(logo) = &publisher.logo {
        org.insert("logo".to_string(), json!({ "@type": "ImageObject", "url": logo }));
    }
    Value::Object(org)
}
