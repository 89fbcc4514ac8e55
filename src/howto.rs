//! HowTo step extraction and HowTo schema generation
//!
//! Steps are found with three strategies, tried in order; the first that
//! yields anything wins:
//! 1. numbered lines (`1. Mix the flour`)
//! 2. labelled steps (`Step 2: Knead`)
//! 3. sequence words (`First, ... Then, ... Finally, ...`)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::extract::extract_description;
use crate::normalize::collapse_whitespace;
use crate::schema::{entity_id, SchemaEntity};
use crate::signals::EntityType;

static NUMBERED_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(\d+)\.\s+(.+)$").expect("Invalid numbered step regex pattern"));

static STEP_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bstep\s+(\d+)[:.]\s*").expect("Invalid step label regex pattern"));

static SEQUENCE_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:first|second|third|fourth|fifth|next|then|finally|lastly)\b,?")
        .expect("Invalid sequence word regex pattern")
});

/// A single HowTo step; `position` starts at 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToStep {
    pub position: usize,
    pub name: String,
    pub text: String,
}

impl HowToStep {
    pub fn to_json(&self) -> Value {
        json!({
            "@type": "HowToStep",
            "position": self.position,
            "name": self.name,
            "text": self.text,
        })
    }
}

/// Number step texts as `Step 1`, `Step 2`, ...
pub fn steps_from_texts(texts: impl IntoIterator<Item = String>) -> Vec<HowToStep> {
    texts
        .into_iter()
        .filter(|text| !text.trim().is_empty())
        .enumerate()
        .map(|(i, text)| HowToStep {
            position: i + 1,
            name: format!("Step {}", i + 1),
            text,
        })
        .collect()
}

/// Extract ordered steps from free-form instructions
pub fn extract_steps(content: &str) -> Vec<HowToStep> {
    let strategies: [fn(&str) -> Vec<String>; 3] = [numbered_steps, labelled_steps, sequence_steps];

    strategies
        .iter()
        .map(|strategy| strategy(content))
        .find(|texts| !texts.is_empty())
        .map(steps_from_texts)
        .unwrap_or_default()
}

fn numbered_steps(content: &str) -> Vec<String> {
    NUMBERED_LINE_RE
        .captures_iter(content)
        .map(|caps| collapse_whitespace(&caps[2]))
        .filter(|text| !text.is_empty())
        .collect()
}

fn labelled_steps(content: &str) -> Vec<String> {
    let labels: Vec<(usize, usize)> = STEP_LABEL_RE
        .find_iter(content)
        .map(|m| (m.start(), m.end()))
        .collect();

    labels
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, text_start))| {
            let next_label = labels.get(i + 1).map_or(content.len(), |&(start, _)| start);
            let line_end = content[text_start..]
                .find('\n')
                .map_or(content.len(), |offset| text_start + offset);
            let text = collapse_whitespace(&content[text_start..next_label.min(line_end)]);
            (!text.is_empty()).then_some(text)
        })
        .collect()
}

fn sequence_steps(content: &str) -> Vec<String> {
    let words: Vec<(usize, usize)> = SEQUENCE_WORD_RE
        .find_iter(content)
        .map(|m| (m.start(), m.end()))
        .collect();

    words
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, text_start))| {
            let text_end = words.get(i + 1).map_or(content.len(), |&(start, _)| start);
            let text = collapse_whitespace(&content[text_start..text_end]);
            (!text.is_empty()).then_some(text)
        })
        .collect()
}

/// Estimated cost of following a HowTo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedCost {
    pub currency: String,
    pub value: String,
}

/// Options for `generate_howto_schema`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HowToOptions {
    /// Overrides the description derived from the content
    pub description: Option<String>,
    /// ISO-8601 duration, emitted verbatim (e.g. "PT30M")
    pub total_time: Option<String>,
    pub estimated_cost: Option<EstimatedCost>,
    pub supplies: Vec<String>,
    pub tools: Vec<String>,
    pub image: Option<String>,
    /// Page the instructions live on, used for `@id`
    pub page_url: Option<String>,
}

/// Build a HowTo entity from a title and instruction text.
///
/// `step` is omitted when no strategy finds any steps.
pub fn generate_howto_schema(title: &str, content: &str, options: &HowToOptions) -> SchemaEntity {
    let mut howto = SchemaEntity::new(EntityType::HowTo.schema_type())
        .with_id(entity_id(options.page_url.as_deref(), &EntityType::HowTo.fragment()))
        .with("name", title);

    let description = options
        .description
        .clone()
        .unwrap_or_else(|| extract_description(content));
    if !description.is_empty() {
        howto.insert("description", description);
    }

    if let Some(image) = &options.image {
        howto.insert("image", image.as_str());
    }
    if let Some(total_time) = &options.total_time {
        howto.insert("totalTime", total_time.as_str());
    }
    if let Some(cost) = &options.estimated_cost {
        howto.insert(
            "estimatedCost",
            json!({ "@type": "MonetaryAmount", "currency": cost.currency, "value": cost.value }),
        );
    }
    if !options.supplies.is_empty() {
        let supplies: Vec<Value> = options
            .supplies
            .iter()
            .map(|s| json!({ "@type": "HowToSupply", "name": s }))
            .collect();
        howto.insert("supply", Value::Array(supplies));
    }
    if !options.tools.is_empty() {
        let tools: Vec<Value> = options
            .tools
            .iter()
            .map(|t| json!({ "@type": "HowToTool", "name": t }))
            .collect();
        howto.insert("tool", Value::Array(tools));
    }

    let steps = extract_steps(content);
    if !steps.is_empty() {
        howto.insert("step", Value::Array(steps.iter().map(HowToStep::to_json).collect()));
    }

    howto
}
