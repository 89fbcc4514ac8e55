//! Name, description and property extraction for detected entities
//!
//! Extractors never guess: when a pattern finds nothing the property is left
//! out of the map.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::howto;
use crate::normalize::{collapse_whitespace, strip_markup, strip_tags, truncate_chars};
use crate::signals::{EntityType, BREADCRUMB_TRAIL_RE, BYLINE_RE, PRICE_RE, PUBLISH_DATE_RE, QA_MARKER_RE};

pub const IN_STOCK: &str = "https://schema.org/InStock";
pub const OUT_OF_STOCK: &str = "https://schema.org/OutOfStock";
pub const DEFAULT_CURRENCY: &str = "USD";

const DESCRIPTION_MIN_CHARS: usize = 50;
const DESCRIPTION_MAX_CHARS: usize = 200;
const DESCRIPTION_FALLBACK_CHARS: usize = 160;

static MARKDOWN_H1_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("Invalid H1 regex pattern"));

static PARAGRAPH_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n").expect("Invalid paragraph regex pattern"));

static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*+|>]|\d+[.)])").expect("Invalid list item regex pattern"));

static OUT_OF_STOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:out of stock|sold out|unavailable|not in stock)\b")
        .expect("Invalid availability regex pattern")
});

static IN_STOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:in stock|available now|ships today)\b")
        .expect("Invalid availability regex pattern")
});

static FOUNDING_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:founded|established)\s+(?:in\s+)?(\d{4})\b")
        .expect("Invalid founding date regex pattern")
});

static BREADCRUMB_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]*(?:>|»|›|/)[ \t]*").expect("Invalid breadcrumb regex pattern"));

/// Type-specific name fallbacks, tried in order after the H1
static NAME_FALLBACKS: Lazy<Vec<(EntityType, Regex)>> = Lazy::new(|| {
    [
        (EntityType::Product, r"(?im)^[ \t]*product(?: name)?[ \t]*:[ \t]*(.+)$"),
        (EntityType::Article, r"(?im)^[ \t]*(?:title|headline)[ \t]*:[ \t]*(.+)$"),
        (EntityType::Person, r"(?:[Nn]ame|[Bb]y):?[ \t]*([A-Z][a-z]+[ \t][A-Z][a-z]+)"),
        (EntityType::Organization, r"(?im)^[ \t]*(?:company|organization)[ \t]*:[ \t]*(.+)$"),
        (EntityType::Organization, r"\b([A-Z][\w&]*(?:[ \t][A-Z][\w&]*)*[ \t](?:Inc|LLC|Ltd|Corp|GmbH)\b\.?)"),
        (EntityType::HowTo, r"(?im)^[ \t]*(how to .+)$"),
        (EntityType::Faq, r"(?i)\b(frequently asked questions)\b"),
    ]
    .iter()
    .map(|(t, p)| (*t, Regex::new(p).expect("Invalid name fallback regex pattern")))
    .collect()
});

/// A question/answer pair from FAQ content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPair {
    pub question: String,
    pub answer: String,
}

/// Display name: first H1, then a type-specific pattern, then the type name
pub fn extract_name(content: &str, entity_type: EntityType) -> String {
    if let Some(h1) = first_heading(content) {
        return h1;
    }

    NAME_FALLBACKS
        .iter()
        .filter(|(t, _)| *t == entity_type)
        .find_map(|(_, re)| {
            re.captures(content)
                .and_then(|caps| caps.get(1))
                .map(|m| collapse_whitespace(m.as_str()))
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| entity_type.as_str().to_string())
}

/// First Markdown `# ` heading, or the first HTML `<h1>`
pub fn first_heading(content: &str) -> Option<String> {
    if let Some(caps) = MARKDOWN_H1_RE.captures(content) {
        let heading = collapse_whitespace(&caps[1]);
        if !heading.is_empty() {
            return Some(heading);
        }
    }

    if content.contains("<h1") || content.contains("<H1") {
        let fragment = Html::parse_fragment(content);
        if let Ok(selector) = Selector::parse("h1") {
            for element in fragment.select(&selector) {
                let text: String = element.text().collect::<Vec<_>>().join(" ");
                let heading = collapse_whitespace(&text);
                if !heading.is_empty() {
                    return Some(heading);
                }
            }
        }
    }

    None
}

/// Short description: first plain paragraph of 50-200 chars, else the first
/// 160 chars of content with markup removed
pub fn extract_description(content: &str) -> String {
    for paragraph in PARAGRAPH_SPLIT_RE.split(content) {
        let text = collapse_whitespace(&strip_tags(paragraph));
        if text.is_empty() || text.starts_with('#') || LIST_ITEM_RE.is_match(&text) {
            continue;
        }
        let len = text.chars().count();
        if (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len) {
            return text;
        }
    }

    truncate_chars(&strip_markup(content), DESCRIPTION_FALLBACK_CHARS)
        .trim()
        .to_string()
}

/// Type-specific structured properties
pub fn extract_properties(content: &str, entity_type: EntityType) -> BTreeMap<String, Value> {
    let mut properties = BTreeMap::new();

    match entity_type {
        EntityType::Product => {
            if let Some(price) = extract_price(content) {
                properties.insert("price".to_string(), json!(price));
                properties.insert("priceCurrency".to_string(), json!(DEFAULT_CURRENCY));
            }
            if let Some(availability) = extract_availability(content) {
                properties.insert("availability".to_string(), json!(availability));
            }
        }
        EntityType::Article => {
            if let Some(date) = extract_date_published(content) {
                properties.insert("datePublished".to_string(), json!(date));
            }
            if let Some(author) = extract_author(content) {
                properties.insert("author".to_string(), json!(author));
            }
        }
        EntityType::Organization => {
            if let Some(year) = extract_founding_date(content) {
                properties.insert("foundingDate".to_string(), json!(year));
            }
        }
        EntityType::Faq => {
            let pairs = extract_faq_pairs(content);
            if !pairs.is_empty() {
                properties.insert("questions".to_string(), json!(pairs));
            }
        }
        EntityType::HowTo => {
            let steps: Vec<String> = howto::extract_steps(content)
                .into_iter()
                .map(|step| step.text)
                .collect();
            if !steps.is_empty() {
                properties.insert("steps".to_string(), json!(steps));
            }
        }
        EntityType::BreadcrumbList => {
            let items = extract_breadcrumbs(content);
            if !items.is_empty() {
                properties.insert("items".to_string(), json!(items));
            }
        }
        EntityType::Person | EntityType::WebPage => {}
    }

    properties
}

/// First dollar amount, without thousands separators
pub fn extract_price(content: &str) -> Option<String> {
    PRICE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace(',', ""))
        .filter(|p| p.chars().any(|c| c.is_ascii_digit()))
}

/// schema.org availability URL from stock wording
pub fn extract_availability(content: &str) -> Option<&'static str> {
    if OUT_OF_STOCK_RE.is_match(content) {
        Some(OUT_OF_STOCK)
    } else if IN_STOCK_RE.is_match(content) {
        Some(IN_STOCK)
    } else {
        None
    }
}

/// Date token following "published"/"posted", verbatim
pub fn extract_date_published(content: &str) -> Option<String> {
    PUBLISH_DATE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Capitalized two-word name following "by"
pub fn extract_author(content: &str) -> Option<String> {
    BYLINE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| collapse_whitespace(m.as_str()))
}

pub fn extract_founding_date(content: &str) -> Option<String> {
    FOUNDING_DATE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Question/answer pairs in input order.
///
/// Each question runs to the next answer marker and each answer runs to the
/// next question marker (or the end of the content).
pub fn extract_faq_pairs(content: &str) -> Vec<FaqPair> {
    let markers: Vec<(bool, usize, usize)> = QA_MARKER_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = caps.get(1)?.as_str().to_ascii_lowercase();
            let is_question = label == "q" || label == "question";
            Some((is_question, whole.start(), whole.end()))
        })
        .collect();

    let mut pairs = Vec::new();
    let mut i = 0;
    while i < markers.len() {
        let (is_question, _, q_end) = markers[i];
        if !is_question {
            i += 1;
            continue;
        }

        // The answer marker must come right after the question
        let Some(&(false, a_start, a_end)) = markers.get(i + 1) else {
            i += 1;
            continue;
        };

        let answer_end = markers[i + 2..]
            .iter()
            .find(|(q, _, _)| *q)
            .map(|(_, start, _)| *start)
            .unwrap_or(content.len());

        let question = collapse_whitespace(&content[q_end..a_start]);
        let answer = collapse_whitespace(&content[a_end..answer_end]);
        if !question.is_empty() && !answer.is_empty() {
            pairs.push(FaqPair { question, answer });
        }

        i += 2;
    }

    pairs
}

/// Items of the first "Home > ... > Page" trail
pub fn extract_breadcrumbs(content: &str) -> Vec<String> {
    BREADCRUMB_TRAIL_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|trail| {
            BREADCRUMB_SEPARATOR_RE
                .split(trail.as_str())
                .map(collapse_whitespace)
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_markdown_h1() {
        let content = "Intro\n# Wireless Mouse\n\nBuy now";
        assert_eq!(extract_name(content, EntityType::Product), "Wireless Mouse");
    }

    #[test]
    fn test_name_from_html_h1() {
        let content = "<div><h1 class=\"title\">  Ergonomic <em>Keyboard</em> </h1><p>text</p></div>";
        assert_eq!(extract_name(content, EntityType::Product), "Ergonomic Keyboard");
    }

    #[test]
    fn test_name_fallbacks() {
        assert_eq!(
            extract_name("Product: Trail Shoe\nPrice $80", EntityType::Product),
            "Trail Shoe"
        );
        assert_eq!(
            extract_name("A profile written by Ada Lovelace", EntityType::Person),
            "Ada Lovelace"
        );
        assert_eq!(
            extract_name("We are Acme Widgets Inc. and we build things", EntityType::Organization),
            "Acme Widgets Inc."
        );
        assert_eq!(extract_name("nothing useful", EntityType::Faq), "FAQ");
        assert_eq!(extract_name("nothing useful", EntityType::Product), "Product");
    }

    #[test]
    fn test_description_prefers_plain_paragraph() {
        let content = "# Title\n\n- list item that is long enough to count as a paragraph here\n\nThis paragraph describes the product in enough detail to be used as a summary.\n\nMore.";
        assert_eq!(
            extract_description(content),
            "This paragraph describes the product in enough detail to be used as a summary."
        );
    }

    #[test]
    fn test_description_fallback_strips_markup() {
        let content = "# Wireless Mouse\n\nBuy now for $29.99!\n\nIn stock";
        assert_eq!(extract_description(content), "Wireless Mouse Buy now for $29.99! In stock");

        let long = format!("# T\n\n{}", "word ".repeat(100));
        assert!(extract_description(&long).chars().count() <= 160);
    }

    #[test]
    fn test_product_properties() {
        let props = extract_properties("Now $1,299.00 - in stock", EntityType::Product);
        assert_eq!(props["price"], json!("1299.00"));
        assert_eq!(props["priceCurrency"], json!("USD"));
        assert_eq!(props["availability"], json!(IN_STOCK));

        let props = extract_properties("Sold out, sorry", EntityType::Product);
        assert!(!props.contains_key("price"));
        assert_eq!(props["availability"], json!(OUT_OF_STOCK));
    }

    #[test]
    fn test_article_properties() {
        let props = extract_properties(
            "by Jane Smith\n\nPublished on March 3, 2024",
            EntityType::Article,
        );
        assert_eq!(props["author"], json!("Jane Smith"));
        assert_eq!(props["datePublished"], json!("March 3, 2024"));

        let props = extract_properties("no byline here", EntityType::Article);
        assert!(props.is_empty());
    }

    #[test]
    fn test_organization_founding_date() {
        let props = extract_properties("Acme was founded in 1999.", EntityType::Organization);
        assert_eq!(props["foundingDate"], json!("1999"));
    }

    #[test]
    fn test_faq_pairs_in_order() {
        let content = "Q: What is X?\nA: X is Y.\n\nQ: How does X work?\nA: It works by Z.";
        let pairs = extract_faq_pairs(content);
        assert_eq!(
            pairs,
            vec![
                FaqPair { question: "What is X?".into(), answer: "X is Y.".into() },
                FaqPair { question: "How does X work?".into(), answer: "It works by Z.".into() },
            ]
        );
    }

    #[test]
    fn test_faq_long_form_markers() {
        let content = "Question: Can I return it?\nAnswer: Yes, within 30 days.\nQuestion: Unanswered?";
        let pairs = extract_faq_pairs(content);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].answer, "Yes, within 30 days.");
    }

    #[test]
    fn test_breadcrumbs() {
        let items = extract_breadcrumbs("Home > Shop > Computer Mice\n\n# Wireless Mouse");
        assert_eq!(items, vec!["Home", "Shop", "Computer Mice"]);
        assert!(extract_breadcrumbs("no trail").is_empty());
    }
}
