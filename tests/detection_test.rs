//! End-to-end detection tests against representative page content

use ldgen::detect::{detect_entities, score_entities};
use ldgen::extract::IN_STOCK;
use ldgen::signals::EntityType;
use serde_json::json;

// ============================================================================
// Sample content
// ============================================================================

const PRODUCT_SNIPPET: &str = "# Wireless Mouse\n\nBuy now for $29.99!\n\nIn stock\n\nAdd to cart";

const ARTICLE_SNIPPET: &str =
    "# My Post\n\nby Jane Smith\n\nPublished on March 3, 2024\n\n5 minutes read\n\nBody text...";

const FAQ_SNIPPET: &str = "Q: What is X?\nA: X is Y.\n\nQ: How does X work?\nA: It works by Z.";

const PRODUCT_PAGE_HTML: &str = r#"
<html>
<body>
  <h1>Ergo Keyboard Pro</h1>
  <p>A split mechanical keyboard with hot-swappable switches and a tented frame for all-day comfort.</p>
  <p>Price: $1,249.00</p>
  <p>In stock. Free shipping on orders over $50.</p>
  <button>Add to cart</button>
  <p>SKU: EKP-2024</p>
</body>
</html>
"#;

const BLOG_POST: &str = "# Why We Rewrote Our Parser

By Alex Morgan

Published on January 15, 2024 · 8 min read

Parsing is the first thing every compiler does, and for years ours was a hand-written recursive descent parser that grew one special case at a time.

Tags: parsing, compilers
";

// ============================================================================
// Short snippets
// ============================================================================

#[test]
fn test_short_product_snippet() {
    let entities = detect_entities(PRODUCT_SNIPPET);

    assert_eq!(entities.len(), 1);
    let product = &entities[0];
    assert_eq!(product.entity_type, EntityType::Product);
    assert!(product.confidence >= 0.6);
    assert_eq!(product.name, "Wireless Mouse");
    assert_eq!(product.properties["price"], json!("29.99"));
    assert_eq!(product.properties["priceCurrency"], json!("USD"));
    assert_eq!(product.properties["availability"], json!(IN_STOCK));
}

#[test]
fn test_short_article_snippet() {
    let entities = detect_entities(ARTICLE_SNIPPET);
    let article = entities
        .iter()
        .find(|e| e.entity_type == EntityType::Article)
        .expect("article detected");

    assert!(article.confidence >= 0.6);
    assert_eq!(article.properties["author"], json!("Jane Smith"));
    assert_eq!(article.properties["datePublished"], json!("March 3, 2024"));
}

#[test]
fn test_faq_snippet_pairs_in_order() {
    let entities = detect_entities(FAQ_SNIPPET);

    assert_eq!(entities[0].entity_type, EntityType::Faq);
    assert_eq!(
        entities[0].properties["questions"],
        json!([
            { "question": "What is X?", "answer": "X is Y." },
            { "question": "How does X work?", "answer": "It works by Z." },
        ])
    );
}

#[test]
fn test_short_content_without_signals() {
    let content = "Just a short note about nothing at all.";
    assert!(content.len() < 100);
    assert!(detect_entities(content).is_empty());
    assert!(score_entities(content).is_empty());
}

// ============================================================================
// Longer pages
// ============================================================================

#[test]
fn test_html_product_page() {
    let entities = detect_entities(PRODUCT_PAGE_HTML);
    let product = &entities[0];

    assert_eq!(product.entity_type, EntityType::Product);
    assert_eq!(product.name, "Ergo Keyboard Pro");
    assert_eq!(product.properties["price"], json!("1249.00"));
    assert!(!entities.iter().any(|e| e.entity_type == EntityType::Article));
}

#[test]
fn test_blog_post_excludes_product() {
    let entities = detect_entities(BLOG_POST);

    assert_eq!(entities[0].entity_type, EntityType::Article);
    assert_eq!(entities[0].name, "Why We Rewrote Our Parser");
    assert_eq!(entities[0].properties["author"], json!("Alex Morgan"));
    assert!(!entities.iter().any(|e| e.entity_type == EntityType::Product));
    assert!(!entities.iter().any(|e| e.entity_type == EntityType::HowTo));
}

#[test]
fn test_detection_is_deterministic() {
    for content in [PRODUCT_SNIPPET, ARTICLE_SNIPPET, FAQ_SNIPPET, PRODUCT_PAGE_HTML, BLOG_POST] {
        assert_eq!(detect_entities(content), detect_entities(content));
        assert_eq!(score_entities(content), score_entities(content));
    }
}

#[test]
fn test_score_breakdown_covers_all_candidates() {
    let scores = score_entities(BLOG_POST);
    assert_eq!(scores.len(), EntityType::CANDIDATES.len());

    let article = scores
        .iter()
        .find(|s| s.entity_type == EntityType::Article)
        .expect("article scored");
    assert!(article.strong_matches >= 2);
    assert!(article.evidence.iter().any(|e| e.starts_with("strong:")));

    let product = scores
        .iter()
        .find(|s| s.entity_type == EntityType::Product)
        .expect("product scored");
    assert!(product.evidence.iter().any(|e| e == "exclusion:Article"));
}
