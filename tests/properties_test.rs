//! Property tests for the detection and synthesis invariants

use std::collections::BTreeMap;

use ldgen::eeat::AuthorSignal;
use ldgen::howto::extract_steps;
use ldgen::{
    add_eeat_signals, create_person_schema, detect_entities, generate_from_content,
    generate_howto_schema, generate_schema, validate_round_trip, validate_schema, DetectedEntity,
    EeatSignals, EntityType, HowToOptions, PersonOptions,
};
use proptest::prelude::*;
use serde_json::json;

// -- Strategy helpers --

const FRAGMENTS: &[&str] = &[
    "# Wireless Mouse",
    "Buy now for $29.99!",
    "Add to cart",
    "In stock",
    "Out of stock",
    "SKU: WM-100",
    "Free shipping on every order.",
    "by Jane Smith",
    "Published on March 3, 2024",
    "5 minutes read",
    "Tags: news, tech",
    "Q: What is X?",
    "A: X is Y.",
    "Frequently Asked Questions",
    "Step 1: Grind the beans.",
    "Step 2: Boil the water.",
    "1. Preheat the oven",
    "2. Mix the batter",
    "How to bake bread",
    "What you'll need: flour, water.",
    "Acme Inc. was founded in 1999.",
    "Our mission is simple.",
    "Contact us to learn more.",
    "She is a software engineer.",
    "Biography: born in 1980 in Ohio.",
    "Home > Shop > Mice",
    "This is not a product.",
    "Compared to other products, ours is cheaper.",
    "Some ordinary prose that carries no particular signal at all.",
];

fn arb_content() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(FRAGMENTS), 0..12).prop_map(|parts| parts.join("\n\n")),
        "\\PC{0,300}",
    ]
}

fn arb_page_url() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z]{1,10}").prop_map(|slug| slug.map(|s| format!("https://example.com/{}", s)))
}

fn arb_signals() -> impl Strategy<Value = EeatSignals> {
    (
        prop::option::of("[A-Z][a-z]{1,8} [A-Z][a-z]{1,8}"),
        prop::option::of("20[0-9]{2}-[01][0-9]-[0-3][0-9]"),
        prop::option::of("20[0-9]{2}-[01][0-9]-[0-3][0-9]"),
        prop::collection::vec("https://[a-z]{1,8}\\.org/[a-z]{1,8}", 0..3),
    )
        .prop_map(|(author, date_published, date_modified, citations)| EeatSignals {
            author: author.map(AuthorSignal::named),
            date_published,
            date_modified,
            citations,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn confidence_is_bounded(content in arb_content()) {
        for entity in detect_entities(&content) {
            prop_assert!((0.0..=1.0).contains(&entity.confidence),
                "{} confidence {} out of range", entity.entity_type, entity.confidence);
        }
    }

    #[test]
    fn results_sorted_and_capped(content in arb_content()) {
        let entities = detect_entities(&content);
        prop_assert!(entities.len() <= 2);
        for pair in entities.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn confident_top_excludes_rivals(content in arb_content()) {
        let entities = detect_entities(&content);
        if let Some(top) = entities.first() {
            if top.confidence >= 0.6 {
                for other in &entities[1..] {
                    prop_assert!(!top.entity_type.is_exclusive_with(other.entity_type),
                        "{} kept next to {}", other.entity_type, top.entity_type);
                }
            }
        }
    }

    #[test]
    fn generated_schema_round_trips(content in arb_content(), url in arb_page_url()) {
        let schema = generate_from_content(&content, url.as_deref());
        prop_assert!(validate_round_trip(&schema));
    }

    #[test]
    fn numeric_properties_round_trip(
        price in any::<f64>().prop_filter("finite", |f| f.is_finite()),
        url in arb_page_url(),
    ) {
        let mut properties = BTreeMap::new();
        properties.insert("price".to_string(), json!(price));
        properties.insert("priceCurrency".to_string(), json!("USD"));
        let product = DetectedEntity {
            entity_type: EntityType::Product,
            name: "Wireless Mouse".to_string(),
            description: "A mouse".to_string(),
            properties,
            confidence: 0.9,
        };

        let schema = generate_schema(&[product], url.as_deref());
        prop_assert!(validate_round_trip(&schema), "price {:e} changed on round trip", price);
    }

    #[test]
    fn eeat_does_not_mutate_and_round_trips(
        content in arb_content(),
        url in arb_page_url(),
        signals in arb_signals(),
    ) {
        let schema = generate_from_content(&content, url.as_deref());
        let before = serde_json::to_string(&schema).unwrap();
        let augmented = add_eeat_signals(&schema, &signals);

        prop_assert_eq!(serde_json::to_string(&schema).unwrap(), before);
        prop_assert!(validate_round_trip(&augmented));
        prop_assert_eq!(augmented.graph.len(), schema.graph.len());
    }

    #[test]
    fn valid_schemas_have_required_properties(content in arb_content()) {
        let schema = generate_from_content(&content, Some("https://example.com/p"));
        if validate_schema(&schema).valid {
            for entity in &schema.graph {
                if let Some(entity_type) = entity.entity_type() {
                    for property in entity_type.required_properties() {
                        prop_assert!(entity.get(property).is_some_and(|v| !v.is_null()));
                    }
                }
            }
        }
    }

    #[test]
    fn howto_positions_start_at_one(
        lines in prop::collection::vec("[A-Za-z][A-Za-z ]{0,30}", 1..8),
        numbered in any::<bool>(),
    ) {
        let content = lines
            .iter()
            .enumerate()
            .map(|(i, line)| if numbered { format!("{}. {}", i + 1, line) } else { format!("Step {}: {}", i + 1, line) })
            .collect::<Vec<_>>()
            .join("\n");

        let steps = extract_steps(&content);
        for (i, step) in steps.iter().enumerate() {
            prop_assert_eq!(step.position, i + 1);
            prop_assert_eq!(&step.name, &format!("Step {}", i + 1));
        }

        let howto = generate_howto_schema("Guide", &content, &HowToOptions::default());
        if let Some(serde_json::Value::Array(json_steps)) = howto.get("step") {
            for (i, step) in json_steps.iter().enumerate() {
                prop_assert_eq!(step["position"].as_u64(), Some(i as u64 + 1));
            }
        }
    }

    #[test]
    fn linkedin_always_in_same_as(
        handle in "[a-z0-9-]{1,20}",
        others in prop::collection::vec("https://[a-z]{1,8}\\.com/[a-z]{1,8}", 0..4),
    ) {
        let linkedin = format!("https://www.linkedin.com/in/{}", handle);
        let options = PersonOptions {
            linkedin_url: Some(linkedin.clone()),
            same_as: others,
            ..Default::default()
        };
        let person = create_person_schema("Test Person", &options);
        let same_as = person.get("sameAs").unwrap();
        let urls = same_as.as_array().unwrap();

        prop_assert_eq!(urls[0].as_str(), Some(linkedin.as_str()));
    }

    #[test]
    fn linkedin_kept_exactly_as_given(
        handle in "[a-z0-9-]{1,20}",
        pad_left in "[ \t]{0,3}",
        pad_right in "[ \t]{0,3}",
    ) {
        let linkedin = format!("{}https://www.linkedin.com/in/{}{}", pad_left, handle, pad_right);
        let options = PersonOptions {
            linkedin_url: Some(linkedin.clone()),
            ..Default::default()
        };
        let person = create_person_schema("Test Person", &options);

        prop_assert_eq!(person.get("sameAs"), Some(json!([linkedin])));
    }
}
