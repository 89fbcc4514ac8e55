//! Signal Library - Pattern tables that drive entity detection
//!
//! Every table here is immutable and compiled once on first use. Patterns are
//! English-only and kept in ordered slices: several extractors take the first
//! match, so reordering an entry changes output.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Semantic entity types the engine can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    Product,
    Article,
    Organization,
    Person,
    #[serde(rename = "FAQ", alias = "FAQPage")]
    Faq,
    WebPage,
    BreadcrumbList,
    HowTo,
}

impl EntityType {
    /// All entity types, in table order
    pub const ALL: [EntityType; 8] = [
        EntityType::Product,
        EntityType::Article,
        EntityType::Organization,
        EntityType::Person,
        EntityType::Faq,
        EntityType::WebPage,
        EntityType::BreadcrumbList,
        EntityType::HowTo,
    ];

    /// Types scored by the detection engine. WebPage is only ever synthesized.
    pub const CANDIDATES: [EntityType; 7] = [
        EntityType::Product,
        EntityType::Article,
        EntityType::Organization,
        EntityType::Person,
        EntityType::Faq,
        EntityType::BreadcrumbList,
        EntityType::HowTo,
    ];

    /// Entity label (e.g. "FAQ")
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Product => "Product",
            EntityType::Article => "Article",
            EntityType::Organization => "Organization",
            EntityType::Person => "Person",
            EntityType::Faq => "FAQ",
            EntityType::WebPage => "WebPage",
            EntityType::BreadcrumbList => "BreadcrumbList",
            EntityType::HowTo => "HowTo",
        }
    }

    /// schema.org `@type` emitted for this entity
    pub fn schema_type(&self) -> &'static str {
        match self {
            EntityType::Faq => "FAQPage",
            other => other.as_str(),
        }
    }

    /// Fragment used in `@id` values
    pub fn fragment(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Page structure this entity is expected to live on
    pub fn expected_structure(&self) -> Option<PageStructure> {
        match self {
            EntityType::Product => Some(PageStructure::Product),
            EntityType::Article => Some(PageStructure::Blog),
            EntityType::Organization => Some(PageStructure::Landing),
            EntityType::Faq => Some(PageStructure::Faq),
            EntityType::HowTo => Some(PageStructure::HowTo),
            EntityType::Person | EntityType::WebPage | EntityType::BreadcrumbList => None,
        }
    }

    /// Types that cannot be reported alongside this one.
    ///
    /// The table is one-directional; `is_exclusive_with` closes it.
    fn exclusion_row(&self) -> &'static [EntityType] {
        match self {
            EntityType::Product => &[EntityType::Article, EntityType::HowTo, EntityType::Faq],
            EntityType::Article => &[EntityType::Product, EntityType::HowTo],
            EntityType::HowTo => &[EntityType::Product, EntityType::Article, EntityType::Faq],
            EntityType::Organization => &[EntityType::Person],
            _ => &[],
        }
    }

    /// Symmetric mutual-exclusion check
    pub fn is_exclusive_with(&self, other: EntityType) -> bool {
        self.exclusion_row().contains(&other) || other.exclusion_row().contains(self)
    }

    /// Required properties for a valid schema entity of this type
    pub fn required_properties(&self) -> &'static [&'static str] {
        match self {
            EntityType::Product => &["name", "description", "offers"],
            EntityType::Article => &["headline", "author", "datePublished"],
            EntityType::Organization => &["name", "url"],
            EntityType::Person => &["name"],
            EntityType::Faq => &["mainEntity"],
            EntityType::BreadcrumbList => &["itemListElement"],
            EntityType::HowTo => &["name", "step"],
            EntityType::WebPage => &[],
        }
    }

    /// Parse a schema.org `@type` value
    pub fn from_schema_type(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "product" => Ok(EntityType::Product),
            "article" => Ok(EntityType::Article),
            "organization" => Ok(EntityType::Organization),
            "person" => Ok(EntityType::Person),
            "faq" | "faqpage" => Ok(EntityType::Faq),
            "webpage" => Ok(EntityType::WebPage),
            "breadcrumblist" => Ok(EntityType::BreadcrumbList),
            "howto" => Ok(EntityType::HowTo),
            other => Err(format!("Unknown entity type: {}", other)),
        }
    }
}

/// Page layouts recognized by the structure classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStructure {
    Blog,
    Product,
    Landing,
    Faq,
    HowTo,
}

impl PageStructure {
    pub const ALL: [PageStructure; 5] = [
        PageStructure::Blog,
        PageStructure::Product,
        PageStructure::Landing,
        PageStructure::Faq,
        PageStructure::HowTo,
    ];
}

impl fmt::Display for PageStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageStructure::Blog => write!(f, "blog"),
            PageStructure::Product => write!(f, "product"),
            PageStructure::Landing => write!(f, "landing"),
            PageStructure::Faq => write!(f, "faq"),
            PageStructure::HowTo => write!(f, "howto"),
        }
    }
}

/// Contribution tier of a signal pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTier {
    Strong,
    Medium,
    Keyword,
    Negative,
}

/// A compiled pattern belonging to exactly one entity type
#[derive(Debug, Clone)]
pub struct SignalPattern {
    /// Short label used in score evidence (e.g. "price")
    pub name: &'static str,
    pub tier: SignalTier,
    pub regex: Regex,
}

impl SignalPattern {
    fn new(name: &'static str, tier: SignalTier, pattern: &str) -> Self {
        Self {
            name,
            tier,
            regex: compile(pattern),
        }
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

/// A keyword matched on word boundaries, case-insensitively
#[derive(Debug, Clone)]
pub struct Keyword {
    pub text: &'static str,
    pub regex: Regex,
}

impl Keyword {
    pub fn is_present(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

fn keywords(words: &[&'static str]) -> Vec<Keyword> {
    words
        .iter()
        .map(|&text| Keyword {
            text,
            regex: compile(&format!(r"(?i)\b{}\b", regex::escape(text))),
        })
        .collect()
}

/// All signals for one entity type
#[derive(Debug, Clone)]
pub struct SignalSet {
    pub entity_type: EntityType,
    pub strong: Vec<SignalPattern>,
    pub medium: Vec<SignalPattern>,
    pub negative: Vec<SignalPattern>,
    pub keywords: Vec<Keyword>,
}

impl SignalSet {
    /// Highest raw score this type can reach; the denominator for confidence
    pub fn max_possible_score(&self) -> f64 {
        STRONG_WEIGHT * self.strong.len() as f64
            + MEDIUM_WEIGHT * self.medium.len() as f64
            + KEYWORD_WEIGHT * self.keywords.len().min(KEYWORD_CAP) as f64
    }
}

// Scoring weights
pub const STRONG_WEIGHT: f64 = 8.0;
pub const MEDIUM_WEIGHT: f64 = 4.0;
pub const KEYWORD_WEIGHT: f64 = 0.5;
pub const NEGATED_KEYWORD_WEIGHT: f64 = -2.5;
pub const COMPARISON_KEYWORD_WEIGHT: f64 = 0.15;
pub const NEGATIVE_WEIGHT: f64 = -5.0;
pub const EXCLUSION_PENALTY: f64 = -10.0;
pub const STRUCTURE_WEIGHT: f64 = 2.0;
pub const STRUCTURE_MISMATCH_PENALTY: f64 = -5.0;
/// Count at which a foreign page structure is considered dominant
pub const DOMINANT_STRUCTURE_COUNT: usize = 3;
/// Keyword contribution to the max score is capped so long lists don't dilute confidence
pub const KEYWORD_CAP: usize = 3;
/// Strong matches needed for a type to "have a strong signal"
pub const STRONG_SIGNAL_MATCHES: usize = 2;

/// Content shorter than this is skipped unless a very strong combination is present
pub const MIN_CONTENT_LENGTH: usize = 100;
/// Minimum confidence for an entity to be reported
pub const CONFIDENCE_THRESHOLD: f64 = 0.45;
/// Top-entity confidence at which exclusive types are removed
pub const EXCLUSION_CONFIDENCE: f64 = 0.6;
/// Floor applied to Product/Article with a very strong signal combination
pub const VERY_STRONG_FLOOR: f64 = 0.6;
/// Ceiling for Product/Article without a single strong match
pub const NO_STRONG_CEILING: f64 = 0.3;
/// Maximum number of entities returned by detection
pub const MAX_ENTITIES: usize = 2;

/// Negation window (characters before a keyword)
pub const NEGATION_WINDOW: usize = 50;
/// Comparison window (characters before a keyword)
pub const COMPARISON_WINDOW: usize = 30;

/// Confidence boost by strong-match count
pub fn strong_boost(strong_matches: usize) -> f64 {
    match strong_matches {
        0 => 0.0,
        1 => 0.15,
        2 => 0.25,
        _ => 0.35,
    }
}

/// Negative-penalty multiplier by strong-match count
pub fn negative_multiplier(strong_matches: usize) -> f64 {
    match strong_matches {
        0 => 1.0,
        1 => 0.6,
        _ => 0.3,
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid built-in pattern {:?}: {}", pattern, e))
}

const MONTHS: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

// === Shared patterns (detection gates and extractors) ===

/// Dollar price; group 1 is the amount
pub static PRICE_RE: Lazy<Regex> = Lazy::new(|| compile(r"\$([\d,]+(?:\.\d{2})?)"));

/// Purchase call-to-action
pub static PRODUCT_ACTION_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(?:add to (?:cart|bag|basket)|buy (?:it )?now|order now)\b"));

/// Publish date; group 1 is the date token
pub static PUBLISH_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(?:published|posted)(?:\s+on)?\s*:?\s*((?:{m})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}|\d{{1,2}}\s+(?:{m})\.?,?\s+\d{{4}}|\d{{4}}-\d{{2}}-\d{{2}}|\d{{1,2}}/\d{{1,2}}/\d{{2,4}})",
        m = MONTHS
    ))
});

/// Byline; group 1 is a capitalized two-word name
pub static BYLINE_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b[Bb]y[ \t]+([A-Z][a-z]+[ \t]+[A-Z][a-z]+)"));

/// Question / answer markers used by FAQ detection and extraction
pub static QA_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(Question|Answer|Q|A)[ \t]*:"));

/// Breadcrumb trail starting at "Home"
pub static BREADCRUMB_TRAIL_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?im)^[ \t]*(home(?:[ \t]*(?:>|»|›|/)[ \t]*[^>»›/\n]+)+)[ \t]*$"));

// === Context patterns ===

/// Negation cues looked for before a keyword
pub static NEGATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bnot\b",
        r"(?i)\bno\b",
        r"(?i)\bnever\b",
        r"(?i)\bwithout\b",
        r"(?i)\bisn'?t\b",
        r"(?i)\baren'?t\b",
        r"(?i)\bdoesn'?t\b",
        r"(?i)\bdon'?t\b",
        r"(?i)\bwon'?t\b",
        r"(?i)\bunlike\b",
        r"(?i)\brather than\b",
        r"(?i)\binstead of\b",
        r"(?i)\bneither\b",
        r"(?i)\bnor\b",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
});

/// Comparison / discussion cues looked for before a keyword
pub static COMPARISON_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bcompared (?:to|with)\b",
        r"(?i)\bsimilar to\b",
        r"(?i)\bsuch as\b",
        r"(?i)\be\.g\.",
        r"(?i)\bversus\b",
        r"(?i)\bvs\.?(?:\s|$)",
        r"(?i)\babout\b",
        r"(?i)\bdiscuss(?:ing|es|ed)?\b",
        r"(?i)\bregarding\b",
        r"(?i)\balternatives? to\b",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
});

// === Page structure indicators ===

/// Indicator patterns per page structure, in `PageStructure::ALL` order
pub static STRUCTURE_INDICATORS: Lazy<Vec<(PageStructure, Vec<Regex>)>> = Lazy::new(|| {
    let table: [(PageStructure, &[&str]); 5] = [
        (
            PageStructure::Blog,
            &[
                r"(?i)\b(?:posted|published) (?:on|by)\b",
                r"(?i)\b\d+\s+min(?:ute)?s?\s+read\b",
                r"\b[Bb]y[ \t]+[A-Z][a-z]+[ \t]+[A-Z][a-z]+",
                r"(?i)\b(?:leave a )?comments?\b",
                r"(?i)\btags?:",
                r"(?i)\bshare (?:this|on)\b",
            ],
        ),
        (
            PageStructure::Product,
            &[
                r"(?i)\badd to (?:cart|bag|basket)\b",
                r"(?i)\bbuy (?:it )?now\b",
                r"(?i)\bquantity\s*:",
                r"(?i)\brating\s*:\s*\d",
                r"(?i)\b(?:in stock|out of stock)\b",
                r"\$\d[\d,]*(?:\.\d{2})?",
            ],
        ),
        (
            PageStructure::Landing,
            &[
                r"(?i)\bget started\b",
                r"(?i)\bsign up\b",
                r"(?i)\bfree trial\b",
                r"(?i)\brequest a demo\b",
                r"(?i)\bcontact us\b",
                r"(?i)\blearn more\b",
                r"(?i)\btrusted by\b",
            ],
        ),
        (
            PageStructure::Faq,
            &[
                r"(?i)\bfrequently asked questions\b",
                r"(?i)\b(?:Q|Question)[ \t]*:",
                r"(?i)\b(?:A|Answer)[ \t]*:",
                r"(?m)^[^\n]{5,}\?[ \t]*$",
            ],
        ),
        (
            PageStructure::HowTo,
            &[
                r"(?im)^[ \t]*step\s+\d+",
                r"(?m)^[ \t]*\d+\.\s+\S",
                r"(?i)\bhow to\b",
                r"(?i)\b(?:you will need|what you'?ll need)\b",
                r"(?i)\b(?:instructions|directions)\s*:",
            ],
        ),
    ];

    table
        .iter()
        .map(|(structure, patterns)| (*structure, patterns.iter().map(|p| compile(p)).collect()))
        .collect()
});

// === Entity signal tables ===

static LIBRARY: Lazy<Vec<SignalSet>> = Lazy::new(|| {
    use SignalTier::{Medium, Negative, Strong};

    vec![
        SignalSet {
            entity_type: EntityType::Product,
            strong: vec![
                SignalPattern::new("price", Strong, r"\$[\d,]+(?:\.\d{2})?"),
                SignalPattern::new("add-to-cart", Strong, r"(?i)\badd to (?:cart|bag|basket)\b"),
                SignalPattern::new("buy-now", Strong, r"(?i)\b(?:buy (?:it )?now|order now)\b"),
                SignalPattern::new("stock-status", Strong, r"(?i)\b(?:in stock|out of stock|sold out|available now)\b"),
                SignalPattern::new("sku", Strong, r"(?i)\b(?:sku|model (?:no|number))\s*[:#.]"),
            ],
            medium: vec![
                SignalPattern::new("shipping", Medium, r"(?i)\b(?:free shipping|ships in|delivery)\b"),
                SignalPattern::new("rating", Medium, r"(?i)(?:\b\d(?:\.\d)?\s*(?:out of|/)\s*5\s*stars?|\brating\s*:\s*\d)"),
                SignalPattern::new("specs", Medium, r"(?i)\b(?:specifications?|dimensions|weight)\s*:"),
                SignalPattern::new("returns", Medium, r"(?i)\b(?:warranty|returns?|refunds?)\b"),
            ],
            negative: vec![
                SignalPattern::new("byline", Negative, r"(?i)\b(?:posted by|written by|published on)\b"),
                SignalPattern::new("read-time", Negative, r"(?i)\b\d+\s+min(?:ute)?s?\s+read\b"),
            ],
            keywords: keywords(&["product", "price", "buy", "shop", "order", "cart", "shipping", "brand", "model", "sale"]),
        },
        SignalSet {
            entity_type: EntityType::Article,
            strong: vec![
                SignalPattern::new("publish-date", Strong, PUBLISH_DATE_RE.as_str()),
                SignalPattern::new("byline", Strong, BYLINE_RE.as_str()),
                SignalPattern::new("read-time", Strong, r"(?i)\b\d+\s+min(?:ute)?s?\s+read\b"),
                SignalPattern::new("updated-date", Strong, r"(?i)\b(?:last updated|updated on|last modified)\b"),
                SignalPattern::new("toc", Strong, r"(?i)\b(?:table of contents|in this article)\b"),
            ],
            medium: vec![
                SignalPattern::new("discussion", Medium, r"(?i)\b(?:share this|comments?|tags?:|categor(?:y|ies):)"),
                SignalPattern::new("sections", Medium, r"(?i)\b(?:introduction|conclusion|summary)\b"),
                SignalPattern::new("read-more", Medium, r"(?i)\bread (?:more|next)\b"),
                SignalPattern::new("related", Medium, r"(?i)\brelated (?:posts|articles|stories)\b"),
            ],
            negative: vec![
                SignalPattern::new("price", Negative, r"\$\d[\d,]*(?:\.\d{2})?"),
                SignalPattern::new("add-to-cart", Negative, r"(?i)\badd to (?:cart|bag|basket)\b"),
                SignalPattern::new("buy-now", Negative, r"(?i)\bbuy (?:it )?now\b"),
            ],
            keywords: keywords(&["article", "blog", "post", "story", "news", "author", "editorial", "opinion"]),
        },
        SignalSet {
            entity_type: EntityType::Organization,
            strong: vec![
                SignalPattern::new("founded", Strong, r"(?i)\b(?:founded|established)\s+in\s+\d{4}"),
                SignalPattern::new("about-us", Strong, r"(?i)\b(?:our (?:mission|team|company|story)|about us)\b"),
                SignalPattern::new("legal-suffix", Strong, r"\b(?:Inc|LLC|Ltd|Corp|GmbH)\b"),
                SignalPattern::new("headquarters", Strong, r"(?i)\bheadquarter(?:s|ed)\b"),
            ],
            medium: vec![
                SignalPattern::new("contact", Medium, r"(?i)\bcontact us\b"),
                SignalPattern::new("workforce", Medium, r"(?i)\b(?:employees|careers|offices?)\b"),
                SignalPattern::new("clients", Medium, r"(?i)\b(?:customers|clients|partners)\b"),
            ],
            negative: vec![
                SignalPattern::new("add-to-cart", Negative, r"(?i)\badd to (?:cart|bag|basket)\b"),
            ],
            keywords: keywords(&["company", "organization", "business", "team", "mission", "services", "industry"]),
        },
        SignalSet {
            entity_type: EntityType::Person,
            strong: vec![
                SignalPattern::new("born", Strong, r"(?i)\bborn\s+(?:on|in)\s+\w+"),
                SignalPattern::new("biography", Strong, r"(?i)\b(?:biography|about me)\b"),
                SignalPattern::new("first-person", Strong, r"(?i)\b(?:my name is|i am an?|i'm an?)\b"),
                SignalPattern::new("third-person", Strong, r"(?i)\b(?:he|she|they)\s+(?:is|was|are|were)\s+an?\b"),
            ],
            medium: vec![
                SignalPattern::new("education", Medium, r"(?i)\b(?:career|education|graduated|alma mater)\b"),
                SignalPattern::new("awards", Medium, r"(?i)\b(?:awards?|achievements)\b"),
                SignalPattern::new("employment", Medium, r"(?i)\b(?:works? (?:at|for)|worked (?:at|for))\b"),
            ],
            negative: vec![
                SignalPattern::new("price", Negative, r"\$\d[\d,]*(?:\.\d{2})?"),
                SignalPattern::new("add-to-cart", Negative, r"(?i)\badd to (?:cart|bag|basket)\b"),
            ],
            keywords: keywords(&["biography", "profile", "career", "life", "personal", "born", "education"]),
        },
        SignalSet {
            entity_type: EntityType::Faq,
            strong: vec![
                SignalPattern::new("question-marker", Strong, r"(?i)\b(?:Q|Question)[ \t]*:"),
                SignalPattern::new("answer-marker", Strong, r"(?i)\b(?:A|Answer)[ \t]*:"),
                SignalPattern::new("faq-heading", Strong, r"(?i)\b(?:frequently asked questions|faqs?)\b"),
                SignalPattern::new("question-line", Strong, r"(?m)^[^\n]{5,}\?[ \t]*$"),
            ],
            medium: vec![
                SignalPattern::new("wh-question", Medium, r"(?i)\b(?:what|how|why|when|where|can|does|is)\b[^?\n]{3,}\?"),
                SignalPattern::new("support", Medium, r"(?i)\b(?:still have questions|contact support|help center)\b"),
                SignalPattern::new("qa-words", Medium, r"(?i)\b(?:questions|answers)\b"),
            ],
            negative: vec![],
            keywords: keywords(&["faq", "question", "answer", "help", "support", "asked"]),
        },
        SignalSet {
            entity_type: EntityType::BreadcrumbList,
            strong: vec![
                SignalPattern::new("home-trail", Strong, BREADCRUMB_TRAIL_RE.as_str()),
                SignalPattern::new("you-are-here", Strong, r"(?i)\byou are here\s*:"),
                SignalPattern::new("breadcrumb", Strong, r"(?i)\bbreadcrumbs?\b"),
            ],
            medium: vec![SignalPattern::new(
                "trail",
                Medium,
                r"\S+[ \t]+(?:>|»|›)[ \t]+\S+[ \t]+(?:>|»|›)[ \t]+\S+",
            )],
            negative: vec![],
            keywords: keywords(&["home", "breadcrumb", "navigation"]),
        },
        SignalSet {
            entity_type: EntityType::HowTo,
            strong: vec![
                SignalPattern::new("step-label", Strong, r"(?im)^[ \t]*step\s+\d+[:.]"),
                SignalPattern::new("how-to", Strong, r"(?i)\bhow to\b"),
                SignalPattern::new("requirements", Strong, r"(?i)\b(?:you will need|what you'?ll need|materials needed|tools needed|ingredients)\b"),
                SignalPattern::new("instructions", Strong, r"(?i)\b(?:instructions|directions)\s*:"),
            ],
            medium: vec![
                SignalPattern::new("numbered-list", Medium, r"(?m)^[ \t]*\d+\.\s+\S"),
                SignalPattern::new("sequence", Medium, r"(?i)\b(?:first|next|then|finally),"),
                SignalPattern::new("duration", Medium, r"(?i)\b(?:total time|prep time|estimated time)\b"),
                SignalPattern::new("tips", Medium, r"(?i)\b(?:tips?|warnings?)\s*:"),
            ],
            negative: vec![
                SignalPattern::new("price", Negative, r"\$\d[\d,]*(?:\.\d{2})?"),
            ],
            keywords: keywords(&["how to", "guide", "tutorial", "step", "instructions", "diy", "learn"]),
        },
    ]
});

/// All signal sets, in `EntityType::CANDIDATES` order
pub fn library() -> &'static [SignalSet] {
    &LIBRARY
}

/// Signal set for one entity type (None for WebPage)
pub fn signals_for(entity_type: EntityType) -> Option<&'static SignalSet> {
    LIBRARY.iter().find(|set| set.entity_type == entity_type)
}
