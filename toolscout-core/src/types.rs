//! Recommendation record types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Sentinel for unknown or inapplicable values.
///
/// Downstream renderers assume every scalar field is present and stringly
/// typed, so the normalizer substitutes this literal instead of leaving
/// fields null or absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Identifier for a recommendation within a single batch.
///
/// The model is free to emit either an integer index or a string slug; both
/// serialize back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationId {
    Int(i64),
    Text(String),
}

/// Software category, a closed set. Unknown values normalize to `NA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Productivity,
    Development,
    Design,
    Communication,
    Business,
    Multimedia,
    #[serde(rename = "N/A")]
    NA,
}

impl Category {
    const ALL: &'static [Category] = &[
        Category::Productivity,
        Category::Development,
        Category::Design,
        Category::Communication,
        Category::Business,
        Category::Multimedia,
        Category::NA,
    ];

    /// Parse a category name leniently (case-insensitive, preserve the
    /// canonical casing). Anything outside the closed set maps to `NA`.
    pub fn parse(s: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .unwrap_or(Category::NA)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Productivity => "Productivity",
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Communication => "Communication",
            Category::Business => "Business",
            Category::Multimedia => "Multimedia",
            Category::NA => NOT_AVAILABLE,
        }
    }
}

/// Pricing model, a closed set. Unknown values normalize to `NA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pricing {
    Free,
    Freemium,
    Paid,
    Subscription,
    #[serde(rename = "N/A")]
    NA,
}

impl Pricing {
    const ALL: &'static [Pricing] = &[
        Pricing::Free,
        Pricing::Freemium,
        Pricing::Paid,
        Pricing::Subscription,
        Pricing::NA,
    ];

    /// Parse a pricing model leniently, same policy as [`Category::parse`].
    pub fn parse(s: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .unwrap_or(Pricing::NA)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pricing::Free => "Free",
            Pricing::Freemium => "Freemium",
            Pricing::Paid => "Paid",
            Pricing::Subscription => "Subscription",
            Pricing::NA => NOT_AVAILABLE,
        }
    }
}

/// A single software recommendation.
///
/// Every scalar field is always present: unknown values hold the "N/A"
/// sentinel, array fields are empty rather than absent. Records are created
/// fresh for every request and never cached or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Unique within a single response batch.
    pub id: RecommendationId,
    pub name: String,
    pub category: Category,
    pub description: String,
    /// Full URL starting with http(s), or "N/A".
    pub official_website: String,
    pub pricing: Pricing,
    /// Free-form price string, possibly with an appended LKR equivalent.
    pub price_range: String,
    /// May be `["N/A"]` when the model marks platform support as unknown.
    pub platforms: Vec<String>,
    pub features: Vec<String>,
    pub best_for: Vec<String>,
    pub alternatives: Vec<String>,
}
