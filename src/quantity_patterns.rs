//! # Quantity Patterns Module
//!
//! Ordered keyword rules assigning a display quantity to an ingredient name
//! for generated recipes. The first rule whose pattern matches the lowercased
//! name wins; names matching nothing get [`DEFAULT_QUANTITY`].
//!
//! These are labels for display, not measured amounts.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Quantity used when no rule matches
pub const DEFAULT_QUANTITY: &str = "1 cup";

// Rule order matters: "bell pepper" must be seen before plain "pepper"
const STANDARD_PATTERNS: &[(&str, &str)] = &[
    (r"chicken|beef|pork", "200g"),
    (r"fish|salmon|tuna", "150g"),
    (r"rice|pasta|noodles", "1 cup"),
    (r"onion|garlic", "1 medium"),
    (r"tomato|carrot|bell pepper", "2 medium"),
    (r"broccoli|spinach|lettuce", "1 cup"),
    (r"oil|butter", "2 tbsp"),
    (r"soy sauce|vinegar|lemon juice", "1 tbsp"),
    (r"salt|pepper|herbs", "to taste"),
    (r"broth|stock", "2 cups"),
    (r"cheese", "50g"),
    (r"egg", "2 large"),
    (r"milk|cream", "1/2 cup"),
];

// Lazy static rules for the standard patterns to avoid recompilation
lazy_static! {
    static ref STANDARD_RULES: Vec<QuantityRule> = STANDARD_PATTERNS
        .iter()
        .map(|(pattern, quantity)| {
            QuantityRule::new(pattern, quantity).expect("Standard quantity patterns should be valid")
        })
        .collect();
}

/// A single (pattern, quantity) rule
#[derive(Debug, Clone)]
pub struct QuantityRule {
    pattern: Regex,
    quantity: String,
}

impl QuantityRule {
    pub fn new(pattern: &str, quantity: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            quantity: quantity.to_string(),
        })
    }

    /// Test the rule against an already lowercased name
    pub fn matches(&self, lowered_name: &str) -> bool {
        self.pattern.is_match(lowered_name)
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }
}

/// First-match-wins list of quantity rules with a fallback
#[derive(Debug, Clone)]
pub struct QuantityRules {
    rules: Vec<QuantityRule>,
    fallback: String,
}

impl QuantityRules {
    /// Empty rule list answering `fallback` for everything
    pub fn new(fallback: &str) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.to_string(),
        }
    }

    /// The built-in kitchen heuristics
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.clone(),
            fallback: DEFAULT_QUANTITY.to_string(),
        }
    }

    /// Append a rule, evaluated after the existing ones
    pub fn with_rule(mut self, rule: QuantityRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Display quantity for an ingredient name
    pub fn quantity_for(&self, ingredient: &str) -> &str {
        let lowered = ingredient.to_lowercase();
        let quantity = self
            .rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(QuantityRule::quantity)
            .unwrap_or(&self.fallback);

        trace!("Quantity for '{}': {}", ingredient, quantity);
        quantity
    }
}

impl Default for QuantityRules {
    fn default() -> Self {
        Self::standard()
    }
}
