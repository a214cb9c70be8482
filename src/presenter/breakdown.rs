//! Risk Factor Breakdown
//!
//! Tags free-text risk factors with five fixed categories. Detection is a
//! pluggable strategy: `BreakdownRules` maps each category to a
//! `FactorMatcher`, and the default rules are case-sensitive keyword lookups.
//! This is heuristic tagging; rewording upstream produces false negatives.

use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORIES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Road,
    Weather,
    Speed,
    Visibility,
    Junction,
}

impl RiskCategory {
    /// Report order
    pub const ALL: [RiskCategory; 5] = [
        RiskCategory::Road,
        RiskCategory::Weather,
        RiskCategory::Speed,
        RiskCategory::Visibility,
        RiskCategory::Junction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Road => "road",
            RiskCategory::Weather => "weather",
            RiskCategory::Speed => "speed",
            RiskCategory::Visibility => "visibility",
            RiskCategory::Junction => "junction",
        }
    }

    /// Keywords of the default rules
    pub fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            RiskCategory::Road => &["road", "Urban"],
            RiskCategory::Weather => &["weather", "Rain", "Snow", "Fog"],
            RiskCategory::Speed => &["speed"],
            RiskCategory::Visibility => &["visibility", "Night"],
            RiskCategory::Junction => &["junction"],
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// MATCHERS
// ============================================================================

/// Predicate deciding whether one factor string belongs to a category
pub trait FactorMatcher: Send + Sync {
    fn matches(&self, factor: &str) -> bool;
}

impl<F> FactorMatcher for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, factor: &str) -> bool {
        self(factor)
    }
}

/// Case-sensitive substring match against any of a keyword set
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl FactorMatcher for KeywordMatcher {
    fn matches(&self, factor: &str) -> bool {
        self.keywords.iter().any(|k| factor.contains(k.as_str()))
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Category -> matcher table
pub struct BreakdownRules {
    rules: Vec<(RiskCategory, Box<dyn FactorMatcher>)>,
}

impl BreakdownRules {
    /// Rules with no category detection at all
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Set (or replace) the matcher of one category
    pub fn with<M>(mut self, category: RiskCategory, matcher: M) -> Self
    where
        M: FactorMatcher + 'static,
    {
        self.rules.retain(|(c, _)| *c != category);
        self.rules.push((category, Box::new(matcher)));
        self
    }

    /// Whether a single factor falls in `category`
    pub fn matches(&self, category: RiskCategory, factor: &str) -> bool {
        self.rules
            .iter()
            .filter(|(c, _)| *c == category)
            .any(|(_, m)| m.matches(factor))
    }

    /// Tag a list of risk factors
    pub fn derive<S: AsRef<str>>(&self, factors: &[S]) -> RiskBreakdown {
        let mut breakdown = RiskBreakdown::default();
        for category in RiskCategory::ALL {
            let present = factors.iter().any(|f| self.matches(category, f.as_ref()));
            breakdown.set(category, present);
        }
        breakdown
    }
}

impl Default for BreakdownRules {
    fn default() -> Self {
        RiskCategory::ALL
            .into_iter()
            .fold(Self::empty(), |rules, category| {
                rules.with(category, KeywordMatcher::new(category.default_keywords().iter().copied()))
            })
    }
}

impl std::fmt::Debug for BreakdownRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|(c, _)| c))
            .finish()
    }
}

// ============================================================================
// BREAKDOWN
// ============================================================================

/// Presence flag per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub road: bool,
    pub weather: bool,
    pub speed: bool,
    pub visibility: bool,
    pub junction: bool,
}

impl RiskBreakdown {
    pub fn get(&self, category: RiskCategory) -> bool {
        match category {
            RiskCategory::Road => self.road,
            RiskCategory::Weather => self.weather,
            RiskCategory::Speed => self.speed,
            RiskCategory::Visibility => self.visibility,
            RiskCategory::Junction => self.junction,
        }
    }

    pub fn set(&mut self, category: RiskCategory, present: bool) {
        match category {
            RiskCategory::Road => self.road = present,
            RiskCategory::Weather => self.weather = present,
            RiskCategory::Speed => self.speed = present,
            RiskCategory::Visibility => self.visibility = present,
            RiskCategory::Junction => self.junction = present,
        }
    }

    /// Flags in report order
    pub fn iter(&self) -> impl Iterator<Item = (RiskCategory, bool)> + '_ {
        RiskCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn flagged_count(&self) -> usize {
        self.iter().filter(|(_, present)| *present).count()
    }
}

/// Tag risk factors with the default keyword rules
pub fn derive_breakdown<S: AsRef<str>>(factors: &[S]) -> RiskBreakdown {
    BreakdownRules::default().derive(factors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_factors() {
        let breakdown = derive_breakdown::<&str>(&[]);
        assert_eq!(breakdown, RiskBreakdown::default());
        assert_eq!(breakdown.flagged_count(), 0);
    }

    #[test]
    fn test_rain_flags_weather() {
        let breakdown = derive_breakdown(&["Rain"]);
        assert!(breakdown.weather);
        assert!(!breakdown.road);
        assert!(!breakdown.visibility);
    }

    #[test]
    fn test_each_category_keyword() {
        let cases = [
            ("Busy road ahead", RiskCategory::Road),
            ("Urban area", RiskCategory::Road),
            ("Adverse weather", RiskCategory::Weather),
            ("Snow on surface", RiskCategory::Weather),
            ("Fog patches", RiskCategory::Weather),
            ("High speed limit", RiskCategory::Speed),
            ("Reduced visibility", RiskCategory::Visibility),
            ("Night driving", RiskCategory::Visibility),
            ("Complex junction", RiskCategory::Junction),
        ];

        for (factor, category) in cases {
            let breakdown = derive_breakdown(&[factor]);
            assert!(breakdown.get(category), "{:?} should flag {}", factor, category);
            assert_eq!(breakdown.flagged_count(), 1, "{:?} flagged extra categories", factor);
        }
    }

    #[test]
    fn test_case_sensitive() {
        let breakdown = derive_breakdown(&["RAIN", "urban", "Speed camera", "night", "Junction"]);
        assert_eq!(breakdown, RiskBreakdown::default());
    }

    #[test]
    fn test_or_across_factors() {
        let factors = vec![
            "Night driving in poor visibility".to_string(),
            "Rain on A road".to_string(),
            "T junction".to_string(),
        ];
        let breakdown = derive_breakdown(&factors);
        assert!(breakdown.road);
        assert!(breakdown.weather);
        assert!(breakdown.visibility);
        assert!(breakdown.junction);
        assert!(!breakdown.speed);
    }

    #[test]
    fn test_idempotent() {
        let factors = ["High speed road", "Fog"];
        assert_eq!(derive_breakdown(&factors), derive_breakdown(&factors));
    }

    #[test]
    fn test_custom_matcher_replaces_default() {
        let rules = BreakdownRules::default()
            .with(RiskCategory::Speed, |f: &str| f.to_lowercase().contains("mph"));

        let breakdown = rules.derive(&["70 MPH limit", "speed"]);
        assert!(breakdown.speed);
        assert!(!rules.matches(RiskCategory::Speed, "speed"));
    }

    #[test]
    fn test_empty_rules_flag_nothing() {
        let breakdown = BreakdownRules::empty().derive(&["Rain", "Urban road"]);
        assert_eq!(breakdown.flagged_count(), 0);
    }

    #[test]
    fn test_serialized_order() {
        let breakdown = derive_breakdown(&["speed"]);
        let json = serde_json::to_string(&breakdown).unwrap();
        assert_eq!(
            json,
            r#"{"road":false,"weather":false,"speed":true,"visibility":false,"junction":false}"#
        );
    }
}
