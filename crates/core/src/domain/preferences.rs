//! Boundary conversion from free-form preference strings into the closed
//! vocabulary the stylist engine works with. Unrecognized values never fail;
//! they fall back to a defined default so a recommendation can always be
//! produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::{BodyType, Occasion, Season, SkinTone};
use crate::errors::DomainError;

/// Maximum number of style-personality tags carried through to the engine.
pub const MAX_STYLE_PERSONALITY_TAGS: usize = 3;

/// Raw, unvalidated preference input as it arrives from a UI or API caller.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    pub gender: String,
    pub age_group: String,
    pub skin_tone: String,
    pub body_type: String,
    #[serde(default)]
    pub style_personality: Vec<String>,
    pub occasion: String,
    pub season: String,
    pub budget: Decimal,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub lifestyle: Option<String>,
    #[serde(default)]
    pub formality: Option<String>,
}

impl UserPreferences {
    /// Parse into a typed [`StyleRequest`]. The only hard failure is a
    /// non-positive budget; every enum-like field degrades to its default
    /// variant instead of erroring.
    pub fn validate(&self) -> Result<StyleRequest, DomainError> {
        if self.budget <= Decimal::ZERO {
            return Err(DomainError::InvariantViolation(
                "budget must be a positive amount".to_string(),
            ));
        }

        let mut style_personality = self.style_personality.clone();
        style_personality.truncate(MAX_STYLE_PERSONALITY_TAGS);

        Ok(StyleRequest {
            occasion: Occasion::from_preference(&self.occasion),
            season: Season::from_preference(&self.season),
            body_type: BodyType::from_preference(&self.body_type),
            skin_tone: SkinTone::from_preference(&self.skin_tone),
            age_group: AgeGroup::from_preference(&self.age_group),
            budget: self.budget,
            gender: self.gender.clone(),
            weather: self.weather.clone().unwrap_or_else(|| "Mild".to_string()),
            style_personality,
            occasion_label: self.occasion.clone(),
            season_label: self.season.clone(),
            body_type_label: self.body_type.clone(),
            age_group_label: self.age_group.clone(),
        })
    }
}

/// Validated engine input. Constructed only through
/// [`UserPreferences::validate`], so the engine never sees malformed data.
/// The `*_label` fields echo the caller's original wording for display.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StyleRequest {
    pub occasion: Occasion,
    pub season: Season,
    pub body_type: BodyType,
    pub skin_tone: SkinTone,
    pub age_group: AgeGroup,
    pub budget: Decimal,
    pub gender: String,
    pub weather: String,
    pub style_personality: Vec<String>,
    pub occasion_label: String,
    pub season_label: String,
    pub body_type_label: String,
    pub age_group_label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Teen,
    YoungAdult,
    Adult,
    Mature,
    Senior,
}

impl AgeGroup {
    pub fn from_preference(value: &str) -> Self {
        match normalize(value).as_str() {
            "teen" | "teenager" => Self::Teen,
            "young adult" | "young" => Self::YoungAdult,
            "adult" => Self::Adult,
            "mature" | "middle aged" => Self::Mature,
            "senior" => Self::Senior,
            _ => Self::Adult,
        }
    }

    /// Representative age used by the simulated analyzer.
    pub fn representative_age(&self) -> u8 {
        match self {
            Self::Teen => 17,
            Self::YoungAdult => 25,
            Self::Adult => 35,
            Self::Mature => 45,
            Self::Senior => 60,
        }
    }
}

fn normalize(value: &str) -> String {
    value
        .to_ascii_lowercase()
        .replace(['_', '-', '/'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl Occasion {
    /// Case-insensitive lookup over both the canonical names and the phrase
    /// vocabulary the upload flow offers. Anything unrecognized maps to
    /// `Casual`.
    pub fn from_preference(value: &str) -> Self {
        match normalize(value).as_str() {
            "casual" | "casual daily wear" | "travel" => Self::Casual,
            "business" | "business professional" | "job interview" => Self::Business,
            "business casual" | "networking" => Self::BusinessCasual,
            "formal" | "formal dinner" => Self::Formal,
            "weekend" | "weekend brunch" => Self::Weekend,
            "night out" | "date night" | "party event" | "party" => Self::NightOut,
            "beach" | "beach vacation" | "vacation" => Self::Beach,
            "sport" | "workout gym" | "workout" | "gym" => Self::Sport,
            "wedding" | "wedding guest" => Self::Wedding,
            "ethnic" | "cultural event" => Self::Ethnic,
            _ => Self::Casual,
        }
    }
}

impl Season {
    pub fn from_preference(value: &str) -> Self {
        match normalize(value).as_str() {
            "spring" => Self::Spring,
            "summer" => Self::Summer,
            "fall" | "autumn" => Self::Fall,
            "winter" => Self::Winter,
            _ => Self::All,
        }
    }
}

impl BodyType {
    pub fn from_preference(value: &str) -> Self {
        match normalize(value).as_str() {
            "slim" | "rectangle" => Self::Slim,
            "athletic" | "hourglass" | "inverted triangle" => Self::Athletic,
            "average" | "pear" | "apple" => Self::Average,
            "large" => Self::Large,
            _ => Self::Average,
        }
    }
}

impl SkinTone {
    pub fn from_preference(value: &str) -> Self {
        match normalize(value).as_str() {
            "fair" | "very fair" | "light" => Self::Fair,
            "medium" | "tan" => Self::Medium,
            "olive" => Self::Olive,
            "deep" | "dark" | "very dark" => Self::Deep,
            _ => Self::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences(budget: Decimal) -> UserPreferences {
        UserPreferences {
            gender: "male".to_string(),
            age_group: "young-adult".to_string(),
            skin_tone: "medium".to_string(),
            body_type: "athletic".to_string(),
            style_personality: vec!["minimal".to_string()],
            occasion: "Business Professional".to_string(),
            season: "Fall".to_string(),
            budget,
            ..UserPreferences::default()
        }
    }

    #[test]
    fn validated_request_carries_typed_fields() {
        let request = preferences(Decimal::new(70000, 2)).validate().expect("valid");
        assert_eq!(request.occasion, Occasion::Business);
        assert_eq!(request.season, Season::Fall);
        assert_eq!(request.body_type, BodyType::Athletic);
        assert_eq!(request.age_group, AgeGroup::YoungAdult);
        assert_eq!(request.weather, "Mild");
    }

    #[test]
    fn zero_budget_is_rejected() {
        let error = preferences(Decimal::ZERO).validate().expect_err("must fail");
        assert!(matches!(error, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn unknown_occasion_falls_back_to_casual() {
        assert_eq!(Occasion::from_preference("Moon Landing Gala"), Occasion::Casual);
        assert_eq!(Occasion::from_preference(""), Occasion::Casual);
    }

    #[test]
    fn phrase_vocabulary_maps_to_occasions() {
        assert_eq!(Occasion::from_preference("Job Interview"), Occasion::Business);
        assert_eq!(Occasion::from_preference("date night"), Occasion::NightOut);
        assert_eq!(Occasion::from_preference("Wedding Guest"), Occasion::Wedding);
        assert_eq!(Occasion::from_preference("networking"), Occasion::BusinessCasual);
        assert_eq!(Occasion::from_preference("workout/gym"), Occasion::Sport);
    }

    #[test]
    fn body_shape_aliases_collapse_to_builds() {
        assert_eq!(BodyType::from_preference("hourglass"), BodyType::Athletic);
        assert_eq!(BodyType::from_preference("pear"), BodyType::Average);
        assert_eq!(BodyType::from_preference("rectangle"), BodyType::Slim);
        assert_eq!(BodyType::from_preference("unknown"), BodyType::Average);
    }

    #[test]
    fn style_personality_is_capped_at_three_tags() {
        let mut prefs = preferences(Decimal::new(10000, 2));
        prefs.style_personality =
            vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()];
        let request = prefs.validate().expect("valid");
        assert_eq!(request.style_personality.len(), MAX_STYLE_PERSONALITY_TAGS);
    }
}
