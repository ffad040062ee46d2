use serde::{Deserialize, Serialize};

/// Level of a single Big Five trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitLevel {
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Formal,
    SemiFormal,
    #[default]
    Casual,
    Chatty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conciseness {
    #[default]
    Concise,
    Verbose,
}

/// Shared scale for humor and flirtiness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    #[default]
    None,
    Low,
    Medium,
    High,
}

/// Big Five personality traits. Omitted traits default to `medium`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personality {
    pub openness: TraitLevel,
    pub conscientiousness: TraitLevel,
    pub extraversion: TraitLevel,
    pub agreeableness: TraitLevel,
    pub neuroticism: TraitLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunicationStyle {
    pub formality_preference: Formality,
    pub conciseness_preference: Conciseness,
    pub humor_level: Intensity,
    pub empathy_level: TraitLevel,
    /// Explicit opt-in; flirty replies stay off unless raised.
    pub flirty_level: Intensity,
}

impl Default for CommunicationStyle {
    fn default() -> Self {
        Self {
            formality_preference: Formality::Casual,
            conciseness_preference: Conciseness::Concise,
            humor_level: Intensity::Medium,
            empathy_level: TraitLevel::Medium,
            flirty_level: Intensity::None,
        }
    }
}

/// A user's communication profile. Re-submitting the same `id` replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub personality: Personality,
    pub communication_style: CommunicationStyle,
    /// Ethical values and boundaries, in the order the user gave them.
    #[serde(default)]
    pub values_boundaries: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_omitted_fields_take_defaults() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": "u1",
            "personality": {"openness": "very_high"},
            "communication_style": {}
        }))
        .unwrap();

        assert_eq!(profile.personality.openness, TraitLevel::VeryHigh);
        assert_eq!(profile.personality.neuroticism, TraitLevel::Medium);
        assert_eq!(profile.communication_style.formality_preference, Formality::Casual);
        assert_eq!(profile.communication_style.humor_level, Intensity::Medium);
        assert_eq!(profile.communication_style.flirty_level, Intensity::None);
        assert!(profile.values_boundaries.is_empty());
    }

    #[test]
    fn test_personality_and_style_are_required() {
        let result = serde_json::from_value::<UserProfile>(json!({"id": "u1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_level_rejected() {
        let result = serde_json::from_value::<Personality>(json!({"openness": "extreme"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_snake_case_values() {
        let style = CommunicationStyle {
            formality_preference: Formality::SemiFormal,
            empathy_level: TraitLevel::VeryHigh,
            ..Default::default()
        };
        let value = serde_json::to_value(&style).unwrap();
        assert_eq!(value["formality_preference"], "semi_formal");
        assert_eq!(value["empathy_level"], "very_high");
        assert_eq!(value["flirty_level"], "none");
    }
}
