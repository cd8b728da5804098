//! Questionnaire steps and sub-steps.
//!
//! The form collaborator walks a character through a fixed sequence of steps;
//! a few steps are split into sub-steps (e.g. `motivations` into `drives`,
//! `goals`, `values`). Step names arrive as free strings on the wire, so both
//! enums keep an `Other` variant: unknown names are valid input and resolve to
//! table defaults rather than errors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A step of the character questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Step {
    Archetype,
    Background,
    Hopes,
    Fears,
    PersonalityProfile,
    Motivations,
    Relationships,
    WorldPosition,
    Voice,
    Symbolism,
    PowersAbilities,
    SoulName,
    /// Any step name the engine has no dedicated tables for.
    Other(String),
}

impl Step {
    /// Every step the form collaborator can send, in questionnaire order.
    pub const KNOWN: [Step; 12] = [
        Step::Archetype,
        Step::Background,
        Step::Hopes,
        Step::Fears,
        Step::PersonalityProfile,
        Step::Motivations,
        Step::Relationships,
        Step::WorldPosition,
        Step::Voice,
        Step::Symbolism,
        Step::PowersAbilities,
        Step::SoulName,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Step::Archetype => "archetype",
            Step::Background => "background",
            Step::Hopes => "hopes",
            Step::Fears => "fears",
            Step::PersonalityProfile => "personalityProfile",
            Step::Motivations => "motivations",
            Step::Relationships => "relationships",
            Step::WorldPosition => "worldPosition",
            Step::Voice => "voice",
            Step::Symbolism => "symbolism",
            Step::PowersAbilities => "powersAbilities",
            Step::SoulName => "soulName",
            Step::Other(name) => name,
        }
    }

    /// Sub-steps scoped to this step. Empty for single-part steps.
    pub fn sub_steps(&self) -> &'static [SubStep] {
        match self {
            Step::Motivations => MOTIVATION_SUB_STEPS,
            Step::Relationships => RELATIONSHIP_SUB_STEPS,
            Step::WorldPosition => WORLD_POSITION_SUB_STEPS,
            Step::Voice => VOICE_SUB_STEPS,
            Step::Symbolism => SYMBOLISM_SUB_STEPS,
            _ => &[],
        }
    }
}

const MOTIVATION_SUB_STEPS: &[SubStep] = &[SubStep::Drives, SubStep::Goals, SubStep::Values];
const RELATIONSHIP_SUB_STEPS: &[SubStep] = &[SubStep::Friends, SubStep::Rivals, SubStep::Family];
const WORLD_POSITION_SUB_STEPS: &[SubStep] = &[
    SubStep::SocietalRole,
    SubStep::ClassStatus,
    SubStep::Perception,
];
const VOICE_SUB_STEPS: &[SubStep] = &[
    SubStep::SpeechStyle,
    SubStep::InnerDialogue,
    SubStep::UniquePhrases,
];
const SYMBOLISM_SUB_STEPS: &[SubStep] = &[SubStep::Colors, SubStep::Items, SubStep::Motifs];

impl From<&str> for Step {
    fn from(value: &str) -> Self {
        match value {
            "archetype" => Step::Archetype,
            "background" => Step::Background,
            "hopes" => Step::Hopes,
            "fears" => Step::Fears,
            "personalityProfile" => Step::PersonalityProfile,
            "motivations" => Step::Motivations,
            "relationships" => Step::Relationships,
            "worldPosition" => Step::WorldPosition,
            "voice" => Step::Voice,
            "symbolism" => Step::Symbolism,
            "powersAbilities" => Step::PowersAbilities,
            "soulName" => Step::SoulName,
            other => Step::Other(other.to_string()),
        }
    }
}

impl From<String> for Step {
    fn from(value: String) -> Self {
        Step::from(value.as_str())
    }
}

impl From<Step> for String {
    fn from(step: Step) -> Self {
        match step {
            Step::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A section within a multi-part step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubStep {
    Drives,
    Goals,
    Values,
    Friends,
    Rivals,
    Family,
    SocietalRole,
    ClassStatus,
    Perception,
    SpeechStyle,
    InnerDialogue,
    UniquePhrases,
    Colors,
    Items,
    Motifs,
    Other(String),
}

impl SubStep {
    pub fn as_str(&self) -> &str {
        match self {
            SubStep::Drives => "drives",
            SubStep::Goals => "goals",
            SubStep::Values => "values",
            SubStep::Friends => "friends",
            SubStep::Rivals => "rivals",
            SubStep::Family => "family",
            SubStep::SocietalRole => "societalRole",
            SubStep::ClassStatus => "classStatus",
            SubStep::Perception => "perception",
            SubStep::SpeechStyle => "speechStyle",
            SubStep::InnerDialogue => "innerDialogue",
            SubStep::UniquePhrases => "uniquePhrases",
            SubStep::Colors => "colors",
            SubStep::Items => "items",
            SubStep::Motifs => "motifs",
            SubStep::Other(name) => name,
        }
    }

    /// Parse an optional wire value. Blank strings mean "no sub-step".
    pub fn parse_optional(value: Option<&str>) -> Option<SubStep> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(SubStep::from)
    }
}

impl From<&str> for SubStep {
    fn from(value: &str) -> Self {
        match value {
            "drives" => SubStep::Drives,
            "goals" => SubStep::Goals,
            "values" => SubStep::Values,
            "friends" => SubStep::Friends,
            "rivals" => SubStep::Rivals,
            "family" => SubStep::Family,
            "societalRole" => SubStep::SocietalRole,
            "classStatus" => SubStep::ClassStatus,
            "perception" => SubStep::Perception,
            "speechStyle" => SubStep::SpeechStyle,
            "innerDialogue" => SubStep::InnerDialogue,
            "uniquePhrases" => SubStep::UniquePhrases,
            "colors" => SubStep::Colors,
            "items" => SubStep::Items,
            "motifs" => SubStep::Motifs,
            other => SubStep::Other(other.to_string()),
        }
    }
}

impl From<String> for SubStep {
    fn from(value: String) -> Self {
        SubStep::from(value.as_str())
    }
}

impl From<SubStep> for String {
    fn from(sub_step: SubStep) -> Self {
        match sub_step {
            SubStep::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SubStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite lookup key for every step-keyed table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepKey {
    pub step: Step,
    pub sub_step: Option<SubStep>,
}

impl StepKey {
    pub fn new(step: Step, sub_step: Option<SubStep>) -> Self {
        Self { step, sub_step }
    }

    pub fn step(step: Step) -> Self {
        Self {
            step,
            sub_step: None,
        }
    }

    pub fn with_sub_step(step: Step, sub_step: SubStep) -> Self {
        Self {
            step,
            sub_step: Some(sub_step),
        }
    }

    /// The step-level key this key falls back to.
    pub fn parent(&self) -> Option<StepKey> {
        self.sub_step
            .as_ref()
            .map(|_| StepKey::step(self.step.clone()))
    }

    /// Every key the form collaborator can produce: each step on its own,
    /// plus each of its scoped sub-steps.
    pub fn reachable() -> Vec<StepKey> {
        let mut keys = Vec::new();
        for step in Step::KNOWN {
            for sub_step in step.sub_steps() {
                keys.push(StepKey::with_sub_step(step.clone(), sub_step.clone()));
            }
            keys.push(StepKey::step(step));
        }
        keys
    }
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_step {
            Some(sub_step) => write!(f, "{}/{}", self.step, sub_step),
            None => write!(f, "{}", self.step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_step_names_round_trip() {
        for step in Step::KNOWN {
            assert_eq!(Step::from(step.as_str()), step);
        }
    }

    #[test]
    fn unknown_step_is_preserved_verbatim() {
        let step = Step::from("epilogue");
        assert_eq!(step, Step::Other("epilogue".to_string()));
        assert_eq!(step.to_string(), "epilogue");
        assert!(step.sub_steps().is_empty());
    }

    #[test]
    fn blank_sub_step_is_none() {
        assert_eq!(SubStep::parse_optional(Some("")), None);
        assert_eq!(SubStep::parse_optional(Some("   ")), None);
        assert_eq!(SubStep::parse_optional(None), None);
        assert_eq!(
            SubStep::parse_optional(Some("drives")),
            Some(SubStep::Drives)
        );
    }

    #[test]
    fn step_serializes_as_wire_name() {
        let json = serde_json::to_string(&Step::PersonalityProfile).unwrap();
        assert_eq!(json, "\"personalityProfile\"");

        let parsed: SubStep = serde_json::from_str("\"uniquePhrases\"").unwrap();
        assert_eq!(parsed, SubStep::UniquePhrases);
    }

    #[test]
    fn reachable_keys_cover_every_step_and_sub_step() {
        let keys = StepKey::reachable();
        // 12 steps + 15 scoped sub-steps
        assert_eq!(keys.len(), 27);
        assert!(keys.contains(&StepKey::step(Step::SoulName)));
        assert!(keys.contains(&StepKey::with_sub_step(
            Step::WorldPosition,
            SubStep::ClassStatus
        )));
    }

    #[test]
    fn parent_drops_sub_step() {
        let key = StepKey::with_sub_step(Step::Voice, SubStep::SpeechStyle);
        assert_eq!(key.parent(), Some(StepKey::step(Step::Voice)));
        assert_eq!(StepKey::step(Step::Voice).parent(), None);
        assert_eq!(key.to_string(), "voice/speechStyle");
    }
}
