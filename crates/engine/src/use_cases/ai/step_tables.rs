//! Step-keyed lookup tables.
//!
//! Every table is a map from `(step, sub-step)` to a value and shares one
//! resolution rule: the exact key, then the step on its own, then the
//! caller's default.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use soulgen_domain::{LoreCategory, Step, StepKey, SubStep};

use crate::prompt_templates::{user_prompt_opener, USER_PROMPT_CLOSING};

/// Map keyed by `(step, sub-step)` with step-level fallback.
#[derive(Debug)]
pub struct StepTable<T> {
    entries: HashMap<StepKey, T>,
}

impl<T> StepTable<T> {
    pub fn from_entries(entries: impl IntoIterator<Item = (StepKey, T)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Exact key, then its step-level parent. `None` means "use the default".
    pub fn resolve(&self, key: &StepKey) -> Option<&T> {
        self.entries
            .get(key)
            .or_else(|| key.parent().and_then(|parent| self.entries.get(&parent)))
    }
}

pub(super) fn step(step: Step) -> StepKey {
    StepKey::step(step)
}

pub(super) fn sub(step: Step, sub_step: SubStep) -> StepKey {
    StepKey::with_sub_step(step, sub_step)
}

// =============================================================================
// Lore categories
// =============================================================================

/// Categories consulted for every step.
pub const BASE_CATEGORIES: [LoreCategory; 2] =
    [LoreCategory::WorldBuilding, LoreCategory::NarrativeStyle];

static CATEGORIES: Lazy<StepTable<&'static [LoreCategory]>> = Lazy::new(|| {
    use LoreCategory::*;
    StepTable::from_entries([
        (step(Step::Archetype), &[CharacterArchetypes] as &[_]),
        (step(Step::Background), &[History, Locations] as &[_]),
        (step(Step::Hopes), &[Factions, History] as &[_]),
        (step(Step::Fears), &[Factions, History] as &[_]),
        (step(Step::PersonalityProfile), &[CharacterArchetypes, NarrativeStyle] as &[_]),
        (step(Step::Motivations), &[Factions, History] as &[_]),
        (step(Step::Relationships), &[Factions, CharacterArchetypes] as &[_]),
        (step(Step::WorldPosition), &[Factions, Locations, History] as &[_]),
        (step(Step::Voice), &[NarrativeStyle, Terminology] as &[_]),
        (step(Step::Symbolism), &[NarrativeStyle, WorldBuilding] as &[_]),
        (step(Step::PowersAbilities), &[Powers, Technology, Spirituality] as &[_]),
        (step(Step::SoulName), &[Terminology, Spirituality] as &[_]),
    ])
});

/// Base categories followed by the step's own, without duplicates.
pub fn relevant_categories(key: &StepKey) -> Vec<LoreCategory> {
    let mut categories = BASE_CATEGORIES.to_vec();
    for category in CATEGORIES.resolve(key).copied().unwrap_or_default() {
        if !categories.contains(category) {
            categories.push(*category);
        }
    }
    categories
}

// =============================================================================
// Lore tags
// =============================================================================

/// Tag consulted for every step.
pub const BASE_TAG: &str = "setting";

static STEP_TAGS: Lazy<StepTable<&'static [&'static str]>> = Lazy::new(|| {
    StepTable::from_entries([
        (step(Step::Archetype), &["character-voice", "examples"] as &[_]),
        (step(Step::Background), &["places", "history", "past"] as &[_]),
        (step(Step::Voice), &["dialogue", "character-voice", "examples"] as &[_]),
        (step(Step::PowersAbilities), &["abilities", "magic-system"] as &[_]),
    ])
});

pub fn step_tags(key: &StepKey) -> &'static [&'static str] {
    STEP_TAGS.resolve(key).copied().unwrap_or_default()
}

// =============================================================================
// System prompt instructions
// =============================================================================

static INSTRUCTIONS: Lazy<StepTable<&'static str>> = Lazy::new(|| {
    StepTable::from_entries([
        (
            step(Step::Archetype),
            "Generate 3 unique archetype suggestions that would fit well with this character's traits. Each suggestion should include a name and a brief description that aligns with the 0N1 universe's blend of technology and spirituality.",
        ),
        (
            step(Step::Background),
            "Generate 3 unique background or origin story suggestions that would fit well with this character's traits and archetype. Each suggestion should be a paragraph describing where they were born and their upbringing in the Neo-Digital Age.",
        ),
        (
            step(Step::Hopes),
            "Generate 3 unique hopes or dreams that would fit well with this character. Each suggestion should describe what the character aspires to achieve or become in the context of the 0N1 universe.",
        ),
        (
            step(Step::Fears),
            "Generate 3 unique fears or anxieties that would fit well with this character. Each suggestion should describe what terrifies the character or keeps them up at night, drawing from the dangers and uncertainties of the 0N1 universe.",
        ),
        (
            step(Step::PersonalityProfile),
            "Generate 3 different personality profiles that would fit well with this character. Each suggestion should be a paragraph describing their personality traits, temperament, and psychological makeup in a way that reflects their place in the 0N1 universe.",
        ),
        (
            step(Step::Motivations),
            "Generate 3 motivations that would drive this character. Each suggestion should explain what drives them, their goals, and their core values in the context of the 0N1 universe.",
        ),
        (
            sub(Step::Motivations, SubStep::Drives),
            "Generate 3 creative suggestions for this character's inner drives. What internal forces motivate this character? What pushes them forward from within? Each suggestion should be 2-3 sentences that describe a compelling internal motivation.",
        ),
        (
            sub(Step::Motivations, SubStep::Goals),
            "Generate 3 creative suggestions for this character's goals and ambitions. What does this character aim to achieve in the 0N1 world? What are their concrete objectives? Each suggestion should be 2-3 sentences that describe a meaningful goal or ambition.",
        ),
        (
            sub(Step::Motivations, SubStep::Values),
            "Generate 3 creative suggestions for this character's core values. What principles does this character hold dear? What moral or ethical beliefs guide their actions in the complex 0N1 universe? Each suggestion should be 2-3 sentences that describe a deeply held value or principle.",
        ),
        (
            step(Step::Relationships),
            "Generate 3 relationship dynamics that would fit this character. Each suggestion should describe potential allies/friends, rivals/enemies, and family/mentor relationships grounded in the factions of the 0N1 universe.",
        ),
        (
            sub(Step::Relationships, SubStep::Friends),
            "Generate 3 creative suggestions for this character's allies and friends. Who does this character trust and rely on? Which factions or individuals stand beside them? Each suggestion should be 2-3 sentences that describe a meaningful ally or friendship.",
        ),
        (
            sub(Step::Relationships, SubStep::Rivals),
            "Generate 3 creative suggestions for this character's rivals and enemies. Who opposes or challenges this character? Which factions see them as a threat? Each suggestion should be 2-3 sentences that describe a compelling adversarial relationship.",
        ),
        (
            sub(Step::Relationships, SubStep::Family),
            "Generate 3 creative suggestions for this character's family and mentors. Who shaped this character or guides them now, in flesh or in code? Each suggestion should be 2-3 sentences that describe an important familial or mentor relationship.",
        ),
        (
            step(Step::WorldPosition),
            "Generate 3 possible societal positions for this character. Each suggestion should describe their role in society, their status, and how they are perceived by others in the 0N1 universe.",
        ),
        (
            sub(Step::WorldPosition, SubStep::SocietalRole),
            "Generate 3 creative suggestions for this character's societal role. What function does this character serve in Neo-Tokyo? Each suggestion should be 2-3 sentences that describe a meaningful role in the world.",
        ),
        (
            sub(Step::WorldPosition, SubStep::ClassStatus),
            "Generate 3 creative suggestions for this character's class and status. Where does this character stand among the digital elites, the augmented middle class, and the physical laborers? Each suggestion should be 2-3 sentences that describe their position in society's structure.",
        ),
        (
            sub(Step::WorldPosition, SubStep::Perception),
            "Generate 3 creative suggestions for how this character is perceived. How do the public, the factions, and the authorities see them? Each suggestion should be 2-3 sentences that describe how others see and react to them.",
        ),
        (
            step(Step::Voice),
            "Generate 3 unique voice styles for this character. Each suggestion should describe their speech pattern, inner dialogue style, and include 1-2 example phrases they might say that reflect the 0N1 universe's blend of technological and spiritual language.",
        ),
        (
            sub(Step::Voice, SubStep::SpeechStyle),
            "Generate 3 creative suggestions for this character's speech style. How does this character speak? What patterns, vocabulary, or tone characterize their speech? Each suggestion should be 2-3 sentences that describe a distinctive way of speaking that fits the 0N1 universe.",
        ),
        (
            sub(Step::Voice, SubStep::InnerDialogue),
            "Generate 3 creative suggestions for this character's inner dialogue. How does this character think? What does their internal voice sound like? Each suggestion should be 2-3 sentences that describe their thought patterns and internal voice.",
        ),
        (
            sub(Step::Voice, SubStep::UniquePhrases),
            "Generate 3 creative suggestions for this character's unique phrases or expressions. What catchphrases or distinctive expressions does this character use? What verbal tics or sayings are associated with them? Each suggestion should include 1-2 example phrases and explain when/how they use them.",
        ),
        (
            step(Step::Symbolism),
            "Generate 3 symbolic elements for this character. Each suggestion should include colors, items, and motifs that represent the character's essence in the 0N1 universe.",
        ),
        (
            sub(Step::Symbolism, SubStep::Colors),
            "Generate 3 creative suggestions for this character's color palette. What colors represent this character, and what do they mean in a world of neon and temple fire? Each suggestion should be 2-3 sentences that describe meaningful color associations.",
        ),
        (
            sub(Step::Symbolism, SubStep::Items),
            "Generate 3 creative suggestions for this character's symbolic items. What objects, physical or digital, carry special meaning for them? Each suggestion should be 2-3 sentences that describe an object with symbolic significance.",
        ),
        (
            sub(Step::Symbolism, SubStep::Motifs),
            "Generate 3 creative suggestions for this character's recurring motifs. What images or patterns follow this character through the 0N1 universe? Each suggestion should be 2-3 sentences that describe a meaningful recurring motif.",
        ),
        (
            step(Step::PowersAbilities),
            "Generate 3 sets of powers or abilities for this character based on their traits, especially their Body type. Each suggestion should name the power, describe how it works, and state the cost or limitation that comes with it in the 0N1 powers system.",
        ),
        (
            step(Step::SoulName),
            "Generate 3 unique and evocative soul names for this character based on their traits, powers, and background. Each name should reflect the character's essence and come with a brief explanation of its meaning within the 0N1 lexicon.",
        ),
    ])
});

pub fn instruction(key: &StepKey) -> String {
    match INSTRUCTIONS.resolve(key) {
        Some(text) => (*text).to_string(),
        None => format!(
            "Generate 3 creative suggestions for the \"{}\" step of character creation. Each suggestion should be detailed, evocative, and align with the 0N1 universe's cyberpunk-mystical aesthetic.",
            key.step
        ),
    }
}

// =============================================================================
// Suggestion user prompt
// =============================================================================

const DEFAULT_USER_PROMPT: &str =
    "Provide 3 creative suggestions that would enhance this character's development.";

static USER_PROMPTS: Lazy<StepTable<&'static str>> = Lazy::new(|| {
    StepTable::from_entries([
        (
            step(Step::Archetype),
            "Suggest 3 unique archetypes that would fit well with this character's traits. Each suggestion should include a name and a brief description.",
        ),
        (
            step(Step::Background),
            "Suggest 3 unique backgrounds or origin stories that would fit well with this character's traits and archetype. Each suggestion should be a paragraph describing where they were born and their upbringing.",
        ),
        (
            step(Step::Hopes),
            "Suggest 3 unique hopes or dreams that would fit well with this character. Each suggestion should describe what the character aspires to achieve or become.",
        ),
        (
            step(Step::Fears),
            "Suggest 3 unique fears or anxieties that would fit well with this character. Each suggestion should describe what terrifies the character or keeps them up at night.",
        ),
        (
            step(Step::PersonalityProfile),
            "Suggest 3 different personality profiles that would fit well with this character. Each suggestion should be a paragraph describing their personality traits, temperament, and psychological makeup.",
        ),
        (
            step(Step::Motivations),
            "Suggest 3 motivations that would drive this character. Each suggestion should explain what drives them, their goals, and their core values.",
        ),
        (
            sub(Step::Motivations, SubStep::Drives),
            "Suggest 3 creative inner drives for this character. What internal forces motivate them? Each suggestion should be 2-3 sentences that describe a compelling internal motivation.",
        ),
        (
            sub(Step::Motivations, SubStep::Goals),
            "Suggest 3 creative goals and ambitions for this character. What do they aim to achieve? Each suggestion should be 2-3 sentences that describe a meaningful goal or ambition.",
        ),
        (
            sub(Step::Motivations, SubStep::Values),
            "Suggest 3 creative core values for this character. What principles guide their actions? Each suggestion should be 2-3 sentences that describe a deeply held value or principle.",
        ),
        (
            step(Step::Relationships),
            "Suggest 3 relationship dynamics that would fit this character. Each suggestion should describe potential allies/friends, rivals/enemies, and family/mentor relationships.",
        ),
        (
            sub(Step::Relationships, SubStep::Friends),
            "Suggest 3 creative allies and friends for this character. Who do they trust and rely on? Each suggestion should be 2-3 sentences that describe meaningful allies or friendships.",
        ),
        (
            sub(Step::Relationships, SubStep::Rivals),
            "Suggest 3 creative rivals and enemies for this character. Who opposes or challenges them? Each suggestion should be 2-3 sentences that describe compelling adversarial relationships.",
        ),
        (
            sub(Step::Relationships, SubStep::Family),
            "Suggest 3 creative family and mentor relationships for this character. Who shaped them or guides them? Each suggestion should be 2-3 sentences that describe important familial or mentor relationships.",
        ),
        (
            step(Step::WorldPosition),
            "Suggest 3 possible societal positions for this character. Each suggestion should describe their role in society, their status, and how they are perceived by others.",
        ),
        (
            sub(Step::WorldPosition, SubStep::SocietalRole),
            "Suggest 3 creative societal roles for this character. What function do they serve in society? Each suggestion should be 2-3 sentences that describe a meaningful role in the world.",
        ),
        (
            sub(Step::WorldPosition, SubStep::ClassStatus),
            "Suggest 3 creative class and status positions for this character. What is their social standing? Each suggestion should be 2-3 sentences that describe their position in society's structure.",
        ),
        (
            sub(Step::WorldPosition, SubStep::Perception),
            "Suggest 3 creative ways this character is perceived by others. How are they viewed by the public? Each suggestion should be 2-3 sentences that describe how others see and react to them.",
        ),
        (
            step(Step::Voice),
            "Suggest 3 unique voice styles for this character. Each suggestion should describe their speech pattern, inner dialogue style, and include 1-2 example phrases they might say.",
        ),
        (
            sub(Step::Voice, SubStep::SpeechStyle),
            "Suggest 3 creative speech styles for this character. How do they speak? Each suggestion should be 2-3 sentences that describe a distinctive way of speaking.",
        ),
        (
            sub(Step::Voice, SubStep::InnerDialogue),
            "Suggest 3 creative inner dialogue styles for this character. How do they think? Each suggestion should be 2-3 sentences that describe their thought patterns and internal voice.",
        ),
        (
            sub(Step::Voice, SubStep::UniquePhrases),
            "Suggest 3 creative unique phrases or expressions for this character. What catchphrases do they use? Each suggestion should include 1-2 example phrases and explain when/how they use them.",
        ),
        (
            step(Step::Symbolism),
            "Suggest 3 symbolic elements for this character. Each suggestion should include colors, items, and motifs that represent the character's essence.",
        ),
        (
            sub(Step::Symbolism, SubStep::Colors),
            "Suggest 3 creative color palettes associated with this character. What colors represent them? Each suggestion should be 2-3 sentences that describe meaningful color associations.",
        ),
        (
            sub(Step::Symbolism, SubStep::Items),
            "Suggest 3 creative symbolic items associated with this character. What objects have special meaning to them? Each suggestion should be 2-3 sentences that describe objects with symbolic significance.",
        ),
        (
            sub(Step::Symbolism, SubStep::Motifs),
            "Suggest 3 creative recurring motifs associated with this character. What themes or patterns define them? Each suggestion should be 2-3 sentences that describe meaningful recurring motifs.",
        ),
        (
            step(Step::PowersAbilities),
            "Suggest 3 sets of powers or abilities for this character based on their traits. Each suggestion should name the power and provide a brief description of how it works and connects to their traits.",
        ),
        (
            step(Step::SoulName),
            "Suggest 3 unique and evocative soul names for this character based on their traits, powers, and background. Each name should reflect the character's essence and have a brief explanation of its meaning or significance.",
        ),
    ])
});

/// User message for a single-shot suggestion request.
pub fn user_prompt(key: &StepKey) -> String {
    let body = USER_PROMPTS.resolve(key).copied().unwrap_or(DEFAULT_USER_PROMPT);
    format!(
        "{}\n\n{}\n\n{}",
        user_prompt_opener(key.step.as_str()),
        body,
        USER_PROMPT_CLOSING
    )
}

// =============================================================================
// Assistant panel titles
// =============================================================================

pub const DEFAULT_TITLE: &str = "AI ASSISTANT";

static TITLES: Lazy<StepTable<&'static str>> = Lazy::new(|| {
    StepTable::from_entries([
        (sub(Step::Motivations, SubStep::Drives), "AI ASSISTANT - INNER DRIVES"),
        (sub(Step::Motivations, SubStep::Goals), "AI ASSISTANT - GOALS & AMBITIONS"),
        (sub(Step::Motivations, SubStep::Values), "AI ASSISTANT - CORE VALUES"),
        (sub(Step::Relationships, SubStep::Friends), "AI ASSISTANT - ALLIES & FRIENDS"),
        (sub(Step::Relationships, SubStep::Rivals), "AI ASSISTANT - RIVALS & ENEMIES"),
        (sub(Step::Relationships, SubStep::Family), "AI ASSISTANT - FAMILY & MENTORS"),
        (sub(Step::WorldPosition, SubStep::SocietalRole), "AI ASSISTANT - SOCIETAL ROLE"),
        (sub(Step::WorldPosition, SubStep::ClassStatus), "AI ASSISTANT - CLASS & STATUS"),
        (sub(Step::WorldPosition, SubStep::Perception), "AI ASSISTANT - PUBLIC PERCEPTION"),
        (sub(Step::Voice, SubStep::SpeechStyle), "AI ASSISTANT - SPEECH STYLE"),
        (sub(Step::Voice, SubStep::InnerDialogue), "AI ASSISTANT - INNER DIALOGUE"),
        (sub(Step::Voice, SubStep::UniquePhrases), "AI ASSISTANT - UNIQUE PHRASES"),
        (sub(Step::Symbolism, SubStep::Colors), "AI ASSISTANT - COLORS & PALETTE"),
        (sub(Step::Symbolism, SubStep::Items), "AI ASSISTANT - SYMBOLIC ITEMS"),
        (sub(Step::Symbolism, SubStep::Motifs), "AI ASSISTANT - RECURRING MOTIFS"),
    ])
});

pub fn title(key: &StepKey) -> &'static str {
    TITLES.resolve(key).copied().unwrap_or(DEFAULT_TITLE)
}

// =============================================================================
// Opening chat greetings
// =============================================================================

pub const DEFAULT_GREETING: &str =
    "Hello! I'm your AI assistant for this step. How can I help you develop your character?";

static GREETINGS: Lazy<StepTable<&'static str>> = Lazy::new(|| {
    StepTable::from_entries([
        (
            step(Step::Background),
            "Hi there! I can help you craft your character's background story. What kind of origin are you thinking about? Feel free to ask for ideas or guidance.",
        ),
        (
            step(Step::Hopes),
            "Let's explore your character's hopes and dreams. What aspirations do you envision for them? I can help brainstorm ideas that fit their traits and archetype.",
        ),
        (
            step(Step::Fears),
            "What keeps your character up at night? I can help you develop compelling fears and anxieties that add depth to your character. Just ask!",
        ),
        (
            step(Step::PersonalityProfile),
            "Ready to define your character's personality? I can suggest traits, temperaments, and psychological aspects that would create a compelling character.",
        ),
        (
            step(Step::Motivations),
            "What drives your character forward? I can help you explore their motivations, goals, and values. Just ask!",
        ),
        (
            sub(Step::Motivations, SubStep::Drives),
            "Let's focus on your character's inner drives. What motivates them in this area?",
        ),
        (
            sub(Step::Motivations, SubStep::Goals),
            "Let's focus on your character's goals and ambitions. What motivates them in this area?",
        ),
        (
            sub(Step::Motivations, SubStep::Values),
            "Let's focus on your character's core values. What motivates them in this area?",
        ),
        (
            step(Step::Relationships),
            "Who are the important people in your character's life? Let's discuss their relationships and connections.",
        ),
        (
            sub(Step::Relationships, SubStep::Friends),
            "Let's develop your character's allies and friends. Who are the important people in their life?",
        ),
        (
            sub(Step::Relationships, SubStep::Rivals),
            "Let's develop your character's rivals and enemies. Who are the important people in their life?",
        ),
        (
            sub(Step::Relationships, SubStep::Family),
            "Let's develop your character's family and mentors. Who are the important people in their life?",
        ),
        (
            step(Step::WorldPosition),
            "Where does your character stand in the world? Let's explore their societal position and how others perceive them.",
        ),
        (
            sub(Step::WorldPosition, SubStep::SocietalRole),
            "Let's define your character's role in society. How do they fit into the world?",
        ),
        (
            sub(Step::WorldPosition, SubStep::ClassStatus),
            "Let's define your character's class and status. How do they fit into the world?",
        ),
        (
            sub(Step::WorldPosition, SubStep::Perception),
            "Let's define your character's public perception. How do they fit into the world?",
        ),
        (
            step(Step::Voice),
            "How does your character speak and think? Let's craft their unique voice and expressions.",
        ),
        (
            sub(Step::Voice, SubStep::SpeechStyle),
            "Let's develop your character's speech style. How do they express themselves?",
        ),
        (
            sub(Step::Voice, SubStep::InnerDialogue),
            "Let's develop your character's inner dialogue. How do they express themselves?",
        ),
        (
            sub(Step::Voice, SubStep::UniquePhrases),
            "Let's develop your character's unique phrases. How do they express themselves?",
        ),
        (
            step(Step::Symbolism),
            "What symbols and visual elements represent your character? Let's develop their symbolic language.",
        ),
        (
            sub(Step::Symbolism, SubStep::Colors),
            "Let's explore the colors and palette associated with your character. What visual elements represent them?",
        ),
        (
            sub(Step::Symbolism, SubStep::Items),
            "Let's explore the symbolic items associated with your character. What visual elements represent them?",
        ),
        (
            sub(Step::Symbolism, SubStep::Motifs),
            "Let's explore the recurring motifs associated with your character. What visual elements represent them?",
        ),
        (
            step(Step::SoulName),
            "I can help you find the perfect soul name for your character. What kind of name are you looking for? Something mysterious, powerful, poetic? Tell me what you're thinking!",
        ),
    ])
});

pub fn greeting(key: &StepKey) -> &'static str {
    GREETINGS.resolve(key).copied().unwrap_or(DEFAULT_GREETING)
}
