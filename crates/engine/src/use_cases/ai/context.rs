//! System prompt assembly.
//!
//! The assembler is a pure function of its [`PromptContext`] and the corpus
//! snapshot it was built with: the same context always yields the same
//! prompt bytes.

use soulgen_domain::{CharacterState, LoreCategory, LoreDocument, Step, StepKey};

use crate::entities::{LoreCorpus, PowerCatalog};
use crate::prompt_templates::{
    system_preamble, CHARACTER_CONTEXT_HEADER, INSTRUCTIONS_HEADER, LORE_CONTEXT_HEADER,
    STYLE_GUIDELINES, SUGGESTION_LORE_BUDGET,
};

use super::step_tables::{instruction, relevant_categories, step_tags, BASE_TAG};

/// Estimated tokens for a piece of text: a quarter of its length.
///
/// Length is counted in UTF-16 code units so budgets line up with what the
/// form collaborator measures on its side.
pub fn estimate_tokens(text: &str) -> f64 {
    text.encode_utf16().count() as f64 * 0.25
}

/// Everything the assembler needs for one prompt.
#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    pub character: &'a CharacterState,
    pub key: StepKey,
    /// Lore budget in estimated tokens.
    pub max_tokens: usize,
    /// Documents to include ahead of any category or tag match.
    pub specific_document_ids: Vec<String>,
}

impl<'a> PromptContext<'a> {
    pub fn new(character: &'a CharacterState, key: StepKey) -> Self {
        Self {
            character,
            key,
            max_tokens: SUGGESTION_LORE_BUDGET,
            specific_document_ids: Vec::new(),
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_specific_documents<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specific_document_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Tags to match in the last selection phase: the base tag, every Body
    /// trait value, then the step's own tags. No tag appears twice.
    pub fn relevant_tags(&self) -> Vec<String> {
        let mut tags = vec![BASE_TAG.to_string()];
        let mut push = |tag: String| {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        };

        for body in self.character.trait_values("body") {
            push(body.to_lowercase());
            push("body-types".to_string());
        }
        for tag in step_tags(&self.key) {
            push(tag.to_string());
        }

        tags
    }
}

/// Lore chosen for a prompt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoreSelection {
    /// Rendered block, header included.
    pub text: String,
    /// Included documents, in render order.
    pub document_ids: Vec<String>,
    /// Sum of the estimates of the included documents.
    pub estimated_tokens: f64,
}

impl LoreSelection {
    fn new() -> Self {
        Self {
            text: LORE_CONTEXT_HEADER.to_string(),
            ..Self::default()
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.document_ids.iter().any(|included| included == id)
    }

    /// First-fit: add the document if it stays within `max_tokens`.
    fn try_push(&mut self, doc: &LoreDocument, max_tokens: f64) -> bool {
        let section = render_document(doc);
        let cost = estimate_tokens(&section);
        if self.estimated_tokens + cost > max_tokens {
            return false;
        }

        self.text.push_str(&section);
        self.document_ids.push(doc.id.clone());
        self.estimated_tokens += cost;
        true
    }
}

fn render_document(doc: &LoreDocument) -> String {
    format!("\n### {}\n{}\n", doc.title.to_uppercase(), doc.content)
}

/// Builds system prompts from character state and the lore corpus.
#[derive(Debug, Clone)]
pub struct ContextAssembler {
    corpus: LoreCorpus,
    powers: PowerCatalog,
}

impl ContextAssembler {
    /// Uses the built-in power catalog.
    pub fn new(corpus: LoreCorpus) -> Self {
        Self {
            corpus,
            powers: PowerCatalog::builtin(),
        }
    }

    pub fn with_powers(mut self, powers: PowerCatalog) -> Self {
        self.powers = powers;
        self
    }

    /// Full system prompt: preamble, character, lore, instructions, style.
    pub fn assemble(&self, context: &PromptContext<'_>) -> String {
        let key = &context.key;
        let sub_step = key.sub_step.as_ref().map(|sub| sub.as_str());
        let lore = self.select_lore(context);

        tracing::debug!(
            step = %key.step,
            sub_step = sub_step.unwrap_or(""),
            documents = ?lore.document_ids,
            estimated_tokens = lore.estimated_tokens,
            max_tokens = context.max_tokens,
            "Assembled lore context"
        );

        let mut prompt = system_preamble(key.step.as_str(), sub_step);
        prompt.push_str(&character_context(context.character));
        prompt.push_str(&lore.text);
        prompt.push_str(INSTRUCTIONS_HEADER);
        prompt.push_str(&instruction(key));
        if key.step == Step::PowersAbilities {
            prompt.push_str(&self.power_context(context.character));
        }
        prompt.push_str(STYLE_GUIDELINES);
        prompt
    }

    /// Powers the character's Body traits grant. Empty when none is known.
    pub fn power_context(&self, character: &CharacterState) -> String {
        let power_types = self.powers.for_character(character);
        if power_types.is_empty() {
            return String::new();
        }

        let mut out = String::from("\n\nBody-type powers for this character:\n");
        for power_type in power_types {
            let evolutions: Vec<&str> = power_type
                .evolution_options
                .iter()
                .map(|e| e.name.as_str())
                .collect();
            out.push_str(&format!(
                "- {}: {} foundation. Core power: {}. Evolution paths: {}.\n",
                power_type.body_type,
                power_type.foundation,
                power_type.core_power.name,
                evolutions.join(", ")
            ));
        }
        out.push_str("Build on these powers rather than inventing unrelated ones.");
        out
    }

    /// Corpus selection in three phases: explicit ids, relevant categories,
    /// then tag matches from categories not already relevant.
    pub fn select_lore(&self, context: &PromptContext<'_>) -> LoreSelection {
        let max_tokens = context.max_tokens as f64;
        let categories = relevant_categories(&context.key);
        let mut selection = LoreSelection::new();

        for id in &context.specific_document_ids {
            if selection.contains(id) {
                continue;
            }
            if let Some(doc) = self.corpus.by_id(id) {
                selection.try_push(doc, max_tokens);
            }
        }

        for doc in self.corpus.all() {
            if categories.contains(&doc.category) && !selection.contains(&doc.id) {
                selection.try_push(doc, max_tokens);
            }
        }

        let tags = context.relevant_tags();
        if selection.estimated_tokens < max_tokens && !tags.is_empty() {
            for doc in self.corpus.by_tags(&tags) {
                if selection.contains(&doc.id) || is_relevant(&categories, doc.category) {
                    continue;
                }
                selection.try_push(doc, max_tokens);
            }
        }

        selection
    }
}

fn is_relevant(categories: &[LoreCategory], category: LoreCategory) -> bool {
    categories.contains(&category)
}

/// Labelled lines for the non-blank character fields.
pub fn character_context(character: &CharacterState) -> String {
    let mut out = String::from(CHARACTER_CONTEXT_HEADER);

    if !character.traits.is_empty() {
        out.push_str("\nTraits:\n");
        for t in &character.traits {
            out.push_str(&format!("- {}: {}\n", t.trait_type, t.value));
        }
    }

    let fields = [
        ("Archetype", &character.archetype),
        ("Background", &character.background),
        ("Hopes & Dreams", &character.hopes_fears.hopes),
        ("Fears & Anxieties", &character.hopes_fears.fears),
        ("Personality", &character.personality_profile.description),
    ];
    for (label, value) in fields {
        if !value.trim().is_empty() {
            out.push_str(&format!("\n{label}: {value}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use soulgen_domain::{CharacterTrait, Step, SubStep};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn character() -> CharacterState {
        CharacterState::new("42")
            .with_traits(vec![
                CharacterTrait::new("Body", "Spirit"),
                CharacterTrait::new("Eyes", "Lasers"),
            ])
            .with_archetype("The Ronin")
    }

    fn doc(id: &str, category: LoreCategory, content: &str) -> LoreDocument {
        LoreDocument::new(id, id, category, content, date())
    }

    fn builtin() -> ContextAssembler {
        ContextAssembler::new(LoreCorpus::builtin())
    }

    #[test]
    fn assembly_is_idempotent() {
        let assembler = builtin();
        let character = character();
        let context = PromptContext::new(
            &character,
            StepKey::with_sub_step(Step::Motivations, SubStep::Drives),
        );

        assert_eq!(assembler.assemble(&context), assembler.assemble(&context));
    }

    #[test]
    fn prompt_sections_appear_in_order() {
        let assembler = builtin();
        let character = character();
        let context = PromptContext::new(&character, StepKey::step(Step::Background));
        let prompt = assembler.assemble(&context);

        let character_at = prompt.find("## CHARACTER CONTEXT").unwrap();
        let lore_at = prompt.find("## 0N1 UNIVERSE LORE").unwrap();
        let instructions_at = prompt.find("## SPECIFIC INSTRUCTIONS").unwrap();
        let style_at = prompt.find("## STYLISTIC GUIDELINES").unwrap();

        assert!(prompt.starts_with("You are an AI assistant for the 0N1 Soul Generator"));
        assert!(character_at < lore_at);
        assert!(lore_at < instructions_at);
        assert!(instructions_at < style_at);
        assert!(prompt.contains("Generate 3 unique background or origin story suggestions"));
    }

    #[test]
    fn blank_fields_are_omitted() {
        let character = CharacterState::new("1").with_background("Raised in the Undercity");
        let text = character_context(&character);

        assert_eq!(
            text,
            "\n\n## CHARACTER CONTEXT\n\nBackground: Raised in the Undercity\n"
        );
    }

    #[test]
    fn traits_are_listed_in_order() {
        let text = character_context(&character());
        assert!(text.contains("\nTraits:\n- Body: Spirit\n- Eyes: Lasers\n"));
        assert!(text.contains("\nArchetype: The Ronin\n"));
        assert!(!text.contains("Background:"));
    }

    #[test]
    fn zero_budget_yields_header_only() {
        let assembler = builtin();
        let character = character();
        let context = PromptContext::new(&character, StepKey::step(Step::Archetype))
            .with_max_tokens(0)
            .with_specific_documents(["world-overview"]);
        let selection = assembler.select_lore(&context);

        assert_eq!(selection.text, LORE_CONTEXT_HEADER);
        assert!(selection.document_ids.is_empty());
    }

    #[test]
    fn selection_stays_within_budget() {
        let assembler = builtin();
        let character = character();

        for budget in [0, 50, 300, 800, 2000, 3000] {
            for key in StepKey::reachable() {
                let context = PromptContext::new(&character, key).with_max_tokens(budget);
                let selection = assembler.select_lore(&context);
                assert!(selection.estimated_tokens <= budget as f64);

                let body = &selection.text[LORE_CONTEXT_HEADER.len()..];
                assert!(estimate_tokens(body) <= budget as f64);
            }
        }
    }

    #[test]
    fn budget_rejection_does_not_stop_the_phase() {
        let corpus = LoreCorpus::new(vec![
            doc("big", LoreCategory::WorldBuilding, &"x".repeat(400)),
            doc("small", LoreCategory::WorldBuilding, "tiny"),
        ]);
        let assembler = ContextAssembler::new(corpus);
        let character = CharacterState::new("1");
        let context =
            PromptContext::new(&character, StepKey::step(Step::Archetype)).with_max_tokens(20);

        let selection = assembler.select_lore(&context);
        assert_eq!(selection.document_ids, vec!["small"]);
    }

    #[test]
    fn specific_ids_come_first_and_unknown_ids_are_skipped() {
        let corpus = LoreCorpus::new(vec![
            doc("a", LoreCategory::WorldBuilding, "alpha"),
            doc("b", LoreCategory::Powers, "beta"),
        ]);
        let assembler = ContextAssembler::new(corpus);
        let character = CharacterState::new("1");
        let context = PromptContext::new(&character, StepKey::step(Step::Archetype))
            .with_specific_documents(["missing", "b", "b"]);

        let selection = assembler.select_lore(&context);
        assert_eq!(selection.document_ids, vec!["b", "a"]);
        assert!(selection.text.starts_with("\n\n## 0N1 UNIVERSE LORE\n\n### B\nbeta\n"));
    }

    #[test]
    fn tag_phase_skips_relevant_categories_even_when_not_included() {
        // "skipped" is in a relevant category but too large for the budget;
        // the tag phase must not pick it up either.
        let corpus = LoreCorpus::new(vec![
            doc("skipped", LoreCategory::WorldBuilding, &"x".repeat(400)).with_tags(["setting"]),
            doc("tagged", LoreCategory::Powers, "power").with_tags(["spirit"]),
            doc("untagged", LoreCategory::Powers, "other"),
        ]);
        let assembler = ContextAssembler::new(corpus);
        let character = character();
        let context =
            PromptContext::new(&character, StepKey::step(Step::Archetype)).with_max_tokens(50);

        let selection = assembler.select_lore(&context);
        assert_eq!(selection.document_ids, vec!["tagged"]);
    }

    #[test]
    fn body_trait_contributes_tags() {
        let character = character();
        let context = PromptContext::new(&character, StepKey::step(Step::PowersAbilities));

        assert_eq!(
            context.relevant_tags(),
            vec!["setting", "spirit", "body-types", "abilities", "magic-system"]
        );
    }

    #[test]
    fn every_body_trait_contributes_a_tag() {
        let character = CharacterState::new("1").with_traits(vec![
            CharacterTrait::new("Body", "Spirit"),
            CharacterTrait::new("Body", "Tiger Skin"),
            CharacterTrait::new("body", "spirit"),
        ]);
        let context = PromptContext::new(&character, StepKey::step(Step::Archetype));

        assert_eq!(
            context.relevant_tags(),
            vec!["setting", "spirit", "body-types", "tiger skin", "character-voice", "examples"]
        );
    }

    #[test]
    fn second_body_trait_reaches_tagged_lore() {
        let corpus = LoreCorpus::new(vec![
            doc("tiger-lore", LoreCategory::Powers, "stripes").with_tags(["tiger skin"]),
        ]);
        let assembler = ContextAssembler::new(corpus);
        let character = CharacterState::new("1").with_traits(vec![
            CharacterTrait::new("Body", "Spirit"),
            CharacterTrait::new("Body", "Tiger Skin"),
        ]);
        let context = PromptContext::new(&character, StepKey::step(Step::Archetype));

        assert_eq!(assembler.select_lore(&context).document_ids, vec!["tiger-lore"]);
    }

    #[test]
    fn powers_step_includes_body_foundation() {
        let assembler = builtin();
        let character = CharacterState::new("1")
            .with_traits(vec![CharacterTrait::new("Body", "Obsidian")]);
        let context = PromptContext::new(&character, StepKey::step(Step::PowersAbilities));
        let prompt = assembler.assemble(&context);

        let instructions_at = prompt.find("## SPECIFIC INSTRUCTIONS").unwrap();
        let powers_at = prompt
            .find("- Obsidian: Spatial Manipulation foundation. Core power: Shadowcrafting.")
            .unwrap();
        let style_at = prompt.find("## STYLISTIC GUIDELINES").unwrap();
        assert!(instructions_at < powers_at && powers_at < style_at);
        assert!(prompt.contains("Evolution paths: Voidwalker, Shadowforger, Nightstalker."));
    }

    #[test]
    fn power_context_only_on_powers_step() {
        let assembler = builtin();
        let character = CharacterState::new("1")
            .with_traits(vec![CharacterTrait::new("Body", "Obsidian")]);
        let context = PromptContext::new(&character, StepKey::step(Step::Background));

        assert!(!assembler.assemble(&context).contains("Body-type powers"));
    }

    #[test]
    fn unknown_body_has_no_power_context() {
        let assembler = builtin();
        let character = CharacterState::new("1")
            .with_traits(vec![CharacterTrait::new("Body", "Chrome")]);
        assert!(assembler.power_context(&character).is_empty());
        assert!(assembler
            .power_context(&character.clone().with_traits(Vec::new()))
            .is_empty());
    }

    #[test]
    fn unknown_step_uses_base_tables() {
        let assembler = builtin();
        let character = CharacterState::new("1");
        let context = PromptContext::new(&character, StepKey::step(Step::from("epilogue")));

        assert_eq!(context.relevant_tags(), vec!["setting"]);
        let prompt = assembler.assemble(&context);
        assert!(prompt.contains("for the \"epilogue\" step of character creation. Each suggestion"));
    }
}
