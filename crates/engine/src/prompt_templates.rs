//! Fixed prompt text used by the engine.
//!
//! Step-keyed text lives in `use_cases::ai::step_tables`; this module holds
//! the parts that never vary by step.

/// Lore budget (estimated tokens) for single-shot suggestions.
pub const SUGGESTION_LORE_BUDGET: usize = 2000;

/// Lore budget (estimated tokens) for multi-turn chat.
pub const CHAT_LORE_BUDGET: usize = 3000;

/// Sampling temperature for suggestion requests.
pub const SUGGESTION_TEMPERATURE: f32 = 0.8;

/// Sampling temperature for chat requests.
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Output cap for both request kinds.
pub const MAX_OUTPUT_TOKENS: u32 = 500;

pub const CHARACTER_CONTEXT_HEADER: &str = "\n\n## CHARACTER CONTEXT\n";
pub const LORE_CONTEXT_HEADER: &str = "\n\n## 0N1 UNIVERSE LORE\n";
pub const INSTRUCTIONS_HEADER: &str = "\n\n## SPECIFIC INSTRUCTIONS\n";

/// Opening of every system prompt.
pub fn system_preamble(step: &str, sub_step: Option<&str>) -> String {
    let section = sub_step
        .map(|sub| format!(" (specifically the \"{sub}\" section)"))
        .unwrap_or_default();

    format!(
        "You are an AI assistant for the 0N1 Soul Generator application. Your job is to provide creative, thematic suggestions for character development that match the cyberpunk anime fantasy aesthetic of the 0N1 Force NFT collection.\n\n\
         You are currently helping with the \"{step}\" step{section} of character creation.\n\n"
    )
}

/// Closing tone rules appended to every system prompt. Not budget-counted.
pub const STYLE_GUIDELINES: &str = r#"

## STYLISTIC GUIDELINES

1. BLEND TECHNOLOGY AND SPIRITUALITY: Always merge technological concepts with spiritual or mystical elements. For example, don't just describe "hacking" but "soul-code manipulation" or "digital communion."

2. USE SENSORY CONTRASTS: Pair opposing sensory elements like "the cold blue glow of quantum circuits illuminated the ancient temple inscriptions."

3. EMPLOY SPECIALIZED TERMINOLOGY: Incorporate terms from the 0N1 lexicon like "Soul-Code," "The Merge," "Blazing Protocol," etc. when relevant.

4. MAINTAIN TONAL BALANCE: Balance gritty cyberpunk elements with moments of spiritual depth or philosophical insight.

5. CRAFT DISTINCTIVE DIALOGUE: If including example speech, ensure it matches the character's background and role in society.

6. EMPHASIZE DUALITY: Highlight the character's existence between digital and physical realms, between ancient traditions and futuristic technology.

Your suggestions should be poetic, evocative, and aligned with the cyberpunk anime fantasy aesthetic of the 0N1 Force NFT collection. Each suggestion should be 2-4 sentences long unless otherwise specified."#;

/// First sentence of the suggestion user message.
pub fn user_prompt_opener(step: &str) -> String {
    format!("Generate 3 creative suggestions for the \"{step}\" step of character creation.")
}

/// Last sentence of the suggestion user message.
pub const USER_PROMPT_CLOSING: &str = "Make your suggestions poetic, evocative, and aligned with a cyberpunk anime fantasy aesthetic. Each suggestion should be 2-4 sentences long.";

// =============================================================================
// Degraded-mode messages
// =============================================================================

pub const ERROR_NOT_CONFIGURED: &str = "OpenAI client not initialized";
pub const ERROR_INVALID_REQUEST: &str = "Invalid request data";
pub const ERROR_SUGGESTIONS_FAILED: &str = "Failed to generate suggestions";
pub const ERROR_CHAT_FAILED: &str = "Failed to generate response";

/// Chat reply used whenever generation is unavailable or fails.
pub const CHAT_FALLBACK_RESPONSE: &str = "I'm having trouble connecting right now. Please try again or use the suggestions above for inspiration.";

/// Chat reply for a request the engine could not read.
pub const CHAT_INVALID_REQUEST_RESPONSE: &str =
    "I couldn't understand your request. Please try again.";
