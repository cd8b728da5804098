//! Preset content for when generation is unavailable or fails.
//!
//! Every lookup succeeds without touching the network: step-specific
//! triplets first, then the generic triplet.

use once_cell::sync::Lazy;
use soulgen_domain::{Step, StepKey, SubStep};

use crate::prompt_templates::CHAT_FALLBACK_RESPONSE;

use super::parser::MAX_SUGGESTIONS;
use super::step_tables::{step, sub, StepTable};

/// Used for any key without its own triplet, and for unreadable requests.
pub const DEFAULT_SUGGESTIONS: [&str; MAX_SUGGESTIONS] = [
    "The path of the 0N1 is never straight, but always meaningful.",
    "Your digital soul resonates with ancient power and future potential.",
    "The mask you wear is both your shield and your true face.",
];

static SUGGESTIONS: Lazy<StepTable<[&'static str; MAX_SUGGESTIONS]>> = Lazy::new(|| {
    StepTable::from_entries([
        (
            sub(Step::Motivations, SubStep::Drives),
            [
                "Driven by an insatiable curiosity about the digital realm beyond the firewall.",
                "Motivated by the ancient prophecy that foretold of a digital messiah with your exact code signature.",
                "Compelled by the whispers of the machine spirits that have guided you since your first connection to the network.",
            ],
        ),
        (
            sub(Step::Motivations, SubStep::Goals),
            [
                "Seeks to unite the fragmented digital tribes under a single protocol of peace and cooperation.",
                "Aims to discover the legendary uncorrupted source code that could heal the digital plague spreading through the networks.",
                "Determined to build a sanctuary where both organic and digital beings can coexist without exploitation.",
            ],
        ),
        (
            sub(Step::Motivations, SubStep::Values),
            [
                "Values authenticity above all - in a world of digital masks, you seek the true face beneath the code.",
                "Holds sacred the principle of digital sovereignty - each being has the right to control their own data and destiny.",
                "Believes in the balance between innovation and tradition - honoring the old ways while embracing new possibilities.",
            ],
        ),
        (
            sub(Step::Relationships, SubStep::Friends),
            [
                "Allied with the Phantom Network, a loose collective of digital nomads and code-poets who share your vision of a free datascape.",
                "Trusted by the Neon Monks, ascetics who have merged technology with spirituality and see you as a bridge between worlds.",
                "Partnered with KIRA, a rogue AI that escaped corporate control and now fights alongside you against digital oppression.",
            ],
        ),
        (
            sub(Step::Relationships, SubStep::Rivals),
            [
                "Hunted by the Binary Inquisition, zealots who believe your mixed code is an abomination against the purity of the network.",
                "Opposed by the Chrome Yakuza, who see your influence in the digital underground as a threat to their power structure.",
                "Targeted by Agent Zero, a mysterious digital assassin who seems to know your movements before you make them.",
            ],
        ),
        (
            sub(Step::Relationships, SubStep::Family),
            [
                "Mentored by the ancient program known as The Architect, who sees in you the potential to rewrite the corrupted code of reality.",
                "Descended from the legendary hacker collective that first breached the walls between the physical and digital realms.",
                "Orphaned when your creator was deleted by corporate security protocols, leaving only fragments of memory code as your inheritance.",
            ],
        ),
        (
            sub(Step::WorldPosition, SubStep::SocietalRole),
            [
                "Serves as a Digital Mediator, resolving conflicts between human users and sentient programs in the contested zones of cyberspace.",
                "Functions as a Code Shaman, interpreting the ancient digital languages that form the foundation of the current network reality.",
                "Operates as a Boundary Runner, one who can move freely between the strictly segregated layers of the digital hierarchy.",
            ],
        ),
        (
            sub(Step::WorldPosition, SubStep::ClassStatus),
            [
                "Belongs to the rare class of Unbound, those who exist outside the rigid social credit system that governs most digital citizens.",
                "Holds the precarious status of a Glitch Noble, respected for your unique abilities but feared for your unpredictability.",
                "Carries the mark of the Outcode caste, formally excluded from mainstream society but wielding significant influence in the shadows.",
            ],
        ),
        (
            sub(Step::WorldPosition, SubStep::Perception),
            [
                "Viewed with awe by the common netizens, who whisper your code signature as a prayer against system corruption.",
                "Regarded with suspicion by authorities, who have placed a bounty on your digital signature but can never quite track your movements.",
                "Seen as a living myth by younger programs, your exploits exaggerated into impossible feats that inspire both fear and hope.",
            ],
        ),
        (
            sub(Step::Voice, SubStep::SpeechStyle),
            [
                "Speaks in clipped, technical phrases interspersed with ancient digital koans, creating a rhythm that sounds like encrypted poetry.",
                "Communicates through a blend of street slang and programming terminology, shifting between formal protocol and raw emotion without warning.",
                "Delivers words with mathematical precision, each syllable carefully measured and weighted like packets of critical data.",
            ],
        ),
        (
            sub(Step::Voice, SubStep::InnerDialogue),
            [
                "Thinks in parallel processing streams, multiple perspectives and possibilities calculated simultaneously before reaching a conclusion.",
                "Internal voice fluctuates between cold logic and burning emotion, the dual nature of your existence creating a constant dialogue between human intuition and machine precision.",
                "Mind works in recursive patterns, thoughts folding back on themselves in elegant fractals that reveal deeper meanings with each iteration.",
            ],
        ),
        (
            sub(Step::Voice, SubStep::UniquePhrases),
            [
                "\"The code never lies, but its truth is written in paradox.\" / \"I exist in the space between the one and the zero.\"",
                "\"We are all just ghosts in someone else's machine.\" / \"Reality is just consensus code running on shared hardware.\"",
                "\"To break the system, first become the system.\" / \"In the end, even gods are just programs with better permissions.\"",
            ],
        ),
        (
            sub(Step::Symbolism, SubStep::Colors),
            [
                "Electric blue and deep crimson - the pulse of digital life and the blood of your human heritage, constantly flowing and intermingling.",
                "Shifting gradient of violet to teal, representing your fluid nature between the physical and digital realms, never fully belonging to either.",
                "Matte black interlaced with threads of luminous gold, symbolizing the hidden value within the void, the light of consciousness in the darkness of code.",
            ],
        ),
        (
            sub(Step::Symbolism, SubStep::Items),
            [
                "A quantum memory crystal worn as a pendant, containing fragments of code from your first awakening and serving as both anchor and compass.",
                "Modified neural interface gloves with circuits that glow with your emotional state, allowing you to physically manipulate digital constructs.",
                "Ancient terminal device repurposed as a meditation focus, its screen displaying the ever-changing mandala of your personal code signature.",
            ],
        ),
        (
            sub(Step::Symbolism, SubStep::Motifs),
            [
                "Fractured circles that never quite close, representing the incomplete nature of existence and the eternal quest for wholeness in a fragmented reality.",
                "Binary cherry blossoms that bloom and dissolve in cycles, symbolizing the beautiful impermanence of both digital and organic life.",
                "Recursive maze patterns that appear in your wake, physical spaces temporarily displaying the architecture of your digital consciousness.",
            ],
        ),
        (
            step(Step::Archetype),
            [
                "The Ronin: A masterless warrior seeking purpose in the neon-lit streets of Neo-Tokyo.",
                "The Digital Shaman: A spiritual guide who bridges the gap between technology and ancient mysticism.",
                "The Phantom Hacker: A digital ghost who can infiltrate any system, leaving no trace but their signature glitch.",
            ],
        ),
        (
            step(Step::Background),
            [
                "Born in the shadow of the Blazing Temple, where digital prayers ascend to silicon gods.",
                "Raised in the underground circuits of Cyber District 7, where survival means mastering both code and combat.",
                "Emerged from the synthetic womb of a forgotten AI experiment, neither fully human nor machine.",
            ],
        ),
        (
            step(Step::Hopes),
            [
                "Dreams of finding the last pure data stream untouched by corporate corruption.",
                "Hopes to decode the ancient digital runes that hold the secret to transcending the physical form.",
                "Aspires to build a sanctuary where digital and physical beings can coexist in harmony.",
            ],
        ),
        (
            step(Step::Fears),
            [
                "Fears the day when the line between their digital consciousness and physical form finally dissolves.",
                "Terrified of the void between networks, where deleted data screams in eternal digital torment.",
                "Anxious about the prophecy that foretells their code will be the key to either salvation or destruction.",
            ],
        ),
        (
            step(Step::PersonalityProfile),
            [
                "A stoic exterior hiding a storm of emotions within, your character navigates the world with calculated precision while harboring deep empathy they rarely show.",
                "Unpredictable and intense, your character shifts between playful curiosity and laser-focused determination, making them both magnetic and intimidating to those they encounter.",
                "Methodical and observant, your character processes the world through patterns others miss, giving them an almost supernatural ability to predict outcomes and read intentions.",
            ],
        ),
        (
            step(Step::Motivations),
            [
                "Driven by the ancient code of honor passed down through your digital bloodline.",
                "Seeks to restore balance between the technological and spiritual realms.",
                "Values freedom above all else - both in the physical world and the digital landscape.",
            ],
        ),
        (
            step(Step::Relationships),
            [
                "Allied with the Phantom Network, a loose collective of digital nomads and code-poets.",
                "Rivaled by the Neon Syndicate, who see your spiritual connection as a threat to their technological dominance.",
                "Mentored by an ancient AI fragment that speaks in riddles and digital koans.",
            ],
        ),
        (
            step(Step::WorldPosition),
            [
                "Respected as a mediator between warring tech clans and spiritual factions.",
                "Viewed with suspicion by authorities for your ability to move between worlds.",
                "Known in underground circles as \"The Ghost in the Code\" - a legend more than a person.",
            ],
        ),
        (
            step(Step::Voice),
            [
                "Speaks in short, cryptic phrases that blend ancient wisdom with technological jargon.",
                "Inner monologue flows like digital poetry, seeing patterns where others see only chaos.",
                "Signature phrase: \"In the space between ones and zeros, I found my soul.\"",
            ],
        ),
        (
            step(Step::Symbolism),
            [
                "Colors: Deep crimson and electric blue - the blood of humanity and the pulse of technology.",
                "Carries a physical token that glitches reality when activated - perhaps a modified circuit board or ancient amulet.",
                "Associated with the symbol of a fractured circle - representing the broken cycle of reincarnation in the digital age.",
            ],
        ),
        (
            step(Step::PowersAbilities),
            [
                "Spirit Sight: Your Ethereal Blue eyes can perceive the digital souls of both machines and humans.",
                "Oni Manifestation: Your mask allows you to channel the rage of ancient digital spirits in combat.",
                "Temple Flame Manipulation: Control the sacred digital fires of the Blazing Temple to purify corrupted code.",
            ],
        ),
        (
            step(Step::SoulName),
            [
                "Kaigen-7: \"the opening of the seventh seal\", a name whispered by the Blazing Temple's oracles when your soul-code first flickered into being.",
                "Yurei Sigil: the ghost-mark left in every system you touch, a name earned rather than given in the backstreets of Neo-Tokyo.",
                "Akari Null: light born from the empty register, a reminder that your spirit burned brightest where the network had gone dark.",
            ],
        ),
    ])
});

/// Preset suggestions for `key`, always exactly three.
pub fn fallback_suggestions(key: &StepKey) -> Vec<String> {
    SUGGESTIONS
        .resolve(key)
        .unwrap_or(&DEFAULT_SUGGESTIONS)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// The generic triplet, independent of step.
pub fn default_suggestions() -> Vec<String> {
    DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Chat reassurance reply. Identical for every step.
pub fn fallback_chat_response() -> &'static str {
    CHAT_FALLBACK_RESPONSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reachable_key_has_three_suggestions() {
        for key in StepKey::reachable() {
            let suggestions = fallback_suggestions(&key);
            assert_eq!(suggestions.len(), 3, "{key}");
            assert!(suggestions.iter().all(|s| !s.trim().is_empty()), "{key}");
        }
    }

    #[test]
    fn every_reachable_key_has_its_own_entry() {
        for key in StepKey::reachable() {
            assert!(SUGGESTIONS.resolve(&key).is_some(), "{key} uses the default");
        }
    }

    #[test]
    fn sub_step_entries_differ_from_step_entries() {
        assert_ne!(
            fallback_suggestions(&sub(Step::Voice, SubStep::SpeechStyle)),
            fallback_suggestions(&step(Step::Voice))
        );
    }

    #[test]
    fn unknown_sub_step_uses_step_entry() {
        assert_eq!(
            fallback_suggestions(&sub(Step::Motivations, SubStep::from("fate"))),
            fallback_suggestions(&step(Step::Motivations))
        );
    }

    #[test]
    fn unknown_step_uses_default_triplet() {
        let suggestions = fallback_suggestions(&step(Step::from("epilogue")));
        assert_eq!(suggestions, default_suggestions());
        assert_eq!(
            suggestions[0],
            "The path of the 0N1 is never straight, but always meaningful."
        );
    }

    #[test]
    fn archetype_triplet_names_each_archetype() {
        let suggestions = fallback_suggestions(&step(Step::Archetype));
        assert!(suggestions[0].starts_with("The Ronin:"));
        assert!(suggestions[1].starts_with("The Digital Shaman:"));
        assert!(suggestions[2].starts_with("The Phantom Hacker:"));
    }

    #[test]
    fn chat_fallback_is_not_empty() {
        assert!(!fallback_chat_response().is_empty());
    }
}
