//! Archetype catalog for the first questionnaire step.

use std::sync::Arc;

use once_cell::sync::Lazy;
use soulgen_domain::{Archetype, ArchetypeCategory};

static BUILTIN: Lazy<ArchetypeCatalog> =
    Lazy::new(|| ArchetypeCatalog::new(builtin_archetypes()));

#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    archetypes: Arc<Vec<Archetype>>,
}

impl ArchetypeCatalog {
    pub fn new(archetypes: Vec<Archetype>) -> Self {
        Self {
            archetypes: Arc::new(archetypes),
        }
    }

    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn all(&self) -> &[Archetype] {
        &self.archetypes
    }

    /// Case-insensitive name lookup.
    pub fn by_name(&self, name: &str) -> Option<&Archetype> {
        let name = name.trim();
        self.archetypes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn by_category(&self, category: ArchetypeCategory) -> Vec<&Archetype> {
        self.archetypes
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Archetypes grouped by category in display order. Empty groups are left out.
    pub fn grouped(&self) -> Vec<(ArchetypeCategory, Vec<&Archetype>)> {
        ArchetypeCategory::ALL
            .into_iter()
            .map(|category| (category, self.by_category(category)))
            .filter(|(_, archetypes)| !archetypes.is_empty())
            .collect()
    }
}

fn builtin_archetypes() -> Vec<Archetype> {
    use ArchetypeCategory::*;

    vec![
        Archetype::new(
            "The Hero",
            CoreProtagonist,
            "A character who faces challenges and grows throughout the story, embodying virtuous qualities.",
            "A village warrior who rises to defend their homeland from an invading army.",
        ),
        Archetype::new(
            "The Anti-Hero",
            CoreProtagonist,
            "A protagonist with flawed morals who achieves good ends through questionable means.",
            "A cynical bounty hunter who fights corruption while pursuing personal gain.",
        ),
        Archetype::new(
            "The Chosen One",
            CoreProtagonist,
            "A character marked by destiny or prophecy for a greater purpose.",
            "The seventh son of a seventh son, destined to break an ancient curse.",
        ),
        Archetype::new(
            "The Everyman",
            CoreProtagonist,
            "An ordinary person who rises to face extraordinary circumstances.",
            "A baker who becomes involved in political intrigue after overhearing a conspiracy.",
        ),
        Archetype::new(
            "The Mentor",
            Support,
            "A wise guide who shares knowledge and experience with others.",
            "An elderly alchemist teaching the secrets of forbidden magic.",
        ),
        Archetype::new(
            "The Ally",
            Support,
            "A loyal companion who provides direct support and friendship.",
            "A skilled ranger who uses their tracking abilities to aid the main quest.",
        ),
        Archetype::new(
            "The Guardian",
            Support,
            "A protector bound by duty to defend something or someone important.",
            "An immortal sentinel watching over an ancient sealed evil.",
        ),
        Archetype::new(
            "The Herald",
            Support,
            "A messenger or harbinger who brings news of change or adventure.",
            "A mysterious traveler warning villages of an approaching plague.",
        ),
        Archetype::new(
            "The Nemesis",
            Antagonist,
            "The primary opposing force to the protagonist, often their dark reflection.",
            "A former friend turned rival seeking the same powerful artifact.",
        ),
        Archetype::new(
            "The Mastermind",
            Antagonist,
            "A manipulative orchestrator who works from the shadows.",
            "A court advisor secretly controlling multiple kingdoms through blackmail.",
        ),
        Archetype::new(
            "The Force of Nature",
            Antagonist,
            "An unstoppable power that creates conflict through its very existence.",
            "An ancient dragon whose awakening threatens to destroy the realm.",
        ),
        Archetype::new(
            "The Trickster",
            Neutral,
            "A chaos-bringing character who challenges established orders and assumptions.",
            "A mischievous spirit who teaches lessons through pranks and riddles.",
        ),
        Archetype::new(
            "The Merchant",
            Neutral,
            "A trader in goods, services, or information who follows opportunity.",
            "A traveling merchant with a network of spies and rare artifacts.",
        ),
        Archetype::new(
            "The Shapeshifter",
            Neutral,
            "A character whose loyalty and identity remain fluid and uncertain.",
            "A diplomat working for multiple factions with unclear true allegiance.",
        ),
        Archetype::new(
            "The Threshold Guardian",
            Neutral,
            "A challenger who tests others' worth and readiness.",
            "A mystical being who poses trials before allowing passage to sacred grounds.",
        ),
        Archetype::new(
            "The Leader",
            Social,
            "One who guides groups and bears the burden of command.",
            "A rebel commander balancing military necessity with moral principles.",
        ),
        Archetype::new(
            "The Outcast",
            Social,
            "A character who exists outside normal society's boundaries.",
            "A shunned prophet whose dire warnings prove true.",
        ),
        Archetype::new(
            "The Sage",
            Social,
            "A keeper and sharer of knowledge and wisdom.",
            "A reclusive scholar who holds the key to understanding ancient prophecies.",
        ),
        Archetype::new(
            "The Innocent",
            Circumstantial,
            "A pure-hearted character whose nature affects those around them.",
            "A child whose untainted view of the world changes hardened hearts.",
        ),
        Archetype::new(
            "The Catalyst",
            Circumstantial,
            "One whose actions or presence trigger significant changes.",
            "A wandering bard whose songs inspire revolution in every town they visit.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let catalog = ArchetypeCatalog::builtin();
        let mentor = catalog.by_name("the mentor").unwrap();

        assert_eq!(mentor.name, "The Mentor");
        assert_eq!(mentor.category, ArchetypeCategory::Support);
        assert!(catalog.by_name("The Ronin").is_none());
    }

    #[test]
    fn grouped_follows_display_order() {
        let catalog = ArchetypeCatalog::builtin();
        let groups = catalog.grouped();

        let categories: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, ArchetypeCategory::ALL.to_vec());
        assert_eq!(groups[0].1.len(), 4);
        assert_eq!(groups[0].1[0].name, "The Hero");

        let total: usize = groups.iter().map(|(_, a)| a.len()).sum();
        assert_eq!(total, catalog.all().len());
    }

    #[test]
    fn empty_categories_are_skipped() {
        let catalog = ArchetypeCatalog::new(vec![Archetype::new(
            "The Ronin",
            ArchetypeCategory::Neutral,
            "A masterless blade.",
            "A swordsman selling loyalty by the hour.",
        )]);

        let groups = catalog.grouped();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, ArchetypeCategory::Neutral);
    }
}
