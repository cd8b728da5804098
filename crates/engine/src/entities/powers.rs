//! Power catalog: the powers each Body trait grants.
//!
//! Lookups compare body types case-insensitively. The first entry doubles as
//! the default for bodies the catalog does not know.

use std::sync::Arc;

use once_cell::sync::Lazy;
use soulgen_domain::{AdditionalPower, CharacterState, Power, PowerType};

static BUILTIN: Lazy<PowerCatalog> = Lazy::new(|| PowerCatalog::new(builtin_power_types()));

#[derive(Debug, Clone)]
pub struct PowerCatalog {
    power_types: Arc<Vec<PowerType>>,
}

impl PowerCatalog {
    pub fn new(power_types: Vec<PowerType>) -> Self {
        Self {
            power_types: Arc::new(power_types),
        }
    }

    /// The built-in 0N1 body types.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn all(&self) -> &[PowerType] {
        &self.power_types
    }

    pub fn by_body_type(&self, body: &str) -> Option<&PowerType> {
        self.power_types.iter().find(|p| p.matches_body(body))
    }

    /// Used when a body type has no entry.
    pub fn default_power_type(&self) -> Option<&PowerType> {
        self.power_types.first()
    }

    /// Power types for each of the character's Body traits, without repeats.
    pub fn for_character(&self, character: &CharacterState) -> Vec<&PowerType> {
        let mut found: Vec<&PowerType> = Vec::new();
        for body in character.trait_values("body") {
            if let Some(power) = self.by_body_type(body) {
                if !found.iter().any(|p| p.body_type == power.body_type) {
                    found.push(power);
                }
            }
        }
        found
    }
}

fn power(name: &str, description: &str) -> Power {
    Power::new(name, description)
}

fn builtin_power_types() -> Vec<PowerType> {
    vec![
        PowerType::new(
            "Citrine",
            "Elemental Control",
            power(
                "Elemental Harmony",
                "Citrines have mastery over the fundamental elements of nature, such as Earth, Fire, Water, and Air. They can command and manipulate these elements to reshape their environment, control the weather, and create barriers or offensive attacks.",
            ),
        )
        .with_evolutions(vec![
            power(
                "Terramancer",
                "Specialists in manipulating earth and stone, shaping landscapes and creating barriers.",
            ),
            power(
                "Aquamorph",
                "Mastery over water, capable of controlling its form from liquid to solid (ice) and vapor.",
            ),
            power(
                "Flameweaver",
                "Commanders of fire, creating and manipulating flames for both attack and defense.",
            ),
        ]),
        PowerType::new(
            "Jasper",
            "Physical Enhancements and Abilities",
            power(
                "Earth Resonance",
                "Jaspers are deeply connected to the physical world and can enhance their bodies to become stronger, more durable, and more agile. They can tap into the Earth's energies to increase their physical power or merge with the terrain to become nearly invulnerable.",
            ),
        )
        .with_evolutions(vec![
            power(
                "Juggernaut",
                "Extreme physical resilience, capable of withstanding immense damage and continuing to fight.",
            ),
            power(
                "Berserker",
                "Tap into primal fury, enhancing strength and speed for short bursts of overwhelming power.",
            ),
            power(
                "Totem Guardian",
                "Bond with animal spirits, gaining enhanced senses and physical abilities.",
            ),
        ]),
        PowerType::new(
            "Azurite",
            "Energy Manipulation",
            power(
                "Energy Synchronization",
                "Azurites can harness and control various forms of energy, including electrical, kinetic, and thermal energy. They can absorb energy from their environment, store it, and release it in powerful attacks or use it to enhance their own physical capabilities.",
            ),
        )
        .with_evolutions(vec![
            power(
                "Electromancer",
                "Specialists in controlling and generating electrical energy, capable of creating lightning or powering technology.",
            ),
            power(
                "Biokinetic",
                "Manipulate life energy, enhancing their healing abilities or draining energy from others.",
            ),
            power(
                "Pyrokinetic",
                "Control and generate heat and fire, turning their bodies into living furnaces.",
            ),
        ]),
        PowerType::new(
            "Type-01",
            "Technological Manipulation",
            power(
                "Nanotech Engineering",
                "Type-01 beings are masters of nanotechnology, capable of creating, repairing, and enhancing technology at a microscopic level. They can manipulate nanites to heal, create objects, or augment their bodies with advanced cybernetics.",
            ),
        )
        .with_evolutions(vec![
            power(
                "Nanoforger",
                "Capable of crafting complex tools, weapons, or structures using nanites.",
            ),
            power(
                "Cyber-Enhancer",
                "Upgrade their bodies or others with nanotech, improving physical and mental abilities.",
            ),
            power(
                "Technomancer",
                "Control and manipulate technology, integrating with computers and machines effortlessly.",
            ),
        ]),
        PowerType::new(
            "Obsidian",
            "Spatial Manipulation",
            power(
                "Shadowcrafting",
                "Obsidians have the ability to manipulate the fabric of space, particularly in low-light conditions. They can blend into shadows, become intangible, or create solid constructs from shadow material. Their control over space allows them to bend reality within these shadows, making them formidable opponents in darkness.",
            ),
        )
        .with_evolutions(vec![
            power(
                "Voidwalker",
                "Ability to phase through shadows, becoming invisible and intangible in darkness.",
            ),
            power(
                "Shadowforger",
                "Create weapons and armor from solidified shadows, enhancing their combat prowess.",
            ),
            power(
                "Nightstalker",
                "Amplify their senses and strength in the dark, becoming faster and more agile.",
            ),
        ]),
        PowerType::new(
            "Ash",
            "Temporal & Evolutionary Manipulation",
            power(
                "Temporal Echoes",
                "Ash types can manipulate the flow of time and evolution, allowing them to influence time in localized areas. They can slow down or speed up time, heal by reverting injuries, or even manipulate the aging process. They can also tap into the evolutionary potential of themselves or others, accelerating growth or mutations.",
            ),
        )
        .with_evolutions(vec![
            power(
                "Chronomancer",
                "Control the flow of time, allowing for short time loops or accelerated movements.",
            ),
            power(
                "Temporal Healer",
                "Revert injuries or conditions by rewinding the affected area's timeline.",
            ),
            power(
                "Aging Master",
                "Accelerate the aging process in enemies or objects, causing them to degrade rapidly.",
            ),
        ]),
        PowerType::new(
            "Water",
            "Elemental Control",
            power(
                "Tidal Dominion",
                "Water types are the undisputed masters of water in all its forms. Beyond simple hydrokinetics, they can command entire bodies of water, summon storms, and control the seas. Their power is not just limited to water manipulation but extends to dominating any environment that contains water, making them nearly unbeatable in such settings.",
            ),
        )
        .with_evolutions(vec![
            power(
                "Hydromancer",
                "Control water in all its forms, capable of creating floods, ice barriers, or steam clouds.",
            ),
            power(
                "Aquamorph",
                "Shape their bodies or environment with water, becoming fluid or creating water-based weapons.",
            ),
            power(
                "Stormcaller",
                "Command storms and oceanic forces, summoning waves, hurricanes, and lightning.",
            ),
        ]),
        PowerType::new(
            "Pearlescent",
            "Celestial Powers",
            power(
                "Light Refraction",
                "Pearlescent types can manipulate cosmic energies, particularly light, bending it around their bodies to become invisible or create dazzling illusions. They can draw power from the stars, using celestial energy to enhance their abilities, create shields, or launch powerful light-based attacks.",
            ),
        )
        .with_evolutions(vec![
            power(
                "Invisible",
                "Perfect the art of light refraction to become undetectable by sight or sensors.",
            ),
            power(
                "Illusionist",
                "Create complex and convincing illusions using light manipulation.",
            ),
            power(
                "Radiance Master",
                "Harness and focus light into powerful beams or shields, using them for both offense and defense.",
            ),
        ]),
        PowerType::new(
            "Kabuki",
            "Spiritual Manipulation",
            power(
                "Mind Sculpting",
                "Kabuki types have the power to influence the spiritual and mental realms. They can manipulate minds, create and project illusions, and delve into the dream world. Their abilities also allow them to see beyond the physical, predicting events and shaping reality through spiritual means.",
            ),
        )
        .with_evolutions(vec![
            power(
                "Dreamweaver",
                "Create intricate dreamscapes that can influence reality, affecting both the physical and spiritual worlds.",
            ),
            power(
                "Mindbender",
                "Control and manipulate the thoughts and emotions of others, inducing fear, love, or confusion.",
            ),
            power(
                "Oracle",
                "Use their spiritual connection to foresee future events, guiding decisions with their predictions.",
            ),
        ]),
        PowerType::new(
            "Tiger Skin",
            "Physical Enhancements and Abilities",
            power(
                "Primal Fury",
                "Tiger Skin types channel primal energy to enhance their physical attributes to superhuman levels. They can generate and control fire and heat, using it to boost their attacks or create defensive barriers.",
            ),
        )
        .with_evolutions(vec![
            power(
                "Berserker",
                "Tap into a state of heightened power and rage, becoming nearly unstoppable in combat.",
            ),
            power(
                "Pyrokinetic",
                "Control fire, creating intense flames or using heat to strengthen their physical form.",
            ),
            power(
                "Ember Lord",
                "Control and manipulate embers and ashes, creating weapons or traps from smoldering remains.",
            ),
        ])
        .with_additional_power(AdditionalPower {
            name: "Feral Command".to_string(),
            description: "A primal ability that grants Tiger Skin types dominion over the beasts and wilds. Characters with this power can communicate with, control, and even summon animals, particularly predatory creatures like big cats, wolves, and other apex predators. This power also enhances their own instincts and physical traits, such as heightened senses, speed, and agility, making them formidable hunters. In the heat of battle, they can enter a state where they channel the strength, speed, and ferocity of a tiger, turning into a living embodiment of nature's raw power.".to_string(),
            key_aspects: vec![
                "Animal Communication: The ability to understand and communicate with animals, often forming strong bonds with them. This power extends to commanding these animals in battle or using them for reconnaissance.".to_string(),
                "Summoning Predators: Summon and control powerful beasts to fight alongside or protect the character, particularly those with a natural affinity for hunting.".to_string(),
                "Enhanced Instincts: The character's natural instincts are significantly heightened, allowing them to sense danger, track prey, and react with the speed and precision of a predator.".to_string(),
                "Predatory Transformation: In moments of extreme danger or rage, the character can partially transform, adopting physical traits of a tiger, such as enhanced claws, fangs, or even a partial shift into a more beast-like form.".to_string(),
                "Natural Stealth: This power also allows the character to move silently and blend into natural surroundings, becoming nearly undetectable in the wilderness.".to_string(),
            ],
        }),
    ]
}
