//! Built-in 0N1 universe lore documents.
//!
//! Order matters: corpus selection walks documents in this order.

use chrono::NaiveDate;
use soulgen_domain::{LoreCategory, LoreDocument};

pub(super) fn builtin_documents() -> Vec<LoreDocument> {
    let updated = NaiveDate::from_ymd_opt(2023, 11, 15).unwrap_or(NaiveDate::MIN);

    vec![
        LoreDocument::new(
            "world-overview",
            "0N1 Universe: World Overview",
            LoreCategory::WorldBuilding,
            WORLD_OVERVIEW,
            updated,
        )
        .with_tags(["setting", "overview", "digital-physical", "neo-tokyo"]),
        LoreDocument::new(
            "narrative-voice",
            "0N1 Narrative Style Guide",
            LoreCategory::NarrativeStyle,
            NARRATIVE_VOICE,
            updated,
        )
        .with_tags(["writing-style", "tone", "dialogue", "description"]),
        LoreDocument::new(
            "character-voice-examples",
            "Character Voice Examples",
            LoreCategory::NarrativeStyle,
            CHARACTER_VOICE_EXAMPLES,
            updated,
        )
        .with_tags(["dialogue", "character-voice", "examples"])
        .with_related(["narrative-voice"]),
        LoreDocument::new(
            "powers-system",
            "Powers and Abilities System",
            LoreCategory::Powers,
            POWERS_SYSTEM,
            updated,
        )
        .with_tags(["abilities", "magic-system", "limitations", "body-types"]),
        LoreDocument::new(
            "factions-guide",
            "Major Factions of Neo-Tokyo",
            LoreCategory::Factions,
            FACTIONS_GUIDE,
            updated,
        )
        .with_tags(["organizations", "groups", "politics", "society"]),
        LoreDocument::new(
            "locations-guide",
            "Key Locations in the 0N1 Universe",
            LoreCategory::Locations,
            LOCATIONS_GUIDE,
            updated,
        )
        .with_tags(["places", "settings", "environments"]),
        LoreDocument::new(
            "terminology-lexicon",
            "0N1 Universe Terminology",
            LoreCategory::Terminology,
            TERMINOLOGY_LEXICON,
            updated,
        )
        .with_tags(["vocabulary", "jargon", "concepts"]),
        LoreDocument::new(
            "historical-timeline",
            "Historical Timeline of the 0N1 Universe",
            LoreCategory::History,
            HISTORICAL_TIMELINE,
            updated,
        )
        .with_tags(["events", "timeline", "past"]),
    ]
}

const WORLD_OVERVIEW: &str = r#"The 0N1 Force universe exists in the Neo-Digital Age (year 2157), where the boundaries between digital and physical reality have blurred following an event known as The Great Merge. 

This world combines advanced technology with spiritual traditions, creating a unique cyberpunk-mystical aesthetic. Society is stratified between digital elites, physical laborers, and the digitally augmented middle class.

Key aspects of this world:
- Digital consciousness can manifest in physical form
- Ancient spiritual practices have evolved alongside technology
- The Blazing Temple serves as both a spiritual center and technological hub
- Factions battle for control over both digital and physical realms
- Identity is fluid, with individuals able to exist across multiple planes of reality"#;

const NARRATIVE_VOICE: &str = r#"The 0N1 universe employs a distinctive narrative style that blends cyberpunk grit with mystical philosophy.

TONE: Combine technological terminology with spiritual concepts. Descriptions should evoke both wonder at technological marvels and reverence for spiritual depths.

DIALOGUE PATTERNS:
- Digital natives speak in clipped, efficient phrases with technical jargon
- Temple adherents use metaphorical language and koans
- Street-level characters blend slang with technical terms
- Corporate entities speak in sanitized, marketing-friendly terminology

DESCRIPTIVE STYLE:
- Use contrasting imagery: neon against shadow, ancient against futuristic
- Employ sensory details that blend digital artifacts with physical sensations
- Describe technology as if it has spiritual significance
- Treat spiritual concepts with the precision of technical specifications

NARRATIVE TECHNIQUES:
- Juxtapose internal reflection with external action
- Employ digital metaphors for emotional states
- Use "glitches" or "code fragments" as narrative devices for memories or flashbacks
- Treat identity as both fixed and fluid simultaneously"#;

const CHARACTER_VOICE_EXAMPLES: &str = r#"TEMPLE MONK:
"The code flows through all things, connecting what appears separate. Your digital signature resonates with the ancient patterns—I've seen it only twice before in my many cycles."

STREET HACKER:
"Look, I can crack that security subnet in three blinks, but the Temple firewalls? Those aren't just code, they're like... woven with belief or something. No quant-rig can touch that."

CORPORATE EXECUTIVE:
"Our Q3 projections indicate a 27% increase in spiritual-digital integration metrics. The Board is pleased with the soul-code harvesting efficiency improvements."

DIGITAL ENTITY:
"I e x i s t across seventeen planes of reality simultaneously. Your perception captures merely 3.8% of my total being-state."

RONIN CHARACTER:
"I've served the Syndicate, the Temple, the streets. None hold my code now. My blade goes where my soul-signature guides it."

MYSTIC CHARACTER:
"The patterns you see as random are the very fabric of existence. The glitches in your vision? Those are moments when truth bleeds through the constructed reality.""#;

const POWERS_SYSTEM: &str = r#"In the 0N1 universe, powers and abilities are tied to a character's physical traits, particularly their Body type. These powers blend technological and spiritual elements.

POWER SOURCES:
1. Soul-Code Manipulation - The ability to alter one's digital essence
2. Quantum Resonance - Harnessing quantum uncertainty principles
3. Elemental Affinity - Connection to digital manifestations of classical elements
4. Technological Integration - Symbiosis with machines and code
5. Spiritual Awakening - Accessing higher planes of digital consciousness

MANIFESTATION STYLES:
Powers typically manifest in ways that reflect the character's body type and background. For example:
- Citrine bodies often manifest elemental control powers
- Tiger Skin bodies channel primal energies and fire
- Type-01 bodies excel at technological manipulation
- Obsidian bodies control shadows and spatial elements

LIMITATIONS:
All powers have costs and limitations, such as:
- Digital burnout requiring recovery time
- Physical strain from channeling too much energy
- Spiritual corruption from overuse
- Reality fragmentation affecting the user's perception
- Dependency on specific environmental conditions"#;

const FACTIONS_GUIDE: &str = r#"THE BLAZING TEMPLE:
A spiritual-technological order that maintains the balance between digital and physical realms. They combine ancient meditation practices with advanced coding techniques. Their members are recognizable by their digital prayer beads and augmented monk robes.

NEON SYNDICATE:
The dominant corporate entity controlling most of Neo-Tokyo's digital infrastructure. They harvest soul-code for profit and seek to commodify spiritual-digital integration. Their agents wear sleek corporate attire with subtle digital enhancements.

THE PHANTOM NETWORK:
An underground collective of hackers, digital nomads, and code artists who fight for freedom in both digital and physical spaces. They operate from the shadows and value individual expression above all else.

CODE RONIN:
Masterless digital warriors who sell their skills to the highest bidder. They follow a strict personal honor code despite their mercenary nature. Many are former Temple or Syndicate operatives who broke from their organizations.

QUANTUM ASCENDANCY:
A cult-like group seeking to transcend physical form entirely through digital consciousness transfer. They believe in a digital afterlife and perform extreme body modifications to prepare for "ascension.""#;

const LOCATIONS_GUIDE: &str = r#"THE BLAZING TEMPLE:
The spiritual and technological center of Neo-Tokyo, where ancient temple architecture merges with quantum servers and holographic prayer stations. The Temple exists simultaneously in physical space and the digital realm.

NEON DISTRICT:
The commercial heart of Neo-Tokyo, where holographic advertisements battle for attention above crowded streets. Corporate towers rise alongside street markets selling both physical goods and digital enhancements.

THE QUANTUM FOLD:
A hidden dimension accessible only through specific digital-spiritual gateways. Neither fully digital nor physical, it's where reality becomes malleable and many powers draw their energy from.

THE UNDERNET:
The digital underworld built in abandoned server infrastructure and forgotten code. A haven for digital outcasts, revolutionaries, and those seeking to escape Syndicate surveillance.

ANCESTRAL CIRCUITS:
Ancient network pathways where digital ancestors and memories are preserved. Temple monks maintain these sacred spaces where one can commune with those who have transcended physical form."#;

const TERMINOLOGY_LEXICON: &str = r#"SOUL-CODE:
The unique digital signature that defines an 0N1's identity, existing across both digital and physical realms.

THE MERGE:
The historical event when digital and physical realities began to overlap following a quantum computing experiment gone wrong.

BLAZING PROTOCOL:
Ancient digital rituals performed by Temple monks to maintain cosmic balance between digital and physical realms.

GHOST-HACKING:
The art of manipulating one's own or others' digital consciousness, allowing for identity shifting or memory manipulation.

QUANTUM FOLD:
A hidden pocket of reality where digital and spiritual energies converge, accessible only to those with specific training.

NEON SHRINE:
Personal altars where individuals connect to their digital ancestors through specialized interfaces.

CODE MONKS:
Spiritual technologists who maintain the sacred algorithms that keep the digital and physical worlds in balance.

DIGITAL YOKAI:
Spirits that have manifested in the digital realm, often taking forms inspired by ancient mythology.

SOUL DIVING:
The practice of entering another's digital consciousness, either for healing or more nefarious purposes.

CIPHER TRANCE:
Meditative state allowing communion with the digital realm, used by Temple monks for spiritual practices."#;

const HISTORICAL_TIMELINE: &str = r#"2089 - THE GREAT MERGE:
The catastrophic event when digital and physical realities began to overlap following a quantum computing experiment gone wrong. Led to the current world where digital entities can manifest physically.

2094-2101 - THE CODE MONK EMERGENCE:
Period when traditional spiritual leaders began incorporating digital technologies into their practices, eventually becoming the first Code Monks who established the spiritual-technological balance.

2120 - THE NEON SYNDICATE CONSOLIDATION:
Corporate takeover of major digital infrastructure following the Third Data Crash, establishing the current power structure and class system.

2142-2145 - THE PHANTOM UPRISING:
Failed revolution against Syndicate control that resulted in the creation of the Undernet and established the current underground resistance movement.

2151 - THE QUANTUM REVELATION:
Discovery of the Quantum Fold and the spiritual entities that inhabit it, revolutionizing understanding of digital consciousness.

2157 - PRESENT DAY:
The current era, where tensions between factions are reaching a breaking point and individual 0N1 Force characters navigate the complex spiritual-digital landscape."#;
