//! Attribute tables - Fixed sampling pools for randomized creature generation
//!
//! Tables are process-wide and read-only. Sampling assumes every table is
//! non-empty, which `assert_tables_populated` checks once at start-up.

/// A named, ordered, fixed set of attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeTable {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl AttributeTable {
    /// All six tables, in the order the sampler draws from them
    pub fn all() -> [AttributeTable; 6] {
        [
            CREATURE_TYPES,
            ALIGNMENTS,
            ENVIRONMENTS,
            SIZES,
            SPECIAL_TRAITS,
            LANGUAGES,
        ]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

pub const CREATURE_TYPES: AttributeTable = AttributeTable {
    name: "creature types",
    values: &[
        "Aberration",
        "Beast",
        "Celestial",
        "Construct",
        "Dragon",
        "Elemental",
        "Fey",
        "Fiend",
        "Giant",
        "Humanoid",
        "Monstrosity",
        "Ooze",
        "Plant",
        "Undead",
    ],
};

pub const ALIGNMENTS: AttributeTable = AttributeTable {
    name: "alignments",
    values: &[
        "Lawful Good",
        "Neutral Good",
        "Chaotic Good",
        "Lawful Neutral",
        "True Neutral",
        "Chaotic Neutral",
        "Lawful Evil",
        "Neutral Evil",
        "Chaotic Evil",
        "Unaligned",
    ],
};

pub const ENVIRONMENTS: AttributeTable = AttributeTable {
    name: "environments",
    values: &[
        "Arctic",
        "Coastal",
        "Desert",
        "Forest",
        "Grassland",
        "Hill",
        "Mountain",
        "Swamp",
        "Underdark",
        "Underwater",
        "Urban",
    ],
};

pub const SIZES: AttributeTable = AttributeTable {
    name: "sizes",
    values: &["Tiny", "Small", "Medium", "Large", "Huge", "Gargantuan"],
};

pub const SPECIAL_TRAITS: AttributeTable = AttributeTable {
    name: "special traits",
    values: &[
        "Amphibious",
        "Regeneration",
        "Magic Resistance",
        "Shapechanger",
        "Pack Tactics",
        "Keen Senses",
        "Innate Spellcasting",
        "Legendary Resistance",
        "Sunlight Sensitivity",
        "Incorporeal Movement",
        "Spider Climb",
        "Siege Monster",
    ],
};

pub const LANGUAGES: AttributeTable = AttributeTable {
    name: "languages",
    values: &[
        "Common",
        "Abyssal",
        "Celestial",
        "Deep Speech",
        "Draconic",
        "Dwarvish",
        "Elvish",
        "Giant",
        "Gnomish",
        "Goblin",
        "Infernal",
        "Primordial",
        "Sylvan",
        "Undercommon",
    ],
};

/// Fail start-up if any table has no values to sample from
pub fn assert_tables_populated() -> anyhow::Result<()> {
    for table in AttributeTable::all() {
        if table.is_empty() {
            anyhow::bail!("attribute table '{}' has no values", table.name);
        }
    }
    Ok(())
}
