//! Static option documentation catalog
//!
//! Entries mirror the options the forms expose, keyed the way they appear
//! in the generated YAML.

/// Which entity shape an entry documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Boss,
    Item,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Boss => "Boss",
            Self::Item => "Item",
        }
    }
}

/// One documented option
#[derive(Debug, Clone, Copy)]
pub struct DocEntry {
    pub kind: EntryKind,
    pub category: &'static str,
    pub option: &'static str,
    pub description: &'static str,
}

/// Every documented option, in display order
pub const CATALOG: &[DocEntry] = &[
    // Boss: core options
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "Type",
        description: "The base entity type of the mob, e.g. ZOMBIE, SKELETON, ARMOR_STAND.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "Display",
        description: "The display name shown above the mob. Supports color codes.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "Health",
        description: "Maximum health of the mob. Vanilla caps may apply without attribute patches.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "Damage",
        description: "Base melee damage dealt by the mob per hit.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "Armor",
        description: "Armor points applied to the mob, reducing incoming damage.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "FollowRange",
        description: "Distance in blocks at which the mob tracks its target.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "KnockbackResistance",
        description: "Resistance to knockback between 0.0 and 1.0; 1.0 means immune.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "MovementSpeed",
        description: "Movement speed of the mob; vanilla zombies use roughly 0.23.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "AttackSpeed",
        description: "Attack frequency of the mob.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "Despawn",
        description: "Despawn behavior: true, false, or a mode such as persistent/chunk.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "Faction",
        description: "Faction string used by faction-aware targeters and immunities.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "NoAI",
        description: "Disables all vanilla AI for the mob when true.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "Glowing",
        description: "Applies the glowing outline effect to the mob.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "Silent",
        description: "Suppresses the mob's idle and hurt sounds.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "Persistent",
        description: "Keeps the mob loaded and exempt from natural despawning.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Options",
        option: "PreventOtherDrops",
        description: "Prevents the mob's vanilla drops so only configured drops appear.",
    },
    // Boss: display entity options
    DocEntry {
        kind: EntryKind::Boss,
        category: "Display",
        option: "NameVisible",
        description: "Whether the display entity's name tag is always visible.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Display",
        option: "HealthVisible",
        description: "Shows the mob's health in its display name.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Display",
        option: "Model",
        description: "Model identifier applied to the display entity.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Display",
        option: "ShowPitch",
        description: "Whether the display entity mirrors the mob's head pitch.",
    },
    // Boss: equipment & bar
    DocEntry {
        kind: EntryKind::Boss,
        category: "Equipment",
        option: "Equipment",
        description: "Items worn or held by the mob, one per line as `item_name SLOT` (HAND, OFFHAND, HEAD, CHEST, LEGS, FEET).",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "BossBar",
        option: "Enabled",
        description: "Enables the boss bar for this mob.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "BossBar",
        option: "Title",
        description: "Text shown on the boss bar.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "BossBar",
        option: "Range",
        description: "Distance in blocks at which players see the boss bar.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "BossBar",
        option: "Color",
        description: "Bar color: PINK, BLUE, RED, GREEN, YELLOW, PURPLE, or WHITE.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "BossBar",
        option: "Style",
        description: "Bar style: SOLID, SEGMENTED_6, SEGMENTED_10, SEGMENTED_12, or SEGMENTED_20.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "BossBar",
        option: "DarkenSky",
        description: "Darkens the sky for nearby players while the bar is active.",
    },
    // Boss: AI & messages
    DocEntry {
        kind: EntryKind::Boss,
        category: "Custom AI",
        option: "AIGoalSelectors",
        description: "Replaces the mob's AI goals, one goal per line, e.g. `0 clear`, `1 meleeattack`.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Custom AI",
        option: "AITargetSelectors",
        description: "Replaces the mob's target selectors, one per line, e.g. `1 attacker`, `2 players`.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Kill Messages",
        option: "KillMessages",
        description: "Messages broadcast when the mob kills a player. <target> expands to the victim's name.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Immunity",
        option: "ImmunityTables",
        description: "Immunity table names applied to the mob, one per line.",
    },
    // Boss: disguise
    DocEntry {
        kind: EntryKind::Boss,
        category: "Disguise",
        option: "Type",
        description: "Disguise entity type, e.g. PLAYER, ZOMBIE, ARMOR_STAND. Requires the disguise integration.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Disguise",
        option: "Skin",
        description: "Player skin applied when the disguise type is PLAYER.",
    },
    DocEntry {
        kind: EntryKind::Boss,
        category: "Disguise",
        option: "ShowName",
        description: "Whether the disguised mob's name is shown.",
    },
    // Item: options
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "Id",
        description: "Base material of the item, e.g. DIAMOND_SWORD.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "DisplayName",
        description: "Display name of the item. Supports color codes; quote values containing &.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "Amount",
        description: "Default stack size when the item is given or dropped.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "Data",
        description: "Legacy data value of the material.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "Damage",
        description: "Durability damage applied to the generated item.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "Lore",
        description: "Lore lines shown under the item name, one per line.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "Unbreakable",
        description: "Makes the item immune to durability loss.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "CustomModelData",
        description: "Custom model data value used by resource packs.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "EnchantmentGlint",
        description: "Forces the enchantment glint: true, false, or AUTO.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "Texture",
        description: "Base64 texture applied to player heads.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "PotionColor",
        description: "Potion color as R,G,B for potion-type items.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "Player",
        description: "Player name whose head skin is used for PLAYER_HEAD items.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Options",
        option: "Hide",
        description: "Tooltip sections to hide, e.g. ATTRIBUTES, ENCHANTS, LORE.",
    },
    // Item: book
    DocEntry {
        kind: EntryKind::Item,
        category: "Book",
        option: "Title",
        description: "Title of a written book item.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Book",
        option: "Author",
        description: "Author of a written book item.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Book",
        option: "Pages",
        description: "Book pages, one page per line.",
    },
    // Item: lists
    DocEntry {
        kind: EntryKind::Item,
        category: "Attributes",
        option: "Attributes",
        description: "Attribute modifiers, one per line as `Slot.Attribute value`, e.g. `MainHand.Damage 10`.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Enchantments",
        option: "Enchantments",
        description: "Enchantments, one per line as `NAME:level`, e.g. `SHARPNESS:5`.",
    },
    DocEntry {
        kind: EntryKind::Item,
        category: "Potions",
        option: "Potions",
        description: "Potion effects, one per line as `EFFECT duration amplifier`.",
    },
];
