//! Static preference tables keyed by lower-case names.
//!
//! Tables are ordered slices so the accessor functions list keys in a
//! stable, curated order. Lookups are exact matches on normalised keys.
#![forbid(unsafe_code)]

pub(crate) type KeywordTable = &'static [(&'static str, &'static [&'static str])];
pub(crate) type SentenceTable = &'static [(&'static str, &'static str)];

/// Category keywords and spend adjustment for a relationship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RelationPreference {
    pub(crate) categories: &'static [&'static str],
    pub(crate) budget_multiplier: f64,
}

pub(crate) const OCCASION_CATEGORIES: KeywordTable = &[
    ("birthday", &["jewelry", "accessories", "home-decor", "art", "personalized"]),
    ("anniversary", &["jewelry", "romantic", "luxury", "personalized", "home-decor"]),
    ("wedding", &["jewelry", "luxury", "home-decor", "art", "personalized"]),
    ("housewarming", &["home-decor", "kitchen", "art", "plants", "practical"]),
    ("graduation", &["jewelry", "accessories", "practical", "personalized", "art"]),
    ("baby-shower", &["baby", "home-decor", "personalized", "practical"]),
    ("christmas", &["home-decor", "jewelry", "art", "personalized", "seasonal"]),
    ("valentines", &["romantic", "jewelry", "personalized", "art", "luxury"]),
    ("mothers-day", &["jewelry", "home-decor", "art", "personalized", "luxury"]),
    ("fathers-day", &["accessories", "practical", "art", "personalized", "luxury"]),
    ("diwali", &["home-decor", "jewelry", "art", "traditional", "luxury"]),
    ("holi", &["art", "home-decor", "traditional", "colorful"]),
    ("eid", &["jewelry", "home-decor", "art", "traditional", "luxury"]),
    ("new-year", &["jewelry", "accessories", "art", "personalized", "luxury"]),
];

pub(crate) const RELATION_PREFERENCES: &[(&str, RelationPreference)] = &[
    ("spouse", relation(&["jewelry", "romantic", "luxury", "personalized"], 1.5)),
    ("partner", relation(&["jewelry", "romantic", "personalized", "art"], 1.3)),
    ("parent", relation(&["jewelry", "home-decor", "art", "practical"], 1.2)),
    ("child", relation(&["toys", "art", "personalized", "educational"], 0.8)),
    ("sibling", relation(&["accessories", "art", "personalized", "practical"], 1.0)),
    ("friend", relation(&["accessories", "art", "home-decor", "practical"], 0.9)),
    ("colleague", relation(&["practical", "home-decor", "art", "accessories"], 0.7)),
    ("boss", relation(&["luxury", "art", "home-decor", "practical"], 1.4)),
    ("teacher", relation(&["art", "home-decor", "practical", "personalized"], 0.8)),
    ("neighbor", relation(&["home-decor", "practical", "art"], 0.6)),
];

pub(crate) const AGE_GROUP_CATEGORIES: KeywordTable = &[
    ("kids", &["toys", "educational", "colorful", "fun"]),
    ("teens", &["accessories", "trendy", "art", "personalized"]),
    ("young-adults", &["accessories", "art", "trendy", "personalized"]),
    ("adults", &["jewelry", "home-decor", "art", "practical"]),
    ("seniors", &["practical", "home-decor", "art", "traditional"]),
];

pub(crate) const PERSONALITY_CATEGORIES: KeywordTable = &[
    ("creative", &["art", "handmade", "unique", "colorful"]),
    ("practical", &["practical", "home-decor", "kitchen", "useful"]),
    ("luxury-loving", &["jewelry", "luxury", "premium", "elegant"]),
    ("minimalist", &["simple", "elegant", "practical", "clean"]),
    ("traditional", &["traditional", "art", "home-decor", "cultural"]),
    ("trendy", &["trendy", "accessories", "art", "modern"]),
    ("nature-lover", &["plants", "natural", "eco-friendly", "art"]),
    ("tech-savvy", &["modern", "practical", "accessories", "trendy"]),
];

pub(crate) const INTEREST_CATEGORIES: KeywordTable = &[
    ("cooking", &["kitchen", "practical", "home-decor"]),
    ("art", &["art", "creative", "handmade"]),
    ("music", &["art", "accessories", "creative"]),
    ("reading", &["home-decor", "practical", "art"]),
    ("fitness", &["accessories", "practical", "health"]),
    ("travel", &["accessories", "practical", "art"]),
    ("gardening", &["plants", "home-decor", "natural"]),
    ("photography", &["art", "accessories", "creative"]),
    ("fashion", &["accessories", "jewelry", "trendy"]),
    ("technology", &["practical", "accessories", "modern"]),
];

pub(crate) const OCCASION_REASONS: SentenceTable = &[
    ("birthday", "Perfect for celebrating their special day"),
    ("anniversary", "A thoughtful way to commemorate your journey together"),
    ("wedding", "A beautiful gift to start their new chapter"),
    ("housewarming", "Great addition to their new home"),
    ("graduation", "Celebrate their achievement with this special gift"),
    ("christmas", "Spread holiday cheer with this festive gift"),
    ("valentines", "Express your love with this romantic gesture"),
    ("mothers-day", "Show your appreciation for everything she does"),
    ("fathers-day", "Honor the special man in your life"),
];

pub(crate) const RELATION_REASONS: SentenceTable = &[
    ("spouse", "A meaningful gift for your life partner"),
    ("partner", "Perfect for your significant other"),
    ("parent", "Show your gratitude to your parent"),
    ("child", "Delight your little one with this gift"),
    ("friend", "A thoughtful gift for your dear friend"),
    ("colleague", "Professional yet personal gift choice"),
];

pub(crate) const TRENDING_CATEGORIES: &[&str] = &[
    "personalized",
    "handmade",
    "eco-friendly",
    "art",
    "jewelry",
    "home-decor",
];

pub(crate) const POPULAR_OCCASIONS: &[&str] = &[
    "birthday",
    "anniversary",
    "wedding",
    "housewarming",
    "christmas",
    "valentines",
];

const fn relation(categories: &'static [&'static str], budget_multiplier: f64) -> RelationPreference {
    RelationPreference {
        categories,
        budget_multiplier,
    }
}

/// Find the entry for `key` in an ordered table.
pub(crate) fn lookup<V: Copy>(table: &[(&'static str, V)], key: &str) -> Option<V> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, value)| value)
}

pub(crate) fn keys<V>(table: &[(&'static str, V)]) -> Vec<&'static str> {
    table.iter().map(|&(name, _)| name).collect()
}
