//! Generated placeholders for taxa no provider knows about.

use mycolookup_types::{LookupField, ResolvedValue, TaxonQuery};

/// Description templates. `{genus}` and `{name}` are substituted.
pub const DESCRIPTION_TEMPLATES: &[&str] = &[
    "{name} is a fungus in the genus {genus}. Like its relatives it takes part in the breakdown and recycling of organic matter in its habitat.",
    "{name} belongs to the genus {genus}. Fungi of this kind form part of the hidden network that links soil, wood and plant roots.",
    "Little has been published about {name}. As a member of {genus} it shares the general biology of its genus and contributes to forest nutrient cycles.",
    "{name} is one of the species placed in {genus}. Its fruit bodies are the visible part of a much larger mycelium living in soil or wood.",
    "A member of the genus {genus}, {name} is part of the wide diversity of fungi that sustain healthy ecosystems.",
];

/// Deterministic template description for `query`.
///
/// The template is picked from the epithet length, so the same name always
/// gets the same text.
#[must_use]
pub fn fallback_description(query: &TaxonQuery) -> String {
    let seed = query.epithet().map_or(0, |e| e.chars().count());
    DESCRIPTION_TEMPLATES[seed % DESCRIPTION_TEMPLATES.len()]
        .replace("{genus}", query.genus())
        .replace("{name}", &query.to_string())
}

/// Placeholder value for `field` when every provider came up empty.
#[must_use]
pub fn fallback(field: LookupField, query: &TaxonQuery) -> ResolvedValue {
    match field {
        LookupField::Description => ResolvedValue::Text(fallback_description(query)),
        LookupField::VernacularName(_) => ResolvedValue::Text(String::new()),
        LookupField::SuggestionList => ResolvedValue::Names(Vec::new()),
    }
}
