//! Offline providers backed by built-in tables.
//!
//! They sit at the end of their chains: when every network source is
//! silent, a hand-written description or a list of common species still
//! beats a generated placeholder.

use crate::provider::Provider;
use async_trait::async_trait;
use mycolookup_text::shape_suggestions;
use mycolookup_types::{LookupField, ProviderResult, TaxonQuery};

/// Species- and genus-level descriptions. Keys are canonical names.
const DESCRIPTIONS: &[(&str, &[&str])] = &[
    (
        "Boletus edulis",
        &[
            "The king bolete has a bun-shaped brown cap and a stout, swollen stem covered in a fine white net. It forms mycorrhizae with spruce, pine and birch.",
            "A highly prized edible bolete with a nutty taste and firm flesh. Its pores start white, then turn yellowish olive as the fruit body matures.",
        ],
    ),
    (
        "Boletus",
        &[
            "Boletes carry a sponge of tubes and pores under the cap instead of gills. Most are mycorrhizal partners of forest trees.",
            "Members of this genus are fleshy, stout pored mushrooms. Several are choice edibles, while a few red-pored species are toxic.",
        ],
    ),
    (
        "Amanita muscaria",
        &[
            "The fly agaric has a scarlet cap dotted with white warts left behind by its universal veil. It grows with birch and conifers and is poisonous.",
            "An unmistakable red-and-white toadstool of northern forests. It contains ibotenic acid and muscimol and should never be eaten.",
        ],
    ),
    (
        "Amanita",
        &[
            "Amanitas grow from an egg-like universal veil that often leaves a cup at the stem base and patches on the cap. The genus includes the deadliest mushrooms known.",
            "Species in this genus typically have white gills, a ring on the stem and a volva at the base. Misidentification can be fatal.",
        ],
    ),
    (
        "Cantharellus cibarius",
        &[
            "The golden chanterelle is an egg-yellow, funnel-shaped mushroom with blunt forking ridges instead of true gills. It smells faintly of apricots.",
            "A popular edible of mossy coniferous and mixed forests. Its false gills run down the stem and its flesh is pale and firm.",
        ],
    ),
    (
        "Cantharellus",
        &[
            "Chanterelles have funnel-shaped caps and shallow, forking ridges running down the stem. Most species are edible and mycorrhizal.",
            "These yellow to orange mushrooms form partnerships with forest trees. Their fruity scent is a useful field character.",
        ],
    ),
    (
        "Russula",
        &[
            "Brittlegills have crumbly flesh that snaps like chalk. Cap colours range through red, purple, green and yellow.",
            "A large genus of gilled mycorrhizal mushrooms. Taste and spore print colour are key to telling the species apart.",
        ],
    ),
    (
        "Lactarius",
        &[
            "Milkcaps exude a latex when the gills are cut. The colour of this milk and any change on exposure to air help identify the species.",
            "These mycorrhizal mushrooms often have zoned caps and brittle flesh. Some are edible after proper preparation, others are acrid.",
        ],
    ),
    (
        "Cortinarius",
        &[
            "Webcaps are the largest gilled genus, named for the cobweb-like veil that links cap and stem in young fruit bodies. Their spores are rusty brown.",
            "Many webcaps are brightly coloured and some contain orellanine, which damages the kidneys days after ingestion.",
        ],
    ),
    (
        "Pleurotus",
        &[
            "Oyster mushrooms grow in overlapping shelves on dead and dying hardwood. Their gills run down a short, off-centre stem.",
            "These wood-decaying fungi have fan-shaped caps and are widely cultivated for food.",
        ],
    ),
    (
        "Morchella",
        &[
            "Morels have a honeycomb of pits and ridges on a hollow cap. They fruit in spring, often on disturbed or burnt ground.",
            "A prized spring genus whose fruit bodies are hollow from cap to stem base. They must be cooked before eating.",
        ],
    ),
    (
        "Hericium",
        &[
            "Tooth fungi in this genus hang from wood as cascades of soft white spines. They decay hardwood and are rare in many regions.",
            "These fungi produce spines instead of gills or pores. Several species are protected as indicators of old-growth forest.",
        ],
    ),
    (
        "Fomitopsis",
        &[
            "Bracket fungi of this genus cause brown rot in dead conifer wood. Their woody fruit bodies add a new pore layer every year.",
            "Perennial polypores that break down fallen timber. Some species indicate forests with long continuity of dead wood.",
        ],
    ),
];

/// Common species offered as suggestions when online sources are silent.
const SPECIES: &[&str] = &[
    "Agaricus bisporus",
    "Agaricus campestris",
    "Amanita caesarea",
    "Amanita citrina",
    "Amanita muscaria",
    "Amanita pantherina",
    "Amanita phalloides",
    "Amanita rubescens",
    "Amanita vaginata",
    "Armillaria mellea",
    "Auricularia auricula-judae",
    "Boletus aereus",
    "Boletus edulis",
    "Boletus pinophilus",
    "Boletus reticulatus",
    "Calocybe gambosa",
    "Calvatia gigantea",
    "Cantharellus cibarius",
    "Clitocybe nebularis",
    "Coprinus comatus",
    "Craterellus cornucopioides",
    "Craterellus tubaeformis",
    "Fistulina hepatica",
    "Flammulina velutipes",
    "Fomitopsis pinicola",
    "Ganoderma lucidum",
    "Gyromitra esculenta",
    "Hericium erinaceus",
    "Hydnum repandum",
    "Hygrophorus russula",
    "Hypholoma fasciculare",
    "Lactarius deliciosus",
    "Lactarius deterrimus",
    "Lactarius rufus",
    "Lactarius torminosus",
    "Laetiporus sulphureus",
    "Leccinum aurantiacum",
    "Leccinum scabrum",
    "Lepista nuda",
    "Lycoperdon perlatum",
    "Macrolepiota procera",
    "Marasmius oreades",
    "Morchella esculenta",
    "Phallus impudicus",
    "Pleurotus ostreatus",
    "Russula cyanoxantha",
    "Russula emetica",
    "Russula virescens",
    "Russula xerampelina",
    "Sparassis crispa",
    "Suillus grevillei",
    "Suillus luteus",
    "Tremella mesenterica",
    "Tricholoma matsutake",
    "Tricholoma terreum",
    "Tuber magnatum",
    "Tuber melanosporum",
];

/// Built-in descriptions for well-known species and genera.
#[derive(Debug, Default, Clone, Copy)]
pub struct CuratedDescriptions;

impl CuratedDescriptions {
    /// Creates the provider.
    pub fn new() -> Self {
        Self
    }

    /// Species entry first, then the genus entry. The variant is picked from
    /// the epithet length so repeated lookups return the same text.
    pub fn describe(query: &TaxonQuery) -> Option<&'static str> {
        let species = query.to_string();
        let variants = DESCRIPTIONS
            .iter()
            .find(|(key, _)| *key == species)
            .or_else(|| DESCRIPTIONS.iter().find(|(key, _)| *key == query.genus()))
            .map(|(_, variants)| *variants)?;

        let seed = query.epithet().map_or(0, |e| e.chars().count());
        variants.get(seed % variants.len()).copied()
    }
}

#[async_trait]
impl Provider for CuratedDescriptions {
    fn name(&self) -> &'static str {
        "curated"
    }

    async fn lookup(&self, field: LookupField, query: &TaxonQuery) -> ProviderResult {
        match field {
            LookupField::Description => {
                ProviderResult::from_text(self.name(), Self::describe(query).map(str::to_string))
            }
            _ => ProviderResult::Absent,
        }
    }
}

/// Built-in list of common species, matched by case-insensitive substring.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpeciesCatalog;

impl SpeciesCatalog {
    /// Creates the provider.
    pub fn new() -> Self {
        Self
    }

    /// Species whose name contains `needle`, ignoring case.
    pub fn matching(needle: &str) -> Vec<String> {
        let needle = needle.to_lowercase();
        SPECIES
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(|name| name.to_string())
            .collect()
    }
}

#[async_trait]
impl Provider for SpeciesCatalog {
    fn name(&self) -> &'static str {
        "species-catalog"
    }

    async fn lookup(&self, field: LookupField, query: &TaxonQuery) -> ProviderResult {
        match field {
            LookupField::SuggestionList => ProviderResult::from_names(
                self.name(),
                shape_suggestions(Self::matching(&query.to_string()), false, usize::MAX),
            ),
            _ => ProviderResult::Absent,
        }
    }
}
