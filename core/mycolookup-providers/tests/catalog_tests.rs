mod common;

use common::{found_names, found_text, query};
use mycolookup_providers::{CuratedDescriptions, Provider, SpeciesCatalog};
use mycolookup_types::{Language, LookupField};
use pretty_assertions::assert_eq;

// ── CuratedDescriptions ─────────────────────────────────────────

#[test]
fn species_entry_wins_over_genus() {
    let species = CuratedDescriptions::describe(&query("Amanita muscaria")).unwrap();
    assert!(species.contains("fly agaric") || species.contains("red-and-white"));
}

#[test]
fn genus_entry_used_for_unknown_species() {
    let text = CuratedDescriptions::describe(&query("Russula paludosa")).unwrap();
    let genus = CuratedDescriptions::describe(&query("Russula")).unwrap();
    assert!(!text.is_empty());
    assert!(!genus.is_empty());
}

#[test]
fn describe_is_deterministic() {
    let q = query("Boletus edulis");
    assert_eq!(
        CuratedDescriptions::describe(&q),
        CuratedDescriptions::describe(&q)
    );
}

#[test]
fn unknown_genus_has_no_entry() {
    assert_eq!(CuratedDescriptions::describe(&query("Zzzyx zzzyx")), None);
}

#[tokio::test]
async fn curated_lookup_serves_descriptions_only() {
    let provider = CuratedDescriptions::new();
    let q = query("cantharellus cibarius");

    let text = found_text(provider.lookup(LookupField::Description, &q).await);
    assert!(text.chars().count() >= 50);

    assert!(provider
        .lookup(LookupField::VernacularName(Language::En), &q)
        .await
        .is_absent());
    assert!(provider.lookup(LookupField::SuggestionList, &q).await.is_absent());
}

// ── SpeciesCatalog ──────────────────────────────────────────────

#[test]
fn matching_ignores_case() {
    let names = SpeciesCatalog::matching("SUILLUS");
    assert_eq!(names, vec!["Suillus grevillei", "Suillus luteus"]);
}

#[test]
fn matching_substring_inside_name() {
    let names = SpeciesCatalog::matching("melanosporum");
    assert_eq!(names, vec!["Tuber melanosporum"]);
}

#[tokio::test]
async fn catalog_lookup_returns_sorted_names() {
    let names = found_names(
        SpeciesCatalog::new()
            .lookup(LookupField::SuggestionList, &query("tuber"))
            .await,
    );
    assert_eq!(names, vec!["Tuber magnatum", "Tuber melanosporum"]);
}

#[tokio::test]
async fn catalog_lookup_matches_epithets_across_genera() {
    let names = found_names(
        SpeciesCatalog::new()
            .lookup(LookupField::SuggestionList, &query("RUSSULA"))
            .await,
    );
    assert_eq!(
        names,
        vec![
            "Hygrophorus russula",
            "Russula cyanoxantha",
            "Russula emetica",
            "Russula virescens",
            "Russula xerampelina",
        ]
    );
}

#[tokio::test]
async fn catalog_no_match_is_absent() {
    let result = SpeciesCatalog::new()
        .lookup(LookupField::SuggestionList, &query("qwerty"))
        .await;
    assert!(result.is_absent());
}
