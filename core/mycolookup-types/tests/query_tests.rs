use mycolookup_types::{Error, TaxonQuery};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::str::FromStr;

// ── format ──────────────────────────────────────────────────────

#[test]
fn format_capitalizes_genus_and_lowercases_epithet() {
    let q = TaxonQuery::format("boletus EDULIS").unwrap();
    assert_eq!(q.genus(), "Boletus");
    assert_eq!(q.epithet(), Some("edulis"));
    assert_eq!(q.to_string(), "Boletus edulis");
}

#[test]
fn format_genus_rest_keeps_case() {
    // Only the first character of the genus is touched.
    let q = TaxonQuery::format("aMANITA muscaria").unwrap();
    assert_eq!(q.genus(), "AMANITA");
}

#[test]
fn format_single_token_has_no_epithet() {
    let q = TaxonQuery::format("russula").unwrap();
    assert_eq!(q.genus(), "Russula");
    assert_eq!(q.epithet(), None);
    assert!(q.is_genus_only());
    assert_eq!(q.to_string(), "Russula");
}

#[test]
fn format_collapses_whitespace_runs() {
    let q = TaxonQuery::format("  amanita \t  muscaria   VAR.  Flavivolvata ").unwrap();
    assert_eq!(q.to_string(), "Amanita muscaria var. flavivolvata");
}

#[test]
fn format_trims_single_token() {
    let q = TaxonQuery::format("   lactarius\n").unwrap();
    assert_eq!(q.to_string(), "Lactarius");
}

#[test]
fn format_rejects_blank_input() {
    assert!(matches!(TaxonQuery::format(""), Err(Error::InvalidQuery(_))));
    assert!(matches!(TaxonQuery::format("  \t\n"), Err(Error::InvalidQuery(_))));
}

#[test]
fn format_non_ascii_genus() {
    let q = TaxonQuery::format("ölandia SPECIES").unwrap();
    assert_eq!(q.to_string(), "Ölandia species");
}

#[test]
fn format_is_idempotent_on_example() {
    let once = TaxonQuery::format("cantharellus CIBARIUS").unwrap();
    let twice = TaxonQuery::format(&once.to_string()).unwrap();
    assert_eq!(once, twice);
}

// ── traits ──────────────────────────────────────────────────────

#[test]
fn from_str_matches_format() {
    let a = TaxonQuery::from_str("suillus luteus").unwrap();
    let b = TaxonQuery::format("suillus luteus").unwrap();
    assert_eq!(a, b);
}

#[test]
fn equal_queries_hash_equal() {
    let mut set = HashSet::new();
    set.insert(TaxonQuery::format("boletus edulis").unwrap());
    set.insert(TaxonQuery::format("Boletus  EDULIS").unwrap());
    assert_eq!(set.len(), 1);
}

#[test]
fn serializes_as_string() {
    let q = TaxonQuery::format("boletus edulis").unwrap();
    assert_eq!(serde_json::to_string(&q).unwrap(), r#""Boletus edulis""#);
}

#[test]
fn invalid_query_display() {
    let err = TaxonQuery::format("").unwrap_err();
    assert_eq!(err.to_string(), "invalid query: taxon name is required");
}
