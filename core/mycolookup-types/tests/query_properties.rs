//! Property-based tests for the query formatter.

use mycolookup_types::TaxonQuery;
use proptest::prelude::*;

fn raw_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t]{0,3}[a-zA-ZäöõüÄÖÕÜ]{1,12}([ \t]{1,3}[a-zA-Z.\\-]{1,12}){0,3}[ \t]{0,3}")
        .unwrap()
}

proptest! {
    /// format(format(s).to_string()) == format(s)
    #[test]
    fn format_is_idempotent(raw in raw_name_strategy()) {
        let once = TaxonQuery::format(&raw).unwrap();
        let twice = TaxonQuery::format(&once.to_string()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn format_accepts_any_non_blank_text(raw in "\\PC*\\S\\PC*") {
        let query = TaxonQuery::format(&raw).unwrap();
        let again = TaxonQuery::format(&query.to_string()).unwrap();
        prop_assert_eq!(query, again);
    }

    #[test]
    fn epithet_is_lowercase(raw in raw_name_strategy()) {
        let query = TaxonQuery::format(&raw).unwrap();
        if let Some(epithet) = query.epithet() {
            prop_assert_eq!(epithet.to_lowercase(), epithet);
        }
    }

    #[test]
    fn display_has_no_outer_whitespace(raw in raw_name_strategy()) {
        let shown = TaxonQuery::format(&raw).unwrap().to_string();
        prop_assert_eq!(shown.trim(), shown.as_str());
        prop_assert!(!shown.contains("  "));
    }
}
