use async_trait::async_trait;
use mycolookup_providers::Provider;
use mycolookup_resolve::{
    CacheConfig, DescriptionResponse, ProviderTable, Resolver, ResolverConfig, TtlCache,
    VernacularNames,
};
use mycolookup_server::{build_router, ErrorResponse};
use mycolookup_types::{Language, LookupField, ProviderResult, TaxonQuery};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const KING_BOLETE: &str =
    "The king bolete is a stout edible mushroom with a brown cap and a pale netted stem.";

/// Answers for "Boletus edulis" only.
struct BoletusProvider;

#[async_trait]
impl Provider for BoletusProvider {
    fn name(&self) -> &'static str {
        "boletus"
    }

    async fn lookup(&self, field: LookupField, query: &TaxonQuery) -> ProviderResult {
        if field == LookupField::SuggestionList {
            return if "Boletus".starts_with(query.genus()) {
                ProviderResult::names(
                    self.name(),
                    vec!["Boletus reticulatus".to_string(), "Boletus edulis".to_string()],
                )
            } else {
                ProviderResult::Absent
            };
        }
        if query.genus() != "Boletus" {
            return ProviderResult::Absent;
        }
        match field {
            LookupField::Description if query.epithet() == Some("edulis") => {
                ProviderResult::text(self.name(), KING_BOLETE)
            }
            LookupField::VernacularName(Language::Fi) => {
                ProviderResult::text(self.name(), "herkkutatti")
            }
            LookupField::VernacularName(Language::En) => ProviderResult::text(self.name(), "porcini"),
            _ => ProviderResult::Absent,
        }
    }
}

fn test_resolver() -> Arc<Resolver> {
    let provider: Arc<dyn Provider> = Arc::new(BoletusProvider);
    let mut table = ProviderTable::new();
    table.register(LookupField::Description, provider.clone());
    for language in Language::ALL {
        table.register(LookupField::VernacularName(language), provider.clone());
    }
    table.register(LookupField::SuggestionList, provider);

    Arc::new(Resolver::new(
        table,
        TtlCache::new(CacheConfig::default()),
        ResolverConfig::default(),
    ))
}

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
async fn spawn_test_server() -> String {
    let app = build_router(test_resolver());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn description_returns_provider_text() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/api/description?name=boletus%20edulis", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: DescriptionResponse = resp.json().await.unwrap();
    assert_eq!(body.description, KING_BOLETE);
}

#[tokio::test]
async fn description_falls_back_to_template() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/api/description?name=Zzzyx%20zzzyx", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: DescriptionResponse = resp.json().await.unwrap();
    assert!(body.description.contains("Zzzyx zzzyx"));
}

#[tokio::test]
async fn missing_name_is_bad_request() {
    let base = spawn_test_server().await;
    for url in [
        format!("{}/api/description", base),
        format!("{}/api/description?name=%20%20", base),
        format!("{}/api/vernacular?latin=", base),
    ] {
        let resp = reqwest::get(url).await.unwrap();
        assert_eq!(resp.status(), 400);
        let body: ErrorResponse = resp.json().await.unwrap();
        assert_eq!(body.error, "invalid query: taxon name is required");
    }
}

#[tokio::test]
async fn vernacular_returns_all_languages() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/api/vernacular?latin=Boletus%20edulis", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: VernacularNames = resp.json().await.unwrap();
    assert_eq!(
        body,
        VernacularNames {
            latin_name: "Boletus edulis".to_string(),
            et: String::new(),
            fi: "Herkkutatti".to_string(),
            sv: String::new(),
            en: "Porcini".to_string(),
        }
    );
}

#[tokio::test]
async fn vernacular_uses_camel_case_keys() {
    let base = spawn_test_server().await;
    let body: serde_json::Value = reqwest::get(format!("{}/api/vernacular?latin=Boletus", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["latinName"], "Boletus");
}

#[tokio::test]
async fn suggestions_are_sorted() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/api/suggestions?q=bol", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Vec<String> = resp.json().await.unwrap();
    assert_eq!(body, vec!["Boletus edulis", "Boletus reticulatus"]);
}

#[tokio::test]
async fn short_suggestion_prefix_is_empty() {
    let base = spawn_test_server().await;
    for url in [
        format!("{}/api/suggestions?q=bo", base),
        format!("{}/api/suggestions", base),
    ] {
        let body: Vec<String> = reqwest::get(url).await.unwrap().json().await.unwrap();
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let base = spawn_test_server().await;
    let body: serde_json::Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let base = spawn_test_server().await;
    let resp = reqwest::Client::new()
        .get(format!("{}/health", base))
        .header("Origin", "https://example.org")
        .send()
        .await
        .unwrap();

    let allow = resp
        .headers()
        .get("access-control-allow-origin")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(allow, "*");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/api/nonexistent", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
}
