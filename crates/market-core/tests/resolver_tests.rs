//! Integration tests for market resolution
//!
//! Category: component
//! Resolves seed and hand-built markets against in-memory and failing
//! stores and checks the resolved configuration and response envelope.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use market_core::{
    ApiResponse, ConfigResolver, Error, ResolvedHeader, ResolvedStep, ResolverSettings,
    ResponseBody,
};
use market_meta::{ButtonSpec, Link, MarketCode, MarketId, MarketRecord, SectionKind};
use market_store::{MarketRecordStore, MarketSummary, MemoryStore};
use market_test_utils::{MarketBuilder, seed_markets, steps};

fn seeded() -> ConfigResolver<MemoryStore> {
    ConfigResolver::new(MemoryStore::with_records(seed_markets()).unwrap())
}

fn resolver(records: Vec<MarketRecord>) -> ConfigResolver<MemoryStore> {
    ConfigResolver::new(MemoryStore::with_records(records).unwrap())
}

fn sequential() -> ResolverSettings {
    ResolverSettings {
        concurrent_sections: false,
        ..ResolverSettings::default()
    }
}

/// Store whose every lookup fails.
struct FailingStore;

#[async_trait]
impl MarketRecordStore for FailingStore {
    async fn find_by_code(&self, _code: &MarketCode) -> market_store::Result<Option<MarketRecord>> {
        Err(market_store::Error::unavailable("store offline"))
    }

    async fn find_by_id(&self, _id: &MarketId) -> market_store::Result<Option<MarketRecord>> {
        Err(market_store::Error::unavailable("store offline"))
    }

    async fn list(&self) -> market_store::Result<Vec<MarketSummary>> {
        Err(market_store::Error::unavailable("store offline"))
    }

    async fn all(&self) -> market_store::Result<Vec<MarketRecord>> {
        Err(market_store::Error::unavailable("store offline"))
    }
}

/// Wraps a store and counts id lookups.
struct CountingStore {
    inner: MemoryStore,
    id_lookups: AtomicUsize,
}

#[async_trait]
impl MarketRecordStore for CountingStore {
    async fn find_by_code(&self, code: &MarketCode) -> market_store::Result<Option<MarketRecord>> {
        self.inner.find_by_code(code).await
    }

    async fn find_by_id(&self, id: &MarketId) -> market_store::Result<Option<MarketRecord>> {
        self.id_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn list(&self) -> market_store::Result<Vec<MarketSummary>> {
        self.inner.list().await
    }

    async fn all(&self) -> market_store::Result<Vec<MarketRecord>> {
        self.inner.all().await
    }
}

// ============================================================================
// Seed markets
// ============================================================================

mod seed_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_malaysia_is_authored_as_is() {
        let resolved = seeded().resolve_code("MY").await.unwrap();

        assert_eq!(resolved.name, "Malaysia");
        assert_eq!(
            resolved.header.logo.as_deref(),
            Some("/media/malaysia-flag.png")
        );
        assert_eq!(resolved.header.nav_items.len(), 3);
        assert_eq!(
            resolved.header.cta_button,
            Some(Link::new("Sign Up", "/signup"))
        );
        assert_eq!(resolved.footer.links.len(), 3);
        assert_eq!(
            resolved.footer.social_media.as_ref().map(|s| s.len()),
            Some(4)
        );
        assert_eq!(resolved.banner.button, Some(Link::new("Shop Now", "/shop")));
        assert!(resolved.how_it_works.steps.iter().all(|s| s.video.is_none()));
    }

    #[tokio::test]
    async fn test_singapore_layers_overrides_on_malaysia() {
        let resolver = seeded();
        let malaysia = resolver.resolve_code("MY").await.unwrap();
        let singapore = resolver.resolve_code("sg").await.unwrap();

        assert_eq!(
            singapore.header.logo.as_deref(),
            Some("/media/singapore-flag.png")
        );
        assert_eq!(singapore.header.nav_items, malaysia.header.nav_items);
        assert_eq!(singapore.header.cta_button, malaysia.header.cta_button);

        assert_eq!(singapore.banner.media, malaysia.banner.media);
        assert_eq!(singapore.banner.headline, malaysia.banner.headline);
        assert_eq!(singapore.banner.button, Some(Link::new("Buy Now", "/buy")));

        assert_eq!(singapore.how_it_works, malaysia.how_it_works);
        assert_eq!(
            singapore.footer.contact_info.as_deref(),
            Some("contact@singapore.example.com")
        );
    }

    #[tokio::test]
    async fn test_australia_extends_inherited_sections() {
        let resolver = seeded();
        let singapore = resolver.resolve_code("SG").await.unwrap();
        let australia = resolver.resolve_code("AU").await.unwrap();

        let mut expected_links = singapore.footer.links.clone();
        expected_links.push(Link::new("Made in Australia", "/made-in-australia"));
        assert_eq!(australia.footer.links, expected_links);
        assert_eq!(australia.footer.contact_info, singapore.footer.contact_info);

        let steps = &australia.how_it_works.steps;
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].video.as_deref(), Some("/media/select-plan.mp4"));
        assert_eq!(steps[0].video, None);
        assert_eq!(steps[2].video, None);
        assert_eq!(steps[1].title, "Select Plan");

        assert_eq!(
            australia.banner.headline.as_deref(),
            Some("Welcome to Australia - Experience Excellence")
        );
    }

    #[tokio::test]
    async fn test_envelope_for_seed_market() {
        let resolver = seeded();
        let response = ApiResponse::from_result(resolver.resolve_code("my").await);

        assert_eq!(response.status, 200);
        let value: serde_json::Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["code"], "MY");
        assert_eq!(value["data"]["header"]["ctaButton"]["url"], "/signup");
        assert_eq!(value["data"]["howItWorks"]["steps"][0]["title"], "Sign Up");
    }
}

// ============================================================================
// Resolution properties
// ============================================================================

mod property_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_reuse_of_custom_equals_target_section() {
        let a = MarketBuilder::new("a", "AA")
            .custom_header(Some("/a.png"), &[("Home", "/")], Some(("Go", "/go")))
            .custom_footer(&[("About", "/about")], &[("x", "https://x.com")], Some("a@a"))
            .custom_banner(Some("/a.jpg"), Some("A"), Some(ButtonSpec::new("A", "/a")))
            .custom_steps(steps(3))
            .build();
        let b = MarketBuilder::new("b", "BB")
            .reuse_header("a", None)
            .reuse_footer("a")
            .reuse_banner("a", None)
            .reuse_steps("a", &[])
            .build();
        let resolver = resolver(vec![a.clone(), b.clone()]);

        let resolved_a = resolver.resolve(&a).await.unwrap();
        let resolved_b = resolver.resolve(&b).await.unwrap();

        assert_eq!(resolved_b.header, resolved_a.header);
        assert_eq!(resolved_b.footer, resolved_a.footer);
        assert_eq!(resolved_b.banner, resolved_a.banner);
        assert_eq!(resolved_b.how_it_works, resolved_a.how_it_works);
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent() {
        let resolver = seeded();
        for code in ["MY", "SG", "AU"] {
            let first = resolver.resolve_code(code).await.unwrap();
            let second = resolver.resolve_code(code).await.unwrap();
            assert_eq!(first, second);
        }
    }

    #[tokio::test]
    async fn test_concurrent_and_sequential_agree() {
        let concurrent = seeded();
        let sequential = ConfigResolver::with_settings(
            MemoryStore::with_records(seed_markets()).unwrap(),
            sequential(),
        );

        for code in ["MY", "SG", "AU"] {
            assert_eq!(
                concurrent.resolve_code(code).await.unwrap(),
                sequential.resolve_code(code).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_custom_footer_additional_links_appended_in_order() {
        let a = MarketBuilder::new("a", "AA")
            .custom_footer(&[("One", "/1")], &[], None)
            .additional_links(&[("Two", "/2"), ("Three", "/3")])
            .build();
        let footer = resolver(vec![a.clone()]).resolve_footer(&a).await.unwrap();

        assert_eq!(
            footer.links,
            vec![
                Link::new("One", "/1"),
                Link::new("Two", "/2"),
                Link::new("Three", "/3"),
            ]
        );
    }

    #[tokio::test]
    async fn test_footer_reuse_overrides_replace_inherited_values() {
        let a = MarketBuilder::new("a", "AA")
            .custom_footer(&[("About", "/about")], &[("x", "https://x.com")], Some("a@a"))
            .build();
        let b = MarketBuilder::new("b", "BB")
            .footer_source(market_meta::FooterSource::Reuse {
                target: Some(MarketId::new("a")),
                social_media: Some(
                    [("y".to_string(), "https://y.com".to_string())]
                        .into_iter()
                        .collect(),
                ),
                contact_info: Some("b@b".to_string()),
            })
            .build();
        let footer = resolver(vec![a, b.clone()]).resolve_footer(&b).await.unwrap();

        assert_eq!(footer.links, vec![Link::new("About", "/about")]);
        assert_eq!(footer.contact_info.as_deref(), Some("b@b"));
        assert_eq!(
            footer.social_media.unwrap().get("y").map(String::as_str),
            Some("https://y.com")
        );
    }

    #[tokio::test]
    async fn test_overrides_for_inactive_mode_are_ignored() {
        // Reuse fields stored next to custom sections never reach the resolver
        let record: MarketRecord = serde_json::from_value(serde_json::json!({
            "id": "a",
            "name": "A",
            "code": "AA",
            "header": {
                "mode": "custom",
                "nav_items": [{ "label": "Home", "url": "/" }],
                "target": "b"
            },
            "how_it_works": {
                "mode": "custom",
                "steps": [],
                "extensions": [{ "step_index": 0, "video": "x.mp4" }]
            }
        }))
        .unwrap();
        let resolved = resolver(vec![record.clone()]).resolve(&record).await.unwrap();

        assert_eq!(resolved.header.nav_items, vec![Link::new("Home", "/")]);
        assert!(resolved.how_it_works.steps.is_empty());
    }
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenario_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_logo_override_scenario() {
        let a = MarketBuilder::new("a", "AA")
            .custom_header(None, &[("Home", "/")], None)
            .build();
        let b = MarketBuilder::new("b", "BB")
            .reuse_header("a", Some("/b.png"))
            .build();

        let resolved = resolver(vec![a, b.clone()]).resolve(&b).await.unwrap();
        assert_eq!(
            resolved.header,
            ResolvedHeader {
                logo: Some("/b.png".to_string()),
                nav_items: vec![Link::new("Home", "/")],
                cta_button: None,
            }
        );
    }

    #[tokio::test]
    async fn test_out_of_range_extension_scenario() {
        let a = MarketBuilder::new("a", "AA").custom_steps(steps(3)).build();
        let c = MarketBuilder::new("c", "CC")
            .reuse_steps("a", &[(5, "x.mp4")])
            .build();
        let resolver = resolver(vec![a.clone(), c.clone()]);

        let inherited = resolver.resolve_how_it_works(&a).await.unwrap();
        let resolved = resolver.resolve_how_it_works(&c).await.unwrap();
        assert_eq!(resolved, inherited);
        assert!(resolved.steps.iter().all(|s: &ResolvedStep| s.video.is_none()));
    }

    #[tokio::test]
    async fn test_self_cycle_scenario() {
        let d = MarketBuilder::new("d", "DD").reuse_header("d", None).build();
        let resolver = resolver(vec![d]);

        let err = resolver.resolve_code("DD").await.unwrap_err();
        assert!(matches!(
            err,
            Error::CycleDetected {
                section: SectionKind::Header,
                ..
            }
        ));

        let response = ApiResponse::from_result(Err::<(), _>(err));
        assert_eq!(response.status, 500);
    }

    #[tokio::test]
    async fn test_two_market_cycle_reports_chain() {
        let a = MarketBuilder::new("a", "AA").reuse_steps("b", &[]).build();
        let b = MarketBuilder::new("b", "BB").reuse_steps("a", &[]).build();
        let err = resolver(vec![a.clone(), b]).resolve(&a).await.unwrap_err();

        match err {
            Error::CycleDetected { section, chain } => {
                assert_eq!(section, SectionKind::HowItWorks);
                assert_eq!(
                    chain,
                    vec![MarketId::new("a"), MarketId::new("b"), MarketId::new("a")]
                );
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cycle_in_tail_is_detected() {
        // x -> a -> b -> a: the origin is not part of the loop
        let x = MarketBuilder::new("x", "XX").reuse_banner("a", None).build();
        let a = MarketBuilder::new("a", "AA").reuse_banner("b", None).build();
        let b = MarketBuilder::new("b", "BB").reuse_banner("a", None).build();
        let err = resolver(vec![x.clone(), a, b]).resolve(&x).await.unwrap_err();

        assert!(matches!(err, Error::CycleDetected { .. }));
        assert_eq!(
            err.to_string(),
            "Reuse cycle in banner section: x -> a -> b -> a"
        );
    }
}

// ============================================================================
// Store behaviour
// ============================================================================

mod store_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_failing_store_is_unavailable() {
        let resolver = ConfigResolver::new(FailingStore);
        let result = resolver.resolve_code("MY").await;

        let err = result.as_ref().unwrap_err();
        assert!(err.is_store_unavailable());

        let response = ApiResponse::from_result(result);
        assert_eq!(response.status, 503);
        assert!(matches!(response.body, ResponseBody::Failure { .. }));
    }

    #[tokio::test]
    async fn test_failure_mid_chain_propagates() {
        let record = seed_markets().remove(1);
        let resolver = ConfigResolver::new(FailingStore);

        let err = resolver.resolve(&record).await.unwrap_err();
        assert!(err.is_store_unavailable());
    }

    #[tokio::test]
    async fn test_one_lookup_per_hop() {
        let store = CountingStore {
            inner: MemoryStore::with_records(seed_markets()).unwrap(),
            id_lookups: AtomicUsize::new(0),
        };
        let resolver = ConfigResolver::with_settings(store, sequential());

        let australia = resolver
            .store()
            .find_by_code(&MarketCode::parse("AU").unwrap())
            .await
            .unwrap()
            .unwrap();
        resolver.resolve(&australia).await.unwrap();

        // footer -> SG, steps -> MY
        assert_eq!(resolver.store().id_lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_upstream_edit_visible_on_next_resolution() {
        let store = Arc::new(MemoryStore::with_records(seed_markets()).unwrap());
        let resolver = ConfigResolver::new(Arc::clone(&store));

        let before = resolver.resolve_code("SG").await.unwrap();
        assert_eq!(before.header.nav_items.len(), 3);

        let mut malaysia = store
            .find_by_code(&MarketCode::parse("MY").unwrap())
            .await
            .unwrap()
            .unwrap();
        malaysia.header = market_meta::HeaderSpec::Custom {
            logo: None,
            nav_items: vec![Link::new("Only", "/only")],
            cta_button: None,
        };
        store.upsert(malaysia).unwrap();

        let after = resolver.resolve_code("SG").await.unwrap();
        assert_eq!(after.header.nav_items, vec![Link::new("Only", "/only")]);
        assert_eq!(after.header.logo.as_deref(), Some("/media/singapore-flag.png"));
    }
}
