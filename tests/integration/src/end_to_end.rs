//! End-to-end tests
//!
//! Records are written to a directory store, settings are loaded from
//! layered files, and markets are resolved and linted the way the CLI does
//! it.

use std::fs;
use std::path::Path;

use market_core::{
    ApiResponse, ConfigResolver, ResolverSettings, SettingsLoader, WarnLevel, has_errors,
    lint_markets,
};
use market_meta::{Link, MarketId, MarketRecord, SectionKind};
use market_store::{DirectoryStore, MarketRecordStore, RecordFormat};
use market_test_utils::{MarketBuilder, seed_markets, steps};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// A workspace with a `markets/` store directory and its own settings.
struct TestWorkspace {
    temp_dir: TempDir,
    global_dir: TempDir,
}

impl TestWorkspace {
    fn new() -> Self {
        let workspace = Self {
            temp_dir: TempDir::new().unwrap(),
            global_dir: TempDir::new().unwrap(),
        };
        fs::create_dir(workspace.markets()).unwrap();
        workspace
    }

    fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    fn markets(&self) -> std::path::PathBuf {
        self.root().join("markets")
    }

    fn store(&self, format: RecordFormat) -> DirectoryStore {
        DirectoryStore::new(self.markets()).with_format(format)
    }

    fn put_all(&self, records: &[MarketRecord], format: RecordFormat) {
        let store = self.store(format);
        for record in records {
            store.put(record).unwrap();
        }
    }

    fn settings(&self) -> ResolverSettings {
        SettingsLoader::with_global_config_dir(self.root(), self.global_dir.path().to_path_buf())
            .load()
            .unwrap()
    }

    fn resolver(&self) -> ConfigResolver<DirectoryStore> {
        ConfigResolver::with_settings(self.store(RecordFormat::Toml), self.settings())
    }
}

// =============================================================================
// Seeded workspace
// =============================================================================

#[tokio::test]
async fn seeded_workspace_resolves_every_market() {
    for format in [RecordFormat::Toml, RecordFormat::Json, RecordFormat::Yaml] {
        let workspace = TestWorkspace::new();
        workspace.put_all(&seed_markets(), format);
        let resolver = workspace.resolver();

        let singapore = resolver.resolve_code("sg").await.unwrap();
        assert_eq!(
            singapore.header.logo.as_deref(),
            Some("/media/singapore-flag.png"),
            "{format}"
        );
        assert_eq!(singapore.banner.button, Some(Link::new("Buy Now", "/buy")));

        let australia = resolver.resolve_code("AU").await.unwrap();
        assert_eq!(australia.footer.links.len(), 4);
        assert_eq!(
            australia.footer.links.last(),
            Some(&Link::new("Made in Australia", "/made-in-australia"))
        );
    }
}

#[tokio::test]
async fn seeded_workspace_passes_governance() {
    let workspace = TestWorkspace::new();
    workspace.put_all(&seed_markets(), RecordFormat::Toml);

    let records = workspace.store(RecordFormat::Toml).all().await.unwrap();
    let warnings = lint_markets(&records, workspace.settings().max_depth);
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[tokio::test]
async fn envelope_matches_consumer_shape() {
    let workspace = TestWorkspace::new();
    workspace.put_all(&seed_markets(), RecordFormat::Json);

    let response = ApiResponse::from_result(workspace.resolver().resolve_code("MY").await);
    let value: serde_json::Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(value["data"]["name"], "Malaysia");
    assert_eq!(value["data"]["header"]["navItems"][0]["label"], "Home");
    assert_eq!(value["data"]["footer"]["socialMedia"]["twitter"], "https://twitter.com");
    assert_eq!(
        value["data"]["footer"]["contactInfo"],
        "contact@malaysia.example.com"
    );
    assert_eq!(value["data"]["banner"]["media"], "/media/mega-sale.jpg");
}

// =============================================================================
// Editing records between resolutions
// =============================================================================

#[tokio::test]
async fn upstream_edit_reaches_every_reuser() {
    let workspace = TestWorkspace::new();
    workspace.put_all(&seed_markets(), RecordFormat::Toml);
    let resolver = workspace.resolver();

    // AU reuses SG's footer; SG authors its own
    let before = resolver.resolve_code("AU").await.unwrap();
    assert_eq!(
        before.footer.contact_info.as_deref(),
        Some("contact@singapore.example.com")
    );

    let store = workspace.store(RecordFormat::Toml);
    let mut singapore = store
        .find_by_id(&MarketId::new("market-sg"))
        .await
        .unwrap()
        .unwrap();
    singapore.footer = MarketBuilder::new("market-sg", "SG")
        .custom_footer(&[("Help", "/help")], &[], Some("help@sg.example.com"))
        .build()
        .footer;
    store.put(&singapore).unwrap();

    let after = resolver.resolve_code("AU").await.unwrap();
    assert_eq!(
        after.footer.links,
        vec![
            Link::new("Help", "/help"),
            Link::new("Made in Australia", "/made-in-australia"),
        ]
    );
    assert_eq!(after.footer.contact_info.as_deref(), Some("help@sg.example.com"));
}

#[tokio::test]
async fn introducing_a_cycle_fails_resolution_and_check() {
    let workspace = TestWorkspace::new();
    workspace.put_all(&seed_markets(), RecordFormat::Toml);

    // MY now reuses SG's header, which reuses MY
    let store = workspace.store(RecordFormat::Toml);
    let mut malaysia = store
        .find_by_id(&MarketId::new("market-my"))
        .await
        .unwrap()
        .unwrap();
    malaysia.header = MarketBuilder::new("market-my", "MY")
        .reuse_header("market-sg", None)
        .build()
        .header;
    store.put(&malaysia).unwrap();

    let response = ApiResponse::from_result(workspace.resolver().resolve_code("SG").await);
    assert_eq!(response.status, 500);

    let records = store.all().await.unwrap();
    let warnings = lint_markets(&records, 16);
    assert!(has_errors(&warnings));
    assert!(warnings.iter().any(|w| {
        w.level == WarnLevel::Error
            && w.section == Some(SectionKind::Header)
            && w.message == "Reuse cycle in header section: MY -> SG -> MY"
    }));
}

// =============================================================================
// Settings
// =============================================================================

#[tokio::test]
async fn workspace_settings_bound_chain_depth() {
    let workspace = TestWorkspace::new();
    let chain: Vec<MarketRecord> = vec![
        MarketBuilder::new("m0", "M0").reuse_steps("m1", &[]).build(),
        MarketBuilder::new("m1", "M1").reuse_steps("m2", &[(0, "/intro.mp4")]).build(),
        MarketBuilder::new("m2", "M2").custom_steps(steps(2)).build(),
    ];
    workspace.put_all(&chain, RecordFormat::Yaml);

    let resolved = workspace.resolver().resolve_code("M0").await.unwrap();
    assert_eq!(
        resolved.how_it_works.steps[0].video.as_deref(),
        Some("/intro.mp4")
    );

    fs::write(
        workspace.root().join("market.toml"),
        "[resolver]\nmax_depth = 1\nconcurrent_sections = false\n",
    )
    .unwrap();
    assert_eq!(workspace.settings().max_depth, 1);

    let response = ApiResponse::from_result(workspace.resolver().resolve_code("M0").await);
    assert_eq!(response.status, 500);
    // M1 is one hop from its custom section
    assert!(workspace.resolver().resolve_code("M1").await.is_ok());
}
