//! Sample markets
//!
//! Three markets that exercise every reuse path: Malaysia authors every
//! section, Singapore reuses Malaysia's header, banner and steps with local
//! overrides, and Australia reuses Singapore's footer (adding a link) and
//! Malaysia's steps (adding a video).

use std::collections::BTreeMap;

use crate::ids::{MarketCode, MarketId};
use crate::record::MarketRecord;
use crate::schema::{
    BannerSpec, ButtonSpec, FooterSource, FooterSpec, HeaderSpec, HowItWorksSpec, Link,
    StepExtension, StepSpec,
};

/// Ids to assign to the sample markets.
#[derive(Debug, Clone)]
pub struct SampleIds {
    pub malaysia: MarketId,
    pub singapore: MarketId,
    pub australia: MarketId,
}

impl Default for SampleIds {
    fn default() -> Self {
        Self {
            malaysia: MarketId::new("market-my"),
            singapore: MarketId::new("market-sg"),
            australia: MarketId::new("market-au"),
        }
    }
}

/// Build the Malaysia, Singapore and Australia records, in that order.
pub fn sample_markets(ids: &SampleIds) -> Vec<MarketRecord> {
    vec![malaysia(ids), singapore(ids), australia(ids)]
}

fn code(raw: &'static str) -> MarketCode {
    MarketCode(raw.to_string())
}

fn footer_links() -> Vec<Link> {
    vec![
        Link::new("About", "/about"),
        Link::new("Careers", "/careers"),
        Link::new("Privacy", "/privacy"),
    ]
}

fn social_media() -> BTreeMap<String, String> {
    [
        ("facebook", "https://facebook.com"),
        ("twitter", "https://twitter.com"),
        ("instagram", "https://instagram.com"),
        ("linkedin", "https://linkedin.com"),
    ]
    .into_iter()
    .map(|(platform, url)| (platform.to_string(), url.to_string()))
    .collect()
}

fn malaysia(ids: &SampleIds) -> MarketRecord {
    let mut record = MarketRecord::new(ids.malaysia.clone(), "Malaysia", code("MY"));
    record.is_default = true;
    record.header = HeaderSpec::Custom {
        logo: Some("/media/malaysia-flag.png".to_string()),
        nav_items: vec![
            Link::new("Home", "/"),
            Link::new("Products", "/products"),
            Link::new("Contact", "/contact"),
        ],
        cta_button: Some(ButtonSpec::new("Sign Up", "/signup")),
    };
    record.footer = FooterSpec {
        source: FooterSource::Custom {
            links: footer_links(),
            social_media: Some(social_media()),
            contact_info: Some("contact@malaysia.example.com".to_string()),
        },
        additional_links: Vec::new(),
    };
    record.banner = BannerSpec::Custom {
        media: Some("/media/mega-sale.jpg".to_string()),
        headline: Some("Mega Sale – Shop Now".to_string()),
        button: Some(ButtonSpec::new("Shop Now", "/shop")),
    };
    record.how_it_works = HowItWorksSpec::Custom {
        steps: vec![
            StepSpec {
                icon: Some("👤".to_string()),
                title: "Sign Up".to_string(),
                description: "Create your account in seconds with just your email.".to_string(),
                video: None,
            },
            StepSpec {
                icon: Some("📦".to_string()),
                title: "Select Plan".to_string(),
                description: "Choose the perfect plan that suits your needs.".to_string(),
                video: None,
            },
            StepSpec {
                icon: Some("✨".to_string()),
                title: "Get Started".to_string(),
                description: "Start exploring all the amazing features.".to_string(),
                video: None,
            },
        ],
    };
    record
}

fn singapore(ids: &SampleIds) -> MarketRecord {
    let mut record = MarketRecord::new(ids.singapore.clone(), "Singapore", code("SG"));
    record.header = HeaderSpec::Reuse {
        target: Some(ids.malaysia.clone()),
        logo: Some("/media/singapore-flag.png".to_string()),
    };
    record.footer = FooterSpec {
        source: FooterSource::Custom {
            links: footer_links(),
            social_media: Some(social_media()),
            contact_info: Some("contact@singapore.example.com".to_string()),
        },
        additional_links: Vec::new(),
    };
    record.banner = BannerSpec::Reuse {
        target: Some(ids.malaysia.clone()),
        button: Some(ButtonSpec::new("Buy Now", "/buy")),
    };
    record.how_it_works = HowItWorksSpec::Reuse {
        target: Some(ids.malaysia.clone()),
        extensions: Vec::new(),
    };
    record
}

fn australia(ids: &SampleIds) -> MarketRecord {
    let mut record = MarketRecord::new(ids.australia.clone(), "Australia", code("AU"));
    record.header = HeaderSpec::Custom {
        logo: Some("/media/australia-flag.png".to_string()),
        nav_items: vec![
            Link::new("Home", "/"),
            Link::new("Products", "/products"),
            Link::new("About", "/about"),
            Link::new("Contact", "/contact"),
        ],
        cta_button: Some(ButtonSpec::new("Get Started", "/get-started")),
    };
    record.footer = FooterSpec {
        source: FooterSource::Reuse {
            target: Some(ids.singapore.clone()),
            social_media: None,
            contact_info: None,
        },
        additional_links: vec![Link::new("Made in Australia", "/made-in-australia")],
    };
    record.banner = BannerSpec::Custom {
        media: Some("/media/mega-sale.jpg".to_string()),
        headline: Some("Welcome to Australia - Experience Excellence".to_string()),
        button: Some(ButtonSpec::new("Explore Now", "/explore")),
    };
    record.how_it_works = HowItWorksSpec::Reuse {
        target: Some(ids.malaysia.clone()),
        extensions: vec![StepExtension {
            step_index: 1,
            video: "/media/select-plan.mp4".to_string(),
        }],
    };
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;

    #[test]
    fn test_sample_markets_are_valid() {
        let markets = sample_markets(&SampleIds::default());
        assert_eq!(markets.len(), 3);
        for market in &markets {
            market.validate().unwrap();
            assert_eq!(MarketCode::parse(market.code.as_str()).unwrap(), market.code);
        }
        assert_eq!(markets.iter().filter(|m| m.is_default).count(), 1);
    }

    #[test]
    fn test_sample_reuse_wiring() {
        let ids = SampleIds::default();
        let markets = sample_markets(&ids);
        let singapore = &markets[1];
        let australia = &markets[2];

        assert_eq!(singapore.reuse_target(SectionKind::Header), Some(&ids.malaysia));
        assert_eq!(singapore.reuse_target(SectionKind::Footer), None);
        assert_eq!(australia.reuse_target(SectionKind::Footer), Some(&ids.singapore));
        assert_eq!(
            australia.reuse_target(SectionKind::HowItWorks),
            Some(&ids.malaysia)
        );
    }
}
