//! Market governance: static lints over a whole set of records
//!
//! Catches authoring mistakes before a market is resolved: reuse links
//! that point nowhere, reuse cycles, chains too deep for the resolver and
//! overrides the resolver will ignore.

use std::collections::HashMap;

use market_meta::{
    BannerSpec, HowItWorksSpec, MarketCode, MarketId, MarketRecord, SectionKind, SectionMode,
};
use serde::{Deserialize, Serialize};

use crate::graph::ReuseGraph;

/// Severity level for lint warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarnLevel {
    /// Informational notice
    Info,
    /// Potential problem
    Warning,
    /// Resolution will fail
    Error,
}

impl std::fmt::Display for WarnLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A lint warning about the market records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintWarning {
    pub level: WarnLevel,
    /// Human-readable description
    pub message: String,
    /// Market this relates to, if applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionKind>,
}

impl LintWarning {
    fn new(level: WarnLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            market: None,
            section: None,
        }
    }

    fn on(mut self, record: &MarketRecord, section: SectionKind) -> Self {
        self.market = Some(record.code.clone());
        self.section = Some(section);
        self
    }
}

/// Lint a complete set of market records
///
/// Checks for:
/// - More than one default market, or none at all
/// - Reuse sections without a target, or with a target not in the set
/// - Reuse cycles
/// - Reuse chains longer than `max_depth` hops
/// - Banner button overrides with only one of label and url
/// - Step extensions the resolver will drop
pub fn lint_markets(records: &[MarketRecord], max_depth: usize) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let by_id: HashMap<&MarketId, &MarketRecord> = records.iter().map(|r| (&r.id, r)).collect();

    let defaults: Vec<&str> = records
        .iter()
        .filter(|r| r.is_default)
        .map(|r| r.code.as_str())
        .collect();
    if defaults.len() > 1 {
        warnings.push(LintWarning::new(
            WarnLevel::Warning,
            format!(
                "{} markets are marked default ({}). Only one should be.",
                defaults.len(),
                defaults.join(", ")
            ),
        ));
    } else if defaults.is_empty() && !records.is_empty() {
        warnings.push(LintWarning::new(
            WarnLevel::Info,
            "No market is marked default.",
        ));
    }

    for kind in SectionKind::ALL {
        let graph = ReuseGraph::for_section(records, kind);

        for record in records {
            if record.mode(kind) == SectionMode::Reuse {
                match record.reuse_target(kind) {
                    None => warnings.push(
                        LintWarning::new(
                            WarnLevel::Warning,
                            format!(
                                "{} reuses its {kind} section without a target. It resolves empty.",
                                record.code
                            ),
                        )
                        .on(record, kind),
                    ),
                    Some(target) if !by_id.contains_key(target) => warnings.push(
                        LintWarning::new(
                            WarnLevel::Warning,
                            format!(
                                "{} reuses the {kind} section of '{target}', which does not exist.",
                                record.code
                            ),
                        )
                        .on(record, kind),
                    ),
                    Some(_) => {}
                }
            }

            let chain = graph.chain_from(&record.id);
            let ends_in_cycle = chain.last().and_then(|last| graph.target_of(last)).is_some();
            let hops = chain.len() - 1;
            if !ends_in_cycle && hops > max_depth {
                warnings.push(
                    LintWarning::new(
                        WarnLevel::Error,
                        format!(
                            "{} {kind} reuse chain needs {hops} hops, more than the limit of {max_depth}.",
                            record.code
                        ),
                    )
                    .on(record, kind),
                );
            }
        }

        for cycle in graph.find_cycles() {
            let names: Vec<String> = cycle
                .iter()
                .map(|id| match by_id.get(id) {
                    Some(record) => record.code.to_string(),
                    None => id.to_string(),
                })
                .collect();
            let mut warning = LintWarning::new(
                WarnLevel::Error,
                format!("Reuse cycle in {kind} section: {}", names.join(" -> ")),
            );
            warning.section = Some(kind);
            if let Some(first) = cycle.first().and_then(|id| by_id.get(id)) {
                warning.market = Some(first.code.clone());
            }
            warnings.push(warning);
        }
    }

    for record in records {
        lint_banner_override(record, &mut warnings);
        lint_step_extensions(record, &by_id, max_depth, &mut warnings);
    }

    warnings
}

fn lint_banner_override(record: &MarketRecord, warnings: &mut Vec<LintWarning>) {
    if let BannerSpec::Reuse {
        button: Some(button),
        ..
    } = &record.banner
    {
        if button.is_partial() {
            warnings.push(
                LintWarning::new(
                    WarnLevel::Info,
                    format!(
                        "{} banner button override needs both label and url. It is ignored.",
                        record.code
                    ),
                )
                .on(record, SectionKind::Banner),
            );
        }
    }
}

fn lint_step_extensions(
    record: &MarketRecord,
    by_id: &HashMap<&MarketId, &MarketRecord>,
    max_depth: usize,
    warnings: &mut Vec<LintWarning>,
) {
    let HowItWorksSpec::Reuse { extensions, .. } = &record.how_it_works else {
        return;
    };
    if extensions.is_empty() {
        return;
    }
    let Some(count) = inherited_step_count(record, by_id, max_depth) else {
        return;
    };

    for extension in extensions {
        let in_range = extension.step_index >= 0 && (extension.step_index as u64) < count as u64;
        let message = if !in_range {
            format!(
                "{} step extension index {} is outside the {count} inherited steps. It is dropped.",
                record.code, extension.step_index
            )
        } else if extension.video.trim().is_empty() {
            format!(
                "{} step extension for step {} has no video. It is dropped.",
                record.code, extension.step_index
            )
        } else {
            continue;
        };
        warnings.push(LintWarning::new(WarnLevel::Info, message).on(record, SectionKind::HowItWorks));
    }
}

/// Number of steps a reusing record inherits, or `None` when the chain
/// cannot be resolved (cycle or too deep).
fn inherited_step_count(
    record: &MarketRecord,
    by_id: &HashMap<&MarketId, &MarketRecord>,
    max_depth: usize,
) -> Option<usize> {
    let mut current = record;
    let mut seen = vec![&record.id];
    for _ in 0..max_depth {
        let Some(target) = current.how_it_works.target() else {
            return Some(0);
        };
        if seen.contains(&target) {
            return None;
        }
        let Some(&next) = by_id.get(target) else {
            return Some(0);
        };
        if let HowItWorksSpec::Custom { steps } = &next.how_it_works {
            return Some(steps.len());
        }
        seen.push(&next.id);
        current = next;
    }
    None
}

/// True when any lint is error level.
pub fn has_errors(warnings: &[LintWarning]) -> bool {
    warnings.iter().any(|w| w.level == WarnLevel::Error)
}
