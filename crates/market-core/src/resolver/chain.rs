//! Reuse chain walking shared by every section kind
//!
//! A section in reuse mode points at another market's same section, which
//! may itself point further. The walk follows those references iteratively,
//! one awaited store lookup per hop, until it reaches an authored section or
//! a dead end. The resolved value is then handed back up the chain, each hop
//! layering its own overrides on top of what the next hop produced.

use market_meta::{MarketId, MarketRecord, SectionKind};
use market_store::MarketRecordStore;

use crate::{Error, Result};

/// Where a record's section gets its base value from.
pub(crate) enum Source<'a, T> {
    /// Authored in place (custom mode).
    Authored(T),
    /// Delegated to another market (reuse mode), if a target was picked.
    Reuse(Option<&'a MarketId>),
}

/// Section-specific pieces of the resolution algorithm.
pub(crate) trait SectionRules {
    const KIND: SectionKind;

    type Resolved: Default;

    fn source(record: &MarketRecord) -> Source<'_, Self::Resolved>;

    /// Apply reuse-mode overrides on top of the value inherited from the
    /// target. Only called when the target was found and resolved.
    fn inherit(record: &MarketRecord, inherited: Self::Resolved) -> Self::Resolved;

    /// Mode-independent additions applied after the section is resolved.
    fn extend(_record: &MarketRecord, resolved: Self::Resolved) -> Self::Resolved {
        resolved
    }
}

/// Resolve one section of `record`, following reuse references through
/// `store` for at most `max_depth` hops.
pub(crate) async fn resolve_section<R, S>(
    store: &S,
    record: &MarketRecord,
    max_depth: usize,
) -> Result<R::Resolved>
where
    R: SectionRules,
    S: MarketRecordStore + ?Sized,
{
    let mut visited: Vec<MarketId> = vec![record.id.clone()];
    let mut fetched: Vec<MarketRecord> = Vec::new();

    let base = loop {
        let current = fetched.last().unwrap_or(record);
        let target = match R::source(current) {
            Source::Authored(value) => break value,
            Source::Reuse(None) => {
                tracing::debug!(
                    section = %R::KIND,
                    market = %current.id,
                    "Reuse without a target, using empty default"
                );
                break R::Resolved::default();
            }
            Source::Reuse(Some(target)) => target.clone(),
        };

        if visited.contains(&target) {
            visited.push(target);
            return Err(Error::CycleDetected {
                section: R::KIND,
                chain: visited,
            });
        }
        if fetched.len() >= max_depth {
            return Err(Error::DepthExceeded {
                section: R::KIND,
                origin: record.id.clone(),
                limit: max_depth,
            });
        }

        tracing::debug!(section = %R::KIND, from = %current.id, to = %target, "Following reuse");
        match store.find_by_id(&target).await? {
            Some(next) => {
                visited.push(next.id.clone());
                fetched.push(next);
            }
            None => {
                tracing::warn!(
                    section = %R::KIND,
                    market = %current.id,
                    target = %target,
                    "Reuse target not found, using empty default"
                );
                break R::Resolved::default();
            }
        }
    };

    // The innermost hop produced `base`; every hop above it reused a target
    // that resolved, so it gets its overrides applied.
    let innermost = fetched.last().unwrap_or(record);
    let mut value = R::extend(innermost, base);
    let outer_hops = std::iter::once(record)
        .chain(fetched.iter())
        .take(fetched.len())
        .collect::<Vec<_>>();
    for hop in outer_hops.into_iter().rev() {
        value = R::extend(hop, R::inherit(hop, value));
    }

    Ok(value)
}

/// The value, if present and not blank.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
