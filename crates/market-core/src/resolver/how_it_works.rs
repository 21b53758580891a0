//! How-it-works rules: a reusing market may attach videos to inherited
//! steps by index.

use market_meta::{HowItWorksSpec, MarketRecord, SectionKind, StepExtension};

use super::chain::{SectionRules, Source, present};
use crate::resolved::{ResolvedHowItWorks, ResolvedStep};

pub(crate) struct HowItWorksRules;

impl SectionRules for HowItWorksRules {
    const KIND: SectionKind = SectionKind::HowItWorks;

    type Resolved = ResolvedHowItWorks;

    fn source(record: &MarketRecord) -> Source<'_, ResolvedHowItWorks> {
        match &record.how_it_works {
            HowItWorksSpec::Custom { steps } => Source::Authored(ResolvedHowItWorks {
                steps: steps
                    .iter()
                    .map(|step| ResolvedStep {
                        icon: present(&step.icon).map(str::to_string),
                        title: step.title.clone(),
                        description: step.description.clone(),
                        video: present(&step.video).map(str::to_string),
                    })
                    .collect(),
            }),
            HowItWorksSpec::Reuse { .. } => Source::Reuse(record.how_it_works.target()),
        }
    }

    fn inherit(record: &MarketRecord, mut inherited: ResolvedHowItWorks) -> ResolvedHowItWorks {
        if let HowItWorksSpec::Reuse { extensions, .. } = &record.how_it_works {
            let applied = apply_step_extensions(&mut inherited.steps, extensions);
            if applied < extensions.len() {
                tracing::debug!(
                    market = %record.id,
                    dropped = extensions.len() - applied,
                    steps = inherited.steps.len(),
                    "Step extensions dropped"
                );
            }
        }
        inherited
    }
}

/// Set the video of each step an extension points at, in declaration order.
///
/// Extensions whose index falls outside `0..steps.len()` or whose video is
/// blank are skipped. Returns how many extensions were applied.
pub fn apply_step_extensions(steps: &mut [ResolvedStep], extensions: &[StepExtension]) -> usize {
    let mut applied = 0;
    for extension in extensions {
        if extension.video.trim().is_empty() {
            continue;
        }
        let Some(step) = usize::try_from(extension.step_index)
            .ok()
            .and_then(|index| steps.get_mut(index))
        else {
            continue;
        };
        step.video = Some(extension.video.clone());
        applied += 1;
    }
    applied
}
