//! Candidate discovery and per-offset winner selection.

use std::cmp::Ordering;

use hashbrown::HashMap;

use crate::parameter_type::ParameterType;

/// A located occurrence of a parameter type's pattern.
///
/// Offsets and lengths are in bytes and always fall on character boundaries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CandidateMatch<'r> {
    pub(crate) start: usize,
    pub(crate) len: usize,
    pub(crate) parameter_type: &'r ParameterType,
}

impl CandidateMatch<'_> {
    /// Whether `self` beats `other`, a candidate at the same offset.
    ///
    /// The wider match wins; equal widths fall back to parameter type order.
    /// Exact ties keep `other`, the earlier-registered type.
    fn beats(&self, other: &Self) -> bool {
        match self.len.cmp(&other.len) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => {
                self.parameter_type.compare(other.parameter_type) == Ordering::Less
            }
        }
    }
}

/// Run every pattern of every type over `text`, collecting non-empty matches.
pub(crate) fn discover<'r, I>(text: &str, parameter_types: I) -> Vec<CandidateMatch<'r>>
where
    I: IntoIterator<Item = &'r ParameterType>,
{
    let mut candidates = Vec::new();
    for parameter_type in parameter_types {
        for regex in parameter_type.regexes() {
            candidates.extend(
                regex
                    .find_iter(text)
                    .filter(|m| !m.is_empty())
                    .map(|m| CandidateMatch {
                        start: m.start(),
                        len: m.len(),
                        parameter_type,
                    }),
            );
        }
    }
    candidates
}

/// Keep the winning candidate for each start offset.
pub(crate) fn winners_by_offset<'r>(
    candidates: Vec<CandidateMatch<'r>>,
) -> HashMap<usize, CandidateMatch<'r>> {
    let mut winners: HashMap<usize, CandidateMatch<'r>> = HashMap::new();
    for candidate in candidates {
        winners
            .entry(candidate.start)
            .and_modify(|current| {
                if candidate.beats(current) {
                    *current = candidate;
                }
            })
            .or_insert(candidate);
    }
    winners
}
