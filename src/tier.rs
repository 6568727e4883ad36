//! Tick selection: snapping the user's stop distance onto a candidate.
//!
//! The search produces several feasible tick tiers; exactly one must
//! govern the displayed recommendation. Three snapping policies are
//! supported behind [`TierPolicy`], all deterministic for a given
//! candidate list and input.

use crate::search::PositionCandidate;
use crate::{Contracts, Ticks};

/// Default band width for [`TierPolicy::Banded`], as a fraction of the
/// tier (25%).
pub const DEFAULT_BAND_THRESHOLD: f64 = 0.25;

/// How the user's desired tick distance is matched against the
/// candidate tick tiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TierPolicy {
    /// Candidate with the smallest `|ticks - user_ticks|`; ties go to
    /// the candidate generated first (fewest contracts).
    Nearest,
    /// Banded matching: scanning distinct tiers ascending, accept the
    /// first tier whose `[tier×(1-threshold), tier×(1+threshold)]`
    /// band contains the input. An input falling strictly between two
    /// tiers' bands snaps to the lower tier; otherwise fall back to
    /// the nearest tier by absolute difference.
    Banded {
        /// Band half-width as a fraction of the tier, e.g. `0.25`.
        threshold: f64,
    },
    /// Smallest tier at or above the input, or the largest tier when
    /// the input exceeds them all.
    Ceiling,
}

impl Default for TierPolicy {
    fn default() -> Self {
        TierPolicy::Nearest
    }
}

impl TierPolicy {
    /// The banded policy at its default 25% threshold.
    pub fn banded() -> Self {
        TierPolicy::Banded {
            threshold: DEFAULT_BAND_THRESHOLD,
        }
    }
}

/// The candidate chosen to govern the recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct TierSelection {
    pub contracts: Contracts,
    pub ticks_per_contract: Ticks,
}

/// Select the governing `(contracts, ticks)` pair for the user's
/// desired stop distance.
///
/// With an empty candidate list the user's raw input governs:
/// one contract at `user_ticks`.
///
/// ```
/// use tickrisk::{search_candidates, select_tier, Money, TierPolicy};
///
/// let candidates = search_candidates(Money(1000_00), Money(12_50), Money(4_08));
/// let pick = select_tier(10, &candidates, TierPolicy::Nearest);
///
/// // 7 contracts allow 11 ticks, 8 allow 9; the tie on |Δ|=1 goes to
/// // the earlier candidate.
/// assert_eq!(pick.contracts, 7);
/// assert_eq!(pick.ticks_per_contract, 11);
/// ```
pub fn select_tier(
    user_ticks: Ticks,
    candidates: &[PositionCandidate],
    policy: TierPolicy,
) -> TierSelection {
    if candidates.is_empty() {
        return TierSelection {
            contracts: 1,
            ticks_per_contract: user_ticks,
        };
    }

    match policy {
        TierPolicy::Nearest => nearest(user_ticks, candidates),
        TierPolicy::Banded { threshold } => {
            let tiers = distinct_tiers(candidates);
            match banded_tier(user_ticks, &tiers, threshold) {
                Some(tier) => candidate_for_tier(tier, candidates),
                None => nearest(user_ticks, candidates),
            }
        }
        TierPolicy::Ceiling => {
            let tiers = distinct_tiers(candidates);
            let tier = tiers
                .iter()
                .copied()
                .find(|&t| t >= user_ticks)
                .unwrap_or(*tiers.last().expect("candidates are non-empty"));
            candidate_for_tier(tier, candidates)
        }
    }
}

/// First-encountered candidate minimizing `|ticks - user_ticks|`.
fn nearest(user_ticks: Ticks, candidates: &[PositionCandidate]) -> TierSelection {
    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        let diff = (candidate.ticks_per_contract - user_ticks).abs();
        let best_diff = (best.ticks_per_contract - user_ticks).abs();
        if diff < best_diff {
            best = candidate;
        }
    }
    TierSelection {
        contracts: best.contracts,
        ticks_per_contract: best.ticks_per_contract,
    }
}

/// Distinct tick tiers, ascending.
fn distinct_tiers(candidates: &[PositionCandidate]) -> Vec<Ticks> {
    let mut tiers: Vec<Ticks> = candidates.iter().map(|c| c.ticks_per_contract).collect();
    tiers.sort_unstable();
    tiers.dedup();
    tiers
}

/// Banded tier matching: lowest tier whose band contains the input,
/// else the lower neighbor when the input sits between two tiers.
/// `None` falls back to nearest.
fn banded_tier(user_ticks: Ticks, tiers: &[Ticks], threshold: f64) -> Option<Ticks> {
    let input = user_ticks as f64;
    for &tier in tiers {
        let center = tier as f64;
        if input >= center * (1.0 - threshold) && input <= center * (1.0 + threshold) {
            return Some(tier);
        }
    }
    // Between two tiers but inside neither band: snap down
    let below = tiers.iter().copied().filter(|&t| t < user_ticks).max();
    let above = tiers.iter().copied().find(|&t| t > user_ticks);
    match (below, above) {
        (Some(lower), Some(_)) => Some(lower),
        _ => None,
    }
}

/// Map a tier back to the first candidate carrying it (fewest
/// contracts).
fn candidate_for_tier(tier: Ticks, candidates: &[PositionCandidate]) -> TierSelection {
    let candidate = candidates
        .iter()
        .find(|c| c.ticks_per_contract == tier)
        .expect("tier came from this candidate list");
    TierSelection {
        contracts: candidate.contracts,
        ticks_per_contract: candidate.ticks_per_contract,
    }
}
