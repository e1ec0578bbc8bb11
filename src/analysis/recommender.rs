use super::matchup::join_limited;
use super::rating::calculate_rating;
use crate::data::dataset::ChampionDataset;
use crate::data::models::{ChampionProfile, CounterEntry, StatKey};

pub const MAX_COUNTERS: usize = 5;

/// Stats worth calling out when explaining a counter pick.
const REASON_STATS: [StatKey; 5] = [
    StatKey::Burst,
    StatKey::Mobility,
    StatKey::Cc,
    StatKey::Tankiness,
    StatKey::Sustain,
];
const REASON_STAT_LIMIT: usize = 2;

pub struct CounterRecommender;

impl CounterRecommender {
    /// One-line explanation of why `candidate` works into `enemy`.
    ///
    /// A stat-edge reason replaces the `goodAgainst` reason when both apply.
    pub fn reason(candidate: &ChampionProfile, enemy: &ChampionProfile) -> String {
        let mut reason = format!("{}'s overall stats are stronger", candidate.name);

        if candidate.is_good_against(&enemy.id) {
            reason = format!("{} is strong against {}", candidate.name, enemy.name);
        }

        let edges: Vec<&str> = REASON_STATS
            .iter()
            .filter(|key| candidate.stats.diff(&enemy.stats, **key) >= 2)
            .map(|key| key.label())
            .collect();
        if !edges.is_empty() {
            reason = format!("Advantage in {}", join_limited(&edges, REASON_STAT_LIMIT));
        }

        reason
    }

    /// Same-role champions ranked by how well they play into `enemy`.
    ///
    /// Ties keep dataset order. Returns at most [`MAX_COUNTERS`] entries.
    pub fn find_counters(dataset: &ChampionDataset, enemy: &ChampionProfile) -> Vec<CounterEntry> {
        let mut counters: Vec<CounterEntry> = dataset
            .by_role(enemy.role)
            .filter(|candidate| candidate.id != enemy.id)
            .map(|candidate| CounterEntry {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                role: candidate.role,
                rating: calculate_rating(candidate, enemy),
                reason: Self::reason(candidate, enemy),
            })
            .collect();

        counters.sort_by(|a, b| b.rating.cmp(&a.rating));
        counters.truncate(MAX_COUNTERS);

        counters
    }
}
