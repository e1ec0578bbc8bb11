use super::advice::{generate_tips, generate_warnings};
use super::phase::analyze_phase;
use super::rating::calculate_rating;
use super::recommender::CounterRecommender;
use crate::api::models::{ChampionRef, MatchupResponse};
use crate::data::dataset::{ChampionDataset, MatchupOverrides};
use crate::data::models::{ChampionProfile, CounterEntry, MatchupResult, Phase, Phases, StatKey};
use crate::error::AppError;

const SUMMARY_STAT_LIMIT: usize = 3;
const STAT_GAP: i32 = 2;

/// Generate a full matchup verdict for two resolved profiles.
pub fn compose_matchup(mine: &ChampionProfile, enemy: &ChampionProfile) -> MatchupResult {
    let rating = calculate_rating(mine, enemy);

    MatchupResult {
        rating,
        summary: summarize(mine, enemy, rating),
        phases: Phases {
            early: analyze_phase(mine, enemy, Phase::Early),
            mid: analyze_phase(mine, enemy, Phase::Mid),
            late: analyze_phase(mine, enemy, Phase::Late),
        },
        tips: generate_tips(mine, enemy),
        warnings: generate_warnings(mine, enemy),
    }
}

fn summarize(mine: &ChampionProfile, enemy: &ChampionProfile, rating: i32) -> String {
    let (my_name, enemy_name) = (&mine.name, &enemy.name);
    let mut summary = match rating {
        r if r >= 7 => format!("{my_name} is favored against {enemy_name}."),
        6 => format!("{my_name} is slightly favored against {enemy_name}."),
        5 => format!(
            "{my_name} vs {enemy_name} is a balanced matchup. Player skill decides the outcome."
        ),
        4 => format!("{my_name} is slightly unfavored against {enemy_name}."),
        _ => format!(
            "{my_name} is unfavored against {enemy_name}. Careful play is required."
        ),
    };

    let (advantages, disadvantages) = stat_gaps(mine, enemy);
    if !advantages.is_empty() {
        summary.push_str(&format!(
            " {}'s {} are stronger.",
            my_name,
            join_limited(&advantages, SUMMARY_STAT_LIMIT)
        ));
    }
    if !disadvantages.is_empty() {
        summary.push_str(&format!(
            " On the other hand, watch out for {}'s {}.",
            enemy_name,
            join_limited(&disadvantages, SUMMARY_STAT_LIMIT)
        ));
    }
    summary
}

/// Stat labels where `mine` leads (`>= 2`) and trails (`<= -2`), in stat order.
pub fn stat_gaps(mine: &ChampionProfile, enemy: &ChampionProfile) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut advantages = Vec::new();
    let mut disadvantages = Vec::new();
    for key in StatKey::ALL {
        let diff = mine.stats.diff(&enemy.stats, key);
        if diff >= STAT_GAP {
            advantages.push(key.label());
        } else if diff <= -STAT_GAP {
            disadvantages.push(key.label());
        }
    }
    (advantages, disadvantages)
}

pub(crate) fn join_limited(labels: &[&str], limit: usize) -> String {
    labels.iter().take(limit).copied().collect::<Vec<_>>().join(", ")
}

/// Entry point used by the HTTP layer and the CLI.
///
/// Borrows the read-only tables it was built from; a single advisor can be
/// shared by any number of concurrent requests.
pub struct MatchupAdvisor<'a> {
    dataset: &'a ChampionDataset,
    overrides: &'a MatchupOverrides,
}

impl<'a> MatchupAdvisor<'a> {
    pub fn new(dataset: &'a ChampionDataset, overrides: &'a MatchupOverrides) -> Self {
        MatchupAdvisor { dataset, overrides }
    }

    pub fn champion(&self, id: &str) -> Result<&'a ChampionProfile, AppError> {
        self.dataset
            .get(id)
            .ok_or_else(|| AppError::ChampionNotFound(id.to_string()))
    }

    /// Curated result for the pair when one exists, generated otherwise.
    pub fn matchup(&self, mine: &ChampionProfile, enemy: &ChampionProfile) -> MatchupResult {
        match self.overrides.get(&mine.id, &enemy.id) {
            Some(curated) => {
                log::debug!("matchup {} vs {}: using curated override", mine.id, enemy.id);
                curated.clone()
            }
            None => {
                log::debug!("matchup {} vs {}: generating", mine.id, enemy.id);
                compose_matchup(mine, enemy)
            }
        }
    }

    pub fn counters_for(&self, enemy_id: &str) -> Result<Vec<CounterEntry>, AppError> {
        let enemy = self.champion(enemy_id)?;
        Ok(CounterRecommender::find_counters(self.dataset, enemy))
    }

    /// Resolve both ids and build the full response for the frontend.
    pub fn advise(&self, my_id: &str, enemy_id: &str) -> Result<MatchupResponse, AppError> {
        let mine = self.champion(my_id)?;
        let enemy = self.champion(enemy_id)?;
        if mine.id == enemy.id {
            return Err(AppError::SameChampion);
        }

        Ok(MatchupResponse {
            my_champ: ChampionRef::from(mine),
            enemy_champ: ChampionRef::from(enemy),
            matchup: self.matchup(mine, enemy),
            counters: CounterRecommender::find_counters(self.dataset, enemy),
        })
    }
}
