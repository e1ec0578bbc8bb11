pub mod advice;
pub mod matchup;
pub mod phase;
pub mod rating;
pub mod recommender;

pub use matchup::{compose_matchup, MatchupAdvisor};
pub use rating::calculate_rating;
pub use recommender::CounterRecommender;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::data::models::{ChampionProfile, ChampionStats, DamageType, RangeType, Role};

    /// Melee AD champion with every stat at 5 and no matchup lists.
    pub fn champion(id: &str, role: Role) -> ChampionProfile {
        let mut chars = id.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        ChampionProfile {
            id: id.to_string(),
            name,
            role,
            class: "Fighter".to_string(),
            damage_type: DamageType::Ad,
            range_type: RangeType::Melee,
            stats: ChampionStats::uniform(5),
            good_against: Vec::new(),
            counters: Vec::new(),
            power_spikes: Vec::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        }
    }

    pub fn champion_with(id: &str, role: Role, tweak: impl FnOnce(&mut ChampionProfile)) -> ChampionProfile {
        let mut profile = champion(id, role);
        tweak(&mut profile);
        profile
    }
}
