use crate::data::models::{ChampionProfile, DamageType, StatKey};

const BASE_SCORE: f64 = 5.0;
const MATCHUP_BONUS: f64 = 1.5;
const STAT_SCALE: f64 = 0.5;

/// Heuristic 1-10 rating of `mine` laning against `enemy`.
///
/// Combines:
/// - ±1.5 from `goodAgainst` / `counters` listings (both can apply)
/// - `diff × weight × 0.5` over all ten stats
/// - flat adjustments for damage type vs. tanks, mobility gaps, and burst vs.
///   squishies
///
/// The raw score rounds half up and is clamped to `[1, 10]`.
pub fn calculate_rating(mine: &ChampionProfile, enemy: &ChampionProfile) -> i32 {
    let score = raw_score(mine, enemy);
    ((score + 0.5).floor() as i32).clamp(1, 10)
}

/// Unrounded score before clamping.
pub(crate) fn raw_score(mine: &ChampionProfile, enemy: &ChampionProfile) -> f64 {
    let mut score = BASE_SCORE;

    if mine.is_good_against(&enemy.id) {
        score += MATCHUP_BONUS;
    }
    if mine.is_countered_by(&enemy.id) {
        score -= MATCHUP_BONUS;
    }

    for key in StatKey::ALL {
        let diff = f64::from(mine.stats.diff(&enemy.stats, key));
        score += diff * key.weight() * STAT_SCALE;
    }

    let (my_stats, enemy_stats) = (&mine.stats, &enemy.stats);
    if mine.damage_type == DamageType::Ad && enemy_stats.tankiness >= 8 {
        score -= 0.5;
    }
    if mine.damage_type == DamageType::Ap && enemy_stats.tankiness >= 8 {
        score -= 0.3;
    }
    if my_stats.mobility >= 7 && enemy_stats.mobility <= 4 {
        score += 0.3;
    }
    if my_stats.burst >= 8 && enemy_stats.tankiness <= 3 {
        score += 0.5;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::{champion, champion_with};
    use crate::data::models::{ChampionStats, Role};

    #[test]
    fn identical_profiles_rate_even() {
        let a = champion("a", Role::Mid);
        let b = champion("b", Role::Mid);
        assert_eq!(raw_score(&a, &b), 5.0);
        assert_eq!(calculate_rating(&a, &b), 5);
    }

    #[test]
    fn good_against_adds_and_counters_subtract() {
        let enemy = champion("b", Role::Mid);
        let favored = champion_with("a", Role::Mid, |c| c.good_against = vec!["b".into()]);
        let countered = champion_with("a", Role::Mid, |c| c.counters = vec!["b".into()]);

        assert_eq!(raw_score(&favored, &enemy), 6.5);
        assert_eq!(calculate_rating(&favored, &enemy), 7);
        assert_eq!(raw_score(&countered, &enemy), 3.5);
        assert_eq!(calculate_rating(&countered, &enemy), 4);
    }

    #[test]
    fn listing_in_both_lists_cancels_out() {
        let enemy = champion("b", Role::Mid);
        let confused = champion_with("a", Role::Mid, |c| {
            c.good_against = vec!["b".into()];
            c.counters = vec!["b".into()];
        });
        assert_eq!(raw_score(&confused, &enemy), 5.0);
    }

    #[test]
    fn burst_bonus_against_squishy_target() {
        let mine = champion_with("a", Role::Mid, |c| c.stats.burst = 9);
        let enemy = champion_with("b", Role::Mid, |c| c.stats.tankiness = 2);
        // 5 + 4*0.10*0.5 + 3*0.10*0.5 + 0.5 burst bonus, no tank penalty
        let expected = 5.0 + 0.2 + 0.15 + 0.5;
        assert!((raw_score(&mine, &enemy) - expected).abs() < 1e-9);
        assert_eq!(calculate_rating(&mine, &enemy), 6);
    }

    #[test]
    fn damage_type_penalty_against_tanks() {
        let tank = champion_with("tank", Role::Top, |c| c.stats.tankiness = 8);
        let ad = champion_with("ad", Role::Top, |c| c.damage_type = DamageType::Ad);
        let ap = champion_with("ap", Role::Top, |c| c.damage_type = DamageType::Ap);
        let hybrid = champion_with("hy", Role::Top, |c| c.damage_type = DamageType::Hybrid);

        let base = 5.0 - 3.0 * 0.10 * 0.5;
        assert!((raw_score(&ad, &tank) - (base - 0.5)).abs() < 1e-9);
        assert!((raw_score(&ap, &tank) - (base - 0.3)).abs() < 1e-9);
        assert!((raw_score(&hybrid, &tank) - base).abs() < 1e-9);
    }

    #[test]
    fn mobility_gap_bonus() {
        let mine = champion_with("a", Role::Jungle, |c| c.stats.mobility = 7);
        let enemy = champion_with("b", Role::Jungle, |c| c.stats.mobility = 4);
        let expected = 5.0 + 3.0 * 0.10 * 0.5 + 0.3;
        assert!((raw_score(&mine, &enemy) - expected).abs() < 1e-9);
    }

    #[test]
    fn half_rounds_up() {
        let enemy = champion("b", Role::Support);
        let mine = champion_with("a", Role::Support, |c| c.good_against = vec!["b".into()]);
        assert_eq!(raw_score(&mine, &enemy), 6.5);
        assert_eq!(calculate_rating(&mine, &enemy), 7);
    }

    #[test]
    fn rating_is_clamped() {
        let god = champion_with("god", Role::Top, |c| {
            c.stats = ChampionStats::uniform(10);
            c.good_against = vec!["weak".into()];
        });
        let weak = champion_with("weak", Role::Top, |c| {
            c.stats = ChampionStats::uniform(1);
            c.counters = vec!["god".into()];
        });
        assert_eq!(calculate_rating(&god, &weak), 10);
        assert_eq!(calculate_rating(&weak, &god), 1);
    }

    #[test]
    fn swapping_sides_is_computed_independently() {
        let mine = champion_with("a", Role::Mid, |c| {
            c.stats.burst = 9;
            c.stats.mobility = 8;
        });
        let enemy = champion_with("b", Role::Mid, |c| {
            c.stats.tankiness = 3;
            c.stats.mobility = 4;
        });
        let forward = raw_score(&mine, &enemy);
        let backward = raw_score(&enemy, &mine);
        assert!((forward + backward - 10.0).abs() > 1e-9);
        assert_ne!(calculate_rating(&mine, &enemy), calculate_rating(&enemy, &mine));
    }
}
