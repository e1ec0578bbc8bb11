//! Rule tables for lane tips and warnings.
//!
//! Rules are evaluated top to bottom and every matching rule contributes its
//! message. The generated list is then cut to a fixed length, so declaration
//! order is the priority order.

use crate::data::models::ChampionProfile;

pub const MAX_TIPS: usize = 5;
pub const MAX_WARNINGS: usize = 4;

type Predicate = fn(&ChampionProfile, &ChampionProfile) -> bool;
type Message = fn(&ChampionProfile, &ChampionProfile) -> String;

/// One advisory rule over `(mine, enemy)`.
pub struct AdviceRule {
    pub name: &'static str,
    pub applies: Predicate,
    pub message: Message,
}

pub const TIP_RULES: &[AdviceRule] = &[
    AdviceRule {
        name: "anti_heal",
        applies: |_, enemy| enemy.stats.sustain >= 7,
        message: |_, _| {
            "The enemy has strong sustain. Consider grievous wounds (Ignite / Executioner's Calling)."
                .to_string()
        },
    },
    AdviceRule {
        name: "hit_and_run",
        applies: |mine, enemy| mine.stats.mobility >= 7 && enemy.stats.mobility <= 4,
        message: |_, _| {
            "Use your mobility edge: trade briefly, then disengage before they can answer."
                .to_string()
        },
    },
    AdviceRule {
        name: "cc_counter",
        applies: |_, enemy| enemy.stats.cc >= 7,
        message: |_, _| {
            "The enemy has heavy crowd control. Consider Mercury's Treads, QSS or Cleanse."
                .to_string()
        },
    },
    AdviceRule {
        name: "all_in",
        applies: |mine, enemy| mine.stats.burst >= 8 && enemy.stats.tankiness <= 4,
        message: |_, enemy| {
            format!(
                "{} is fragile. Go for a full combo when your cooldowns are up.",
                enemy.name
            )
        },
    },
    AdviceRule {
        name: "poke_and_space",
        applies: |mine, enemy| mine.is_ranged() && enemy.is_melee(),
        message: |_, _| {
            "Use your range to poke safely. Keeping your distance is the key to the lane."
                .to_string()
        },
    },
    AdviceRule {
        name: "close_the_gap",
        applies: |mine, enemy| mine.is_melee() && enemy.is_ranged(),
        message: |_, _| {
            "Against a ranged champion, wait for a chance to close the gap. Use brush and minions for cover."
                .to_string()
        },
    },
    AdviceRule {
        name: "outlast",
        applies: |mine, enemy| mine.stats.dps >= 7 && enemy.stats.burst >= 7,
        message: |_, _| {
            "Survive the enemy's burst and your sustained damage can turn the fight.".to_string()
        },
    },
    AdviceRule {
        name: "respect_burst",
        applies: |_, enemy| enemy.stats.burst >= 8,
        message: |_, enemy| {
            format!(
                "Watch out for {}'s burst. Keep your health bar high.",
                enemy.name
            )
        },
    },
    AdviceRule {
        name: "power_spike",
        applies: |mine, _| !mine.power_spikes.is_empty(),
        message: |mine, _| {
            format!(
                "Power spike: look to fight hard at {}.",
                mine.power_spikes[0]
            )
        },
    },
];

pub const WARNING_RULES: &[AdviceRule] = &[
    AdviceRule {
        name: "enemy_power_spike",
        applies: |_, enemy| !enemy.power_spikes.is_empty(),
        message: |_, enemy| {
            format!(
                "Respect {}'s power spike ({}).",
                enemy.name, enemy.power_spikes[0]
            )
        },
    },
    AdviceRule {
        name: "own_weakness",
        applies: |mine, _| !mine.weaknesses.is_empty(),
        message: |mine, _| format!("Careful: {}", mine.weaknesses[0]),
    },
    AdviceRule {
        name: "enemy_strength",
        applies: |_, enemy| !enemy.strengths.is_empty(),
        message: |_, enemy| format!("Enemy strength: {}", enemy.strengths[0]),
    },
    AdviceRule {
        name: "slippery_enemy",
        applies: |_, enemy| enemy.stats.mobility >= 8,
        message: |_, enemy| {
            format!(
                "{}'s high mobility makes ganks easy to dodge. Coordinate with your jungler.",
                enemy.name
            )
        },
    },
    AdviceRule {
        name: "enemy_outscales",
        applies: |mine, enemy| enemy.stats.late >= 8 && mine.stats.late <= 5,
        message: |_, enemy| {
            format!(
                "{} is very strong late. Build your lead in the early and mid game.",
                enemy.name
            )
        },
    },
];

/// Messages of every matching rule, in declaration order, cut to `cap`.
/// Falls back to `fallback` when nothing matches.
pub fn evaluate_rules(
    rules: &[AdviceRule],
    mine: &ChampionProfile,
    enemy: &ChampionProfile,
    cap: usize,
    fallback: impl FnOnce() -> String,
) -> Vec<String> {
    let mut messages: Vec<String> = rules
        .iter()
        .filter(|rule| (rule.applies)(mine, enemy))
        .map(|rule| (rule.message)(mine, enemy))
        .collect();

    if messages.is_empty() {
        messages.push(fallback());
    }
    messages.truncate(cap);
    messages
}

pub fn generate_tips(mine: &ChampionProfile, enemy: &ChampionProfile) -> Vec<String> {
    evaluate_rules(TIP_RULES, mine, enemy, MAX_TIPS, || {
        format!("Play to {}'s strengths and keep the lane stable.", mine.name)
    })
}

pub fn generate_warnings(mine: &ChampionProfile, enemy: &ChampionProfile) -> Vec<String> {
    evaluate_rules(WARNING_RULES, mine, enemy, MAX_WARNINGS, || {
        format!(
            "Track {}'s key cooldowns and fight when they are down.",
            enemy.name
        )
    })
}
