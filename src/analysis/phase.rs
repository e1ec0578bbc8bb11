use crate::data::models::{ChampionProfile, Phase, PhaseAnalysis};

/// Rate one game phase from the phase stat gap alone and describe it.
///
/// The phase rating is `clamp(5 + diff, 1, 10)`, independent of the weighted
/// overall rating.
pub fn analyze_phase(mine: &ChampionProfile, enemy: &ChampionProfile, phase: Phase) -> PhaseAnalysis {
    let diff = mine.stats.diff(&enemy.stats, phase.stat_key());
    let mut desc = tier_description(&mine.name, &enemy.name, phase, diff);

    match phase {
        Phase::Early => {
            if mine.stats.sustain >= 7 && enemy.stats.sustain <= 4 {
                desc.push_str(&format!(
                    " Lean on {}'s superior sustain to stay healthy in lane.",
                    mine.name
                ));
            }
            if mine.is_ranged() && enemy.is_melee() {
                desc.push_str(" Your range advantage lets you poke freely.");
            }
        }
        Phase::Mid => {
            if mine.stats.burst >= 8 {
                desc.push_str(&format!(
                    " {}'s heavy burst can delete targets, so look for all-ins.",
                    mine.name
                ));
            }
        }
        Phase::Late => {
            if mine.stats.late >= 8 {
                desc.push_str(&format!(" {} scales extremely well into the late game.", mine.name));
            }
            if enemy.stats.late >= 8 {
                desc.push_str(&format!(
                    " But {} is also strong late, so stay careful.",
                    enemy.name
                ));
            }
        }
    }

    PhaseAnalysis {
        rating: (5 + diff).clamp(1, 10),
        desc,
    }
}

fn tier_description(my_name: &str, enemy_name: &str, phase: Phase, diff: i32) -> String {
    let label = phase.label();
    match diff {
        d if d >= 3 => format!(
            "In the {label}, {my_name} has an overwhelming advantage. Fight aggressively to snowball the lead."
        ),
        2 => format!(
            "In the {label}, {my_name} has the advantage. Take every engage you are offered."
        ),
        1 => format!(
            "In the {label}, {my_name} is slightly ahead. Trades come down to who lands their skills."
        ),
        0 => format!(
            "The {label} is even. Player skill and skill-shot accuracy decide the lane."
        ),
        -1 => format!(
            "In the {label}, {enemy_name} is slightly ahead. Avoid forced fights and farm safely."
        ),
        -2 => format!(
            "In the {label}, {enemy_name} has the advantage. Play defensively and call for jungle help."
        ),
        _ => format!(
            "In the {label}, {enemy_name} has an overwhelming advantage. Farm under tower and wait for help."
        ),
    }
}
