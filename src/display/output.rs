use crate::api::models::MatchupResponse;
use crate::data::models::{ChampionProfile, CounterEntry, Phase};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct CounterRow {
    rank: String,
    champion: String,
    rating: String,
    reason: String,
}

#[derive(Tabled)]
struct ChampionRow {
    id: String,
    name: String,
    role: String,
    #[tabled(rename = "type")]
    class: String,
}

fn colored_rating(rating: i32) -> ColoredString {
    let text = format!("{}/10", rating);
    if rating >= 7 {
        text.green().bold()
    } else if rating >= 5 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

pub fn display_matchup(response: &MatchupResponse) {
    let matchup = &response.matchup;

    println!(
        "\n{}",
        format!(
            "⚔️  {} ({}) vs {} ({})",
            response.my_champ.name,
            response.my_champ.role,
            response.enemy_champ.name,
            response.enemy_champ.role
        )
        .bold()
        .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    println!("{} {}", "Rating:".bold(), colored_rating(matchup.rating));
    println!("{}\n", matchup.summary);

    for phase in Phase::ALL {
        let analysis = matchup.phases.get(phase);
        println!(
            "{} {}",
            format!("{:<10}", phase.label()).bold(),
            colored_rating(analysis.rating)
        );
        println!("  {}", analysis.desc);
    }

    println!("\n{}", "Tips".bold().green());
    for tip in &matchup.tips {
        println!("  • {}", tip);
    }

    println!("\n{}", "Warnings".bold().yellow());
    for warning in &matchup.warnings {
        println!("  {} {}", "⚠️".yellow(), warning);
    }

    display_counters(&response.enemy_champ.name, &response.counters);
}

pub fn display_counters(enemy_name: &str, counters: &[CounterEntry]) {
    println!(
        "\n{}",
        format!("🛡️  Counter picks against {}", enemy_name).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if counters.is_empty() {
        println!("{}", "No other champions share this role".yellow());
        return;
    }

    let rows: Vec<CounterRow> = counters
        .iter()
        .enumerate()
        .map(|(idx, counter)| CounterRow {
            rank: format!("#{}", idx + 1),
            champion: counter.name.clone(),
            rating: format!("{}/10", counter.rating),
            reason: counter.reason.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champions(champions: &[&ChampionProfile]) {
    if champions.is_empty() {
        println!("{}", "No champions match".yellow());
        return;
    }

    let rows: Vec<ChampionRow> = champions
        .iter()
        .map(|c| ChampionRow {
            id: c.id.clone(),
            name: c.name.clone(),
            role: c.role.to_string(),
            class: c.class.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("{} champions", champions.len());
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}
