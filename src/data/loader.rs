use super::dataset::{ChampionDataset, MatchupOverrides};
use super::models::{ChampionProfile, MatchupResult};
use crate::error::AppError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub fn load_champions(path: &Path) -> Result<ChampionDataset, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::DataError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_champions(&content)
}

/// Parse a `champions.json` document: an object of `id -> profile`, kept in
/// document order.
pub fn parse_champions(content: &str) -> Result<ChampionDataset, AppError> {
    let raw: Map<String, Value> = serde_json::from_str(content)
        .map_err(|e| AppError::JsonError(format!("Failed to parse champions: {}", e)))?;

    let mut profiles = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let profile: ChampionProfile = serde_json::from_value(value).map_err(|e| {
            AppError::DataError(format!("champion '{}': {}", key, e))
        })?;

        if profile.id != key {
            return Err(AppError::DataError(format!(
                "champion '{}' declares mismatched id '{}'",
                key, profile.id
            )));
        }

        let out_of_range = profile.stats.out_of_range();
        if !out_of_range.is_empty() {
            let keys: Vec<_> = out_of_range.iter().map(|k| k.key()).collect();
            log::warn!(
                "champion '{}' has stats outside 1-10: {}",
                profile.id,
                keys.join(", ")
            );
        }

        profiles.push(profile);
    }

    let dataset = ChampionDataset::from_profiles(profiles)?;
    warn_dangling_references(&dataset);
    Ok(dataset)
}

fn warn_dangling_references(dataset: &ChampionDataset) {
    for champion in dataset.iter() {
        let referenced = champion.good_against.iter().chain(champion.counters.iter());
        for id in referenced.filter(|id| !dataset.contains(id)) {
            log::warn!("champion '{}' references unknown champion '{}'", champion.id, id);
        }
    }
}

/// Load the override table. A missing file is an empty table.
pub fn load_overrides(path: &Path) -> Result<MatchupOverrides, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no matchup overrides at {}", path.display());
            return Ok(MatchupOverrides::default());
        }
        Err(e) => {
            return Err(AppError::DataError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };
    parse_overrides(&content)
}

pub fn parse_overrides(content: &str) -> Result<MatchupOverrides, AppError> {
    let entries: HashMap<String, HashMap<String, MatchupResult>> = serde_json::from_str(content)
        .map_err(|e| AppError::JsonError(format!("Failed to parse matchups: {}", e)))?;
    Ok(MatchupOverrides::new(entries))
}

/// Load both tables from a data directory.
pub fn load_data_dir(dir: &Path) -> Result<(ChampionDataset, MatchupOverrides), AppError> {
    let dataset = load_champions(&dir.join("champions.json"))?;
    let overrides = load_overrides(&dir.join("matchups.json"))?;

    for (my, enemy) in overrides.pairs() {
        if !dataset.contains(my) || !dataset.contains(enemy) {
            log::warn!("override {} vs {} names an unknown champion", my, enemy);
        }
    }

    log::info!(
        "loaded {} champions and {} matchup overrides from {}",
        dataset.len(),
        overrides.len(),
        dir.display()
    );
    Ok((dataset, overrides))
}
