use super::models::{ChampionProfile, MatchupResult, Role};
use crate::error::AppError;
use std::collections::HashMap;

/// Read-only champion table. Iteration order is the order the champions were
/// loaded in, which is also the tie order of counter suggestions.
#[derive(Debug, Clone, Default)]
pub struct ChampionDataset {
    champions: Vec<ChampionProfile>,
    index: HashMap<String, usize>,
}

impl ChampionDataset {
    pub fn from_profiles(champions: Vec<ChampionProfile>) -> Result<Self, AppError> {
        let mut index = HashMap::with_capacity(champions.len());
        for (pos, champion) in champions.iter().enumerate() {
            if index.insert(champion.id.clone(), pos).is_some() {
                return Err(AppError::DataError(format!(
                    "duplicate champion id '{}'",
                    champion.id
                )));
            }
        }
        Ok(ChampionDataset { champions, index })
    }

    pub fn get(&self, id: &str) -> Option<&ChampionProfile> {
        self.index.get(id).map(|&pos| &self.champions[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChampionProfile> {
        self.champions.iter()
    }

    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &ChampionProfile> {
        self.champions.iter().filter(move |c| c.role == role)
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

/// Curated matchup results keyed by `(my_id, enemy_id)`.
#[derive(Debug, Clone, Default)]
pub struct MatchupOverrides {
    entries: HashMap<String, HashMap<String, MatchupResult>>,
}

impl MatchupOverrides {
    pub fn new(entries: HashMap<String, HashMap<String, MatchupResult>>) -> Self {
        MatchupOverrides { entries }
    }

    pub fn get(&self, my_id: &str, enemy_id: &str) -> Option<&MatchupResult> {
        self.entries.get(my_id).and_then(|row| row.get(enemy_id))
    }

    /// Number of curated pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(my, row)| {
            row.keys().map(move |enemy| (my.as_str(), enemy.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::champion;

    #[test]
    fn keeps_insertion_order() {
        let dataset = ChampionDataset::from_profiles(vec![
            champion("zed", Role::Mid),
            champion("ahri", Role::Mid),
            champion("garen", Role::Top),
        ])
        .unwrap();

        let ids: Vec<_> = dataset.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["zed", "ahri", "garen"]);

        let mids: Vec<_> = dataset.by_role(Role::Mid).map(|c| c.id.as_str()).collect();
        assert_eq!(mids, vec!["zed", "ahri"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ChampionDataset::from_profiles(vec![
            champion("zed", Role::Mid),
            champion("zed", Role::Mid),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("zed"));
    }

    #[test]
    fn empty_overrides_have_no_pairs() {
        let overrides = MatchupOverrides::default();
        assert!(overrides.is_empty());
        assert!(overrides.get("zed", "ahri").is_none());
    }
}
