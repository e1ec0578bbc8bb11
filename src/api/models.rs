use crate::data::models::{ChampionProfile, CounterEntry, MatchupResult, Role};
use serde::{Deserialize, Serialize};

// Matchup response consumed by the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupResponse {
    pub my_champ: ChampionRef,
    pub enemy_champ: ChampionRef,
    pub matchup: MatchupResult,
    pub counters: Vec<CounterEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionRef {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl From<&ChampionProfile> for ChampionRef {
    fn from(profile: &ChampionProfile) -> Self {
        ChampionRef {
            id: profile.id.clone(),
            name: profile.name.clone(),
            role: profile.role,
        }
    }
}

// Entry of GET /api/champions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionListItem {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(rename = "type")]
    pub class: String,
}

impl From<&ChampionProfile> for ChampionListItem {
    fn from(profile: &ChampionProfile) -> Self {
        ChampionListItem {
            id: profile.id.clone(),
            name: profile.name.clone(),
            role: profile.role,
            class: profile.class.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    pub ddragon_version: String,
    pub icon_base: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// Data Dragon versions.json: newest patch first
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct DataDragonVersions(pub Vec<String>);
