use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten stat axes every champion profile is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    Early,
    Mid,
    Late,
    Sustain,
    Burst,
    Dps,
    Cc,
    Mobility,
    Tankiness,
    Utility,
}

impl StatKey {
    pub const ALL: [StatKey; 10] = [
        StatKey::Early,
        StatKey::Mid,
        StatKey::Late,
        StatKey::Sustain,
        StatKey::Burst,
        StatKey::Dps,
        StatKey::Cc,
        StatKey::Mobility,
        StatKey::Tankiness,
        StatKey::Utility,
    ];

    /// Weight of this stat in the overall rating. The weights sum to 1.05.
    pub fn weight(self) -> f64 {
        match self {
            StatKey::Early => 0.12,
            StatKey::Mid => 0.12,
            StatKey::Late => 0.10,
            StatKey::Sustain => 0.08,
            StatKey::Burst => 0.10,
            StatKey::Dps => 0.10,
            StatKey::Cc => 0.08,
            StatKey::Mobility => 0.10,
            StatKey::Tankiness => 0.10,
            StatKey::Utility => 0.05,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            StatKey::Early => "early",
            StatKey::Mid => "mid",
            StatKey::Late => "late",
            StatKey::Sustain => "sustain",
            StatKey::Burst => "burst",
            StatKey::Dps => "dps",
            StatKey::Cc => "cc",
            StatKey::Mobility => "mobility",
            StatKey::Tankiness => "tankiness",
            StatKey::Utility => "utility",
        }
    }

    /// Presentation label used inside narrative sentences.
    pub fn label(self) -> &'static str {
        match self {
            StatKey::Early => "early game",
            StatKey::Mid => "mid game",
            StatKey::Late => "late game",
            StatKey::Sustain => "sustain",
            StatKey::Burst => "burst",
            StatKey::Dps => "sustained damage",
            StatKey::Cc => "CC",
            StatKey::Mobility => "mobility",
            StatKey::Tankiness => "tankiness",
            StatKey::Utility => "utility",
        }
    }
}

/// Stat block on a 1-10 scale. All ten keys are required on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionStats {
    pub early: u8,
    pub mid: u8,
    pub late: u8,
    pub sustain: u8,
    pub burst: u8,
    pub dps: u8,
    pub cc: u8,
    pub mobility: u8,
    pub tankiness: u8,
    pub utility: u8,
}

impl ChampionStats {
    pub fn uniform(value: u8) -> Self {
        ChampionStats {
            early: value,
            mid: value,
            late: value,
            sustain: value,
            burst: value,
            dps: value,
            cc: value,
            mobility: value,
            tankiness: value,
            utility: value,
        }
    }

    pub fn get(&self, key: StatKey) -> u8 {
        match key {
            StatKey::Early => self.early,
            StatKey::Mid => self.mid,
            StatKey::Late => self.late,
            StatKey::Sustain => self.sustain,
            StatKey::Burst => self.burst,
            StatKey::Dps => self.dps,
            StatKey::Cc => self.cc,
            StatKey::Mobility => self.mobility,
            StatKey::Tankiness => self.tankiness,
            StatKey::Utility => self.utility,
        }
    }

    /// `self[key] - other[key]`, signed.
    pub fn diff(&self, other: &ChampionStats, key: StatKey) -> i32 {
        i32::from(self.get(key)) - i32::from(other.get(key))
    }

    /// Keys whose value falls outside the intended 1-10 range.
    pub fn out_of_range(&self) -> Vec<StatKey> {
        StatKey::ALL
            .iter()
            .copied()
            .filter(|k| !(1..=10).contains(&self.get(*k)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    #[serde(alias = "middle")]
    Mid,
    #[serde(alias = "bot", alias = "bottom")]
    Adc,
    #[serde(alias = "utility")]
    Support,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Role::Top),
            "jungle" => Ok(Role::Jungle),
            "mid" | "middle" => Ok(Role::Mid),
            "adc" | "bot" | "bottom" => Ok(Role::Adc),
            "support" | "utility" => Ok(Role::Support),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    #[serde(rename = "AD", alias = "ad")]
    Ad,
    #[serde(rename = "AP", alias = "ap")]
    Ap,
    #[serde(rename = "Hybrid", alias = "hybrid")]
    Hybrid,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    #[serde(alias = "원거리", alias = "Ranged")]
    Ranged,
    #[serde(alias = "근접", alias = "Melee")]
    Melee,
}

/// Static profile of one champion, as shipped in `champions.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionProfile {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(rename = "type", default)]
    pub class: String,
    pub damage_type: DamageType,
    pub range_type: RangeType,
    pub stats: ChampionStats,
    #[serde(default)]
    pub good_against: Vec<String>,
    #[serde(default)]
    pub counters: Vec<String>,
    #[serde(default)]
    pub power_spikes: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

impl ChampionProfile {
    pub fn is_good_against(&self, champion_id: &str) -> bool {
        self.good_against.iter().any(|id| id == champion_id)
    }

    pub fn is_countered_by(&self, champion_id: &str) -> bool {
        self.counters.iter().any(|id| id == champion_id)
    }

    pub fn is_ranged(&self) -> bool {
        self.range_type == RangeType::Ranged
    }

    pub fn is_melee(&self) -> bool {
        self.range_type == RangeType::Melee
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Early,
    Mid,
    Late,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Early, Phase::Mid, Phase::Late];

    pub fn stat_key(self) -> StatKey {
        match self {
            Phase::Early => StatKey::Early,
            Phase::Mid => StatKey::Mid,
            Phase::Late => StatKey::Late,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Early => "early game",
            Phase::Mid => "mid game",
            Phase::Late => "late game",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseAnalysis {
    pub rating: i32,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phases {
    pub early: PhaseAnalysis,
    pub mid: PhaseAnalysis,
    pub late: PhaseAnalysis,
}

impl Phases {
    pub fn get(&self, phase: Phase) -> &PhaseAnalysis {
        match phase {
            Phase::Early => &self.early,
            Phase::Mid => &self.mid,
            Phase::Late => &self.late,
        }
    }
}

/// Full matchup verdict, either generated or taken from the override table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupResult {
    pub rating: i32,
    pub summary: String,
    pub phases: Phases,
    pub tips: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterEntry {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub rating: i32,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_accepts_korean_range_labels() {
        let json = r#"{
            "id": "garen", "name": "Garen", "role": "top", "type": "Fighter",
            "damageType": "AD", "rangeType": "근접",
            "stats": {"early": 6, "mid": 6, "late": 5, "sustain": 7, "burst": 6,
                      "dps": 6, "cc": 4, "mobility": 4, "tankiness": 8, "utility": 3}
        }"#;
        let profile: ChampionProfile = serde_json::from_str(json).unwrap();
        assert!(profile.is_melee());
        assert_eq!(profile.damage_type, DamageType::Ad);
        assert!(profile.good_against.is_empty());
    }

    #[test]
    fn missing_stat_key_is_rejected() {
        let json = r#"{
            "id": "ahri", "name": "Ahri", "role": "mid",
            "damageType": "AP", "rangeType": "ranged",
            "stats": {"early": 6, "mid": 7}
        }"#;
        assert!(serde_json::from_str::<ChampionProfile>(json).is_err());
    }

    #[test]
    fn stat_diff_is_signed() {
        let mut a = ChampionStats::uniform(5);
        a.burst = 9;
        let b = ChampionStats::uniform(7);
        assert_eq!(a.diff(&b, StatKey::Burst), 2);
        assert_eq!(a.diff(&b, StatKey::Early), -2);
    }

    #[test]
    fn role_parses_aliases() {
        assert_eq!("Bottom".parse::<Role>().unwrap(), Role::Adc);
        assert!("feeder".parse::<Role>().is_err());
    }
}
