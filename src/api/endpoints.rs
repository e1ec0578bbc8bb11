// Data Dragon CDN endpoints

pub const DATA_DRAGON_VERSIONS_ENDPOINT: &str =
    "https://ddragon.leagueoflegends.com/api/versions.json";

/// Patch used for champion icons when nothing better is known.
pub const DEFAULT_DDRAGON_VERSION: &str = "14.19.1";

pub fn champion_icon_base(version: &str) -> String {
    format!(
        "https://ddragon.leagueoflegends.com/cdn/{}/img/champion/",
        version
    )
}
