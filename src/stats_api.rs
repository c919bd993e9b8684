use std::env;

use serde::Deserialize;
use thiserror::Error;

use crate::http_client::http_client;

pub const DEFAULT_API_BASE: &str = "https://statsapi.mlb.com/api/v1";
pub const DEFAULT_SEASON: u16 = 2024;

/// Directory service settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct StatsApiConfig {
    pub base: String,
    pub season: u16,
}

impl StatsApiConfig {
    pub fn from_env() -> Self {
        let base = env::var("MLB_API_BASE")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let season = env::var("MLB_SEASON")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_SEASON);
        Self { base, season }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("http {status}: {snippet}")]
    Http {
        status: reqwest::StatusCode,
        snippet: String,
    },
    #[error("invalid response json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("response contained no player record")]
    MissingRecord,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: u64,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribedRef {
    #[serde(default)]
    pub description: Option<String>,
}

/// One player record from `/people/{id}`. Every field the directory may
/// omit stays optional here; normalization into display strings happens
/// once, in `summary::PlayerBio`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerDetail {
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "primaryPosition", default)]
    pub primary_position: Option<NamedRef>,
    #[serde(rename = "primaryNumber", default)]
    pub primary_number: Option<String>,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "currentAge", default)]
    pub current_age: Option<u32>,
    #[serde(rename = "birthCity", default)]
    pub birth_city: Option<String>,
    #[serde(rename = "birthStateProvince", default)]
    pub birth_state_province: Option<String>,
    #[serde(rename = "birthCountry", default)]
    pub birth_country: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "mlbDebutDate", default)]
    pub mlb_debut_date: Option<String>,
    #[serde(rename = "batSide", default)]
    pub bat_side: Option<DescribedRef>,
    #[serde(rename = "pitchHand", default)]
    pub pitch_hand: Option<DescribedRef>,
    #[serde(rename = "nickName", default)]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelRef {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerRef {
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
}

/// Nested counters inside one stat split. Any counter may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatLine {
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: Option<i64>,
    #[serde(default)]
    pub runs: Option<i64>,
    #[serde(default)]
    pub hits: Option<i64>,
    #[serde(rename = "homeRuns", default)]
    pub home_runs: Option<i64>,
    #[serde(rename = "stolenBases", default)]
    pub stolen_bases: Option<i64>,
    #[serde(default)]
    pub rbi: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatSplit {
    #[serde(default)]
    pub team: Option<NamedRef>,
    #[serde(default)]
    pub player: Option<PlayerRef>,
    #[serde(default)]
    pub stat: Option<StatLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatGroup {
    #[serde(default)]
    pub group: Option<LabelRef>,
    #[serde(rename = "type", default)]
    pub kind: Option<LabelRef>,
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

#[derive(Debug, Deserialize)]
struct PeopleEnvelope<T> {
    #[serde(default)]
    people: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
struct StatsPerson {
    #[serde(default)]
    stats: Vec<StatGroup>,
}

/// Full roster snapshot for one season.
pub fn fetch_roster(cfg: &StatsApiConfig) -> Result<Vec<RosterEntry>, ApiError> {
    let url = format!("{}/sports/1/players?season={}", cfg.base, cfg.season);
    let body = get_text(&url)?;
    parse_roster_json(&body)
}

/// Biographical record for one player id.
pub fn fetch_player_detail(cfg: &StatsApiConfig, id: u64) -> Result<PlayerDetail, ApiError> {
    let url = format!("{}/people/{}/", cfg.base, id);
    let body = get_text(&url)?;
    parse_player_detail_json(&body)
}

/// Hitting stat groups for one player and season, via the stats hydrate.
pub fn fetch_player_stats(
    cfg: &StatsApiConfig,
    id: u64,
    season: u16,
) -> Result<Vec<StatGroup>, ApiError> {
    let hydrate = format!("stats(group=[hitting],type=season,season={season})");
    let url = format!(
        "{}/people/{}?season={}&hydrate={}",
        cfg.base, id, season, hydrate
    );
    let body = get_text(&url)?;
    parse_player_stats_json(&body)
}

pub fn parse_roster_json(raw: &str) -> Result<Vec<RosterEntry>, ApiError> {
    let envelope: PeopleEnvelope<RosterEntry> = serde_json::from_str(raw)?;
    Ok(envelope.people)
}

pub fn parse_player_detail_json(raw: &str) -> Result<PlayerDetail, ApiError> {
    let mut envelope: PeopleEnvelope<PlayerDetail> = serde_json::from_str(raw)?;
    if envelope.people.is_empty() {
        return Err(ApiError::MissingRecord);
    }
    Ok(envelope.people.remove(0))
}

pub fn parse_player_stats_json(raw: &str) -> Result<Vec<StatGroup>, ApiError> {
    let mut envelope: PeopleEnvelope<StatsPerson> = serde_json::from_str(raw)?;
    if envelope.people.is_empty() {
        return Ok(Vec::new());
    }
    Ok(envelope.people.remove(0).stats)
}

fn get_text(url: &str) -> Result<String, ApiError> {
    let client = http_client()?;
    let resp = client.get(url).send()?;
    let status = resp.status();
    let body = resp.text()?;
    if !status.is_success() {
        return Err(ApiError::Http {
            status,
            snippet: body_snippet(&body),
        });
    }
    Ok(body)
}

fn body_snippet(body: &str) -> String {
    body.trim()
        .replace('\n', " ")
        .replace('\r', " ")
        .chars()
        .take(220)
        .collect()
}
