use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::events_store::EventStore;
use crate::flatten::flatten_stat_groups;
use crate::i18n::Language;
use crate::resolve::resolve_player;
use crate::state::AnalysisOutcome;
use crate::stats_api::{StatsApiConfig, fetch_player_detail, fetch_player_stats, fetch_roster};
use crate::summary::{PlayerBio, attribute_rows, prose_summary};
use crate::vision::{VisionConfig, extract_player_name, image_mime};

/// Inputs for one Analyze action. The caller has already checked that
/// email and image path are non-empty.
pub struct AnalysisRequest<'a> {
    pub image_path: &'a Path,
    pub email: &'a str,
    pub language: Language,
}

/// Run the whole pipeline synchronously: image → name → roster → resolve
/// → detail → stats → localized display artifacts.
///
/// Any stage fault aborts this action only; `warnings` collects non-fatal
/// problems (a failed identification write does not stop the analysis).
pub fn run_analysis(
    req: &AnalysisRequest,
    api_cfg: &StatsApiConfig,
    vision_cfg: &VisionConfig,
    store: Option<&EventStore>,
) -> Result<(AnalysisOutcome, Vec<String>)> {
    let mut warnings = Vec::new();

    let mime = image_mime(req.image_path)
        .ok_or_else(|| anyhow!("unsupported image type, use a .jpg/.jpeg/.png file"))?;
    let image = fs::read(req.image_path)
        .with_context(|| format!("failed to read image {}", req.image_path.display()))?;

    let extracted_name = extract_player_name(vision_cfg, &image, mime)
        .context("could not extract a player name from the image")?;

    // Identification event, recorded once recognition succeeded. Best
    // effort: the analysis still proceeds if the store is unavailable.
    match store {
        Some(store) => {
            if let Err(err) =
                store.record_identification(req.email, &extracted_name, req.language)
            {
                warnings.push(format!("[WARN] identification not recorded: {err}"));
            }
        }
        None => warnings.push("[WARN] event store unavailable, identification not recorded".into()),
    }

    let roster = fetch_roster(api_cfg)
        .with_context(|| format!("could not fetch players for the {} season", api_cfg.season))?;
    let player_id = resolve_player(&roster, &extracted_name)?;

    let detail = fetch_player_detail(api_cfg, player_id)
        .with_context(|| format!("could not fetch details for player {player_id}"))?;
    let bio = PlayerBio::from_detail(&detail);

    let stat_groups = fetch_player_stats(api_cfg, player_id, api_cfg.season)
        .with_context(|| format!("could not fetch stats for player {player_id}"))?;

    let outcome = AnalysisOutcome {
        extracted_name,
        attribute_rows: attribute_rows(&bio, req.language),
        prose: prose_summary(&bio, req.language),
        stat_tables: flatten_stat_groups(&stat_groups, req.language),
        season: api_cfg.season,
    };
    Ok((outcome, warnings))
}
