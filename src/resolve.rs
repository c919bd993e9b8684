use thiserror::Error;

use crate::stats_api::RosterEntry;

/// Why a name could not be resolved. The two cases get different user
/// messages: an empty roster means the directory was unavailable, a miss
/// means the extracted name matched nobody.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("player list is empty or unavailable")]
    EmptyRoster,
    #[error("no player found with the name '{query}'")]
    NoMatch { query: String },
}

/// Resolve a free-text name against the roster.
///
/// The query comes from an image-recognition step and may carry extra
/// words, so matching is case-insensitive substring containment rather
/// than exact equality. The first match in roster order wins.
pub fn resolve_player(roster: &[RosterEntry], query: &str) -> Result<u64, ResolveError> {
    if roster.is_empty() {
        return Err(ResolveError::EmptyRoster);
    }
    let needle = query.trim().to_lowercase();
    roster
        .iter()
        .find(|entry| entry.full_name.to_lowercase().contains(&needle))
        .map(|entry| entry.id)
        .ok_or_else(|| ResolveError::NoMatch {
            query: query.trim().to_string(),
        })
}
