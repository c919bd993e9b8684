use crate::i18n::{Language, translate_stat};
use crate::stats_api::{StatGroup, StatSplit};
use crate::summary::NOT_AVAILABLE;

pub const NO_DATA_SENTINEL: &str = "No data available";

/// Wide column order for one split, before the pivot. The player column is
/// extracted alongside these but dropped before presentation, since the
/// page already names the player.
const SPLIT_COLUMNS: [&str; 7] = [
    "Team",
    "Games Played",
    "Runs",
    "Hits",
    "Home Runs",
    "Stolen Bases",
    "RBI",
];

/// One rendered stat group: capitalized labels plus a tall two-column
/// (stat, value) table with localized stat names and headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTable {
    pub group: String,
    pub kind: String,
    pub stat_header: String,
    pub value_header: String,
    pub rows: Vec<(String, String)>,
}

/// One split flattened to display strings, still in wide shape.
#[derive(Debug, Clone)]
struct FlatSplit {
    player: String,
    values: Vec<String>,
}

pub fn flatten_stat_groups(groups: &[StatGroup], language: Language) -> Vec<StatTable> {
    groups
        .iter()
        .map(|group| flatten_group(group, language))
        .collect()
}

fn flatten_group(group: &StatGroup, language: Language) -> StatTable {
    let rows = if group.splits.is_empty() {
        vec![(
            translate_stat(NO_DATA_SENTINEL, language).to_string(),
            NOT_AVAILABLE.to_string(),
        )]
    } else {
        let mut rows = Vec::new();
        for split in &group.splits {
            // The player column is extracted but never presented.
            let FlatSplit { player: _, values } = flatten_split(split);
            for (column, value) in SPLIT_COLUMNS.iter().zip(values) {
                rows.push((translate_stat(column, language).to_string(), value));
            }
        }
        rows
    };

    StatTable {
        group: capitalize(label_of(group.group.as_ref())),
        kind: capitalize(label_of(group.kind.as_ref())),
        stat_header: translate_stat("Stat", language).to_string(),
        value_header: translate_stat("Value", language).to_string(),
        rows,
    }
}

fn flatten_split(split: &StatSplit) -> FlatSplit {
    let team = split
        .team
        .as_ref()
        .and_then(|t| t.name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let player = split
        .player
        .as_ref()
        .and_then(|p| p.full_name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let stat = split.stat.clone().unwrap_or_default();

    let values = vec![
        team,
        counter(stat.games_played),
        counter(stat.runs),
        counter(stat.hits),
        counter(stat.home_runs),
        counter(stat.stolen_bases),
        counter(stat.rbi),
    ];
    FlatSplit { player, values }
}

fn counter(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn label_of(label: Option<&crate::stats_api::LabelRef>) -> &str {
    label
        .and_then(|l| l.display_name.as_deref())
        .unwrap_or(NOT_AVAILABLE)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{capitalize, flatten_stat_groups};
    use crate::i18n::Language;
    use crate::stats_api::{LabelRef, NamedRef, PlayerRef, StatGroup, StatLine, StatSplit};

    fn hitting_group(splits: Vec<StatSplit>) -> StatGroup {
        StatGroup {
            group: Some(LabelRef {
                display_name: Some("hitting".to_string()),
            }),
            kind: Some(LabelRef {
                display_name: Some("season".to_string()),
            }),
            splits,
        }
    }

    fn full_split() -> StatSplit {
        StatSplit {
            team: Some(NamedRef {
                name: Some("New York Yankees".to_string()),
            }),
            player: Some(PlayerRef {
                full_name: Some("Aaron Judge".to_string()),
            }),
            stat: Some(StatLine {
                games_played: Some(158),
                runs: Some(122),
                hits: Some(180),
                home_runs: Some(58),
                stolen_bases: Some(10),
                rbi: Some(144),
            }),
        }
    }

    #[test]
    fn counters_round_trip_through_the_pivot() {
        let tables = flatten_stat_groups(&[hitting_group(vec![full_split()])], Language::English);
        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.group, "Hitting");
        assert_eq!(table.kind, "Season");
        assert_eq!(table.stat_header, "Stat");
        assert_eq!(table.value_header, "Value");

        let expect = [
            ("Team", "New York Yankees"),
            ("Games Played", "158"),
            ("Runs", "122"),
            ("Hits", "180"),
            ("Home Runs", "58"),
            ("Stolen Bases", "10"),
            ("RBI", "144"),
        ];
        assert_eq!(table.rows.len(), expect.len());
        for ((stat, value), (want_stat, want_value)) in table.rows.iter().zip(expect) {
            assert_eq!(stat, want_stat);
            assert_eq!(value, want_value);
        }
    }

    #[test]
    fn player_column_is_not_presented() {
        let tables = flatten_stat_groups(&[hitting_group(vec![full_split()])], Language::English);
        assert!(tables[0].rows.iter().all(|(stat, _)| stat != "Player"));
        assert!(
            tables[0]
                .rows
                .iter()
                .all(|(_, value)| value != "Aaron Judge")
        );
    }

    #[test]
    fn stat_names_and_headers_are_localized() {
        let tables = flatten_stat_groups(&[hitting_group(vec![full_split()])], Language::Spanish);
        let table = &tables[0];
        assert_eq!(table.stat_header, "Estadística");
        assert_eq!(table.value_header, "Valor");
        assert_eq!(table.rows[0].0, "Equipo");
        assert_eq!(table.rows[4].0, "Jonrones");
    }

    #[test]
    fn empty_splits_yield_a_sentinel_row() {
        let tables = flatten_stat_groups(&[hitting_group(Vec::new())], Language::English);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[0].rows[0].0, "No data available");
    }

    #[test]
    fn absent_counters_become_placeholders() {
        let split = StatSplit {
            team: None,
            player: None,
            stat: Some(StatLine {
                hits: Some(42),
                ..StatLine::default()
            }),
        };
        let tables = flatten_stat_groups(&[hitting_group(vec![split])], Language::English);
        let rows = &tables[0].rows;
        assert_eq!(rows[0], ("Team".to_string(), "N/A".to_string()));
        assert_eq!(rows[3], ("Hits".to_string(), "42".to_string()));
        assert_eq!(rows[6], ("RBI".to_string(), "N/A".to_string()));
    }

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("hitting"), "Hitting");
        assert_eq!(capitalize("SEASON"), "Season");
        assert_eq!(capitalize(""), "");
    }
}
