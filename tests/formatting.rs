//! Fixture-driven checks of the full transformation slice: detail payload
//! to localized attribute table and prose, stats payload to pivoted
//! two-column tables.

use std::fs;
use std::path::PathBuf;

use statshot_terminal::flatten::flatten_stat_groups;
use statshot_terminal::i18n::Language;
use statshot_terminal::resolve::resolve_player;
use statshot_terminal::stats_api::{
    parse_player_detail_json, parse_player_stats_json, parse_roster_json,
};
use statshot_terminal::summary::{PlayerBio, attribute_rows, prose_summary};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn case_mismatched_extracted_name_resolves_against_roster_fixture() {
    let roster = parse_roster_json(&read_fixture("roster.json")).expect("parse");
    assert_eq!(resolve_player(&roster, "aaron judge"), Ok(592450));
    assert_eq!(resolve_player(&roster, "OHTANI"), Ok(660271));
}

#[test]
fn detail_fixture_formats_into_thirteen_localized_rows() {
    let detail = parse_player_detail_json(&read_fixture("player_detail.json")).expect("parse");
    let bio = PlayerBio::from_detail(&detail);
    assert_eq!(bio.birthplace, "Linden, CA, USA");

    let rows = attribute_rows(&bio, Language::French);
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0], ("Nom Complet".to_string(), "Aaron Judge".to_string()));
    assert_eq!(
        rows[5],
        ("Lieu de Naissance".to_string(), "Linden, CA, USA".to_string())
    );
    // Values stay untranslated, including the Yes/No active string.
    assert_eq!(rows[8], ("Joueur Actif".to_string(), "Yes".to_string()));
}

#[test]
fn sparse_detail_formats_without_fault() {
    let detail =
        parse_player_detail_json(&read_fixture("player_detail_sparse.json")).expect("parse");
    let bio = PlayerBio::from_detail(&detail);
    let rows = attribute_rows(&bio, Language::Chinese);
    assert_eq!(rows.len(), 13);
    assert!(rows.iter().any(|(_, v)| v == "N/A, N/A, N/A"));

    let prose = prose_summary(&bio, Language::Chinese);
    assert!(prose.contains("N/A"));
    assert!(prose.contains("非活跃"));
}

#[test]
fn prose_uses_raw_values_in_every_language() {
    let detail = parse_player_detail_json(&read_fixture("player_detail.json")).expect("parse");
    let bio = PlayerBio::from_detail(&detail);
    for lang in Language::ALL {
        let prose = prose_summary(&bio, lang);
        assert!(prose.contains("Aaron Judge"), "{lang}: {prose}");
        assert!(prose.contains("All Rise"), "{lang}: {prose}");
        assert!(prose.contains("2016-08-13"), "{lang}: {prose}");
    }
}

#[test]
fn stats_fixture_flattens_and_recovers_every_counter() {
    let groups = parse_player_stats_json(&read_fixture("player_stats.json")).expect("parse");
    let tables = flatten_stat_groups(&groups, Language::Japanese);
    assert_eq!(tables.len(), 1);
    let table = &tables[0];
    assert_eq!(table.group, "Hitting");
    assert_eq!(table.kind, "Season");
    assert_eq!(table.stat_header, "スタッツ");
    assert_eq!(table.value_header, "値");

    let value_of = |stat: &str| -> &str {
        table
            .rows
            .iter()
            .find(|(name, _)| name == stat)
            .map(|(_, value)| value.as_str())
            .expect("stat row")
    };
    assert_eq!(value_of("チーム"), "New York Yankees");
    assert_eq!(value_of("試合数"), "158");
    assert_eq!(value_of("得点"), "122");
    assert_eq!(value_of("安打"), "180");
    assert_eq!(value_of("本塁打"), "58");
    assert_eq!(value_of("盗塁"), "10");
    assert_eq!(value_of("打点"), "144");
}

#[test]
fn empty_split_fixture_yields_sentinel_table() {
    let groups = parse_player_stats_json(&read_fixture("player_stats_empty.json")).expect("parse");
    let tables = flatten_stat_groups(&groups, Language::English);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows.len(), 1);
    assert_eq!(tables[0].rows[0].0, "No data available");
}
