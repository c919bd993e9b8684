use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Display languages offered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    Japanese,
    French,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::Japanese,
        Language::French,
        Language::Chinese,
    ];

    /// Canonical English name, also what gets persisted with events.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Japanese => "Japanese",
            Language::French => "French",
            Language::Chinese => "Chinese",
        }
    }

    pub fn next(self) -> Language {
        let pos = Language::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Language::ALL[(pos + 1) % Language::ALL.len()]
    }

    pub fn prev(self) -> Language {
        let pos = Language::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Language::ALL[(pos + Language::ALL.len() - 1) % Language::ALL.len()]
    }

    fn idx(self) -> usize {
        match self {
            Language::English => 0,
            Language::Spanish => 1,
            Language::Japanese => 2,
            Language::French => 3,
            Language::Chinese => 4,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Columns: [English, Spanish, Japanese, French, Chinese].
static ATTRIBUTE_LABELS: Lazy<HashMap<&'static str, [&'static str; 5]>> = Lazy::new(|| {
    HashMap::from([
        (
            "Full Name",
            ["Full Name", "Nombre Completo", "フルネーム", "Nom Complet", "全名"],
        ),
        (
            "Primary Position",
            [
                "Primary Position",
                "Posición Principal",
                "主なポジション",
                "Position Principale",
                "主要位置",
            ],
        ),
        (
            "Jersey Number",
            [
                "Jersey Number",
                "Número de Camisa",
                "ジャージ番号",
                "Numéro de Maillot",
                "球衣号码",
            ],
        ),
        (
            "Birth Date",
            [
                "Birth Date",
                "Fecha de Nacimiento",
                "生年月日",
                "Date de Naissance",
                "出生日期",
            ],
        ),
        (
            "Current Age",
            ["Current Age", "Edad Actual", "現在の年齢", "Âge Actuel", "当前年龄"],
        ),
        (
            "Birthplace",
            [
                "Birthplace",
                "Lugar de Nacimiento",
                "出生地",
                "Lieu de Naissance",
                "出生地",
            ],
        ),
        ("Height", ["Height", "Altura", "身長", "Taille", "身高"]),
        (
            "Weight (lbs)",
            [
                "Weight (lbs)",
                "Peso (lbs)",
                "体重 (ポンド)",
                "Poids (lbs)",
                "体重 (磅)",
            ],
        ),
        (
            "Active Player",
            [
                "Active Player",
                "Jugador Activo",
                "現役選手",
                "Joueur Actif",
                "现役球员",
            ],
        ),
        (
            "MLB Debut Date",
            [
                "MLB Debut Date",
                "Fecha del Debut en MLB",
                "MLB デビュー日",
                "Date des Débuts en MLB",
                "MLB 首秀日期",
            ],
        ),
        ("Bats", ["Bats", "Batea", "打撃", "Bats", "打击"]),
        ("Throws", ["Throws", "Lanza", "投げる", "Lance", "投掷"]),
        ("Nickname", ["Nickname", "Apodo", "ニックネーム", "Surnom", "昵称"]),
    ])
});

// Columns: [Spanish, Japanese, French, Chinese]. English is the canonical
// key itself, so it is not stored.
static STAT_LABELS: Lazy<HashMap<&'static str, [&'static str; 4]>> = Lazy::new(|| {
    HashMap::from([
        ("Stat", ["Estadística", "スタッツ", "Statistique", "统计"]),
        ("Value", ["Valor", "値", "Valeur", "数值"]),
        ("Team", ["Equipo", "チーム", "Équipe", "球队"]),
        ("Player", ["Jugador", "選手", "Joueur", "球员"]),
        ("League", ["Liga", "リーグ", "Ligue", "联赛"]),
        ("Sport", ["Deporte", "スポーツ", "Sport", "体育"]),
        (
            "Games Played",
            ["Juegos Jugados", "試合数", "Matchs joués", "比赛场次"],
        ),
        (
            "Ground Outs",
            ["Eliminaciones en Tierra", "ゴロアウト", "Retirés au sol", "滚地出局"],
        ),
        (
            "Air Outs",
            ["Eliminaciones por Aire", "フライアウト", "Retirés en l'air", "飞球出局"],
        ),
        ("Runs", ["Carreras", "得点", "Points", "得分"]),
        ("Doubles", ["Dobles", "二塁打", "Doubles", "二垒打"]),
        ("Triples", ["Triples", "三塁打", "Triples", "三垒打"]),
        ("Home Runs", ["Jonrones", "本塁打", "Circuits", "本垒打"]),
        (
            "Strike Outs",
            ["Ponches", "三振", "Retirés sur des prises", "三振出局"],
        ),
        (
            "Base On Balls",
            ["Bases por Bolas", "四球", "But sur balles", "四坏球"],
        ),
        ("Hits", ["Hits", "安打", "Coups sûrs", "安打"]),
        (
            "At Bats",
            ["Turnos al Bate", "打数", "Présences au bâton", "打席"],
        ),
        ("Stolen Bases", ["Bases Robadas", "盗塁", "But volé", "盗垒"]),
        ("RBI", ["Carreras Impulsadas", "打点", "Points produits", "打点"]),
    ])
});

/// Localized label for a player attribute key. Unknown (key, language)
/// pairs fall back to the key itself.
pub fn translate_attribute(key: &str, language: Language) -> &str {
    ATTRIBUTE_LABELS
        .get(key)
        .map(|row| row[language.idx()])
        .unwrap_or(key)
}

/// Localized label for a stat column. English is the canonical key, so it
/// is always identity; unknown keys fall back unchanged.
pub fn translate_stat(key: &str, language: Language) -> &str {
    if language == Language::English {
        return key;
    }
    STAT_LABELS
        .get(key)
        .map(|row| row[language.idx() - 1])
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::{Language, translate_attribute, translate_stat};

    #[test]
    fn attribute_lookup_translates_known_keys() {
        assert_eq!(translate_attribute("Full Name", Language::Spanish), "Nombre Completo");
        assert_eq!(translate_attribute("Birthplace", Language::Japanese), "出生地");
        assert_eq!(translate_attribute("Nickname", Language::English), "Nickname");
    }

    #[test]
    fn attribute_lookup_falls_back_to_key() {
        for lang in Language::ALL {
            assert_eq!(translate_attribute("Shoe Size", lang), "Shoe Size");
        }
    }

    #[test]
    fn stat_header_labels_are_tabulated() {
        assert_eq!(translate_stat("Stat", Language::Spanish), "Estadística");
        assert_eq!(translate_stat("Value", Language::Spanish), "Valor");
        assert_eq!(translate_stat("Stat", Language::English), "Stat");
        assert_eq!(translate_stat("Value", Language::English), "Value");
    }

    #[test]
    fn stat_lookup_is_identity_for_english_and_unknown_keys() {
        assert_eq!(translate_stat("RBI", Language::English), "RBI");
        assert_eq!(translate_stat("xWOBA", Language::French), "xWOBA");
        assert_eq!(translate_stat("Home Runs", Language::Chinese), "本垒打");
    }

    #[test]
    fn language_cycle_covers_all_and_wraps() {
        let mut lang = Language::English;
        for _ in 0..Language::ALL.len() {
            lang = lang.next();
        }
        assert_eq!(lang, Language::English);
        assert_eq!(Language::English.prev(), Language::Chinese);
    }
}
