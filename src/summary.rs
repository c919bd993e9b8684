use crate::i18n::{Language, translate_attribute};
use crate::stats_api::PlayerDetail;

pub const NOT_AVAILABLE: &str = "N/A";

/// Fixed display order of the attribute table.
pub const ATTRIBUTE_ORDER: [&str; 13] = [
    "Full Name",
    "Primary Position",
    "Jersey Number",
    "Birth Date",
    "Current Age",
    "Birthplace",
    "Height",
    "Weight (lbs)",
    "Active Player",
    "MLB Debut Date",
    "Bats",
    "Throws",
    "Nickname",
];

/// Player detail normalized for display. Missing directory fields become
/// the `N/A` sentinel here, exactly once; everything downstream treats
/// these strings as final values. Active status stays a bool so the prose
/// templates can phrase it per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerBio {
    pub full_name: String,
    pub primary_position: String,
    pub jersey_number: String,
    pub birth_date: String,
    pub current_age: String,
    pub birthplace: String,
    pub height: String,
    pub weight: String,
    pub active: bool,
    pub mlb_debut_date: String,
    pub bats: String,
    pub throws: String,
    pub nickname: String,
}

impl PlayerBio {
    pub fn from_detail(detail: &PlayerDetail) -> Self {
        let city = na_opt(detail.birth_city.as_deref());
        let state = na_opt(detail.birth_state_province.as_deref());
        let country = na_opt(detail.birth_country.as_deref());
        Self {
            full_name: na_opt(detail.full_name.as_deref()),
            primary_position: na_opt(
                detail
                    .primary_position
                    .as_ref()
                    .and_then(|p| p.name.as_deref()),
            ),
            jersey_number: na_opt(detail.primary_number.as_deref()),
            birth_date: na_opt(detail.birth_date.as_deref()),
            current_age: detail
                .current_age
                .map(|age| age.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            birthplace: format!("{city}, {state}, {country}"),
            height: na_opt(detail.height.as_deref()),
            weight: detail
                .weight
                .map(|w| w.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            active: detail.active,
            mlb_debut_date: na_opt(detail.mlb_debut_date.as_deref()),
            bats: na_opt(detail.bat_side.as_ref().and_then(|b| b.description.as_deref())),
            throws: na_opt(
                detail
                    .pitch_hand
                    .as_ref()
                    .and_then(|p| p.description.as_deref()),
            ),
            nickname: na_opt(detail.nickname.as_deref()),
        }
    }

    /// English Yes/No string shown in the attribute table value column.
    pub fn active_label(&self) -> &'static str {
        if self.active { "Yes" } else { "No" }
    }

    fn value_for(&self, key: &str) -> String {
        match key {
            "Full Name" => self.full_name.clone(),
            "Primary Position" => self.primary_position.clone(),
            "Jersey Number" => self.jersey_number.clone(),
            "Birth Date" => self.birth_date.clone(),
            "Current Age" => self.current_age.clone(),
            "Birthplace" => self.birthplace.clone(),
            "Height" => self.height.clone(),
            "Weight (lbs)" => self.weight.clone(),
            "Active Player" => self.active_label().to_string(),
            "MLB Debut Date" => self.mlb_debut_date.clone(),
            "Bats" => self.bats.clone(),
            "Throws" => self.throws.clone(),
            "Nickname" => self.nickname.clone(),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}

fn na_opt(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Ordered (Attribute, Value) rows. Only the attribute labels are
/// localized; values pass through untouched.
pub fn attribute_rows(bio: &PlayerBio, language: Language) -> Vec<(String, String)> {
    ATTRIBUTE_ORDER
        .iter()
        .map(|key| {
            (
                translate_attribute(key, language).to_string(),
                bio.value_for(key),
            )
        })
        .collect()
}

/// Prose biography paragraph in the selected language. Raw attribute
/// values are interpolated as-is; only the active/retired phrase is
/// worded per language, from the boolean.
pub fn prose_summary(bio: &PlayerBio, language: Language) -> String {
    match language {
        Language::Spanish => summary_spanish(bio),
        Language::Japanese => summary_japanese(bio),
        Language::French => summary_french(bio),
        Language::Chinese => summary_chinese(bio),
        Language::English => summary_english(bio),
    }
}

fn summary_english(bio: &PlayerBio) -> String {
    let status = if bio.active { "active" } else { "inactive" };
    format!(
        "{}, also known as \"{}\", is a {} wearing jersey number {}. \
Born on {} in {}, they are currently {} years old. Standing at {} and \
weighing {} lbs, they bat {} and throw {}. This player made their MLB \
debut on {} and is currently {} in the league.",
        bio.full_name,
        bio.nickname,
        bio.primary_position,
        bio.jersey_number,
        bio.birth_date,
        bio.birthplace,
        bio.current_age,
        bio.height,
        bio.weight,
        bio.bats,
        bio.throws,
        bio.mlb_debut_date,
        status,
    )
}

fn summary_spanish(bio: &PlayerBio) -> String {
    let status = if bio.active { "activo" } else { "inactivo" };
    format!(
        "{}, conocido como \"{}\", es un {} que usa el número de camiseta {}. \
Nació el {} en {}, y actualmente tiene {} años. Mide {} y pesa {} lbs, \
batea como {} y lanza como {}. Este jugador hizo su debut en MLB el {} \
y actualmente está {} en la liga.",
        bio.full_name,
        bio.nickname,
        bio.primary_position,
        bio.jersey_number,
        bio.birth_date,
        bio.birthplace,
        bio.current_age,
        bio.height,
        bio.weight,
        bio.bats,
        bio.throws,
        bio.mlb_debut_date,
        status,
    )
}

fn summary_japanese(bio: &PlayerBio) -> String {
    let status = if bio.active { "現役" } else { "引退" };
    format!(
        "{}、ニックネームは\"{}\"、ポジションは{}で背番号は{}です。\
{}に生まれ、{}出身で、現在の年齢は{}歳です。\
身長は{}、体重は{} lbs、打席は{}、投げる手は{}です。\
この選手は{}にメジャーデビューし、現在{}しています。",
        bio.full_name,
        bio.nickname,
        bio.primary_position,
        bio.jersey_number,
        bio.birth_date,
        bio.birthplace,
        bio.current_age,
        bio.height,
        bio.weight,
        bio.bats,
        bio.throws,
        bio.mlb_debut_date,
        status,
    )
}

fn summary_french(bio: &PlayerBio) -> String {
    let status = if bio.active { "actif" } else { "inactif" };
    format!(
        "{}, surnommé \"{}\", est un joueur de {} avec le numéro de maillot {}. \
Né le {} à {}, il a actuellement {} ans. Il mesure {} et pèse {} lbs, \
il frappe en {} et lance avec {}. Ce joueur a fait ses débuts en MLB \
le {} et il est actuellement {} dans la ligue.",
        bio.full_name,
        bio.nickname,
        bio.primary_position,
        bio.jersey_number,
        bio.birth_date,
        bio.birthplace,
        bio.current_age,
        bio.height,
        bio.weight,
        bio.bats,
        bio.throws,
        bio.mlb_debut_date,
        status,
    )
}

fn summary_chinese(bio: &PlayerBio) -> String {
    let status = if bio.active { "活跃" } else { "非活跃" };
    format!(
        "{}，昵称为\"{}\"，是一名{}球员，背号为{}。\
他于{}出生在{}，现年{}岁。他身高{}，体重{}磅，\
打击习惯为{}，投球习惯为{}。这位球员在{}完成了他的MLB首秀，\
他目前在联盟中是{}状态。",
        bio.full_name,
        bio.nickname,
        bio.primary_position,
        bio.jersey_number,
        bio.birth_date,
        bio.birthplace,
        bio.current_age,
        bio.height,
        bio.weight,
        bio.bats,
        bio.throws,
        bio.mlb_debut_date,
        status,
    )
}
