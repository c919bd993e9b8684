use std::collections::VecDeque;

use crate::flatten::StatTable;
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    ImagePath,
    Email,
}

impl SetupField {
    pub fn next(self) -> SetupField {
        match self {
            SetupField::ImagePath => SetupField::Email,
            SetupField::Email => SetupField::ImagePath,
        }
    }
}

/// Everything one successful Analyze action produces for display.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub extracted_name: String,
    pub attribute_rows: Vec<(String, String)>,
    pub prose: String,
    pub stat_tables: Vec<StatTable>,
    pub season: u16,
}

/// Session-local state. Nothing here outlives the process; a fresh run
/// starts from an empty form.
pub struct AppState {
    pub screen: Screen,
    pub language: Language,
    pub image_path: String,
    pub email: String,
    pub focus: SetupField,
    pub outcome: Option<AnalysisOutcome>,
    pub feedback_enjoyed: Option<bool>,
    pub feedback_updates: bool,
    pub feedback_submitted: bool,
    pub results_scroll: u16,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Setup,
            language: Language::English,
            image_path: String::new(),
            email: String::new(),
            focus: SetupField::ImagePath,
            outcome: None,
            feedback_enjoyed: None,
            feedback_updates: false,
            feedback_submitted: false,
            results_scroll: 0,
            help_overlay: false,
            logs: VecDeque::new(),
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            SetupField::ImagePath => &mut self.image_path,
            SetupField::Email => &mut self.email,
        }
    }
}
