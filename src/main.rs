use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use statshot_terminal::analysis::{AnalysisRequest, run_analysis};
use statshot_terminal::events_store::{EventStore, default_store_path};
use statshot_terminal::state::{AppState, Screen, SetupField};
use statshot_terminal::stats_api::StatsApiConfig;
use statshot_terminal::vision::VisionConfig;

struct App {
    state: AppState,
    should_quit: bool,
    api_cfg: StatsApiConfig,
    vision_cfg: VisionConfig,
    store: Option<EventStore>,
}

impl App {
    fn new() -> Self {
        let mut state = AppState::new();
        let api_cfg = StatsApiConfig::from_env();
        let vision_cfg = VisionConfig::from_env();
        if vision_cfg.api_key.is_none() {
            state.push_log("[WARN] GOOGLE_API_KEY not set, image analysis will fail");
        }

        let store = match default_store_path() {
            Some(path) => match EventStore::open(&path) {
                Ok(store) => Some(store),
                Err(err) => {
                    state.push_log(format!("[WARN] event store unavailable: {err}"));
                    None
                }
            },
            None => {
                state.push_log("[WARN] no writable data directory, events will not be recorded");
                None
            }
        };

        Self {
            state,
            should_quit: false,
            api_cfg,
            vision_cfg,
            store,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        // Feedback does not depend on a completed analysis.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('f') {
            self.state.screen = Screen::Results;
            return;
        }
        match self.state.screen {
            Screen::Setup => self.on_setup_key(key),
            Screen::Results => self.on_results_key(key),
        }
    }

    fn on_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.state.focus = self.state.focus.next();
            }
            KeyCode::Left => self.state.language = self.state.language.prev(),
            KeyCode::Right => self.state.language = self.state.language.next(),
            KeyCode::Backspace => {
                self.state.focused_value_mut().pop();
            }
            KeyCode::Enter => self.analyze(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.focused_value_mut().push(c);
            }
            _ => {}
        }
    }

    fn on_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') | KeyCode::Esc => {
                self.state.screen = Screen::Setup;
                self.state.help_overlay = false;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.results_scroll = self.state.results_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.results_scroll = self.state.results_scroll.saturating_sub(1);
            }
            KeyCode::Char('y') => self.state.feedback_enjoyed = Some(true),
            KeyCode::Char('n') => self.state.feedback_enjoyed = Some(false),
            KeyCode::Char('u') => self.state.feedback_updates = !self.state.feedback_updates,
            KeyCode::Char('f') => self.submit_feedback(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    /// One synchronous Analyze action. A fault logs a message and leaves
    /// whatever was already on screen untouched.
    fn analyze(&mut self) {
        if self.state.email.trim().is_empty() {
            self.state
                .push_log("[ERROR] Please enter your email before analyzing the image");
            return;
        }
        if self.state.image_path.trim().is_empty() {
            self.state
                .push_log("[ERROR] Please enter the path of a player image");
            return;
        }

        self.state.push_log("[INFO] Analyzing image...");
        let request = AnalysisRequest {
            image_path: Path::new(self.state.image_path.trim()),
            email: self.state.email.trim(),
            language: self.state.language,
        };
        let result = run_analysis(&request, &self.api_cfg, &self.vision_cfg, self.store.as_ref());
        match result {
            Ok((outcome, warnings)) => {
                self.state
                    .push_log(format!("[INFO] Extracted Player Name: {}", outcome.extracted_name));
                for warning in warnings {
                    self.state.push_log(warning);
                }
                self.state.outcome = Some(outcome);
                self.state.feedback_enjoyed = None;
                self.state.feedback_updates = false;
                self.state.feedback_submitted = false;
                self.state.results_scroll = 0;
                self.state.screen = Screen::Results;
            }
            Err(err) => self.state.push_log(format!("[ERROR] {err:#}")),
        }
    }

    /// Feedback flow, independent of the analysis pipeline.
    fn submit_feedback(&mut self) {
        if self.state.feedback_submitted {
            self.state.push_log("[INFO] Feedback already submitted");
            return;
        }
        let Some(enjoyed) = self.state.feedback_enjoyed else {
            self.state
                .push_log("[ERROR] Answer y/n before submitting feedback");
            return;
        };
        if self.state.email.trim().is_empty() {
            self.state
                .push_log("[ERROR] Please enter your email before submitting feedback");
            return;
        }
        let Some(store) = &self.store else {
            self.state
                .push_log("[WARN] Event store unavailable, feedback not recorded");
            return;
        };
        let result = store.record_feedback(
            self.state.email.trim(),
            enjoyed,
            self.state.feedback_updates,
            self.state.language,
        );
        match result {
            Ok(()) => {
                self.state.feedback_submitted = true;
                self.state.push_log("[INFO] Thank you for your feedback!");
            }
            Err(err) => self.state.push_log(format!("[ERROR] feedback not recorded: {err}")),
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Setup => render_setup(frame, chunks[1], &app.state),
        Screen::Results => render_results(frame, chunks[1], &app.state),
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let title = match state.screen {
        Screen::Setup => "SETUP",
        Screen::Results => "RESULTS",
    };
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M");
    format!(
        "  MLB STATSHOT | {} | Language: {} | {}\n  Upload a photo of a current MLB player; jersey and number work best",
        title, state.language, now
    )
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Setup => {
            "Tab Switch field | ←/→ Language | Enter Analyze | Ctrl+F Feedback | Esc Quit".to_string()
        }
        Screen::Results => {
            "j/k Scroll | y/n Enjoyed? | u Toggle updates | f Send feedback | b Back | ? Help | q Quit"
                .to_string()
        }
    }
}

fn render_setup(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = |field: SetupField| {
        if state.focus == field { "> " } else { "  " }
    };
    let lines = [
        String::new(),
        format!(
            "{}Image path (.jpg/.jpeg/.png): {}",
            focused(SetupField::ImagePath),
            state.image_path
        ),
        format!("{}Email: {}", focused(SetupField::Email), state.email),
        String::new(),
        format!("  Language: {}  (←/→ to change)", state.language),
        String::new(),
        "  Press Enter to analyze the image.".to_string(),
    ]
    .join("\n");

    let form = Paragraph::new(lines).block(Block::default().title("Analyze").borders(Borders::ALL));
    frame.render_widget(form, area);
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let body = Paragraph::new(results_text(state))
        .block(Block::default().title("Player").borders(Borders::ALL))
        .scroll((state.results_scroll, 0));
    frame.render_widget(body, area);
}

fn results_text(state: &AppState) -> String {
    let Some(outcome) = &state.outcome else {
        return format!("No analysis yet\n\n{}", feedback_text(state));
    };

    let mut lines = Vec::new();
    for (label, value) in &outcome.attribute_rows {
        lines.push(format!("{label:<24} {value}"));
    }
    lines.push(String::new());
    lines.push(outcome.prose.clone());
    lines.push(String::new());

    for table in &outcome.stat_tables {
        lines.push(format!(
            "{} - {} Season Stats ({} / {})",
            outcome.extracted_name, outcome.season, table.group, table.kind
        ));
        lines.push(format!("{:<24} {}", table.stat_header, table.value_header));
        for (stat, value) in &table.rows {
            lines.push(format!("{stat:<24} {value}"));
        }
        lines.push(String::new());
    }

    lines.push(feedback_text(state));
    lines.join("\n")
}

fn feedback_text(state: &AppState) -> String {
    if state.feedback_submitted {
        return "Feedback: submitted, thank you!".to_string();
    }
    let enjoyed = match state.feedback_enjoyed {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "-",
    };
    let updates = if state.feedback_updates { "Yes" } else { "No" };
    format!(
        "Feedback: did you enjoy this tool? [{enjoyed}]  Email updates? [{updates}]  (y/n, u, then f to send)"
    )
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    let start = state.logs.len().saturating_sub(4);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "MLB StatShot - Help",
        "",
        "Setup:",
        "  Tab / ↑ / ↓   Switch field",
        "  ← / →         Cycle language",
        "  Enter         Analyze image",
        "  Ctrl+F        Feedback without analyzing",
        "  Esc           Quit",
        "",
        "Results:",
        "  j/k or ↑/↓    Scroll",
        "  y / n         Did you enjoy the tool?",
        "  u             Toggle email updates opt-in",
        "  f             Submit feedback",
        "  b / Esc       Back to setup",
        "  q             Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
