pub mod audio;
pub mod background;
pub mod catalog;
pub mod config;
pub mod input;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod util;
pub mod visibility;

use crate::{
    background::{BackgroundWorker, SCENE_PRESETS},
    catalog::{FontId, ThemeId},
    config::{FileSettingsStore, Settings, SettingsStore},
    input::{ControlZones, MouseAction, TimerCommand},
    runtime::{spawn_event_channel, AppEvent},
    session::Session,
    ui::settings::{cycle_font, cycle_theme, step_break, step_focus, Field, SettingsForm},
    visibility::ControlVisibility,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers, MouseEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::{Duration, Instant},
};
use webbrowser::Browser;

/// The countdown deals in whole seconds, so that is the tick cadence.
const TICK_RATE_MS: u64 = 1000;

/// distraction-free fullscreen focus timer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A fullscreen focus timer with themed countdowns, big-digit clock faces, keyboard-first transport controls, and optional AI-generated backdrops."
)]
pub struct Cli {
    /// focus phase length in minutes
    #[clap(short = 'f', long, value_parser = clap::value_parser!(u32).range(1..=600))]
    focus_minutes: Option<u32>,

    /// break phase length in minutes
    #[clap(short = 'b', long, value_parser = clap::value_parser!(u32).range(1..=600))]
    break_minutes: Option<u32>,

    /// color theme for the countdown screen
    #[clap(short = 't', long, value_enum)]
    theme: Option<ThemeId>,

    /// clock face for the countdown digits
    #[clap(long, value_enum)]
    font: Option<FontId>,

    /// jump straight to the timer screen
    #[clap(long)]
    start: bool,

    /// start sessions with the phase-complete chime muted
    #[clap(long)]
    mute: bool,

    /// settings file to use instead of the platform default
    #[clap(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppScreen {
    Settings,
    Timer,
}

/// Owned handle on the terminal's mouse-capture state, the timer screen's
/// presentation mode. Dropping it restores normal input on every exit
/// path, including quitting straight from the timer.
pub struct MouseCaptureGuard;

impl MouseCaptureGuard {
    fn acquire() -> Option<Self> {
        if !io::stdout().is_tty() {
            return None;
        }
        execute!(io::stdout(), EnableMouseCapture).ok().map(|_| Self)
    }
}

impl Drop for MouseCaptureGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
}

pub struct App {
    pub settings: Settings,
    pub store: FileSettingsStore,
    pub screen: AppScreen,
    pub session: Option<Session>,
    pub visibility: ControlVisibility,
    pub form: SettingsForm,
    pub background: BackgroundWorker,
    pub zones: ControlZones,
    mouse_capture: Option<MouseCaptureGuard>,
    start_muted: bool,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let store = match &cli.config {
            Some(path) => FileSettingsStore::with_path(path),
            None => FileSettingsStore::new(),
        };
        let mut settings = store.load();
        if let Some(minutes) = cli.focus_minutes {
            settings.focus_secs = minutes * 60;
        }
        if let Some(minutes) = cli.break_minutes {
            settings.break_secs = minutes * 60;
        }
        if let Some(theme) = cli.theme {
            settings.theme = theme;
        }
        if let Some(font) = cli.font {
            settings.font = font;
        }

        let mut app = Self {
            settings,
            store,
            screen: AppScreen::Settings,
            session: None,
            visibility: ControlVisibility::new(),
            form: SettingsForm::default(),
            background: BackgroundWorker::new(),
            zones: ControlZones::default(),
            mouse_capture: None,
            start_muted: cli.mute,
        };
        if cli.start {
            app.enter_timer();
        }
        app
    }

    /// Settings → Timer: a fresh session over an immutable copy of the
    /// current settings, plus the presentation-mode resources.
    pub fn enter_timer(&mut self) {
        let mut session = Session::new(&self.settings);
        if self.start_muted {
            session.sound_enabled = false;
        }
        self.session = Some(session);
        self.visibility = ControlVisibility::new();
        self.zones = ControlZones::default();
        self.mouse_capture = MouseCaptureGuard::acquire();
        self.screen = AppScreen::Timer;
    }

    /// Timer → Settings: the session and its countdown state are discarded,
    /// never carried over.
    pub fn leave_timer(&mut self) {
        self.session = None;
        self.mouse_capture = None;
        self.zones = ControlZones::default();
        self.screen = AppScreen::Settings;
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            if session.tick().is_some() && session.sound_enabled {
                audio::chime();
            }
            let running = session.is_running;
            self.visibility.poll(now, running);
        }
        if let Some(result) = self.background.poll() {
            self.apply_backdrop_result(result);
        }
    }

    pub fn on_timer_key(&mut self, key: KeyEvent, now: Instant) {
        match input::command_for_key(key) {
            Some(cmd) => self.apply_timer_command(cmd, now),
            None => {
                if let Some(session) = &self.session {
                    let running = session.is_running;
                    self.visibility.note_activity(now, running);
                }
            }
        }
    }

    pub fn on_timer_mouse(&mut self, event: MouseEvent, now: Instant) {
        let visible = self.visibility.visible();
        match input::route_mouse(&event, &self.zones, visible) {
            MouseAction::Command(cmd) => self.apply_timer_command(cmd, now),
            MouseAction::SurfaceToggle => self.apply_timer_command(TimerCommand::ToggleRun, now),
            MouseAction::Activity => {
                if let Some(session) = &self.session {
                    let running = session.is_running;
                    self.visibility.note_activity(now, running);
                }
            }
            MouseAction::Ignored => {}
        }
    }

    fn apply_timer_command(&mut self, cmd: TimerCommand, now: Instant) {
        if cmd == TimerCommand::Leave {
            self.leave_timer();
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match cmd {
            TimerCommand::ToggleRun => session.toggle_run(),
            TimerCommand::Reset => session.reset(),
            TimerCommand::Skip => {
                session.skip();
                if session.sound_enabled {
                    audio::chime();
                }
            }
            TimerCommand::ToggleSound => session.toggle_sound(),
            TimerCommand::Leave => {}
        }
        let running = session.is_running;
        self.visibility.note_activity(now, running);
    }

    /// Returns false when the app should quit.
    pub fn on_settings_key(&mut self, key: KeyEvent) -> bool {
        // Free-text editing wins while the prompt row is selected.
        if self.form.field == Field::Prompt {
            match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.form.insert_char(c);
                    return true;
                }
                KeyCode::Backspace => {
                    self.form.backspace();
                    return true;
                }
                KeyCode::Left => {
                    self.form.cursor_left();
                    return true;
                }
                KeyCode::Right => {
                    self.form.cursor_right();
                    return true;
                }
                _ => {}
            }
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return false,
            KeyCode::Up => self.form.field = self.form.field.prev(),
            KeyCode::Down | KeyCode::Tab => self.form.field = self.form.field.next(),
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Enter => self.activate_field(),
            KeyCode::Char('o') => self.open_backdrop(),
            _ => {}
        }
        true
    }

    fn adjust_field(&mut self, dir: i32) {
        match self.form.field {
            Field::FocusDuration => {
                step_focus(&mut self.settings, dir);
                self.persist();
            }
            Field::BreakDuration => {
                step_break(&mut self.settings, dir);
                self.persist();
            }
            Field::Font => {
                cycle_font(&mut self.settings, dir);
                self.persist();
            }
            Field::Theme => {
                cycle_theme(&mut self.settings, dir);
                // Picking a preset abandons any generated backdrop,
                // including one still in flight.
                self.settings.custom_background = None;
                self.background.invalidate();
                self.form.status = None;
                self.persist();
            }
            Field::Scene => self.form.cycle_scene(dir),
            Field::Prompt | Field::Start => {}
        }
    }

    fn activate_field(&mut self) {
        match self.form.field {
            Field::Scene => {
                let preset = SCENE_PRESETS[self.form.scene_index % SCENE_PRESETS.len()];
                self.request_backdrop(preset.prompt.to_string());
            }
            Field::Prompt => {
                let prompt = self.form.prompt.trim().to_string();
                if !prompt.is_empty() {
                    self.request_backdrop(prompt);
                }
            }
            _ => self.enter_timer(),
        }
    }

    fn request_backdrop(&mut self, prompt: String) {
        // One attempt per user action; repeated presses while a request is
        // in flight do not pile up.
        if self.background.is_generating() {
            return;
        }
        self.form.status = None;
        self.background.request(&prompt);
    }

    fn apply_backdrop_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(url) => {
                self.settings.custom_background = Some(url);
                self.settings.theme = ThemeId::CustomAi;
                self.persist();
                self.form.status = Some("backdrop ready".into());
            }
            Err(_) => {
                // Previous backdrop/theme stay untouched.
                self.form.status = Some("generation failed · backdrop unchanged".into());
            }
        }
    }

    fn open_backdrop(&mut self) {
        if let Some(url) = &self.settings.custom_background {
            if Browser::is_available() {
                let _ = webbrowser::open(url);
            }
        }
    }

    fn persist(&mut self) {
        let _ = self.store.save(&self.settings);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli);
    let res = run_app(&mut terminal, &mut app);

    // Release the timer screen's mouse capture before tearing the rest of
    // the terminal state down.
    drop(app);
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let events = spawn_event_channel(Duration::from_millis(TICK_RATE_MS));

    terminal.draw(|f| ui_root(app, f))?;
    loop {
        match events.recv()? {
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize => {}
            AppEvent::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break;
                }
                match app.screen {
                    AppScreen::Settings => {
                        if !app.on_settings_key(key) {
                            break;
                        }
                    }
                    AppScreen::Timer => app.on_timer_key(key, Instant::now()),
                }
            }
            AppEvent::Mouse(mouse) => {
                if app.screen == AppScreen::Timer {
                    app.on_timer_mouse(mouse, Instant::now());
                }
            }
        }
        terminal.draw(|f| ui_root(app, f))?;
    }

    Ok(())
}

fn ui_root(app: &mut App, f: &mut Frame) {
    let screen = ui::screen::current_screen(&app.screen);
    screen.render(app, f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ratatui::layout::Rect;
    use tempfile::tempdir;

    fn cli_with_config(dir: &tempfile::TempDir) -> Cli {
        let mut cli = Cli::parse_from(["fokus"]);
        cli.config = Some(dir.path().join("settings.json"));
        cli
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["fokus"]);

        assert_eq!(cli.focus_minutes, None);
        assert_eq!(cli.break_minutes, None);
        assert_eq!(cli.theme, None);
        assert_eq!(cli.font, None);
        assert!(!cli.start);
        assert!(!cli.mute);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_cli_duration_flags() {
        let cli = Cli::parse_from(["fokus", "-f", "50", "-b", "10"]);
        assert_eq!(cli.focus_minutes, Some(50));
        assert_eq!(cli.break_minutes, Some(10));

        let cli = Cli::parse_from(["fokus", "--focus-minutes", "45"]);
        assert_eq!(cli.focus_minutes, Some(45));
    }

    #[test]
    fn test_cli_rejects_zero_durations() {
        assert!(Cli::try_parse_from(["fokus", "-f", "0"]).is_err());
        assert!(Cli::try_parse_from(["fokus", "-b", "0"]).is_err());
    }

    #[test]
    fn test_cli_theme_and_font() {
        let cli = Cli::parse_from(["fokus", "-t", "navy-blue", "--font", "digital"]);
        assert_eq!(cli.theme, Some(ThemeId::NavyBlue));
        assert_eq!(cli.font, Some(FontId::Digital));
    }

    #[test]
    fn test_app_new_defaults_to_settings_screen() {
        let dir = tempdir().unwrap();
        let app = App::new(cli_with_config(&dir));

        assert_eq!(app.screen, AppScreen::Settings);
        assert!(app.session.is_none());
        assert_eq!(app.settings, Settings::default());
    }

    #[test]
    fn test_app_new_applies_cli_overrides() {
        let dir = tempdir().unwrap();
        let mut cli = cli_with_config(&dir);
        cli.focus_minutes = Some(50);
        cli.break_minutes = Some(10);
        cli.theme = Some(ThemeId::ForestGreen);
        cli.font = Some(FontId::Heavy);

        let app = App::new(cli);
        assert_eq!(app.settings.focus_secs, 50 * 60);
        assert_eq!(app.settings.break_secs, 10 * 60);
        assert_eq!(app.settings.theme, ThemeId::ForestGreen);
        assert_eq!(app.settings.font, FontId::Heavy);
    }

    #[test]
    fn test_app_new_with_start_enters_timer() {
        let dir = tempdir().unwrap();
        let mut cli = cli_with_config(&dir);
        cli.start = true;

        let app = App::new(cli);
        assert_eq!(app.screen, AppScreen::Timer);
        let session = app.session.as_ref().unwrap();
        assert!(!session.is_running, "sessions start paused");
        assert_eq!(session.remaining_secs, app.settings.focus_secs);
    }

    #[test]
    fn test_mute_flag_silences_new_sessions() {
        let dir = tempdir().unwrap();
        let mut cli = cli_with_config(&dir);
        cli.mute = true;

        let mut app = App::new(cli);
        app.enter_timer();
        assert!(!app.session.as_ref().unwrap().sound_enabled);
    }

    #[test]
    fn test_leave_timer_discards_session_state() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.enter_timer();

        let now = Instant::now();
        app.on_timer_key(key(KeyCode::Char(' ')), now);
        app.on_tick(now);
        app.on_timer_key(key(KeyCode::Char('s')), now);
        assert!(app.session.as_ref().unwrap().completed_focus_cycles > 0);

        app.leave_timer();
        assert_eq!(app.screen, AppScreen::Settings);
        assert!(app.session.is_none());

        // Re-entering builds a fresh session with no carryover.
        app.enter_timer();
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.completed_focus_cycles, 0);
        assert_eq!(session.remaining_secs, app.settings.focus_secs);
    }

    #[test]
    fn test_timer_keys_drive_the_engine() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.enter_timer();
        let now = Instant::now();

        app.on_timer_key(key(KeyCode::Char(' ')), now);
        assert!(app.session.as_ref().unwrap().is_running);

        app.on_tick(now);
        let focus = app.settings.focus_secs;
        assert_eq!(app.session.as_ref().unwrap().remaining_secs, focus - 1);

        app.on_timer_key(key(KeyCode::Char('r')), now);
        let session = app.session.as_ref().unwrap();
        assert!(!session.is_running);
        assert_eq!(session.remaining_secs, focus);

        app.on_timer_key(key(KeyCode::Char('m')), now);
        assert!(!app.session.as_ref().unwrap().sound_enabled);

        app.on_timer_key(key(KeyCode::Char('s')), now);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.completed_focus_cycles, 1);
        assert_eq!(session.remaining_secs, app.settings.break_secs);
    }

    #[test]
    fn test_escape_returns_to_settings() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.enter_timer();

        app.on_timer_key(key(KeyCode::Esc), Instant::now());
        assert_eq!(app.screen, AppScreen::Settings);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_paused_ticks_do_not_advance_the_countdown() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.enter_timer();

        let now = Instant::now();
        for _ in 0..10 {
            app.on_tick(now);
        }
        assert_eq!(
            app.session.as_ref().unwrap().remaining_secs,
            app.settings.focus_secs
        );
    }

    #[test]
    fn test_mouse_button_press_shadows_surface() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.enter_timer();
        app.zones = ControlZones {
            back: Rect::new(0, 20, 8, 3),
            reset: Rect::new(10, 20, 9, 3),
            play_pause: Rect::new(21, 20, 9, 3),
            skip: Rect::new(32, 20, 8, 3),
            mute: Rect::new(60, 2, 10, 1),
        };

        let press = |column, row| MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        let now = Instant::now();

        // Play/pause button toggles, just like the bare surface would.
        app.on_timer_mouse(press(22, 21), now);
        assert!(app.session.as_ref().unwrap().is_running);

        // Reset button stops the countdown rather than toggling it.
        app.on_timer_mouse(press(11, 21), now);
        assert!(!app.session.as_ref().unwrap().is_running);

        // A press on the bare surface toggles the run state.
        app.on_timer_mouse(press(50, 5), now);
        assert!(app.session.as_ref().unwrap().is_running);

        // Back button leaves the timer screen entirely.
        app.on_timer_mouse(press(1, 21), now);
        assert_eq!(app.screen, AppScreen::Settings);
    }

    #[test]
    fn test_controls_fade_and_reappear_on_activity() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.enter_timer();

        let t0 = Instant::now();
        app.on_timer_key(key(KeyCode::Char(' ')), t0);
        assert!(app.visibility.visible());

        app.on_tick(t0 + Duration::from_secs(4));
        assert!(!app.visibility.visible(), "idle while running hides controls");

        app.on_timer_mouse(
            MouseEvent {
                kind: crossterm::event::MouseEventKind::Moved,
                column: 5,
                row: 5,
                modifiers: KeyModifiers::NONE,
            },
            t0 + Duration::from_secs(5),
        );
        assert!(app.visibility.visible(), "pointer movement re-shows controls");
    }

    #[test]
    fn test_settings_navigation_and_stepping_persist() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));

        assert!(app.on_settings_key(key(KeyCode::Right)));
        assert_eq!(app.settings.focus_secs, 30 * 60);

        app.on_settings_key(key(KeyCode::Down));
        app.on_settings_key(key(KeyCode::Right));
        assert_eq!(app.settings.break_secs, 10 * 60);

        // Every change is written through to disk.
        let reloaded = app.store.load();
        assert_eq!(reloaded.focus_secs, 30 * 60);
        assert_eq!(reloaded.break_secs, 10 * 60);
    }

    #[test]
    fn test_theme_pick_clears_generated_backdrop() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.settings.theme = ThemeId::CustomAi;
        app.settings.custom_background = Some("https://example.com/old.jpg".into());

        app.form.field = Field::Theme;
        app.on_settings_key(key(KeyCode::Right));

        assert_eq!(app.settings.custom_background, None);
        assert_ne!(app.settings.theme, ThemeId::CustomAi);
    }

    #[test]
    fn test_prompt_field_captures_text_keys() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.form.field = Field::Prompt;

        for c in "zen garden".chars() {
            assert!(app.on_settings_key(key(KeyCode::Char(c))));
        }
        assert_eq!(app.form.prompt, "zen garden");

        // 'q' is text here, not quit.
        assert!(app.on_settings_key(key(KeyCode::Char('q'))));
        assert_eq!(app.form.prompt, "zen gardenq");

        app.on_settings_key(key(KeyCode::Backspace));
        assert_eq!(app.form.prompt, "zen garden");
    }

    #[test]
    fn test_empty_prompt_does_not_fire_a_request() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.form.field = Field::Prompt;

        app.on_settings_key(key(KeyCode::Enter));
        assert!(!app.background.is_generating());
    }

    #[test]
    fn test_enter_on_start_row_begins_a_session() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.form.field = Field::Start;

        assert!(app.on_settings_key(key(KeyCode::Enter)));
        assert_eq!(app.screen, AppScreen::Timer);
        assert!(app.session.is_some());
    }

    #[test]
    fn test_quit_keys_from_settings() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        assert!(!app.on_settings_key(key(KeyCode::Char('q'))));
        assert!(!app.on_settings_key(key(KeyCode::Esc)));
    }

    #[test]
    fn test_successful_generation_applies_and_persists() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));

        app.apply_backdrop_result(Ok("https://example.com/fresh.jpg".into()));
        assert_eq!(app.settings.theme, ThemeId::CustomAi);
        assert_eq!(
            app.settings.custom_background.as_deref(),
            Some("https://example.com/fresh.jpg")
        );
        assert_eq!(app.store.load().theme, ThemeId::CustomAi);
    }

    #[test]
    fn test_failed_generation_leaves_backdrop_unchanged() {
        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.settings.theme = ThemeId::NavyBlue;

        app.apply_backdrop_result(Err("timed out".into()));
        assert_eq!(app.settings.theme, ThemeId::NavyBlue);
        assert_eq!(app.settings.custom_background, None);
        assert!(app.form.status.is_some());
    }

    #[test]
    fn test_full_cycle_scenario_through_the_app() {
        let dir = tempdir().unwrap();
        let mut cli = cli_with_config(&dir);
        cli.focus_minutes = Some(25);
        cli.break_minutes = Some(5);
        let mut app = App::new(cli);
        app.enter_timer();

        let now = Instant::now();
        app.on_timer_key(key(KeyCode::Char(' ')), now);
        for _ in 0..1500 {
            app.on_tick(now);
        }
        {
            let session = app.session.as_ref().unwrap();
            assert_eq!(session.remaining_secs, 300);
            assert_eq!(session.completed_focus_cycles, 1);
        }

        for _ in 0..300 {
            app.on_tick(now);
        }
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.remaining_secs, 1500);
        assert_eq!(session.completed_focus_cycles, 1);
    }

    #[test]
    fn test_ui_draw_settings_screen() {
        use ratatui::backend::TestBackend;

        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));

        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui_root(&mut app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("F O K U S"));
    }

    #[test]
    fn test_ui_draw_timer_screen_records_zones() {
        use ratatui::backend::TestBackend;

        let dir = tempdir().unwrap();
        let mut app = App::new(cli_with_config(&dir));
        app.enter_timer();

        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui_root(&mut app, f)).unwrap();

        assert_ne!(app.zones, ControlZones::default());

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("25:00") || content.contains("█"));
    }
}
