use ratatui::Frame;

use crate::{App, AppScreen};

/// A UI screen boundary: responsible for rendering one app screen
pub trait Screen {
    fn render(&self, app: &mut App, f: &mut Frame);
}

/// Settings form screen
pub struct SettingsScreen;

impl Screen for SettingsScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        crate::ui::settings::render_settings(f, &app.settings, &app.form, &app.background);
    }
}

/// Full-screen countdown. Records the control zones of the frame it just
/// drew so mouse routing never hits yesterday's layout.
pub struct TimerScreen;

impl Screen for TimerScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        if let Some(session) = &app.session {
            let zones =
                crate::ui::timer::render_timer(f, session, &app.settings, app.visibility.visible());
            app.zones = zones;
        }
    }
}

/// Screen object for the navigator's current state.
pub fn current_screen(screen: &AppScreen) -> Box<dyn Screen> {
    match screen {
        AppScreen::Settings => Box::new(SettingsScreen),
        AppScreen::Timer => Box::new(TimerScreen),
    }
}
