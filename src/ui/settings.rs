use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::background::{BackgroundWorker, SCENE_PRESETS};
use crate::catalog::{FontId, ThemeId};
use crate::config::Settings;
use crate::ui::digits;
use crate::util::format_mm_ss;

/// Duration chips offered by the pickers, in minutes.
pub const FOCUS_OPTIONS_MIN: [u32; 10] = [15, 20, 25, 30, 35, 40, 45, 50, 55, 60];
pub const BREAK_OPTIONS_MIN: [u32; 6] = [5, 10, 15, 20, 25, 30];

const PROMPT_FIELD_WIDTH: usize = 42;

/// Cursor over the settings form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FocusDuration,
    BreakDuration,
    Font,
    Theme,
    Scene,
    Prompt,
    Start,
}

impl Field {
    const ORDER: [Field; 7] = [
        Field::FocusDuration,
        Field::BreakDuration,
        Field::Font,
        Field::Theme,
        Field::Scene,
        Field::Prompt,
        Field::Start,
    ];

    pub fn next(self) -> Field {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Field {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Transient state of the settings screen: field cursor, backdrop prompt
/// input, and the one-line generation status.
#[derive(Debug)]
pub struct SettingsForm {
    pub field: Field,
    pub scene_index: usize,
    pub prompt: String,
    pub cursor: usize,
    pub status: Option<String>,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            field: Field::FocusDuration,
            scene_index: 0,
            prompt: String::new(),
            cursor: 0,
            status: None,
        }
    }
}

impl SettingsForm {
    pub fn insert_char(&mut self, c: char) {
        let byte = byte_index(&self.prompt, self.cursor);
        self.prompt.insert(byte, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte = byte_index(&self.prompt, self.cursor - 1);
        self.prompt.remove(byte);
        self.cursor -= 1;
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.prompt.chars().count());
    }

    pub fn cycle_scene(&mut self, dir: i32) {
        let n = SCENE_PRESETS.len() as i32;
        self.scene_index = ((self.scene_index as i32 + dir).rem_euclid(n)) as usize;
    }
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

/// Move a duration to the neighbouring picker chip. Values set from the
/// command line may sit between chips; those snap to the nearest one.
fn step_duration(current_secs: u32, options_min: &[u32], dir: i32) -> u32 {
    let current_min = current_secs / 60;
    let idx = match options_min.iter().position(|&m| m == current_min) {
        Some(i) if dir < 0 => i.saturating_sub(1),
        Some(i) => (i + 1).min(options_min.len() - 1),
        None => options_min
            .iter()
            .enumerate()
            .min_by_key(|(_, &m)| m.abs_diff(current_min))
            .map(|(i, _)| i)
            .unwrap_or(0),
    };
    options_min[idx] * 60
}

pub fn step_focus(settings: &mut Settings, dir: i32) {
    settings.focus_secs = step_duration(settings.focus_secs, &FOCUS_OPTIONS_MIN, dir);
}

pub fn step_break(settings: &mut Settings, dir: i32) {
    settings.break_secs = step_duration(settings.break_secs, &BREAK_OPTIONS_MIN, dir);
}

pub fn cycle_font(settings: &mut Settings, dir: i32) {
    let all = FontId::all();
    let n = all.len() as i32;
    let j = match all.iter().position(|f| *f == settings.font) {
        Some(i) => ((i as i32 + dir).rem_euclid(n)) as usize,
        None => 0,
    };
    settings.font = all[j];
}

/// Cycle through the pickable presets. Coming from the generated-backdrop
/// theme enters the list at its closest edge.
pub fn cycle_theme(settings: &mut Settings, dir: i32) {
    let all = ThemeId::pickable();
    let n = all.len() as i32;
    let j = match all.iter().position(|t| *t == settings.theme) {
        Some(i) => ((i as i32 + dir).rem_euclid(n)) as usize,
        None if dir < 0 => all.len() - 1,
        None => 0,
    };
    settings.theme = all[j];
}

pub fn render_settings(
    f: &mut Frame,
    settings: &Settings,
    form: &SettingsForm,
    worker: &BackgroundWorker,
) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(4)
        .vertical_margin(1)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(2), // subtitle
            Constraint::Length(9), // form rows
            Constraint::Length(1), // status
            Constraint::Length(1), // gap
            Constraint::Min(5),    // preview
            Constraint::Length(1), // footer
        ])
        .split(area);

    let title = Paragraph::new("F O K U S")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("customize your perfect focus session")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(subtitle, chunks[1]);

    let rows = Paragraph::new(vec![
        duration_row(form, Field::FocusDuration, "focus", settings.focus_secs, &FOCUS_OPTIONS_MIN),
        duration_row(form, Field::BreakDuration, "break", settings.break_secs, &BREAK_OPTIONS_MIN),
        Line::default(),
        font_row(form, settings),
        theme_row(form, settings),
        Line::default(),
        scene_row(form),
        prompt_row(form),
        start_row(form),
    ]);
    f.render_widget(rows, chunks[2]);

    let status = if worker.is_generating() {
        "generating backdrop…".to_string()
    } else if let Some(status) = &form.status {
        status.clone()
    } else if let Some(url) = &settings.custom_background {
        format!("backdrop: ai · {} (o opens in browser)", short_url(url))
    } else {
        format!("backdrop: {} theme colors", settings.theme.theme().name)
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[3]);

    render_preview(f, settings, chunks[5]);

    let footer = Paragraph::new(
        "↑/↓ field · ←/→ adjust · enter start (generate on scene/prompt) · esc quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[6]);
}

fn marker(form: &SettingsForm, field: Field) -> Span<'static> {
    if form.field == field {
        Span::styled("▸ ", Style::default().fg(Color::Magenta))
    } else {
        Span::raw("  ")
    }
}

fn label_span(form: &SettingsForm, field: Field, label: &'static str) -> Span<'static> {
    let style = if form.field == field {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("{:<8}", label), style)
}

fn duration_row(
    form: &SettingsForm,
    field: Field,
    label: &'static str,
    current_secs: u32,
    options_min: &[u32],
) -> Line<'static> {
    let mut spans = vec![marker(form, field), label_span(form, field, label)];
    let current_min = current_secs / 60;
    for &m in options_min {
        if m == current_min {
            spans.push(Span::styled(
                format!("[{}]", m),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", m),
                Style::default().fg(Color::Gray),
            ));
        }
        spans.push(Span::raw(" "));
    }
    if !options_min.contains(&current_min) {
        // A command-line override between chips still shows its real value.
        spans.push(Span::styled(
            format!("({}m)", current_min),
            Style::default().fg(Color::Magenta),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("min", Style::default().fg(Color::DarkGray)));
    Line::from(spans)
}

fn font_row(form: &SettingsForm, settings: &Settings) -> Line<'static> {
    let mut spans = vec![marker(form, Field::Font), label_span(form, Field::Font, "font")];
    for (i, id) in FontId::all().iter().enumerate() {
        let name = id.style().name;
        if *id == settings.font {
            spans.push(Span::styled(
                format!("[{}]", name),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(name, Style::default().fg(Color::Gray)));
        }
        if i + 1 != FontId::all().len() {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
    }
    Line::from(spans)
}

fn theme_row(form: &SettingsForm, settings: &Settings) -> Line<'static> {
    let theme = settings.theme.theme();
    let swatch = Style::default().bg(theme.bg).fg(theme.fg);
    Line::from(vec![
        marker(form, Field::Theme),
        label_span(form, Field::Theme, "theme"),
        Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("  {}  ", theme.name), swatch),
        Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
    ])
}

fn scene_row(form: &SettingsForm) -> Line<'static> {
    let preset = SCENE_PRESETS[form.scene_index % SCENE_PRESETS.len()];
    Line::from(vec![
        marker(form, Field::Scene),
        label_span(form, Field::Scene, "scene"),
        Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            preset.name,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "   enter generates this backdrop",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn prompt_row(form: &SettingsForm) -> Line<'static> {
    let mut spans = vec![
        marker(form, Field::Prompt),
        label_span(form, Field::Prompt, "prompt"),
    ];
    if form.field == Field::Prompt {
        let byte = byte_index(&form.prompt, form.cursor);
        let (before, after) = form.prompt.split_at(byte);
        let mut rest = after.chars();
        let at_cursor = rest.next().unwrap_or(' ');
        spans.push(Span::raw(before.to_string()));
        spans.push(Span::styled(
            at_cursor.to_string(),
            Style::default().add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::raw(rest.as_str().to_string()));
    } else if form.prompt.is_empty() {
        spans.push(Span::styled(
            "describe a backdrop, e.g. aurora borealis night sky",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::raw(form.prompt.clone()));
    }
    let used: usize = form.prompt.width();
    if used < PROMPT_FIELD_WIDTH {
        spans.push(Span::styled(
            "_".repeat(PROMPT_FIELD_WIDTH - used),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ));
    }
    Line::from(spans)
}

fn start_row(form: &SettingsForm) -> Line<'static> {
    let style = if form.field == Field::Start {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    Line::from(vec![
        marker(form, Field::Start),
        Span::styled("start focus session ⏵", style),
    ])
}

fn render_preview(f: &mut Frame, settings: &Settings, area: ratatui::layout::Rect) {
    let theme = settings.theme.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("preview")
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(theme.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let font = digits::font_for(settings.font);
    let rows = font.render(&format_mm_ss(settings.focus_secs));
    let mut lines: Vec<Line> = Vec::new();
    let pad = (inner.height.saturating_sub(font.height + 1) / 2) as usize;
    for _ in 0..pad {
        lines.push(Line::default());
    }
    for row in rows {
        lines.push(Line::from(row));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "{} min focus → {} min break",
            settings.focus_secs / 60,
            settings.break_secs / 60
        ),
        Style::default().fg(theme.accent),
    )));
    let preview = Paragraph::new(lines)
        .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(preview, inner);
}

fn short_url(url: &str) -> String {
    if url.chars().count() <= 40 {
        url.to_string()
    } else {
        format!("{}…", url.chars().take(40).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn field_order_wraps_both_ways() {
        assert_eq!(Field::FocusDuration.next(), Field::BreakDuration);
        assert_eq!(Field::Start.next(), Field::FocusDuration);
        assert_eq!(Field::FocusDuration.prev(), Field::Start);
        assert_eq!(Field::Prompt.prev(), Field::Scene);
    }

    #[test]
    fn focus_steps_through_the_chips_and_clamps() {
        let mut settings = Settings::default();
        assert_eq!(settings.focus_secs, 25 * 60);
        step_focus(&mut settings, 1);
        assert_eq!(settings.focus_secs, 30 * 60);
        step_focus(&mut settings, -1);
        step_focus(&mut settings, -1);
        step_focus(&mut settings, -1);
        assert_eq!(settings.focus_secs, 15 * 60);
        step_focus(&mut settings, -1);
        assert_eq!(settings.focus_secs, 15 * 60, "clamped at the low end");
        for _ in 0..20 {
            step_focus(&mut settings, 1);
        }
        assert_eq!(settings.focus_secs, 60 * 60, "clamped at the high end");
    }

    #[test]
    fn off_chip_duration_snaps_to_nearest() {
        let mut settings = Settings {
            focus_secs: 23 * 60,
            ..Settings::default()
        };
        step_focus(&mut settings, 1);
        assert_eq!(settings.focus_secs, 25 * 60);

        let mut settings = Settings {
            break_secs: 90, // 1.5 minutes, below every chip
            ..Settings::default()
        };
        step_break(&mut settings, -1);
        assert_eq!(settings.break_secs, 5 * 60);
    }

    #[test]
    fn font_cycle_wraps() {
        let mut settings = Settings::default();
        assert_eq!(settings.font, FontId::Block);
        cycle_font(&mut settings, -1);
        assert_eq!(settings.font, FontId::Mono);
        cycle_font(&mut settings, 1);
        assert_eq!(settings.font, FontId::Block);
    }

    #[test]
    fn theme_cycle_wraps_and_escapes_custom_ai() {
        let mut settings = Settings::default();
        cycle_theme(&mut settings, -1);
        assert_eq!(settings.theme, ThemeId::MidnightPurple);
        cycle_theme(&mut settings, 1);
        assert_eq!(settings.theme, ThemeId::ClassicBlack);

        settings.theme = ThemeId::CustomAi;
        cycle_theme(&mut settings, 1);
        assert_eq!(settings.theme, ThemeId::ClassicBlack);
        settings.theme = ThemeId::CustomAi;
        cycle_theme(&mut settings, -1);
        assert_eq!(settings.theme, ThemeId::MidnightPurple);
    }

    #[test]
    fn prompt_editing_tracks_the_cursor() {
        let mut form = SettingsForm::default();
        for c in "abc".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.prompt, "abc");
        form.cursor_left();
        form.insert_char('x');
        assert_eq!(form.prompt, "abxc");
        form.backspace();
        assert_eq!(form.prompt, "abc");
        form.cursor_right();
        form.cursor_right();
        assert_eq!(form.cursor, 3);
        form.backspace();
        assert_eq!(form.prompt, "ab");
    }

    #[test]
    fn prompt_editing_handles_multibyte_chars() {
        let mut form = SettingsForm::default();
        form.insert_char('é');
        form.insert_char('木');
        assert_eq!(form.prompt, "é木");
        form.cursor_left();
        form.backspace();
        assert_eq!(form.prompt, "木");
    }

    #[test]
    fn scene_cycle_wraps() {
        let mut form = SettingsForm::default();
        form.cycle_scene(-1);
        assert_eq!(form.scene_index, SCENE_PRESETS.len() - 1);
        form.cycle_scene(1);
        assert_eq!(form.scene_index, 0);
    }

    #[test]
    fn render_smoke_default_form() {
        let settings = Settings::default();
        let form = SettingsForm::default();
        let worker = BackgroundWorker::new();
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| render_settings(f, &settings, &form, &worker))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("F O K U S"));
        assert!(text.contains("[25]"));
        assert!(text.contains("Classic Black"));
        assert!(text.contains("start focus session"));
    }

    #[test]
    fn render_smoke_prompt_selected_with_backdrop() {
        let settings = Settings {
            theme: ThemeId::CustomAi,
            custom_background: Some("https://image.pollinations.ai/prompt/zen".into()),
            ..Settings::default()
        };
        let mut form = SettingsForm::default();
        form.field = Field::Prompt;
        for c in "zen garden".chars() {
            form.insert_char(c);
        }
        let worker = BackgroundWorker::new();
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| render_settings(f, &settings, &form, &worker))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("zen garden"));
        assert!(text.contains("backdrop: ai"));
    }
}
