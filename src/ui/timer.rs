use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::config::Settings;
use crate::input::ControlZones;
use crate::session::{Mode, Session};
use crate::ui::digits;

// Progress bar fills, matching the focus/break gradient heads of the
// original presets.
const FOCUS_BAR: Color = Color::Rgb(236, 72, 153);
const BREAK_BAR: Color = Color::Rgb(16, 185, 129);
const BAR_TRACK: Color = Color::Rgb(31, 41, 55);

// Full chrome (pill, hints, transport buttons) needs this much room;
// smaller panes fall back to the bare countdown.
const MIN_CHROME_WIDTH: u16 = 44;
const MIN_CHROME_HEIGHT: u16 = 14;

/// Render the full-screen countdown and report where the transport
/// controls landed so mouse routing matches this exact frame.
pub fn render_timer(
    f: &mut Frame,
    session: &Session,
    settings: &Settings,
    controls_visible: bool,
) -> ControlZones {
    let area = f.area();
    let theme = settings.theme.theme();

    let backdrop = Block::default().style(Style::default().bg(theme.bg));
    f.render_widget(backdrop, area);

    if area.width < 12 || area.height < 6 {
        let time = Paragraph::new(session.time_display())
            .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(time, area);
        return ControlZones::default();
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress bar
            Constraint::Length(1), // backdrop label
            Constraint::Length(1), // mode pill + mute
            Constraint::Min(1),    // clock
            Constraint::Length(2), // shortcut hints
            Constraint::Length(3), // transport buttons
            Constraint::Length(1), // bottom pad
        ])
        .split(area);

    let bar_color = match session.mode {
        Mode::Focus => FOCUS_BAR,
        Mode::Break => BREAK_BAR,
    };
    let progress = Gauge::default()
        .gauge_style(Style::default().fg(bar_color).bg(BAR_TRACK))
        .ratio(session.progress())
        .label("");
    f.render_widget(progress, chunks[0]);

    let font = digits::font_for(settings.font);
    let clock = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(font.height),
            Constraint::Length(1),
            Constraint::Length(1), // session counter
            Constraint::Length(1), // ends-at line
            Constraint::Min(0),
        ])
        .split(chunks[3]);

    let rows = font.render(&session.time_display());
    let time_lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    let time = Paragraph::new(time_lines)
        .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(time, clock[1]);

    let counter = Paragraph::new(format!(
        "S E S S I O N  {}",
        session.completed_focus_cycles + 1
    ))
    .style(Style::default().fg(theme.accent))
    .alignment(Alignment::Center);
    f.render_widget(counter, clock[3]);

    if session.is_running {
        let ends_at = Local::now() + chrono::Duration::seconds(session.remaining_secs as i64);
        let eta = Paragraph::new(format!(
            "{} ends at {}",
            session.mode,
            ends_at.format("%H:%M")
        ))
        .style(Style::default().fg(theme.accent).add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
        f.render_widget(eta, clock[4]);
    }

    let chrome = controls_visible
        && area.width >= MIN_CHROME_WIDTH
        && area.height >= MIN_CHROME_HEIGHT.max(font.height + 9);
    if !chrome {
        return ControlZones::default();
    }

    if let Some(url) = &settings.custom_background {
        let label = Paragraph::new(format!("ai backdrop · {}", truncate(url, 48)))
            .style(Style::default().fg(theme.accent).add_modifier(Modifier::DIM))
            .alignment(Alignment::Right);
        f.render_widget(label, chunks[1]);
    }

    // Mode pill with a pulsing dot, mute toggle to its right. The dot
    // breathes on the countdown's own seconds.
    let dot = if session.remaining_secs % 2 == 0 {
        "●"
    } else {
        "○"
    };
    let pill_text = match session.mode {
        Mode::Focus => "FOCUS MODE",
        Mode::Break => "BREAK TIME",
    };
    let mute_text = if session.sound_enabled {
        "[ sound on ]"
    } else {
        "[ muted ]"
    };

    let row = chunks[2];
    let pill_width = 2 + pill_text.len() as u16;
    let mute_width = mute_text.len() as u16;
    let start_x = row.x + row.width.saturating_sub(pill_width + 3 + mute_width) / 2;

    let pill_rect = Rect::new(start_x, row.y, pill_width, 1);
    let pill = Paragraph::new(Line::from(vec![
        Span::styled(dot, Style::default().fg(bar_color)),
        Span::raw(" "),
        Span::styled(
            pill_text,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(pill, pill_rect);

    let mute_rect = Rect::new(start_x + pill_width + 3, row.y, mute_width, 1);
    let mute = Paragraph::new(mute_text).style(Style::default().fg(theme.control));
    f.render_widget(mute, mute_rect);

    let action = if session.is_running { "pause" } else { "start" };
    let hints = Paragraph::new(vec![
        Line::from(format!("click anywhere or press space to {}", action)),
        Line::from("r reset · s skip · m mute · esc settings"),
    ])
    .style(Style::default().fg(theme.accent).add_modifier(Modifier::ITALIC))
    .alignment(Alignment::Center);
    f.render_widget(hints, chunks[4]);

    let labels = [
        "back",
        "reset",
        if session.is_running { "pause" } else { "play" },
        "skip",
    ];
    let widths: Vec<u16> = labels.iter().map(|l| l.len() as u16 + 4).collect();
    let total: u16 = widths.iter().sum::<u16>() + 2 * (labels.len() as u16 - 1);
    let buttons_row = chunks[5];
    let mut x = buttons_row.x + buttons_row.width.saturating_sub(total) / 2;
    let mut rects = [Rect::default(); 4];
    for (i, w) in widths.iter().enumerate() {
        rects[i] = Rect::new(x, buttons_row.y, *w, 3);
        x += w + 2;
    }
    for (label, rect) in labels.iter().zip(&rects) {
        let button = Paragraph::new(*label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.control))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.control)),
            );
        f.render_widget(button, *rect);
    }

    ControlZones {
        back: rects[0],
        reset: rects[1],
        play_pause: rects[2],
        skip: rects[3],
        mute: mute_rect,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(max).collect::<String>())
    }
}
