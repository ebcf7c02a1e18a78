use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Engine-facing operations the timer screen's control surface can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    ToggleRun,
    Reset,
    Skip,
    ToggleSound,
    Leave,
}

/// Map a key press on the timer screen to its transport operation.
/// Raw mode means Space never scrolls anything; no default to suppress.
pub fn command_for_key(key: KeyEvent) -> Option<TimerCommand> {
    match key.code {
        KeyCode::Char(' ') => Some(TimerCommand::ToggleRun),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(TimerCommand::Reset),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(TimerCommand::Skip),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(TimerCommand::ToggleSound),
        KeyCode::Esc => Some(TimerCommand::Leave),
        _ => None,
    }
}

/// Screen regions the timer renderer drew its controls into, rebuilt on
/// every frame so mouse routing always matches what is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlZones {
    pub back: Rect,
    pub reset: Rect,
    pub play_pause: Rect,
    pub skip: Rect,
    pub mute: Rect,
}

impl ControlZones {
    /// Which control, if any, contains the given cell.
    pub fn command_at(&self, column: u16, row: u16) -> Option<TimerCommand> {
        let hit = |r: Rect| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        };
        if hit(self.back) {
            Some(TimerCommand::Leave)
        } else if hit(self.reset) {
            Some(TimerCommand::Reset)
        } else if hit(self.play_pause) {
            Some(TimerCommand::ToggleRun)
        } else if hit(self.skip) {
            Some(TimerCommand::Skip)
        } else if hit(self.mute) {
            Some(TimerCommand::ToggleSound)
        } else {
            None
        }
    }
}

/// What a mouse event on the timer screen amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// A transport button was hit; the press never reaches the surface.
    Command(TimerCommand),
    /// Primary press on the bare timer surface: run/pause toggle.
    SurfaceToggle,
    /// Pointer movement only re-arms the control fade.
    Activity,
    Ignored,
}

/// Route a mouse event. Button hits shadow the surface toggle, and hidden
/// controls catch nothing, so a press where a button used to be falls
/// through to the surface.
pub fn route_mouse(
    event: &MouseEvent,
    zones: &ControlZones,
    controls_visible: bool,
) -> MouseAction {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if controls_visible {
                if let Some(cmd) = zones.command_at(event.column, event.row) {
                    return MouseAction::Command(cmd);
                }
            }
            MouseAction::SurfaceToggle
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => MouseAction::Activity,
        _ => MouseAction::Ignored,
    }
}
