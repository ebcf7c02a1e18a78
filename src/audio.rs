use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

/// Candidate system players tried in order; the first whose sound file
/// exists wins. Covers PulseAudio, bare ALSA, and macOS.
const PLAYERS: [(&str, &str); 4] = [
    ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
    ("aplay", "/usr/share/sounds/sound-icons/prompt.wav"),
    ("aplay", "/usr/share/sounds/generic.wav"),
    ("afplay", "/System/Library/Sounds/Glass.aiff"),
];

/// Play the phase-complete chime without blocking the event loop.
///
/// Missing players, missing sound files, and spawn failures are all
/// swallowed; the worst case is silence. Muting is the caller's job, so a
/// disabled sound toggle never even reaches this point.
pub fn chime() {
    thread::spawn(|| {
        for (player, sound) in PLAYERS {
            if Path::new(sound).exists() {
                let _ = Command::new(player)
                    .arg(sound)
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn();
                return;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chime_never_panics_without_audio() {
        // Environments without any of the candidate files just do nothing.
        chime();
        chime();
    }
}
