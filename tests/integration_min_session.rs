// Minimal integration test that drives the compiled binary through a PTY.
// This exercises the real event loop and crossterm input handling across
// both screens without relying on internal modules.
//
// Notes:
// - Requires a TTY; uses expectrl which allocates a pseudo terminal.
// - Marked Unix-only and ignored by default to avoid CI/platform issues.
// - Run manually via: `cargo test --test integration_min_session -- --ignored`.

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

#[test]
#[ignore]
fn minimal_session_starts_and_exits() -> Result<(), Box<dyn std::error::Error>> {
    // Resolve path to compiled binary (debug build during tests)
    let bin = assert_cmd::cargo::cargo_bin("fokus");

    // Point the settings store at a scratch file so the test never touches
    // the real config dir.
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("settings.json");
    let cmd = format!(
        "{} --start --config {}",
        bin.display(),
        config.display()
    );

    // Spawn the TUI inside a pseudo terminal
    let mut p = spawn(cmd)?;

    // Give the app a moment to initialize the terminal/alternate screen
    std::thread::sleep(Duration::from_millis(300));

    // Start the countdown, then head back to the settings screen
    p.send(" ")?;
    std::thread::sleep(Duration::from_millis(200));
    p.send("\x1b")?; // ESC

    // Quit from the settings screen
    std::thread::sleep(Duration::from_millis(200));
    p.send("q")?;

    // Wait for the program to terminate cleanly
    p.expect(Eof)?;
    Ok(())
}
