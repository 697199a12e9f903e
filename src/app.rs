//! Application state and behavior: key handling, command execution, and the
//! single tick that advances every animation.
//!
//! Invariant: at most one command streams at a time, and all input is
//! rejected while it does. The transcript mutates only at its tail, and only
//! while that entry is streaming.

use crate::achievements::{Achievement, AchievementSet};
use crate::boot::BootSequence;
use crate::commands::{CommandContext, Resolved, Signal};
use crate::dispatch;
use crate::history::{Recall, RecallBuffer, Transcript};
use crate::i18n::{self, Language};
use crate::input::konami::KonamiDetector;
use crate::prefs::Prefs;
use crate::services::clock::SharedClock;
use crate::stream::{self, StreamReveal};
use crate::view::live_feed::LiveFeed;
use crate::view::matrix_rain::MatrixRain;
use crate::view::toast::{Toast, ToastQueue};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

pub const WELCOME_MESSAGE: &str =
    "Welcome to HakickOS v1.0\nType 'help' for available commands.";

const GOD_MODE_DURATION: Duration = Duration::from_secs(10);

/// Command-line overrides. They apply for this run only and are never
/// written back to the preferences file.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionOverrides {
    pub language: Option<Language>,
    pub crt_mode: bool,
    pub mute: bool,
}

pub struct App {
    pub prefs: Prefs,
    pub transcript: Transcript,
    pub recall: RecallBuffer,
    pub input: String,
    pub achievements: AchievementSet,
    pub boot: Option<BootSequence>,
    pub matrix: Option<MatrixRain>,
    pub toasts: ToastQueue,
    pub feed: LiveFeed,
    pub should_quit: bool,

    overrides: SessionOverrides,
    stream: Option<StreamReveal>,
    konami: KonamiDetector,
    god_mode_until: Option<Instant>,
    clock: SharedClock,
    started_at: Instant,
    typed_any_command: bool,
    bell_pending: bool,
    unlock_rx: Receiver<Achievement>,
    prefs_path: Option<PathBuf>,
}

impl App {
    pub fn new(
        clock: SharedClock,
        prefs: Prefs,
        overrides: SessionOverrides,
        prefs_path: Option<PathBuf>,
        achievements_path: Option<PathBuf>,
        show_boot: bool,
    ) -> Self {
        let now = clock.now();
        let mut achievements = AchievementSet::load(achievements_path);
        let unlock_rx = achievements.subscribe();
        achievements.unlock("first-visit", clock.as_ref());

        Self {
            transcript: Transcript::new(),
            recall: RecallBuffer::new(),
            input: String::new(),
            achievements,
            boot: show_boot.then(|| BootSequence::new(now)),
            matrix: None,
            toasts: ToastQueue::new(),
            feed: LiveFeed::new(now, prefs.live_feed_dismissed),
            should_quit: false,
            overrides,
            stream: None,
            konami: KonamiDetector::new(),
            god_mode_until: None,
            clock,
            started_at: now,
            typed_any_command: false,
            bell_pending: false,
            unlock_rx,
            prefs_path,
            prefs,
        }
    }

    pub fn language(&self) -> Language {
        self.overrides.language.unwrap_or(self.prefs.language)
    }

    pub fn crt_mode(&self) -> bool {
        self.prefs.crt_mode || self.overrides.crt_mode
    }

    fn sound_on(&self) -> bool {
        self.prefs.sound_effects && !self.overrides.mute
    }

    pub fn is_streaming(&self) -> bool {
        self.stream.is_some()
    }

    pub fn god_mode_active(&self) -> bool {
        self.god_mode_until.is_some()
    }

    /// Terminal bell requested since the last check (sound effects pref).
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let now = self.clock.now();

        // Quit works everywhere.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        if let Some(boot) = &mut self.boot {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                boot.skip(now);
            }
            return;
        }

        // Any key closes the matrix overlay.
        if self.matrix.is_some() {
            self.matrix = None;
            return;
        }

        if self.konami.feed(key.code) {
            self.god_mode_until = Some(now + GOD_MODE_DURATION);
            self.achievements
                .unlock("konami-code", self.clock.as_ref());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('l') => self.execute("clear"),
                KeyCode::Char('x') => {
                    self.feed.dismiss();
                    self.prefs.live_feed_dismissed = true;
                    self.save_prefs();
                }
                _ => {}
            }
            return;
        }

        // New input is rejected while output is streaming.
        if self.is_streaming() {
            return;
        }

        match key.code {
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.execute(&line);
            }
            KeyCode::Tab => self.autocomplete(),
            KeyCode::Up => {
                if let Recall::Set(line) = self.recall.up() {
                    self.input = line;
                }
            }
            KeyCode::Down => match self.recall.down() {
                Recall::Set(line) => self.input = line,
                Recall::ClearInput => self.input.clear(),
                Recall::Unchanged => {}
            },
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn autocomplete(&mut self) {
        let matches = dispatch::autocomplete(&self.input);
        match matches.len() {
            0 => {}
            1 => self.input = matches[0].to_string(),
            _ => {
                // Show the candidates without executing anything.
                let current = self.input.clone();
                self.transcript.push(&current, matches.join("  "));
            }
        }
    }

    pub fn execute(&mut self, raw_input: &str) {
        let trimmed = raw_input.trim().to_string();
        if trimmed.is_empty() || self.is_streaming() {
            return;
        }

        if !self.typed_any_command {
            self.typed_any_command = true;
            self.achievements
                .unlock("terminal-user", self.clock.as_ref());
        }

        let resolved = match dispatch::find_command(&trimmed) {
            Some(matched) => {
                let context = CommandContext {
                    args: &matched.args,
                    clock: self.clock.as_ref(),
                    started_at: self.started_at,
                };
                matched.command.resolve(&context)
            }
            None => Resolved::Text(dispatch::not_found_message(&trimmed)),
        };

        match resolved {
            Resolved::Signal(Signal::Clear) => {
                self.transcript.clear();
                self.recall.push(&trimmed);
            }
            Resolved::Signal(Signal::Matrix) => {
                self.matrix = Some(MatrixRain::new(self.clock.now()));
                self.achievements
                    .unlock("matrix-entered", self.clock.as_ref());
                self.transcript.push(&trimmed, String::new());
                self.recall.push(&trimmed);
            }
            Resolved::Signal(Signal::Achievements) => {
                let panel = self.achievements.format_panel();
                self.transcript.push(&trimmed, panel);
                self.recall.push(&trimmed);
            }
            Resolved::Signal(Signal::Lang) => {
                // Toggling in-app is a real preference change; it replaces
                // any --lang override and persists.
                let switched = self.language().toggle();
                self.overrides.language = None;
                self.prefs.language = switched;
                self.save_prefs();
                let confirmation = i18n::t(switched, "lang.switched").to_string();
                self.transcript.push(&trimmed, confirmation);
                self.recall.push(&trimmed);
            }
            Resolved::Text(output) => {
                if trimmed == "sudo hire-me" {
                    self.achievements.unlock("hire-me", self.clock.as_ref());
                }
                if output.contains("FLAG{") {
                    self.achievements
                        .unlock("secret-finder", self.clock.as_ref());
                }

                if stream::is_streaming_output(&output) {
                    self.transcript.push_streaming(&trimmed);
                    self.stream = Some(StreamReveal::new(&output, self.clock.now()));
                } else {
                    self.transcript.push(&trimmed, output);
                }
                self.recall.push(&trimmed);
            }
        }
    }

    /// Advance every animation from the shared clock.
    pub fn tick(&mut self) {
        let now = self.clock.now();

        if let Some(boot) = &mut self.boot {
            boot.tick(now);
            if boot.is_done() {
                self.boot = None;
                if !self.prefs.boot_played {
                    self.prefs.boot_played = true;
                    self.save_prefs();
                }
            }
        }

        if let Some(reveal) = &mut self.stream {
            for line in reveal.tick(now) {
                self.transcript.append_streamed_line(&line);
            }
            if reveal.is_done() {
                self.transcript.finish_streaming();
                self.stream = None;
            }
        }

        if let Some(rain) = &mut self.matrix {
            if !rain.tick(now) {
                self.matrix = None;
            }
        }

        while let Ok(unlocked) = self.unlock_rx.try_recv() {
            self.toasts.push(Toast {
                icon: unlocked.icon,
                title: unlocked.title,
            });
            if self.sound_on() {
                self.bell_pending = true;
            }
        }
        self.toasts.tick(now);

        self.feed.tick(now);

        if let Some(until) = self.god_mode_until {
            if now >= until {
                self.god_mode_until = None;
            }
        }
    }

    fn save_prefs(&self) {
        if let Some(path) = self.prefs_path.as_deref() {
            self.prefs.save(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::TestClock;
    use std::sync::Arc;

    fn test_app() -> (App, Arc<TestClock>) {
        let clock = TestClock::shared();
        let app = App::new(
            clock.clone(),
            Prefs::default(),
            SessionOverrides::default(),
            None,
            None,
            false,
        );
        (app, clock)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn cat_about_returns_the_stored_bio() {
        let (mut app, _clock) = test_app();
        app.execute("cat about.txt");
        let entry = app.transcript.last().unwrap();
        let expected = match crate::commands::by_name("cat about.txt").unwrap().output {
            crate::commands::Output::Static(text) => text,
            _ => unreachable!(),
        };
        assert_eq!(entry.output, expected);
    }

    #[test]
    fn unknown_command_points_at_help() {
        let (mut app, _clock) = test_app();
        app.execute("frobnicate");
        let entry = app.transcript.last().unwrap();
        assert!(entry.output.contains("frobnicate"));
        assert!(entry.output.contains("help"));
    }

    #[test]
    fn clear_empties_transcript_and_resets_recall() {
        let (mut app, _clock) = test_app();
        app.execute("ls");
        app.execute("pwd");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "pwd");

        app.input.clear();
        app.execute("clear");
        assert!(app.transcript.is_empty());
        assert!(app.recall.is_browsing());
        assert_eq!(app.recall.len(), 3);
    }

    #[test]
    fn history_round_trip_restores_empty_input() {
        let (mut app, _clock) = test_app();
        for cmd in ["ls", "pwd", "whoami"] {
            type_line(&mut app, cmd);
        }
        for _ in 0..3 {
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.input, "ls");
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.input, "");
    }

    #[test]
    fn first_command_unlocks_terminal_user() {
        let (mut app, _clock) = test_app();
        assert!(!app.achievements.get("terminal-user").unwrap().unlocked);
        app.execute("ls");
        assert!(app.achievements.get("terminal-user").unwrap().unlocked);
    }

    #[test]
    fn streaming_blocks_input_until_done() {
        let (mut app, clock) = test_app();
        app.execute("hack");
        assert!(app.is_streaming());
        assert!(app.transcript.last().unwrap().streaming);

        // Typing and executing are rejected mid-stream.
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input, "");
        app.execute("ls");
        assert_eq!(app.transcript.entries().len(), 1);

        // Let every line land.
        clock.advance(Duration::from_secs(10));
        app.tick();
        assert!(!app.is_streaming());
        let entry = app.transcript.last().unwrap();
        assert!(!entry.streaming);
        assert!(entry.output.contains("[ACCESS] Root shell acquired."));
    }

    #[test]
    fn matrix_command_opens_overlay_and_unlocks() {
        let (mut app, clock) = test_app();
        app.execute("matrix");
        assert!(app.matrix.is_some());
        assert!(app.achievements.get("matrix-entered").unwrap().unlocked);
        assert_eq!(app.transcript.last().unwrap().output, "");

        // Any key closes it.
        press(&mut app, KeyCode::Char('z'));
        assert!(app.matrix.is_none());

        // And it expires on its own too.
        app.execute("matrix");
        clock.advance(Duration::from_secs(6));
        app.tick();
        assert!(app.matrix.is_none());
    }

    #[test]
    fn flag_output_unlocks_secret_finder() {
        let (mut app, _clock) = test_app();
        app.execute("cat .secret");
        assert!(!app.achievements.get("secret-finder").unwrap().unlocked);
        app.execute("sudo cat .secret");
        assert!(app.achievements.get("secret-finder").unwrap().unlocked);
    }

    #[test]
    fn lang_command_toggles_language() {
        let (mut app, _clock) = test_app();
        assert_eq!(app.language(), Language::Fr);
        app.execute("lang");
        assert_eq!(app.language(), Language::En);
        assert!(app
            .transcript
            .last()
            .unwrap()
            .output
            .contains("Language: English"));
    }

    #[test]
    fn tab_with_single_match_completes_input() {
        let (mut app, _clock) = test_app();
        for c in "who".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input, "whoami");
        assert!(app.transcript.is_empty());
    }

    #[test]
    fn tab_with_many_matches_lists_them_without_executing() {
        let (mut app, _clock) = test_app();
        for c in "cat".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input, "cat");
        let entry = app.transcript.last().unwrap();
        assert_eq!(entry.output, "cat about.txt  cat .secret");
    }

    #[test]
    fn konami_sequence_enables_god_mode() {
        let (mut app, clock) = test_app();
        for code in [
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Char('b'),
            KeyCode::Char('a'),
        ] {
            press(&mut app, code);
        }
        assert!(app.god_mode_active());
        assert!(app.achievements.get("konami-code").unwrap().unlocked);

        clock.advance(GOD_MODE_DURATION);
        app.tick();
        assert!(!app.god_mode_active());
    }

    #[test]
    fn unlocks_surface_as_toasts() {
        let (mut app, _clock) = test_app();
        app.execute("sudo hire-me");
        app.tick();
        // first-visit queued at startup, so drain until hire-me shows.
        assert!(app.toasts.active().is_some());
        assert!(app.take_bell());
        assert!(!app.take_bell());
    }

    #[test]
    fn cli_overrides_never_reach_the_prefs_file() {
        let dir = tempfile::tempdir().unwrap();
        let prefs_path = dir.path().join("prefs.json");
        let clock = TestClock::shared();
        let mut app = App::new(
            clock,
            Prefs::default(),
            SessionOverrides {
                language: Some(Language::En),
                crt_mode: true,
                mute: true,
            },
            Some(prefs_path.clone()),
            None,
            false,
        );
        assert_eq!(app.language(), Language::En);
        assert!(app.crt_mode());

        // Toggling in-app replaces the override and persists the language,
        // nothing else.
        app.execute("lang");
        assert_eq!(app.language(), Language::Fr);
        let saved = Prefs::load(&prefs_path);
        assert_eq!(saved.language, Language::Fr);
        assert!(saved.sound_effects);
        assert!(!saved.crt_mode);
    }

    #[test]
    fn mute_override_silences_the_bell() {
        let clock = TestClock::shared();
        let mut app = App::new(
            clock,
            Prefs::default(),
            SessionOverrides {
                mute: true,
                ..SessionOverrides::default()
            },
            None,
            None,
            false,
        );
        app.execute("sudo hire-me");
        app.tick();
        assert!(app.toasts.active().is_some());
        assert!(!app.take_bell());
    }

    #[test]
    fn boot_skip_reaches_the_shell() {
        let clock = TestClock::shared();
        let mut app = App::new(
            clock.clone(),
            Prefs::default(),
            SessionOverrides::default(),
            None,
            None,
            true,
        );
        assert!(app.boot.is_some());

        // Keys other than skip do nothing during boot.
        press(&mut app, KeyCode::Char('x'));
        assert!(app.boot.is_some());
        assert_eq!(app.input, "");

        press(&mut app, KeyCode::Esc);
        for _ in 0..3 {
            clock.advance(Duration::from_secs(1));
            app.tick();
        }
        assert!(app.boot.is_none());
        assert!(app.prefs.boot_played);
    }
}
