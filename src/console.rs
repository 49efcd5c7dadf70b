// Command console state machine for the landing page.
//
// The session owns no real timers; the caller feeds it wall-clock instants
// through `poll` and due deadlines fire there, one at a time. Dropping the
// session cancels everything still pending, including an armed launch.
use std::time::{Duration, Instant};

/// Commands that launch the universe. Matched after trimming whitespace and
/// lowercasing; no fuzzy matching.
pub const ACCEPTED_COMMANDS: &[&str] = &[
    "univers.run",
    "run univers",
    "univers.run()",
    "run",
    "start",
    "launch",
    "execute univers",
    "npm run univers",
    "./univers.run",
];

/// Where an accepted command navigates to.
pub const LAUNCH_DESTINATION: &str = "/code-univers";

/// Cursor blink half-period.
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// How long the typing indicator stays on after the last keystroke.
pub const TYPING_INDICATOR_TIMEOUT: Duration = Duration::from_millis(1000);

/// Delay between command acceptance and the navigation handoff.
pub const LAUNCH_DELAY: Duration = Duration::from_millis(1500);

/// Navigation collaborator. The console calls this exactly once per session,
/// [`LAUNCH_DELAY`] after a command is accepted.
pub trait Router {
    fn navigate_to(&mut self, path: &str);
}

/// Read-only snapshot of the console for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleView<'a> {
    pub buffer: &'a str,
    pub cursor_visible: bool,
    pub typing: bool,
    pub error: &'a str,
    pub loading: bool,
}

/// Interactive command session.
///
/// Invariants: `loading` and a non-empty error never hold at once; a
/// keystroke clears the error; `loading` becomes true at most once and the
/// input is dead from then on.
pub struct ConsoleSession {
    buffer: String,
    error: String,
    typing: bool,
    cursor_visible: bool,
    loading: bool,
    next_blink: Instant,
    typing_clear_at: Option<Instant>,
    launch_at: Option<Instant>,
}

impl ConsoleSession {
    pub fn new(now: Instant) -> Self {
        Self {
            buffer: String::new(),
            error: String::new(),
            typing: false,
            cursor_visible: true,
            loading: false,
            next_blink: now + CURSOR_BLINK_INTERVAL,
            typing_clear_at: None,
            launch_at: None,
        }
    }

    /// Store a keystroke's worth of input. No validation happens here.
    ///
    /// Each call replaces any pending typing-clear deadline, so the
    /// indicator goes dark 1 s after the LAST keystroke, never earlier.
    pub fn on_input(&mut self, text: &str, now: Instant) {
        if self.loading {
            // Field is disabled once a command is accepted.
            return;
        }
        self.buffer.clear();
        self.buffer.push_str(text);
        self.error.clear();
        self.typing = true;
        self.typing_clear_at = Some(now + TYPING_INDICATOR_TIMEOUT);
    }

    /// Validate the buffer against the accepted set.
    ///
    /// Acceptance arms the one-shot launch deadline; rejection echoes the
    /// original un-normalized text and clears the buffer. Rejection is a
    /// display state, not an error path: nothing is thrown or logged.
    pub fn on_submit(&mut self, now: Instant) {
        if self.loading {
            return;
        }
        let normalized = self.buffer.trim().to_lowercase();
        if ACCEPTED_COMMANDS.contains(&normalized.as_str()) {
            self.error.clear();
            self.loading = true;
            self.launch_at = Some(now + LAUNCH_DELAY);
        } else {
            self.error = format!("Unknown command \"{}\"", self.buffer);
            self.buffer.clear();
        }
    }

    /// Fire every deadline due at `now`, in order: cursor blinks, typing
    /// indicator clears, and an armed launch hands off to the router.
    pub fn poll(&mut self, now: Instant, router: &mut dyn Router) {
        while now >= self.next_blink {
            self.cursor_visible = !self.cursor_visible;
            self.next_blink += CURSOR_BLINK_INTERVAL;
        }

        if let Some(at) = self.typing_clear_at {
            if now >= at {
                self.typing = false;
                self.typing_clear_at = None;
            }
        }

        if let Some(at) = self.launch_at {
            if now >= at {
                self.launch_at = None;
                router.navigate_to(LAUNCH_DESTINATION);
            }
        }
    }

    /// The console's entire output contract toward the presentation layer.
    pub fn view(&self) -> ConsoleView<'_> {
        ConsoleView {
            buffer: &self.buffer,
            cursor_visible: self.cursor_visible,
            typing: self.typing,
            error: &self.error,
            loading: self.loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRouter {
        calls: Vec<String>,
    }

    impl Router for RecordingRouter {
        fn navigate_to(&mut self, path: &str) {
            self.calls.push(path.to_string());
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn every_accepted_literal_launches() {
        for cmd in ACCEPTED_COMMANDS {
            let t0 = Instant::now();
            let mut session = ConsoleSession::new(t0);
            session.on_input(cmd, t0);
            session.on_submit(t0 + ms(10));

            assert!(session.view().loading, "{cmd:?} should be accepted");
            assert!(session.view().error.is_empty());
        }
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        for raw in ["Run ", "  LAUNCH", "NPM RUN UNIVERS", " Univers.Run() "] {
            let t0 = Instant::now();
            let mut session = ConsoleSession::new(t0);
            session.on_input(raw, t0);
            session.on_submit(t0);
            assert!(session.view().loading, "{raw:?} should normalize to a hit");
        }
    }

    #[test]
    fn rejection_echoes_original_text_and_clears_buffer() {
        let t0 = Instant::now();
        let mut session = ConsoleSession::new(t0);
        session.on_input("go", t0);
        session.on_submit(t0);

        assert!(!session.view().loading);
        assert!(session.view().error.contains("go"), "error = {:?}", session.view().error);
        assert_eq!(session.view().buffer, "");
    }

    #[test]
    fn empty_submit_is_an_ordinary_rejection() {
        let t0 = Instant::now();
        let mut session = ConsoleSession::new(t0);
        session.on_submit(t0);

        assert!(!session.view().loading);
        assert!(!session.view().error.is_empty());
    }

    #[test]
    fn keystroke_clears_error() {
        let t0 = Instant::now();
        let mut session = ConsoleSession::new(t0);
        session.on_input("bogus", t0);
        session.on_submit(t0);
        assert!(!session.view().error.is_empty());

        session.on_input("r", t0 + ms(100));
        assert!(session.view().error.is_empty());
    }

    #[test]
    fn loading_and_error_are_mutually_exclusive() {
        let t0 = Instant::now();
        let mut session = ConsoleSession::new(t0);
        session.on_input("nope", t0);
        session.on_submit(t0);
        session.on_input("run", t0 + ms(10));
        session.on_submit(t0 + ms(20));

        assert!(session.view().loading);
        assert!(session.view().error.is_empty());
    }

    #[test]
    fn launch_fires_exactly_once_after_the_full_delay() {
        let t0 = Instant::now();
        let mut session = ConsoleSession::new(t0);
        let mut router = RecordingRouter::default();

        session.on_input("npm run univers", t0);
        session.on_submit(t0);

        session.poll(t0 + ms(1499), &mut router);
        assert!(router.calls.is_empty(), "fired early");

        session.poll(t0 + ms(1500), &mut router);
        assert_eq!(router.calls, vec![LAUNCH_DESTINATION.to_string()]);

        // Further polling must not repeat the handoff.
        session.poll(t0 + ms(3000), &mut router);
        session.poll(t0 + ms(4500), &mut router);
        assert_eq!(router.calls.len(), 1);
    }

    #[test]
    fn input_is_dead_while_loading() {
        let t0 = Instant::now();
        let mut session = ConsoleSession::new(t0);
        session.on_input("start", t0);
        session.on_submit(t0);
        assert!(session.view().loading);

        session.on_input("something else", t0 + ms(100));
        assert_eq!(session.view().buffer, "start");

        // Re-submitting must not arm a second launch.
        let mut router = RecordingRouter::default();
        session.on_submit(t0 + ms(200));
        session.poll(t0 + ms(5000), &mut router);
        assert_eq!(router.calls.len(), 1);
    }

    #[test]
    fn teardown_cancels_an_armed_launch() {
        let t0 = Instant::now();
        let router = RecordingRouter::default();
        {
            let mut session = ConsoleSession::new(t0);
            session.on_input("run", t0);
            session.on_submit(t0);
            // Session dropped before the delay elapses.
        }
        assert!(router.calls.is_empty());
    }

    #[test]
    fn typing_indicator_clears_one_second_after_last_keystroke() {
        let t0 = Instant::now();
        let mut session = ConsoleSession::new(t0);
        let mut router = RecordingRouter::default();

        session.on_input("u", t0);
        session.on_input("un", t0 + ms(600));

        // The first keystroke's deadline (t0 + 1000) was replaced.
        session.poll(t0 + ms(1100), &mut router);
        assert!(session.view().typing, "cleared at the first deadline");

        session.poll(t0 + ms(1600), &mut router);
        assert!(!session.view().typing);
    }

    #[test]
    fn cursor_blinks_on_an_exact_half_second_period() {
        let t0 = Instant::now();
        let mut session = ConsoleSession::new(t0);
        let mut router = RecordingRouter::default();

        assert!(session.view().cursor_visible);

        session.poll(t0 + ms(499), &mut router);
        assert!(session.view().cursor_visible);

        session.poll(t0 + ms(500), &mut router);
        assert!(!session.view().cursor_visible);

        session.poll(t0 + ms(999), &mut router);
        assert!(!session.view().cursor_visible);

        session.poll(t0 + ms(1000), &mut router);
        assert!(session.view().cursor_visible);

        // A sparse poll catches up on every missed toggle.
        session.poll(t0 + ms(2500), &mut router);
        assert!(!session.view().cursor_visible);
    }

    #[test]
    fn blink_period_ignores_input_activity() {
        let t0 = Instant::now();
        let mut session = ConsoleSession::new(t0);
        let mut router = RecordingRouter::default();

        session.on_input("r", t0 + ms(300));
        session.on_input("ru", t0 + ms(450));

        session.poll(t0 + ms(500), &mut router);
        assert!(!session.view().cursor_visible);
    }
}
