use std::io;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use crossterm::tty::IsTty;
use engine_logging::engine_info;
use url::Url;
use wayback_core::{update, FetchPhase, InfobarState, Msg};
use wayback_engine::{EngineHandle, ReqwestFetcher, WaybackClient};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::host::{InfobarContainer, NavigationController, TerminalNavigator};
use super::resources::EnglishResources;
use super::terminal::{print_help, spawn_input_reader, TerminalPlatform};
use super::theme::ThemeChoice;
use super::ui::{self, AppEvent};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app(config: AppConfig, page_url: Url, auto_check: bool) -> anyhow::Result<()> {
    let fetcher = Arc::new(ReqwestFetcher::new(config.fetch_settings()));
    let client = WaybackClient::new(fetcher).with_endpoint(config.lookup_endpoint.clone());
    let runner = EffectRunner::new(EngineHandle::new(client)?);

    let stdout = io::stdout();
    let ansi = stdout.is_tty();
    let navigator = TerminalNavigator::new(io::stdout());
    let container = TerminalPlatform::new(stdout, ansi);

    let mut app = InfobarApp::new(page_url, runner, navigator, container, config.theme);

    // Handled before stdin is read, so an already closed input cannot end the
    // loop ahead of the click.
    if auto_check {
        app.handle_event(AppEvent::ButtonClicked {
            control_id: ui::constants::BUTTON_CHECK,
        });
    }

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    print_help();
    spawn_input_reader(event_tx);

    run_event_loop(&mut app, &event_rx);

    engine_info!("wayback infobar finished");
    Ok(())
}

/// Feeds input events and engine completions to the app until the bar is
/// gone, the user quits, or input is closed and no lookup is left.
fn run_event_loop<N, C>(app: &mut InfobarApp<N, C>, event_rx: &mpsc::Receiver<AppEvent>)
where
    N: NavigationController,
    C: InfobarContainer,
{
    let mut input_closed = false;
    while !app.is_finished() {
        match event_rx.recv_timeout(POLL_INTERVAL) {
            Ok(AppEvent::QuitRequested) => break,
            Ok(AppEvent::InputClosed) => input_closed = true,
            Ok(event) => app.handle_event(event),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                input_closed = true;
                std::thread::sleep(POLL_INTERVAL);
            }
        }
        app.pump_engine();

        // Nobody can press anything any more; stop once the last lookup settles.
        if input_closed && !app.is_lookup_pending() {
            break;
        }
    }
}

/// One infobar wired to its collaborators.
pub struct InfobarApp<N, C> {
    state: Option<InfobarState>,
    runner: EffectRunner,
    navigator: N,
    container: C,
    theme: ThemeChoice,
}

impl<N, C> InfobarApp<N, C>
where
    N: NavigationController,
    C: InfobarContainer,
{
    pub fn new(
        page_url: Url,
        runner: EffectRunner,
        navigator: N,
        mut container: C,
        theme: ThemeChoice,
    ) -> Self {
        let mut state = InfobarState::new(page_url);
        let view = state.view();
        state.consume_dirty();

        // Controls are created and given their first visibility in one batch,
        // so nothing is drawn before the after-check group is hidden.
        let mut initial_commands = ui::layout::initial_commands(&EnglishResources);
        initial_commands.extend(ui::render::render(&view, theme.provider()));
        container.apply(initial_commands);

        Self {
            state: Some(state),
            runner,
            navigator,
            container,
            theme,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ButtonClicked { control_id } if control_id == ui::constants::BUTTON_CHECK => {
                self.dispatch_msg(Msg::CheckClicked);
            }
            AppEvent::CloseClicked => self.dispatch_msg(Msg::CloseClicked),
            AppEvent::ThemeToggled => {
                self.theme = self.theme.next();
                engine_info!("theme changed to {:?}", self.theme);
                self.dispatch_msg(Msg::ThemeChanged);
            }
            _ => {}
        }
    }

    pub fn pump_engine(&mut self) {
        while let Some(msg) = self.runner.poll() {
            self.dispatch_msg(msg);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.as_ref().map_or(true, InfobarState::is_dismissed)
    }

    pub fn is_lookup_pending(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| matches!(state.fetch_phase(), FetchPhase::Pending { .. }))
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let Some(state) = self.state.take() else {
            return;
        };
        let (state, effects) = update(state, msg);
        let view = state.view();
        let mut state = state;
        let was_dirty = state.consume_dirty();
        self.state = Some(state);

        if was_dirty && !view.dismissed {
            self.container
                .apply(ui::render::render(&view, self.theme.provider()));
        }
        self.runner
            .run(effects, &mut self.navigator, &mut self.container);
    }

    #[cfg(test)]
    fn state(&self) -> &InfobarState {
        self.state.as_ref().expect("state")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;
    use std::thread;

    use super::*;
    use bytes::Bytes;
    use pretty_assertions::assert_eq;
    use wayback_core::{LoadUrlParams, LookupOutcome, NotificationState, PageTransition};
    use wayback_engine::{FailureKind, Fetcher, LookupError};

    use crate::platform::ui::constants::{BUTTON_CHECK, LABEL_NOT_AVAILABLE};
    use crate::platform::ui::PlatformCommand;

    const FOUND_BODY: &str =
        r#"{"archived_snapshots":{"closest":{"url":"https://web.archive.org/X"}}}"#;

    #[derive(Default)]
    struct RecordingNavigator {
        loads: Vec<LoadUrlParams>,
    }

    impl NavigationController for RecordingNavigator {
        fn load_url(&mut self, params: &LoadUrlParams) {
            self.loads.push(params.clone());
        }
    }

    #[derive(Default)]
    struct RecordingContainer {
        batches: Vec<Vec<PlatformCommand>>,
        removed: usize,
    }

    impl InfobarContainer for RecordingContainer {
        fn apply(&mut self, commands: Vec<PlatformCommand>) {
            self.batches.push(commands);
        }

        fn remove_infobar(&mut self) {
            self.removed += 1;
        }
    }

    /// Answers every lookup with the same body or the same failure.
    struct StubFetcher {
        reply: Result<&'static str, FailureKind>,
    }

    #[async_trait::async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(&self, _url: &str) -> Result<Bytes, LookupError> {
            match &self.reply {
                Ok(body) => Ok(Bytes::from(body.to_string())),
                Err(kind) => Err(LookupError {
                    kind: kind.clone(),
                    message: kind.to_string(),
                }),
            }
        }
    }

    /// Writer whose contents stay readable after the platform takes it.
    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn runner_with(reply: Result<&'static str, FailureKind>) -> EffectRunner {
        let client = WaybackClient::new(Arc::new(StubFetcher { reply }));
        EffectRunner::new(EngineHandle::new(client).expect("engine"))
    }

    fn page_url() -> Url {
        Url::parse("https://example.com/missing").unwrap()
    }

    fn app_with(
        reply: Result<&'static str, FailureKind>,
    ) -> InfobarApp<RecordingNavigator, RecordingContainer> {
        InfobarApp::new(
            page_url(),
            runner_with(reply),
            RecordingNavigator::default(),
            RecordingContainer::default(),
            ThemeChoice::Light,
        )
    }

    fn app() -> InfobarApp<RecordingNavigator, RecordingContainer> {
        app_with(Err(FailureKind::SnapshotMissing))
    }

    fn press_check<N: NavigationController, C: InfobarContainer>(app: &mut InfobarApp<N, C>) {
        app.handle_event(AppEvent::ButtonClicked {
            control_id: BUTTON_CHECK,
        });
    }

    fn pump_until_settled<N: NavigationController, C: InfobarContainer>(
        app: &mut InfobarApp<N, C>,
    ) {
        for _ in 0..500 {
            app.pump_engine();
            if !app.is_lookup_pending() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("lookup never completed");
    }

    fn shows_not_available(batch: &[PlatformCommand]) -> bool {
        batch.contains(&PlatformCommand::SetControlVisible {
            control_id: LABEL_NOT_AVAILABLE,
            visible: true,
        })
    }

    #[test]
    fn startup_creates_and_renders_in_one_batch() {
        let app = app();

        assert_eq!(app.container.batches.len(), 1);
        let batch = &app.container.batches[0];
        assert!(batch.contains(&PlatformCommand::SetControlVisible {
            control_id: BUTTON_CHECK,
            visible: true,
        }));
        assert!(batch.contains(&PlatformCommand::SetControlVisible {
            control_id: LABEL_NOT_AVAILABLE,
            visible: false,
        }));
        assert_eq!(app.state().notification(), NotificationState::BeforeCheck);
    }

    #[test]
    fn first_terminal_line_hides_failure_group() {
        let buffer = SharedBuffer::default();
        let _app = InfobarApp::new(
            page_url(),
            runner_with(Err(FailureKind::SnapshotMissing)),
            RecordingNavigator::default(),
            TerminalPlatform::new(buffer.clone(), false),
            ThemeChoice::Light,
        );

        let output = String::from_utf8(buffer.0.borrow().clone()).unwrap();
        let first_line = output.lines().next().expect("a drawn line");
        assert!(first_line.contains("Sorry, that page is missing."));
        assert!(first_line.ends_with("[ Check for saved version ]"));
        assert!(!first_line.contains("not available"));
        assert!(!first_line.contains(":("));
    }

    #[test]
    fn check_before_closed_input_still_completes() {
        let mut app = app_with(Ok(FOUND_BODY));
        press_check(&mut app);

        let (event_tx, event_rx) = mpsc::channel();
        event_tx.send(AppEvent::InputClosed).unwrap();
        drop(event_tx);
        run_event_loop(&mut app, &event_rx);

        assert_eq!(
            app.navigator.loads,
            vec![LoadUrlParams::link("https://web.archive.org/X")]
        );
        assert_eq!(app.container.removed, 1);
    }

    #[test]
    fn closed_input_without_lookup_ends_loop() {
        let mut app = app();

        let (event_tx, event_rx) = mpsc::channel();
        event_tx.send(AppEvent::InputClosed).unwrap();
        run_event_loop(&mut app, &event_rx);

        assert!(!app.is_finished());
        assert!(app.navigator.loads.is_empty());
        assert_eq!(app.container.batches.len(), 1);
    }

    #[test]
    fn found_snapshot_navigates_and_removes_bar() {
        let mut app = app();
        press_check(&mut app);
        assert!(app.is_lookup_pending());

        app.dispatch_msg(Msg::LookupCompleted {
            request_id: 1,
            outcome: LookupOutcome::Found {
                url: "https://web.archive.org/X".to_string(),
            },
        });

        assert_eq!(
            app.navigator.loads,
            vec![LoadUrlParams {
                url: "https://web.archive.org/X".to_string(),
                referrer: None,
                transition: PageTransition::Link,
                extra_headers: String::new(),
            }]
        );
        assert_eq!(app.container.removed, 1);
        assert!(app.is_finished());
    }

    #[test]
    fn engine_success_navigates_and_removes_bar() {
        let mut app = app_with(Ok(FOUND_BODY));

        press_check(&mut app);
        pump_until_settled(&mut app);

        assert_eq!(
            app.navigator.loads,
            vec![LoadUrlParams::link("https://web.archive.org/X")]
        );
        assert_eq!(app.container.removed, 1);
        assert!(app.is_finished());
    }

    #[test]
    fn every_engine_failure_shows_not_available() {
        let failures = [
            Ok("not json"),
            Ok(r#"{"archived_snapshots":{}}"#),
            Err(FailureKind::HttpStatus(503)),
            Err(FailureKind::Network),
            Err(FailureKind::Cancelled),
            Err(FailureKind::TooLarge {
                max_bytes: 1024 * 1024,
                actual: None,
            }),
        ];

        for reply in failures {
            let mut app = app_with(reply.clone());

            press_check(&mut app);
            pump_until_settled(&mut app);

            let last = app.container.batches.last().expect("render");
            assert!(shows_not_available(last), "{reply:?} did not show failure");
            assert_eq!(
                app.state().notification(),
                NotificationState::AfterCheck,
                "{reply:?}"
            );
            assert!(app.navigator.loads.is_empty(), "{reply:?}");
            assert_eq!(app.container.removed, 0, "{reply:?}");
            let failure_renders = app
                .container
                .batches
                .iter()
                .filter(|batch| shows_not_available(batch))
                .count();
            assert_eq!(failure_renders, 1, "{reply:?}");
        }
    }

    #[test]
    fn not_available_shows_failure_group() {
        let mut app = app();
        press_check(&mut app);

        app.dispatch_msg(Msg::LookupCompleted {
            request_id: 1,
            outcome: LookupOutcome::NotAvailable,
        });

        let last = app.container.batches.last().expect("render");
        assert!(shows_not_available(last));
        assert!(last.contains(&PlatformCommand::SetControlVisible {
            control_id: BUTTON_CHECK,
            visible: false,
        }));
        assert!(app.navigator.loads.is_empty());
        assert_eq!(app.container.removed, 0);
        assert!(!app.is_finished());
    }

    #[test]
    fn theme_toggle_restyles_labels() {
        let mut app = app();
        let before = app.container.batches.len();

        app.handle_event(AppEvent::ThemeToggled);

        assert_eq!(app.container.batches.len(), before + 1);
        let last = app.container.batches.last().expect("render");
        assert!(last
            .iter()
            .any(|cmd| matches!(cmd, PlatformCommand::SetLabelColors { .. })));
    }

    #[test]
    fn close_removes_bar_without_navigation() {
        let mut app = app();

        app.handle_event(AppEvent::CloseClicked);

        assert_eq!(app.container.removed, 1);
        assert!(app.navigator.loads.is_empty());
        assert!(app.is_finished());
    }
}
