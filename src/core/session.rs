// src/core/session.rs

use crate::{
    constants::ARG_INFO,
    core::status_parser,
    models::{Settings, StateSnapshot},
    state::StateCache,
    system::{
        executor::ToolRunner,
        host::Host,
        triggers::{self, TriggerEvent},
    },
};
use std::path::{Path, PathBuf};

/// Everything one running integration owns: the tool runner, the host UI,
/// the cached snapshot, the settings and the workspace root.
///
/// The session is the only writer of its [`StateCache`], and every flow
/// runs to completion on `&mut self`, so one interaction finishes (refresh
/// included) before the next starts.
#[derive(Debug)]
pub struct Session<R, H> {
    pub(crate) runner: R,
    pub(crate) host: H,
    pub(crate) cache: StateCache,
    pub(crate) settings: Settings,
    pub(crate) workspace: Option<PathBuf>,
}

impl<R: ToolRunner, H: Host> Session<R, H> {
    pub fn new(runner: R, host: H, settings: Settings, workspace: Option<PathBuf>) -> Self {
        Self {
            runner,
            host,
            cache: StateCache::new(),
            settings,
            workspace,
        }
    }

    pub fn snapshot(&self) -> &StateSnapshot {
        self.cache.snapshot()
    }

    pub fn cache(&self) -> &StateCache {
        &self.cache
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swaps in freshly loaded settings, tool command included; they apply
    /// from the next invocation.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn workspace(&self) -> Option<&Path> {
        self.workspace.as_deref()
    }

    /// Re-reads the tool's state and updates the status indicator.
    ///
    /// No workspace, a failed `swapenv info`, or an unusable payload all end
    /// the same way: an empty snapshot and a hidden indicator. None of these
    /// are reported to the user.
    pub async fn refresh(&mut self) {
        match self.workspace.clone() {
            None => {
                log::debug!("No workspace; status cleared");
                self.cache.clear();
            }
            Some(cwd) => {
                let info = self
                    .runner
                    .run(&self.settings.command, &to_args(ARG_INFO), &cwd)
                    .await;
                match info.as_deref().and_then(status_parser::parse_status_payload) {
                    Some(snapshot) => {
                        log::debug!("Refreshed snapshot: {:?}", snapshot);
                        self.cache.replace(snapshot);
                    }
                    None => {
                        log::debug!("No project detected in {}", cwd.display());
                        self.cache.clear();
                    }
                }
            }
        }

        let indicator = self.cache.indicator();
        self.host.show_status(&indicator);
    }

    /// Forwards one passive trigger. Returns `false` once the watch loop
    /// should stop.
    pub async fn handle_trigger(&mut self, event: &TriggerEvent) -> bool {
        if *event == TriggerEvent::Shutdown {
            return false;
        }
        if triggers::should_refresh(event, &self.settings) {
            log::debug!("Refreshing after {:?}", event);
            self.refresh().await;
        }
        true
    }

    /// Shows `message` unless notifications are turned off.
    pub(crate) fn notify(&mut self, message: &str) {
        if self.settings.show_notifications {
            self.host.show_info(message);
        } else {
            log::debug!("Notification suppressed: {}", message);
        }
    }
}

pub(crate) fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::testing::{FakeHost, FakeRunner, demo_session},
        models::{ProjectIdentity, StatusIndicator},
    };

    const INFO: &str = "info --format json";
    const DEMO_PAYLOAD: &str = r#"{"project":"demo","environment":"dev","envs":["dev","prod"]}"#;

    fn info_session(payload: &str) -> Session<FakeRunner, FakeHost> {
        demo_session(FakeRunner::new().respond(INFO, payload))
    }

    #[tokio::test]
    async fn test_refresh_populates_snapshot_and_status() {
        let mut session = info_session(DEMO_PAYLOAD);
        session.refresh().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.project, Some(ProjectIdentity::Named("demo".to_string())));
        assert_eq!(snapshot.active_environment.as_deref(), Some("dev"));
        assert_eq!(snapshot.known_environments, vec!["dev", "prod"]);
        assert_eq!(
            session.host().last_status().and_then(StatusIndicator::text),
            Some("dev")
        );
        assert_eq!(session.runner().calls(), vec![INFO]);
        assert_eq!(session.runner().commands(), vec!["swapenv"]);
    }

    #[tokio::test]
    async fn test_tool_failure_clears_previous_state() {
        let mut session = info_session(DEMO_PAYLOAD);
        session.refresh().await;
        assert!(session.cache().is_active());

        session.runner().fail(INFO);
        session.refresh().await;

        assert_eq!(session.snapshot(), &StateSnapshot::empty());
        assert_eq!(session.host().last_status(), Some(&StatusIndicator::Hidden));
    }

    #[tokio::test]
    async fn test_malformed_payloads_behave_like_failure() {
        for payload in ["{not json", "{}", "[1, 2]"] {
            let mut session = info_session(DEMO_PAYLOAD);
            session.refresh().await;

            session.runner().set(INFO, payload);
            session.refresh().await;

            assert_eq!(session.snapshot(), &StateSnapshot::empty(), "payload: {}", payload);
            assert_eq!(session.host().last_status(), Some(&StatusIndicator::Hidden));
        }
    }

    #[tokio::test]
    async fn test_no_workspace_clears_without_invoking() {
        let mut session = Session::new(
            FakeRunner::new().respond(INFO, DEMO_PAYLOAD),
            FakeHost::new(),
            Settings::default(),
            None,
        );
        session.refresh().await;

        assert!(session.runner().calls().is_empty());
        assert_eq!(session.snapshot(), &StateSnapshot::empty());
        assert_eq!(session.host().last_status(), Some(&StatusIndicator::Hidden));
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let mut session = info_session(DEMO_PAYLOAD);
        session.refresh().await;
        let first = session.snapshot().clone();
        session.refresh().await;

        assert_eq!(session.snapshot(), &first);
        assert_eq!(session.host().statuses.len(), 2);
        assert_eq!(session.host().statuses[0], session.host().statuses[1]);
    }

    #[tokio::test]
    async fn test_alternate_names_through_refresh() {
        let mut session = info_session(r#"{"name":"X","env":"Y"}"#);
        session.refresh().await;

        assert_eq!(session.snapshot().project, Some(ProjectIdentity::Named("X".to_string())));
        assert_eq!(session.snapshot().active_environment.as_deref(), Some("Y"));
    }

    #[tokio::test]
    async fn test_project_without_env_shows_placeholder() {
        let mut session = info_session(r#"{"project":"p"}"#);
        session.refresh().await;

        assert_eq!(
            session.host().last_status().and_then(StatusIndicator::text),
            Some(t!("status.no_env"))
        );
    }

    #[tokio::test]
    async fn test_triggers_respect_auto_refresh() {
        let mut session = info_session(DEMO_PAYLOAD);
        session.set_settings(Settings {
            auto_refresh: false,
            ..Default::default()
        });

        let saved = TriggerEvent::DocumentSaved(PathBuf::from("/ws/file.txt"));
        assert!(session.handle_trigger(&saved).await);
        assert!(session.runner().calls().is_empty());

        assert!(session.handle_trigger(&TriggerEvent::FocusChanged(false)).await);
        assert!(session.runner().calls().is_empty());

        assert!(session.handle_trigger(&TriggerEvent::FocusChanged(true)).await);
        assert_eq!(session.runner().calls().len(), 1);

        session.set_settings(Settings::default());
        assert!(session.handle_trigger(&saved).await);
        assert_eq!(session.runner().calls().len(), 2);

        assert!(!session.handle_trigger(&TriggerEvent::Shutdown).await);
        assert_eq!(session.runner().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_new_settings_change_the_invoked_command() {
        let mut session = info_session(DEMO_PAYLOAD);
        session.refresh().await;

        session.set_settings(Settings {
            command: "npx swapenv".to_string(),
            ..Default::default()
        });
        session.refresh().await;

        assert_eq!(session.runner().commands(), vec!["swapenv", "npx swapenv"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_reloaded_command_reaches_the_real_tool() {
        use crate::system::executor::SwapenvCli;

        let failing = Settings {
            command: "false".to_string(),
            ..Default::default()
        };
        let mut session = Session::new(
            SwapenvCli,
            FakeHost::new(),
            failing,
            Some(std::env::temp_dir()),
        );
        session.refresh().await;
        assert!(!session.cache().is_active());

        // The appended tool arguments become `$1`.. and the script ignores them.
        session.set_settings(Settings {
            command: r#"sh -c 'printf "%s" "{\"project\":\"p\"}"' sh"#.to_string(),
            ..Default::default()
        });
        session.refresh().await;

        assert!(session.cache().is_active());
        assert_eq!(session.snapshot().project, Some(ProjectIdentity::Named("p".to_string())));
    }
}
