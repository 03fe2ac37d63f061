use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{Event, EventStream, KeyEvent};
use docpanel_core::{update, AppState, Msg, SettingsStore, ViewSettings};
use docpanel_engine::{EngineEvents, EngineHandle, ReqwestDocumentClient};
use futures_util::StreamExt;
use panel_logging::{panel_error, panel_info};
use tokio::time::{interval, interval_at, Instant, MissedTickBehavior};

use super::config::PanelConfig;
use super::effects::{map_event, EffectRunner};
use super::input::{map_key, InputAction, InputContext};
use super::terminal::{PanelTerminal, TerminalGuard};
use super::ui::constants::UI_TICK;
use super::{logging, persistence, ui};

pub async fn run_app(config: PanelConfig) -> anyhow::Result<()> {
    logging::initialize(&config.log_file, config.log_level());
    panel_info!(
        "docpanel starting against {} (locale {:?})",
        config.base_url,
        config.locale()
    );

    let client = ReqwestDocumentClient::new(config.client_settings())
        .with_context(|| format!("invalid backend url {:?}", config.base_url))?;
    let (engine, events) = EngineHandle::new(Arc::new(client));
    let mut app = App::new(&config, engine);

    let mut guard = TerminalGuard::enter().context("failed to set up terminal")?;
    let result = app
        .run(guard.terminal(), events, config.health_check_interval())
        .await;
    app.dispatch(Msg::Shutdown);
    drop(guard);

    if let Err(err) = &result {
        panel_error!("docpanel stopped with error: {:#}", err);
    } else {
        panel_info!("docpanel stopped");
    }
    result
}

struct App {
    state: AppState,
    store: SettingsStore,
    runner: EffectRunner,
    running: bool,
}

impl App {
    fn new(config: &PanelConfig, engine: EngineHandle) -> Self {
        let state = AppState::with_locale(config.locale());
        let store = SettingsStore::new(state.settings());
        let mut app = Self {
            state,
            store,
            runner: EffectRunner::new(engine),
            running: true,
        };

        if let Some(prefs) = persistence::load_preferences(&config.state_dir) {
            app.dispatch(Msg::RestorePreferences(prefs));
        }
        let initial = app.state.settings().preferences();
        app.store.subscribe(persistence::preference_saver(
            config.state_dir.clone(),
            initial,
        ));
        app.store.subscribe(log_health_changes(app.state.settings()));
        app
    }

    async fn run(
        &mut self,
        terminal: &mut PanelTerminal,
        mut events: EngineEvents,
        health_interval: Duration,
    ) -> anyhow::Result<()> {
        let mut ui_tick = interval(UI_TICK);
        ui_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut health_tick = interval_at(Instant::now() + health_interval, health_interval);
        health_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut input = EventStream::new();

        self.dispatch(Msg::Started);
        let mut force_draw = true;

        while self.running {
            if self.state.consume_dirty() | std::mem::take(&mut force_draw) {
                let view = self.state.view();
                terminal
                    .draw(|frame| ui::render::render(frame, &view))
                    .context("failed to draw frame")?;
            }

            tokio::select! {
                _ = ui_tick.tick() => self.dispatch(Msg::Tick),
                _ = health_tick.tick() => self.dispatch(Msg::HealthTick),
                Some(event) = events.recv() => self.dispatch(map_event(event)),
                maybe_event = input.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => self.handle_key(key),
                    Some(Ok(Event::Resize(..))) => force_draw = true,
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err).context("failed to read terminal input"),
                    None => self.running = false,
                },
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let context = InputContext {
            tab: self.state.settings().current_tab,
            dialog_open: self.state.has_dialog(),
        };
        match map_key(key, context) {
            Some(InputAction::Dispatch(msg)) => self.dispatch(msg),
            Some(InputAction::Quit) => {
                panel_info!("Quit requested");
                self.running = false;
            }
            None => {}
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
        self.store.publish(self.state.settings());
    }
}

fn log_health_changes(initial: ViewSettings) -> impl FnMut(&ViewSettings) + Send + 'static {
    let mut last = initial;
    move |settings: &ViewSettings| {
        if settings.health != last.health {
            panel_info!("Backend health changed: healthy={}", settings.health);
        }
        if settings.pipeline_busy != last.pipeline_busy {
            panel_info!("Pipeline busy changed: {}", settings.pipeline_busy);
        }
        last = *settings;
    }
}
