//! Smoke Matrix viewer
//!
//! Opens a window, renders the realm for the selected track and lets the
//! audio spectrum drive it.

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::Receiver;
use std::sync::Arc;
use tracing::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use smoke_matrix::audio::{AudioBridge, AudioPlayer, PlaybackEvent};
use smoke_matrix::cli::{self, Args};
use smoke_matrix::config::Config;
use smoke_matrix::hud;
use smoke_matrix::logging;
use smoke_matrix::playlist::Playlist;
use smoke_matrix::poster::{self, PosterCaption};
use smoke_matrix::realm::RealmDescriptor;
use smoke_matrix::rendering::WgpuBackend;
use smoke_matrix::scene::SceneManager;

/// Main application state
struct App {
    config: Config,
    playlist: Playlist,

    window: Option<Arc<Window>>,
    scene: Option<SceneManager<WgpuBackend>>,

    player: Option<AudioPlayer>,
    bridge: AudioBridge,
    playback_events: Option<Receiver<PlaybackEvent>>,

    realm_events: Option<Receiver<RealmDescriptor>>,
    current_realm: Option<RealmDescriptor>,

    frames: u64,
    /// Fatal setup error, returned from `main` after the loop exits
    setup_error: Option<anyhow::Error>,
}

impl App {
    fn new(config: Config, playlist: Playlist) -> Self {
        let bridge = AudioBridge::new(config.audio.analyser.clone());
        Self {
            config,
            playlist,
            window: None,
            scene: None,
            player: None,
            bridge,
            playback_events: None,
            realm_events: None,
            current_realm: None,
            frames: 0,
            setup_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_config = &self.config.window;
        let window_attributes = Window::default_attributes()
            .with_title(hud::window_title(&window_config.title, None, 0.0))
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width,
                window_config.height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("failed to create window")?,
        );

        let backend = pollster::block_on(WgpuBackend::new(Arc::clone(&window)))
            .context("failed to initialise renderer")?;

        let size = window.inner_size();
        let mut scene = SceneManager::new(
            backend,
            self.config.camera.clone(),
            size.width,
            size.height,
        );
        self.realm_events = Some(scene.subscribe());

        if self.config.audio.enabled {
            self.attach_audio();
        } else {
            info!("audio disabled, rendering without modulation");
        }

        self.window = Some(window);
        self.scene = Some(scene);

        let first = self.playlist.current().to_string();
        self.select_track(&first);
        Ok(())
    }

    /// Audio failures degrade to an unmodulated view
    fn attach_audio(&mut self) {
        let player = match AudioPlayer::new(&self.config.audio) {
            Ok(player) => player,
            Err(e) => {
                warn!("audio unavailable: {e}");
                return;
            }
        };
        if let Err(e) = self.bridge.attach(player.tap()) {
            warn!("audio analysis unavailable: {e}");
        }
        self.playback_events = Some(player.events());
        self.player = Some(player);
    }

    fn select_track(&mut self, track: &str) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        if scene.rebuild(track).is_none() {
            return;
        }

        if let Some(player) = self.player.as_mut() {
            match player.load(track) {
                Ok(()) => player.play(),
                Err(e) => warn!(track, "could not load audio: {e}"),
            }
        }
    }

    fn next_track(&mut self) {
        let track = self.playlist.next().to_string();
        self.select_track(&track);
    }

    fn previous_track(&mut self) {
        let track = self.playlist.previous().to_string();
        self.select_track(&track);
    }

    fn save_poster(&mut self) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };

        let frame = match scene.capture() {
            Ok(frame) => frame,
            Err(e) => {
                warn!("poster capture failed: {e}");
                return;
            }
        };
        // Realm of the attached node, in step with the playlist
        let Some(realm) = scene.active_realm().cloned() else {
            return;
        };

        let track = self.playlist.current();
        let image = poster::compose(&frame, &realm);
        match poster::save(&image, &self.config.poster.output_dir, track, &realm) {
            Ok(path) => {
                let caption = PosterCaption::new(track, &realm);
                info!(
                    path = %path.display(),
                    title = %caption.title,
                    dna = %caption.dna,
                    realm = %caption.realm,
                    "poster saved"
                );
            }
            Err(e) => warn!("poster save failed: {e}"),
        }
    }

    fn teardown(&mut self) {
        if let Some(scene) = self.scene.as_mut().filter(|s| !s.is_torn_down()) {
            scene.teardown();
        }
    }

    /// Render a single frame
    fn render_frame(&mut self) {
        let events = self
            .playback_events
            .as_ref()
            .map(|rx| rx.try_iter().collect::<Vec<_>>())
            .unwrap_or_default();
        let mut advance = false;
        for event in events {
            self.bridge.handle_event(event);
            advance |= event == PlaybackEvent::Ended;
        }
        if advance {
            info!(track = self.playlist.current(), "track ended");
            self.next_track();
        }

        if let Some(rx) = &self.realm_events {
            if let Some(realm) = rx.try_iter().last() {
                self.current_realm = Some(realm);
            }
        }

        let spectrum = self.bridge.refresh().copied();
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let Some(state) = scene.frame(spectrum.as_ref()) else {
            return;
        };

        self.frames += 1;
        let interval = self.config.window.status_interval_frames.max(1);
        if self.frames % interval == 0 {
            if let Some(window) = &self.window {
                window.set_title(&hud::window_title(
                    &self.config.window.title,
                    self.current_realm.as_ref(),
                    state.sync,
                ));
            }
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        match key {
            KeyCode::Escape => {
                self.teardown();
                event_loop.exit();
            }
            KeyCode::KeyF => {
                if let Some(scene) = self.scene.as_mut() {
                    let fullscreen = scene.toggle_fullscreen();
                    info!(fullscreen, "display mode changed");
                }
            }
            KeyCode::ArrowRight | KeyCode::KeyN => self.next_track(),
            KeyCode::ArrowLeft | KeyCode::KeyP => self.previous_track(),
            KeyCode::Space => {
                if let Some(player) = &self.player {
                    player.toggle();
                }
            }
            KeyCode::KeyS => self.save_poster(),
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let running = self.scene.as_ref().is_some_and(|s| s.is_running());
        if running {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init(event_loop) {
            error!("{e:#}");
            self.setup_error = Some(e);
            event_loop.exit();
            return;
        }

        info!("running: Esc quit, F fullscreen, N/P next/previous, Space play/pause, S poster");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.teardown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(scene) = self.scene.as_mut() {
                    scene.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, key),
            WindowEvent::RedrawRequested => self.render_frame(),
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = Config::load(args.config.as_deref());
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    args.apply(&mut config);

    logging::init(&config.logging);
    if let Err(e) = loaded {
        warn!("{e}; using defaults");
    }

    if args.list_realms {
        print!("{}", cli::realm_table());
        return Ok(());
    }

    let tracks = if args.tracks.is_empty() {
        Playlist::discover(&config.audio.tracks_dir)
    } else {
        args.tracks.clone()
    };
    let playlist = Playlist::new(tracks);

    if args.describe {
        let report = cli::describe(playlist.tracks()).context("failed to describe realms")?;
        print!("{report}");
        return Ok(());
    }

    info!(tracks = playlist.len(), "starting");

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config, playlist);
    event_loop.run_app(&mut app).context("event loop failed")?;

    app.teardown();
    match app.setup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
