//! Realm swaps, resize, capture and teardown around a render backend.

use crossbeam_channel::{unbounded, Receiver, Sender};
use image::RgbaImage;
use tracing::{debug, info, warn};

use super::node::{NodeId, ParticleSystem, PointsMaterial, SceneGraph, SceneNode};
use super::{DrawCall, RenderBackend};
use crate::animation::{AnimationLoop, FrameState};
use crate::audio::Spectrum;
use crate::camera::Camera;
use crate::error::FrameError;
use crate::geometry;
use crate::params::CameraConfig;
use crate::realm::RealmDescriptor;

pub struct SceneManager<B: RenderBackend> {
    /// `None` once torn down
    backend: Option<B>,
    camera: Camera,
    graph: SceneGraph<B::Handle>,
    animation: AnimationLoop,
    subscribers: Vec<Sender<RealmDescriptor>>,
    next_id: u64,
    fullscreen: bool,
}

impl<B: RenderBackend> SceneManager<B> {
    pub fn new(backend: B, camera: CameraConfig, width: u32, height: u32) -> Self {
        Self {
            backend: Some(backend),
            camera: Camera::new(camera, width, height),
            graph: SceneGraph::default(),
            animation: AnimationLoop::new(),
            subscribers: Vec::new(),
            next_id: 0,
            fullscreen: false,
        }
    }

    /// Replace the active realm with the one derived from `track`.
    ///
    /// The previous node is detached and its resources released before the
    /// new node is attached. Returns `None` after teardown.
    pub fn rebuild(&mut self, track: &str) -> Option<RealmDescriptor> {
        let backend = self.backend.as_mut()?;

        let realm = RealmDescriptor::for_track(track);
        let buffer = geometry::generate(&realm.geometry());

        for old in self.graph.detach_all() {
            debug!(node = old.system.id.0, realm = old.system.realm.realm_name, "releasing node");
            backend.release(old.handle);
        }

        let system = ParticleSystem {
            id: NodeId(self.next_id),
            material: PointsMaterial::for_realm(&realm),
            geometry: buffer,
            realm: realm.clone(),
        };
        self.next_id += 1;

        let handle = backend.upload(&system);
        info!(
            track,
            seed = realm.seed,
            mode = realm.mode,
            realm = realm.realm_name,
            color = %realm.color.hex(),
            particles = system.point_count(),
            "realm built"
        );
        self.graph.attach(SceneNode { system, handle });

        self.animation.reset(realm.seed);
        self.animation.start();

        self.subscribers.retain(|tx| tx.send(realm.clone()).is_ok());
        Some(realm)
    }

    /// Receive a descriptor for every subsequent rebuild
    pub fn subscribe(&mut self) -> Receiver<RealmDescriptor> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// New viewport size: projection and surface follow
    pub fn resize(&mut self, width: u32, height: u32) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if width == 0 || height == 0 {
            debug!(width, height, "ignoring empty viewport");
            return;
        }
        self.camera.set_viewport(width, height);
        backend.resize(width, height);
    }

    /// Toggle fullscreen; returns the new state
    pub fn toggle_fullscreen(&mut self) -> bool {
        if let Some(backend) = self.backend.as_mut() {
            self.fullscreen = !self.fullscreen;
            backend.set_fullscreen(self.fullscreen);
        }
        self.fullscreen
    }

    /// Run one animation frame. `None` when the loop is not running.
    pub fn frame(&mut self, spectrum: Option<&Spectrum>) -> Option<FrameState> {
        let backend = self.backend.as_mut()?;
        let nodes = self.graph.children();
        let view_proj = self.camera.view_proj();
        self.animation.tick(spectrum, |frame| {
            backend.draw(DrawCall {
                nodes,
                view_proj,
                frame,
            })
        })
    }

    /// Render the current state off-screen and read it back
    pub fn capture(&mut self) -> Result<RgbaImage, FrameError> {
        let backend = self.backend.as_mut().ok_or(FrameError::Released)?;
        backend.capture(DrawCall {
            nodes: self.graph.children(),
            view_proj: self.camera.view_proj(),
            frame: self.animation.state(),
        })
    }

    /// Cancel the loop and release every resource. Later calls are no-ops.
    pub fn teardown(&mut self) {
        let Some(mut backend) = self.backend.take() else {
            warn!("teardown called twice");
            return;
        };
        self.animation.cancel();
        for node in self.graph.detach_all() {
            backend.release(node.handle);
        }
        backend.shutdown();
        self.subscribers.clear();
        info!(frames = self.animation.frames(), "scene torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.backend.is_none()
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    pub fn child_count(&self) -> usize {
        self.graph.child_count()
    }

    pub fn active_realm(&self) -> Option<&RealmDescriptor> {
        self.graph.active().map(|s| &s.realm)
    }

    pub fn frame_state(&self) -> &FrameState {
        self.animation.state()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

impl<B: RenderBackend> Drop for SceneManager<B> {
    fn drop(&mut self) {
        if self.backend.is_some() {
            self.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Blending;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Debug)]
    struct Log {
        uploads: Vec<u64>,
        releases: Vec<u64>,
        draws: usize,
        last_draw_nodes: usize,
        resizes: Vec<(u32, u32)>,
        fullscreen: Vec<bool>,
        shutdowns: usize,
    }

    /// Records every call; handles are node ids
    struct RecordingBackend {
        log: Rc<RefCell<Log>>,
        fail_draws: bool,
    }

    impl RecordingBackend {
        fn new() -> (Self, Rc<RefCell<Log>>) {
            let log = Rc::new(RefCell::new(Log::default()));
            (
                Self {
                    log: Rc::clone(&log),
                    fail_draws: false,
                },
                log,
            )
        }
    }

    impl RenderBackend for RecordingBackend {
        type Handle = u64;

        fn upload(&mut self, system: &ParticleSystem) -> u64 {
            self.log.borrow_mut().uploads.push(system.id.0);
            system.id.0
        }

        fn release(&mut self, handle: u64) {
            self.log.borrow_mut().releases.push(handle);
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.log.borrow_mut().resizes.push((width, height));
        }

        fn set_fullscreen(&mut self, fullscreen: bool) {
            self.log.borrow_mut().fullscreen.push(fullscreen);
        }

        fn draw(&mut self, call: DrawCall<'_, u64>) -> Result<(), FrameError> {
            let mut log = self.log.borrow_mut();
            log.draws += 1;
            log.last_draw_nodes = call.nodes.len();
            if self.fail_draws {
                return Err(FrameError::Capture("surface lost".into()));
            }
            Ok(())
        }

        fn capture(&mut self, call: DrawCall<'_, u64>) -> Result<RgbaImage, FrameError> {
            Ok(RgbaImage::new(4, 2 + call.nodes.len() as u32))
        }

        fn shutdown(&mut self) {
            self.log.borrow_mut().shutdowns += 1;
        }
    }

    fn manager() -> (SceneManager<RecordingBackend>, Rc<RefCell<Log>>) {
        let (backend, log) = RecordingBackend::new();
        (SceneManager::new(backend, CameraConfig::default(), 800, 600), log)
    }

    #[test]
    fn test_rebuild_returns_descriptor() {
        let (mut scene, _log) = manager();
        let realm = scene.rebuild("galaxy.mp3").unwrap();
        assert_eq!(realm.seed, 691_743_506);
        assert_eq!(realm.mode, 63);
        assert_eq!(realm.realm_name, "DATA_SPIRAL");
        assert_eq!(scene.active_realm(), Some(&realm));
    }

    #[test]
    fn test_two_rebuilds_leave_one_child() {
        let (mut scene, log) = manager();
        scene.rebuild("a.mp3");
        scene.rebuild("b.mp3");

        assert_eq!(scene.child_count(), 1);
        let log = log.borrow();
        assert_eq!(log.uploads, vec![0, 1]);
        assert_eq!(log.releases, vec![0]);
    }

    #[test]
    fn test_rebuild_sequence_releases_every_predecessor() {
        let (mut scene, log) = manager();
        for track in ["one", "two", "three", "two", "one"] {
            scene.rebuild(track);
            assert_eq!(scene.child_count(), 1);
        }
        assert_eq!(log.borrow().releases, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_node_carries_realm_material() {
        let (mut scene, _log) = manager();
        scene.rebuild("galaxy.mp3");
        let node = &scene.graph.children()[0].system;
        assert_eq!(node.material.opacity, 0.8);
        assert_eq!(node.material.blending, Blending::Additive);
        assert_eq!(node.material.color.hex(), "#7219e6");
        assert_eq!(node.material.size, 3.0);
        assert_eq!(node.point_count(), 15_506);
    }

    #[test]
    fn test_subscribers_receive_each_rebuild() {
        let (mut scene, _log) = manager();
        let rx = scene.subscribe();
        scene.rebuild("a");
        scene.rebuild("b");

        let names: Vec<_> = rx.try_iter().map(|r| r.seed).collect();
        assert_eq!(names, vec![97, 98]);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let (mut scene, _log) = manager();
        drop(scene.subscribe());
        scene.rebuild("a");
        assert!(scene.subscribers.is_empty());
    }

    #[test]
    fn test_frames_draw_active_node() {
        let (mut scene, log) = manager();
        assert!(scene.frame(None).is_none());

        scene.rebuild("a");
        let state = scene.frame(None).unwrap();
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.opacity, 0.6);
        assert_eq!(log.borrow().draws, 1);
        assert_eq!(log.borrow().last_draw_nodes, 1);
    }

    #[test]
    fn test_frame_errors_are_absorbed() {
        let (mut backend, log) = RecordingBackend::new();
        backend.fail_draws = true;
        let mut scene = SceneManager::new(backend, CameraConfig::default(), 800, 600);
        scene.rebuild("a");

        assert!(scene.frame(None).is_some());
        assert!(scene.frame(None).is_some());
        assert!(scene.is_running());
        assert_eq!(log.borrow().draws, 2);
    }

    #[test]
    fn test_teardown_releases_once() {
        let (mut scene, log) = manager();
        scene.rebuild("a");
        scene.teardown();
        scene.teardown();
        drop(scene);

        let log = log.borrow();
        assert_eq!(log.releases, vec![0]);
        assert_eq!(log.shutdowns, 1);
    }

    #[test]
    fn test_rebuild_after_teardown_is_noop() {
        let (mut scene, log) = manager();
        scene.teardown();

        assert!(scene.rebuild("late.mp3").is_none());
        assert_eq!(scene.child_count(), 0);
        assert!(log.borrow().uploads.is_empty());
        assert!(scene.frame(None).is_none());
        assert!(matches!(scene.capture(), Err(FrameError::Released)));
    }

    #[test]
    fn test_drop_tears_down() {
        let (mut scene, log) = manager();
        scene.rebuild("a");
        drop(scene);
        assert_eq!(log.borrow().shutdowns, 1);
        assert_eq!(log.borrow().releases, vec![0]);
    }

    #[test]
    fn test_resize_updates_camera_and_backend() {
        let (mut scene, log) = manager();
        scene.resize(1000, 500);
        scene.resize(0, 500);

        assert_eq!(scene.camera().aspect(), 2.0);
        assert_eq!(log.borrow().resizes, vec![(1000, 500)]);
    }

    #[test]
    fn test_fullscreen_toggles() {
        let (mut scene, log) = manager();
        assert!(scene.toggle_fullscreen());
        assert!(!scene.toggle_fullscreen());
        assert_eq!(log.borrow().fullscreen, vec![true, false]);
    }

    #[test]
    fn test_capture_uses_backend() {
        let (mut scene, _log) = manager();
        scene.rebuild("a");
        let image = scene.capture().unwrap();
        assert_eq!(image.dimensions(), (4, 3));
    }

    #[test]
    fn test_active_realm_tracks_rebuild_before_next_frame() {
        let (mut scene, _log) = manager();
        let events = scene.subscribe();
        scene.rebuild("a.mp3");
        scene.frame(None);
        scene.rebuild("b.mp3");

        // No frame since the second rebuild; the capture still pairs with "b"
        scene.capture().unwrap();
        assert_eq!(scene.active_realm(), Some(&RealmDescriptor::for_track("b.mp3")));
        assert_eq!(events.try_iter().count(), 2);
    }
}
