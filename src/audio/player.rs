//! Playback element: a cpal output stream with play/pause transport.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use super::synthesis::SynthVoice;
use super::tap::SampleTap;
use super::track::{decode_wav, find_track};
use crate::error::AudioError;
use crate::params::audio_constants::TAP_CAPACITY;
use crate::params::AudioConfig;

/// Transport transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    Play,
    Pause,
    Ended,
}

enum Voice {
    Silent,
    Track { samples: Vec<f32>, pos: usize },
    Synth(Box<SynthVoice>),
}

impl Voice {
    /// `None` once a finite voice has run out
    fn next_sample(&mut self) -> Option<f32> {
        match self {
            Voice::Silent => Some(0.0),
            Voice::Track { samples, pos } => {
                let s = samples.get(*pos).copied()?;
                *pos += 1;
                Some(s)
            }
            Voice::Synth(synth) => Some(synth.next_sample()),
        }
    }
}

struct Transport {
    voice: Mutex<Voice>,
    playing: AtomicBool,
    events: Sender<PlaybackEvent>,
}

impl Transport {
    fn publish(&self, event: PlaybackEvent) {
        // Receivers are owned by the player, so the channel never disconnects
        let _ = self.events.send(event);
    }
}

/// Audio output with a single voice and a sample tap for analysis
pub struct AudioPlayer {
    transport: Arc<Transport>,
    events: Receiver<PlaybackEvent>,
    tap: SampleTap,
    sample_rate: u32,
    config: AudioConfig,
    current: Option<String>,
    _stream: cpal::Stream,
}

impl AudioPlayer {
    /// Open the default output device and start a (silent) stream
    pub fn new(config: &AudioConfig) -> Result<Self, AudioError> {
        config
            .analyser
            .validate()
            .map_err(AudioError::InvalidConfig)?;

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let supported = device.default_output_config()?;
        let sample_rate = supported.sample_rate().0;
        let channels = supported.channels() as usize;

        info!(
            device = %device.name().unwrap_or_else(|_| "Unknown".to_string()),
            sample_rate,
            channels,
            "audio output"
        );

        let (tx, rx) = unbounded();
        let transport = Arc::new(Transport {
            voice: Mutex::new(Voice::Silent),
            playing: AtomicBool::new(false),
            events: tx,
        });
        let tap = SampleTap::new(TAP_CAPACITY);

        let callback_transport = Arc::clone(&transport);
        let callback_tap = tap.clone();
        let stream = device.build_output_stream(
            &supported.into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                fill_output(data, channels, &callback_transport);
                callback_tap.push_frames(data, channels);
            },
            |err| error!("audio stream error: {err}"),
            None,
        )?;
        stream.play()?;

        Ok(Self {
            transport,
            events: rx,
            tap,
            sample_rate,
            config: config.clone(),
            current: None,
            _stream: stream,
        })
    }

    /// Swap in the voice for `track`: its WAV file if one exists, the synth
    /// otherwise. Playback state is unchanged.
    pub fn load(&mut self, track: &str) -> Result<(), AudioError> {
        let voice = match find_track(&self.config.tracks_dir, track) {
            Some(path) => {
                info!(track, path = %path.display(), "loading track");
                Voice::Track {
                    samples: decode_wav(&path, self.sample_rate)?,
                    pos: 0,
                }
            }
            None => {
                debug!(track, "no audio file, using synth voice");
                Voice::Synth(Box::new(SynthVoice::new(
                    self.sample_rate as usize,
                    self.config.synth_gain,
                )?))
            }
        };

        if let Ok(mut slot) = self.transport.voice.lock() {
            *slot = voice;
        }
        self.tap.clear();
        self.current = Some(track.to_string());
        Ok(())
    }

    pub fn play(&self) {
        if !self.transport.playing.swap(true, Ordering::AcqRel) {
            self.transport.publish(PlaybackEvent::Play);
        }
    }

    pub fn pause(&self) {
        if self.transport.playing.swap(false, Ordering::AcqRel) {
            self.transport.publish(PlaybackEvent::Pause);
        }
    }

    pub fn toggle(&self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.transport.playing.load(Ordering::Acquire)
    }

    /// Track currently loaded, if any
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Receiver for transport transitions
    pub fn events(&self) -> Receiver<PlaybackEvent> {
        self.events.clone()
    }

    /// Source handle for analysis
    pub fn tap(&self) -> &SampleTap {
        &self.tap
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// Output callback body: mono voice copied to every channel
fn fill_output(data: &mut [f32], channels: usize, transport: &Transport) {
    if !transport.playing.load(Ordering::Acquire) {
        data.fill(0.0);
        return;
    }

    let Ok(mut voice) = transport.voice.try_lock() else {
        // Voice is being swapped on the event-loop thread
        data.fill(0.0);
        return;
    };

    for frame in data.chunks_mut(channels.max(1)) {
        match voice.next_sample() {
            Some(s) => frame.fill(s),
            None => {
                frame.fill(0.0);
                if transport.playing.swap(false, Ordering::AcqRel) {
                    transport.publish(PlaybackEvent::Ended);
                }
            }
        }
    }
}
