//! Microphone capture.
//!
//! [`CpalInput`] opens the input stream only for the length of one
//! recording. The stream callback appends mono samples to a shared buffer
//! until the [`Signal`] fires or the recording reaches its maximum length.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleRate, StreamConfig};
use tracing::{debug, info, warn};

use crate::error::{AudioError, Result};
use crate::wav::downmix_to_mono;

/// Sample rate asked of the device. Speech needs no more.
pub const CAPTURE_RATE: u32 = 16_000;

/// Longest single utterance.
pub const MAX_UTTERANCE: Duration = Duration::from_secs(30);

/// How often a running capture checks its signal.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// One-shot flag that ends a capture or a playback.
#[derive(Debug, Default)]
pub struct Signal {
    fired: AtomicBool,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&self) {
        self.fired.store(true, Ordering::Relaxed);
    }

    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }
}

/// Mono samples captured from the microphone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl Recording {
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.samples.len() as f64 / f64::from(self.sample_rate))
    }
}

/// Blocking microphone source.
pub trait AudioInput: Send + Sync {
    /// Record until `signal` fires. Runs on a blocking thread.
    fn record(&self, signal: &Signal) -> Result<Recording>;
}

/// Default system microphone through cpal.
#[derive(Debug, Clone)]
pub struct CpalInput {
    sample_rate: u32,
    max_duration: Duration,
}

impl CpalInput {
    /// Use the default input device, if the host has one.
    pub fn detect() -> Result<Self> {
        let device = cpal::default_host()
            .default_input_device()
            .ok_or(AudioError::NoInputDevice)?;
        info!(
            device = %device.name().unwrap_or_else(|_| "<unknown>".into()),
            "Microphone found"
        );
        Ok(Self {
            sample_rate: CAPTURE_RATE,
            max_duration: MAX_UTTERANCE,
        })
    }
}

impl AudioInput for CpalInput {
    fn record(&self, signal: &Signal) -> Result<Recording> {
        let (device, config) = resolve_device_and_config(self.sample_rate)?;
        let sample_rate = config.sample_rate.0;
        let channels = config.channels;
        debug!(sample_rate, channels, "Opening input stream");

        let buffer = Arc::new(Mutex::new(Vec::<f32>::new()));
        let sink = Arc::clone(&buffer);
        let stream = device
            .build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    let mut samples = sink.lock().unwrap_or_else(PoisonError::into_inner);
                    if channels <= 1 {
                        samples.extend_from_slice(data);
                    } else {
                        samples.extend(downmix_to_mono(data, channels));
                    }
                },
                |err| warn!(error = %err, "Audio capture error"),
                None,
            )
            .map_err(|e| AudioError::Stream(e.to_string()))?;
        stream
            .play()
            .map_err(|e| AudioError::Stream(e.to_string()))?;

        let started = Instant::now();
        while !signal.is_fired() && started.elapsed() < self.max_duration {
            std::thread::sleep(POLL_INTERVAL);
        }
        drop(stream);

        let samples = std::mem::take(&mut *buffer.lock().unwrap_or_else(PoisonError::into_inner));
        let recording = Recording {
            samples,
            sample_rate,
        };
        info!(duration_ms = recording.duration().as_millis(), "Recording finished");
        Ok(recording)
    }
}

/// Build a mono stream config at `sample_rate`, falling back to the device
/// default when the rate is not supported.
fn resolve_device_and_config(sample_rate: u32) -> Result<(Device, StreamConfig)> {
    let device = cpal::default_host()
        .default_input_device()
        .ok_or(AudioError::NoInputDevice)?;

    let desired = SampleRate(sample_rate);
    let supported = device
        .supported_input_configs()
        .map_err(|e| AudioError::Stream(e.to_string()))?
        .find(|c| {
            c.sample_format() == cpal::SampleFormat::F32
                && c.min_sample_rate() <= desired
                && desired <= c.max_sample_rate()
        });

    let config = match supported {
        Some(range) => {
            let mut config: StreamConfig = range.with_sample_rate(desired).into();
            config.channels = 1;
            config
        }
        None => {
            let default = device
                .default_input_config()
                .map_err(|e| AudioError::Stream(e.to_string()))?;
            warn!(
                wanted = sample_rate,
                using = default.sample_rate().0,
                channels = default.channels(),
                "Sample rate not supported; using the device default"
            );
            default.into()
        }
    };
    Ok((device, config))
}
