use super::K;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};

pub const SAMPLE_RATE: u32 = 44_100;
pub const MAX_VOICES: usize = 8;

/// One playback stream over a shared buffer. Starting a voice retains
/// the buffer; the evaluator side never mutates a value once a voice may
/// be reading it, because verbs always build new values.
struct Voice {
    buffer: K,
    idx: usize,
    stereo: bool,
}

impl Voice {
    fn mix(&mut self, out: &mut [f32], frames: usize) {
        let samples = match self.buffer.samples() {
            Some(samples) => samples,
            None => return,
        };
        for frame in 0..frames {
            if self.idx >= samples.len() {
                break;
            }
            if self.stereo && self.idx + 1 < samples.len() {
                out[frame * 2] += samples[self.idx] as f32;
                out[frame * 2 + 1] += samples[self.idx + 1] as f32;
                self.idx += 2;
            } else {
                let sample = samples[self.idx] as f32;
                out[frame * 2] += sample;
                out[frame * 2 + 1] += sample;
                self.idx += 1;
            }
        }
    }

    fn done(&self) -> bool {
        self.idx >= self.buffer.len()
    }
}

/// ## Fixed pool of playback voices
///
/// Eight slots mixed into one interleaved stereo output. Reaching the end
/// of a buffer frees its slot.
#[derive(Default)]
pub struct VoicePool {
    voices: [Option<Voice>; MAX_VOICES],
}

pub type SharedVoices = Arc<Mutex<VoicePool>>;

impl VoicePool {
    pub fn new() -> VoicePool {
        VoicePool::default()
    }

    /// Installs a buffer in a free slot. Only flat numeric buffers play;
    /// anything else, or a full pool, is refused.
    pub fn start(&mut self, buffer: K, stereo: bool) -> Option<usize> {
        buffer.samples()?;
        let slot = self.voices.iter().position(|voice| voice.is_none())?;
        self.voices[slot] = Some(Voice {
            buffer,
            idx: 0,
            stereo,
        });
        Some(slot)
    }

    pub fn stop_all(&mut self) {
        for slot in self.voices.iter_mut() {
            *slot = None;
        }
    }

    /// Active voices as (slot, stereo, position, length).
    pub fn status(&self) -> Vec<(usize, bool, usize, usize)> {
        self.voices
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.as_ref()
                    .map(|voice| (i, voice.stereo, voice.idx, voice.buffer.len()))
            })
            .collect()
    }

    /// Sums every active voice into an interleaved stereo buffer,
    /// clearing it first. Mono voices play on both channels.
    pub fn mix_into(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = 0.0;
        }
        let frames = out.len() / 2;
        for slot in self.voices.iter_mut() {
            let finished = match slot {
                Some(voice) => {
                    voice.mix(out, frames);
                    voice.done()
                }
                None => false,
            };
            if finished {
                *slot = None;
            }
        }
    }
}

/// Opens the default output device at 44.1 kHz stereo and feeds it from
/// the pool. The callback never blocks: when the lock is contended it
/// emits silence for that buffer instead of stalling the audio thread.
pub fn open_stream(voices: SharedVoices) -> Result<cpal::Stream, String> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| "no audio output device".to_string())?;
    let config = cpal::StreamConfig {
        channels: 2,
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Default,
    };
    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| match voices.try_lock() {
                Ok(mut pool) => pool.mix_into(data),
                Err(_) => data.fill(0.0),
            },
            |err| eprintln!("audio stream error: {}", err),
            None,
        )
        .map_err(|err| err.to_string())?;
    stream.play().map_err(|err| err.to_string())?;
    Ok(stream)
}
