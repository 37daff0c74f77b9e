//! Procedural fallback voice for tracks with no audio file.

use glicol::Engine;

use crate::error::AudioError;
use crate::params::audio_constants::BLOCK_SIZE;

/// Glicol composition: a sine stepping through A3 B3 C4 D4 E4 F4 G4 A4,
/// one note every half second.
pub fn composition(gain: f32) -> String {
    format!(
        r#"
~gate: speed 0.5 >> seq 57 59 60 62 64 65 67 69
~amp: ~gate >> envperc 0.01 0.45
~pit: ~gate >> mul 261.63
o: sin ~pit >> mul ~amp >> mul {gain:.3}
"#
    )
}

/// Glicol engine rendered block by block, read one sample at a time
pub struct SynthVoice {
    engine: Engine<BLOCK_SIZE>,
    block: [f32; BLOCK_SIZE],
    cursor: usize,
}

impl SynthVoice {
    pub fn new(sample_rate: usize, gain: f32) -> Result<Self, AudioError> {
        let mut engine = Engine::<BLOCK_SIZE>::new();
        engine.set_sr(sample_rate);
        engine.update_with_code(&composition(gain));
        engine
            .update()
            .map_err(|e| AudioError::Synth(format!("{e:?}")))?;

        Ok(Self {
            engine,
            block: [0.0; BLOCK_SIZE],
            cursor: BLOCK_SIZE,
        })
    }

    pub fn next_sample(&mut self) -> f32 {
        if self.cursor == BLOCK_SIZE {
            let (buffers, _) = self.engine.next_block(vec![]);
            for (slot, s) in self.block.iter_mut().zip(buffers[0].iter()) {
                *slot = *s;
            }
            self.cursor = 0;
        }
        let s = self.block[self.cursor];
        self.cursor += 1;
        // Hard clip to keep the fallback voice at a safe level
        s.clamp(-0.5, 0.5)
    }
}
