//! WAV track lookup and decoding.

use std::path::{Path, PathBuf};

use crate::error::AudioError;

/// Locate the audio file for a track name.
///
/// Tries `<dir>/<name>` when it is already a `.wav`, then `<dir>/<stem>.wav`.
pub fn find_track(dir: &Path, name: &str) -> Option<PathBuf> {
    let direct = dir.join(name);
    let is_wav = direct
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
    if is_wav && direct.is_file() {
        return Some(direct);
    }

    let stem = Path::new(name).file_stem()?;
    let mut candidate = dir.join(stem);
    candidate.set_extension("wav");
    candidate.is_file().then_some(candidate)
}

/// Decode a WAV file to mono f32 at `target_rate`
pub fn decode_wav(path: &Path, target_rate: u32) -> Result<Vec<f32>, AudioError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<_, _>>()?
        }
    };

    let mono: Vec<f32> = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect();

    tracing::debug!(
        path = %path.display(),
        rate = spec.sample_rate,
        channels,
        frames = mono.len(),
        "decoded track"
    );

    Ok(resample_linear(&mono, spec.sample_rate, target_rate))
}

/// Linear-interpolation resampler
pub fn resample_linear(input: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || input.is_empty() || from_rate == 0 || to_rate == 0 {
        return input.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let out_len = ((input.len() as f64) / ratio).floor() as usize;
    let last = input.len() - 1;

    (0..out_len)
        .map(|i| {
            let pos = i as f64 * ratio;
            let idx = pos.floor() as usize;
            let frac = (pos - idx as f64) as f32;
            let a = input[idx.min(last)];
            let b = input[(idx + 1).min(last)];
            a + (b - a) * frac
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("smoke-matrix-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_wav(path: &Path, rate: u32, channels: u16, samples: &[i16]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate: rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_find_track_by_stem() {
        let dir = scratch_dir("find");
        write_wav(&dir.join("galaxy.wav"), 8000, 1, &[0; 16]);

        assert_eq!(find_track(&dir, "galaxy.mp3"), Some(dir.join("galaxy.wav")));
        assert_eq!(find_track(&dir, "galaxy.wav"), Some(dir.join("galaxy.wav")));
        assert_eq!(find_track(&dir, "missing.mp3"), None);
    }

    #[test]
    fn test_decode_downmixes_stereo() {
        let dir = scratch_dir("decode");
        let path = dir.join("stereo.wav");
        // Left at half scale, right silent
        write_wav(&path, 8000, 2, &[16384, 0, 16384, 0, 16384, 0]);

        let mono = decode_wav(&path, 8000).unwrap();
        assert_eq!(mono.len(), 3);
        for s in mono {
            assert!((s - 0.25).abs() < 1e-4);
        }
    }

    #[test]
    fn test_resample_doubles_length() {
        let out = resample_linear(&[0.0, 1.0, 0.0, -1.0], 22_050, 44_100);
        assert_eq!(out.len(), 8);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 0.5).abs() < 1e-6);
        assert_eq!(out[2], 1.0);
    }

    #[test]
    fn test_resample_same_rate_is_identity() {
        let input = [0.1, 0.2, 0.3];
        assert_eq!(resample_linear(&input, 48_000, 48_000), input.to_vec());
    }
}
