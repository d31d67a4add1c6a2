use std::path::Path;

/// Writes a buffer as a 32-bit float WAV file. Two channels mean the
/// samples are already interleaved L/R, halving the frame count.
pub fn write_wav(
    path: &Path,
    samples: &[f64],
    channels: u16,
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()
}
