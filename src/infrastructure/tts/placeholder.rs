use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

pub const PLACEHOLDER_SECONDS: u32 = 2;

const SAMPLE_RATE: u32 = 22_050;

/// Synthesizes a short silent WAV entirely in memory.
///
/// This is the last tier of the audio pipeline: when both the remote
/// providers and the local engine are unavailable, the artifact contract
/// ("always playable bytes") still has to hold.
pub fn placeholder_wav() -> Vec<u8> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut buffer = Cursor::new(Vec::new());
    {
        // Writing into an in-memory buffer cannot fail.
        let mut writer =
            WavWriter::new(&mut buffer, spec).expect("wav header into memory buffer");
        for _ in 0..(SAMPLE_RATE * PLACEHOLDER_SECONDS) {
            writer
                .write_sample(0i16)
                .expect("silent sample into memory buffer");
        }
        writer.finalize().expect("finalize in-memory wav");
    }

    buffer.into_inner()
}
