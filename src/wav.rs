//! Minimal RIFF/WAVE writer for 16-bit PCM, little-endian throughout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use log::debug;

use crate::Error;

struct HeaderChunk {
    file_length: u32, // total file length minus 8, which is taken by "RIFF"
}

impl HeaderChunk {
    fn for_data(data_size: u32) -> HeaderChunk {
        // "WAVE" tag (4) + format chunk (24) + data chunk header (8).
        HeaderChunk {
            file_length: 36 + data_size,
        }
    }
}

/// Format sub-chunk fields; doubles as the per-file audio descriptor.
pub struct FormatChunk {
    tag: u16, // 1 (MS PCM)
    channels: u16,
    samples_per_sec: u32,
    avg_bytes_per_sec: u32,
    block_align: u16,
    bits_per_sample: u16,
}

impl FormatChunk {
    /// Descriptor for mono 16-bit PCM at the given rate.
    pub fn mono16(samples_per_sec: u32) -> FormatChunk {
        let channels = 1u16;
        let bits_per_sample = 16u16;

        let block_align = channels * (bits_per_sample / 8);
        let avg_bytes_per_sec = samples_per_sec * u32::from(block_align);

        FormatChunk {
            tag: 1,
            channels,
            samples_per_sec,
            avg_bytes_per_sec,
            block_align,
            bits_per_sample,
        }
    }

    fn data_size(&self, samples: &[i16]) -> u32 {
        (samples.len() * usize::from(self.bits_per_sample / 8)) as u32
    }
}

/// Serialize one complete WAV image into `w`. Pure encoding, no file
/// handling; chunk sizes are computed up front from the buffer length.
pub fn encode<W: Write>(mut w: W, format: &FormatChunk, samples: &[i16]) -> io::Result<()> {
    let data_size = format.data_size(samples);
    let header = HeaderChunk::for_data(data_size);

    // Header chunk
    w.write_all(b"RIFF")?;
    w.write_u32::<LittleEndian>(header.file_length)?;
    w.write_all(b"WAVE")?;

    // Format chunk
    w.write_all(b"fmt ")?;
    w.write_u32::<LittleEndian>(16)?; // length of the format fields
    w.write_u16::<LittleEndian>(format.tag)?;
    w.write_u16::<LittleEndian>(format.channels)?;
    w.write_u32::<LittleEndian>(format.samples_per_sec)?;
    w.write_u32::<LittleEndian>(format.avg_bytes_per_sec)?;
    w.write_u16::<LittleEndian>(format.block_align)?;
    w.write_u16::<LittleEndian>(format.bits_per_sample)?;

    // Data chunk
    w.write_all(b"data")?;
    w.write_u32::<LittleEndian>(data_size)?;
    for &sample in samples {
        w.write_i16::<LittleEndian>(sample)?;
    }

    Ok(())
}

/// Create (or overwrite) `path` and write one complete WAV file. The handle
/// is flushed and closed on every exit path; failures carry the path.
pub fn write_file(path: &Path, format: &FormatChunk, samples: &[i16]) -> Result<(), Error> {
    let ctx = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(ctx)?;
    let mut bw = BufWriter::new(file);
    encode(&mut bw, format, samples).map_err(ctx)?;
    bw.flush().map_err(ctx)?;

    debug!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn le_u16(buf: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([buf[at], buf[at + 1]])
    }

    fn le_u32(buf: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
    }

    #[test]
    fn header_fields_are_byte_exact() {
        let samples = [0i16, 1, -1, 9_830];
        let mut buf = Vec::new();
        encode(&mut buf, &FormatChunk::mono16(44_100), &samples).unwrap();

        assert_eq!(buf.len(), 44 + 8);
        assert_eq!(&buf[0..4], b"RIFF");
        assert_eq!(le_u32(&buf, 4), 36 + 8);
        assert_eq!(&buf[8..12], b"WAVE");

        assert_eq!(&buf[12..16], b"fmt ");
        assert_eq!(le_u32(&buf, 16), 16);
        assert_eq!(le_u16(&buf, 20), 1); // PCM
        assert_eq!(le_u16(&buf, 22), 1); // mono
        assert_eq!(le_u32(&buf, 24), 44_100);
        assert_eq!(le_u32(&buf, 28), 88_200);
        assert_eq!(le_u16(&buf, 32), 2); // block align
        assert_eq!(le_u16(&buf, 34), 16);

        assert_eq!(&buf[36..40], b"data");
        assert_eq!(le_u32(&buf, 40), 8);
        assert_eq!(i16::from_le_bytes([buf[48], buf[49]]), -1);
        assert_eq!(i16::from_le_bytes([buf[50], buf[51]]), 9_830);
    }

    #[test]
    fn round_trips_through_an_independent_decoder() {
        let dir = std::env::temp_dir().join(format!("soundgen-wav-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tone.wav");

        let samples: Vec<i16> = (0..1_000i16).map(|i| (i % 128) - 64).collect();
        write_file(&path, &FormatChunk::mono16(44_100), &samples).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
        assert_eq!(reader.len(), 1_000);

        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_parent_directory_reports_the_path() {
        let dir = std::env::temp_dir().join(format!("soundgen-absent-{}", std::process::id()));
        let path = dir.join("tone.wav");

        let err = write_file(&path, &FormatChunk::mono16(44_100), &[0]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("tone.wav"));
    }
}
