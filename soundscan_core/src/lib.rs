use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader};
use log::debug;
use thiserror::Error;

/// Errors that can occur while scanning a directory of WAV files.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Error returned when the target audio directory is absent or not a
    /// directory at all.
    #[error("audio directory does not exist: {0}")]
    MissingAudioDirectory(PathBuf),

    /// Error returned when a directory entry name is not valid UTF-8 and
    /// therefore cannot be carried as the record's file name.
    #[error("file name is not valid UTF-8: {0}")]
    InvalidFileName(PathBuf),

    /// Error produced when a candidate file cannot be decoded as a WAV
    /// container (missing, unreadable, corrupt header, truncated data).
    #[error("failed to decode '{path}' as a WAV file")]
    Decode {
        /// Path of the file that failed to decode.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: hound::Error,
    },

    /// Error returned for IEEE-float WAV files, which carry no integer PCM
    /// samples to normalize.
    #[error("'{0}' uses IEEE float samples; only integer PCM is supported")]
    UnsupportedSampleFormat(PathBuf),

    /// Error returned when the WAV header advertises a zero sample rate.
    #[error("'{0}' does not advertise a positive sample rate")]
    InvalidSampleRate(PathBuf),

    /// Wrapper around IO errors encountered while listing the directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Decoded PCM samples, normalized to 16-bit signed integers.
///
/// The variant records the channel layout: `Mono` holds one sample per
/// frame, `MultiChannel` holds frame-major interleaved samples for two or
/// more channels. Deriving the channel count is a match on the variant
/// rather than a runtime shape inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleData {
    /// Single-channel audio; one sample per frame.
    Mono(Vec<i16>),
    /// Two or more channels, interleaved frame by frame.
    MultiChannel {
        /// Number of interleaved channels, always >= 2.
        channels: u16,
        /// Interleaved samples; length is a multiple of `channels`.
        samples: Vec<i16>,
    },
}

impl SampleData {
    /// Build sample data from an interleaved buffer, selecting the variant
    /// from the channel count.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is zero or the buffer length is not a multiple
    /// of the channel count; both indicate a decoder contract violation.
    pub fn from_interleaved(channels: u16, samples: Vec<i16>) -> Self {
        assert!(channels > 0, "channel count must be positive");
        assert!(
            samples.len() % channels as usize == 0,
            "interleaved buffer length must be a multiple of the channel count"
        );

        if channels == 1 {
            SampleData::Mono(samples)
        } else {
            SampleData::MultiChannel { channels, samples }
        }
    }

    /// Number of audio channels.
    pub fn channel_count(&self) -> u16 {
        match self {
            SampleData::Mono(_) => 1,
            SampleData::MultiChannel { channels, .. } => *channels,
        }
    }

    /// Number of frames (sample positions across all channels).
    pub fn frame_count(&self) -> usize {
        match self {
            SampleData::Mono(samples) => samples.len(),
            SampleData::MultiChannel { channels, samples } => {
                samples.len() / usize::from(*channels)
            }
        }
    }

    /// Flat view of the samples in frame-major interleaved order.
    pub fn as_interleaved(&self) -> &[i16] {
        match self {
            SampleData::Mono(samples) => samples,
            SampleData::MultiChannel { samples, .. } => samples,
        }
    }

    /// Iterate over frames; each item holds one sample per channel.
    pub fn frames(&self) -> impl Iterator<Item = &[i16]> {
        self.as_interleaved()
            .chunks_exact(usize::from(self.channel_count()))
    }
}

/// One decoded WAV file.
///
/// Construction reads and decodes the file eagerly; a `SoundFile` is fully
/// populated and immutable once [`SoundFile::open`] returns.
#[derive(Debug, Clone)]
pub struct SoundFile {
    file_name: String,
    full_path: PathBuf,
    sample_rate: u32,
    samples: SampleData,
}

impl SoundFile {
    /// Open and decode the WAV file at `full_path`.
    ///
    /// Samples are normalized to 16-bit signed integers: narrower integer
    /// widths are promoted, wider integer widths are truncated with a direct
    /// numeric cast (wraparound on overflow, not saturation). IEEE-float
    /// files are rejected.
    pub fn open<S: Into<String>, P: Into<PathBuf>>(
        file_name: S,
        full_path: P,
    ) -> Result<Self, ScanError> {
        let file_name = file_name.into();
        let full_path = full_path.into();

        let mut reader = WavReader::open(&full_path).map_err(|source| ScanError::Decode {
            path: full_path.clone(),
            source,
        })?;
        let spec = reader.spec();
        debug!(
            "decoding '{}': {} Hz, {} channel(s), {} bits",
            full_path.display(),
            spec.sample_rate,
            spec.channels,
            spec.bits_per_sample
        );

        if spec.sample_rate == 0 {
            return Err(ScanError::InvalidSampleRate(full_path));
        }

        let interleaved: Vec<i16> = match spec.sample_format {
            SampleFormat::Float => {
                return Err(ScanError::UnsupportedSampleFormat(full_path));
            }
            SampleFormat::Int if spec.bits_per_sample <= 16 => reader
                .samples::<i16>()
                .collect::<Result<_, _>>()
                .map_err(|source| ScanError::Decode {
                    path: full_path.clone(),
                    source,
                })?,
            SampleFormat::Int => reader
                .samples::<i32>()
                .map(|sample| sample.map(|value| value as i16))
                .collect::<Result<_, _>>()
                .map_err(|source| ScanError::Decode {
                    path: full_path.clone(),
                    source,
                })?,
        };

        Ok(Self {
            file_name,
            full_path,
            sample_rate: spec.sample_rate,
            samples: SampleData::from_interleaved(spec.channels, interleaved),
        })
    }

    /// Base name of the source file.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Resolved path the file was read from.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Sample rate in Hz, always positive.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Decoded sample buffer.
    pub fn samples(&self) -> &SampleData {
        &self.samples
    }

    /// Number of frames in the sample buffer.
    pub fn frame_count(&self) -> usize {
        self.samples.frame_count()
    }

    /// Number of audio channels.
    pub fn channel_count(&self) -> u16 {
        self.samples.channel_count()
    }

    /// Duration of the audio in seconds, as a raw floating-point ratio.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / f64::from(self.sample_rate)
    }
}

impl fmt::Display for SoundFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File name: {}, Number of channels: {}, Length: {}s",
            self.file_name,
            self.channel_count(),
            self.duration_seconds()
        )
    }
}

/// Scan `audio_root` and decode every regular file in it as a WAV file.
///
/// The scan is non-recursive and preserves the native directory listing
/// order; no sorting is imposed. Directory entries that are not regular
/// files (subdirectories and other entry kinds, with symlinks resolved per
/// platform `is_file` semantics) are skipped.
///
/// The scan is fail-fast: the first file that fails to decode aborts the
/// whole scan and no partial results are returned.
pub fn load_sound_files(audio_root: &Path) -> Result<Vec<SoundFile>, ScanError> {
    if !audio_root.is_dir() {
        return Err(ScanError::MissingAudioDirectory(audio_root.to_path_buf()));
    }

    let mut sound_files = Vec::new();
    for entry in fs::read_dir(audio_root)? {
        let entry = entry?;
        let full_path = entry.path();
        if !full_path.is_file() {
            debug!("skipping non-file entry '{}'", full_path.display());
            continue;
        }

        let file_name = entry
            .file_name()
            .into_string()
            .map_err(|_| ScanError::InvalidFileName(full_path.clone()))?;
        sound_files.push(SoundFile::open(file_name, full_path)?);
    }

    Ok(sound_files)
}
