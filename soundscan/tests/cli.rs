use std::error::Error;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Generate a small WAV fixture for testing.
///
/// The fixtures are produced on the fly with procedurally generated
/// sine-wave samples. This keeps the repository free from committed binary
/// assets while still exercising the decode path end-to-end.
fn write_test_tone<P: AsRef<Path>>(
    path: P,
    channels: u16,
    sample_rate: u32,
    frames: usize,
) -> Result<(), Box<dyn Error>> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for n in 0..frames {
        let theta = (n as f32 / sample_rate as f32) * 2.0 * std::f32::consts::PI * 440.0;
        let sample = (theta.sin() * i16::MAX as f32) as i16;
        for _ in 0..channels {
            writer.write_sample(sample)?;
        }
    }
    writer.finalize()?;
    Ok(())
}

#[test]
fn cli_prints_one_summary_line_per_file() -> Result<(), Box<dyn Error>> {
    let audio_dir = tempdir()?;
    write_test_tone(audio_dir.path().join("tone.wav"), 2, 44_100, 4_410)?;

    let mut cmd = Command::cargo_bin("soundscan")?;
    cmd.arg(audio_dir.path());
    cmd.assert()
        .success()
        .stdout("File name: tone.wav, Number of channels: 2, Length: 0.1s\n");

    audio_dir.close()?;
    Ok(())
}

#[test]
fn cli_dumps_sample_buffers_when_requested() -> Result<(), Box<dyn Error>> {
    let audio_dir = tempdir()?;
    write_test_tone(audio_dir.path().join("blip.wav"), 1, 8_000, 8)?;

    let mut cmd = Command::cargo_bin("soundscan")?;
    cmd.arg("--samples").arg(audio_dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("File name: blip.wav"))
        .stdout(predicate::str::contains("Mono("));

    audio_dir.close()?;
    Ok(())
}

#[test]
fn cli_succeeds_with_no_output_for_an_empty_directory() -> Result<(), Box<dyn Error>> {
    let audio_dir = tempdir()?;

    let mut cmd = Command::cargo_bin("soundscan")?;
    cmd.arg(audio_dir.path());
    cmd.assert().success().stdout(predicate::str::is_empty());

    audio_dir.close()?;
    Ok(())
}

#[test]
fn cli_reports_missing_directory() -> Result<(), Box<dyn Error>> {
    let parent = tempdir()?;
    let missing = parent.path().join("audio");

    let mut cmd = Command::cargo_bin("soundscan")?;
    cmd.arg(&missing);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("audio directory does not exist"));

    parent.close()?;
    Ok(())
}

#[test]
fn cli_fails_fast_on_an_invalid_wav() -> Result<(), Box<dyn Error>> {
    let audio_dir = tempdir()?;
    std::fs::write(audio_dir.path().join("notes.wav"), b"not an audio file")?;

    let mut cmd = Command::cargo_bin("soundscan")?;
    cmd.arg(audio_dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to decode"));

    audio_dir.close()?;
    Ok(())
}
