mod cli;

use std::path::PathBuf;

use anyhow::Context;
use log::info;
use soundscan_core::load_sound_files;

use crate::cli::build_cli;

/// Resolve the default scan target: an `audio` directory located next to
/// the running executable.
fn default_audio_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    let install_dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(install_dir.join("audio"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = build_cli().get_matches();

    let audio_root = match matches.get_one::<PathBuf>("directory") {
        Some(directory) => directory.clone(),
        None => default_audio_root()?,
    };
    let dump_samples = matches.get_flag("samples");

    let sound_files = load_sound_files(&audio_root)
        .with_context(|| format!("failed to scan '{}'", audio_root.display()))?;
    info!(
        "loaded {} sound file(s) from '{}'",
        sound_files.len(),
        audio_root.display()
    );

    for sound_file in &sound_files {
        println!("{sound_file}");
        if dump_samples {
            println!("{:?}", sound_file.samples());
        }
    }

    Ok(())
}
