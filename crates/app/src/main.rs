use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;

use vapgen_app::cli::Cli;
use vapgen_app::input::DetectorTranscript;
use vapgen_app::probe::wav_duration_secs;
use vapgen_app::writer::DatasetWriter;
use vapgen_core::Windower;

fn init_logging() -> Result<()> {
    std::fs::create_dir_all("logs")?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, "logs", "vapgen.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout.and(non_blocking_file))
        .with_env_filter(log_level)
        .init();
    std::mem::forget(_guard);
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    tracing::info!(transcript = %cli.transcript.display(), "starting vapgen");

    let session = DetectorTranscript::load(&cli.transcript)?.into_session()?;
    tracing::info!(
        speaker_a = %session.speaker_ids[0],
        speaker_b = %session.speaker_ids[1],
        intervals_a = session.channels[0].len(),
        intervals_b = session.channels[1].len(),
        "transcript loaded"
    );

    let duration = match (session.duration, &cli.audio) {
        (Some(duration), _) => duration,
        (None, Some(audio)) => {
            let duration = wav_duration_secs(audio)?;
            tracing::info!(duration, audio = %audio.display(), "duration probed from WAV header");
            duration
        }
        (None, None) => {
            bail!("transcript carries no duration; pass --audio <wav> to probe it")
        }
    };

    let audio_path = session
        .audio_path
        .clone()
        .or_else(|| cli.audio.as_ref().map(|p| p.display().to_string()))
        .context("no audio reference: set audio_path in the transcript or pass --audio")?;

    let config = cli.window_config();
    let windower = Windower::new(
        &session.channels[0],
        &session.channels[1],
        duration,
        config,
    )?;

    if windower.window_count() == 0 {
        tracing::warn!(
            duration,
            window_length = config.window_length,
            "recording shorter than one window; writing an empty table"
        );
    }

    let mut writer = DatasetWriter::create(&cli.output_csv)?;
    for row in windower.rows(&audio_path, cli.session, &cli.dataset) {
        writer.write_row(&row)?;
    }
    let rows = writer.finish()?;

    tracing::info!(rows, output = %cli.output_csv.display(), "dataset written");
    Ok(())
}
