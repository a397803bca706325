//! Enriches kanji dataset files with Hán Việt readings and splits them by JLPT level.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use eyre::WrapErr;
use hanviet::{enrich, kanji_bank::KanjiBank, kanjifile::Kanjifile, split};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
    time::Duration,
};

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Enrich {
            dictionary,
            kanji,
            output,
            delay,
        } => {
            run_enrich(&dictionary, &kanji, &output, Duration::from_millis(delay))?;
        }
        Command::Split { kanji, output_dir } => {
            run_split(&kanji, &output_dir)?;
        }
    }

    Ok(())
}

fn run_enrich(
    dictionary_path: &Path,
    kanji_path: &Path,
    output_path: &Path,
    delay: Duration,
) -> eyre::Result<()> {
    // nothing downstream can work without the dictionary, so failing to
    // load it aborts the whole run
    tracing::info!("loading dictionary");
    let bank = open(dictionary_path)?;
    let bank = KanjiBank::from(BufReader::new(bank))
        .wrap_err_with(|| format!("Failed to parse dictionary at '{}'", dictionary_path.display()))?;
    tracing::info!("dictionary mapped with {} kanji entries", bank.readings.len());

    let mut kanjifile = match read_kanjifile(kanji_path) {
        Ok(kanjifile) => kanjifile,
        Err(err) => {
            tracing::error!("Could not read kanji file at '{}': {err}", kanji_path.display());
            return Ok(());
        }
    };

    tracing::info!("enriching {} kanji entries", kanjifile.kanji.len());
    let stats = enrich::enrich(&mut kanjifile, &bank.readings, delay);

    tracing::info!("writing output");
    if let Err(err) = write_kanjifile(&kanjifile, output_path) {
        tracing::error!("Could not write output file '{}': {err}", output_path.display());
        return Ok(());
    }
    tracing::info!(
        "done: {} entries updated, {} entries had no Hán Việt reading",
        stats.modified,
        stats.skipped
    );
    Ok(())
}

fn run_split(kanji_path: &Path, output_dir: &Path) -> eyre::Result<()> {
    let kanjifile = match read_kanjifile(kanji_path) {
        Ok(kanjifile) => kanjifile,
        Err(err) => {
            tracing::error!("Could not read kanji file at '{}': {err}", kanji_path.display());
            return Ok(());
        }
    };

    if kanjifile.kanji.is_empty() {
        tracing::warn!("the kanji array in '{}' is empty or missing", kanji_path.display());
    }

    tracing::info!("splitting {} kanji entries", kanjifile.kanji.len());
    for (level, kanjifile) in split::split_by_level(kanjifile) {
        let path = output_dir.join(level.file_name());
        match write_kanjifile(&kanjifile, &path) {
            Ok(()) => tracing::info!(
                "created '{}' with {} entries",
                path.display(),
                kanjifile.kanji.len()
            ),
            Err(err) => tracing::error!("Could not write '{}': {err}", path.display()),
        }
    }
    Ok(())
}

fn read_kanjifile(path: &Path) -> eyre::Result<Kanjifile> {
    let file = open(path)?;
    let kanjifile = serde_json::from_reader(BufReader::new(file))?;
    Ok(kanjifile)
}

fn write_kanjifile(kanjifile: &Kanjifile, path: &Path) -> eyre::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, kanjifile)?;
    // dropping the writer would discard flush errors
    writer.flush()?;
    Ok(())
}

fn open(path: &Path) -> eyre::Result<File> {
    File::open(path).wrap_err_with(|| format!("Failed to open file at '{}'", path.display()))
}
