use anyhow::{Context, Result, bail};
use chordsheet::transforms::metadata::MetadataUpdate;
use chordsheet::transforms::{self, TransformDescriptor};
use clap::{Arg, ArgMatches, Command};
use log::{LevelFilter, Log, Metadata, Record};

/// Writes records to stderr. Filtering is left to `log::max_level`.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(verbose: bool) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))?;
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    Ok(())
}

fn command() -> Command {
    Command::new("chordsheet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("ChordPro chord sheet tool")
        .arg(
            Arg::new("input")
                .help("Input chord sheet")
                .required(true)
                .value_name("INPUT_FILE")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file (stdout when omitted)")
                .value_name("OUTPUT_FILE")
                .index(2),
        )
        .arg(
            Arg::new("verbose")
                .help("Enable verbose output")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("transpose")
                .help("Transpose by semitones (e.g. +2, -3)")
                .long("transpose")
                .short('t')
                .allow_hyphen_values(true)
                .value_name("SEMITONES")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("to-key")
                .help("Transpose into this key (e.g. Bb, F#m)")
                .long("to-key")
                .value_name("KEY"),
        )
        .arg(
            Arg::new("flats")
                .help("Spell transposed chords with flats")
                .long("flats")
                .conflicts_with("sharps")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sharps")
                .help("Spell transposed chords with sharps")
                .long("sharps")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clean")
                .help("Normalize line endings and blank lines before parsing")
                .long("clean")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("validate")
                .help("Fail on unbalanced sections or chord brackets")
                .long("validate")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("title")
                .help("Set the title directive")
                .long("title")
                .value_name("TITLE"),
        )
        .arg(
            Arg::new("artist")
                .help("Set the artist directive")
                .long("artist")
                .value_name("ARTIST"),
        )
        .arg(
            Arg::new("capo")
                .help("Set the capo directive")
                .long("capo")
                .value_name("FRET")
                .value_parser(clap::value_parser!(i32).range(0..=12)),
        )
        .arg(
            Arg::new("key")
                .help("Set the key directive")
                .long("key")
                .value_name("KEY"),
        )
        .arg(
            Arg::new("sections")
                .help("Print the section layout instead of the song")
                .long("sections")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("detect-key")
                .help("Print the key of the (transposed) song")
                .long("detect-key")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("suggest")
                .help("Print common progressions in the song's key")
                .long("suggest")
                .action(clap::ArgAction::SetTrue),
        )
}

fn metadata_update(matches: &ArgMatches) -> MetadataUpdate<'_> {
    MetadataUpdate {
        title: matches.get_one::<String>("title").map(String::as_str),
        artist: matches.get_one::<String>("artist").map(String::as_str),
        capo: matches.get_one::<i32>("capo").copied(),
        key: matches.get_one::<String>("key").map(String::as_str),
    }
}

fn main() -> Result<()> {
    let matches = command().get_matches();

    let verbose = matches.get_flag("verbose");
    init_logging(verbose)?;
    log::info!("chordsheet v{}", env!("CARGO_PKG_VERSION"));

    let input_file = matches
        .get_one::<String>("input")
        .context("Missing input file")?;
    let output_file = matches.get_one::<String>("output");

    let prefer_sharps = if matches.get_flag("flats") {
        Some(false)
    } else if matches.get_flag("sharps") {
        Some(true)
    } else {
        None
    };

    let descriptor = TransformDescriptor {
        transpose_amount: matches.get_one::<i32>("transpose").copied().unwrap_or(0),
        target_key: matches.get_one::<String>("to-key").cloned(),
        prefer_sharps,
    };

    log::info!("Reading chord sheet: {}", input_file);
    let mut content = std::fs::read_to_string(input_file)
        .with_context(|| format!("Failed to read input file: {}", input_file))?;

    if matches.get_flag("clean") {
        content = transforms::clean::transform(&content);
    }

    if matches.get_flag("validate") {
        if let Err(e) = chordsheet::validate(&content) {
            bail!("{}: {}", input_file, e);
        }
        log::info!("Content is valid");
    }

    let update = metadata_update(&matches);
    if update != MetadataUpdate::default() {
        content = transforms::metadata::transform(&content, &update);
    }

    let song = chordsheet::parse_song(&content);
    log::info!("Parsed {} lines", song.lines.len());

    log::info!("Applying transforms...");
    let song = transforms::apply_transforms(&song, &descriptor);

    let mut report = Vec::new();
    if matches.get_flag("detect-key") || matches.get_flag("suggest") {
        let key = transforms::song_key(&song);
        if matches.get_flag("detect-key") {
            report.push(format!("key: {}", key.as_deref().unwrap_or("unknown")));
        }
        if matches.get_flag("suggest") {
            match &key {
                Some(key) => {
                    for progression in chordsheet::chord_suggestions(key) {
                        report.push(progression.join(" "));
                    }
                }
                None => log::warn!("No key to suggest progressions for"),
            }
        }
    }
    if matches.get_flag("sections") {
        for section in chordsheet::segment(&song) {
            let line = match &section.label {
                Some(label) => format!(
                    "{} \"{}\" ({} lines)",
                    section.section_type,
                    label,
                    section.lines.len()
                ),
                None => format!("{} ({} lines)", section.section_type, section.lines.len()),
            };
            report.push(line);
        }
    }

    let output = if report.is_empty() {
        chordsheet::serialize(&song)
    } else {
        report.join("\n")
    };

    match output_file {
        Some(output_file) => {
            log::info!("Writing chord sheet: {}", output_file);
            std::fs::write(output_file, output)
                .with_context(|| format!("Failed to write output file: {}", output_file))?;
        }
        None => println!("{}", output),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn test_init_logging_once() {
        assert!(init_logging(true).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(init_logging(false).is_err());
    }

    #[test]
    fn test_transpose_and_spelling_flags() {
        let matches = command()
            .try_get_matches_from(["chordsheet", "song.cho", "-t", "-3", "--flats"])
            .unwrap();
        assert_eq!(matches.get_one::<i32>("transpose"), Some(&-3));
        assert!(matches.get_flag("flats"));

        let conflict =
            command().try_get_matches_from(["chordsheet", "song.cho", "--flats", "--sharps"]);
        assert!(conflict.is_err());
    }

    #[test]
    fn test_metadata_flags() {
        let matches = command()
            .try_get_matches_from(["chordsheet", "song.cho", "--title", "Song", "--capo", "3"])
            .unwrap();
        assert_eq!(
            metadata_update(&matches),
            MetadataUpdate {
                title: Some("Song"),
                capo: Some(3),
                ..Default::default()
            }
        );

        let bad_capo = command().try_get_matches_from(["chordsheet", "song.cho", "--capo", "13"]);
        assert!(bad_capo.is_err());
    }
}
