use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use subcue_core::formatting::domain::cue_formatter::format_cues;
use subcue_core::formatting::domain::cue_parser::{parse_cues_detailed, ParsedCue};
use subcue_core::formatting::domain::cue_validation::validate_cues;
use subcue_core::formatting::domain::subtitle_export::{to_json, to_srt, to_vtt};
use subcue_core::pipeline::generate_subtitles_use_case::GenerateSubtitlesUseCase;
use subcue_core::segmentation::domain::segment_observer::LogSegmentObserver;
use subcue_core::segmentation::domain::segmenter::Segmenter;
use subcue_core::shared::config_loader::load_config;
use subcue_core::transcript::domain::transcription::MissingWordsPolicy;
use subcue_core::transcript::domain::transcription_reader::TranscriptionReader;
use subcue_core::transcript::infrastructure::json_transcription_reader::JsonTranscriptionReader;

/// Subtitle cues from word-level speech timestamps.
#[derive(Parser)]
#[command(name = "subcue")]
struct Cli {
    /// Log segmentation decisions.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Segment a transcription JSON file into subtitle cues.
    Generate {
        /// Transcription file: {"text": ..., "words": [{"word", "start", "end"}]}.
        input: PathBuf,

        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: text, srt, vtt or json.
        #[arg(long, default_value = "text")]
        format: String,

        /// Segmenter config JSON (defaults to the platform config file).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Maximum words per cue.
        #[arg(long)]
        max_words: Option<usize>,

        /// Hard ceiling on cue duration in seconds.
        #[arg(long)]
        max_duration: Option<f64>,

        /// Show the whole text as one cue when the transcription has no word timings.
        #[arg(long)]
        allow_missing_words: bool,
    },

    /// Parse a reviewed subtitle text block and report problems.
    Check {
        /// Subtitle text in `MM:SS.d - MM:SS.d` blocks.
        input: PathBuf,
    },

    /// Re-export a reviewed subtitle text block.
    Convert {
        /// Subtitle text in `MM:SS.d - MM:SS.d` blocks.
        input: PathBuf,

        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: text, srt or vtt.
        #[arg(long, default_value = "srt")]
        format: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Srt,
    Vtt,
    Json,
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    match value.to_ascii_lowercase().as_str() {
        "text" | "txt" => Ok(OutputFormat::Text),
        "srt" => Ok(OutputFormat::Srt),
        "vtt" | "webvtt" => Ok(OutputFormat::Vtt),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unknown format '{other}' (expected text, srt, vtt or json)")),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Generate {
            input,
            output,
            format,
            config,
            max_words,
            max_duration,
            allow_missing_words,
        } => {
            let format = parse_format(&format)?;
            let mut config = load_config(config.as_deref())?;
            if let Some(max_words) = max_words {
                config = config.with_max_words(max_words);
            }
            if let Some(max_duration) = max_duration {
                config = config.with_max_duration(max_duration);
            }
            config.validate()?;

            let policy = if allow_missing_words {
                MissingWordsPolicy::WholeText
            } else {
                MissingWordsPolicy::Fail
            };
            run_generate(&input, output.as_deref(), format, Segmenter::new(config), policy)
        }
        Command::Check { input } => run_check(&input),
        Command::Convert {
            input,
            output,
            format,
        } => run_convert(&input, output.as_deref(), parse_format(&format)?),
    }
}

fn run_generate(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    segmenter: Segmenter,
    policy: MissingWordsPolicy,
) -> Result<(), Box<dyn std::error::Error>> {
    let transcription = JsonTranscriptionReader::new().read(input)?;
    let mut use_case =
        GenerateSubtitlesUseCase::new(segmenter, Box::new(LogSegmentObserver::new()), policy);
    let cues = use_case.segment(&transcription)?;

    let rendered = match format {
        OutputFormat::Text => format_cues(&cues),
        OutputFormat::Srt => to_srt(&cues),
        OutputFormat::Vtt => to_vtt(&cues),
        OutputFormat::Json => to_json(&cues)?,
    };
    write_output(output, &rendered)?;
    log::info!("Generated {} cues from {} words", cues.len(), transcription.words.len());
    Ok(())
}

fn run_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let report = parse_cues_detailed(&fs::read_to_string(input)?);

    println!(
        "{} cues parsed, {} blocks skipped",
        report.cues.len(),
        report.skipped.len()
    );
    for skip in &report.skipped {
        println!("  skipped block {} ({:?}): {}", skip.block + 1, skip.reason, skip.header);
    }

    let violations = validate_cues(&report.cues);
    for violation in &violations {
        println!("  {violation}");
    }
    if !violations.is_empty() {
        return Err(format!("{} invariant violations", violations.len()).into());
    }
    Ok(())
}

fn run_convert(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = parse_cues_detailed(&fs::read_to_string(input)?);
    if !report.skipped.is_empty() {
        log::warn!("Dropped {} malformed blocks", report.skipped.len());
    }

    let cues: &[ParsedCue] = &report.cues;
    let rendered = match format {
        OutputFormat::Text => format_cues(cues),
        OutputFormat::Srt => to_srt(cues),
        OutputFormat::Vtt => to_vtt(cues),
        OutputFormat::Json => {
            return Err("json export needs segmenter output; use `generate --format json`".into())
        }
    };
    write_output(output, &rendered)
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            let mut contents = rendered.to_string();
            if !contents.ends_with('\n') {
                contents.push('\n');
            }
            fs::write(path, contents)?;
            log::info!("Output written to {}", path.display());
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}
