use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use braille_translator_lib::api::commands::translator::{detect_braille, list_languages, translate_text};
use braille_translator_lib::build_session;
use braille_translator_lib::core::features::ingest;
use braille_translator_lib::shared::emit::EventBus;
use braille_translator_lib::shared::error::{AppError, AppResult};
use braille_translator_lib::shared::settings::AppSettings;
use braille_translator_lib::shared::types::TranslateRequest;

/// Translate text, or transliterate between English and Braille.
#[derive(Debug, Parser)]
#[command(name = "braille-translator", version, about)]
struct Cli {
    /// Text to translate; read from stdin when neither this nor --file is given
    text: Option<String>,

    /// Input language code ("braille", "auto", or an ISO 639 code)
    #[arg(long, short = 'f')]
    from: Option<String>,

    /// Output language code
    #[arg(long, short = 't')]
    to: Option<String>,

    /// Read input from a plain-text file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Only report whether the input looks like Braille
    #[arg(long)]
    detect: bool,

    /// List selectable languages and exit
    #[arg(long)]
    languages: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn read_input(cli: &Cli, max_chars: usize) -> AppResult<String> {
    if let Some(path) = &cli.file {
        return ingest::read_text_file(path, max_chars).await;
    }
    if let Some(text) = &cli.text {
        return Ok(ingest::accept_transcript(text, max_chars));
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(ingest::accept_transcript(&buffer, max_chars))
}

async fn run(cli: Cli) -> AppResult<()> {
    if cli.languages {
        for lang in list_languages() {
            println!("{:<8} {} ({})", lang.code, lang.name, lang.native);
        }
        return Ok(());
    }

    let settings = AppSettings::load().await.unwrap_or_else(|e| {
        tracing::warn!("[Settings] Falling back to defaults: {}", e);
        AppSettings::default()
    });
    let text = read_input(&cli, settings.preferences.max_input_chars).await?;

    if cli.detect {
        let detected = detect_braille(&text);
        println!("{}", serde_json::to_string(&detected)?);
        return Ok(());
    }

    let session = build_session(&settings, EventBus::new())?;
    let request = TranslateRequest {
        text,
        source_lang: cli.from.unwrap_or(settings.preferences.default_source_lang),
        target_lang: cli.to.unwrap_or(settings.preferences.default_target_lang),
    };

    match translate_text(&session, request).await? {
        Some(response) => {
            if response.auto_detected {
                tracing::info!("Braille input detected; translating braille -> en");
            }
            println!("{}", response.translated);
            Ok(())
        }
        None => Err(AppError::Unknown("Translation was superseded".to_string())),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
