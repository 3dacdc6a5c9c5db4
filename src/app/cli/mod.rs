//! CLI Adapter.

use std::io::IsTerminal;

use clap::{Args, Parser, Subcommand};
use dialoguer::{Input, Password};

use crate::app::commands::generate;
use crate::app::config;
use crate::domain::{AppError, Audience, GenerationRequest, Length, Platform, Tone, valid_names};
use crate::services::{CredentialSource, HttpGroqClient, compile_prompt, resolve_api_key};

#[derive(Parser)]
#[command(name = "copygen")]
#[command(version)]
#[command(
    about = "Generate SEO-optimized marketing copy through the Groq completion API",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the prompt and generate content
    #[clap(visible_alias = "g")]
    Generate(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Topic to write about (prompted interactively when omitted)
    topic: Option<String>,
    /// Platform: Instagram, Facebook, LinkedIn, Blog, or E-mail
    #[arg(short, long, default_value = "Instagram")]
    platform: String,
    /// Tone: Normal, Informative, Inspiring, Urgent, or Informal
    #[arg(short, long, default_value = "Normal")]
    tone: String,
    /// Length: Short, Medium, or Long
    #[arg(short, long, default_value = "Short")]
    length: String,
    /// Audience: All, Young-adults, Families, Seniors, or Teenagers
    #[arg(short, long, default_value = "All")]
    audience: String,
    /// Include a clear call to action
    #[arg(long)]
    cta: bool,
    /// Append relevant hashtags to the text
    #[arg(long)]
    hashtags: bool,
    /// Comma-separated SEO keywords
    #[arg(short, long, default_value = "")]
    keywords: String,
    /// Groq API key (falls back to GROQ_API_KEY unless --no-env-key)
    #[arg(long)]
    api_key: Option<String>,
    /// Never read the API key from the environment
    #[arg(long)]
    no_env_key: bool,
    /// Override the configured model identifier
    #[arg(short, long)]
    model: Option<String>,
    /// Print the compiled prompt without calling the service
    #[arg(long)]
    dry_run: bool,
    /// Disable interactive prompts for missing inputs
    #[arg(long)]
    no_input: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => run_generate(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let topic = resolve_topic(args.topic, args.no_input)?;

    let request = GenerationRequest {
        topic,
        platform: parse_platform(&args.platform)?,
        tone: parse_tone(&args.tone)?,
        length: parse_length(&args.length)?,
        audience: parse_audience(&args.audience)?,
        include_cta: args.cta,
        include_hashtags: args.hashtags,
        keywords: args.keywords,
    };
    request.validate()?;

    if args.dry_run {
        let prompt = compile_prompt(&request)?;
        println!("{}", prompt.user);
        return Ok(());
    }

    let source = if args.no_env_key {
        CredentialSource::ExplicitOnly
    } else {
        CredentialSource::ExplicitThenEnv
    };
    let api_key = resolve_key(args.api_key.as_deref(), source, args.no_input)?;

    let mut api_config = config::load_api_config()?;
    if let Some(model) = args.model {
        api_config.model = model;
    }

    let client = HttpGroqClient::new(api_key, &api_config)?;

    // Working indication while the blocking call is in flight.
    eprintln!("Generating {} content with {}...", request.platform, api_config.model);

    let outcome = generate::execute(&request, &client)?;
    println!("{}", outcome.text);
    Ok(())
}

/// Use the positional topic, or fall back to an interactive prompt on a TTY.
fn resolve_topic(topic: Option<String>, no_input: bool) -> Result<String, AppError> {
    if let Some(topic) = topic {
        return Ok(topic);
    }

    if no_input || !std::io::stdin().is_terminal() {
        return Err(AppError::EmptyTopic);
    }

    Input::new()
        .with_prompt("Topic")
        .allow_empty(true)
        .interact_text()
        .map_err(|err| AppError::Validation(format!("Failed to read topic: {}", err)))
}

/// Resolve the API key, falling back to a masked prompt on a TTY.
fn resolve_key(
    explicit: Option<&str>,
    source: CredentialSource,
    no_input: bool,
) -> Result<String, AppError> {
    match resolve_api_key(explicit, source) {
        Ok(key) => Ok(key),
        Err(AppError::MissingApiKey) if !no_input && std::io::stdin().is_terminal() => {
            let key = Password::new()
                .with_prompt("Groq API key")
                .allow_empty_password(true)
                .interact()
                .map_err(|err| AppError::Validation(format!("Failed to read API key: {}", err)))?;

            if key.trim().is_empty() {
                return Err(AppError::MissingApiKey);
            }
            Ok(key.trim().to_string())
        }
        Err(err) => Err(err),
    }
}

fn parse_platform(name: &str) -> Result<Platform, AppError> {
    Platform::from_name(name).ok_or_else(|| AppError::InvalidChoice {
        field: "platform",
        name: name.to_string(),
        valid: valid_names(&Platform::ALL),
    })
}

fn parse_tone(name: &str) -> Result<Tone, AppError> {
    Tone::from_name(name).ok_or_else(|| AppError::InvalidChoice {
        field: "tone",
        name: name.to_string(),
        valid: valid_names(&Tone::ALL),
    })
}

fn parse_length(name: &str) -> Result<Length, AppError> {
    Length::from_name(name).ok_or_else(|| AppError::InvalidChoice {
        field: "length",
        name: name.to_string(),
        valid: valid_names(&Length::ALL),
    })
}

fn parse_audience(name: &str) -> Result<Audience, AppError> {
    Audience::from_name(name).ok_or_else(|| AppError::InvalidChoice {
        field: "audience",
        name: name.to_string(),
        valid: valid_names(&Audience::ALL),
    })
}
