//! Pokédex CLI
//!
//! Interactive lookup against PokeAPI. Typing shows matching names as an
//! autocomplete dropdown; submitting a name prints its card.
//!
//! Usage:
//!   cargo run --bin pokedex-cli -- [--api-url <URL>] [--limit <N>] [--name <NAME>]

use std::env;
use std::error::Error;
use std::sync::Arc;

use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::{CustomUserError, Text};
use pokedex_rust::core::controller::ViewStateController;
use pokedex_rust::core::render::{render, TITLE};
use pokedex_rust::{Config, PokeApiClient};
use tracing_subscriber::EnvFilter;

type Controller = ViewStateController<PokeApiClient>;

#[derive(Debug, Default)]
struct Args {
    api_url: Option<String>,
    limit: Option<usize>,
    name: Option<String>,
}

fn parse_args() -> Args {
    let mut parsed = Args::default();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--api-url" => {
                if i + 1 < args.len() {
                    parsed.api_url = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--limit" => {
                if i + 1 < args.len() {
                    parsed.limit = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--name" => {
                if i + 1 < args.len() {
                    parsed.name = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    parsed
}

fn print_help() {
    println!(
        r#"Pokédex - look up Pokémon stats and type matchups

USAGE:
    cargo run --bin pokedex-cli -- [OPTIONS]

OPTIONS:
    --api-url <URL>     Base URL of the PokeAPI service
                        Default: https://pokeapi.co/api/v2
    --limit <N>         Number of names loaded for autocomplete
                        Default: 10000
    --name <NAME>       Look up a single Pokémon and exit
    --help, -h          Print this help message

ENVIRONMENT VARIABLES:
    POKEDEX_CONFIG          Path to a YAML config file
    POKEDEX_API_URL         Overrides api_base_url
    POKEDEX_CANDIDATE_LIMIT Overrides candidate_limit
    POKEDEX_BLUR_DELAY_MS   Overrides blur_hide_delay_ms
    POKEDEX_TIMEOUT_SECS    Overrides request_timeout_secs
    RUST_LOG                Log filter (default: pokedex_rust=info)
"#
    );
}

/// Feeds every keystroke through the controller and offers what the page would draw.
#[derive(Clone)]
struct NameCompleter {
    controller: Arc<Controller>,
}

impl Autocomplete for NameCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        self.controller.on_input_change(input);
        Ok(render(&self.controller.snapshot()).suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

fn print_page(controller: &Controller) {
    if let Some(card) = render(&controller.snapshot()).card {
        println!();
        print!("{}", card);
        println!();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pokedex_rust=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let mut config = Config::from_env()?;
    if let Some(url) = args.api_url {
        config.api_base_url = url;
    }
    if let Some(limit) = args.limit {
        config.candidate_limit = limit;
    }

    let client = Arc::new(PokeApiClient::from_config(&config)?);
    let controller = Arc::new(ViewStateController::new(client, &config));

    if let Some(name) = args.name {
        let outcome = controller.on_search(Some(name.as_str())).await;
        tracing::debug!(?outcome, "lookup finished");
        print_page(&controller);
        return Ok(());
    }

    println!("╔═══════════════════════════════════════╗");
    println!("║              {}                 ║", TITLE);
    println!("╚═══════════════════════════════════════╝");
    println!();

    controller.initialize().await;
    let known = controller.snapshot().candidates;

    let completer = NameCompleter {
        controller: Arc::clone(&controller),
    };

    loop {
        controller.on_focus();
        let answer = Text::new("Pokémon name (empty to quit):")
            .with_autocomplete(completer.clone())
            .with_page_size(10)
            .prompt();
        controller.on_blur();

        let text = match answer {
            Ok(text) => text,
            Err(_) => break,
        };
        if text.trim().is_empty() {
            break;
        }

        let outcome = if known.contains(&text) {
            controller.on_suggestion_select(text.trim()).await
        } else {
            controller.on_input_change(&text);
            controller.on_search(None).await
        };
        tracing::debug!(?outcome, "lookup finished");
        print_page(&controller);
    }

    Ok(())
}
