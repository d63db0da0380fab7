use clap::Parser;
use pn_core::{NewsQuery, NewsSource, Result, SortBy};
use pn_inference::{Report, ReportMeta, ScoreKind, SentimentAnalyzer};
use pn_news::logging::parse_level;
use pn_news::{find_party, find_state, NewsClient, NewsConfig};
use pn_web::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sentiment analysis of Indian political news", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    /// NewsAPI key, see https://newsapi.org
    #[arg(long, global = true, env = "NEWS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, global = true, default_value = "hybrid", help = "Polarity model to use. Available models: hybrid (default), dummy")]
    model: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List parties, optionally filtered
    Parties {
        #[arg(long)]
        search: Option<String>,
    },
    /// List states and union territories
    States,
    /// Fetch recent news for a party and analyze it
    Analyze {
        /// Party name or abbreviation (e.g. BJP, "Aam Aadmi Party (AAP)")
        #[arg(long)]
        party: String,
        #[arg(long)]
        state: Option<String>,
        /// Articles to fetch, 5 to 20
        #[arg(long, default_value_t = 10)]
        max: u32,
        #[arg(long, default_value = "latest")]
        sort: SortBy,
        /// Score articles without the party-context adjustment
        #[arg(long)]
        no_party_context: bool,
        /// Write a report; `.json` gives JSON, anything else Markdown
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Analyze articles from a JSON file without fetching anything
    AnalyzeFile {
        file: PathBuf,
        #[arg(long)]
        party: Option<String>,
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Describe what a score means
    Explain {
        kind: ScoreKind,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Run the JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn create_analyzer(model: &str) -> Result<SentimentAnalyzer> {
    let config = pn_inference::Config::with_model(model);
    let model = pn_inference::create_model(Some(config))?;
    info!("🧠 Polarity model initialized successfully (using {})", model.name());
    Ok(SentimentAnalyzer::new(model))
}

/// Short name used for searching and party context.
fn resolve_party(name: &str) -> String {
    find_party(name)
        .map(|p| p.target_name().to_string())
        .unwrap_or_else(|| name.trim().to_string())
}

fn print_results(
    analyzer: &SentimentAnalyzer,
    articles: &[pn_core::Article],
    target: Option<&str>,
    meta: ReportMeta,
    report: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let batch = analyzer.analyze_batch(articles, target)?;

    if json {
        println!("{}", commands::batch_json(&batch)?);
    } else {
        print!("{}", commands::render_batch(&batch, articles));
    }

    if let Some(path) = report {
        let report = Report::new(meta, &batch, articles);
        commands::write_report(&path, &report)?;
        info!("📝 Report written to {}", path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    pn_news::init_logging(parse_level(&cli.log_level)?);

    match cli.command {
        Commands::Parties { search } => {
            for line in commands::party_lines(search.as_deref()) {
                println!("{}", line);
            }
        }
        Commands::States => {
            for line in commands::state_lines() {
                println!("{}", line);
            }
        }
        Commands::Analyze { party, state, max, sort, no_party_context, report, json } => {
            let config = NewsConfig::new(cli.api_key.clone().unwrap_or_default())
                .with_page_size(max)
                .with_sort(sort);
            let client = NewsClient::new(config)?;
            let analyzer = create_analyzer(&cli.model)?;

            let target = resolve_party(&party);
            let state = state.map(|s| find_state(&s).map(str::to_string).unwrap_or(s));
            let articles = client.fetch_articles(&NewsQuery::new(target.clone(), state.clone())).await?;
            if articles.is_empty() {
                warn!("No articles found for {}", target);
            }

            let context = if no_party_context { None } else { Some(target.as_str()) };
            let meta = ReportMeta::new(target.clone(), state);
            print_results(&analyzer, &articles, context, meta, report, json)?;
        }
        Commands::AnalyzeFile { file, party, report, json } => {
            let analyzer = create_analyzer(&cli.model)?;
            let articles = commands::load_articles(&file)?;
            info!("📂 Loaded {} articles from {}", articles.len(), file.display());

            let target = party.as_deref().map(resolve_party);
            let meta = ReportMeta::new(target.clone().unwrap_or_else(|| "N/A".to_string()), None);
            print_results(&analyzer, &articles, target.as_deref(), meta, report, json)?;
        }
        Commands::Explain { kind, value } => {
            println!("{}", commands::explain_line(kind, value)?);
        }
        Commands::Serve { addr } => {
            let analyzer = create_analyzer(&cli.model)?;
            let mut state = AppState::new(analyzer);
            match cli.api_key.map(NewsConfig::new).map(NewsClient::new) {
                Some(Ok(client)) => {
                    info!("📰 News search enabled");
                    state = state.with_news(Arc::new(client));
                }
                Some(Err(e)) => warn!("⚠️ News search disabled: {}", e),
                None => warn!("⚠️ News search disabled: NEWS_API_KEY is not set"),
            }
            pn_web::serve(state, addr).await?;
        }
    }

    Ok(())
}
