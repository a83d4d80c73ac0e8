//! Command-line scanner for internship offers.
//!
//! Runs the evidence pipeline on a document, a URL, or manually entered
//! details and prints the verdict. Logs go to stderr so `--json` output stays
//! clean on stdout.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::{ColoredString, Colorize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentinel::documents::read_document;
use sentinel::providers::{
    GeminiCompletion, OpenAiCompletion, RdapLookup, TavilyWebSearcher, UnconfiguredCompletion,
    UnconfiguredSearcher,
};
use sentinel::{
    Analysis, AnalysisInput, CompletionService, Evidence, ScamKeywordList, Sentinel,
    SentinelConfig, Verdict, VerdictParseMode, WebSearcher,
};

use crate::config::{Config, Provider};

#[derive(Parser)]
#[command(name = "sentinel-scan")]
#[command(about = "Check an internship or job offer for signs of recruitment fraud")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Print the full analysis as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Gather and print evidence without consulting the model
    #[arg(long, global = true)]
    evidence_only: bool,

    /// Only accept an exact `VERDICT: ...` first line
    #[arg(long, global = true)]
    strict_verdict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an offer letter or contract (.txt, .md, .pdf)
    File { path: PathBuf },

    /// Analyze a company or careers page URL
    Url { url: String },

    /// Analyze details entered by hand
    Investigate {
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sentinel=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let input = match cli.command {
        Commands::File { path } => {
            let text = read_document(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            AnalysisInput::document(text)
        }
        Commands::Url { url } => AnalysisInput::url(url),
        Commands::Investigate {
            company,
            email,
            message,
        } => AnalysisInput::manual(company, email, message),
    };

    let sentinel = build_sentinel(&config, &cli.output)?;

    if cli.output.evidence_only {
        let evidence = sentinel.gather_evidence(&input).await;
        if !evidence.has_input() {
            bail!("Nothing to analyze: provide a document, URL, or company details");
        }
        if cli.output.json {
            println!("{}", serde_json::to_string_pretty(&evidence)?);
        } else {
            print_evidence(&evidence);
        }
        return Ok(());
    }

    let analysis = sentinel
        .analyze(&input)
        .await
        .context("Analysis failed")?;

    if cli.output.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis);
    }

    Ok(())
}

fn build_sentinel(config: &Config, output: &OutputArgs) -> Result<Sentinel> {
    let mut sentinel_config = SentinelConfig::default();
    if !config.extra_keywords.is_empty() {
        sentinel_config = sentinel_config.with_keywords(
            ScamKeywordList::default().extended(config.extra_keywords.iter()),
        );
    }
    if output.strict_verdict {
        sentinel_config = sentinel_config.with_verdict_mode(VerdictParseMode::Strict);
    }

    let mut registry = RdapLookup::new(sentinel_config.lookup_timeout);
    if let Some(url) = &config.rdap_base_url {
        registry = registry.with_base_url(url);
    }

    let searcher: Arc<dyn WebSearcher> = match &config.tavily_api_key {
        Some(key) => Arc::new(TavilyWebSearcher::new(key.clone(), sentinel_config.search_timeout)),
        None => {
            tracing::warn!("TAVILY_API_KEY not set, reputation checks will be unavailable");
            Arc::new(UnconfiguredSearcher)
        }
    };

    let ai: Arc<dyn CompletionService> = if output.evidence_only {
        Arc::new(UnconfiguredCompletion)
    } else {
        completion_service(config, &sentinel_config)?
    };

    Ok(Sentinel::new(sentinel_config, Arc::new(registry), searcher, ai))
}

fn completion_service(
    config: &Config,
    sentinel_config: &SentinelConfig,
) -> Result<Arc<dyn CompletionService>> {
    let timeout = sentinel_config.completion_timeout;

    match config.provider {
        Some(Provider::Gemini) => {
            let key = config
                .google_api_key
                .clone()
                .context("Cannot run scan without API key: GOOGLE_API_KEY must be set")?;
            let mut service = GeminiCompletion::new(key, timeout);
            if let Some(model) = &config.model {
                service = service.with_model(model);
            }
            Ok(Arc::new(service))
        }
        Some(Provider::OpenAi) => {
            let key = config
                .openai_api_key
                .clone()
                .context("Cannot run scan without API key: OPENAI_API_KEY must be set")?;
            let mut service = OpenAiCompletion::new(key, timeout);
            if let Some(url) = &config.openai_base_url {
                service = service.with_base_url(url);
            }
            if let Some(model) = &config.model {
                service = service.with_model(model);
            }
            Ok(Arc::new(service))
        }
        None => bail!(
            "Cannot run scan without API key: set GOOGLE_API_KEY or OPENAI_API_KEY \
             (or pass --evidence-only)"
        ),
    }
}

// ============================================================================
// Output
// ============================================================================

fn verdict_banner(verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", verdict);
    match verdict {
        Verdict::Safe => text.black().on_green().bold(),
        Verdict::Caution => text.black().on_yellow().bold(),
        Verdict::Scam => text.white().on_red().bold(),
        Verdict::Unknown => text.white().on_bright_black().bold(),
    }
}

fn print_evidence(evidence: &Evidence) {
    println!("{}", "🔍 Forensic Evidence".bright_cyan().bold());
    if evidence.context.is_empty() {
        println!("{}", "No forensic findings.".dimmed());
    } else {
        println!("{}", evidence.context.render().trim());
    }
}

fn print_analysis(analysis: &Analysis) {
    let report = &analysis.report;

    print_evidence(&analysis.evidence);
    println!();
    println!(
        "{} {}",
        verdict_banner(report.verdict),
        report.verdict.headline().bold()
    );
    println!("Confidence: {}", report.confidence);

    if let Some(first_line) = &report.diagnostic {
        println!(
            "{} {}",
            "Unrecognised verdict line:".yellow(),
            first_line.dimmed()
        );
    }

    if !report.body.is_empty() {
        println!();
        println!("{}", report.body);
    }
}
