use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import from our modular crates
use askpdf_cli::{print_error, read_query_from_stdin, write_answer, PdfAssistant};
use askpdf_openai::{Embedder, OpenAiClient};
use askpdf_rag::{EmbeddingRetriever, IndexConfig, QdrantIndex};

const VERBOSE_FILTER: &str =
    "warn,askpdf=debug,askpdf_core=debug,askpdf_openai=debug,askpdf_rag=debug,askpdf_cli=debug";

#[derive(Parser)]
#[command(name = "askpdf")]
#[command(about = "Ask a question about an indexed PDF document", long_about = None)]
struct Cli {
    /// Question to ask instead of prompting for one
    #[arg(short, long)]
    query: Option<String>,

    /// Log each pipeline step to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" }));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    // Initialize components
    let openai = OpenAiClient::from_env()?;

    let index_config = IndexConfig::from_env()?;
    let mut index = QdrantIndex::new(&index_config)?;
    index.connect(openai.dimension()).await?;

    let retriever = EmbeddingRetriever::new(Arc::new(openai.clone()), Arc::new(index));
    let assistant = PdfAssistant::new(retriever, openai);

    let query = match cli.query {
        Some(query) => query,
        None => read_query_from_stdin()?,
    };
    info!(bytes = query.len(), "query received");

    let answer = assistant.answer(&query).await?;
    write_answer(&mut io::stdout(), &answer)?;

    Ok(())
}
