use std::time::Duration;

use clap::Parser;
use embedprobe::{EmbedError, EmbeddingClient};

#[derive(Parser)]
#[command(name = "embedprobe")]
#[command(about = "Probe a local embeddings endpoint and report the vector size", long_about = None)]
struct Cli {
    /// Embeddings endpoint to probe
    #[arg(long, default_value = "http://127.0.0.1:1234/v1/embeddings")]
    endpoint: String,

    /// Text to embed
    #[arg(long, default_value = "Hello, world!")]
    input: String,

    /// Model name forwarded in the request body, for servers that want one
    #[arg(long)]
    model: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Warn when the reported size differs from this dimension
    #[arg(long)]
    expect_dim: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let client =
        EmbeddingClient::with_timeout(cli.endpoint, Duration::from_secs(cli.timeout_secs));

    match client.embed(vec![cli.input], cli.model).await {
        Ok(vector) => {
            println!("Embedding size: {}", vector.len());
            if let Some(expected) = cli.expect_dim {
                if vector.len() != expected {
                    eprintln!(
                        "Warning: expected dimension {}, server returned {}",
                        expected,
                        vector.len()
                    );
                }
            }
        }
        Err(EmbedError::ServerError { status, body }) => {
            println!("Error: {}, {}", status, body);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
