use anyhow::Context;
use clap::Parser;
use reqwest::StatusCode;
use sentir::{AnalysisRequest, AnalysisResponse, Error};

#[derive(Parser)]
#[command(name = "sentir-client")]
#[command(about = "Submit a post to a running sentir server and print its sentiment")]
struct Cli {
    /// Base URL of the server
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    url: String,

    /// Identifier echoed back by the server
    #[arg(long, allow_hyphen_values = true)]
    post_id: i64,

    /// Text to analyze; read from stdin when omitted
    content: Option<String>,
}

fn endpoint(base: &str) -> String {
    format!("{}/analyze/sentiment", base.trim_end_matches('/'))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let content = match cli.content {
        Some(content) => content,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_line(&mut input)
                .context("failed to read post content from stdin")?;
            input.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let req = AnalysisRequest {
        content,
        post_id: cli.post_id,
    };

    let client = reqwest::Client::new();
    let resp = client
        .post(endpoint(&cli.url))
        .json(&req)
        .send()
        .await
        .with_context(|| format!("failed to reach {}", cli.url))?;

    let status = resp.status();
    println!("POST: {status}");

    let body = resp.text().await?;

    if status == StatusCode::OK {
        let analysis: AnalysisResponse = serde_json::from_str(&body)?;
        println!("Post ID: {} - Sentimiento: {}", analysis.post_id, analysis.sentiment);
    } else {
        match serde_json::from_str::<Error>(&body) {
            Ok(error) => anyhow::bail!(error),
            Err(_) => anyhow::bail!("unexpected response: {body}"),
        }
    }

    Ok(())
}
