use std::io::Write;

use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use oralcare_cli::config;
use oralcare_cli::state::{Outcome, Session};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so they never interleave with the prompt.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_or_init()?;
    let mut session = Session::new(config);

    println!("{}", session.render_current());
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match session.handle_line(&line) {
            Outcome::Print(text) => {
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            Outcome::Export => match session.export().await {
                Ok(path) => println!("saved {}", path.display()),
                Err(e) => {
                    tracing::warn!(error = %e, "export failed");
                    println!("export failed: {e}");
                }
            },
            Outcome::Quit => break,
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
