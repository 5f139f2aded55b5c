mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;

use cli::{Cli, Commands};
use dessert_fetch::config::ClientConfig;
use dessert_fetch::Desserts;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "dessert_fetch=info,desserts=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = ClientConfig::load(cli.config.as_deref())?;
    if let Some(base) = cli.api_base {
        cfg.api_base = base;
    }
    let app = Desserts::with_config(cfg)?;

    match cli.command {
        Commands::List { thumbnails } => {
            let mut view = app.content_view();
            view.appear().await;
            if thumbnails {
                view.load_thumbnails().await;
                for entry in view.list().entries() {
                    println!("{:>8}  {}", entry.summary().id, entry.render());
                }
            } else {
                for s in view.summaries() {
                    println!("{:>8}  {}", s.id, s.name);
                }
            }
        }
        Commands::Show { id } => {
            let mut view = dessert_fetch::view::DetailView::new(id);
            view.appear(app.client()).await;
            if view.detail().is_none() {
                tracing::info!(meal_id = view.meal_id(), "nothing to show");
            }
            println!("{}", view.render());
        }
        Commands::Image { url, output } => {
            let url = Url::parse(&url).with_context(|| format!("not a URL: {url}"))?;
            let img = app.image(&url).await;
            println!("{img}");
            if let (Some(path), Some(bytes)) = (output, img.bytes()) {
                tokio::fs::write(&path, bytes)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("wrote {}", path.display());
            }
        }
        Commands::Browse => browse(&app).await?,
    }
    Ok(())
}

/// Number opens a dessert, `r` refreshes, `q` quits.
async fn browse(app: &Desserts) -> Result<()> {
    let mut view = app.content_view();
    view.appear().await;
    view.load_thumbnails().await;
    println!("{}", view.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!("\n[1-{}] open, r refresh, q quit", view.list().len());
        let Some(line) = lines.next_line().await? else { break };
        match line.trim() {
            "q" | "quit" => break,
            "r" => {
                view.refresh().await;
                view.load_thumbnails().await;
                println!("{}", view.render());
            }
            n => match n.parse::<usize>().ok().filter(|&i| i >= 1) {
                Some(i) => match view.open(i - 1).await {
                    Some(detail) => println!("{}", detail.render()),
                    None => println!("no dessert #{i}"),
                },
                None => println!("?"),
            },
        }
    }
    Ok(())
}
