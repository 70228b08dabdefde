use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::info;

use write_blog::article::write_article;
use write_blog::config::{ensure_config, CONF_FILE_NAME};
use write_blog::front_matter::render;
use write_blog::logger::configure_logger;
use write_blog::prefill::{resolve, Prefill};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL slug of the post. Derived from the title when omitted
    #[arg(short, long)]
    slug: Option<String>,

    /// Comma separated list of tags
    #[arg(short = 'l', long)]
    tags: Option<String>,

    /// Publish date of the post. Defaults to the current time
    #[arg(short, long)]
    date: Option<String>,

    /// Title of the post
    title: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(err) = configure_logger() {
        eprintln!("Error creating logger sinks. Using default logger instead. Desc={}", err);
    }

    let conf_path = env::current_dir()
        .context("Could not resolve the current directory")?
        .join(CONF_FILE_NAME);
    let config = ensure_config(&conf_path)?;

    let prefill = Prefill::from_flags(args.title, args.slug, args.tags, args.date);
    let front_matter = resolve(prefill)?;

    let article = render(front_matter)?;
    let file_name = write_article(&config, &article)?;

    info!("Post created at {}", file_name.display());

    Ok(())
}
