// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::info;

use crate::{
    alliance::{self, AllianceTally},
    config::{self, options::{AppOptions, ExportFormat}},
    core::HttpFetcher,
    file,
    progress::ConsoleProgress,
    scrape::Scraper,
};

#[derive(Debug, Parser)]
#[command(name = "eci_scrape", version, about = "Scrape constituency-wise election results into CSV/TSV")]
pub struct Cli {
    /// TOML config file (default: ./eci_scrape.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape the results site and write the party and detailed tables
    Scrape(ScrapeArgs),
    /// Add the Alliance column to an existing detailed table, in place
    Tag(TagArgs),
    /// Print the NDA membership list in effect
    Parties,
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Base URL that relative links are appended to
    #[arg(long)]
    pub base_url: Option<String>,
    /// Entry page, relative to the base URL
    #[arg(long)]
    pub entry: Option<String>,
    /// Output directory
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,
    /// Tag the detailed table with alliances after writing it
    #[arg(long)]
    pub tag: bool,
}

#[derive(Debug, Args)]
pub struct TagArgs {
    /// Detailed table to rewrite (default: the scrape output path)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,
}

impl ScrapeArgs {
    fn apply(&self, opts: &mut AppOptions) {
        if let Some(v) = &self.base_url { opts.scrape.base_url = v.clone(); }
        if let Some(v) = &self.entry { opts.scrape.entry_page = v.clone(); }
        if let Some(v) = &self.out_dir { opts.export.out_dir = v.clone(); }
        if let Some(v) = self.format { opts.export.format = v; }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let mut opts = config::load(cli.config.as_deref()).wrap_err("loading config")?;

    match cli.command {
        Command::Scrape(args) => {
            args.apply(&mut opts);
            scrape(&opts)?;
            if args.tag {
                tag(&opts, opts.export.detailed_path(), opts.export.format)?;
            }
        }
        Command::Tag(args) => {
            if let Some(v) = args.format { opts.export.format = v; }
            let input = args.input.unwrap_or_else(|| opts.export.detailed_path());
            tag(&opts, input, opts.export.format)?;
        }
        Command::Parties => {
            for party in opts.alliance.nda_set().iter() {
                println!("{party}");
            }
        }
    }
    Ok(())
}

fn scrape(opts: &AppOptions) -> Result<()> {
    let fetcher = HttpFetcher::new().wrap_err("building HTTP client")?;
    let scraper = Scraper::new(fetcher, &opts.scrape)?;
    println!("Fetching {}", scraper.entry_url());

    let mut progress = ConsoleProgress::default();
    let report = scraper.run(Some(&mut progress))?;

    let format = opts.export.format;
    let parties_path = opts.export.parties_path();
    let detailed_path = opts.export.detailed_path();
    file::write_table(&parties_path, format, &report.parties)
        .wrap_err("writing party table")?;
    file::write_table(&detailed_path, format, &report.results)
        .wrap_err("writing detailed table")?;

    info!(parties = report.parties.len(), rows = report.results.len(), "tables written");
    println!(
        "Files saved to '{}' and '{}'.",
        parties_path.display(),
        detailed_path.display()
    );
    Ok(())
}

fn tag(opts: &AppOptions, input: PathBuf, format: ExportFormat) -> Result<()> {
    if !input.exists() {
        return Err(eyre!("no detailed table at {}", input.display()));
    }
    let nda = opts.alliance.nda_set();
    let inc = opts.alliance.inc_set();
    let tally: AllianceTally = alliance::tag_file(&input, format, &nda, inc.as_ref())
        .wrap_err_with(|| format!("tagging {}", input.display()))?;

    println!("Total NDA count: {}", tally.nda);
    println!("Total INC count: {}", tally.inc);
    if !tally.unlisted.is_empty() {
        println!("Counted as INC but in neither list: {}", tally.unlisted.len());
        for party in &tally.unlisted {
            println!("  {party}");
        }
    }
    Ok(())
}
