use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use releve_banks::Bank;
use releve_core::{DateInput, Normalizer, RuleSet, time::today_in};
use releve_finance::{Imported, RowPolicy, Summary, normalize_rows, read_statement_csv};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "releve", version, about = "Normalize and summarize bank statement exports")]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ~/.releve/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one JSON transaction per statement row
    Normalize(StatementArgs),

    /// Print per-type totals for a statement
    Summary(StatementArgs),

    /// Normalize a single label
    Classify {
        label: String,

        /// Booking date, DDMMYYYY or DD/MM/YYYY (default: today)
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        rules: RuleArgs,
    },

    /// List the built-in bank rule tables
    Banks,

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct RuleArgs {
    /// Bank rule table (see `releve banks`)
    #[arg(long)]
    bank: Option<String>,

    /// Reference date for year inference, YYYY-MM-DD
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct StatementArgs {
    /// Statement CSV export
    csv: PathBuf,

    #[command(flatten)]
    rules: RuleArgs,

    /// Field delimiter (default from config, usually ';')
    #[arg(long)]
    delimiter: Option<char>,

    /// Fail on the first row that cannot be normalized
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config_file = cli.config.as_deref();

    match cli.command {
        Command::Normalize(args) => {
            let cfg = config::load_config(config_file)?;
            let imported = import(&cfg, &args)?;
            for txn in &imported.transactions {
                println!("{}", serde_json::to_string(txn)?);
            }
        }

        Command::Summary(args) => {
            let cfg = config::load_config(config_file)?;
            let imported = import(&cfg, &args)?;
            print_summary(&imported);
        }

        Command::Classify { label, date, rules } => {
            let cfg = config::load_config(config_file)?;
            let rule_set = build_rules(&cfg, rules.bank.as_deref())?;
            let today = reference_date(&cfg, rules.today)?;
            let normalizer = Normalizer::new(&rule_set, today);

            let booking: DateInput<'_> = match &date {
                Some(d) => d.into(),
                None => today.into(),
            };
            let txn = normalizer.parse(booking, &label)?;
            println!("{}", serde_json::to_string_pretty(&txn)?);
        }

        Command::Banks => {
            for bank in Bank::ALL {
                println!("{:<16} {:<24} {} rules", bank.id(), bank.name(), bank.patterns().len());
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(config_file)?,
            ConfigCommand::Show => {
                let cfg = config::load_config(config_file)?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// Config rules first, then the bank table from `--bank` or the config.
fn build_rules(cfg: &Config, bank: Option<&str>) -> Result<RuleSet> {
    let custom = RuleSet::from_specs(&cfg.rules).context("config rules")?;

    let bank = bank.or(cfg.statement.bank.as_deref());
    let rules = match bank {
        Some(id) => {
            let bank: Bank = id.parse()?;
            debug!(bank = bank.id(), custom = custom.len(), "loading rule table");
            custom.chain(bank.rules()?)
        }
        None => custom,
    };

    if rules.is_empty() {
        warn!("no bank selected and no config rules: every line will be unknown");
    }
    Ok(rules)
}

fn reference_date(cfg: &Config, today: Option<NaiveDate>) -> Result<NaiveDate> {
    match today {
        Some(d) => Ok(d),
        None => today_in(&cfg.statement.timezone).context("statement.timezone in config"),
    }
}

fn import(cfg: &Config, args: &StatementArgs) -> Result<Imported> {
    if !args.csv.exists() {
        bail!("CSV not found: {}", args.csv.display());
    }

    let delimiter = args.delimiter.unwrap_or(cfg.statement.delimiter);
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {delimiter:?}");
    }

    let rules = build_rules(cfg, args.rules.bank.as_deref())?;
    let today = reference_date(cfg, args.rules.today)?;
    let normalizer = Normalizer::new(&rules, today);

    let rows = read_statement_csv(&args.csv, delimiter as u8)?;
    info!(rows = rows.len(), file = %args.csv.display(), "read statement");

    let policy = if args.strict || cfg.statement.strict {
        RowPolicy::Abort
    } else {
        RowPolicy::Skip
    };
    let imported = normalize_rows(&rows, &normalizer, policy)?;
    if !imported.skipped.is_empty() {
        info!(skipped = imported.skipped.len(), "some rows could not be normalized");
    }
    Ok(imported)
}

fn print_summary(imported: &Imported) {
    let by_type = Summary::by_type(imported.iter());
    let totals = Summary::totals(imported.iter());

    println!("{} transactions\n", totals.count);
    for s in &by_type {
        println!(
            "[{}] count={} | credits={} | debits={} | net={} | {}",
            s.kind,
            s.count,
            s.credits,
            s.debits,
            s.net,
            s.sample_labels.join(" ; ")
        );
    }
    println!(
        "\nTotal: credits={} | debits={} | net={}",
        totals.credits, totals.debits, totals.net
    );

    for skipped in &imported.skipped {
        println!("skipped line {}: {}", skipped.line, skipped.reason);
    }
}
