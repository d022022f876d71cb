use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::ContestCatalog;
use pipeline::{
    apply_filters, cascade, parse_top_n, presence_summary, problem_count_summary,
    rank_range_summary, top_performers, FilterSet, LeaderboardRow, RankBins, Selection,
    DEFAULT_TOP_N,
};
use std::path::PathBuf;

/// ContestBoard - contest results explorer
#[derive(Parser)]
#[command(name = "contest-board")]
#[command(about = "Filterable leaderboards and summaries over contest result files", long_about = None)]
struct Cli {
    /// Path to the contest manifest
    #[arg(short, long, default_value = "data/contests.toml")]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the contests in the manifest
    Contests {
        /// Load and validate every dataset instead of just listing labels
        #[arg(long)]
        check: bool,
    },

    /// Show the valid filter choices for a contest
    Options {
        /// Contest label as listed in the manifest
        contest: String,

        /// Restrict department and domain choices to this year
        #[arg(long)]
        year: Option<u16>,

        /// Restrict domain choices to this department
        #[arg(long)]
        department: Option<String>,
    },

    /// Print the top-N leaderboard for a contest
    Leaderboard {
        /// Contest label as listed in the manifest
        contest: String,

        #[arg(long)]
        year: Option<u16>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        domain: Option<String>,

        /// How many rows (non-numeric or non-positive falls back to 10)
        #[arg(long)]
        top: Option<String>,
    },

    /// Print every dashboard panel for a contest
    Dashboard {
        /// Contest label as listed in the manifest
        contest: String,

        #[arg(long)]
        year: Option<u16>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        domain: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = ContestCatalog::load_from_file(&cli.manifest)
        .with_context(|| format!("Failed to load manifest {}", cli.manifest.display()))?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Contests { check } => handle_contests(&catalog, check),
        Commands::Options {
            contest,
            year,
            department,
        } => handle_options(&catalog, &contest, year, department),
        Commands::Leaderboard {
            contest,
            year,
            department,
            domain,
            top,
        } => handle_leaderboard(
            &catalog,
            &contest,
            build_selection(year, department, domain),
            top.as_deref(),
        ),
        Commands::Dashboard {
            contest,
            year,
            department,
            domain,
        } => handle_dashboard(&catalog, &contest, build_selection(year, department, domain)),
    }
}

/// Turn optional command-line values into a selection set.
fn build_selection(
    year: Option<u16>,
    department: Option<String>,
    domain: Option<String>,
) -> FilterSet {
    FilterSet {
        year: year.map_or(Selection::All, Selection::Only),
        department: department.map_or(Selection::All, Selection::Only),
        domain: domain.map_or(Selection::All, Selection::Only),
    }
}

/// Handle the 'contests' command
fn handle_contests(catalog: &ContestCatalog, check: bool) -> Result<()> {
    if !check {
        for entry in catalog.entries() {
            println!("{} {}", "•".green(), entry.label);
        }
        return Ok(());
    }

    // Loads run in parallel; each entry reports its own outcome
    for (label, outcome) in catalog.load_all() {
        match outcome {
            Ok(dataset) => println!(
                "{} {} ({} rows, max rank {})",
                "✓".green(),
                label,
                dataset.len(),
                dataset.max_rank()
            ),
            Err(err) => println!("{} {} ({})", "✗".red(), label, err),
        }
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(
    catalog: &ContestCatalog,
    contest: &str,
    year: Option<u16>,
    department: Option<String>,
) -> Result<()> {
    let dataset = catalog.load(contest)?;
    let rows = dataset.records();

    // Upstream selections may be stale (e.g. copied from another contest)
    let selection = cascade::sanitize(rows, &build_selection(year, department, None));

    print_choices("Year", &cascade::year_choices(rows));
    print_choices(
        "Department",
        &cascade::department_choices(rows, &selection.year),
    );
    print_choices(
        "Domain",
        &cascade::domain_choices(rows, &selection.year, &selection.department),
    );
    Ok(())
}

fn print_choices<T: std::fmt::Display>(label: &str, choices: &[Selection<T>]) {
    let rendered = choices
        .iter()
        .map(|choice| choice.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("{} {}", format!("{}:", label).bold().blue(), rendered);
}

/// Handle the 'leaderboard' command
fn handle_leaderboard(
    catalog: &ContestCatalog,
    contest: &str,
    requested: FilterSet,
    top: Option<&str>,
) -> Result<()> {
    let dataset = catalog.load(contest)?;
    let selection = cascade::sanitize(dataset.records(), &requested);
    let filtered = apply_filters(dataset.records(), &selection)?;

    let n = parse_top_n(top);
    println!("{}", format!("Top {} Performers", n).bold().blue());
    print_leaderboard(&top_performers(&filtered, n));
    Ok(())
}

fn print_leaderboard(board: &[LeaderboardRow]) {
    if board.is_empty() {
        println!("(no present contestants match the current filters)");
        return;
    }

    println!(
        "{:<5} {:<20} {:<5} {:<10} {:<12} {:>7} {:>9} {:>7}",
        "#", "Name", "Year", "Domain", "Department", "Score", "Problems", "Rank"
    );
    for row in board {
        println!(
            "{:<5} {:<20} {:<5} {:<10} {:<12} {:>7} {:>9} {:>7}",
            ordinal(row.position),
            row.name,
            row.year,
            row.domain,
            row.department,
            row.score,
            row.problems_solved,
            row.rank
        );
    }
}

/// Handle the 'dashboard' command
fn handle_dashboard(catalog: &ContestCatalog, contest: &str, requested: FilterSet) -> Result<()> {
    let dataset = catalog.load(contest)?;
    let rows = dataset.records();
    let selection = cascade::sanitize(rows, &requested);
    let filtered = apply_filters(rows, &selection)?;

    println!("{}", dashboard_title(dataset.contest(), &selection).bold());
    println!();

    // Panel 1: presence distribution
    let presence = presence_summary(&filtered);
    println!("{}", "Presence Distribution".bold().blue());
    println!("  Present: {}", presence.present.to_string().green());
    println!("  Absent:  {}", presence.absent.to_string().red());
    println!();

    // Panel 2: problems solved
    let problems = problem_count_summary(&filtered, dataset.max_problems());
    println!("{}", "Problems Solved".bold().blue());
    for (solved, count) in problems.counts().iter().enumerate() {
        println!("  {} solved {:>5}  {}", solved, count, bar(*count));
    }
    println!();

    // Panel 3: top performers
    println!("{}", format!("Top {} Performers", DEFAULT_TOP_N).bold().blue());
    print_leaderboard(&top_performers(&filtered, DEFAULT_TOP_N));
    println!();

    // Panel 4: rank range distribution. Bins are sized against the full
    // dataset so a filtered subset can never fall outside them.
    let bins = RankBins::standard(dataset.max_rank());
    println!("{}", "Rank Range Distribution".bold().blue());
    for bucket in rank_range_summary(&filtered, &bins)? {
        println!("  {:<13} {:>5}  {}", bucket.label, bucket.count, bar(bucket.count));
    }
    Ok(())
}

/// Title line matching the exported figure caption of the old dashboards.
fn dashboard_title(contest: &str, selection: &FilterSet) -> String {
    let department = match &selection.department {
        Selection::Only(department) => department.clone(),
        Selection::All => "All Depts.".to_string(),
    };
    let year = match &selection.year {
        Selection::Only(year) => year.to_string(),
        Selection::All => "All Years".to_string(),
    };
    format!("{} ({}) [{}]", contest, department, year)
}

/// English ordinal for a display position (1st, 2nd, 3rd, 4th, 11th, ...).
fn ordinal(n: usize) -> String {
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", n, suffix)
}

/// Text bar for histogram lines, capped at 40 columns.
fn bar(count: usize) -> String {
    "#".repeat(count.min(40))
}
