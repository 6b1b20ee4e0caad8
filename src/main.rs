// Prospect board entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr; the board itself prints to stdout)
// 2. Load config
// 3. Load the prospect dataset
// 4. Build the board and print the ranked roster
// 5. With a player-id argument, select it and print the detail view

use scout_hub::board::{Board, PlayerDetail};
use scout_hub::config;
use scout_hub::dataset::{self, PlayerId};

use anyhow::Context;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Prospect board starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!("Config loaded: dataset={}", config.dataset_path);

    let doc = dataset::load_document(std::path::Path::new(&config.dataset_path))
        .context("failed to load prospect dataset")?;
    info!(
        "Loaded {} bios, {} ranking records, {} reports, {} game logs, {} season logs",
        doc.bios.len(),
        doc.scout_rankings.len(),
        doc.scouting_reports.len(),
        doc.game_logs.len(),
        doc.season_logs.len()
    );

    let mut board = Board::new(doc);

    print_roster(&board, config.roster_limit);

    if let Some(arg) = std::env::args().nth(1) {
        let player_id: PlayerId = arg
            .parse()
            .with_context(|| format!("invalid player id argument '{arg}'"))?;
        if !board.select(player_id) {
            anyhow::bail!("no player with id {player_id} in the dataset");
        }
        if let Some(detail) = board.selected_detail() {
            print_detail(&detail);
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn print_roster(board: &Board, limit: usize) {
    println!("{:>4}  {:>5}  {:<28} {}", "#", "AVG", "NAME", "TEAM");
    for (pos, entry) in board.roster().iter().enumerate() {
        if limit > 0 && pos >= limit {
            break;
        }
        println!(
            "{:>4}  {:>5}  {:<28} {}",
            pos + 1,
            fmt_stat(entry.avg_rank),
            entry.name,
            entry.current_team.as_deref().unwrap_or("-"),
        );
    }
}

fn print_detail(detail: &PlayerDetail) {
    let bio = &detail.bio;
    println!("\n== {} ==", bio.name);
    if let (Some(height), Some(weight)) = (bio.height, bio.weight) {
        println!("Height: {height}\" | Weight: {weight} lbs");
    }
    if let Some(team) = &bio.current_team {
        println!("Team: {team}");
    }
    if let (Some(town), Some(country)) = (&bio.home_town, &bio.home_country) {
        println!("Hometown: {town}, {country}");
    }

    let s = &detail.summary;
    println!(
        "\nSeason Averages ({})",
        s.season.as_deref().unwrap_or("N/A")
    );
    println!(
        "GP: {} | PTS: {} | AST: {} | REB: {}",
        fmt_stat(s.games_played),
        fmt_stat(s.points),
        fmt_stat(s.assists),
        fmt_stat(s.rebounds),
    );
    println!(
        "FG%: {} | STL: {} | BLK: {}",
        fmt_stat(s.field_goal_pct),
        fmt_stat(s.steals),
        fmt_stat(s.blocks),
    );

    if let Some(avg) = detail.avg_rank {
        println!("\nScout Rankings (Avg: {avg:.1})");
        for deviation in &detail.rank_breakdown {
            println!(
                "  {}: {} ({})",
                deviation.scout,
                deviation.rank,
                deviation.call.label()
            );
        }
    }

    if !detail.reports.is_empty() {
        println!("\nScout Reports");
        for report in &detail.reports {
            println!("  [{}] {}", report.scout, report.report);
        }
    }

    if !detail.game_logs.is_empty() {
        println!("\nGame Logs");
        for log in &detail.game_logs {
            let date = log.date.as_deref().map(fmt_date).unwrap_or_else(|| "N/A".into());
            println!(
                "  {} vs {} | PTS: {} | REB: {}",
                date,
                log.opponent.as_deref().unwrap_or("N/A"),
                log.stats.get("pts").and_then(|v| v.as_f64()).map_or("N/A".into(), |n| n.to_string()),
                log.stats.get("reb").and_then(|v| v.as_f64()).map_or("N/A".into(), |n| n.to_string()),
            );
        }
    }
}

fn fmt_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".into(), |n| format!("{n:.1}"))
}

/// Render a dataset date in a friendlier form; unparseable dates pass
/// through verbatim.
fn fmt_date(raw: &str) -> String {
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, format) {
            return date.format("%b %e, %Y").to_string();
        }
    }
    raw.to_string()
}

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

/// Initialize tracing to stderr, leaving stdout to the board output.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scout_hub=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
