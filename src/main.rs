use anyhow::{anyhow, bail, Context, Result};
use monthgrid::{Formatter, GridConfig, MonthGrid};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_PATTERN: &str = "%Y-%m-%d";

const USAGE: &str = "usage: mgrid [MONTH [YEAR]] [--week-start N] [--pattern PAT]";

fn main() -> Result<()> {
    // Logging to stderr so it doesn't interfere with the printed grid
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let cfg = GridConfig::load().unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable config: {e:#}");
        GridConfig::default()
    });

    for line in render(&args, &cfg)? {
        println!("{line}");
    }
    Ok(())
}

// ─── Arguments ────────────────────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
struct Args {
    month:      Option<u32>,
    year:       Option<i32>,
    week_start: Option<u32>,
    pattern:    Option<String>,
    help:       bool,
}

impl Args {
    fn parse(mut it: impl Iterator<Item = String>) -> Result<Self> {
        let mut args = Args::default();
        let mut positional = Vec::new();

        while let Some(arg) = it.next() {
            match arg.as_str() {
                "-h" | "--help" => args.help = true,
                "-w" | "--week-start" => {
                    let v = it.next().ok_or_else(|| anyhow!("--week-start needs a value"))?;
                    args.week_start = Some(v.parse().with_context(|| format!("bad week start {v:?}"))?);
                }
                "-p" | "--pattern" => {
                    args.pattern = Some(it.next().ok_or_else(|| anyhow!("--pattern needs a value"))?);
                }
                s if s.starts_with('-') && s.len() > 1 => bail!("unknown option {s}\n{USAGE}"),
                _ => positional.push(arg),
            }
        }

        match positional.as_slice() {
            [] => {}
            [m] => args.month = Some(m.parse().with_context(|| format!("bad month {m:?}"))?),
            [m, y] => {
                args.month = Some(m.parse().with_context(|| format!("bad month {m:?}"))?);
                args.year  = Some(y.parse().with_context(|| format!("bad year {y:?}"))?);
            }
            _ => bail!("too many arguments\n{USAGE}"),
        }
        Ok(args)
    }
}

// ─── Output ───────────────────────────────────────────────────────────────────

/// One line per week row; command-line options win over the config file.
fn render(args: &Args, cfg: &GridConfig) -> Result<Vec<String>> {
    let today = MonthGrid::current()?;
    let month = args.month.unwrap_or(today.month());
    let year  = args.year.unwrap_or(today.year());

    let mut grid = MonthGrid::new(month, year)?;
    cfg.apply(&mut grid)?;
    if let Some(day) = args.week_start {
        grid.week_starts_at(day)?;
    }

    let pattern = args
        .pattern
        .as_deref()
        .or(cfg.pattern.as_deref())
        .unwrap_or(DEFAULT_PATTERN);
    let grid = grid.with_formatter(Formatter::<String>::pattern(pattern));

    tracing::info!("rendering {year}-{month:02} week_start={}", grid.week_start());
    Ok(grid.weeks()?.into_iter().map(|row| row.join("  ")).collect())
}
