use anyhow::{anyhow, Context, Result};
use clap::Parser;
use persona::{
    init_tracing_once, normalize_username, render, ActivitySource, ArchiveSource, DumpSource, HourClock,
    PersonaAnalyzer, SourceConfig,
};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use time::macros::format_description;
use time::OffsetDateTime;

#[derive(Parser, Debug)]
#[command(name = "persona", about = "Build a cited persona report from a Reddit user's activity")]
struct Cli {
    /// Username, u/name, or profile URL. Prompted for when omitted.
    profile: Option<String>,

    /// JSON dump of the user's account, comments and submissions.
    #[arg(long, conflicts_with = "archive")]
    dump: Option<PathBuf>,

    /// Directory holding comments/RC_* and submissions/RS_* monthly files.
    #[arg(long)]
    archive: Option<PathBuf>,

    /// Max items per content type.
    #[arg(long)]
    limit: Option<usize>,

    /// Report path. Defaults to persona_<user>_<timestamp>.txt.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Whole-hour UTC offset used to read posting hours.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    utc_offset: i8,

    /// Print the report instead of writing a file.
    #[arg(long)]
    stdout: bool,

    /// Hide progress bars.
    #[arg(long)]
    quiet: bool,
}

fn prompt_profile() -> Result<String> {
    println!("Reddit User Persona Analyzer");
    println!("{}", "=".repeat(30));
    print!("Enter Reddit profile URL: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> Result<()> {
    init_tracing_once();
    let cli = Cli::parse();

    let raw = match cli.profile {
        Some(p) => p,
        None => prompt_profile()?,
    };
    let username = normalize_username(&raw).ok_or_else(|| anyhow!("no username found in {:?}", raw))?;
    let clock = HourClock::from_hours(cli.utc_offset)
        .ok_or_else(|| anyhow!("utc offset out of range: {}", cli.utc_offset))?;

    let mut cfg = SourceConfig::from_env().with_progress(!cli.quiet);
    if let Some(dir) = &cli.archive {
        cfg = cfg.with_base_dir(dir);
    }
    if let Some(n) = cli.limit {
        cfg = cfg.with_limit(n);
    }
    let limit = cfg.limit;

    if !cli.stdout {
        println!("\nAnalyzing u/{username}...");
    }
    let activity = match &cli.dump {
        Some(path) => DumpSource::new(path).fetch(&username, limit),
        None => ArchiveSource::new(cfg).fetch(&username, limit),
    };

    let analyzer = PersonaAnalyzer::new().clock(clock);
    let persona = analyzer.analyze(&username, activity.account, activity.corpus);
    let doc = render(&persona);

    if cli.stdout {
        print!("{doc}");
        return Ok(());
    }

    let out = match cli.out {
        Some(p) => p,
        None => {
            let stamp = OffsetDateTime::now_utc()
                .format(format_description!("[year][month][day]_[hour][minute][second]"))
                .context("formatting timestamp")?;
            PathBuf::from(format!("persona_{username}_{stamp}.txt"))
        }
    };
    fs::write(&out, doc).with_context(|| format!("writing {}", out.display()))?;

    println!("\nAnalysis complete! Saved to {}", out.display());
    println!(
        "Found {} comments and {} posts",
        persona.sources.comments.len(),
        persona.sources.submissions.len()
    );
    Ok(())
}
