use anyhow::{Context, Result};
use atlas_protocol::{ScanConfig, ScanOutput};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repo-atlas")]
#[command(about = "Bounded, information-dense context packs from source trees", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a repository and emit the bounded context payload
    Scan(ScanArgs),

    /// Emit summary and file records without the payload body
    Preview(PreviewArgs),

    /// Print the indented directory structure
    Tree(TreeArgs),

    /// Export dependency links as a Mermaid graph
    Mermaid(PreviewArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Repository directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Maximum number of files to accept (1-500)
    #[arg(long, default_value_t = 120)]
    max_files: usize,

    /// Include test/spec directories in the scan
    #[arg(long)]
    include_tests: bool,

    /// Directory depth for structure rendering (1-15)
    #[arg(long, short = 'd', default_value_t = 6)]
    depth: usize,

    /// Prepend the numbered file list and dependency briefing
    #[arg(long)]
    brief: bool,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PreviewArgs {
    /// Repository directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Maximum number of files to accept (1-500)
    #[arg(long, default_value_t = 120)]
    max_files: usize,

    /// Include test/spec directories in the scan
    #[arg(long)]
    include_tests: bool,

    /// Directory depth for structure rendering (1-15)
    #[arg(long, short = 'd', default_value_t = 6)]
    depth: usize,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TreeArgs {
    /// Repository directory to walk (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Directory depth limit (1-15)
    #[arg(long, short = 'd', default_value_t = 6)]
    depth: usize,
}

#[derive(Serialize)]
struct MermaidOutput<'a> {
    mermaid: String,
    summary: &'a atlas_protocol::Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep stdout clean for JSON parsing when --json is used.
    let json_output = match &cli.command {
        Commands::Scan(args) => args.json,
        Commands::Preview(args) | Commands::Mermaid(args) => args.json,
        Commands::Tree(_) => false,
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || json_output {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Scan(args) => run_scan(args).await,
        Commands::Preview(args) => run_preview(args).await,
        Commands::Tree(args) => run_tree(args),
        Commands::Mermaid(args) => run_mermaid(args).await,
    }
}

/// Run the synchronous pipeline off the runtime so one large scan cannot
/// stall other tasks.
async fn scan_blocking(path: &PathBuf, config: ScanConfig) -> Result<ScanOutput> {
    let root = path.canonicalize().context("Invalid project path")?;
    let output = tokio::task::spawn_blocking(move || atlas_scanner::scan_all(&root, config))
        .await
        .context("scan worker failed")??;
    Ok(output)
}

async fn run_scan(args: ScanArgs) -> Result<()> {
    let config = ScanConfig {
        max_files: args.max_files,
        include_tests: args.include_tests,
        depth: args.depth,
    };
    let mut output = scan_blocking(&args.path, config).await?;

    if args.brief {
        let brief = atlas_payload::render_brief(&output.summary, &output.files);
        output.payload = format!("{brief}{}", output.payload);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        eprintln!(
            "Scanned {} files, {} lines ({} payload chars)",
            output.summary.total_files,
            output.summary.total_lines,
            output.payload.chars().count()
        );
        println!("{}", output.payload);
    }
    Ok(())
}

async fn run_preview(args: PreviewArgs) -> Result<()> {
    let config = ScanConfig {
        max_files: args.max_files,
        include_tests: args.include_tests,
        depth: args.depth,
    };
    let output = scan_blocking(&args.path, config).await?;

    if args.json {
        let preview = serde_json::json!({
            "summary": output.summary,
            "files": output.files,
        });
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    let summary = &output.summary;
    eprintln!(
        "Repository: {} ({} files, {} lines, avg complexity {:.1})",
        summary.name, summary.total_files, summary.total_lines, summary.avg_complexity
    );
    eprintln!();
    for (language, lines) in &summary.languages {
        println!("{language:<20} {lines:>8} lines");
    }
    if !summary.hotspots.is_empty() {
        println!();
        println!("Hotspots:");
        for hotspot in &summary.hotspots {
            println!(
                "  {:<40} complexity {:>5.1} ({} lines, {})",
                hotspot.file, hotspot.complexity, hotspot.lines, hotspot.language
            );
        }
    }
    if !summary.most_connected.is_empty() {
        println!();
        println!("Most connected:");
        for connected in &summary.most_connected {
            println!("  {:<40} {} links", connected.file, connected.connections);
        }
    }
    Ok(())
}

fn run_tree(args: TreeArgs) -> Result<()> {
    let root = args.path.canonicalize().context("Invalid project path")?;
    let depth = args.depth.clamp(1, 15);
    println!("{}", atlas_scanner::render_tree(&root, depth));
    Ok(())
}

async fn run_mermaid(args: PreviewArgs) -> Result<()> {
    let config = ScanConfig {
        max_files: args.max_files,
        include_tests: args.include_tests,
        depth: args.depth,
    };
    let output = scan_blocking(&args.path, config).await?;
    let mermaid = atlas_graph::to_mermaid(&output.files, &output.summary.dependency_links);

    if args.json {
        let wrapped = MermaidOutput {
            mermaid,
            summary: &output.summary,
        };
        println!("{}", serde_json::to_string_pretty(&wrapped)?);
    } else {
        println!("{mermaid}");
    }
    Ok(())
}
