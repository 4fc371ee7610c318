//! launch_mapper CLI

use clap::{Args, Parser, Subcommand};
use launch_mapper::{crawl, LaunchSummary, ResolveContext};
use std::{
    collections::HashMap,
    path::PathBuf,
    process,
};

#[derive(Parser)]
#[command(name = "launch_mapper")]
#[command(about = "Summarize ROS launch files and map their include graph", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render indented text reports, one per crawled file
    Text(InputArgs),

    /// Render a Graphviz digraph of the include tree
    Graph(InputArgs),

    /// Dump the parsed summaries as JSON
    Json(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Root launch file
    path: PathBuf,

    /// Variable bindings for include resolution (name:=value)
    #[arg(value_parser = parse_launch_arg)]
    args: Vec<(String, String)>,

    /// Package root for $(find ...) resolution (name=path, repeatable)
    #[arg(long = "pkg", value_parser = parse_package_root)]
    packages: Vec<(String, PathBuf)>,

    /// Process only the root file, without following includes
    #[arg(long)]
    single: bool,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    match s.split_once(":=") {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("Invalid launch argument format: {}", s)),
    }
}

fn parse_package_root(s: &str) -> Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((name, path)) => Ok((name.to_string(), PathBuf::from(path))),
        None => Err(format!("Invalid package root format: {}", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Text(input) => run(input, render_reports),
        Commands::Graph(input) => run(input, render_graph),
        Commands::Json(input) => run(input, render_json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

type RenderFn = fn(&[LaunchSummary]) -> Result<String, Box<dyn std::error::Error>>;

fn run(input: InputArgs, render: RenderFn) -> Result<(), Box<dyn std::error::Error>> {
    let vars: HashMap<String, String> = input.args.into_iter().collect();
    let packages: HashMap<String, PathBuf> = input.packages.into_iter().collect();
    let ctx = ResolveContext::new(&vars, &packages);

    let summaries = crawl(&input.path, &ctx, !input.single);
    let rendered = render(&summaries)?;

    match input.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render_reports(summaries: &[LaunchSummary]) -> Result<String, Box<dyn std::error::Error>> {
    let mut out = String::new();
    for summary in summaries {
        out.push('\n');
        out.push_str(&"- ".repeat(25));
        out.push('\n');
        out.push_str(&summary.render_text()?);
    }
    Ok(out)
}

fn render_graph(summaries: &[LaunchSummary]) -> Result<String, Box<dyn std::error::Error>> {
    let mut out = String::from("digraph launch_includes {\nrankdir=LR;\n");
    for summary in summaries {
        out.push_str(&summary.render_graph_node()?);
    }
    out.push_str("}\n");
    Ok(out)
}

fn render_json(summaries: &[LaunchSummary]) -> Result<String, Box<dyn std::error::Error>> {
    let mut out = serde_json::to_string_pretty(summaries)?;
    out.push('\n');
    Ok(out)
}
