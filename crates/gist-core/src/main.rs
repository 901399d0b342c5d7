use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use gist_core::{extract_json, AnySession, GistConfig, LogConfig};
use gist_model::{DocumentKind, GistDesignFile};
use gist_render::{render_design_file, RenderMode};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .short('k')
        .value_parser(value_parser!(DocumentKind))
        .help("Document kind: brief, ideation, constraints or stakeholder")
}

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input").default_value("-").help(help)
}

fn cli() -> Command {
    Command::new("gist")
        .version(gist_core::VERSION)
        .about("Structured design documents from conversational turns")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract directives from one assistant turn")
                .arg(kind_arg().required(true))
                .arg(input_arg("Turn text file, or - for stdin")),
        )
        .subcommand(
            Command::new("replay")
                .about("Replay a JSON array of assistant turns through a fresh session")
                .arg(kind_arg().required_unless_present("resume"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .default_value("markdown")
                        .value_parser(["markdown", "info", "snapshot", "turns"])
                        .help("What to print once all turns are applied"),
                )
                .arg(
                    Arg::new("resume")
                        .long("resume")
                        .value_parser(value_parser!(PathBuf))
                        .conflicts_with("kind")
                        .help("Continue from a session snapshot instead of an empty document"),
                )
                .arg(input_arg("Turns file, or - for stdin")),
        )
        .subcommand(
            Command::new("render")
                .about("Render a product design file to markdown")
                .arg(
                    Arg::new("summary")
                        .long("summary")
                        .action(ArgAction::SetTrue)
                        .help("Only intent and exclusions per feature"),
                )
                .arg(input_arg("Design file JSON, or - for stdin")),
        )
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    if log.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
    }
}

fn input_of(args: &ArgMatches) -> anyhow::Result<String> {
    let path = args
        .get_one::<String>("input")
        .ok_or_else(|| anyhow!("missing input"))?;
    read_input(path)
}

fn run_extract(args: &ArgMatches) -> anyhow::Result<()> {
    let kind = *args
        .get_one::<DocumentKind>("kind")
        .ok_or_else(|| anyhow!("missing --kind"))?;
    let raw = input_of(args)?;
    let extraction = extract_json(kind, &raw)?;
    println!("{}", serde_json::to_string_pretty(&extraction)?);
    Ok(())
}

fn run_replay(args: &ArgMatches, config: &GistConfig) -> anyhow::Result<()> {
    let mut session = match args.get_one::<PathBuf>("resume") {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading snapshot {}", path.display()))?;
            AnySession::restore(&json, config)?
        }
        None => {
            let kind = *args
                .get_one::<DocumentKind>("kind")
                .ok_or_else(|| anyhow!("missing --kind"))?;
            AnySession::new(kind, config)
        }
    };

    let turns: Vec<String> =
        serde_json::from_str(&input_of(args)?).context("turns must be a JSON array of strings")?;
    tracing::info!("Replaying {} turns into a {} session", turns.len(), session.kind());

    let mut outcomes = Vec::with_capacity(turns.len());
    for raw in &turns {
        outcomes.push(session.apply_turn(raw)?);
    }

    let format = args
        .get_one::<String>("format")
        .map_or("markdown", String::as_str);
    match format {
        "info" => println!("{}", serde_json::to_string_pretty(&session.info())?),
        "snapshot" => println!("{}", session.snapshot()?),
        "turns" => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        _ => print!("{}", session.export_markdown()),
    }
    Ok(())
}

fn run_render(args: &ArgMatches) -> anyhow::Result<()> {
    let file: GistDesignFile =
        serde_json::from_str(&input_of(args)?).context("parsing design file")?;
    let mode = if args.get_flag("summary") {
        RenderMode::Summary
    } else {
        RenderMode::Full
    };
    print!("{}", render_design_file(&file, mode));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => GistConfig::load(path)?,
        None => GistConfig::default(),
    };
    init_tracing(&config.log);

    match matches.subcommand() {
        Some(("extract", args)) => run_extract(args),
        Some(("replay", args)) => run_replay(args, &config),
        Some(("render", args)) => run_render(args),
        _ => Ok(()),
    }
}
