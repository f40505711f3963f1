use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the portfolio as a standalone HTML document.
    Render(RenderArgs),
    /// Validate a content file.
    Validate(ValidateArgs),
    /// Print the built-in sample content as JSON.
    DumpContent,
    /// Build the contact form's mailto link.
    Mailto(MailtoArgs),
    /// Replay a scroll script against the mounted page and print a JSON report.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Content JSON. Defaults to the built-in sample.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Site config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output HTML path; `-` writes to stdout.
    #[arg(long)]
    out: PathBuf,

    /// Embed the animation manifest as a JSON script block.
    #[arg(long)]
    manifest: bool,

    /// Inline every reveal target's starting style.
    #[arg(long)]
    inline_styles: bool,

    /// Stylesheet href linked from the document head.
    #[arg(long)]
    stylesheet: Option<String>,

    /// Footer copyright year. Defaults to the current year.
    #[arg(long)]
    year: Option<i32>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Content JSON. Defaults to the built-in sample.
    #[arg(long)]
    content: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MailtoArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    message: String,

    /// Sender address; required by the form, not part of the link.
    #[arg(long)]
    email: String,

    /// Recipient. Defaults to the content's email.
    #[arg(long)]
    to: Option<String>,

    #[arg(long)]
    content: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Script JSON.
    #[arg(long)]
    script: PathBuf,

    #[arg(long)]
    content: Option<PathBuf>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long)]
    year: Option<i32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Validate(args) => cmd_validate(args),
        Command::DumpContent => cmd_dump_content(),
        Command::Mailto(args) => cmd_mailto(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_content(path: Option<&Path>) -> anyhow::Result<folio::ContentStore> {
    match path {
        Some(p) => folio::ContentStore::load(p)
            .with_context(|| format!("load content '{}'", p.display())),
        None => Ok(folio::ContentStore::builtin()),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<folio::SiteConfig> {
    match path {
        Some(p) => Ok(folio::SiteConfig::load(p)?),
        None => Ok(folio::SiteConfig::default()),
    }
}

fn write_output(out: &Path, text: &str) -> anyhow::Result<()> {
    if out == Path::new("-") {
        print!("{text}");
        return Ok(());
    }
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, text).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let store = load_content(args.content.as_deref())?;
    // Only the config's validity matters for a static render.
    load_config(args.config.as_deref())?;

    let page = folio::Page::compose(&store, &folio::ComposeOpts { year: args.year });
    let html = folio::render_document(
        &page,
        &folio::RenderOpts {
            title: None,
            stylesheet: args.stylesheet,
            inline_initial_styles: args.inline_styles,
            embed_manifest: args.manifest,
        },
    )?;
    write_output(&args.out, &html)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let store = load_content(args.content.as_deref())?;
    store.validate()?;
    println!(
        "ok: {} skills, {} projects ({} featured), {} experiences",
        store.skills().len(),
        store.projects().len(),
        store.featured_projects().count(),
        store.experiences().len()
    );
    Ok(())
}

fn cmd_dump_content() -> anyhow::Result<()> {
    let json = folio::ContentStore::builtin().to_json_pretty()?;
    println!("{json}");
    Ok(())
}

fn cmd_mailto(args: MailtoArgs) -> anyhow::Result<()> {
    let to = match args.to {
        Some(to) => to,
        None => load_content(args.content.as_deref())?.personal().email.clone(),
    };
    let mut form = folio::ContactForm::new();
    form.set_field(folio::FormField::Name, args.name);
    form.set_field(folio::FormField::Email, args.email);
    form.set_field(folio::FormField::Message, args.message);
    let link = form.submit(&to)?;
    println!("{link}");
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script '{}'", args.script.display()))?;
    let script = folio::Script::from_json_str(&text)
        .with_context(|| format!("parse script '{}'", args.script.display()))?;
    let store = load_content(args.content.as_deref())?;
    let config = load_config(args.config.as_deref())?;

    let page = folio::Page::compose(&store, &folio::ComposeOpts { year: args.year });
    let report = folio::simulate(page, &config, &script)?;
    let json = serde_json::to_string_pretty(&report).context("serialize simulation report")?;
    match args.out {
        Some(out) => write_output(&out, &format!("{json}\n")),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
