//! papermd - render committee papers from Markdown to HTML

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use papermd_config::Config;
use papermd_engine::{
    Author, FeatureMacros, MarkdownRenderer, PageOptions, ReferenceIndex, cited_papers,
    defined_references, io,
    references::{draft_unpublished, references_to_yaml},
    render_page, render_references, scaffold_paper, scan_str,
};

#[derive(Parser)]
#[command(name = "papermd")]
#[command(version, about = "Render committee papers from Markdown to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    papermd render -i p1234.md -o p1234r0.html    Render a paper
    papermd reduce-refs index.yaml extra.yaml     Build an id -> title index
    papermd sd6 -o sd6.html                       Render the feature-test macro page
    papermd new-paper --number 1234 --name 'Better lambdas'")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ~/.config/papermd/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a paper to HTML
    Render(RenderArgs),

    /// Reduce bibliography YAML files to a JSON id -> title index
    ReduceRefs {
        /// YAML files with a `references` list; later files win
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Draft bibliography entries for unpublished revisions
    DraftRefs {
        /// Bibliography YAML holding the previous revisions
        #[arg(long, value_name = "FILE")]
        index: PathBuf,

        /// File listing one paper id (P1234R2) per line
        #[arg(long, value_name = "FILE")]
        missing: PathBuf,
    },

    /// Render the feature-test macro status page from a Jinja template
    Sd6 {
        /// Macro listing with `language`, `library` and `attributes`
        #[arg(long, default_value = "macros.yaml", value_name = "FILE")]
        macros: PathBuf,

        /// JSON reference index, as written by reduce-refs
        #[arg(long, default_value = "reduced.json", value_name = "FILE")]
        refs: PathBuf,

        /// Jinja template for the page
        #[arg(long, default_value = "sd6.tmpl", value_name = "FILE")]
        template: PathBuf,

        /// Output HTML (standard output when omitted)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Create a directory with a skeleton for a new paper
    NewPaper {
        /// Paper number, digits only
        #[arg(long)]
        number: String,

        /// Paper name, e.g. "Better lambdas"
        #[arg(long)]
        name: String,

        /// Directory to create the paper in
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Author name (defaults to the configured author)
        #[arg(long, requires = "author_email")]
        author_name: Option<String>,

        /// Author email (defaults to the configured author)
        #[arg(long, requires = "author_name")]
        author_email: Option<String>,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Input paper (standard input when omitted)
    #[arg(short, long, value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output HTML (standard output when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Extra stylesheet or script to inline, after the configured assets
    #[arg(short, long = "style", value_name = "PATH")]
    styles: Vec<PathBuf>,

    /// Date for the address block when the paper has no Date field
    #[arg(long)]
    date: Option<String>,

    /// JSON reference index used for wg21 link titles
    #[arg(long, value_name = "INDEX")]
    index: Option<PathBuf>,

    /// Append a References section for cited wg21 papers and the
    /// paper's own reference definitions
    #[arg(long)]
    references: bool,

    /// Language class for code without an explicit language
    #[arg(long)]
    language: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .unwrap_or_default();

    match cli.command {
        Command::Render(args) => render(args, &config),
        Command::ReduceRefs { files } => reduce_refs(&files),
        Command::DraftRefs { index, missing } => draft_refs(&index, &missing),
        Command::Sd6 {
            macros,
            refs,
            template,
            output,
        } => sd6(&macros, &refs, &template, output.as_deref()),
        Command::NewPaper {
            number,
            name,
            dir,
            author_name,
            author_email,
        } => {
            let author = match (author_name, author_email, &config.author) {
                (Some(name), Some(email), _) => Author { name, email },
                (_, _, Some(configured)) => Author {
                    name: configured.name.clone(),
                    email: configured.email.clone(),
                },
                _ => bail!(
                    "No author configured: pass --author-name and --author-email or set [author] in {}",
                    Config::config_path().display()
                ),
            };
            let paper = scaffold_paper(&dir, &number, &name, &author)?;
            println!("Created {}", paper.directory.display());
            Ok(())
        }
    }
}

fn render(args: RenderArgs, config: &Config) -> Result<()> {
    let source = io::read_input(args.input.as_deref()).context("Failed to read paper")?;

    let language = args
        .language
        .or_else(|| config.code_language.clone())
        .unwrap_or_else(|| MarkdownRenderer::DEFAULT_LANGUAGE.to_string());
    let defined = defined_references(&source);
    let mut renderer = MarkdownRenderer::new(language).with_definitions(defined.clone());

    let index = match args.index.or_else(|| config.references.clone()) {
        Some(path) => {
            let json = io::read_file(&path)?;
            let index = ReferenceIndex::from_json(&json)
                .with_context(|| format!("Failed to load reference index {}", path.display()))?
                .with_revisionless_aliases();
            log::debug!("Loaded {} references from {}", index.len(), path.display());
            renderer = renderer.with_references(index.clone());
            index
        }
        None => ReferenceIndex::new(),
    };

    let doc = scan_str(&source, &renderer).context("Failed to scan paper")?;

    let mut asset_paths = config.asset_paths()?;
    asset_paths.extend(args.styles);
    let assets = asset_paths
        .iter()
        .map(|path| {
            io::load_asset(path).with_context(|| format!("Failed to load asset {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let references = if args.references {
        render_references(&cited_papers(doc.body_html()), &index, &defined)
    } else {
        None
    };

    let options = PageOptions {
        date: Some(args.date.unwrap_or_else(today)),
        assets,
        references,
    };
    let page = render_page(&doc, &renderer, &options)?;
    io::write_output(args.output.as_deref(), &page)?;
    Ok(())
}

fn reduce_refs(files: &[PathBuf]) -> Result<()> {
    let documents = files
        .iter()
        .map(|path| Ok((path.display().to_string(), io::read_file(path)?)))
        .collect::<Result<Vec<_>>>()?;
    let index = ReferenceIndex::reduce(
        documents
            .iter()
            .map(|(name, contents)| (name.as_str(), contents.as_str())),
    )?;
    io::write_output(None, &format!("{}\n", index.to_json_pretty()?))?;
    Ok(())
}

fn draft_refs(index: &Path, missing: &Path) -> Result<()> {
    let index_yaml = io::read_file(index)?;
    let missing = io::read_file(missing)?;
    let papers: Vec<&str> = missing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let drafts = draft_unpublished(&index_yaml, &papers)?;
    io::write_output(None, &references_to_yaml(drafts)?)?;
    Ok(())
}

fn sd6(macros: &Path, refs: &Path, template: &Path, output: Option<&Path>) -> Result<()> {
    let macros = FeatureMacros::from_yaml(&io::read_file(macros)?)
        .with_context(|| format!("Failed to load macros from {}", macros.display()))?;
    let refs = ReferenceIndex::from_json(&io::read_file(refs)?)
        .with_context(|| format!("Failed to load reference index {}", refs.display()))?;
    let template_source = io::read_file(template)?;
    let page = macros
        .render(&template_source, &refs)
        .with_context(|| format!("Failed to render {}", template.display()))?;
    io::write_output(output, &page)?;
    Ok(())
}

/// Today's local date as `YYYY-MM-DD`.
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
