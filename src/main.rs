use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use speechscope::config::Config;
use speechscope::output::{self, terminal};
use speechscope::prepare::{self, PrepareOptions};
use speechscope::queries::Analysis;

/// speechscope: TF-IDF analysis of speech transcripts.
///
/// Answers a fixed set of questions about a directory of normalized speeches:
/// which words matter least and most, who repeats what, who talks about what.
#[derive(Parser)]
#[command(name = "speechscope", version, about)]
struct Cli {
    /// Directory of normalized speeches (overrides SPEECHSCOPE_CORPUS_DIR)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Print results as JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lowercase and strip punctuation from raw speeches into the corpus directory
    Prepare {
        /// Raw speeches directory (overrides SPEECHSCOPE_SOURCE_DIR)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Output directory (defaults to the corpus directory)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Also remove stop words
        #[arg(long)]
        strip_stop_words: bool,
    },

    /// Words whose TF-IDF score is zero in every speech
    LeastImportant,

    /// Word(s) with the highest TF-IDF score
    Highest,

    /// Most repeated word(s) by one author
    MostRepeated {
        /// File-name substring selecting the author (default: Chirac)
        #[arg(long)]
        author: Option<String>,
    },

    /// Authors mentioning a word, and who mentions it most
    Mentions {
        /// Word to count (default: nation)
        #[arg(long)]
        term: Option<String>,
    },

    /// First author, in file-name order, to mention any keyword
    FirstMention {
        /// Keyword substring, repeatable (default: climat, ecologie)
        #[arg(long = "keyword")]
        keywords: Vec<String>,
    },

    /// Words used by every speaker
    Common,

    /// Run every query on a single build of the matrix
    All,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("speechscope=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let corpus_dir = cli.dir.clone().unwrap_or_else(|| config.corpus_dir.clone());
    let settings = &config.queries;

    // Every query command builds the matrix once, from a fresh snapshot.
    let load = || -> Result<Analysis> {
        let analysis = Analysis::load(&corpus_dir)
            .with_context(|| format!("analyzing {}", corpus_dir.display()))?;
        info!(
            documents = analysis.matrix().document_count(),
            terms = analysis.matrix().term_count(),
            "Built TF-IDF matrix"
        );
        Ok(analysis)
    };

    match cli.command {
        Commands::Prepare {
            source,
            out,
            strip_stop_words,
        } => {
            let source = source.unwrap_or_else(|| config.source_dir.clone());
            let out = out.unwrap_or_else(|| corpus_dir.clone());
            let options = PrepareOptions {
                name_marker: settings.name_marker.clone(),
                strip_stop_words,
                stop_words_path: config.stop_words_path.clone(),
            };
            info!(source = %source.display(), out = %out.display(), "Preparing corpus");
            let report = prepare::run(&source, &out, &options)
                .with_context(|| format!("preparing {}", source.display()))?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                terminal::display_prepare(&report);
            }
        }

        Commands::LeastImportant => {
            let words = load()?.least_important();
            if cli.json {
                output::print_json(&words)?;
            } else {
                terminal::display_least_important(&words);
            }
        }

        Commands::Highest => {
            let words = load()?.highest_tfidf();
            if cli.json {
                output::print_json(&words)?;
            } else {
                terminal::display_highest(&words);
            }
        }

        Commands::MostRepeated { author } => {
            let author = author.unwrap_or_else(|| settings.focus_author.clone());
            let words = load()?.most_repeated(&author);
            if cli.json {
                output::print_json(&words)?;
            } else {
                terminal::display_most_repeated(&author, &words);
            }
        }

        Commands::Mentions { term } => {
            let term = term.unwrap_or_else(|| settings.target_term.clone());
            let mentions = load()?.mentions(&term, &settings.name_marker);
            if cli.json {
                output::print_json(&mentions)?;
            } else {
                terminal::display_mentions(&mentions);
            }
        }

        Commands::FirstMention { keywords } => {
            let keywords = if keywords.is_empty() {
                settings.keywords.clone()
            } else {
                keywords
            };
            let author = load()?.first_mention(keywords.as_slice(), &settings.name_marker);
            if cli.json {
                output::print_json(&author)?;
            } else {
                terminal::display_first_mention(&keywords, author.as_deref());
            }
        }

        Commands::Common => {
            let words = load()?.common();
            if cli.json {
                output::print_json(&words)?;
            } else {
                terminal::display_common(&words);
            }
        }

        Commands::All => {
            let report = load()?.report(settings);
            if cli.json {
                output::print_json(&report)?;
            } else {
                terminal::display_report(&report);
            }
        }
    }

    Ok(())
}
