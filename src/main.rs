//! Boggle Solver - CLI
//!
//! Solves letter grids and generates grids that meet quality targets.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{
        GenerateOverrides, SolveConfig, SurveyConfig, load_options, run_generate, run_survey,
        sample_letters, solve_letters,
    },
    dictionary::{CommonWords, DictionaryIndex, EmbeddedWords, FileWords, WordSource},
    generator::Generator,
    letters::DistributionCatalog,
    log::init_logger,
    output::{print_generated_puzzle, print_letters, print_solve_result, print_survey_result},
    solver::DEFAULT_MAX_PATH_LEN,
    store::JsonFileStore,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Word-grid solver and constrained puzzle generator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: 'embedded' (default) or path to a .json, .bin or text word list
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Common-word list used for rarity scoring (default: embedded)
    #[arg(long, global = true)]
    common: Option<PathBuf>,

    /// JSON catalogue of letter distributions replacing the built-in one
    #[arg(long, global = true)]
    distributions: Option<PathBuf>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every word in a grid
    Solve {
        /// Letters, optionally prefixed with width and height digits (e.g. 44abcd...)
        letters: String,

        /// Grid width; overrides any digit prefix
        #[arg(long)]
        width: Option<usize>,

        /// Grid height; overrides any digit prefix
        #[arg(long)]
        height: Option<usize>,

        /// Expand 'q' cells to 'qu'
        #[arg(long)]
        decode_q: bool,

        /// List the words under each length
        #[arg(short, long)]
        list: bool,
    },

    /// Generate a grid that meets the given targets
    Generate {
        /// JSON request file (camelCase GenerationOptions)
        #[arg(short, long)]
        options: Option<PathBuf>,

        #[arg(long)]
        width: Option<usize>,

        #[arg(long)]
        height: Option<usize>,

        /// Letter distribution name from the catalogue
        #[arg(short, long)]
        distribution: Option<String>,

        #[arg(short = 'n', long)]
        max_attempts: Option<usize>,

        /// Worker threads
        #[arg(short = 'j', long)]
        workers: Option<usize>,

        /// Return the closest attempt when nothing qualifies
        #[arg(long)]
        return_best: bool,

        #[arg(long)]
        min_words: Option<usize>,

        #[arg(long)]
        max_words: Option<usize>,

        /// Word the grid must contain (repeatable)
        #[arg(short, long = "require")]
        require: Vec<String>,

        /// Letters to use instead of sampling
        #[arg(long)]
        letters: Option<String>,

        /// Join 'q' and 'u' into one cell in --letters and --require
        #[arg(long)]
        convert_q: bool,

        /// Shuffle --letters instead of filling the grid in the given order
        #[arg(long)]
        shuffle: bool,

        /// Cancel after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// List the words under each length
        #[arg(short, long)]
        list: bool,
    },

    /// Roll cube sets in bulk and update the leaderboard
    Survey {
        /// Board side (4 or 5)
        #[arg(short, long, default_value = "4")]
        size: usize,

        #[arg(short = 'n', long, default_value = "100")]
        repetitions: usize,

        #[arg(long)]
        min_words: Option<usize>,

        #[arg(long)]
        max_words: Option<usize>,

        /// Leaderboard directory
        #[arg(long, default_value = "leaderboards")]
        store: PathBuf,
    },

    /// Sample letters from a distribution
    Letters {
        /// Distribution name (default: catalogue default)
        #[arg(short, long)]
        distribution: Option<String>,

        #[arg(short = 'n', long, default_value = "16")]
        count: usize,
    },
}

/// Build the dictionary from the -w flag
fn load_dictionary(wordlist: &str) -> Result<DictionaryIndex> {
    let source: Box<dyn WordSource> = match wordlist {
        "embedded" => Box::new(EmbeddedWords::Dictionary),
        path => Box::new(FileWords::new(path)),
    };
    DictionaryIndex::from_source(source.as_ref())
        .with_context(|| format!("loading dictionary from {}", source.describe()))
}

fn load_common(path: Option<&PathBuf>) -> Result<CommonWords> {
    let words = match path {
        Some(path) => CommonWords::from_source(&FileWords::new(path)),
        None => CommonWords::from_source(&EmbeddedWords::Common),
    };
    Ok(words?)
}

fn load_catalog(path: Option<&PathBuf>) -> Result<DistributionCatalog> {
    Ok(match path {
        Some(path) => DistributionCatalog::from_json_file(path)?,
        None => DistributionCatalog::builtin(),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let catalog = load_catalog(cli.distributions.as_ref())?;

    match cli.command {
        Commands::Letters {
            distribution,
            count,
        } => {
            let result = sample_letters(&catalog, distribution.as_deref(), count, &mut rand::rng())?;
            print_letters(&result);
            Ok(())
        }
        Commands::Solve {
            letters,
            width,
            height,
            decode_q,
            list,
        } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let config = SolveConfig {
                letters,
                width,
                height,
                decode_q,
                max_path_length: DEFAULT_MAX_PATH_LEN,
            };
            let result = solve_letters(&config, &dictionary)?;
            print_solve_result(&result, list);
            Ok(())
        }
        Commands::Generate {
            options,
            width,
            height,
            distribution,
            max_attempts,
            workers,
            return_best,
            min_words,
            max_words,
            require,
            letters,
            convert_q,
            shuffle,
            timeout,
            json,
            list,
        } => {
            let overrides = GenerateOverrides {
                width,
                height,
                distribution,
                max_attempts,
                workers,
                return_best,
                min_words,
                max_words,
                require,
                letters,
                convert_q,
                shuffle,
            };
            let options = overrides.apply(load_options(options.as_deref())?)?;

            let dictionary = load_dictionary(&cli.wordlist)?;
            let common = load_common(cli.common.as_ref())?;
            let generator = Generator::new(&dictionary, &common, &catalog);

            let puzzle = run_generate(&generator, &options, timeout.map(Duration::from_secs), !json)
                .map_err(|e| anyhow::anyhow!("[{}] {e}", e.code()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&puzzle)?);
            } else {
                print_generated_puzzle(&puzzle, list);
            }
            Ok(())
        }
        Commands::Survey {
            size,
            repetitions,
            min_words,
            max_words,
            store,
        } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let common = load_common(cli.common.as_ref())?;
            let generator = Generator::new(&dictionary, &common, &catalog);
            let config = SurveyConfig {
                min_words,
                max_words,
                show_progress: true,
                ..SurveyConfig::new(size, repetitions)
            };
            let result = run_survey(&generator, &catalog, &JsonFileStore::new(store), &config)?;
            print_survey_result(&result);
            Ok(())
        }
    }
}
