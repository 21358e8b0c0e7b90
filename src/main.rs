use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use obst::report::{fingerprint, write_cost_table, write_root_table};
use obst::{GapAccounting, ObstConfig, OptimalSearchIndex};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Word typed at the prompt to leave the interactive loop.
const QUIT_COMMAND: &str = "q!";

#[derive(Parser, Debug)]
#[command(name = "obst", about = "Optimal binary search trees over word frequencies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct DictionaryArgs {
    /// Frequency dictionary (`<frequency> <word>` per line).
    dictionary: PathBuf,
    /// Minimum frequency for a word to become a tree node.
    #[arg(long, default_value_t = obst::DEFAULT_THRESHOLD)]
    threshold: u64,
    /// Reproduce the legacy positional sum for the leading gap probability.
    #[arg(long)]
    legacy_gaps: bool,
    /// Skip malformed lines instead of failing.
    #[arg(long)]
    lenient: bool,
}

impl DictionaryArgs {
    fn config(&self) -> ObstConfig {
        let accounting = if self.legacy_gaps {
            GapAccounting::LegacyPositional
        } else {
            GapAccounting::Frequency
        };
        let config = ObstConfig::default()
            .with_threshold(self.threshold)
            .with_gap_accounting(accounting);
        if self.lenient {
            config.lenient()
        } else {
            config
        }
    }

    fn load(&self) -> Result<OptimalSearchIndex> {
        OptimalSearchIndex::from_path(&self.dictionary, &self.config()).with_context(|| {
            format!("failed to build index from {}", self.dictionary.display())
        })
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve the tree and print a summary, optionally dumping tables.
    Build {
        #[command(flatten)]
        dictionary: DictionaryArgs,
        /// Directory receiving e_table.txt, root_table.txt and tree.txt.
        #[arg(long)]
        dump_dir: Option<PathBuf>,
    },
    /// Look up one or more words.
    Search {
        #[command(flatten)]
        dictionary: DictionaryArgs,
        /// Words to look up.
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Interactive lookup loop; enter `q!` to quit.
    Repl {
        #[command(flatten)]
        dictionary: DictionaryArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            dictionary,
            dump_dir,
        } => run_build(&dictionary, dump_dir.as_deref())?,
        Commands::Search { dictionary, words } => run_search(&dictionary, &words)?,
        Commands::Repl { dictionary } => run_repl(&dictionary)?,
    }

    Ok(())
}

fn run_build(args: &DictionaryArgs, dump_dir: Option<&Path>) -> Result<()> {
    let index = args.load()?;
    let solution = index.solution();
    let root_word = index.tree().root().map(|node| node.value()).unwrap_or("-");

    println!("keys\t{}", solution.n());
    println!("expected_cost\t{:.6}", solution.expected_cost());
    println!("root\t{} ({})", root_word, solution.root_index());
    println!("height\t{}", index.tree().height());
    let digest = fingerprint(solution).context("failed to fingerprint tables")?;
    println!("fingerprint\t{digest}");

    if let Some(dir) = dump_dir {
        write_dumps(&index, dir)?;
        info!(dir = %dir.display(), "wrote debug dumps");
    }

    Ok(())
}

fn write_dumps(index: &OptimalSearchIndex, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create dump directory {}", dir.display()))?;

    let mut cost = create(&dir.join("e_table.txt"))?;
    write_cost_table(&mut cost, index.solution().cost()).context("failed to write e_table.txt")?;

    let mut roots = create(&dir.join("root_table.txt"))?;
    write_root_table(&mut roots, index.solution().roots())
        .context("failed to write root_table.txt")?;

    let mut tree = create(&dir.join("tree.txt"))?;
    write!(tree, "{}", index.tree()).context("failed to write tree.txt")?;
    tree.flush()?;

    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn run_search(args: &DictionaryArgs, words: &[String]) -> Result<()> {
    let index = args.load()?;
    for word in words {
        let outcome = index.search(word);
        println!("{word}\t{outcome}\tcomparisons={}", outcome.comparisons);
    }
    Ok(())
}

fn run_repl(args: &DictionaryArgs) -> Result<()> {
    let index = args.load()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        println!(".......SEARCH.......");
        println!("To quit enter {QUIT_COMMAND}\n");
        print!("Word to search for: ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;
        let word = line.trim();
        if word == QUIT_COMMAND {
            break;
        }

        let outcome = index.search(word);
        println!("\nPath:\n{outcome}");
        println!("\nNumber of comparisons: {}.\n", outcome.comparisons);
    }

    Ok(())
}
