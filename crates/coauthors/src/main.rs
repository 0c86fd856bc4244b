use clap::{builder::ArgAction, Parser};
use console::{style, Emoji};
use errors::CoauthorsError;
use scholar::{
  clients::SemanticScholarClient,
  coauthors::{all_coauthors, extract_coauthors, get_author_info},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod errors;

static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
static BOOKS: Emoji<'_, '_> = Emoji("📚 ", "");
static PAPER: Emoji<'_, '_> = Emoji("📄 ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✨ ", "");

#[derive(Parser)]
#[command(version, about = "Find an author's recent co-authors from their publication record")]
struct Cli {
  /// Author name to search for (prompted for when omitted)
  author: Option<String>,

  /// Number of years to look back for co-authorship (prompted for when omitted)
  #[arg(long, short)]
  years: Option<i32>,

  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,
}

/// Setup logging with the specified verbosity level
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

#[tokio::main]
async fn main() -> Result<(), CoauthorsError> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let author_name = match cli.author {
    Some(author) => author,
    None => dialoguer::Input::<String>::new().with_prompt("Enter the author's name").interact()?,
  };

  let years = match cli.years {
    Some(years) => years,
    None =>
      dialoguer::Input::<i32>::new()
        .with_prompt("Enter the number of years to look back for co-authorship")
        .interact()?,
  };

  let client = SemanticScholarClient::new();

  println!(
    "{} Searching for author: {}",
    style(LOOKING_GLASS).cyan(),
    style(&author_name).yellow()
  );

  let Some(author_info) = get_author_info(&client, &author_name).await else {
    println!(
      "{} Unable to retrieve information for author: {}",
      style(WARNING).yellow(),
      style(&author_name).yellow()
    );
    return Ok(());
  };

  println!(
    "\n{} Found author: {}",
    style(SUCCESS).green(),
    style(&author_info.name).white().bold()
  );
  debug!("Author profile: {:?}", author_info);

  let paper_coauthors = extract_coauthors(&client, &author_info, years).await;
  let coauthors = all_coauthors(&paper_coauthors);

  if coauthors.is_empty() {
    println!(
      "{} No co-authors found in the last {} years",
      style(WARNING).yellow(),
      style(years).yellow()
    );
    return Ok(());
  }

  println!(
    "\n{} Co-authors in the last {} years: {}",
    style(BOOKS).cyan(),
    style(years).yellow(),
    style(coauthors.iter().map(String::as_str).collect::<Vec<_>>().join(", ")).white()
  );

  println!("\n{} Details:", style(PAPER).green());
  for (paper, coauthors) in &paper_coauthors {
    println!("   {} {}", style("Paper:").green().bold(), style(paper).white());
    println!(
      "   {} {}",
      style("Co-authors:").green(),
      style(coauthors.iter().map(String::as_str).collect::<Vec<_>>().join(", ")).white()
    );
  }

  Ok(())
}
