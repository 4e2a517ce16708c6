use clap::{Parser, Subcommand};
use dept_site::{generate, load, output, search, validate};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dept-site")]
#[command(about = "Static site generator for university department pages")]
#[command(long_about = "\
Static site generator for university department pages

One JSON document is the data source. It describes the department's
identity, specialties, courses, faculty, headline statistics, and external
links; the generator turns it into a self-contained single-page site with
pre-rendered detail overlays.

Document structure (data.json):

  siteInfo      title, club name/tagline, logo
  specialties   id → program track (learning points, careers, skills,
                course-id references, optional coordinator)
  courses       id → course (code, hours, description, objectives, topics)
  faculty       id → profile; the 'head' key designates the department head;
                'disabled: true' withholds a profile's detail view
  statistics    ordered list of headline figures, matched by title
  links         apply / learnMore URLs

Validation is advisory: a document with issues still renders whatever
sections have data.")]
#[command(version)]
struct Cli {
    /// Path to the data document
    #[arg(long, default_value = "data.json", global = true)]
    data: PathBuf,

    /// Fetch the data document from a URL instead of reading --data
    #[arg(long, global = true)]
    fetch: Option<String>,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load, validate, and generate the site
    Build,
    /// Load and validate the data document without building
    Check,
    /// Search courses and faculty for a substring
    Search {
        /// Case-sensitive substring to look for
        query: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let data = match &cli.fetch {
        Some(url) => load::fetch(url)?,
        None => load::load_file(&cli.data)?,
    };

    match cli.command {
        Command::Build => {
            let report = validate::validate(&data);
            output::print_check_output(&report, &data.counts());
            let summary = generate::generate(&data, &cli.output)?;
            output::print_build_output(&summary, &cli.output);
        }
        Command::Check => {
            let report = validate::validate(&data);
            output::print_check_output(&report, &data.counts());
        }
        Command::Search { query } => {
            let courses = search::search_courses(&data, &query);
            let faculty = search::search_faculty(&data, &query);
            output::print_search_results(&courses, &faculty);
        }
    }

    Ok(())
}
