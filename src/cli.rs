use clap::Parser;

/// Compare two dates given as MM/DD/YYYY, each with an optional HH:mm:SS time.
///
/// The time of day is ignored. Dates missing from the command line are read
/// from standard input.
#[derive(Parser)]
#[command(
    name = "datecompare",
    version,
    about = "Compare two MM/DD/YYYY dates by their components and by calendar order"
)]
pub struct Cli {
    /// Base date, e.g. "01/05/2021" or "1/5/2021 10:30:00".
    pub base: Option<String>,

    /// Date to compare the base date against.
    pub compare: Option<String>,

    /// Print the outcome as JSON instead of a sentence.
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
