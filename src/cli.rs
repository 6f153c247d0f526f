use clap::Parser;

/// Timezoner - convert a clock time across a set of time zones
#[derive(Debug, Parser)]
#[command(name = "timezoner")]
#[command(about = "Convert a clock time across a set of time zones", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The time to convert. Can be in 12 hour ("9:00 PM") or 24 hour ("21:00")
    #[arg(short, long, conflicts_with = "now")]
    pub time: Option<String>,

    /// Convert the current time instead of a supplied one
    #[arg(short, long, conflicts_with = "time")]
    pub now: bool,

    /// Anchor time zone the entered time is in ("Mountain", "Pacific", or an
    /// IANA name like "Europe/London")
    #[arg(short = 'z', long = "timezone")]
    pub timezone: Option<String>,

    /// Show the standard (winter) fixed-offset table
    #[arg(short, long)]
    pub standard: bool,

    /// Show the daylight fixed-offset table
    #[arg(short, long)]
    pub daylight: bool,

    /// Project through the live zone database instead of the fixed-offset
    /// tables, with DST-aware labels
    #[arg(long, conflicts_with_all = ["standard", "daylight"])]
    pub named: bool,
}

impl Cli {
    /// Which fixed-offset tables to show. When the user asked for neither,
    /// both are shown.
    pub fn selected_tables(&self) -> (bool, bool) {
        if !self.standard && !self.daylight {
            (true, true)
        } else {
            (self.standard, self.daylight)
        }
    }
}
