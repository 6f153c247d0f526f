use anyhow::Result;
use chrono::Utc;
use rustyline::DefaultEditor;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::TimeError;
use crate::table::Table;
use crate::time::{normalize, validate, Instant};
use crate::zones::{self, AnchorZone, TableKind, ZoneRule, ZoneRow, ZoneTable};

pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Top-level flow: load configuration, resolve the input time, convert,
    /// print either the table or a recovery message, then wait for the
    /// final keypress. Format and parse errors are recovered here; zone
    /// data problems propagate and abort.
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let config = Config::load()?;
        let anchor_name = cli.timezone.as_deref().unwrap_or(&config.anchor_zone);
        let anchor = zones::resolve_anchor(anchor_name)?;
        log::debug!("anchor zone: {} ({})", anchor.name, anchor.tz);

        let mut rl = DefaultEditor::new()?;

        let raw = if cli.now {
            Utc::now().with_timezone(&anchor.tz).format("%H:%M").to_string()
        } else if let Some(time) = &cli.time {
            time.clone()
        } else {
            rl.readline("[+] Please enter the time to convert: ")?
        };

        match self.convert(&raw, &anchor, &config, cli) {
            Ok(table) => println!("{}", table),
            Err(err @ TimeError::ZoneData(_)) => return Err(err.into()),
            Err(err) => {
                log::debug!("recovered from input error: {}", err);
                println!("[!] {}", err);
            }
        }

        let _ = rl.readline("Press ENTER ...");
        Ok(())
    }

    /// Run the conversion pipeline and render the result. Returns the
    /// rendered table; any [`TimeError`] bubbles up to [`run`] for the
    /// single print-and-continue (or abort) decision.
    fn convert(
        &self,
        raw: &str,
        anchor: &AnchorZone,
        config: &Config,
        cli: &Cli,
    ) -> Result<Table, TimeError> {
        validate(raw)?;
        let normalized = normalize(raw);
        log::debug!("normalized '{}' -> '{}'", raw, normalized);

        let mut table = Table::new("Time Zone", "Time");

        if cli.named {
            let entries = config.named_entries()?;
            let zone_table = ZoneTable::named(anchor.standard_abbrev.clone(), entries)?;
            let instant = Instant::build(&normalized, ZoneRule::NamedZone(anchor.tz))?;
            table.add_section(rows_to_cells(zones::project(&instant, &zone_table)));
        } else {
            let instant = Instant::build(&normalized, ZoneRule::anchor_default())?;
            let (show_standard, show_daylight) = cli.selected_tables();
            if show_standard {
                let zone_table = config.offset_table(TableKind::Standard).to_zone_table(anchor);
                table.add_section(rows_to_cells(zones::project(&instant, &zone_table)));
            }
            if show_daylight {
                let zone_table = config.offset_table(TableKind::Daylight).to_zone_table(anchor);
                table.add_section(rows_to_cells(zones::project(&instant, &zone_table)));
            }
        }

        Ok(table)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

fn rows_to_cells(rows: Vec<ZoneRow>) -> Vec<(String, String)> {
    rows.into_iter().map(|row| (row.label, row.time.to_string())).collect()
}
