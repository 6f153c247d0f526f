use std::fmt;

/// A two-column text table with a bordered header and optional divider
/// lines between row sections. None of the crates in use render tables, so
/// this mirrors the classic `+---+---+` layout by hand.
#[derive(Debug)]
pub struct Table {
    headers: (String, String),
    sections: Vec<Vec<(String, String)>>,
}

impl Table {
    pub fn new(left: &str, right: &str) -> Self {
        Self { headers: (left.to_string(), right.to_string()), sections: Vec::new() }
    }

    /// Append a block of rows. Each section after the first is separated
    /// from the previous one by a divider line.
    pub fn add_section(&mut self, rows: Vec<(String, String)>) {
        self.sections.push(rows);
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.is_empty())
    }

    fn column_widths(&self) -> (usize, usize) {
        let mut left = self.headers.0.len();
        let mut right = self.headers.1.len();
        for (l, r) in self.sections.iter().flatten() {
            left = left.max(l.len());
            right = right.max(r.len());
        }
        (left, right)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lw, rw) = self.column_widths();
        let divider = format!("+-{}-+-{}-+", "-".repeat(lw), "-".repeat(rw));

        writeln!(f, "{}", divider)?;
        writeln!(f, "| {:<lw$} | {:<rw$} |", self.headers.0, self.headers.1)?;
        writeln!(f, "{}", divider)?;
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f, "{}", divider)?;
            }
            for (left, right) in section {
                writeln!(f, "| {:<lw$} | {:<rw$} |", left, right)?;
            }
        }
        write!(f, "{}", divider)
    }
}
