use std::io::Write;

use owo_colors::OwoColorize;

use rolodex_core::{Dataset, pager};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print one page of the directory as aligned rows, followed by the page
/// indicator and a rejected-entry warning when applicable.
pub fn print_page(
    w: &mut dyn Write,
    dataset: &Dataset,
    page: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    let rows: Vec<(usize, &rolodex_core::Record)> =
        pager::page_rows(&dataset.records, page, pager::PAGE_SIZE).collect();

    let name_width = rows
        .iter()
        .map(|(_, r)| r.name.chars().count())
        .max()
        .unwrap_or(0);
    let location_width = rows
        .iter()
        .map(|(_, r)| r.location.chars().count())
        .max()
        .unwrap_or(0);

    for (index, record) in &rows {
        // Pad before styling so ANSI codes don't skew the columns
        let name = format!("{:<name_width$}", record.name);
        let location = format!("{:<location_width$}", record.location);
        if color.enabled() {
            writeln!(
                w,
                "{:>4}  {}  {}  {}",
                index,
                name.bold(),
                location,
                record.address.dimmed()
            )?;
        } else {
            writeln!(w, "{:>4}  {}  {}  {}", index, name, location, record.address)?;
        }
    }

    let label = pager::page_label(page, dataset.records.len(), pager::PAGE_SIZE);
    if color.enabled() {
        writeln!(w, "{}", label.dimmed())?;
    } else {
        writeln!(w, "{label}")?;
    }

    if !dataset.rejected.is_empty() {
        let warning = format!(
            "({} entries rejected by schema validation; run `rolodex audit`)",
            dataset.rejected.len()
        );
        if color.enabled() {
            writeln!(w, "{}", warning.yellow())?;
        } else {
            writeln!(w, "{warning}")?;
        }
    }

    Ok(())
}

/// Print every rejected entry with its reason, then the totals.
pub fn print_audit(w: &mut dyn Write, dataset: &Dataset, color: ColorMode) -> std::io::Result<()> {
    for rejected in &dataset.rejected {
        let line = format!("entry {}: {}", rejected.index, rejected.issue.label());
        if color.enabled() {
            writeln!(w, "{}", line.red())?;
        } else {
            writeln!(w, "{line}")?;
        }
    }

    writeln!(
        w,
        "{} valid, {} rejected",
        dataset.records.len(),
        dataset.rejected.len()
    )?;
    Ok(())
}
