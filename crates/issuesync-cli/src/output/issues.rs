// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use console::style;
use issuesync_core::Issue;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::IssuesResult;
use crate::table::TablePrinter;

use super::Renderable;

const HEADER: [&str; 7] = ["ID", "Title", "Status", "Owner", "Created", "Effort", "Due"];

/// Formats a date like `Sun Jan 01 2023`.
fn display_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

fn row(issue: &Issue) -> Vec<String> {
    vec![
        issue.id.to_string(),
        issue.title.clone(),
        issue.status.clone(),
        issue.owner.clone(),
        display_date(issue.created),
        issue.effort.map(|e| e.to_string()).unwrap_or_default(),
        issue.due.map(display_date).unwrap_or_default(),
    ]
}

impl Renderable for IssuesResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        if self.issues.is_empty() {
            let msg = match &self.owner_filter {
                Some(owner) => format!("No issues found for owner matching '{owner}'."),
                None => "No issues found.".to_string(),
            };
            writeln!(w, "{}", style(msg).yellow())?;
            return Ok(());
        }

        let mut table = TablePrinter::with_header(&HEADER);
        for issue in &self.issues {
            table.add_row(row(issue));
        }
        write!(w, "{}", table.render())?;

        writeln!(w)?;
        writeln!(
            w,
            "{}",
            style(format!(
                "Showing {} of {} issues",
                self.issues.len(),
                self.total_count
            ))
            .dim()
        )?;
        Ok(())
    }
}
