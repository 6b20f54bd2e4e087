// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::BlacklistResult;

use super::Renderable;

impl Renderable for BlacklistResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(
            w,
            "{} {}",
            style("Added to blacklist:").green(),
            style(&self.owner).bold()
        )
    }
}
