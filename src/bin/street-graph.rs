//! Interactive street graph.
//!
//! Reads one command per line from stdin, prints the graph for every
//! `gg` to stdout and reports errors on stderr without ending the
//! session. Set `RUST_LOG=debug` to trace crossing maintenance.
use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::{debug, info};
use street_crossings::{Command, Crossings};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut crossings = Crossings::new();

    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };
        debug!("line {n}: {cmd:?}", n = lineno + 1, cmd = cmd);

        match cmd.apply(&mut crossings) {
            Ok(Some(graph)) => {
                writeln!(out, "{}", graph).context("failed to write graph")?;
                out.flush()?;
            }
            Ok(None) => info!(
                "{n} streets after line {lineno}",
                n = crossings.store().len(),
                lineno = lineno + 1
            ),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    Ok(())
}
