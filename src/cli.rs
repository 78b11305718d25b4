//! Command-line surface. `wfbfa-solver-cli`'s `main.rs` builds its
//! subcommands with `clap::App`/`SubCommand`/`Arg`; this crate's surface is
//! a single flat command, so it is expressed with the same crate's modern
//! derive API instead.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which engine(s) to run the topology through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    Ls,
    Dv,
    Both,
}

/// Simulate link-state and/or distance-vector routing over a topology.
#[derive(Parser, Debug)]
#[command(name = "routesim", version, about)]
pub struct Cli {
    /// Topology file: lines of `id1 id2 cost`.
    pub topology: PathBuf,

    /// Message file: lines of `src dst <message text>`.
    pub messages: PathBuf,

    /// Changes file: lines of `id1 id2 cost`, `cost == -999` removes the edge.
    pub changes: PathBuf,

    /// Output file. Defaults to `output.txt`.
    #[arg(default_value = "output.txt")]
    pub output: PathBuf,

    /// Which engine(s) to run. Defaults to `ls` alone: spec §6's CLI and
    /// output format describe one engine emitting one section set per
    /// topology state, matching the ground truth's two separate
    /// single-engine programs. `both` still emits only LS's output and
    /// additionally runs DV alongside to cross-check it.
    #[arg(long, value_enum, default_value_t = EngineKind::Ls)]
    pub engine: EngineKind,

    /// Enable verbose (trace-level) logging.
    #[arg(short, long)]
    pub verbose: bool,
}
