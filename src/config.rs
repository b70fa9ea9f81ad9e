// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line configuration.

use clap::Parser;
use std::path::PathBuf;

/// Personal portfolio with a project media viewer.
#[derive(Debug, Parser)]
#[command(name = "folio", version)]
pub struct Args {
    /// Portfolio content file (.yaml, .yml or .json). The bundled demo
    /// content is shown when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Open the media viewer on this project (zero-based) at start-up
    #[arg(short, long, value_name = "INDEX")]
    pub project: Option<usize>,
}
