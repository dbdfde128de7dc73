//! tct-features - render the Team Communication Toolkit feature catalog.

use anyhow::Result;
use clap::Parser;

use tct_cli::cli::{Cli, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tct_cli::init_logging(cli.effective_log_level());
    run(cli).await
}
