//! mactrail - filesystem timeline forensics from the command line.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    mactrail_cli::run().await
}
