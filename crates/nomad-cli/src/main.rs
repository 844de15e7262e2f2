use anyhow::Result;

use nomad_cli::{cli::Cli, logging};
use nomad_db::Connection;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();
    logging::init(&cli.log_level)?;

    let conn = Connection::open(&cli.db).await?;
    cli.command.run(&conn).await
}
