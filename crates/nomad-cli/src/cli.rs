use anyhow::Result;
use clap::{Parser, Subcommand};

use nomad_db::{schema, Connection};

use crate::commands::{
    Accommodations,
    Bookings,
    Managements,
    Places,
    Requests,
    Rooms,
    Trips,
    Users,
};

#[derive(Parser, Debug)]
#[clap(name = "nomad", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path of the sqlite database
    #[clap(long, env = "NOMAD_DB", default_value = "nomad.sqlite3", global = true)]
    pub db: String,

    /// Log level (trace, debug, info, warn, error)
    #[clap(long, env = "NOMAD_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install the database schema
    #[clap(name = "init")]
    Init,
    /// Manage users and find managers
    #[clap(subcommand)]
    Users(Users),
    /// Assign users to line managers
    #[clap(subcommand)]
    Managements(Managements),
    /// Manage supported places
    #[clap(subcommand)]
    Places(Places),
    /// Plan trips
    #[clap(subcommand)]
    Trips(Trips),
    /// Book accommodation rooms
    #[clap(subcommand)]
    Bookings(Bookings),
    /// Handle trip requests
    #[clap(subcommand)]
    Requests(Requests),
    /// Manage accommodations
    #[clap(subcommand)]
    Accommodations(Accommodations),
    /// Manage rooms
    #[clap(subcommand)]
    Rooms(Rooms),
}

impl Command {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Command::Init => schema::install(db).await,
            Command::Users(cmd) => cmd.run(db).await,
            Command::Managements(cmd) => cmd.run(db).await,
            Command::Places(cmd) => cmd.run(db).await,
            Command::Trips(cmd) => cmd.run(db).await,
            Command::Bookings(cmd) => cmd.run(db).await,
            Command::Requests(cmd) => cmd.run(db).await,
            Command::Accommodations(cmd) => cmd.run(db).await,
            Command::Rooms(cmd) => cmd.run(db).await,
        }
    }
}
