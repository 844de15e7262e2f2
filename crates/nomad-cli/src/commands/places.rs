use anyhow::Result;
use clap::{Args, Subcommand};

use nomad_data::{Place, Places as Route};
use nomad_db::Connection;
use nomad_queries::{create, find_place};

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Places {
    /// Add a supported place
    #[clap(name = "add")]
    Add(AddPlace),
    /// Show origin and destination of a route
    #[clap(name = "route")]
    Route(ShowRoute),
}

impl Places {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Places::Add(cmd) => cmd.run(db).await,
            Places::Route(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddPlace {
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long, default_value = "")]
    pub country: String,
}

impl AddPlace {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let place = Place {
            name: self.name,
            country: self.country,
            ..Default::default()
        };
        let place = create(db, place).await?;
        place.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ShowRoute {
    #[clap(short, long)]
    pub from: i64,
    #[clap(short, long)]
    pub to: i64,
}

impl ShowRoute {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let route: Route<Place> = find_place(db, self.from, self.to).await?;
        route.print_formatted();
        Ok(())
    }
}
