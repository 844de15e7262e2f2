use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use nomad_data::{Accommodation, Filter, Room, STATUS_AVAILABLE};
use nomad_db::Connection;
use nomad_queries::{create, find_accommodation, find_room};

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Accommodations {
    /// Add an accommodation
    #[clap(name = "add")]
    Add(AddAccommodation),
    /// Find accommodations
    #[clap(name = "find")]
    Find(FindAccommodations),
}

impl Accommodations {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Accommodations::Add(cmd) => cmd.run(db).await,
            Accommodations::Find(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddAccommodation {
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long)]
    pub place: i64,
    #[clap(short, long)]
    pub owner: i64,
}

impl AddAccommodation {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let accommodation = Accommodation {
            name: self.name,
            place_id: self.place,
            owner_id: self.owner,
            status: STATUS_AVAILABLE.to_string(),
            ..Default::default()
        };
        let accommodation = create(db, accommodation).await?;
        println!("Accommodation added with id {}.", accommodation.id);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct FindAccommodations {
    /// Filter as JSON, e.g. '{"where": {"field": "name", "value": "Serena"}}'
    #[clap(short, long = "where")]
    pub filter: Option<String>,
    #[clap(short, long)]
    pub place: Option<i64>,
}

impl FindAccommodations {
    /// Build the filter from the command line
    pub fn filter(&self) -> Result<Filter> {
        let mut filter = match &self.filter {
            Some(json) => serde_json::from_str(json)
                .map_err(|err| anyhow!("Invalid filter: {}", err))?,
            None => Filter::All,
        };
        if let Some(place) = self.place {
            filter = filter.and(Filter::eq("place_id", place));
        }
        Ok(filter)
    }

    pub async fn run(self, db: &Connection) -> Result<()> {
        let filter = self.filter()?;
        let accommodations: Vec<Accommodation> = find_accommodation(db, &filter).await?;
        println!("{} accommodations.", accommodations.len());
        accommodations.print_formatted();
        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Rooms {
    /// Add a room to an accommodation
    #[clap(name = "add")]
    Add(AddRoom),
    /// Show a room if it is available
    #[clap(name = "available")]
    Available(ShowAvailableRoom),
}

impl Rooms {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Rooms::Add(cmd) => cmd.run(db).await,
            Rooms::Available(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddRoom {
    #[clap(short, long)]
    pub accommodation: i64,
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long, default_value = "single")]
    pub kind: String,
    #[clap(short, long, default_value_t = 0.0)]
    pub price: f64,
}

impl AddRoom {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let room = Room {
            accommodation_id: self.accommodation,
            name: self.name,
            kind: self.kind,
            price: self.price,
            status: STATUS_AVAILABLE.to_string(),
            ..Default::default()
        };
        let room = create(db, room).await?;
        println!("Room added with id {}.", room.id);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ShowAvailableRoom {
    #[clap(short, long)]
    pub id: i64,
}

impl ShowAvailableRoom {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let rooms: Vec<Room> = find_room(db, self.id).await?;
        if rooms.is_empty() {
            println!("Room {} is not available.", self.id);
            return Ok(());
        }
        rooms.print_formatted();
        Ok(())
    }
}
