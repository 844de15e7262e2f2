use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use nomad_data::{Place, Places, Request, Trip, UserManagement, STATUS_PENDING};
use nomad_db::Connection;
use nomad_queries::{create, find_place, find_trip, find_user_management};

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Trips {
    /// Plan a trip and request approval
    #[clap(name = "add")]
    Add(AddTrip),
    /// List the trips of a user
    #[clap(name = "list")]
    List(ListTrips),
}

impl Trips {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Trips::Add(cmd) => cmd.run(db).await,
            Trips::List(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddTrip {
    #[clap(short, long)]
    pub user: i64,
    #[clap(short, long)]
    pub from: i64,
    #[clap(short, long)]
    pub to: i64,
    #[clap(short, long)]
    pub date: NaiveDate,
    #[clap(long)]
    pub return_date: Option<NaiveDate>,
    #[clap(short, long, default_value = "")]
    pub reason: String,
}

impl AddTrip {
    /// Run the command and file a trip. A request is sent to
    /// every line manager of the user.
    pub async fn run(self, db: &Connection) -> Result<()> {
        let route: Places<Place> = find_place(db, self.from, self.to).await?;
        if route.origin.is_none() {
            return Err(anyhow!("Unknown origin place {}.", self.from));
        }
        if route.destination.is_none() {
            return Err(anyhow!("Unknown destination place {}.", self.to));
        }

        let trip = Trip {
            user_id: self.user,
            origin_id: self.from,
            destination_id: self.to,
            travel_date: self.date,
            return_date: self.return_date,
            reason: self.reason,
            status: STATUS_PENDING.to_string(),
            ..Default::default()
        };
        let trip = create(db, trip).await?;
        println!("Trip added with id {}.", trip.id);

        let managements: Vec<UserManagement> = find_user_management(db, self.user).await?;
        for management in managements {
            let request = Request {
                trip_id: trip.id,
                user_id: trip.user_id,
                manager_id: management.manager_id,
                status: STATUS_PENDING.to_string(),
                ..Default::default()
            };
            let request = create(db, request).await?;
            println!(
                "Request {} sent to manager {}.",
                request.id, request.manager_id
            );
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListTrips {
    #[clap(short, long)]
    pub user: i64,
}

impl ListTrips {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let trips: Vec<Trip> = find_trip(db, self.user).await?;
        println!("{} trips.", trips.len());
        trips.print_formatted();
        Ok(())
    }
}
