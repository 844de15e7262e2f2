use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use nomad_data::{Booking, Filter, Patch, Room, Update, STATUS_BOOKED};
use nomad_db::Connection;
use nomad_queries::{create, find_booking, find_room};

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Bookings {
    /// Book an available room
    #[clap(name = "add")]
    Add(AddBooking),
    /// Find the bookings of a user on a date
    #[clap(name = "find")]
    Find(FindBookings),
}

impl Bookings {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Bookings::Add(cmd) => cmd.run(db).await,
            Bookings::Find(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddBooking {
    #[clap(short, long)]
    pub user: i64,
    #[clap(short, long)]
    pub room: i64,
    #[clap(short, long)]
    pub date: NaiveDate,
    #[clap(short, long)]
    pub checkout: Option<NaiveDate>,
}

impl AddBooking {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let existing: Vec<Booking> = find_booking(db, self.date, self.user).await?;
        if !existing.is_empty() {
            return Err(anyhow!(
                "User {} already has a booking on {}.",
                self.user,
                self.date
            ));
        }

        let rooms: Vec<Room> = find_room(db, self.room).await?;
        let room = rooms
            .first()
            .ok_or_else(|| anyhow!("Room {} is not available.", self.room))?;

        let booking = Booking {
            user_id: self.user,
            accommodation_id: room.accommodation_id,
            room_id: room.id,
            travel_date: self.date,
            checkout_date: self.checkout,
            ..Default::default()
        };
        let booking = create(db, booking).await?;

        let patch = Patch::new().set("status", STATUS_BOOKED);
        let _: Vec<Room> = db.update(&patch, &Filter::eq("id", room.id)).await?;

        println!("Booking added with id {}.", booking.id);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct FindBookings {
    #[clap(short, long)]
    pub date: NaiveDate,
    #[clap(short, long)]
    pub user: i64,
}

impl FindBookings {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let bookings: Vec<Booking> = find_booking(db, self.date, self.user).await?;
        println!("{} bookings.", bookings.len());
        bookings.print_formatted();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nomad_data::STATUS_AVAILABLE;

    #[tokio::test]
    async fn test_add_booking() {
        let (_handle, db) = Connection::open_test().await;
        let room = create(
            &db,
            Room {
                accommodation_id: 4,
                status: STATUS_AVAILABLE.to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 12, 24).unwrap();

        AddBooking { user: 1, room: room.id, date, checkout: None }
            .run(&db)
            .await
            .unwrap();

        let bookings: Vec<Booking> = find_booking(&db, date, 1).await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].accommodation_id, 4);

        // The room is taken now
        let rooms: Vec<Room> = find_room(&db, room.id).await.unwrap();
        assert!(rooms.is_empty());

        // Booking again on the same date fails
        let result = AddBooking { user: 1, room: room.id, date, checkout: None }
            .run(&db)
            .await;
        assert!(result.is_err());
    }
}
