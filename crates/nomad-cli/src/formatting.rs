use chrono::NaiveDate;

use nomad_data::{
    Accommodation, Booking, Place, Places, Request, Room, Trip, User, UserManagement,
};

macro_rules! next_attr {
    ($old:ident, $new:ident, $attr:ident) => {
        if $old.$attr != $new.$attr {
            format!(" -> {}", $new.$attr)
        } else {
            "".to_string()
        }
    };
}

fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.to_string(),
        None => "None".to_string(),
    }
}

pub trait PrintFormatted {
    fn print_formatted(&self);
}

impl PrintFormatted for User {
    fn print_formatted(&self) {
        println!("ID:\t\t\t{}", self.id);
        println!("Name:\t\t\t{}", self.full_name());
        println!("Email:\t\t\t{}", self.email);
        println!("Role:\t\t\t{}", self.role);
    }
}

impl PrintFormatted for Vec<UserManagement> {
    fn print_formatted(&self) {
        println!("{:>4}\t{:>8}\t{:>8}", "ID", "User", "Manager");
        println!("{:-<40}", "-");
        for management in self {
            println!(
                "{:>4}\t{:>8}\t{:>8}",
                management.id, management.user_id, management.manager_id
            );
        }
    }
}

impl PrintFormatted for Place {
    fn print_formatted(&self) {
        println!("{:>4}\t{:<24}\t{:<24}", self.id, self.name, self.country);
    }
}

impl PrintFormatted for Places<Place> {
    fn print_formatted(&self) {
        match &self.origin {
            Some(place) => println!("From:\t\t\t{} ({})", place.name, place.country),
            None => println!("From:\t\t\tunknown place"),
        }
        match &self.destination {
            Some(place) => println!("To:\t\t\t{} ({})", place.name, place.country),
            None => println!("To:\t\t\tunknown place"),
        }
    }
}

impl PrintFormatted for Vec<Trip> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:>6}\t{:>6}\t{:>6}\t{:<12}\t{:<12}\t{:<10}\t{}",
            "ID", "User", "From", "To", "Travel", "Return", "Status", "Reason"
        );
        println!("{:-<120}", "-");
        for trip in self {
            println!(
                "{:>4}\t{:>6}\t{:>6}\t{:>6}\t{:<12}\t{:<12}\t{:<10}\t{}",
                trip.id,
                trip.user_id,
                trip.origin_id,
                trip.destination_id,
                trip.travel_date,
                format_date(trip.return_date),
                trip.status,
                trip.reason,
            );
        }
    }
}

impl PrintFormatted for Vec<Booking> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:>6}\t{:>14}\t{:>6}\t{:<12}\t{:<12}",
            "ID", "User", "Accommodation", "Room", "Check-in", "Check-out"
        );
        println!("{:-<100}", "-");
        for booking in self {
            println!(
                "{:>4}\t{:>6}\t{:>14}\t{:>6}\t{:<12}\t{:<12}",
                booking.id,
                booking.user_id,
                booking.accommodation_id,
                booking.room_id,
                booking.travel_date,
                format_date(booking.checkout_date),
            );
        }
    }
}

impl PrintFormatted for Request {
    fn print_formatted(&self) {
        println!("ID:\t\t\t{}", self.id);
        println!("Trip:\t\t\t{}", self.trip_id);
        println!("User:\t\t\t{}", self.user_id);
        println!("Manager:\t\t{}", self.manager_id);
        println!("Status:\t\t\t{}", self.status);
    }
}

impl PrintFormatted for (Request, Request) {
    fn print_formatted(&self) {
        let (old, new) = self;
        println!("ID:\t\t\t{}", old.id);
        println!("Trip:\t\t\t{}", old.trip_id);
        let next_manager = next_attr!(old, new, manager_id);
        println!("Manager:\t\t{}{}", old.manager_id, next_manager);
        let next_status = next_attr!(old, new, status);
        println!("Status:\t\t\t{}{}", old.status, next_status);
    }
}

impl PrintFormatted for Vec<Request> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:>6}\t{:>6}\t{:>8}\t{}",
            "ID", "Trip", "User", "Manager", "Status"
        );
        println!("{:-<60}", "-");
        for request in self {
            println!(
                "{:>4}\t{:>6}\t{:>6}\t{:>8}\t{}",
                request.id, request.trip_id, request.user_id, request.manager_id, request.status
            );
        }
    }
}

impl PrintFormatted for Vec<Accommodation> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<30}\t{:>6}\t{:>6}\t{}",
            "ID", "Name", "Place", "Owner", "Status"
        );
        println!("{:-<80}", "-");
        for accommodation in self {
            println!(
                "{:>4}\t{:<30}\t{:>6}\t{:>6}\t{}",
                accommodation.id,
                accommodation.name,
                accommodation.place_id,
                accommodation.owner_id,
                accommodation.status,
            );
        }
    }
}

impl PrintFormatted for Vec<Room> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:>14}\t{:<24}\t{:<10}\t{:>10}\t{}",
            "ID", "Accommodation", "Name", "Kind", "Price", "Status"
        );
        println!("{:-<100}", "-");
        for room in self {
            println!(
                "{:>4}\t{:>14}\t{:<24}\t{:<10}\t{:>10.2}\t{}",
                room.id, room.accommodation_id, room.name, room.kind, room.price, room.status
            );
        }
    }
}
