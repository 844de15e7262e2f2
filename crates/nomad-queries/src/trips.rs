use anyhow::Result;
use chrono::NaiveDate;

use nomad_data::{Filter, Places, Query, Record, Retrieve};

use crate::fields::{ID, TRAVEL_DATE, USER_ID};

/// Find the bookings of a user on a travel date
pub async fn find_booking<T, DB>(db: &DB, travel_date: NaiveDate, user_id: i64) -> Result<Vec<T>>
where
    T: Record,
    DB: Query<T>,
{
    tracing::debug!(table = T::TABLE, %travel_date, user_id, "find booking");
    let filter = Filter::eq(TRAVEL_DATE, travel_date).and(Filter::eq(USER_ID, user_id));
    db.query(&filter).await
}

/// Find all trips of a user
pub async fn find_trip<T, DB>(db: &DB, user_id: i64) -> Result<Vec<T>>
where
    T: Record,
    DB: Query<T>,
{
    tracing::debug!(table = T::TABLE, user_id, "find trip");
    db.query(&Filter::eq(USER_ID, user_id)).await
}

/// Find the management assignments of a user
pub async fn find_user_management<T, DB>(db: &DB, user_id: i64) -> Result<Vec<T>>
where
    T: Record,
    DB: Query<T>,
{
    tracing::debug!(table = T::TABLE, user_id, "find user management");
    db.query(&Filter::eq(USER_ID, user_id)).await
}

/// Look up the origin and destination of a route.
/// A missing place does not affect the other one.
pub async fn find_place<T, DB>(db: &DB, origin_id: i64, destination_id: i64) -> Result<Places<T>>
where
    T: Record,
    DB: Retrieve<T>,
{
    tracing::debug!(table = T::TABLE, origin_id, destination_id, "find place");
    let origin = Filter::eq(ID, origin_id);
    let destination = Filter::eq(ID, destination_id);
    let (origin, destination) = tokio::try_join!(
        <DB as Retrieve<T>>::retrieve(db, &origin),
        <DB as Retrieve<T>>::retrieve(db, &destination),
    )?;
    Ok(Places {
        origin,
        destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create, testing::BrokenTable};

    use nomad_data::{Booking, MemoryTable, Place, Trip, UserManagement};
    use nomad_db::Connection;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(user_id: i64, travel_date: NaiveDate) -> Booking {
        Booking {
            user_id,
            accommodation_id: 1,
            room_id: 1,
            travel_date,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_find_booking() {
        let (_handle, db) = Connection::open_test().await;
        create(&db, booking(1, date(2023, 8, 1))).await.unwrap();
        create(&db, booking(1, date(2023, 8, 2))).await.unwrap();
        create(&db, booking(2, date(2023, 8, 1))).await.unwrap();
        create(&db, booking(1, date(2023, 8, 1))).await.unwrap();

        let found: Vec<Booking> = find_booking(&db, date(2023, 8, 1), 1).await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found
            .iter()
            .all(|b| b.user_id == 1 && b.travel_date == date(2023, 8, 1)));

        let found: Vec<Booking> = find_booking(&db, date(2023, 9, 1), 1).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_find_booking_on_trips_in_memory() {
        let db = MemoryTable::new();
        let trip = Trip {
            user_id: 3,
            travel_date: date(2024, 1, 10),
            ..Default::default()
        };
        create(&db, trip.clone()).await.unwrap();
        create(&db, Trip { user_id: 4, ..trip }).await.unwrap();

        let found: Vec<Trip> = find_booking(&db, date(2024, 1, 10), 3).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].user_id, 3);
    }

    #[tokio::test]
    async fn test_find_booking_propagates_errors() {
        let result: Result<Vec<Booking>> = find_booking(&BrokenTable, date(2023, 1, 1), 1).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_find_trip() {
        let (_handle, db) = Connection::open_test().await;
        for user_id in [1, 2, 1] {
            create(
                &db,
                Trip {
                    user_id,
                    origin_id: 1,
                    destination_id: 2,
                    travel_date: date(2023, 2, 2),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }
        let trips: Vec<Trip> = find_trip(&db, 1).await.unwrap();
        assert_eq!(trips.len(), 2);
        let trips: Vec<Trip> = find_trip(&db, 5).await.unwrap();
        assert!(trips.is_empty());
    }

    #[tokio::test]
    async fn test_find_user_management() {
        let db = MemoryTable::new();
        create(&db, UserManagement { user_id: 7, manager_id: 1, ..Default::default() })
            .await
            .unwrap();
        create(&db, UserManagement { user_id: 8, manager_id: 1, ..Default::default() })
            .await
            .unwrap();

        let found: Vec<UserManagement> = find_user_management(&db, 7).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].manager_id, 1);
    }

    #[tokio::test]
    async fn test_find_place() {
        let (_handle, db) = Connection::open_test().await;
        let kigali = create(&db, Place { name: "Kigali".into(), ..Default::default() })
            .await
            .unwrap();
        let lagos = create(&db, Place { name: "Lagos".into(), ..Default::default() })
            .await
            .unwrap();

        let places: Places<Place> = find_place(&db, kigali.id, lagos.id).await.unwrap();
        assert!(places.is_complete());
        assert_eq!(places.origin.unwrap().name, "Kigali");
        assert_eq!(places.destination.unwrap().name, "Lagos");
    }

    #[tokio::test]
    async fn test_find_place_missing_one() {
        let db = MemoryTable::new();
        let kigali = create(&db, Place { name: "Kigali".into(), ..Default::default() })
            .await
            .unwrap();

        let places: Places<Place> = find_place(&db, kigali.id, 99).await.unwrap();
        assert_eq!(places.origin.map(|p| p.name), Some("Kigali".to_string()));
        assert!(places.destination.is_none());

        let places: Places<Place> = find_place(&db, 99, kigali.id).await.unwrap();
        assert!(places.origin.is_none());
        assert!(places.destination.is_some());
    }

    #[tokio::test]
    async fn test_find_place_store_error() {
        let result: Result<Places<Place>> = find_place(&BrokenTable, 1, 2).await;
        assert!(result.is_err());
    }
}
