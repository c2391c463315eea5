//! Display models for table/JSON output

use serde::Serialize;
use tabled::Tabled;

use super::formatters::short_date;
use crate::client::models::{Reservation, Room};

/// Room row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RoomDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "ROOM")]
    pub name: String,

    #[tabled(rename = "OWNER")]
    pub owner_id: i64,

    #[tabled(rename = "LISTED")]
    pub listed: String,
}

impl From<&Room> for RoomDisplay {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            owner_id: room.owner_id,
            listed: short_date(&room.created_at),
        }
    }
}

/// Reservation row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReservationDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "ROOM")]
    pub room: String,

    #[tabled(rename = "GUEST")]
    pub guest_name: String,

    #[tabled(rename = "EMAIL")]
    pub guest_email: String,

    #[tabled(rename = "FROM")]
    pub start_date: String,

    #[tabled(rename = "TO")]
    pub end_date: String,

    #[tabled(rename = "NIGHTS")]
    pub nights: i64,
}

impl From<&Reservation> for ReservationDisplay {
    fn from(r: &Reservation) -> Self {
        // Prefer the embedded room name when the listing carries one
        let room = r
            .room
            .as_ref()
            .map(|room| room.name.clone())
            .unwrap_or_else(|| format!("#{}", r.room_id));

        Self {
            id: r.id,
            room,
            guest_name: r.guest_name.clone(),
            guest_email: r.guest_email.clone(),
            start_date: r.start_date.to_string(),
            end_date: r.end_date.to_string(),
            nights: r.nights(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn room() -> Room {
        Room {
            id: 3,
            name: "Blue Room".to_string(),
            owner_id: 1,
            created_at: "2024-01-05T08:00:00".to_string(),
        }
    }

    fn reservation(room: Option<Room>) -> Reservation {
        Reservation {
            id: 9,
            room_id: 3,
            guest_name: "Ada".to_string(),
            guest_email: "ada@example.com".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            created_at: "2024-04-01T00:00:00".to_string(),
            room,
        }
    }

    #[test]
    fn test_room_display() {
        let display = RoomDisplay::from(&room());
        assert_eq!(display.name, "Blue Room");
        assert_eq!(display.listed, "2024-01-05");
    }

    #[test]
    fn test_reservation_display_uses_room_name() {
        let display = ReservationDisplay::from(&reservation(Some(room())));
        assert_eq!(display.room, "Blue Room");
        assert_eq!(display.start_date, "2024-05-01");
        assert_eq!(display.nights, 2);
    }

    #[test]
    fn test_reservation_display_falls_back_to_room_id() {
        let display = ReservationDisplay::from(&reservation(None));
        assert_eq!(display.room, "#3");
    }
}
