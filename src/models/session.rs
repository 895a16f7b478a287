use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub movie_id: i64,
    pub hall_id: i64,
    pub time: String,
    pub seats_booked: Vec<BookingRecord>,
}

/// Бронь одного места внутри сеанса. Уникальность в `seats_booked`
/// соблюдается по `seat_number`, а не по паре целиком.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub seat_number: i32,
    pub username: String,
}

impl Session {
    pub fn new(id: i64, movie_id: i64, hall_id: i64, time: &str) -> Self {
        Self {
            id,
            movie_id,
            hall_id,
            time: time.to_string(),
            seats_booked: Vec::new(),
        }
    }

    // Занято ли место - независимо от того, кто его держит
    pub fn seat_taken(&self, seat_number: i32) -> bool {
        self.seats_booked.iter().any(|b| b.seat_number == seat_number)
    }

    // Позиция брони по точной паре (место, пользователь)
    pub fn find_booking(&self, seat_number: i32, username: &str) -> Option<usize> {
        self.seats_booked
            .iter()
            .position(|b| b.seat_number == seat_number && b.username == username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seat: i32, user: &str) -> BookingRecord {
        BookingRecord {
            seat_number: seat,
            username: user.to_string(),
        }
    }

    #[test]
    fn seat_taken_ignores_username() {
        let mut session = Session::new(1, 1, 1, "18:00");
        session.seats_booked.push(record(5, "alice"));

        assert!(session.seat_taken(5));
        assert!(!session.seat_taken(6));
    }

    #[test]
    fn find_booking_requires_exact_pair() {
        let mut session = Session::new(1, 1, 1, "18:00");
        session.seats_booked.push(record(5, "alice"));

        assert_eq!(session.find_booking(5, "alice"), Some(0));
        assert_eq!(session.find_booking(5, "bob"), None);
        assert_eq!(session.find_booking(6, "alice"), None);
    }
}
