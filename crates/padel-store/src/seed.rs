//! Demo fixture: the club's three courts and a handful of reservations.
//!
//! Used by the `clubday` demo and by tests that want a realistic snapshot
//! (one paid booking, one pending, one completed with history, and one
//! maintenance block).

use chrono::NaiveDate;

use padel_core::{Court, CourtId, Reservation, ReservationId, ReservationStatus, TimeOfDay};

pub fn demo_courts() -> Vec<Court> {
    vec![
        Court {
            id:             CourtId::new("c1"),
            name:           "Cancha 1".into(),
            description:    "Exterior - Césped sintético profesional".into(),
            price_per_hour: 16_000,
            indoor:         false,
            has_lights:     true,
        },
        Court {
            id:             CourtId::new("c2"),
            name:           "Cancha 2".into(),
            description:    "Interior - Blindex y superficie rápida".into(),
            price_per_hour: 18_500,
            indoor:         true,
            has_lights:     true,
        },
        Court {
            id:             CourtId::new("c3"),
            name:           "Cancha 3".into(),
            description:    "Exterior - Ideal para torneos nocturnos".into(),
            price_per_hour: 15_000,
            indoor:         false,
            has_lights:     true,
        },
    ]
}

pub fn demo_reservations() -> Vec<Reservation> {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("valid date");
    let at = |y, m, day, h, min| d(y, m, day).and_hms_opt(h, min, 0).expect("valid time");

    vec![
        Reservation {
            id: ReservationId::new("r1"),
            court_id: CourtId::new("c1"),
            court_name: "Cancha 1".into(),
            date: d(2025, 5, 5),
            start: TimeOfDay::hm(18, 0),
            end: TimeOfDay::hm(19, 30),
            duration_minutes: 90,
            players: vec![
                "Dante Torres".into(),
                "Juan Pérez".into(),
                "Leo Gómez".into(),
                "Mati Ruiz".into(),
            ],
            contact_name: "Dante Torres".into(),
            contact_email: "dante@example.com".into(),
            notes: Some("Traigo invitados".into()),
            total_price: 24_000,
            deposit: 7_200,
            deposit_paid: true,
            status: ReservationStatus::Confirmed,
            reminders_sent: false,
            created_at: at(2025, 4, 28, 10, 0),
            updated_at: None,
            fixed_turn: false,
        },
        Reservation {
            id: ReservationId::new("r2"),
            court_id: CourtId::new("c2"),
            court_name: "Cancha 2".into(),
            date: d(2025, 5, 5),
            start: TimeOfDay::hm(20, 0),
            end: TimeOfDay::hm(21, 0),
            duration_minutes: 60,
            players: vec![
                "Laura Medina".into(),
                "Sol Aguirre".into(),
                "Vicky López".into(),
                "Pao Díaz".into(),
            ],
            contact_name: "Laura Medina".into(),
            contact_email: "laura@example.com".into(),
            notes: Some("Seña pendiente hasta mañana".into()),
            total_price: 18_500,
            deposit: 5_550,
            deposit_paid: false,
            status: ReservationStatus::Pending,
            reminders_sent: false,
            created_at: at(2025, 4, 27, 18, 30),
            updated_at: None,
            fixed_turn: false,
        },
        Reservation {
            id: ReservationId::new("r3"),
            court_id: CourtId::new("c2"),
            court_name: "Cancha 2".into(),
            date: d(2025, 5, 4),
            start: TimeOfDay::hm(9, 0),
            end: TimeOfDay::hm(10, 30),
            duration_minutes: 90,
            players: vec!["Club Torneos".into()],
            contact_name: "Coordinación Liga".into(),
            contact_email: "liga@example.com".into(),
            notes: None,
            total_price: 27_750,
            deposit: 8_325,
            deposit_paid: true,
            status: ReservationStatus::Completed,
            reminders_sent: true,
            created_at: at(2025, 4, 20, 9, 0),
            updated_at: Some(at(2025, 5, 4, 13, 30)),
            fixed_turn: false,
        },
        Reservation {
            id: ReservationId::new("r4"),
            court_id: CourtId::new("c3"),
            court_name: "Cancha 3".into(),
            date: d(2025, 5, 6),
            start: TimeOfDay::hm(12, 0),
            end: TimeOfDay::hm(14, 0),
            duration_minutes: 120,
            players: Vec::new(),
            contact_name: "Administración".into(),
            contact_email: "info@clubpadel.com".into(),
            notes: Some("Mantenimiento de la cancha".into()),
            total_price: 0,
            deposit: 0,
            deposit_paid: true,
            status: ReservationStatus::Blocked,
            reminders_sent: false,
            created_at: at(2025, 4, 25, 8, 0),
            updated_at: None,
            fixed_turn: false,
        },
    ]
}
