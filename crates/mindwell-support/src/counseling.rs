//! Counselor directory and session booking.
//!
//! `book` checks a booking request against the directory and the calendar
//! rules and returns a confirmation. Confirmations are not recorded anywhere.

use std::sync::LazyLock;

use jiff::Timestamp;
use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::SupportError;
use crate::language::Language;

/// Bookable start times, same every open day.
pub const TIME_SLOTS: [&str; 10] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "03:00 PM", "04:00 PM",
    "05:00 PM", "06:00 PM", "07:00 PM",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionType {
    #[default]
    Video,
    Chat,
}

impl SessionType {
    pub fn label(self) -> &'static str {
        match self {
            SessionType::Video => "video",
            SessionType::Chat => "chat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionOffer {
    pub session_type: SessionType,
    /// Fee in Indian rupees.
    pub price_inr: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Counselor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specializations: Vec<String>,
    pub languages: Vec<Language>,
    pub rating: f64,
    pub experience_years: u8,
    /// Weekdays the counselor usually works, for display.
    pub availability: Vec<String>,
    pub bio: String,
    pub sessions: Vec<SessionOffer>,
}

impl Counselor {
    pub fn price(&self, session_type: SessionType) -> Option<u32> {
        self.sessions
            .iter()
            .find(|o| o.session_type == session_type)
            .map(|o| o.price_inr)
    }

    pub fn offers(&self, session_type: SessionType) -> bool {
        self.price(session_type).is_some()
    }
}

struct Entry {
    id: &'static str,
    name: &'static str,
    title: &'static str,
    specializations: &'static [&'static str],
    languages: &'static [Language],
    rating: f64,
    experience_years: u8,
    availability: &'static [&'static str],
    bio: &'static str,
    video_price: u32,
    chat_price: Option<u32>,
}

const ENTRIES: [Entry; 4] = [
    Entry {
        id: "1",
        name: "Dr. Priya Sharma",
        title: "Clinical Psychologist",
        specializations: &["Anxiety Disorders", "Depression", "Academic Stress", "PTSD"],
        languages: &[Language::En, Language::Hi, Language::Ur],
        rating: 4.9,
        experience_years: 8,
        availability: &["Mon", "Tue", "Wed", "Thu", "Fri"],
        bio: "Specialized in working with students from J&K region, understanding cultural contexts and trauma-informed care.",
        video_price: 1500,
        chat_price: Some(1000),
    },
    Entry {
        id: "2",
        name: "Dr. Arjun Mehta",
        title: "Counseling Psychologist",
        specializations: &["Student Counseling", "Career Guidance", "Stress Management"],
        languages: &[Language::En, Language::Hi],
        rating: 4.8,
        experience_years: 6,
        availability: &["Mon", "Wed", "Fri", "Sat"],
        bio: "Focuses on academic and career-related stress, helping students navigate educational challenges.",
        video_price: 1200,
        chat_price: Some(800),
    },
    Entry {
        id: "3",
        name: "Dr. Fatima Khan",
        title: "Trauma Specialist",
        specializations: &["PTSD", "Trauma Recovery", "Cultural Therapy", "Family Counseling"],
        languages: &[Language::En, Language::Ur, Language::Hi],
        rating: 4.9,
        experience_years: 10,
        availability: &["Tue", "Thu", "Sat", "Sun"],
        bio: "Expert in trauma-informed care with deep understanding of J&K cultural context and community healing.",
        video_price: 1800,
        chat_price: Some(1200),
    },
    Entry {
        id: "4",
        name: "Dr. Rajesh Kumar",
        title: "Psychiatric Counselor",
        specializations: &["Mood Disorders", "Anxiety", "Sleep Disorders", "Medication Management"],
        languages: &[Language::En, Language::Hi],
        rating: 4.7,
        experience_years: 12,
        availability: &["Mon", "Tue", "Thu", "Fri"],
        bio: "Combines therapy with psychiatric expertise, offering comprehensive mental health care.",
        video_price: 2000,
        chat_price: None,
    },
];

static DIRECTORY: LazyLock<Vec<Counselor>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|e| {
            let mut sessions = vec![SessionOffer {
                session_type: SessionType::Video,
                price_inr: e.video_price,
            }];
            if let Some(price_inr) = e.chat_price {
                sessions.push(SessionOffer {
                    session_type: SessionType::Chat,
                    price_inr,
                });
            }

            Counselor {
                id: e.id.to_string(),
                name: e.name.to_string(),
                title: e.title.to_string(),
                specializations: e.specializations.iter().map(|s| s.to_string()).collect(),
                languages: e.languages.to_vec(),
                rating: e.rating,
                experience_years: e.experience_years,
                availability: e.availability.iter().map(|d| d.to_string()).collect(),
                bio: e.bio.to_string(),
                sessions,
            }
        })
        .collect()
});

pub fn counselors() -> &'static [Counselor] {
    &DIRECTORY
}

pub fn find_counselor(id: &str) -> Result<&'static Counselor, SupportError> {
    counselors()
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| SupportError::CounselorNotFound(id.to_string()))
}

/// Sessions run every day except Sunday, and never in the past.
pub fn is_open_day(date: Date, today: Date) -> bool {
    date >= today && date.weekday() != Weekday::Sunday
}

/// What the booking form sends. Every field but the session type may be
/// left unset by the form; `book` reports the first one missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingRequest {
    pub counselor_id: Option<String>,
    pub date: Option<Date>,
    pub slot: Option<String>,
    #[serde(default)]
    pub session_type: SessionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Booking {
    pub id: Uuid,
    pub counselor_id: String,
    pub counselor_name: String,
    pub date: Date,
    pub slot: String,
    pub session_type: SessionType,
    pub price_inr: u32,
    pub created_at: Timestamp,
}

/// Validate a booking request against the directory, the slot table and the
/// calendar as seen on `today`.
pub fn book(request: &BookingRequest, today: Date) -> Result<Booking, SupportError> {
    let counselor_id = request
        .counselor_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(SupportError::MissingField("counselor"))?;
    let counselor = find_counselor(counselor_id)?;

    let date = request.date.ok_or(SupportError::MissingField("date"))?;
    if !is_open_day(date, today) {
        return Err(SupportError::DateUnavailable(date));
    }

    let slot = request
        .slot
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(SupportError::MissingField("time slot"))?;
    if !TIME_SLOTS.contains(&slot) {
        return Err(SupportError::UnknownSlot(slot.to_string()));
    }

    let price_inr = counselor.price(request.session_type).ok_or_else(|| {
        SupportError::SessionTypeUnavailable {
            counselor: counselor.name.clone(),
            session_type: request.session_type,
        }
    })?;

    debug!(
        counselor = %counselor.id,
        %date,
        slot,
        session_type = request.session_type.label(),
        "session booked"
    );

    Ok(Booking {
        id: Uuid::new_v4(),
        counselor_id: counselor.id.clone(),
        counselor_name: counselor.name.clone(),
        date,
        slot: slot.to_string(),
        session_type: request.session_type,
        price_inr,
        created_at: Timestamp::now(),
    })
}
