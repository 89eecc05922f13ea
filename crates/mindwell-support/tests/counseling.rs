use jiff::civil::{Date, date};

use mindwell_support::counseling::{
    BookingRequest, SessionType, TIME_SLOTS, book, counselors, find_counselor, is_open_day,
};
use mindwell_support::error::SupportError;
use mindwell_support::language::Language;

// A Saturday.
const TODAY: Date = date(2026, 10, 17);

fn request(counselor: &str, day: Date, slot: &str) -> BookingRequest {
    BookingRequest {
        counselor_id: Some(counselor.to_string()),
        date: Some(day),
        slot: Some(slot.to_string()),
        session_type: SessionType::Video,
    }
}

#[test]
fn directory_lists_four_counselors() {
    let all = counselors();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].name, "Dr. Priya Sharma");
    assert!(all[0].languages.contains(&Language::Ur));
    assert_eq!(find_counselor("3").unwrap().title, "Trauma Specialist");
    assert_eq!(
        find_counselor("9"),
        Err(SupportError::CounselorNotFound("9".to_string()))
    );
}

#[test]
fn prices_follow_session_type() {
    let priya = find_counselor("1").unwrap();
    assert_eq!(priya.price(SessionType::Video), Some(1500));
    assert_eq!(priya.price(SessionType::Chat), Some(1000));

    let rajesh = find_counselor("4").unwrap();
    assert!(rajesh.offers(SessionType::Video));
    assert!(!rajesh.offers(SessionType::Chat));
}

#[test]
fn books_a_valid_request() {
    let booking = book(&request("2", date(2026, 10, 19), "10:00 AM"), TODAY).unwrap();

    assert_eq!(booking.counselor_name, "Dr. Arjun Mehta");
    assert_eq!(booking.date, date(2026, 10, 19));
    assert_eq!(booking.slot, "10:00 AM");
    assert_eq!(booking.session_type, SessionType::Video);
    assert_eq!(booking.price_inr, 1200);
}

#[test]
fn today_is_bookable() {
    assert!(book(&request("1", TODAY, "09:00 AM"), TODAY).is_ok());
}

#[test]
fn missing_fields_are_reported() {
    let mut req = request("1", TODAY, "09:00 AM");
    req.counselor_id = None;
    assert_eq!(book(&req, TODAY), Err(SupportError::MissingField("counselor")));

    let mut req = request("1", TODAY, "09:00 AM");
    req.date = None;
    assert_eq!(book(&req, TODAY), Err(SupportError::MissingField("date")));

    let mut req = request("1", TODAY, "09:00 AM");
    req.slot = Some(" ".to_string());
    assert_eq!(book(&req, TODAY), Err(SupportError::MissingField("time slot")));
}

#[test]
fn past_days_and_sundays_are_closed() {
    let yesterday = date(2026, 10, 16);
    let sunday = date(2026, 10, 18);

    assert!(!is_open_day(yesterday, TODAY));
    assert!(!is_open_day(sunday, TODAY));
    assert!(is_open_day(date(2026, 10, 19), TODAY));

    assert_eq!(
        book(&request("1", sunday, "09:00 AM"), TODAY),
        Err(SupportError::DateUnavailable(sunday))
    );
    assert_eq!(
        book(&request("1", yesterday, "09:00 AM"), TODAY),
        Err(SupportError::DateUnavailable(yesterday))
    );
}

#[test]
fn slot_must_come_from_the_table() {
    assert_eq!(TIME_SLOTS.len(), 10);
    assert!(!TIME_SLOTS.contains(&"01:00 PM"));
    assert_eq!(
        book(&request("1", TODAY, "01:00 PM"), TODAY),
        Err(SupportError::UnknownSlot("01:00 PM".to_string()))
    );
}

#[test]
fn session_type_must_be_offered() {
    let mut req = request("4", date(2026, 10, 19), "03:00 PM");
    req.session_type = SessionType::Chat;

    let err = book(&req, TODAY).unwrap_err();
    assert_eq!(
        err,
        SupportError::SessionTypeUnavailable {
            counselor: "Dr. Rajesh Kumar".to_string(),
            session_type: SessionType::Chat,
        }
    );
    assert_eq!(err.to_string(), "Dr. Rajesh Kumar does not offer chat sessions");
}

#[test]
fn unknown_counselor_is_not_found() {
    assert_eq!(
        book(&request("42", TODAY, "09:00 AM"), TODAY),
        Err(SupportError::CounselorNotFound("42".to_string()))
    );
}
