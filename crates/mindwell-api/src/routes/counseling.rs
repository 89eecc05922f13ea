use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use jiff::Zoned;

use mindwell_support::counseling::{
    Booking, BookingRequest, Counselor, TIME_SLOTS, book, counselors, find_counselor,
};

use crate::error::ApiError;

pub async fn list_counselors() -> Json<Vec<Counselor>> {
    Json(counselors().to_vec())
}

pub async fn get_counselor(Path(id): Path<String>) -> Result<Json<Counselor>, ApiError> {
    Ok(Json(find_counselor(&id)?.clone()))
}

pub async fn list_slots() -> Json<Vec<&'static str>> {
    Json(TIME_SLOTS.to_vec())
}

/// Check a booking and return its confirmation. Nothing is reserved.
pub async fn create_booking(
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let Json(request) = payload?;
    let booking = book(&request, Zoned::now().date())?;
    Ok((StatusCode::CREATED, Json(booking)))
}
