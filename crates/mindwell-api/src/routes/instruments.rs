use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use mindwell_screening::scoring::{Item, ResponseOption, response_options};
use mindwell_screening::{Instrument, SeverityBand, all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    item_count: usize,
    max_total: u32,
}

#[derive(Serialize)]
pub struct BandSummary {
    lower: u32,
    upper: u32,
    band: SeverityBand,
    label: &'static str,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    max_total: u32,
    items: Vec<Item>,
    response_options: Vec<ResponseOption>,
    severity_bands: Vec<BandSummary>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            item_count: i.item_count(),
            max_total: i.max_total(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    let severity_bands = instrument
        .severity_bands()
        .iter()
        .map(|b| BandSummary {
            lower: b.lower,
            upper: b.upper,
            band: b.band,
            label: b.band.label(),
        })
        .collect();

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        max_total: instrument.max_total(),
        items: instrument.items().to_vec(),
        response_options: response_options(),
        severity_bands,
    }))
}
