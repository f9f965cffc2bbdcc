// src/view/card.rs
use crate::{
    config::consts::CARD_PLACEHOLDER_IMG,
    core::{
        Record,
        format::{format_mileage, format_price},
        record::field,
    },
};

const DETAILS_SEP: &str = " | ";

/// One summary card in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Position in the sequence this card was rendered from.
    pub index: usize,
    pub image_url: String,
    pub title: String,
    pub price: String,
    /// Year | mileage | transmission | fuel | exterior color, blanks skipped.
    pub details: String,
    pub description: String,
}

impl CardView {
    pub fn from_record(index: usize, record: &Record) -> Self {
        let image_url = record
            .present(field::IMAGE)
            .unwrap_or(CARD_PLACEHOLDER_IMG)
            .to_string();

        let mileage = record.present(field::MILEAGE).map(format_mileage);
        let details: Vec<String> = [
            record.present(field::YEAR).map(String::from),
            mileage,
            record.present(field::TRANSMISSION).map(String::from),
            record.present(field::FUEL_TYPE).map(String::from),
            record.present(field::EXTERIOR_COLOR).map(String::from),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            index,
            image_url,
            title: record.title(),
            price: format_price(record.get(field::PRICE)),
            details: details.join(DETAILS_SEP),
            description: s!(record.get(field::DESCRIPTION)),
        }
    }
}

/// Cards for a whole sequence, in order.
pub fn cards(records: &[Record]) -> Vec<CardView> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| CardView::from_record(i, r))
        .collect()
}
