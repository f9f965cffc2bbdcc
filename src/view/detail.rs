// src/view/detail.rs
use crate::{
    config::consts::DETAIL_PLACEHOLDER_IMG,
    core::{
        Record,
        format::{format_mileage, format_price},
        record::field,
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the detail modal shows. Built once when the modal opens from a
/// clone of the record, so later refreshes never reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub price: String,
    /// Only columns with a value get a row.
    pub specs: Vec<SpecRow>,
    pub description: String,
    pub features: String,
    pub record: Record,
}

impl DetailView {
    pub fn from_record(record: &Record) -> Self {
        let specs = [
            ("Year", record.present(field::YEAR).map(String::from)),
            ("Mileage", record.present(field::MILEAGE).map(format_mileage)),
            ("Transmission", record.present(field::TRANSMISSION).map(String::from)),
            ("Fuel", record.present(field::FUEL_TYPE).map(String::from)),
            ("Interior", record.present(field::INTERIOR).map(String::from)),
            ("Color", record.present(field::EXTERIOR_COLOR).map(String::from)),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| SpecRow { label, value }))
        .collect();

        Self {
            title: record.title(),
            price: format_price(record.get(field::PRICE)),
            specs,
            description: s!(record.get(field::DESCRIPTION)),
            features: s!(record.get(field::FEATURES)),
            record: record.clone(),
        }
    }
}

/// Main image of the modal: first gallery image, else the placeholder.
pub fn main_image(images: &[String]) -> &str {
    images.first().map(String::as_str).unwrap_or(DETAIL_PLACEHOLDER_IMG)
}
