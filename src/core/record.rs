// src/core/record.rs
//
// One inventory listing: the CSV row zipped against the header line.
// Columns stay in header order; lookups are exact and case-sensitive.

/// Column names the viewer knows about. Anything else is carried but unused.
pub mod field {
    pub const MAKE: &str = "Make";
    pub const MODEL: &str = "Model";
    pub const PRICE: &str = "Price";
    pub const YEAR: &str = "Year";
    pub const MILEAGE: &str = "Mileage";
    pub const TRANSMISSION: &str = "Transmission";
    pub const FUEL_TYPE: &str = "Fuel type";
    pub const EXTERIOR_COLOR: &str = "Exterior Color";
    pub const INTERIOR: &str = "Interior";
    pub const DESCRIPTION: &str = "Description";
    pub const FEATURES: &str = "Features";
    pub const IMAGE: &str = "Image";
    pub const GALLERY: &str = "Gallery";
}

const GALLERY_SEP: char = ';';

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value for `column`, or `""` when the column is absent.
    /// Duplicate headers: the rightmost column wins.
    pub fn get(&self, column: &str) -> &str {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// `Some(value)` only when the column exists and is non-empty.
    pub fn present(&self, column: &str) -> Option<&str> {
        Some(self.get(column)).filter(|v| !v.is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    /// "Make Model" with absent parts dropped.
    pub fn title(&self) -> String {
        let make = self.get(field::MAKE);
        let model = self.get(field::MODEL);
        join!(make, " ", model).trim().to_string()
    }

    /// Primary image (if any) followed by the `;`-separated Gallery list.
    pub fn image_urls(&self) -> Vec<String> {
        let mut urls = Vec::new();
        if let Some(primary) = self.present(field::IMAGE) {
            urls.push(s!(primary));
        }
        urls.extend(
            self.get(field::GALLERY)
                .split(GALLERY_SEP)
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(String::from),
        );
        urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(pairs: &[(&str, &str)]) -> Record {
        Record::new(pairs.iter().map(|(k, v)| (s!(*k), s!(*v))).collect())
    }

    #[test]
    fn missing_column_reads_empty() {
        let r = rec(&[("Make", "Honda")]);
        assert_eq!(r.get("Model"), "");
        assert_eq!(r.present("Model"), None);
        assert_eq!(r.present("Make"), Some("Honda"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let r = rec(&[("Fuel type", "Diesel")]);
        assert_eq!(r.get("Fuel type"), "Diesel");
        assert_eq!(r.get("Fuel Type"), "");
    }

    #[test]
    fn duplicate_header_last_wins() {
        let r = rec(&[("Year", "2001"), ("Year", "2015")]);
        assert_eq!(r.get("Year"), "2015");
    }

    #[test]
    fn title_trims_missing_parts() {
        assert_eq!(rec(&[("Make", "Honda")]).title(), "Honda");
        assert_eq!(rec(&[("Model", "Civic")]).title(), "Civic");
        assert_eq!(rec(&[]).title(), "");
    }

    #[test]
    fn image_urls_primary_first_then_gallery() {
        let r = rec(&[("Image", "a.jpg"), ("Gallery", " b.jpg ;; c.jpg; ")]);
        assert_eq!(r.image_urls(), vec!["a.jpg", "b.jpg", "c.jpg"]);

        let no_primary = rec(&[("Gallery", "b.jpg")]);
        assert_eq!(no_primary.image_urls(), vec!["b.jpg"]);

        assert!(rec(&[]).image_urls().is_empty());
    }
}
