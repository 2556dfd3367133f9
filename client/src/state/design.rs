//! Outfit selection for the design generator.
//!
//! Dress types depend on both gender and occasion. Changing either resets
//! the dress type, and a new trend lookup clears the previous trend and
//! image.

#[cfg(test)]
#[path = "design_test.rs"]
mod design_test;

use crate::net::types::{ImageRequest, TrendsRequest};

pub const GENDERS: [&str; 2] = ["male", "female"];
pub const OCCASIONS: [&str; 5] = ["Eid ul Fitr", "Eid ul Adha", "Wedding", "Mehndi", "Valima"];
pub const REGIONS: [&str; 3] = ["Pakistan", "India", "Bangladesh"];

pub const INCOMPLETE_SELECTION: &str = "Please complete all fields before getting trends.";
pub const NO_TREND_SELECTED: &str = "Please select a fashion trend.";

/// Dress types offered for `gender` at `occasion`; empty for unknown pairs.
pub fn dress_types(gender: &str, occasion: &str) -> &'static [&'static str] {
    match (gender, occasion) {
        ("male", "Eid ul Fitr" | "Eid ul Adha" | "Mehndi") => &["Shalwar Kameez", "Kurta Shalwar"],
        ("male", "Wedding") => &["Sherwani", "Shalwar Kameez", "Kurta Shalwar"],
        ("male", "Valima") => &["Sherwani", "Waistcoat with Shalwar Kameez", "Kurta Shalwar"],
        ("female", "Eid ul Fitr") => &["Shalwar Kameez", "Sharara"],
        ("female", "Eid ul Adha") => &["Shalwar Kameez", "Gharara", "Sharara"],
        ("female", "Wedding") => &["Lehenga Choli", "Saree"],
        ("female", "Mehndi") => &["Lehenga", "Gharara"],
        ("female", "Valima") => &["Sharara Suit", "Shalwar Kameez"],
        _ => &[],
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesignSelection {
    pub gender: String,
    pub occasion: String,
    pub dress_type: String,
    pub region: String,
}

impl DesignSelection {
    pub fn set_gender(&mut self, gender: &str) {
        if self.gender != gender {
            self.gender = gender.to_owned();
            self.dress_type.clear();
        }
    }

    pub fn set_occasion(&mut self, occasion: &str) {
        if self.occasion != occasion {
            self.occasion = occasion.to_owned();
            self.dress_type.clear();
        }
    }

    pub fn available_dresses(&self) -> &'static [&'static str] {
        dress_types(&self.gender, &self.occasion)
    }

    /// Build the trend lookup, or the message to show when a field is missing.
    ///
    /// # Errors
    ///
    /// Returns [`INCOMPLETE_SELECTION`] when any field is empty.
    pub fn trends_request(&self) -> Result<TrendsRequest, &'static str> {
        let fields = [&self.gender, &self.occasion, &self.dress_type, &self.region];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(INCOMPLETE_SELECTION);
        }
        Ok(TrendsRequest {
            gender: self.gender.clone(),
            dress_type: self.dress_type.clone(),
            occasion: self.occasion.clone(),
            region: self.region.clone(),
        })
    }

    /// Build the image request for the chosen trend.
    ///
    /// # Errors
    ///
    /// Returns [`NO_TREND_SELECTED`] when `trend` is blank.
    pub fn image_request(&self, trend: &str) -> Result<ImageRequest, &'static str> {
        if trend.trim().is_empty() {
            return Err(NO_TREND_SELECTED);
        }
        Ok(ImageRequest {
            dress_type: self.dress_type.clone(),
            trend_description: trend.to_owned(),
            gender: self.gender.clone(),
            occasion: self.occasion.clone(),
        })
    }
}
