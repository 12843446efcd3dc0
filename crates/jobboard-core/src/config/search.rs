//! Search and autocomplete configuration.

use serde::{Deserialize, Serialize};

/// Reference data driving location autocomplete and type toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fixed city list offered as location suggestions.
    #[serde(default = "default_reference_cities")]
    pub reference_cities: Vec<String>,
    /// Employment types offered as filter toggles.
    #[serde(default = "default_employment_types")]
    pub employment_types: Vec<String>,
    /// Maximum number of suggestions shown at once (`0` = unlimited).
    #[serde(default)]
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            reference_cities: default_reference_cities(),
            employment_types: default_employment_types(),
            max_suggestions: 0,
        }
    }
}

/// Major Indian cities used for location autocomplete.
pub const MAJOR_INDIAN_CITIES: [&str; 30] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Surat",
    "Lucknow",
    "Kanpur",
    "Nagpur",
    "Indore",
    "Thane",
    "Bhopal",
    "Visakhapatnam",
    "Pimpri-Chinchwad",
    "Patna",
    "Vadodara",
    "Ghaziabad",
    "Ludhiana",
    "Agra",
    "Nashik",
    "Faridabad",
    "Meerut",
    "Rajkot",
    "Kalyan-Dombivli",
    "Vasai-Virar",
    "Varanasi",
];

/// Employment types offered on the job search page.
pub const SEARCH_EMPLOYMENT_TYPES: [&str; 5] =
    ["Full-time", "Part-time", "Temporary", "Remote", "Internship"];

fn default_reference_cities() -> Vec<String> {
    MAJOR_INDIAN_CITIES.iter().map(|c| c.to_string()).collect()
}

fn default_employment_types() -> Vec<String> {
    SEARCH_EMPLOYMENT_TYPES
        .iter()
        .map(|t| t.to_string())
        .collect()
}
