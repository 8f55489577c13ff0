use serde::Deserialize;

/// Current conditions for one place, as reported by the provider.
///
/// Field names follow the OpenWeatherMap current-weather payload; anything
/// the bot does not use is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherReport {
    #[serde(rename = "name")]
    pub place_name: String,
    #[serde(rename = "sys")]
    pub country: Country,
    #[serde(rename = "coord")]
    pub coordinates: Coordinates,
    #[serde(rename = "weather")]
    pub conditions: Vec<Condition>,
    pub wind: Wind,
    pub main: Measurements,
}

impl WeatherReport {
    pub fn country_code(&self) -> &str {
        &self.country.code
    }

    /// The condition shown to users. Providers may list several; only the
    /// first one counts.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.conditions.first()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    #[serde(rename = "country")]
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    #[serde(rename = "main")]
    pub main_category: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Wind {
    #[serde(rename = "speed")]
    pub speed_meters_per_second: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Measurements {
    #[serde(rename = "temp")]
    pub temperature_kelvin: f64,
    #[serde(rename = "pressure")]
    pub pressure_hpa: f64,
    #[serde(rename = "humidity")]
    pub humidity_percent: f64,
}
