//! Everything the bot says.

use weather_core::WeatherReport;

pub const START: &str = "Hello there !\n\
    I am Weather Bot. I can display the weather conditions of a particular city.\n\
    I was made with the help of Rust.";

pub const HELP: &str = "Here is how I work !\n\
    \n\
    /weather <city name>\n\
    \n\
    Examples:\n\
    /weather Mumbai\n\
    /weather New York";

pub const EMPTY_PLACE: &str =
    "Enter the name of the place whose weather conditions you want. Ex: /weather Mumbai";

pub const NOT_FOUND: &str = "Oops! This is embarrassing :(\nI couldn't find the place.";

pub const UNAVAILABLE: &str =
    "The weather service is temporarily unavailable. Please try again in a moment.";

pub const NOT_UNDERSTOOD: &str = "I don't understand the command. Sorry :(";

/// Render a report for chat, numbers exactly as reported. `None` when the
/// report carries no condition.
pub fn weather_report(report: &WeatherReport) -> Option<String> {
    let condition = report.primary_condition()?;

    Some(format!(
        "{place}, {country}\n\
         \n\
         Co-ordinates\n\
         Latitude: {lat}\n\
         Longitude: {lon}\n\
         \n\
         Weather\n\
         Main: {main}\n\
         Description: {description}\n\
         Temperature: {temp} K\n\
         Humidity: {humidity} %\n\
         Wind Speed: {wind} m/s",
        place = report.place_name,
        country = report.country_code(),
        lat = report.coordinates.latitude,
        lon = report.coordinates.longitude,
        main = condition.main_category,
        description = condition.description,
        temp = report.main.temperature_kelvin,
        humidity = report.main.humidity_percent,
        wind = report.wind.speed_meters_per_second,
    ))
}
