//! Render quantities in units chosen by a TOML preferences file.
//!
//! Run with: cargo run --example display_preferences [path/to/physq.toml]

use physq::config::DisplayPreferences;
use physq::pressure::{Pressure, PressureUnit};
use physq::speed::{Speed, SpeedUnit};
use physq::temperature::{Temperature, TemperatureUnit};

const BUILTIN: &str = r#"
precision = 1

[units]
speed = "knots"
pressure = "psi"
temperature = "°F"
"#;

fn main() -> Result<(), physq::ConfigError> {
    let prefs = match std::env::args().nth(1) {
        Some(path) => DisplayPreferences::from_file(path)?,
        None => DisplayPreferences::from_toml_str(BUILTIN)?,
    };

    let wind = Speed::new(20.0, SpeedUnit::MetrePerSecond);
    let tyre = Pressure::new(2.2, PressureUnit::Bar);
    let air = Temperature::new(15.0, TemperatureUnit::Celsius);

    println!("wind: {}", prefs.format(&wind));
    println!("tyre: {}", prefs.format(&tyre));
    println!("air:  {}", prefs.format(&air));
    Ok(())
}
