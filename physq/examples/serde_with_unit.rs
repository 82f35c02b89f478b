//! Compact versus unit-tagged serialization of quantities.
//!
//! Fields marked with `#[serde(with = "physq::serde_with_unit")]` serialize as `{ "value": …, "unit": … }` in the
//! standard unit and accept any unit spelling on input; other fields serialize as their bare standard-unit value.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() -> Result<(), serde_json::Error> {
    use physq::length::{Length, Position};
    use physq::speed::SpeedUnit;
    use physq::time::Time;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct Waypoint {
        #[serde(with = "physq::serde_with_unit")]
        altitude: Length,
        position: Position,
        #[serde(with = "physq::serde_with_unit")]
        dwell: Time,
        display_speed: SpeedUnit,
    }

    let input = r#"{
        "altitude": { "value": 3500, "unit": "ft" },
        "position": [1200.0, -40.5, 0.0],
        "dwell": { "value": 1.5, "unit": "min" },
        "display_speed": "knots"
    }"#;

    let waypoint: Waypoint = serde_json::from_str(input)?;
    println!("parsed:     {:?}", waypoint);
    println!("serialized: {}", serde_json::to_string_pretty(&waypoint)?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
