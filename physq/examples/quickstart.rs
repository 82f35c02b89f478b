//! Minimal end-to-end example: convert units, combine quantities, measure an angle.

use physq::angle::{Angle, AngleUnit};
use physq::length::{Length, LengthUnit, Position};
use physq::speed::{Speed, SpeedUnit};
use physq::time::{Time, TimeUnit};
use physq::Direction;

fn main() {
    let d = Length::new(1.0, LengthUnit::Mile);
    println!("1 mi = {:.3} ft", d.value_in(LengthUnit::Foot));

    let t = Time::new(4.0, TimeUnit::Minute);
    let v: Speed = d / t;
    println!("1 mi in 4 min = {:.2} km/hr", v.value_in(SpeedUnit::KilometrePerHour));

    let p: Position = Length::new(7.0, LengthUnit::Metre) * Direction::new(2.0, -3.0, 6.0);
    println!("position = {}", p);

    let a = Angle::between(p, Direction::Z);
    println!("angle to +z = {:.2} deg", a.value_in(AngleUnit::Degree));
}
