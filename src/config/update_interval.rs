use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

const US_PER_MS: f64 = 1_000.0;
const US_PER_SECOND: f64 = 1_000_000.0;
const US_PER_MINUTE: f64 = 60.0 * US_PER_SECOND;
const US_PER_HOUR: f64 = 60.0 * US_PER_MINUTE;
const US_PER_DAY: f64 = 24.0 * US_PER_HOUR;

/// Polling interval of the sensor, in whole minutes.
///
/// The runtime keeps the interval in an 8-bit minute counter, so anything
/// above `u8::MAX` minutes is rejected at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UpdateInterval(u8);

impl UpdateInterval {
    pub const fn from_minutes(minutes: u8) -> Self {
        UpdateInterval(minutes)
    }

    pub fn minutes(&self) -> u8 {
        self.0
    }

    fn from_micros(total_us: f64) -> Result<Self, String> {
        if !total_us.is_finite() {
            return Err("time period must be a finite number".into());
        }
        if total_us < 0.0 {
            return Err("Negative time periods are not allowed".into());
        }
        let total_us = total_us.round();
        if total_us % US_PER_MINUTE != 0.0 {
            return Err("Maximum precision is minutes".into());
        }
        let minutes = total_us / US_PER_MINUTE;
        if minutes > f64::from(u8::MAX) {
            return Err(format!(
                "update_interval must be at most {} minutes, got {}",
                u8::MAX,
                minutes
            ));
        }
        Ok(UpdateInterval(minutes as u8))
    }
}

impl fmt::Display for UpdateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.0)
    }
}

fn unit_in_micros(unit: &str) -> Option<f64> {
    match unit {
        "us" | "microseconds" => Some(1.0),
        "ms" | "milliseconds" => Some(US_PER_MS),
        "s" | "sec" | "seconds" => Some(US_PER_SECOND),
        "min" | "minutes" => Some(US_PER_MINUTE),
        "h" | "hours" => Some(US_PER_HOUR),
        "d" | "days" => Some(US_PER_DAY),
        _ => None,
    }
}

impl FromStr for UpdateInterval {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let split_at = value
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(value.len());
        let (number, unit) = value.split_at(split_at);
        let unit = unit.trim();

        let number = number
            .parse::<f64>()
            .map_err(|_| format!("Expected time period with unit, got '{value}'"))?;
        if unit.is_empty() {
            return Err(no_unit_hint(number));
        }
        let factor = unit_in_micros(unit)
            .ok_or_else(|| format!("Invalid time period unit '{unit}' in '{value}'"))?;

        Self::from_micros(number * factor)
    }
}

fn no_unit_hint(number: f64) -> String {
    format!("Don't know what '{number}' means as it has no time *unit*! Did you mean '{number}min'?")
}

/// Mapping form of a time period, e.g. `{hours: 1, minutes: 30}`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PeriodParts {
    #[serde(default)]
    days: f64,
    #[serde(default)]
    hours: f64,
    #[serde(default)]
    minutes: f64,
    #[serde(default)]
    seconds: f64,
    #[serde(default)]
    milliseconds: f64,
    #[serde(default)]
    microseconds: f64,
}

impl PeriodParts {
    fn total_micros(&self) -> f64 {
        self.days * US_PER_DAY
            + self.hours * US_PER_HOUR
            + self.minutes * US_PER_MINUTE
            + self.seconds * US_PER_SECOND
            + self.milliseconds * US_PER_MS
            + self.microseconds
    }
}

struct UpdateIntervalVisitor;

impl<'de> Visitor<'de> for UpdateIntervalVisitor {
    type Value = UpdateInterval;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a time period such as '5min' or a mapping of time units")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Err(E::custom(no_unit_hint(v as f64)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Err(E::custom(no_unit_hint(v as f64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Err(E::custom(no_unit_hint(v)))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let parts = PeriodParts::deserialize(de::value::MapAccessDeserializer::new(map))?;
        UpdateInterval::from_micros(parts.total_micros()).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for UpdateInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(UpdateIntervalVisitor)
    }
}
