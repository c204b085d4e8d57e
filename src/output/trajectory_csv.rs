use super::output_errors::OutputError;
use crate::config::CentralBody;
use crate::models::Trajectory;
use hifitime::{Duration, Epoch};
use serde::Serialize;
use std::io;

/// One exported trajectory row, in display units (km).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryRecord {
    #[serde(rename = "UTC Time")]
    pub utc_time: String,
    #[serde(rename = "Time (s)")]
    pub time: f64,
    #[serde(rename = "Position X (km)")]
    pub x_km: f64,
    #[serde(rename = "Position Y (km)")]
    pub y_km: f64,
    #[serde(rename = "Radius (km)")]
    pub radius_km: f64,
    #[serde(rename = "Altitude (km)")]
    pub altitude_km: f64,
}

impl TrajectoryRecord {
    pub fn new(
        time: f64,
        position: &nalgebra::Vector2<f64>,
        body: &CentralBody,
        start: Epoch,
    ) -> Self {
        let radius = position.magnitude();
        Self {
            utc_time: (start + Duration::from_seconds(time)).to_string(),
            time,
            x_km: position.x / 1000.0,
            y_km: position.y / 1000.0,
            radius_km: radius / 1000.0,
            altitude_km: (radius - body.radius) / 1000.0,
        }
    }
}

/// Writes every sample of `trajectory` as a CSV row with a header line.
pub fn write_trajectory<W: io::Write>(
    writer: W,
    trajectory: &Trajectory,
    body: &CentralBody,
    start: Epoch,
) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_writer(writer);
    for (time, position) in trajectory.iter() {
        writer.serialize(TrajectoryRecord::new(time, position, body, start))?;
    }
    writer.flush()?;
    Ok(())
}
