//! Delivery time label from distance.

/// Assumed average speed used to turn kilometres into travel time.
const KM_PER_HOUR: u32 = 20;

/// `"{h}h {m}min"` when at least one hour, otherwise `"{m} minutos"`.
///
/// Minutes are always rendered in the hour form, `0min` included.
pub fn estimate_time(distance_km: u32) -> String {
    let hours = distance_km / KM_PER_HOUR;
    let remainder = f64::from(distance_km % KM_PER_HOUR);
    let minutes = ((remainder / f64::from(KM_PER_HOUR)) * 60.0).floor() as u32;

    if hours > 0 {
        format!("{hours}h {minutes}min")
    } else {
        format!("{minutes} minutos")
    }
}
