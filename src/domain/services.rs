/// Crops with a known baseline yield in tonnes per hectare.
const BASE_YIELDS: &[(&str, f64)] = &[
    ("Sugarcane", 70.0),
    ("Ragi", 2.5),
    ("Rice", 4.5),
    ("Cotton", 2.0),
    ("Groundnut", 2.8),
];

const DEFAULT_BASE_YIELD: f64 = 3.0;

pub fn base_yield(crop_type: &str) -> f64 {
    BASE_YIELDS
        .iter()
        .find(|(crop, _)| *crop == crop_type)
        .map(|(_, base)| *base)
        .unwrap_or(DEFAULT_BASE_YIELD)
}

/// Rough yield estimate (t/ha) from average temperature (°C) and soil moisture (%).
/// Rounded to two decimals.
pub fn estimate_yield(crop_type: &str, avg_temperature: f64, avg_soil_moisture: f64) -> f64 {
    let temp_factor = if avg_temperature > 25.0 { 0.9 } else { 1.0 };
    let moisture_factor = if avg_soil_moisture < 30.0 {
        0.85
    } else if avg_soil_moisture > 50.0 {
        1.1
    } else {
        1.0
    };

    let estimate = base_yield(crop_type) * temp_factor * moisture_factor;
    (estimate * 100.0).round() / 100.0
}
