// Unit conversion - formats raw feed values for display
use super::settings::{DistanceUnit, MAX_PRECISION, TemperatureUnit};

const KM_PER_MILE: f64 = 1.60934;

const BEARINGS: [(f64, &str); 9] = [
    (0.0, "North"),
    (45.0, "North East"),
    (90.0, "East"),
    (135.0, "South East"),
    (180.0, "South"),
    (225.0, "South West"),
    (270.0, "West"),
    (315.0, "North West"),
    (360.0, "North"),
];

/// Round to `precision` decimal places (half away from zero).
/// `NaN` is passed through and printed as `NaN`.
pub fn format_number(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", precision, rounded)
}

pub fn convert_temperature(celsius: f64, unit: TemperatureUnit, precision: usize) -> String {
    match unit {
        TemperatureUnit::F => {
            let fahrenheit = celsius * (9.0 / 5.0) + 32.0;
            format!("{}°F", format_number(fahrenheit, precision))
        }
        TemperatureUnit::C => format!("{}°C", format_number(celsius, precision)),
    }
}

pub fn convert_distance(miles: f64, unit: DistanceUnit, precision: usize) -> String {
    match unit {
        DistanceUnit::Km => format!("{} km", format_number(miles * KM_PER_MILE, precision)),
        DistanceUnit::Miles => format!("{} miles", format_number(miles, precision)),
    }
}

pub fn convert_speed(miles: f64, unit: DistanceUnit, precision: usize) -> String {
    match unit {
        DistanceUnit::Km => format!("{} km/h", format_number(miles * KM_PER_MILE, precision)),
        DistanceUnit::Miles => format!("{} mph", format_number(miles, precision)),
    }
}

/// Nearest compass label in 45 degree steps.
/// Bearings are scanned in ascending order and only a strictly closer one
/// replaces the current pick, so an exact tie resolves to the lower bearing.
pub fn convert_heading(degrees: f64) -> &'static str {
    let mut best = BEARINGS[0];
    for candidate in &BEARINGS[1..] {
        if (candidate.0 - degrees).abs() < (best.0 - degrees).abs() {
            best = *candidate;
        }
    }
    best.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0, 1), "12.0");
        assert_eq!(format_number(12.25, 0), "12");
        assert_eq!(format_number(0.25, 1), "0.3");
        assert_eq!(format_number(3.14159, 3), "3.142");
        assert_eq!(format_number(f64::NAN, 1), "NaN");
    }

    #[test]
    fn test_convert_temperature() {
        assert_eq!(convert_temperature(0.0, TemperatureUnit::F, 1), "32.0°F");
        assert_eq!(convert_temperature(100.0, TemperatureUnit::C, 1), "100.0°C");
        assert_eq!(convert_temperature(21.5, TemperatureUnit::C, 0), "22°C");
    }

    #[test]
    fn test_convert_distance() {
        assert_eq!(convert_distance(10.0, DistanceUnit::Km, 1), "16.1 km");
        assert_eq!(convert_distance(10.0, DistanceUnit::Miles, 1), "10.0 miles");
    }

    #[test]
    fn test_convert_speed() {
        assert_eq!(convert_speed(60.0, DistanceUnit::Km, 0), "97 km/h");
        assert_eq!(convert_speed(60.0, DistanceUnit::Miles, 1), "60.0 mph");
    }

    #[test]
    fn test_convert_heading_nearest() {
        assert_eq!(convert_heading(0.0), "North");
        assert_eq!(convert_heading(10.0), "North");
        assert_eq!(convert_heading(100.0), "East");
        assert_eq!(convert_heading(200.0), "South");
        assert_eq!(convert_heading(350.0), "North");
    }

    #[test]
    fn test_convert_heading_ties_pick_lower_bearing() {
        assert_eq!(convert_heading(22.5), "North");
        assert_eq!(convert_heading(67.5), "North East");
        assert_eq!(convert_heading(337.5), "North West");
    }

    #[test]
    fn test_convert_heading_always_canonical() {
        let labels: Vec<&str> = BEARINGS.iter().map(|b| b.1).collect();
        for tenth in 0..=3600 {
            let heading = tenth as f64 / 10.0;
            assert!(labels.contains(&convert_heading(heading)));
        }
    }

    #[test]
    fn test_format_number_extreme_precision() {
        let formatted = format_number(1.5, 400);
        assert!(formatted.starts_with("1."), "{}", formatted);
        assert_eq!(formatted.len(), 2 + MAX_PRECISION);
    }
}
