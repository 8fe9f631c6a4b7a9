// Read-only context shared by every data item provider
use super::settings::DisplayConfig;
use super::units;

#[derive(Debug, Clone, Default)]
pub struct ProviderContext {
    pub config: DisplayConfig,
}

impl ProviderContext {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn format_number(&self, value: f64) -> String {
        units::format_number(value, self.config.precision)
    }

    pub fn convert_temperature(&self, celsius: f64) -> String {
        units::convert_temperature(celsius, self.config.units.temperature, self.config.precision)
    }

    pub fn convert_distance(&self, miles: f64) -> String {
        units::convert_distance(miles, self.config.units.distance, self.config.precision)
    }

    pub fn convert_speed(&self, miles: f64) -> String {
        units::convert_speed(miles, self.config.units.distance, self.config.precision)
    }

    pub fn convert_heading(&self, degrees: f64) -> &'static str {
        units::convert_heading(degrees)
    }
}
