// Location name and static map, suppressed inside excluded areas
use super::{zmdi, DataItemProvider, ItemId, ProviderRegistry};
use crate::domain::context::ProviderContext;
use crate::domain::error::DashboardError;
use crate::domain::row::ItemState;
use crate::domain::settings::{DisplayConfig, ExcludedLocation};
use crate::domain::snapshot::TelemetrySnapshot;

const EARTH_RADIUS_METRES: f64 = 6_371_000.0;
const STATIC_MAP_BASE: &str = "https://maps.googleapis.com/maps/api/staticmap";

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(ItemId::Location, || Box::new(Location));
    registry.register(ItemId::Map, || Box::new(Map));
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Non-finite coordinates count as missing
    fn from_snapshot(snapshot: &TelemetrySnapshot) -> Result<Self, DashboardError> {
        let lat = snapshot.number("latitude")?;
        if !lat.is_finite() {
            return Err(DashboardError::MissingSnapshotField("latitude"));
        }
        let lon = snapshot.number("longitude")?;
        if !lon.is_finite() {
            return Err(DashboardError::MissingSnapshotField("longitude"));
        }
        Ok(Self { lat, lon })
    }

    /// Great-circle distance in metres
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_lat = lat2 - lat1;
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METRES * a.sqrt().asin()
    }

    pub fn is_within(&self, area: &ExcludedLocation) -> bool {
        let centre = Coordinates {
            lat: area.lat,
            lon: area.lon,
        };
        self.distance_to(&centre) <= area.radius
    }
}

fn is_excluded(coords: &Coordinates, config: &DisplayConfig) -> bool {
    config.exclude_locations.iter().any(|area| coords.is_within(area))
}

/// Static map URL centred on the car, with a home marker when configured
pub fn static_map_url(coords: &Coordinates, config: &DisplayConfig) -> String {
    let position = format!("{},{}", coords.lat, coords.lon);
    let mut url = format!(
        "{}?center={}&zoom={}&size={}x{}&markers={}&key={}",
        STATIC_MAP_BASE,
        position,
        config.map_zoom,
        config.map_width,
        config.map_height,
        urlencoding::encode(&format!("color:red|{}", position)),
        urlencoding::encode(&config.google_map_api_key),
    );

    if !config.home_address.is_empty() {
        url.push_str("&markers=");
        url.push_str(&urlencoding::encode(&format!(
            "label:H|{}",
            config.home_address
        )));
    }

    url
}

pub struct Location;

impl DataItemProvider for Location {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        let coords = Coordinates::from_snapshot(snapshot)?;
        if is_excluded(&coords, &ctx.config) {
            return Ok(ItemState::hidden());
        }

        let value = snapshot.text("location").unwrap_or_else(|_| {
            format!("{:.4}, {:.4}", coords.lat, coords.lon)
        });
        Ok(ItemState::shown(zmdi("pin"), "Location", value))
    }
}

pub struct Map;

impl DataItemProvider for Map {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        if ctx.config.google_map_api_key.is_empty() {
            return Ok(ItemState::hidden());
        }

        let coords = Coordinates::from_snapshot(snapshot)?;
        if is_excluded(&coords, &ctx.config) {
            return Ok(ItemState::hidden());
        }

        let img = format!(
            r#"<img class="map" src="{}" width="{}" height="{}" alt="Vehicle location">"#,
            static_map_url(&coords, &ctx.config),
            ctx.config.map_width,
            ctx.config.map_height
        );
        Ok(ItemState::icon_only(img))
    }
}
