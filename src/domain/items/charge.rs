//! Charging rows.
//!
//! `power-connected` reflects the plug state of the current snapshot only.
//! The other charge rows follow a [`ChargeSession`] that is built up across
//! consecutive snapshots: a session starts on the transition into
//! `Charging`, accumulates energy, distance and peak power while charging,
//! and is kept as a completed session until the cable is disconnected.

use chrono::NaiveDateTime;

use super::{zmdi, DataItemProvider, ItemId, ProviderRegistry};
use crate::domain::context::ProviderContext;
use crate::domain::error::DashboardError;
use crate::domain::row::ItemState;
use crate::domain::snapshot::TelemetrySnapshot;

pub const CHARGING: &str = "Charging";
pub const DISCONNECTED: &str = "Disconnected";

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(ItemId::PowerConnected, || Box::new(PowerConnected));
    registry.register(ItemId::ChargeTime, || Box::new(ChargeTime::default()));
    registry.register(ItemId::ChargeAdded, || Box::new(ChargeAdded::default()));
    registry.register(ItemId::ChargePower, || Box::new(ChargePower::default()));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Active,
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChargeSession {
    phase: SessionPhase,
    started_at: Option<NaiveDateTime>,
    ended_at: Option<NaiveDateTime>,
    energy_added_kwh: f64,
    distance_added_miles: f64,
    peak_power_kw: f64,
}

fn reading(snapshot: &TelemetrySnapshot, key: &'static str) -> Option<f64> {
    snapshot.number(key).ok().filter(|v| v.is_finite())
}

impl ChargeSession {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn energy_added_kwh(&self) -> f64 {
        self.energy_added_kwh
    }

    pub fn distance_added_miles(&self) -> f64 {
        self.distance_added_miles
    }

    pub fn peak_power_kw(&self) -> f64 {
        self.peak_power_kw
    }

    /// Length of a completed session, when both ends were timestamped
    pub fn duration(&self) -> Option<chrono::Duration> {
        if self.phase != SessionPhase::Completed {
            return None;
        }
        Some(self.ended_at? - self.started_at?)
    }

    /// Advance the session with the next snapshot
    pub fn observe(&mut self, snapshot: &TelemetrySnapshot) {
        let charging_state = snapshot.text("charging_state").ok();
        let at = snapshot.timestamp("Date").ok();

        match charging_state.as_deref() {
            None | Some(DISCONNECTED) => *self = Self::default(),
            Some(CHARGING) => {
                if self.phase != SessionPhase::Active {
                    tracing::debug!("Charge session started at {:?}", at);
                    *self = Self {
                        phase: SessionPhase::Active,
                        started_at: at,
                        ..Self::default()
                    };
                }
                self.accumulate(snapshot);
            }
            Some(_) => match self.phase {
                SessionPhase::Active => {
                    self.accumulate(snapshot);
                    self.phase = SessionPhase::Completed;
                    self.ended_at = at;
                    tracing::debug!(
                        "Charge session completed, {} kWh added",
                        self.energy_added_kwh
                    );
                }
                // Connected but finished before we saw it charging
                SessionPhase::Idle => {
                    if reading(snapshot, "charge_energy_added").is_some_and(|kwh| kwh > 0.0) {
                        self.phase = SessionPhase::Completed;
                        self.accumulate(snapshot);
                    }
                }
                SessionPhase::Completed => {}
            },
        }
    }

    fn accumulate(&mut self, snapshot: &TelemetrySnapshot) {
        if let Some(kwh) = reading(snapshot, "charge_energy_added") {
            self.energy_added_kwh = self.energy_added_kwh.max(kwh);
        }
        if let Some(miles) = reading(snapshot, "charge_miles_added_rated") {
            self.distance_added_miles = self.distance_added_miles.max(miles);
        }
        if let Some(kw) = reading(snapshot, "charger_power") {
            self.peak_power_kw = self.peak_power_kw.max(kw);
        }
    }
}

// A feed clock that steps backwards shows as zero rather than a negative time
fn format_minutes(total_minutes: i64) -> String {
    let total_minutes = total_minutes.max(0);
    format!("{}h {:02}m", total_minutes / 60, total_minutes % 60)
}

pub struct PowerConnected;

impl DataItemProvider for PowerConnected {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        _ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        let charging_state = snapshot.text("charging_state")?;
        if charging_state == DISCONNECTED {
            return Ok(ItemState::hidden());
        }
        Ok(ItemState::shown(zmdi("input-power"), "Connected", charging_state))
    }
}

#[derive(Default)]
pub struct ChargeTime {
    session: ChargeSession,
}

impl DataItemProvider for ChargeTime {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        _ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        self.session.observe(snapshot);

        let state = match self.session.phase() {
            SessionPhase::Active => {
                let hours = snapshot.number("time_to_full_charge")?;
                let minutes = (hours * 60.0).round();
                if !minutes.is_finite() {
                    return Err(DashboardError::MissingSnapshotField("time_to_full_charge"));
                }
                ItemState::shown(
                    zmdi("time-countdown"),
                    "Time to full",
                    format_minutes(minutes as i64),
                )
            }
            SessionPhase::Completed => match self.session.duration() {
                Some(duration) => ItemState::shown(
                    zmdi("time"),
                    "Charge time",
                    format_minutes(duration.num_minutes()),
                ),
                None => ItemState::hidden(),
            },
            SessionPhase::Idle => ItemState::hidden(),
        };
        Ok(state)
    }
}

#[derive(Default)]
pub struct ChargeAdded {
    session: ChargeSession,
}

impl DataItemProvider for ChargeAdded {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        self.session.observe(snapshot);
        if self.session.phase() == SessionPhase::Idle {
            return Ok(ItemState::hidden());
        }

        let mut value = format!("{} kWh", ctx.format_number(self.session.energy_added_kwh()));
        if self.session.distance_added_miles() > 0.0 {
            value.push_str(&format!(
                " (+{})",
                ctx.convert_distance(self.session.distance_added_miles())
            ));
        }
        Ok(ItemState::shown(zmdi("flash"), "Charge added", value))
    }
}

#[derive(Default)]
pub struct ChargePower {
    session: ChargeSession,
}

impl DataItemProvider for ChargePower {
    fn derive(
        &mut self,
        snapshot: &TelemetrySnapshot,
        ctx: &ProviderContext,
    ) -> Result<ItemState, DashboardError> {
        self.session.observe(snapshot);

        let state = match self.session.phase() {
            SessionPhase::Active => {
                let kw = snapshot.number("charger_power")?;
                let mut value = format!("{} kW", ctx.format_number(kw));
                if let (Some(volts), Some(amps)) = (
                    reading(snapshot, "charger_voltage"),
                    reading(snapshot, "charger_actual_current"),
                ) {
                    value.push_str(&format!(" ({}V / {}A)", volts.round(), amps.round()));
                }
                ItemState::shown(zmdi("flash-auto"), "Charge power", value)
            }
            SessionPhase::Completed if self.session.peak_power_kw() > 0.0 => ItemState::shown(
                zmdi("flash-auto"),
                "Peak power",
                format!("{} kW", ctx.format_number(self.session.peak_power_kw())),
            ),
            _ => ItemState::hidden(),
        };
        Ok(state)
    }
}
