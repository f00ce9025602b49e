use serde::{Deserialize, Serialize};

/// Identifier of an on-board unit (OBU), the telemetry-emitting device
/// mounted in a vehicle. Opaque; used as the sole partition key everywhere.
pub type ObuId = u32;

/// Fixed tariff in monetary units per distance unit.
pub const BASE_PRICE: f64 = 315.0;

/// A raw position fix as reported by an OBU, before the distance stage
/// has turned it into a travelled-distance increment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObuData {
    #[serde(rename = "obuID")]
    pub obu_id: ObuId,
    pub lat: f64,
    pub long: f64,
}

/// One travelled-distance increment for a vehicle, produced from a pair of
/// consecutive position fixes. Immutable once created; the sign of `value`
/// is not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceEvent {
    #[serde(rename = "obuID")]
    pub obu_id: ObuId,
    pub value: f64,
    pub unix: i64,
}

/// Billing document derived from a vehicle's running distance total.
/// Computed fresh on every request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "obuID")]
    pub obu_id: ObuId,
    #[serde(rename = "totalDistance")]
    pub total_distance: f64,
    pub amount: f64,
}
