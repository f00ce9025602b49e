use crate::domain::types::{ObuData, ObuId};
use std::collections::HashMap;

/// Turns consecutive position fixes into travelled-distance increments.
///
/// Keeps the last fix per OBU, so fixes from different vehicles never
/// contribute to each other's distance. The first fix for a vehicle yields
/// a zero increment. Distances are planar, not geodesic.
pub struct DistanceCalculator {
    last_fix: HashMap<ObuId, (f64, f64)>,
}

impl DistanceCalculator {
    pub fn new() -> Self {
        Self {
            last_fix: HashMap::new(),
        }
    }

    /// Returns the distance travelled between the previous fix of this
    /// vehicle and `data`, and remembers `data` as the new last fix.
    pub fn calculate(&mut self, data: ObuData) -> f64 {
        let distance = match self.last_fix.get(&data.obu_id) {
            Some(&(lat, long)) => planar_distance(lat, long, data.lat, data.long),
            None => 0.0,
        };
        self.last_fix.insert(data.obu_id, (data.lat, data.long));
        distance
    }
}

impl Default for DistanceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn planar_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}
