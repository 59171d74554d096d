use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Routing key for the per-floor order queues.
pub type FloorId = u32;

/// Delivery destination inside the office complex.
///
/// The floor is the routing key for both the inbound and outbound queues; the full
/// address names the receipt written for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub building_id: u32,
    pub floor_id: FloorId,
    pub unit_id: u32,
}

impl Address {
    pub fn new(building_id: u32, floor_id: FloorId, unit_id: u32) -> Self {
        Self {
            building_id,
            floor_id,
            unit_id,
        }
    }

    /// Name of the receipt document published for an order to this address.
    pub fn receipt_name(&self) -> String {
        format!("{}.json", self)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.building_id, self.floor_id, self.unit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_name_derived_from_address() {
        let address = Address::new(2, 3, 14);
        assert_eq!(address.to_string(), "2-3-14");
        assert_eq!(address.receipt_name(), "2-3-14.json");
    }
}
