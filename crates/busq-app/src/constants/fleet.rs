//! Physical buses serving the corridor

use std::sync::LazyLock;

use busq_domain::model::PhysicalBusSchedule;
use busq_types::BusType;
use chrono::NaiveTime;

/// (bus id, type, departure hour, departure minute, plate)
const FLEET_DEFINITION: &[(&str, BusType, u32, u32, &str)] = &[
    ("TRAD-001", BusType::Traditional, 2, 45, "BUS-MTC-0245"),
    ("TRAD-002", BusType::Traditional, 3, 20, "BUS-MTC-0320"),
    ("TRAD-003", BusType::Traditional, 4, 0, "BUS-MTC-0400"),
    ("TRAD-004", BusType::Traditional, 5, 30, "BUS-MTC-0530"),
    ("AC-001", BusType::Airconditioned, 8, 0, "BUS-MTC-0800-AC"),
    ("TRAD-005", BusType::Traditional, 11, 30, "BUS-MTC-1130"),
    ("TRAD-006", BusType::Traditional, 12, 0, "BUS-MTC-1200"),
    ("TRAD-007", BusType::Traditional, 13, 0, "BUS-MTC-1300"),
];

/// Canonical fleet, in departure order
pub static FLEET: LazyLock<Vec<PhysicalBusSchedule>> = LazyLock::new(|| {
    FLEET_DEFINITION
        .iter()
        .map(|&(id, bus_type, hour, minute, plate)| {
            let departure = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
            PhysicalBusSchedule::new(id, bus_type, departure, plate)
        })
        .collect()
});

/// Look up a built-in bus by id
pub fn get_bus(bus_id: &str) -> Option<&'static PhysicalBusSchedule> {
    FLEET.iter().find(|bus| bus.bus_id.eq_ignore_ascii_case(bus_id))
}
