//! Distance-based fares per drop-off stop

use std::sync::LazyLock;

use busq_domain::model::{FareStop, FareTable};
use busq_types::{BusType, Direction};

/// Canonical fare table, rising with distance from the origin and below the
/// full-route base price. Final destinations carry no entry and are charged
/// the leg's base price.
pub static FARE_TABLE: LazyLock<FareTable> = LazyLock::new(|| {
    FareTable::new()
        .with_route(
            Direction::MantalongonToCebu,
            vec![
                FareStop::new("Dalaguete", 40.0, 50.0),
                FareStop::new("Argao", 60.0, 75.0),
                FareStop::new("Sibonga", 85.0, 100.0),
                FareStop::new("Carcar City", 100.0, 120.0),
                FareStop::new("San Fernando", 120.0, 140.0),
                FareStop::new("Naga City", 140.0, 160.0),
                FareStop::new("Minglanilla", 155.0, 175.0),
                FareStop::new("Talisay City", 165.0, 185.0),
                FareStop::unpriced("Cebu City"),
            ],
        )
        .with_route(
            Direction::CebuToMantalongon,
            vec![
                FareStop::new("Talisay City", 25.0, 30.0),
                FareStop::new("Minglanilla", 35.0, 45.0),
                FareStop::new("Naga City", 50.0, 60.0),
                FareStop::new("San Fernando", 65.0, 75.0),
                FareStop::new("Carcar City", 85.0, 100.0),
                FareStop::new("Sibonga", 100.0, 120.0),
                FareStop::new("Argao", 125.0, 145.0),
                FareStop::new("Dalaguete", 150.0, 170.0),
                FareStop::unpriced("Mantalongon"),
            ],
        )
});
