//! Domain services

pub mod fare;
pub mod payment;
pub mod schedule;
pub mod seat_map;
pub mod status;

pub use fare::{calculate_fare, is_on_route, regular_fare, round_currency};
pub use payment::settle_payment;
pub use schedule::{generate_schedule, ScheduleSettings};
pub use seat_map::{generate_seat_layout, validate_selection};
pub use status::{classify, is_bookable, leg_status, BusStatus};
