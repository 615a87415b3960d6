//! Domain models for rooms, holidays, visitors, appointments, and access
//! records.

pub mod access;
pub mod appointment;
pub mod holiday;
pub mod room;
pub mod visitor;

pub use access::AccessRecord;
pub use appointment::{Appointment, AppointmentStatus};
pub use holiday::{Holiday, HolidayKind};
pub use room::{CapacityVariation, Room, TimeWindow, WeeklySchedule};
pub use visitor::Visitor;
