//! Models of the v1 API.

mod downtime_recurrence;

pub use downtime_recurrence::DowntimeRecurrence;
