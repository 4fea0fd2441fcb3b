mod actual_stop_row;
mod bus;
mod driver;
mod offering_summary_row;
mod route_row;
mod schedule_row;
mod stop;
mod stop_record_entry;
mod trip;
mod trip_stop_row;
mod weekly_schedule_row;

pub use actual_stop_row::ActualStopRow;
pub use bus::Bus;
pub use driver::Driver;
pub use offering_summary_row::OfferingSummaryRow;
pub use route_row::RouteRow;
pub use schedule_row::ScheduleRow;
pub use stop::Stop;
pub use stop_record_entry::StopRecordEntry;
pub use trip::Trip;
pub use trip_stop_row::TripStopRow;
pub use weekly_schedule_row::WeeklyScheduleRow;
