pub mod a101_trip;
pub mod a102_order;
pub mod a103_booking;
