pub mod dashboard;
pub mod disciplines;
pub mod educators;
pub mod helpers;
pub mod rooms;
pub mod status;
pub mod students;
pub mod timetable;
