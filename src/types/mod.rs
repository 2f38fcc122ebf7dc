pub mod date_window;
pub mod lat_lon;
pub mod measurement;
