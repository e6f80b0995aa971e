pub mod path;
pub mod response;
pub mod socket;
pub mod suffix;
