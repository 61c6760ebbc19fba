pub mod ergast;
pub mod error;
pub mod response;
