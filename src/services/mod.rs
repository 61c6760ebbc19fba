pub mod ergast;
