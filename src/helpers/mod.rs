pub mod converters;
pub mod random;
pub mod time;
