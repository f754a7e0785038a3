pub mod builder;
pub mod normalize;
mod station_key;
pub mod table;
