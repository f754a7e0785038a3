pub mod column_names;
pub mod parameter_mapping;
