//! Classification and comparison helpers for JSON values and slices.

mod arrays;
mod predicates;

pub use arrays::{array_intersection, is_array_equal, to_indexed_map};
pub use predicates::{
    is_array, is_float, is_int, is_json, is_json_str, is_number, is_object, is_string,
    undefined_or_null,
};
