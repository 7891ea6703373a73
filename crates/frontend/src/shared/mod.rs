pub mod api_utils;
pub mod dom;
pub mod fetch_error;
pub mod int_parse;
pub mod list_utils;
pub mod number_format;
