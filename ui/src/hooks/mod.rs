pub mod use_error_list;
pub mod use_transient_flag;
