mod boundary;
pub use self::boundary::*;

mod query_params_store;
pub use self::query_params_store::*;

mod request_path_formatter;
pub use self::request_path_formatter::*;
