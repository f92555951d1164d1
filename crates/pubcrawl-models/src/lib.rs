pub mod pub_list;
pub mod pub_record;
pub mod timestamp;
pub mod unique_key;

pub use pub_list::PubList;
pub use pub_record::Pub;
pub use timestamp::{format_create_ts, parse_create_ts, CreateTsError, CREATE_TS_FORMAT};
pub use unique_key::UniqueKey;
