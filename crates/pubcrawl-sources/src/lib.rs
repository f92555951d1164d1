pub mod decode;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod http;
pub mod traits;

pub use decode::{decode, decode_pub_list};
pub use error::{DecodeError, SourceError};
pub use factory::SourceFactory;
pub use fixture::FixturePubSource;
pub use http::HttpPubSource;
pub use traits::{fetch_pubs, PubSource};
