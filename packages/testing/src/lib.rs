mod helpers;
mod mock_feed;

pub use helpers::*;
pub use mock_feed::*;
