pub mod error;
pub mod i18n;
pub mod traffic;
pub mod util;

pub use error::FormatError;
pub use i18n::{Catalog, Key, Translate};
pub use traffic::TrafficType;
pub use util::clock::{Clock, FixedClock, SystemClock};
pub use util::time::{Relative, RelativeTimeFormatter, TimeDifference};
