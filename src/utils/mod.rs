mod time_utils;

pub use time_utils::{TimeUtils, epoch_sec_to_clock, parse_quote_timestamp};
