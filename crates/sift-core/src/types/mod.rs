mod date;
mod decimal;
mod time;
mod timestamp;

pub use date::Date;
pub use decimal::Decimal;
pub use time::Time;
pub use timestamp::Timestamp;
