pub mod daily_rate;

pub use daily_rate::DailyRate;
