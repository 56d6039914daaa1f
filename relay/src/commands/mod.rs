pub mod serve;
pub mod telegram;
