pub mod dns;
pub mod ip_echo;
pub mod telegram;
