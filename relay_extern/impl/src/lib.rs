pub mod dns;
pub mod http;
pub mod ip_echo;
pub mod telegram;
