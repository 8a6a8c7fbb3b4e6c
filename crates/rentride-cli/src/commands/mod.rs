pub mod faq;
pub mod inbox;
pub mod init_config;
pub mod quote;
pub mod rewards;
pub mod run;
pub mod vehicles;
