pub mod config;
pub mod extraction;
pub mod initialization;
pub mod logging;
pub mod manager_csv;
pub mod manager_kinesis;
pub mod manager_weather;
pub mod models;
pub mod worker;
