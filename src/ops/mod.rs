pub mod dev_time;
