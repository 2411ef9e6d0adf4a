pub mod calc_app;
pub mod console;
pub mod tasks_app;
