mod app_state;
mod console;
