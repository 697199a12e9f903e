// Shell library - exposes all core modules for testing

pub mod achievements;
pub mod app;
pub mod boot;
pub mod commands;
pub mod dispatch;
pub mod history;
pub mod i18n;
pub mod input;
pub mod prefs;
pub mod services;
pub mod stream;
pub mod view;
