pub mod konami;
