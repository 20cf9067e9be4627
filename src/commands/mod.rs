pub mod add;
pub mod done;
pub mod edit;
pub mod export;
pub mod import;
pub mod remove;
pub mod show;
