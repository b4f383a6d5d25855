//! Small reusable view pieces shared by pages.

pub mod error_msg;
pub mod loading_spinner;
