pub mod check;
pub mod config;
pub mod init;
pub mod rules;

pub use check::{render_report, run_check, run_check_impl};
pub use config::{run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{format_rules, run_rules};
