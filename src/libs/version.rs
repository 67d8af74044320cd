use log::info;
use std::fs;

use super::variable::get_environment_variable;

const BUILD_FILE: &str = "/etc/linkshelf_build";
const NO_VERSION: &str = "__NO_VERSION_AVAILABLE__";

pub fn get_app_version() -> String {
    match fs::read_to_string(BUILD_FILE) {
        Ok(val) => val.trim().to_string(),
        Err(_e) => env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn get_helm_chart_version() -> String {
    get_environment_variable("HELM_CHART_VERSION").unwrap_or_else(|| NO_VERSION.to_string())
}

pub fn print_version(service: &str) {
    info!("Starting {service}");
    info!("App: {}", get_app_version());
    info!("Helm Chart: {}", get_helm_chart_version());
}
