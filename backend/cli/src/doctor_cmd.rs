//! CLI Doctor Command
//!
//! Checks that a scan can run: images to choose from and credentials for
//! the OCR service.

use std::process::ExitCode;

use textlens_vision::{list_images, Credentials};

use crate::config::Config;
use crate::terminal_output::{render_checks, supports_color, Check, CheckStatus};

/// Executes the checks and prints the table.
pub async fn run(config: &Config) -> ExitCode {
    let checks = collect_checks(config).await;
    print!("{}", render_checks(&checks, supports_color()));

    if checks.iter().any(|c| c.status == CheckStatus::Fail) {
        println!("\nSome checks failed; fix them before scanning.");
        ExitCode::FAILURE
    } else {
        println!("\nReady to scan.");
        ExitCode::SUCCESS
    }
}

async fn collect_checks(config: &Config) -> Vec<Check> {
    let dir = config.images_dir.display().to_string();
    let images = match list_images(&config.images_dir).await {
        Ok(names) if names.is_empty() => {
            Check::new("images directory", CheckStatus::Warn, format!("no images in {dir}"))
        }
        Ok(names) => Check::new(
            "images directory",
            CheckStatus::Ok,
            format!("{} images in {dir}", names.len()),
        ),
        Err(e) => Check::new("images directory", CheckStatus::Fail, e.to_string()),
    };

    let credentials = match config.credentials() {
        Some(Credentials::ApiKey(_)) => Check::new("credentials", CheckStatus::Ok, "API key"),
        Some(Credentials::AccessToken { quota_project, .. }) => Check::new(
            "credentials",
            CheckStatus::Ok,
            match quota_project {
                Some(project) => format!("access token (quota project {project})"),
                None => "access token".to_string(),
            },
        ),
        None => Check::new(
            "credentials",
            CheckStatus::Fail,
            "set GOOGLE_API_KEY or GOOGLE_OAUTH_ACCESS_TOKEN",
        ),
    };

    let endpoint = Check::new("endpoint", CheckStatus::Ok, config.endpoint.clone());

    vec![images, credentials, endpoint]
}
