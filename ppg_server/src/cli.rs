use std::{env, env::VarError};

const HELP: &str = include_str!("./cli-help.txt");

// PPG_PAYONEER_PASSWORD is never listed
const DISPLAY_ENVS: [&str; 8] = [
    "RUST_LOG",
    "PPG_HOST",
    "PPG_PORT",
    "PPG_PAYONEER_SANDBOX",
    "PPG_PAYONEER_URI",
    "PPG_PAYONEER_USERNAME",
    "PPG_PAYONEER_PARTNER_ID",
    "PPG_PAYONEER_PROGRAM_ID",
];

/// The gateway is configured through the environment only. Any argument prints the help text and the current
/// (non-secret) settings, and returns `true` to tell the caller not to start the server.
pub fn handle_command_line_args() -> bool {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        return false;
    }
    if !args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Unrecognised arguments: {}", args.join(" "));
    }
    println!("\n{HELP}\n");
    println!("{}", environment_report());
    true
}

/// The values of the settings in [`DISPLAY_ENVS`], one per line.
pub fn environment_report() -> String {
    let mut report = String::from("Current environment values (EXCLUDING variables that contain secrets):\n");
    for name in DISPLAY_ENVS {
        report.push_str(&format!("  {name:<35} {:<15}\n", env_value(name)));
    }
    report
}

fn env_value(name: &str) -> String {
    match env::var(name) {
        Ok(s) => s,
        Err(VarError::NotPresent) => "Not set".into(),
        Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
    }
}
