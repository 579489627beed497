//! Log loading and report output

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::AnalyzerError;

/// Load the log file, with a preflight listing of its directory
///
/// The directory listing goes to stdout so a CI run shows what was actually
/// present when the log cannot be found.
pub fn load_logs(log_file: &Path) -> Result<String, AnalyzerError> {
    if let Ok(cwd) = std::env::current_dir() {
        println!("🔍 Current working directory: {}", cwd.display());
    }
    println!("🔍 Looking for log file at: {}", log_file.display());

    let logs_dir = log_file.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = logs_dir {
        if dir.exists() {
            println!("📁 Contents of {}:", dir.display());
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    match entry.metadata() {
                        Ok(meta) if meta.is_file() => {
                            println!("   📄 {name} ({} bytes)", meta.len());
                        }
                        _ => println!("   📁 {name}/"),
                    }
                }
            }
        } else {
            println!("❌ Directory {} does not exist", dir.display());
        }
    }

    if !log_file.exists() {
        return Err(AnalyzerError::LogFileMissing(
            log_file.display().to_string(),
        ));
    }

    let logs = fs::read_to_string(log_file)?;
    if logs.trim().is_empty() {
        return Err(AnalyzerError::LogFileEmpty);
    }

    println!("📖 Analyzing {} characters of log data...", logs.len());
    Ok(logs)
}

/// Write the analysis to a timestamped markdown report and return its path
pub fn write_report(log_file: &Path, analysis: &str) -> Result<PathBuf, AnalyzerError> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let output_file = PathBuf::from(format!("error_analysis_{timestamp}.md"));

    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");
    let report = format!(
        "# AI Error Log Analysis Report\n\
         **Generated:** {generated}\n\
         **Log File:** {}\n\
         **Analysis Tool:** FaultMart Log Analyzer\n\n\
         ---\n\n\
         {analysis}",
        log_file.display()
    );

    fs::write(&output_file, report)?;
    Ok(output_file)
}

/// Print the analysis to the console between separator rules
pub fn print_analysis(analysis: &str) {
    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("🧠 AI-GENERATED ERROR ANALYSIS");
    println!("{rule}");
    println!("{analysis}");
    println!("{rule}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_log_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("application.log");
        let result = load_logs(&path);
        assert!(matches!(result, Err(AnalyzerError::LogFileMissing(_))));
    }

    #[test]
    fn empty_log_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("application.log");
        fs::write(&path, "   \n").unwrap();
        let result = load_logs(&path);
        assert!(matches!(result, Err(AnalyzerError::LogFileEmpty)));
    }

    #[test]
    fn log_content_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("application.log");
        fs::write(&path, "[ERROR] payment failed\n").unwrap();
        let logs = load_logs(&path).unwrap();
        assert!(logs.contains("payment failed"));
    }

    #[test]
    fn report_carries_header_and_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let report_path =
            write_report(Path::new("logs/application.log"), "## Findings\nNone.").unwrap();
        let content = fs::read_to_string(&report_path).unwrap();

        std::env::set_current_dir(cwd).unwrap();

        assert!(content.starts_with("# AI Error Log Analysis Report"));
        assert!(content.contains("logs/application.log"));
        assert!(content.contains("## Findings"));
    }
}
