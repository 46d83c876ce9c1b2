use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

use serde_json::Value;

fn symptomx_bin() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(bin) = std::env::var("CARGO_BIN_EXE_symptomx") {
        return Ok(PathBuf::from(bin));
    }

    let mut path = std::env::current_exe()?;
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("symptomx");

    if cfg!(windows) {
        path.set_extension("exe");
    }

    Ok(path)
}

fn run(
    data_dir: &Path,
    args: &[&str],
) -> Result<Output, Box<dyn std::error::Error>> {
    let output = Command::new(symptomx_bin()?)
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("SYMPTOMX_LOG")
        .output()?;
    Ok(output)
}

fn stdout_json(output: &Output) -> Result<Value, Box<dyn std::error::Error>> {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn diagnose_with_builtin_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;

    let output = run(tempdir.path(), &["diagnose", "fever,", "cough", "--json"])?;
    let result = stdout_json(&output)?;

    assert_eq!(result["primary"]["disease"], "Influenza (Flu)");
    assert_eq!(result["primary"]["confidence"], 41.7);
    assert_eq!(result["primary"]["matched"], serde_json::json!(["fever"]));
    assert_eq!(result["possible"].as_array().map(Vec::len), Some(2));
    assert!(result.get("message").is_none());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("built-in fallback"));
    Ok(())
}

#[test]
fn diagnose_empty_query() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;

    let result = stdout_json(&run(tempdir.path(), &["diagnose", "--json"])?)?;

    assert!(result["primary"].is_null());
    assert_eq!(result["possible"], serde_json::json!([]));
    assert_eq!(result["message"], "Please enter your symptoms.");
    Ok(())
}

#[test]
fn diagnose_respects_count() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;

    let result = stdout_json(&run(
        tempdir.path(),
        &["diagnose", "headache", "-n", "1", "--json"],
    )?)?;

    assert!(result["primary"].is_object());
    assert_eq!(result["possible"], serde_json::json!([]));
    Ok(())
}

#[test]
fn diagnose_human_output() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;

    let output = run(tempdir.path(), &["diagnose", "headache, nausea"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Most likely: Migraine"));
    assert!(stdout.contains("Other possibilities:"));
    Ok(())
}

#[test]
fn status_reads_csv_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;
    std::fs::write(
        tempdir.path().join("diseases.csv"),
        "disease,symptoms,treatment\n\
         Migraine,\"headache; nausea\",rest\n\
         Gout,joint pain,ice\n",
    )?;

    let health = stdout_json(&run(tempdir.path(), &["status", "--json"])?)?;

    assert_eq!(health["status"], "ok");
    assert_eq!(health["diseases"], 2);
    assert_eq!(health["vocab"], 3);
    assert_eq!(health["source"], "csv");
    Ok(())
}

#[test]
fn vocab_lists_phrases_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;
    std::fs::write(
        tempdir.path().join("diseases.json"),
        r#"[
            {"disease": "A", "normalized_symptoms_list": ["Fever", "cough"]},
            {"disease": "B", "symptoms": "cough / rash"}
        ]"#,
    )?;

    let vocab = stdout_json(&run(tempdir.path(), &["vocab", "--json"])?)?;

    assert_eq!(vocab, serde_json::json!(["fever", "cough", "rash"]));
    Ok(())
}

#[test]
fn log_file_receives_logs() -> Result<(), Box<dyn std::error::Error>> {
    let tempdir = tempfile::tempdir()?;
    let log = tempdir.path().join("logs").join("core.log");

    let output = run(tempdir.path(), &[
        "status",
        "--log-file",
        log.to_str().unwrap(),
    ])?;
    assert!(output.status.success());

    let logged = std::fs::read_to_string(&log)?;
    assert!(logged.contains("Vocab built: 14 phrases"));
    Ok(())
}
