use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn censor(args: &[&str], cwd: &Path) -> Output {
    // Isolate from any user-level config
    let config = cwd.join("censor.toml");
    fs::write(&config, "").unwrap();

    Command::new(env!("CARGO_BIN_EXE_censor"))
        .args(args)
        .current_dir(cwd)
        .env_remove("CENSOR_MODEL")
        .env("CENSOR_CONFIG", &config)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run censor binary")
}

#[test]
fn test_report_goes_to_stdout_by_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("report.txt"),
        "Call 555-123-4567 now, not 12-3456-789.\n",
    )
    .unwrap();

    let output = censor(
        &["--input", "*.txt", "--output", "out/", "--phones"],
        dir.path(),
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Sensitive Information Statistics:\nNames: 0\nDates: 0\nAddresses: 0\nPhones: 1\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("out").join("report.txt.censored")).unwrap(),
        "Call ████████████ now, not 12-3456-789.\n"
    );
}

#[test]
fn test_stats_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Sarah Connor lives in Chicago.").unwrap();

    let output = censor(
        &[
            "--input", "*.txt", "--output", "out", "--stats", "stats.txt", "--names",
            "--addresses",
        ],
        dir.path(),
    );

    assert!(output.status.success(), "{:?}", output);
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("stats.txt")).unwrap(),
        "Sensitive Information Statistics:\nNames: 1\nDates: 0\nAddresses: 1\nPhones: 0\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("out").join("a.txt.censored")).unwrap(),
        "████████████ lives in ███████."
    );
}

#[test]
fn test_missing_model_fails_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "text").unwrap();

    let output = censor(
        &[
            "--input", "*.txt", "--output", "out", "--model", "missing.json", "--names",
        ],
        dir.path(),
    );

    assert!(!output.status.success());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_keep_going_exits_non_zero_after_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe]).unwrap();
    fs::write(dir.path().join("good.txt"), "555-123-4567").unwrap();

    let output = censor(
        &["--input", "*.txt", "--output", "out", "--phones", "--keep-going"],
        dir.path(),
    );

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Sensitive Information Statistics:\nNames: 0\nDates: 0\nAddresses: 0\nPhones: 1\n"
    );
    assert!(dir.path().join("out").join("good.txt.censored").exists());
}
