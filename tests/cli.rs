use assert_cmd::Command;
use hound::WavReader;
use std::error::Error;
use std::fs;
use tempfile::tempdir;

const EXAMPLE_TABLE: &str = "0.0,0.5\n0.001,2.0\n0.002,-0.25\n";

#[test]
fn cli_writes_wav_into_current_directory() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let input_path = input_dir.path().join("capture.csv");
    fs::write(&input_path, EXAMPLE_TABLE)?;

    let work_dir = tempdir()?;
    let mut cmd = Command::cargo_bin("apcsv-to-wav")?;
    let assert = cmd
        .current_dir(work_dir.path())
        .arg(&input_path)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains("Delimiter: ,"));
    assert!(stdout.contains("Native rate 1000 Hz"));
    assert!(stdout.contains("Export rate 1000 Hz"));
    assert!(stdout.contains("Max value 2.0 Normalizing data"));
    assert!(stdout.contains("Output capture.wav\n"));

    let mut reader = WavReader::open(work_dir.path().join("capture.wav"))?;
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.spec().sample_rate, 1_000);
    let samples: Vec<f32> = reader.samples::<f32>().collect::<Result<_, _>>()?;
    assert_eq!(samples, vec![0.25, 1.0, -0.125]);

    work_dir.close()?;
    input_dir.close()?;
    Ok(())
}

#[test]
fn cli_rate_override_keeps_native_rate_in_log() -> Result<(), Box<dyn Error>> {
    let work_dir = tempdir()?;
    let input_path = work_dir.path().join("capture.csv");
    fs::write(&input_path, EXAMPLE_TABLE)?;

    let mut cmd = Command::cargo_bin("apcsv-to-wav")?;
    let assert = cmd
        .args(["--rate", "8000", "--verify", "--output-dir"])
        .arg(work_dir.path())
        .arg(&input_path)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains("Native rate 1000 Hz"));
    assert!(stdout.contains("Export rate 8000 Hz"));
    assert!(stdout.contains("Verified 3 sample(s)"));

    let reader = WavReader::open(work_dir.path().join("capture.wav"))?;
    assert_eq!(reader.spec().sample_rate, 8_000);

    work_dir.close()?;
    Ok(())
}

#[test]
fn cli_verbose_reports_discarded_rows() -> Result<(), Box<dyn Error>> {
    let work_dir = tempdir()?;
    let input_path = work_dir.path().join("export.csv");
    fs::write(&input_path, "time;value\n0;0.1\n0.5;0.2\n")?;

    let mut cmd = Command::cargo_bin("apcsv-to-wav")?;
    let assert = cmd
        .current_dir(work_dir.path())
        .args(["--verbose", "-d", ";"])
        .arg(&input_path)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains("Discarding time;value"));
    assert!(work_dir.path().join("export.wav").exists());

    work_dir.close()?;
    Ok(())
}

#[test]
fn cli_json_prints_summary() -> Result<(), Box<dyn Error>> {
    let work_dir = tempdir()?;
    let input_path = work_dir.path().join("capture.csv");
    fs::write(&input_path, EXAMPLE_TABLE)?;

    let mut cmd = Command::cargo_bin("apcsv-to-wav")?;
    let assert = cmd
        .current_dir(work_dir.path())
        .arg("--json")
        .arg(&input_path)
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(report["native_rate"], 1_000);
    assert_eq!(report["export_rate"], 1_000);
    assert_eq!(report["samples"], 3);
    assert_eq!(report["discarded"], 0);
    assert_eq!(report["scale"], 2.0);

    work_dir.close()?;
    Ok(())
}

#[test]
fn cli_fails_on_single_sample() -> Result<(), Box<dyn Error>> {
    let work_dir = tempdir()?;
    let input_path = work_dir.path().join("short.csv");
    fs::write(&input_path, "0,0.5\n")?;

    let mut cmd = Command::cargo_bin("apcsv-to-wav")?;
    let assert = cmd
        .current_dir(work_dir.path())
        .arg(&input_path)
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone())?;
    assert!(stderr.contains("minimum 2 samples required"));
    assert!(!work_dir.path().join("short.wav").exists());

    work_dir.close()?;
    Ok(())
}

#[test]
fn cli_reports_missing_input_file() -> Result<(), Box<dyn Error>> {
    let work_dir = tempdir()?;

    let mut cmd = Command::cargo_bin("apcsv-to-wav")?;
    let assert = cmd
        .current_dir(work_dir.path())
        .arg("missing.csv")
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone())?;
    assert!(stderr.contains("failed to convert 'missing.csv'"));

    work_dir.close()?;
    Ok(())
}
