mod common;
use common::{BASE, device_a_xml, device_b_xml, iso, tcxm, write_file};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_merge_by_time_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "a.tcx", &device_a_xml());
    let b = write_file(dir.path(), "b.tcx", &device_b_xml());
    let out = dir.path().join("merged.tcx");
    let cfg = dir.path().join("tcxmerge.conf");

    tcxm()
        .arg("--config")
        .arg(&cfg)
        .arg("merge")
        .arg(&a)
        .arg(&b)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 5 trackpoints by time"));

    let content = fs::read_to_string(&out).expect("read merged output");
    assert!(content.starts_with("<?xml"));
    assert!(content.contains(&format!("<Id>{}</Id>", iso(BASE + 40))));
    assert_eq!(content.matches("<Trackpoint>").count(), 5);
    assert!(!dir.path().join("merged.tcx.tmp").exists());
}

#[test]
fn test_merge_by_odometer_reports_gap_fill() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "a.tcx", &device_a_xml());
    let b = write_file(dir.path(), "b.tcx", &device_b_xml());
    let out = dir.path().join("merged.tcx");

    tcxm()
        .arg("--config")
        .arg(dir.path().join("none.conf"))
        .arg("merge")
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .args(["--policy", "odometer", "--id-offset", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Positions filled: 2 from next, 0 from previous"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains(&format!("<Id>{}</Id>", iso(BASE + 100))));
    assert_eq!(content.matches("<Position>").count(), 5);
}

#[test]
fn test_merge_policy_and_offset_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "a.tcx", &device_a_xml());
    let b = write_file(dir.path(), "b.tcx", &device_b_xml());
    let out = dir.path().join("merged.tcx");
    let cfg = write_file(
        dir.path(),
        "tcxmerge.conf",
        "default_policy: odometer\nactivity_id_offset_seconds: 120\n",
    );

    tcxm()
        .arg("--config")
        .arg(&cfg)
        .arg("merge")
        .arg(&a)
        .arg(&b)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("by odometer"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains(&format!("<Id>{}</Id>", iso(BASE + 100 - 120))));
}

#[test]
fn test_merge_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "a.tcx", &device_a_xml());
    let missing = dir.path().join("missing.tcx");
    let out = dir.path().join("merged.tcx");

    tcxm()
        .arg("--config")
        .arg(dir.path().join("none.conf"))
        .arg("merge")
        .arg(&a)
        .arg(&missing)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));

    assert!(!out.exists());
}

#[test]
fn test_merge_missing_input_is_reported_before_replace_question() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "a.tcx", &device_a_xml());
    let missing = dir.path().join("missing.tcx");
    let out = write_file(dir.path(), "merged.tcx", "keep me");

    tcxm()
        .arg("--config")
        .arg(dir.path().join("none.conf"))
        .arg("merge")
        .arg(&a)
        .arg(&missing)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stdout(predicate::str::contains("already there").not())
        .stdout(predicate::str::contains("Replace it").not())
        .stderr(predicate::str::contains("Input file not found"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_merge_refuses_to_overwrite_unless_confirmed() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "a.tcx", &device_a_xml());
    let b = write_file(dir.path(), "b.tcx", &device_b_xml());
    let out = write_file(dir.path(), "merged.tcx", "keep me");
    let cfg = dir.path().join("none.conf");

    tcxm()
        .arg("--config")
        .arg(&cfg)
        .arg("merge")
        .arg(&a)
        .arg(&b)
        .arg("-o")
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Replace it with the new activity?"))
        .stderr(predicate::str::contains("pass --force to replace it"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    tcxm()
        .arg("--config")
        .arg(&cfg)
        .arg("merge")
        .arg(&a)
        .arg(&b)
        .arg("-o")
        .arg(&out)
        .arg("--force")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("<Trackpoint>"));
}

#[test]
fn test_shift_with_break_flags() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "a.tcx", &device_a_xml());
    let out = dir.path().join("shifted.tcx");

    // break 150s after the start (BASE+100) lasting 30s: only BASE+300 moves
    tcxm()
        .arg("--config")
        .arg(dir.path().join("none.conf"))
        .arg("shift")
        .arg(&a)
        .arg(&out)
        .args(["--break", "0:02:30=0:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shifted 3 trackpoints past 1 breaks"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains(&format!("<Time>{}</Time>", iso(BASE + 100))));
    assert!(content.contains(&format!("<Time>{}</Time>", iso(BASE + 200))));
    assert!(content.contains(&format!("<Time>{}</Time>", iso(BASE + 330))));
    assert!(content.contains(&format!("<Id>{}</Id>", iso(BASE + 100))));
}

#[test]
fn test_shift_prompts_for_breaks_and_uses_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "ride.tcx", &device_a_xml());

    tcxm()
        .arg("--config")
        .arg(dir.path().join("none.conf"))
        .arg("shift")
        .arg(&a)
        .write_stdin("0:00:00\n1:00\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Break length (minutes:seconds)"));

    let content = fs::read_to_string(dir.path().join("modifiedride.tcx")).unwrap();
    assert!(content.contains(&format!("<Time>{}</Time>", iso(BASE + 160))));
    assert!(content.contains(&format!("<Time>{}</Time>", iso(BASE + 360))));
}

#[test]
fn test_shift_rejects_bad_break() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "a.tcx", &device_a_xml());

    tcxm()
        .arg("--config")
        .arg(dir.path().join("none.conf"))
        .arg("shift")
        .arg(&a)
        .args(["--break", "5 minutes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid break definition"));
}

#[test]
fn test_init_and_print_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("conf").join("tcxmerge.conf");

    tcxm()
        .arg("--config")
        .arg(&cfg)
        .arg("init")
        .assert()
        .success();
    assert!(cfg.exists());

    tcxm()
        .arg("--config")
        .arg(&cfg)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("activity_id_offset_seconds: 60"))
        .stdout(predicate::str::contains("default_policy: time"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_file(dir.path(), "bad.conf", "default_policy: sideways\n");

    tcxm()
        .arg("--config")
        .arg(&cfg)
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
