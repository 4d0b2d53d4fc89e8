use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn constellation_prints_walker_elements_as_csv() {
    let output = Command::cargo_bin("constellation")
        .expect("constellation bin")
        .args([
            "--strategy",
            "walker-delta",
            "--satellites",
            "6",
            "--planes",
            "3",
            "--sma-km",
            "6921",
            "--inclination-deg",
            "53",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "index,plane,semi_major_axis_m,eccentricity,inclination_rad,raan_rad,arg_periapsis_rad,true_anomaly_rad",
        ))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().count(), 7, "header plus six satellites:\n{text}");
}

#[test]
fn constellation_rejects_uneven_walker_pattern() {
    Command::cargo_bin("constellation")
        .expect("constellation bin")
        .args([
            "--strategy",
            "walker-delta",
            "--satellites",
            "10",
            "--planes",
            "3",
            "--sma-km",
            "7000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be divided evenly"));
}

#[test]
fn constellation_from_manifest_writes_state_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest = dir.path().join("constellations.yaml");
    fs::write(
        &manifest,
        "- name: first\n  strategy: coplanar\n  satellites: 2\n  semi_major_axis_km: 8000.0\n  inclination_deg: 10.0\n\
         - name: ring\n  strategy: coplanar_circular\n  satellites: 4\n  semi_major_axis_km: 7000.0\n  inclination_deg: 0.0\n",
    )
    .unwrap();
    let out = dir.path().join("out/ring.json");

    Command::cargo_bin("constellation")
        .expect("constellation bin")
        .args([
            "--config",
            manifest.to_str().unwrap(),
            "--name",
            "ring",
            "--states",
            "--format",
            "json",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("json written")).unwrap();
    assert_eq!(value["body"], "EARTH");
    assert_eq!(value["strategy"], "coplanar_circular");
    let satellites = value["satellites"].as_array().unwrap();
    assert_eq!(satellites.len(), 4);
    let x = satellites[0]["x_m"].as_f64().unwrap();
    assert!((x - 7_000e3).abs() < 1e-6, "first satellite x {x}");
}

#[test]
fn constellation_manifest_excludes_pattern_flags() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest = dir.path().join("constellations.yaml");
    fs::write(
        &manifest,
        "- name: ring\n  strategy: coplanar\n  satellites: 4\n  semi_major_axis_km: 7000.0\n  inclination_deg: 0.0\n",
    )
    .unwrap();

    for flag in [["--satellites", "8"], ["--sma-km", "8000"], ["--planes", "2"]] {
        Command::cargo_bin("constellation")
            .expect("constellation bin")
            .args(["--config", manifest.to_str().unwrap()])
            .args(flag)
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"));
    }
}

#[test]
fn constellation_reports_unknown_body() {
    Command::cargo_bin("constellation")
        .expect("constellation bin")
        .args([
            "--strategy",
            "coplanar",
            "--satellites",
            "3",
            "--sma-km",
            "7000",
            "--body",
            "Vulcan",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vulcan"));
}

#[test]
fn constellation_uses_custom_bodies() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bodies = dir.path().join("bodies.yaml");
    fs::write(&bodies, "- name: ceres\n  mu_m3_s2: 6.263e10\n").unwrap();

    Command::cargo_bin("constellation")
        .expect("constellation bin")
        .args([
            "--strategy",
            "coplanar",
            "--satellites",
            "2",
            "--sma-km",
            "1000",
            "--body",
            "ceres",
            "--bodies",
            bodies.to_str().unwrap(),
            "--states",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("index,x_m,y_m,z_m"));
}

#[test]
fn convert_to_state_and_back() {
    Command::cargo_bin("convert")
        .expect("convert bin")
        .args(["to-state", "--sma-km", "7000", "--eccentricity", "0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("position_km: 6300.000000"))
        .stdout(predicate::str::contains("velocity_km_s:"));

    Command::cargo_bin("convert")
        .expect("convert bin")
        .args([
            "to-elements",
            "--position-km",
            "7000",
            "0",
            "0",
            "--velocity-km-s",
            "0",
            "7.546",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("orbit: elliptical_equatorial"))
        .stdout(predicate::str::contains("semi_major_axis_km:"));
}

#[test]
fn convert_handles_parabolic_orbits() {
    Command::cargo_bin("convert")
        .expect("convert bin")
        .args(["to-state", "--sma-km", "7000", "--eccentricity", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parabolic"));

    Command::cargo_bin("convert")
        .expect("convert bin")
        .args([
            "to-state",
            "--semi-latus-rectum-km",
            "14000",
            "--eccentricity",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("position_km: 7000.000000"));
}
