use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn solarmap() -> Command {
    Command::cargo_bin("solarmap").unwrap()
}

#[test]
fn renders_both_views_offline_for_a_fixed_date() {
    solarmap()
        .args(["--offline", "--date", "13/06/2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solar System on 13/06/2025"))
        .stdout(predicate::str::contains("=== INNER SOLAR SYSTEM ==="))
        .stdout(predicate::str::contains("=== OUTER SOLAR SYSTEM ==="))
        .stdout(predicate::str::contains("Scale: 7.0 AU across"))
        .stdout(predicate::str::contains("Scale: 70.0 AU across"))
        .stdout(predicate::str::contains("Visible: * = Sun, / = Orbital paths"))
        .stdout(predicate::str::contains("E = Earth"))
        .stdout(predicate::str::contains("S = Saturn"));
}

#[test]
fn newton_solver_is_selectable() {
    solarmap()
        .args(["--offline", "--date", "13/06/2025", "--solver", "newton"])
        .assert()
        .success()
        .stdout(predicate::str::contains("E = Earth"));
}

#[test]
fn positions_flag_prints_the_orbital_state_table() {
    solarmap()
        .args(["--offline", "--date", "13/06/2025", "--positions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mercury"))
        .stdout(predicate::str::contains("AU"));
}

#[test]
fn rejects_an_out_of_range_date() {
    solarmap()
        .args(["--offline", "--date", "99/13/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn accepts_a_loose_day_month_combination() {
    // Day-of-month is not cross-checked against the month length.
    solarmap()
        .args(["--offline", "--date", "31/02/2025"])
        .assert()
        .success();
}

#[test]
fn custom_catalog_defines_the_scene_grouping() {
    let yaml = r#"
bodies:
  - name: Earth
    symbol: E
    eccentricity: 0.0167
    perihelion: { day: 4, month: 1, year: 2025 }
    period_days: 365.25
    semi_major_axis_au: 1.0
scenes:
  - label: TEST VIEW
    half_range_au: 2.0
    bodies: [Earth]
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    solarmap()
        .args(["--offline", "--date", "13/06/2025"])
        .arg("--catalog")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== TEST VIEW ==="))
        .stdout(predicate::str::contains("Scale: 4.0 AU across"))
        .stdout(predicate::str::contains("E = Earth"));
}

#[test]
fn invalid_catalog_aborts_before_rendering() {
    let yaml = r#"
bodies:
  - name: Mercury
    symbol: M
    eccentricity: 0.2056
    perihelion: { day: 3, month: 6, year: 2025 }
    period_days: 87.97
    semi_major_axis_au: 0.387
  - name: Mars
    symbol: M
    eccentricity: 0.0934
    perihelion: { day: 9, month: 5, year: 2024 }
    period_days: 686.98
    semi_major_axis_au: 1.524
scenes: []
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    solarmap()
        .args(["--offline", "--date", "13/06/2025"])
        .arg("--catalog")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("share render symbol"))
        .stdout(predicate::str::contains("Solar System on").not());
}
