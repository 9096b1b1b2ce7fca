use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn bin() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("gs1-forms").expect("binary");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn item_args(cmd: &mut assert_cmd::Command, cantidad: &str) {
    cmd.arg("--gtin")
        .arg("12345678901234")
        .arg("--fecha")
        .arg("01/01/2024")
        .arg("--cantidad")
        .arg(cantidad);
}

#[test]
fn validate_accepts_item_form() {
    let tmp = tempdir().expect("tmpdir");
    let mut cmd = bin();
    cmd.current_dir(tmp.path()).arg("validate").arg("item");
    item_args(&mut cmd, "1");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("item form accepted"));
}

#[test]
fn validate_rejects_with_message_and_status() {
    let tmp = tempdir().expect("tmpdir");
    let mut cmd = bin();
    cmd.current_dir(tmp.path()).arg("validate").arg("item");
    item_args(&mut cmd, "0");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Minimum quantity is 1."));
}

#[test]
fn validate_pallet_checks_sscc_first() {
    let tmp = tempdir().expect("tmpdir");
    let mut cmd = bin();
    cmd.current_dir(tmp.path())
        .arg("validate")
        .arg("pallet")
        .arg("--sscc")
        .arg("bad");
    item_args(&mut cmd, "2");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("SSCC must be 18 digits."));
}

#[test]
fn lang_flag_switches_messages() {
    let tmp = tempdir().expect("tmpdir");
    let mut cmd = bin();
    cmd.current_dir(tmp.path())
        .arg("--lang")
        .arg("ES")
        .arg("validate")
        .arg("item")
        .arg("--gtin")
        .arg("123");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("GTIN debe tener 14 dígitos"));
}

#[test]
fn config_file_sets_language() {
    let tmp = tempdir().expect("tmpdir");
    fs::write(tmp.path().join("gs1forms.toml"), "[messages]\nlang = \"ES\"\n").expect("write config");

    let mut cmd = bin();
    cmd.current_dir(tmp.path()).arg("validate").arg("item");
    item_args(&mut cmd, "0");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Cantidad mínima es 1"));
}

#[test]
fn explicit_config_path_must_exist() {
    let tmp = tempdir().expect("tmpdir");
    let mut cmd = bin();
    cmd.current_dir(tmp.path())
        .arg("--config")
        .arg("does-not-exist.toml")
        .arg("validate")
        .arg("item");
    item_args(&mut cmd, "1");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn explicit_config_path_is_read() {
    let tmp = tempdir().expect("tmpdir");
    let config = tmp.path().join("custom.toml");
    fs::write(&config, "[messages]\nlang = \"ES\"\n").expect("write config");

    let mut cmd = bin();
    cmd.current_dir(tmp.path())
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .arg("item");
    item_args(&mut cmd, "0");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Cantidad mínima es 1"));
}

#[test]
fn reject_expired_flag_refuses_past_dates() {
    let tmp = tempdir().expect("tmpdir");
    let mut cmd = bin();
    cmd.current_dir(tmp.path())
        .arg("validate")
        .arg("item")
        .arg("--reject-expired");
    item_args(&mut cmd, "1");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Expiry date must be a valid date not in the past."));
}

#[test]
fn label_prints_element_string() {
    let tmp = tempdir().expect("tmpdir");
    let mut cmd = bin();
    cmd.current_dir(tmp.path())
        .arg("label")
        .arg("item")
        .arg("--format")
        .arg("ais")
        .arg("--lote")
        .arg("L1");
    item_args(&mut cmd, "5");
    cmd.assert()
        .success()
        .stdout("(01)12345678901234(10)L1(17)240101(37)5\n");
}

#[test]
fn label_writes_zpl_file_from_json_input() {
    let tmp = tempdir().expect("tmpdir");
    let input = tmp.path().join("pallet.json");
    let out = tmp.path().join("labels.zpl");
    fs::write(
        &input,
        r#"{"sscc": "123456789012345678", "gtin": "12345678901234", "lote": "L1",
            "fecha": "01/01/2024", "cantidad": "40"}"#,
    )
    .expect("write input");

    let mut cmd = bin();
    cmd.current_dir(tmp.path())
        .arg("label")
        .arg("pallet")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out);
    cmd.assert().success();

    let zpl = fs::read_to_string(&out).expect("read zpl");
    assert!(zpl.starts_with("^XA\n^PW800\n"));
    assert!(zpl.contains("^FDSSCC: 123456789012345678^FS"));
    assert!(zpl.ends_with("^XZ\n"));
}

#[test]
fn label_writes_pdf_sheet() {
    let tmp = tempdir().expect("tmpdir");
    let out = tmp.path().join("label.pdf");

    let mut cmd = bin();
    cmd.current_dir(tmp.path())
        .arg("label")
        .arg("pallet")
        .arg("--format")
        .arg("pdf")
        .arg("--sscc")
        .arg("123456789012345678")
        .arg("--lote")
        .arg("L1")
        .arg("--out")
        .arg(&out);
    item_args(&mut cmd, "40");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("label written to"));

    let pdf = fs::read(&out).expect("read pdf");
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn label_refuses_invalid_form() {
    let tmp = tempdir().expect("tmpdir");
    let mut cmd = bin();
    cmd.current_dir(tmp.path()).arg("label").arg("item");
    item_args(&mut cmd, "abc");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Minimum quantity is 1."));
}
