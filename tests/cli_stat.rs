use assert_cmd::Command;

#[test]
fn command_stat() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("gibsembler")?;
    let output = cmd
        .arg("stat")
        .arg("tests/gibson/atgc44.fa")
        .arg("tests/gibson/two_records.fa")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "#seq\tlen\tgc\ttm_wallace\ttm_nn");
    assert!(lines[1].starts_with("atgc44\t44\t50.00\t132.00\t"));
    assert!(lines[2].starts_with("a\t10\t50.00\t30.00\t"));
    assert!(lines[3].starts_with("b\t10\t100.00\t40.00\t"));

    Ok(())
}

#[test]
fn command_stat_genbank() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("gibsembler")?;
    let output = cmd
        .arg("stat")
        .arg("tests/gibson/pUC_mini.gb")
        .arg("--format")
        .arg("genbank")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("pUC_mini\t240\t"));

    Ok(())
}
