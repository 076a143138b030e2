use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use invoice_payments::domain::invoice::Invoice;
use invoice_payments::domain::money::Money;
use predicates::prelude::*;
use rust_decimal_macros::dec;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--invoices")
        .arg("tests/fixtures/invoices.json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("reference,amount,success,message"))
        .stdout(predicate::str::contains("inv-1,10,true,invoice is now fully paid"))
        .stdout(predicate::str::contains(
            "inv-1,1,false,invoice was already fully paid",
        ))
        .stdout(predicate::str::contains(
            "inv-2,6,false,the payment is greater than the partial amount remaining",
        ))
        .stdout(predicate::str::contains(
            "inv-2,1,true,\"another partial payment received, still not fully paid\"",
        ))
        .stdout(predicate::str::contains("inv-3,5,false,no payment needed"))
        .stdout(predicate::str::contains(
            "missing,5,false,there is no invoice matching this payment",
        ))
        .stdout(predicate::str::contains(
            "inv-2,4,true,\"final partial payment received, invoice is now fully paid\"",
        ))
        // Structural failures are reported, not written as outcomes
        .stdout(predicate::str::contains("inv-4").not())
        .stdout(predicate::str::contains("inv-5").not())
        .stderr(predicate::str::contains(
            "Error processing payment: Invoice inv-4 is in an invalid state",
        ))
        .stderr(predicate::str::contains("unsupported invoice type: proforma"));

    Ok(())
}

#[test]
fn test_cli_writes_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let snapshot = dir.path().join("snapshot.json");

    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--invoices")
        .arg("tests/fixtures/invoices.json")
        .arg("--snapshot")
        .arg(&snapshot);
    cmd.assert().success();

    let invoices: Vec<Invoice> = serde_json::from_str(&std::fs::read_to_string(&snapshot)?)?;
    assert_eq!(invoices.len(), 5);

    let standard = invoices.iter().find(|i| i.reference == "inv-1").unwrap();
    assert_eq!(standard.amount_paid, Money::new(dec!(10)));
    assert_eq!(standard.tax_amount, Money::new(dec!(1.40)));

    let commercial = invoices.iter().find(|i| i.reference == "inv-2").unwrap();
    assert_eq!(commercial.payments.len(), 3);
    assert_eq!(commercial.amount_paid, Money::new(dec!(10)));
    assert_eq!(commercial.tax_amount, Money::new(dec!(1.40)));

    let invalid = invoices.iter().find(|i| i.reference == "inv-4").unwrap();
    assert_eq!(invalid.payments.len(), 1);

    Ok(())
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}

#[test]
fn test_cli_reports_structural_failure_once() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(cargo_bin!("invoice-payments"))
        .arg("tests/fixtures/payments.csv")
        .arg("--invoices")
        .arg("tests/fixtures/invoices.json")
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.matches("inv-4").count(), 1);
    assert_eq!(stderr.matches("proforma").count(), 1);

    Ok(())
}

#[test]
fn test_cli_survives_overflowing_history() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let invoices = dir.path().join("invoices.json");
    std::fs::write(
        &invoices,
        r#"[
            {
                "reference": "huge",
                "total_amount": 10,
                "payments": [
                    {"amount": "79228162514264337593543950335"},
                    {"amount": "79228162514264337593543950335"}
                ]
            },
            {"reference": "inv-1", "total_amount": 10}
        ]"#,
    )?;
    let payments = dir.path().join("payments.csv");
    std::fs::write(&payments, "reference,amount\nhuge,1\ninv-1,10\n")?;

    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg(&payments).arg("--invoices").arg(&invoices);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("inv-1,10,true,invoice is now fully paid"))
        .stdout(predicate::str::contains("huge").not())
        .stderr(predicate::str::contains(
            "Error processing payment: Invoice huge holds amounts outside the supported decimal range",
        ));

    Ok(())
}
