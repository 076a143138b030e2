use rand::Rng;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

/// Writes an invoice seed file with one standard invoice per `(reference, total)`.
pub fn write_invoices(path: &Path, invoices: &[(&str, &str)]) -> Result<(), Error> {
    let mut file = File::create(path)?;
    writeln!(file, "[")?;
    for (i, (reference, total)) in invoices.iter().enumerate() {
        let separator = if i + 1 < invoices.len() { "," } else { "" };
        writeln!(
            file,
            r#"  {{ "reference": "{}", "total_amount": "{}", "type": "standard" }}{}"#,
            reference, total, separator
        )?;
    }
    writeln!(file, "]")?;
    Ok(())
}

pub fn generate_csv(path: &Path, reference: &str, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["reference", "amount"])?;

    for _ in 1..=rows {
        wtr.write_record([reference, "1.0"])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Payments with random cent amounts spread over `references`.
pub fn generate_random_csv(path: &Path, references: &[&str], rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["reference", "amount"])?;

    let mut rng = rand::thread_rng();
    for _ in 0..rows {
        let reference = references[rng.gen_range(0..references.len())];
        let cents: u32 = rng.gen_range(1..=10_000);
        let amount = format!("{}.{:02}", cents / 100, cents % 100);
        wtr.write_record([reference, amount.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
