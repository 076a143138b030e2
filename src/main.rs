use clap::Parser;
use invoice_payments::application::processor::PaymentProcessor;
use invoice_payments::domain::ports::{InvoiceRepository, InvoiceRepositoryBox};
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceRepository;
#[cfg(feature = "storage-rocksdb")]
use invoice_payments::infrastructure::rocksdb::RocksDBInvoiceRepository;
use invoice_payments::interfaces::csv::outcome_writer::OutcomeWriter;
use invoice_payments::interfaces::csv::payment_reader::PaymentReader;
use invoice_payments::interfaces::json::invoice_file::{read_invoices, write_invoices};
use invoice_payments::logging::{self, LogFormat};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file (`reference, amount`)
    input: PathBuf,

    /// JSON file with invoices to load into the repository before processing
    #[arg(long)]
    invoices: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Write the final state of every invoice to this JSON file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Format of the diagnostic log written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[cfg(feature = "storage-rocksdb")]
fn open_repository(db_path: Option<&Path>) -> Result<InvoiceRepositoryBox> {
    match db_path {
        Some(path) => {
            let repository = RocksDBInvoiceRepository::open(path).into_diagnostic()?;
            Ok(Box::new(repository))
        }
        None => Ok(Box::new(InMemoryInvoiceRepository::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_repository(db_path: Option<&Path>) -> Result<InvoiceRepositoryBox> {
    if db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(Box::new(InMemoryInvoiceRepository::new()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let repository = open_repository(cli.db_path.as_deref())?;

    // Seeded invoices overwrite any stored under the same reference
    if let Some(path) = &cli.invoices {
        let file = File::open(path).into_diagnostic()?;
        for invoice in read_invoices(file).into_diagnostic()? {
            repository.save(invoice).await.into_diagnostic()?;
        }
    }

    let processor = PaymentProcessor::new(repository);

    // Payments run strictly one after another
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = PaymentReader::new(file);
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    for payment_result in reader.payments() {
        match payment_result {
            Ok(payment) => match processor.process(payment.clone()).await {
                Ok(outcome) => writer.write_outcome(&payment, &outcome).into_diagnostic()?,
                Err(e) => eprintln!("Error processing payment: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading payment: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    if let Some(path) = cli.snapshot {
        let invoices = processor.into_invoices().await.into_diagnostic()?;
        let file = File::create(path).into_diagnostic()?;
        write_invoices(file, &invoices).into_diagnostic()?;
    }

    Ok(())
}
