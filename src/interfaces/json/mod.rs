pub mod invoice_file;
