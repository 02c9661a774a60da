mod csv_export;
mod error;
mod webhook;


pub use csv_export::{export_csv, write_csv, DEFAULT_CSV_FILENAME};
pub use error::ExportError;
pub use webhook::{SheetWebhook, WebhookPayload};
