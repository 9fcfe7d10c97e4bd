//! 发票管理

pub mod error;
pub mod handler;
pub mod model;
#[cfg(feature = "database")]
pub mod postgres;
pub mod service;
pub mod store;

pub use error::InvoiceError;
pub use model::{Invoice, InvoiceForm, InvoiceStatus};
pub use service::InvoiceService;
pub use store::{InMemoryInvoiceStore, InvoiceStore};
