pub mod export_models;
pub mod export_service;
pub mod export_store;

pub use export_models::{AccessToken, ExportReport, ExportRequest, ExportStage};
pub use export_service::ExportPipeline;
pub use export_store::{Authenticator, ExportError, FileStore, SheetExporter};
