mod export_error;
mod hyperlap_error;
mod input_error;

pub use export_error::ExportError;
pub use hyperlap_error::{HyperlapError, HyperlapResult};
pub use input_error::InputError;
