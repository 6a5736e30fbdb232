use thiserror::Error;

use crate::aggregator::ReportError;
use crate::model::TextError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Input(#[from] TextError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
