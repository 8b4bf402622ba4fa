//! Core of the screening demo: the simulated analysis, its result texts and
//! the interaction state driving select → preview → analyze → result.
//!
//! Nothing here inspects pixels. The "analysis" is a weighted blend of file
//! metadata, the wall clock and random draws, see [`simulate`].

pub mod config;
pub mod error;
pub mod message;
pub mod model;
pub mod preview;
pub mod session;
pub mod simulate;

pub use config::AppConfig;
pub use error::{CoreError, Result};
pub use message::{ResultMessage, result_message};
pub use model::{
    ADVISORY_SIZE_LIMIT, Classification, Outcome, SUPPORTED_EXTENSIONS, SelectedFile,
    is_supported_image,
};
pub use preview::Preview;
pub use session::{ANALYSIS_DELAY, PreviewTicket, Session, Trigger};
pub use simulate::{Entropy, Factors, SystemEntropy, simulate};
