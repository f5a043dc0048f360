// Client core: intake, validation, the submission state machine, response
// decoding and chart projection. The presentation layer reads `ViewState`.

pub mod chart;
pub mod controller;
pub mod report;
pub mod response;
pub mod transport;
pub mod validator;
pub mod view_state;

pub use chart::{project, ChartData, ChartSlice};
pub use controller::{SubmissionController, SubmitOutcome};
pub use report::render_report;
pub use response::Decoded;
pub use transport::{AnalysisPayload, HttpTransport, Transport, TransportError};
pub use validator::{accept_upload, validate};
pub use view_state::{SubmissionState, ViewSnapshot, ViewState};
