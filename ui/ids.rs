//! Element ids and classes shared by the rendered page and the browser client.

pub const PAGE_ID: &str = "prediction-page";
pub const FORM_ID: &str = "predictionForm";
pub const SUBMIT_BUTTON_ID: &str = "submitButton";
pub const BUTTON_TEXT_CLASS: &str = "btn-text";
pub const BUTTON_LOADER_CLASS: &str = "btn-loader";
pub const RESULTS_SECTION_ID: &str = "resultsSection";
pub const RESULTS_ID: &str = "results";
pub const ERROR_MESSAGE_ID: &str = "errorMessage";
