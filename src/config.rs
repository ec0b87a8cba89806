use serde::Deserialize;

use crate::cutter::CutParams;
use crate::errors::*;

/// Name of the preprocessing step that activates header cutting.
pub const CUT_HEADERS_JOB: &str = "cutHeaders";

/// One preprocessing step from the pipeline configuration.
///
/// Attribute names follow the pipeline config schema: `preprocessJob`, `active`,
/// `cutBefore`, `cutBeforeOcc`, `cutAfter`. Steps other than `cutHeaders` are
/// parsed but ignored here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreprocessorStep {
    pub preprocess_job: String,
    #[serde(default)]
    pub active: bool,
    pub cut_before: Option<String>,
    pub cut_before_occ: Option<usize>,
    pub cut_after: Option<String>,
}

/// The preprocessor section of the pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PreprocessConfig {
    #[serde(default)]
    pub preprocessor: Vec<PreprocessorStep>,
}

impl PreprocessConfig {
    pub fn from_yaml(yaml: &[u8]) -> Result<Self> {
        serde_yaml::from_slice(yaml).map_err(|e| Error::ParseConfig(Box::new(e)))
    }

    /// Cut parameters from the active `cutHeaders` step, if there is one.
    ///
    /// When several active `cutHeaders` steps are listed, the last one wins.
    pub fn cut_params(&self) -> Option<CutParams> {
        let mut params = None;

        for step in &self.preprocessor {
            if step.preprocess_job == CUT_HEADERS_JOB && step.active {
                params = Some(CutParams::new(
                    step.cut_before.as_deref().unwrap_or(""),
                    step.cut_before_occ,
                    step.cut_after.as_deref().unwrap_or(""),
                ));
            }
        }

        params
    }
}
