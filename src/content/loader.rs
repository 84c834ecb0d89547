//! Loader for RON tuning files.

use ron::Options;
use std::fs;
use std::path::Path;

use super::TuningError;
use crate::locomotion::LocomotionTuning;

/// Where the shipped tuning lives, relative to the working directory.
pub const DEFAULT_TUNING_PATH: &str = "assets/data/locomotion.ron";

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn parse_named(contents: &str, source_name: &str) -> Result<LocomotionTuning, TuningError> {
    let tuning: LocomotionTuning =
        ron_options()
            .from_str(contents)
            .map_err(|e| TuningError::Parse {
                path: source_name.to_string(),
                message: e.to_string(),
            })?;

    tuning.validate()?;
    Ok(tuning)
}

/// Parse and validate tuning from an in-memory RON document.
/// Fields missing from the document keep their default values.
pub fn parse_tuning(contents: &str) -> Result<LocomotionTuning, TuningError> {
    parse_named(contents, "<inline>")
}

/// Load and validate tuning from a RON file on disk.
pub fn load_tuning(path: &Path) -> Result<LocomotionTuning, TuningError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| TuningError::Io {
        path: file_name.clone(),
        source,
    })?;

    parse_named(&contents, &file_name)
}
