use std::path::Path;

use crate::error::LoadError;
use crate::model::Alarm;

/// Read a JSON array of alarm records from disk.
///
/// Field defaulting happens here, before anything reaches the scoring
/// core: absent severity becomes "Info", absent timestamps the Unix
/// epoch, absent numerics 0, absent flags false.
pub fn load_alarms(path: &Path) -> Result<Vec<Alarm>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let alarms: Vec<Alarm> =
        serde_json::from_str(&contents).map_err(|source| LoadError::InputMalformed {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Loaded {} alarms from {}", alarms.len(), path.display());
    Ok(alarms)
}
