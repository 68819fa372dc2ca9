//! Configuration file support.
//!
//! Settings are read from an INI file (`config.ini` in the platform config
//! directory). A missing file means defaults; every key is optional.
//!
//! ```ini
//! [archive]
//! base_url = https://download.mapterhorn.com
//! low_zoom_cutoff = 12
//! grid_shift = 6
//!
//! [contour]
//! thresholds = 12:100,500;14:20,100
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use parser::{format_thresholds, parse_thresholds};
pub use settings::{ArchiveSettings, ConfigFile, ContourSettings, DemSettings, LoggingSettings};
pub use writer::to_config_string;
