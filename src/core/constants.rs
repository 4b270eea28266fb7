//! A collection of constants.

/// Rows shown per raw-data page.
pub const PAGE_SIZE: usize = 5;

/// Width of the rule printed between report sections.
pub const RULE_WIDTH: usize = 40;

// --- CSV column names ---
pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
/// Missing from the Washington export.
pub const GENDER: &str = "Gender";
/// Missing from the Washington export.
pub const BIRTH_YEAR: &str = "Birth Year";

/// Timestamps are second precision; a fractional suffix is tolerated.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
/// Same as [`DATETIME_FORMAT`] with an ISO `T` separator.
pub const DATETIME_FORMAT_ISO: &str = "%Y-%m-%dT%H:%M:%S%.f";
