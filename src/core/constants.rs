//! Constants used throughout pgpdrop.
//!
//! Centralizes magic strings and wire values.

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "PGPDROP_LOG";

/// Default log filter when `PGPDROP_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "pgpdrop=warn";

/// Filename placed in every literal data packet.
///
/// `_CONSOLE` is the conventional "for your eyes only" marker.
pub const LITERAL_FILENAME: &str = "_CONSOLE";

/// The one message for a session key that could not be recovered once the
/// recipient key id matched.
pub const SESSION_KEY_UNAVAILABLE: &str = "cannot recover the session key with the selected key";
