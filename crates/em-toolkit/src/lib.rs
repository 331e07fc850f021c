pub mod error;
pub mod mock;
pub mod source;

// Vendor binding only exists when the SDK is linked
#[cfg(feature = "ttctk")]
pub mod ttctk;

pub use error::{STATUS_TOOLKIT_UNAVAILABLE, TK_STATUS_OK, ToolkitError, ToolkitResult};
pub use mock::MockVersionSource;
pub use source::{UnlinkedToolkit, VersionSource, default_source};

#[cfg(feature = "ttctk")]
pub use ttctk::TtcToolkit;
