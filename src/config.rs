// Build switches. Each one follows the Cargo feature of the same name so that a
// build can be configured from the manifest alone.

/// Development error detection for the driver layer.
pub const PORT_DEV_ERROR_DETECT: bool = cfg!(feature = "dev-error-detect");

/// Configuration is compiled in and `Init` expects no argument. When false the
/// configuration is supplied at run time (post-build variant).
pub const PORT_PRECOMPILE_SUPPORT: bool = cfg!(feature = "precompile");

pub const PORT_MODULE_ID: u16 = 124;
pub const PORT_INSTANCE_ID: u8 = 0;
pub const PORT_VENDOR_ID: u16 = 43;

pub const PORT_SW_MAJOR_VERSION: u8 = 1;
pub const PORT_SW_MINOR_VERSION: u8 = 0;
pub const PORT_SW_PATCH_VERSION: u8 = 0;

pub const PORT_AR_RELEASE_MAJOR_VERSION: u8 = 21;
pub const PORT_AR_RELEASE_MINOR_VERSION: u8 = 11;
pub const PORT_AR_RELEASE_REVISION_VERSION: u8 = 0;

/// Highest pin mode accepted by `SetPinMode`; the PCR mux field is 3 bits wide.
pub const PORT_MAX_PIN_MODE: u8 = 7;
