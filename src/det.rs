use num_traits::FromPrimitive;

use crate::config::PORT_MODULE_ID;
use crate::error::{ApiId, PortError};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StdReturnType {
    Ok = 0,
    NotOk = 1,
}

/// Development error hook.
///
/// Called once for every violated precondition of a driver service. The
/// default hook only logs the error; fault management that wants more must
/// observe the log stream.
///
/// # Parameters
///
/// * `module_id` - Id of the reporting module (124 for the PORT driver)
/// * `instance_id` - Driver instance, always 0 here
/// * `api_id` - Service id of the failing call
/// * `error_id` - Development error id
///
/// # Returns
///
/// Always [`StdReturnType::Ok`].
#[cfg_attr(test, mry::mry)]
pub fn report_error(module_id: u16, instance_id: u8, api_id: u8, error_id: u8) -> StdReturnType {
    if module_id == PORT_MODULE_ID {
        if let (Some(api), Some(error)) = (ApiId::from_u8(api_id), PortError::from_u8(error_id)) {
            log::warn!("port[{}]: {:?} rejected: {}", instance_id, api, error);
            return StdReturnType::Ok;
        }
    }

    log::warn!(
        "det: module {} instance {} api {:#04x} error {:#04x}",
        module_id,
        instance_id,
        api_id,
        error_id
    );
    StdReturnType::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use mry::Any;

    /// The default hook accepts both driver errors and ids it cannot decode.
    #[test]
    #[mry::lock(report_error)]
    fn test_report_error_always_returns_ok() {
        mock_report_error(Any, Any, Any, Any).calls_real_impl();

        assert_eq!(
            report_error(PORT_MODULE_ID, 0, ApiId::Init.id(), PortError::InitFailed.code()),
            StdReturnType::Ok
        );
        // Unknown error id from this module
        assert_eq!(report_error(PORT_MODULE_ID, 0, 0x01, 0x55), StdReturnType::Ok);
        // Another module altogether
        assert_eq!(report_error(120, 0, 0x01, 0x0A), StdReturnType::Ok);

        mock_report_error(Any, Any, Any, Any).assert_called(3);
    }
}
