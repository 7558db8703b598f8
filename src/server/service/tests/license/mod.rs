use super::*;

use crate::server::service::license::LicenseService;

mod find_by_callsign;
