use ulsbot_test_utils::prelude::*;

use crate::server::data::uls::{license::LicenseRepository, update::UpdateRepository};

mod update;
