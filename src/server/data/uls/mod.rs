//! FCC ULS replica repositories.
//!
//! The replica is written by an external pipeline; these repositories only read it.
//! [`license::LicenseRepository`] joins the license header, entity and amateur tables,
//! and [`update::UpdateRepository`] reads the replication log.

pub mod license;
pub mod update;

#[cfg(test)]
mod tests;
