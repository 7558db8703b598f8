pub use super::db_updates::Entity as DbUpdates;
pub use super::l_am::Entity as LAm;
pub use super::l_en::Entity as LEn;
pub use super::l_hd::Entity as LHd;
