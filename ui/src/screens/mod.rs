// This file makes the screen modules available to the rest of the application.

pub mod asset_selection;
pub mod email_verification;
pub mod finished;
pub mod link_sharing;
pub mod safety_scan;
pub mod test_transfer;
pub mod transfer;
