pub mod check;
pub mod init;
pub mod schema;
pub mod status;

pub use check::cmd_check;
pub use init::cmd_init;
pub use schema::cmd_schema;
pub use status::cmd_status;
