pub mod generate;
pub mod init;
pub mod locate;

pub use generate::generate_command;
pub use init::init_command;
pub use locate::locate_command;
