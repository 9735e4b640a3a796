mod init;
pub use init::*;
mod ansi;
mod level;
pub use level::*;
mod printer;
pub use printer::*;
