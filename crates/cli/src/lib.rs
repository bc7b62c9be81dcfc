pub mod cli;
pub mod cmd_init;
pub mod config;
pub mod discovery;
pub mod error;
pub mod jest;
pub mod junit;

pub use cli::{Cli, Command, ConvertArgs, InitArgs};
pub use config::{Config, JunitOptions};
pub use error::{Error, ExitCode, Result};
pub use jest::{CaseResult, CaseStatus, FileResult, TestRunReport, parse_report};
pub use junit::{Testsuites, build};
