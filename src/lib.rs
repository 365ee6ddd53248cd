pub mod cli;
pub mod command;
pub mod expression;
pub mod file_ops;
pub mod model;
pub mod reporting;
pub mod shell;

pub use command::CommandProcessor;
pub use expression::{DefaultExpressionProcessor, ExpressionProcessor};
pub use file_ops::FileOperations;
pub use model::{ChunkExpr, Command, CommandError, ExpressionWarning, Parsed, Scope, ScopeMode};
pub use reporting::{CommandReporter, ConsoleReporter, NoOpReporter};
pub use shell::{SessionSummary, Shell, ShellConfig};
