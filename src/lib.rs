//! sparkrs: an eager, in-memory DataFrame engine with a Spark-style API
//!
//! Column expressions, conditional columns, regex replacement, joins,
//! window functions, nested schemas with JSON interchange and partitioned
//! collections, all evaluated in process.

pub mod dataframe;
pub mod error;
pub mod expr;
pub mod functions;
pub mod rdd;
pub mod series;
pub mod session;
pub mod types;
pub mod value;
pub mod window;

// Re-export commonly used types
pub use dataframe::{DataFrame, JoinType, SchemaSpec};
pub use error::{Error, Result};
pub use expr::{CaseWhen, Expr, SortKey};
pub use functions::*;
pub use rdd::Rdd;
pub use series::Series;
pub use session::{SessionConfig, SparkContext, SparkSession, SparkSessionBuilder};
pub use types::{DataType, StructField, StructType};
pub use value::{Row, Value};
pub use window::{Window, WindowFunction, WindowSpec};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
