//! 领域实体

pub mod mapping;
pub mod options;
pub mod parameter;
pub mod path;

pub use mapping::EnvironmentMapping;
pub use options::{
    CaseMode, FetchOptions, FormattingOptions, OutputFormat, PathMode, QuoteStyle, RenderOrder,
};
pub use parameter::{PageRequest, ParameterPage, ParameterRecord};
pub use path::{BasePath, PathSelector, SEPARATOR};
