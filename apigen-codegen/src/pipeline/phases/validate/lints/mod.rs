//! Built-in lints.

mod duplicate_route;
mod multiple_body;
mod name_collision;
mod path_placeholder;
mod unsupported_method;

pub use duplicate_route::DuplicateRouteLint;
pub use multiple_body::MultipleBodyLint;
pub use name_collision::NameCollisionLint;
pub use path_placeholder::PathPlaceholderLint;
pub use unsupported_method::UnsupportedMethodLint;
