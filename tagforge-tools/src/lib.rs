//! Built-in generation tools for tagforge.
//!
//! Each tool collects the declarations carrying its tag and emits one
//! generated unit:
//!
//! | tool          | tag                                     | unit          |
//! |---------------|-----------------------------------------|---------------|
//! | `printable`   | `printable`                             | `printables`  |
//! | `struct_repr` | `struct_repr`, `struct_repr_inline`     | `repr`        |
//! | `enum_info`   | `enum_info`                             | `enum_info`   |
//! | `soa`         | `soa`                                   | `soa`         |
//! | `class_dump`  | `printable`                             | `dump`        |
//!
//! Tools are looked up by name through [`ToolRegistry`].

mod class_dump;
mod enum_info;
mod field;
mod printable;
mod registry;
mod soa;
mod struct_repr;
pub mod templates;

pub use class_dump::ClassDump;
pub use enum_info::EnumInfo;
pub use printable::Printable;
pub use registry::{RegistryError, ToolOptions, ToolRegistry};
pub use soa::Soa;
pub use struct_repr::{StructRepr, StructReprOptions};
