pub mod descriptor;
pub mod mapping;
pub mod property;
pub mod value;

pub use descriptor::TypeDescriptor;
pub use mapping::{DeclaredMapping, PropertyMap};
pub use property::{Accessor, PropertyDescriptor, PropertySpec};
pub use value::{IntoValue, Value};
