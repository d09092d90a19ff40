//! Core observable property types.

mod builder;
mod object;
mod observable;
mod options;
mod store;
mod value;

pub use builder::ObservableObjectBuilder;
pub use object::ObservableObject;
pub use observable::Observable;
pub use options::{DefaultPolicy, StoreOptions};
pub use store::PropertyStore;
pub use value::{PropertyValue, Value};
