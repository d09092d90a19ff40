//! Declaration macro for observable properties.

/// Generate a getter/setter pair backed by an [`Observable`](crate::core::Observable) store.
///
/// Use inside an `impl` block of a type implementing `Observable`. The
/// property name is the getter's identifier, so accessors never repeat it
/// as a string literal. An optional `also = [...]` list names properties
/// that are notified as well whenever the setter changes the value.
///
/// The getter returns [`Result<T>`](crate::error::Result); the setter
/// returns whether the value changed.
///
/// # Examples
///
/// ```rust
/// use observable_object::observable_property;
/// use observable_object::prelude::*;
///
/// #[derive(Default)]
/// struct Person {
///     props: ObservableObject,
/// }
///
/// impl Observable for Person {
///     fn observable(&self) -> &ObservableObject {
///         &self.props
///     }
/// }
///
/// impl Person {
///     observable_property!(pub first_name / set_first_name: String, also = ["full_name"]);
///     observable_property!(pub age / set_age: u32);
/// }
///
/// let person = Person::default();
/// assert!(person.set_first_name("Ada".to_string()));
/// assert_eq!(person.first_name().unwrap(), "Ada");
/// assert_eq!(person.age().unwrap(), 0);
/// assert!(person.observable().contains("first_name"));
/// ```
#[macro_export]
macro_rules! observable_property {
    (
        $(#[$meta:meta])*
        $vis:vis $getter:ident / $setter:ident : $ty:ty
        $(, also = [$($also:expr),* $(,)?])?
    ) => {
        $(#[$meta])*
        $vis fn $getter(&self) -> $crate::error::Result<$ty> {
            $crate::core::Observable::get::<$ty>(self, stringify!($getter))
        }

        #[doc = concat!(
            "Set `",
            stringify!($getter),
            "`, notifying listeners if the value changed."
        )]
        $vis fn $setter(&self, value: $ty) -> bool {
            $crate::core::Observable::set_with(
                self,
                stringify!($getter),
                value,
                &[$($($also),*)?],
            )
        }
    };
}
