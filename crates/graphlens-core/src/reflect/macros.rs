//! Declarative registration of user structs.

/// Implement [`Typed`](crate::reflect::Typed) and
/// [`Reflect`](crate::reflect::Reflect) for a struct with named fields.
///
/// Every listed field becomes a readable member, in the listed order. Fields
/// marked `#[readonly]` can still be traversed but never replaced by a path
/// write or a copy. The struct must be `Clone` and each field type must itself
/// implement `Reflect` and `Typed`. Unlisted fields are invisible.
///
/// # Example
///
/// ```
/// use graphlens_core::reflect::Reflect;
/// use graphlens_core::reflect_struct;
///
/// #[derive(Clone)]
/// struct Account {
///     id: u64,
///     owner: String,
///     balance: Option<i64>,
/// }
/// reflect_struct!(Account { #[readonly] id, owner, balance });
///
/// let account = Account { id: 1, owner: "ann".into(), balance: None };
/// let members = account.members();
/// assert_eq!(members[0].name(), "id");
/// assert!(!members[0].is_writable());
/// assert!(members[1].is_writable());
/// ```
#[macro_export]
macro_rules! reflect_struct {
    (@writable) => {
        true
    };
    (@writable readonly) => {
        false
    };
    ($ty:ty { $($(#[$flag:ident])? $field:ident),* $(,)? }) => {
        impl $crate::reflect::Typed for $ty {
            fn type_info() -> $crate::reflect::TypeInfo {
                $crate::reflect::TypeInfo::new::<$ty>($crate::reflect::TypeClass::Composite)
            }
        }

        impl $crate::reflect::Reflect for $ty {
            fn type_info(&self) -> $crate::reflect::TypeInfo {
                <$ty as $crate::reflect::Typed>::type_info()
            }

            fn shape(&self) -> $crate::reflect::Shape<'_> {
                $crate::reflect::Shape::Composite
            }

            fn members(&self) -> ::std::vec::Vec<$crate::reflect::MemberInfo> {
                ::std::vec![
                    $(
                        $crate::reflect::MemberInfo::of_field(
                            stringify!($field),
                            &self.$field,
                            $crate::reflect_struct!(@writable $($flag)?),
                        ),
                    )*
                ]
            }

            fn member(&self, name: &str) -> ::std::option::Option<&dyn $crate::reflect::Reflect> {
                match name {
                    $(stringify!($field) => ::std::option::Option::Some(
                        &self.$field as &dyn $crate::reflect::Reflect
                    ),)*
                    _ => ::std::option::Option::None,
                }
            }

            fn member_mut(
                &mut self,
                name: &str,
            ) -> ::std::option::Option<&mut dyn $crate::reflect::Reflect> {
                match name {
                    $(stringify!($field) => ::std::option::Option::Some(
                        &mut self.$field as &mut dyn $crate::reflect::Reflect
                    ),)*
                    _ => ::std::option::Option::None,
                }
            }

            fn assign(
                &mut self,
                value: &dyn $crate::reflect::Reflect,
            ) -> ::std::result::Result<(), $crate::reflect::AssignError> {
                $crate::reflect::assign_cloned(self, value)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}
