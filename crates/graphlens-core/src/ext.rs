//! Method-call surface over the engines.
//!
//! ```
//! use graphlens_core::ext::GraphExt;
//! use serde_json::json;
//!
//! let mut doc = json!({"address": {"city": "Old"}});
//! doc.set_path("address.city", &"Town".to_string()).unwrap();
//! assert_eq!(doc.get_path::<String>("address.city").unwrap(), "Town");
//! assert!(doc.deep_equals(&json!({"address": {"city": "Town"}}), &[]));
//! ```

use crate::copy::{self, CopyReport};
use crate::equality;
use crate::errors::Result;
use crate::reflect::{Reflect, Typed};

/// Blanket-implemented for every sized [`Reflect`] type.
pub trait GraphExt: Reflect + Sized {
    fn deep_equals(&self, compare: &dyn Reflect, ignore: &[&str]) -> bool {
        equality::deep_equals(self, compare, ignore)
    }

    fn deep_sub_equals(&self, compare: &dyn Reflect, ignore: &[&str]) -> bool {
        equality::deep_sub_equals(self, compare, ignore)
    }

    fn deep_intersection_equals(&self, compare: &dyn Reflect, ignore: &[&str]) -> bool {
        equality::deep_intersection_equals(self, compare, ignore)
    }

    fn copy_properties_to(&self, destination: &mut dyn Reflect) -> CopyReport {
        copy::copy_properties_to(self, destination)
    }

    fn get_path<T: Reflect + Typed>(&self, path: &str) -> Result<&T> {
        crate::path::get_typed::<T>(self, path)
    }

    fn get_path_or_default<T: Reflect + Typed + Clone>(&self, path: &str, default: T) -> Result<T> {
        crate::path::get_or_default(self, path, default)
    }

    fn set_path(&mut self, path: &str, value: &dyn Reflect) -> Result<()> {
        crate::path::set(self, path, value)
    }
}

impl<R: Reflect> GraphExt for R {}
