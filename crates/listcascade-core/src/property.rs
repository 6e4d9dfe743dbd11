//! Property system for listcascade.
//!
//! A [`Property<T>`] is a value with interior mutability. Components hold
//! their observable state in properties and emit the associated
//! [`Signal`](crate::Signal) after a write, never while the property lock is
//! held.
//!
//! # Example
//!
//! ```
//! use listcascade_core::property::Property;
//!
//! let keys = Property::new(vec!["orange".to_string()]);
//! let len = keys.update(|k| {
//!     k.push("lemon".to_string());
//!     k.len()
//! });
//! assert_eq!(len, 2);
//! assert_eq!(keys.with(|k| k[1].clone()), "lemon");
//! ```

use parking_lot::RwLock;

/// A value shared between readers and a single owning component.
///
/// Reads go through [`with`](Self::with) and writes through
/// [`update`](Self::update); both hold the lock only for the closure.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Mutate the value in place through a closure.
    ///
    /// No change detection is performed; the caller decides what to emit.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.value.write())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_update_in_place() {
        let prop = Property::new(vec![1, 2]);
        let len = prop.update(|v| {
            v.push(3);
            v.len()
        });
        assert_eq!(len, 3);
        assert_eq!(prop.with(|v| v.clone()), vec![1, 2, 3]);
    }

    #[test]
    fn test_update_result_is_visible_to_later_reads() {
        let prop = Property::new((String::from("a"), 0_u32));
        prop.update(|(name, count)| {
            name.push('b');
            *count += 1;
        });
        assert_eq!(prop.with(|(name, count)| (name.clone(), *count)), ("ab".to_string(), 1));
    }

    #[test]
    fn test_property_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Property<Vec<String>>>();
    }
}
