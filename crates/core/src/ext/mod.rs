//! Adapters for std containers
//!
//! - `Option<T>`: plain nullable; also covers nullable pointers
//!   (`Option<&T>`, `Option<Box<T>>`, `Option<Rc<T>>`, `Option<Arc<T>>`)
//! - `Result<T, E>`: expected-like; `Err` is the null state
//!
//! Borrowed access goes through `as_ref()` / `as_mut()`, which are adapted
//! like any other instance of the container.

pub mod option;
pub mod result;
