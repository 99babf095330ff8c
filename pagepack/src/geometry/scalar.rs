use std::fmt::Debug;
use std::ops::{Add, Sub};

/// Numeric contract for the geometry of a packer.
///
/// `Default::default()` is treated as the zero of the type. Any primitive
/// integer or float qualifies through the blanket impl; a custom numeric
/// type only needs addition, subtraction, comparison and a zero default.
///
/// Subtraction is only ever performed where the result is non-negative, so
/// unsigned integers are a valid choice: negative inputs are rejected (or
/// clamped, for configuration) before any arithmetic happens.
pub trait Scalar:
    Copy + Debug + Default + PartialOrd + Add<Output = Self> + Sub<Output = Self>
{
}

impl<T> Scalar for T where
    T: Copy + Debug + Default + PartialOrd + Add<Output = T> + Sub<Output = T>
{
}
