use std::ops::Add;

/// A primitive numeric type: something that can be summed from a zero value and compared against
/// it.
///
/// The zero value is [`Default::default`], which is `0` (or `0.0`) for every implementor.
///
/// This trait is implemented for all primitive integer and floating point types. It isn't sealed,
/// so a numeric newtype can opt in as long as its [`Default`] is its additive identity.
///
/// # Examples
/// ```
/// # use gkit::traits::Number;
/// fn total<N: Number>(items: &[N]) -> N {
///     items.iter().fold(N::zero(), |acc, &n| acc + n)
/// }
/// assert_eq!(total(&[1_u8, 2, 3]), 6);
/// assert_eq!(total(&[0.5_f64, 0.25]), 0.75);
/// ```
pub trait Number: Copy + Default + PartialOrd + Add<Output = Self> {
    /// Returns the additive identity for this type.
    fn zero() -> Self {
        Self::default()
    }
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(impl Number for $t {})*
    };
}

impl_number!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);
