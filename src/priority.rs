// Priority keys
//
// Every queue orders by a key implementing `Priority`: a totally ordered,
// hashable, copyable value where larger means "dequeue sooner".

use crate::error::PriorityError;
use std::{
   cmp::Ordering,
   fmt,
   hash::{Hash, Hasher},
};

/// Key used to order items. Higher value = dequeued first.
pub trait Priority: Copy + Ord + Hash + fmt::Debug {
   /// Priority applied by `PriorityQueue::enqueue_default`.
   const DEFAULT: Self;
}

macro_rules! int_priority {
   ($($t:ty),* $(,)?) => {
      $(
         impl Priority for $t {
            const DEFAULT: Self = 1;
         }
      )*
   };
}

int_priority!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/*──────────────────────────────────────────────────────────────────────────*/
/*  Float keys                                                              */
/*──────────────────────────────────────────────────────────────────────────*/

/// A finite `f64` usable as a priority.
///
/// Construction rejects NaN and infinities, so a `FloatPriority` always has a
/// well-defined place in the order. `-0.0` is stored as `0.0` so the two
/// zeroes land in the same bucket.
#[derive(Clone, Copy)]
pub struct FloatPriority(f64);

impl FloatPriority {
   pub fn new(value: f64) -> Result<Self, PriorityError> {
      if !value.is_finite() {
         return Err(PriorityError::NotFinite(value));
      }
      // `-0.0 + 0.0 == +0.0`
      Ok(Self(value + 0.0))
   }

   #[inline]
   pub fn get(self) -> f64 {
      self.0
   }
}

impl Priority for FloatPriority {
   const DEFAULT: Self = FloatPriority(1.0);
}

impl TryFrom<f64> for FloatPriority {
   type Error = PriorityError;

   fn try_from(value: f64) -> Result<Self, Self::Error> {
      Self::new(value)
   }
}

impl From<FloatPriority> for f64 {
   fn from(p: FloatPriority) -> f64 {
      p.0
   }
}

impl PartialEq for FloatPriority {
   fn eq(&self, other: &Self) -> bool {
      self.cmp(other) == Ordering::Equal
   }
}

impl Eq for FloatPriority {}

impl PartialOrd for FloatPriority {
   fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
      Some(self.cmp(other))
   }
}

impl Ord for FloatPriority {
   fn cmp(&self, other: &Self) -> Ordering {
      self.0.total_cmp(&other.0)
   }
}

impl Hash for FloatPriority {
   fn hash<H: Hasher>(&self, state: &mut H) {
      self.0.to_bits().hash(state);
   }
}

impl fmt::Debug for FloatPriority {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      fmt::Debug::fmt(&self.0, f)
   }
}

impl fmt::Display for FloatPriority {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      fmt::Display::fmt(&self.0, f)
   }
}
