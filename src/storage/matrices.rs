//! The two named matrix slots.

use crate::domain::value::MatrixSlot;
use crate::math::matrix::{Matrix, MatrixError, MatrixOperation};

/// Matrix slots `A` and `B`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixSlots {
    a: Option<Matrix>,
    b: Option<Matrix>,
}

impl MatrixSlots {
    /// Parses `text` into `slot`.
    ///
    /// A failed parse empties the slot.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidFormat`] when `text` is not a rectangular matrix.
    pub fn store(&mut self, slot: MatrixSlot, text: &str) -> Result<&Matrix, MatrixError> {
        let parsed = Matrix::parse(text);
        let target = match slot {
            MatrixSlot::A => &mut self.a,
            MatrixSlot::B => &mut self.b,
        };
        *target = parsed;
        target.as_ref().ok_or(MatrixError::InvalidFormat(slot))
    }

    #[must_use]
    pub const fn get(&self, slot: MatrixSlot) -> Option<&Matrix> {
        match slot {
            MatrixSlot::A => self.a.as_ref(),
            MatrixSlot::B => self.b.as_ref(),
        }
    }

    /// Computes `A op B` without touching either slot.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotStored`] when a slot is empty, otherwise the shape
    /// error from [`Matrix::apply`].
    pub fn combine(&self, op: MatrixOperation) -> Result<Matrix, MatrixError> {
        match (&self.a, &self.b) {
            (Some(a), Some(b)) => a.apply(b, op),
            _ => Err(MatrixError::NotStored),
        }
    }

    pub fn clear(&mut self) {
        self.a = None;
        self.b = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_requires_both_slots() {
        let mut slots = MatrixSlots::default();
        slots.store(MatrixSlot::A, "1,2;3,4").unwrap();
        assert_eq!(slots.combine(MatrixOperation::Add), Err(MatrixError::NotStored));
    }

    #[test]
    fn failed_store_empties_the_slot() {
        let mut slots = MatrixSlots::default();
        slots.store(MatrixSlot::B, "1").unwrap();
        assert_eq!(
            slots.store(MatrixSlot::B, "1,").unwrap_err(),
            MatrixError::InvalidFormat(MatrixSlot::B)
        );
        assert!(slots.get(MatrixSlot::B).is_none());
    }

    #[test]
    fn shape_mismatch_leaves_slots_untouched() {
        let mut slots = MatrixSlots::default();
        slots.store(MatrixSlot::A, "1,2;3,4").unwrap();
        slots.store(MatrixSlot::B, "1,2,3;4,5,6").unwrap();
        let before = slots.clone();
        assert!(matches!(
            slots.combine(MatrixOperation::Add),
            Err(MatrixError::SizeMismatch(MatrixOperation::Add))
        ));
        assert_eq!(slots, before);
        assert_eq!(slots.combine(MatrixOperation::Multiply).unwrap().to_string(), "[[9,12,15],[19,26,33]]");
    }
}
