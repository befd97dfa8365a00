use quickcheck::{Arbitrary, Gen};

#[macro_use]
extern crate quickcheck_macros;

mod set;

/// An enum for the various kinds of "things" to do to
/// a set in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the set
    Insert(T),
    /// Erase the value from the set
    Erase(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Erase(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
