use std::marker::PhantomData;

use crate::Format;

/// An open formatter that demands exactly one argument.
///
/// Created by [`from_fn`]. The stored function turns the supplied argument
/// into the text this formatter emits.
pub struct Hole<F, A> {
    stringify: F,
    _marker: PhantomData<A>,
}

/// Creates a formatter that demands one argument of type `A` and emits
/// `stringify(argument)`.
///
/// This is the primitive every value hole is built from; a hole differs
/// from another only in its stringifier and its static argument type.
pub fn from_fn<F, A>(stringify: F) -> Hole<F, A>
where
    F: Fn(A) -> String,
{
    Hole {
        stringify,
        _marker: PhantomData,
    }
}

impl<F, A> Format for Hole<F, A>
where
    F: Fn(A) -> String,
{
    type Args = (A, ());

    fn write(&self, (value, ()): Self::Args, out: &mut String) {
        out.push_str(&(self.stringify)(value));
    }
}
