/// A right-nested chain of the argument types a formatter still needs.
///
/// A closed formatter has the empty chain `()`. Each hole adds one
/// `(Head, Rest)` layer, in the left-to-right order the holes were
/// composed. Composing two formatters concatenates their chains at the
/// type level via [`ArgList::Concat`].
pub trait ArgList: Sized {
    /// The chain obtained by appending all of `Tail` after all of `Self`.
    type Concat<Tail: ArgList>: ArgList;

    /// Appends `tail` after all of `self`.
    fn concat<Tail: ArgList>(self, tail: Tail) -> Self::Concat<Tail>;

    /// Splits a concatenated chain back into its two halves.
    ///
    /// The inverse of [`concat`](ArgList::concat). Composition uses this to
    /// route each supplied argument to the side that demanded it.
    fn split<Tail: ArgList>(joined: Self::Concat<Tail>) -> (Self, Tail);
}

impl ArgList for () {
    type Concat<Tail: ArgList> = Tail;

    fn concat<Tail: ArgList>(self, tail: Tail) -> Tail {
        tail
    }

    fn split<Tail: ArgList>(joined: Tail) -> ((), Tail) {
        ((), joined)
    }
}

impl<Head, Rest: ArgList> ArgList for (Head, Rest) {
    type Concat<Tail: ArgList> = (Head, Rest::Concat<Tail>);

    fn concat<Tail: ArgList>(self, tail: Tail) -> Self::Concat<Tail> {
        let (head, rest) = self;
        (head, rest.concat(tail))
    }

    fn split<Tail: ArgList>(joined: Self::Concat<Tail>) -> (Self, Tail) {
        let (head, rest) = joined;
        let (front, tail) = Rest::split::<Tail>(rest);
        ((head, front), tail)
    }
}

/// Conversion from a flat argument tuple to a nested [`ArgList`] chain.
///
/// Terminal operations accept their arguments as an ordinary tuple, in the
/// order the holes were composed, and convert it with this trait. A tuple
/// whose length or element types disagree with the formatter's chain is a
/// compile error.
pub trait IntoArgs {
    /// The nested chain this tuple converts into.
    type Nested: ArgList;

    /// Nests the tuple's elements, preserving their order.
    fn into_nested(self) -> Self::Nested;
}

impl IntoArgs for () {
    type Nested = ();

    fn into_nested(self) -> Self::Nested {}
}

impl<A> IntoArgs for (A,) {
    type Nested = (A, ());

    fn into_nested(self) -> Self::Nested {
        (self.0, ())
    }
}

impl<A, B> IntoArgs for (A, B) {
    type Nested = (A, (B, ()));

    fn into_nested(self) -> Self::Nested {
        (self.0, (self.1, ()))
    }
}

impl<A, B, C> IntoArgs for (A, B, C) {
    type Nested = (A, (B, (C, ())));

    fn into_nested(self) -> Self::Nested {
        (self.0, (self.1, (self.2, ())))
    }
}

impl<A, B, C, D> IntoArgs for (A, B, C, D) {
    type Nested = (A, (B, (C, (D, ()))));

    fn into_nested(self) -> Self::Nested {
        (self.0, (self.1, (self.2, (self.3, ()))))
    }
}

impl<A, B, C, D, E> IntoArgs for (A, B, C, D, E) {
    type Nested = (A, (B, (C, (D, (E, ())))));

    fn into_nested(self) -> Self::Nested {
        (self.0, (self.1, (self.2, (self.3, (self.4, ())))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_then_split_is_identity() {
        let front = (1_i64, ("two", ()));
        let tail = (3.0_f64, ());

        let joined = front.concat(tail);
        assert_eq!(joined, (1, ("two", (3.0, ()))));

        let (front, tail) = <(i64, (&str, ()))>::split::<(f64, ())>(joined);
        assert_eq!(front, (1, ("two", ())));
        assert_eq!(tail, (3.0, ()));
    }

    #[test]
    fn empty_chain_is_a_concat_identity() {
        let chain = (true, ());
        assert_eq!(().concat(chain), (true, ()));
        assert_eq!((true, ()).concat(()), (true, ()));
    }

    #[test]
    fn flat_tuples_nest_in_order() {
        assert_eq!((1,).into_nested(), (1, ()));
        assert_eq!((1, "two").into_nested(), (1, ("two", ())));
        assert_eq!(
            (1, "two", 3.0, true).into_nested(),
            (1, ("two", (3.0, (true, ()))))
        );
    }
}
