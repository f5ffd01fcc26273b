mod applied;
mod mapped;
mod premapped;
mod then;

use crate::{ArgList, IntoArgs};

/// The core trait for formatters in Braid.
///
/// A `Format` value emits text into an output buffer once the arguments in
/// its [`Args`](Format::Args) chain have been supplied. Formatters are
/// immutable and stateless: applying one never mutates it, and every
/// application builds an independent output.
///
/// ## Implementing `Format`
///
/// To define a formatter, name the argument chain it demands and implement
/// the [`write()`](Format::write) method, which appends the emitted text to
/// a caller-owned buffer. Most code never implements this trait directly;
/// it builds formatters from [`lit`](crate::lit) and
/// [`from_fn`](crate::from_fn) instead.
///
/// ## Composing formatters
///
/// Formatters are combined in sequence with [`Format::then()`]. The
/// combined formatter emits the left side's text, then the right side's,
/// and demands the left side's arguments, then the right side's. The
/// composition is associative and `lit("")` is its two-sided identity.
///
/// ## Adapting formatters
///
/// - [`Format::map()`] – Transform the assembled output text.
/// - [`Format::premap()`] – Adapt the leading argument type.
/// - [`Format::apply()`] – Supply the next argument ahead of time.
///
/// ## Applying formatters
///
/// [`Format::format()`] assembles the final `String`;
/// [`Format::render()`] hands the assembled text to an arbitrary
/// continuation instead, for callers that want something other than a bare
/// string. A call whose arguments disagree with the chain in number, order,
/// or type does not compile; there is no runtime failure path.
pub trait Format {
    /// The chain of arguments this formatter still needs, right-nested in
    /// the order its holes were composed. `()` for a closed formatter.
    type Args: ArgList;

    /// Appends this formatter's text to `out`, consuming one value per
    /// pending hole.
    ///
    /// This is the only method required when implementing `Format`.
    fn write(&self, args: Self::Args, out: &mut String);

    /// Composes this formatter with another.
    ///
    /// # Returns
    ///
    /// A formatter that emits `self`'s text immediately followed by
    /// `next`'s, and whose argument chain is `self`'s chain followed by
    /// `next`'s.
    ///
    /// # Example
    /// ```
    /// use braid_core::{Format, from_fn, lit};
    ///
    /// let int = from_fn(|count: i64| count.to_string());
    /// let message = lit("We need ").then(int).then(lit(" cats."));
    ///
    /// assert_eq!(message.format((5,)), "We need 5 cats.");
    /// ```
    fn then<Next>(
        self,
        next: Next,
    ) -> impl Format<Args = <Self::Args as ArgList>::Concat<Next::Args>>
    where
        Self: Sized,
        Next: Format,
    {
        then::Then {
            first: self,
            second: next,
        }
    }

    /// Transforms this formatter's assembled text.
    ///
    /// The transform receives everything the wrapped formatter produces,
    /// not any single piece of it: mapping over a composed formatter
    /// transforms the concatenation of all of its parts' output together.
    ///
    /// # Example
    /// ```
    /// use braid_core::{Format, from_fn, lit};
    ///
    /// let string = from_fn(|name: &str| name.to_string());
    /// let shout = string.then(lit("!")).map(|text| text.to_uppercase());
    ///
    /// // The "!" came from a literal composed inside the mapped
    /// // formatter, and it is transformed along with the hole's text.
    /// assert_eq!(shout.format(("Hello",)), "HELLO!");
    /// ```
    fn map<T>(self, transform: T) -> impl Format<Args = Self::Args>
    where
        Self: Sized,
        T: Fn(String) -> String,
    {
        mapped::Mapped {
            inner: self,
            transform,
        }
    }

    /// Adapts this formatter's leading argument type.
    ///
    /// The returned formatter accepts an `A` where `self` demands a `B`,
    /// applying `adapt` to the incoming value first. The emitted text and
    /// the rest of the argument chain are unchanged.
    ///
    /// # Example
    /// ```
    /// use braid_core::{Format, from_fn, lit};
    ///
    /// struct Person {
    ///     height: f64,
    /// }
    ///
    /// let float = from_fn(|value: f64| value.to_string());
    /// let height = lit("Height: ").then(float.premap(|person: Person| person.height));
    ///
    /// let kris = Person { height: 1.72 };
    /// assert_eq!(height.format((kris,)), "Height: 1.72");
    /// ```
    fn premap<A, M, B, Rest>(self, adapt: M) -> impl Format<Args = (A, Rest)>
    where
        Self: Format<Args = (B, Rest)> + Sized,
        M: Fn(A) -> B,
        Rest: ArgList,
    {
        premapped::Premapped::new(self, adapt)
    }

    /// Supplies the next pending argument, leaving the rest open.
    ///
    /// The value is stored in the returned formatter and cloned on each
    /// application, so partial application keeps the formatter reusable.
    ///
    /// # Example
    /// ```
    /// use braid_core::{Format, from_fn, lit};
    ///
    /// let string = from_fn(|name: String| name);
    /// let int = from_fn(|age: i64| age.to_string());
    ///
    /// let line = string.then(lit(" is ")).then(int);
    /// let kris = line.apply("Kris".to_string());
    ///
    /// assert_eq!(kris.format((30,)), "Kris is 30");
    /// assert_eq!(kris.format((31,)), "Kris is 31");
    /// ```
    fn apply<Head, Rest>(self, value: Head) -> impl Format<Args = Rest>
    where
        Self: Format<Args = (Head, Rest)> + Sized,
        Head: Clone,
        Rest: ArgList,
    {
        applied::Applied { inner: self, value }
    }

    /// Assembles the final string from a flat tuple of arguments.
    ///
    /// This is terminal application with the identity continuation: every
    /// composed, mapped, and premapped layer unwinds exactly once and the
    /// fully assembled text is returned as-is.
    fn format<T>(&self, args: T) -> String
    where
        T: IntoArgs<Nested = Self::Args>,
    {
        let mut out = String::new();
        self.write(args.into_nested(), &mut out);
        out
    }

    /// Assembles the final text and hands it to `continuation`.
    ///
    /// Terminal application with an arbitrary base continuation, applied
    /// exactly once to the fully assembled text. Useful when the result
    /// should be something other than a bare string, such as a rich-text
    /// node.
    ///
    /// # Example
    /// ```
    /// use braid_core::{Format, from_fn, lit};
    ///
    /// let int = from_fn(|value: i64| value.to_string());
    /// let count = lit("count=").then(int);
    ///
    /// let length = count.render((42,), |text| text.len());
    /// assert_eq!(length, 8);
    /// ```
    fn render<T, R, C>(&self, args: T, continuation: C) -> R
    where
        T: IntoArgs<Nested = Self::Args>,
        C: FnOnce(String) -> R,
    {
        continuation(self.format(args))
    }
}
