/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a o b o c` groups as `(a o b) o c`.
    Left,
    /// `a o b o c` groups as `a o (b o c)`.
    Right,
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `^`
    Pow,
    /// `*`
    Mul,
    /// `x`, a second spelling of multiplication with its own rank.
    Times,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `+`
    Add,
    /// `-`
    Sub,
}

/// The precedence table, ordered by rank.
///
/// An operator's rank is its index here. While converting to postfix, a
/// pending operator is emitted before the incoming one when its rank is lower
/// or equal (strictly lower for right-associative entries), so the lower the
/// rank the tighter the operator binds. Note that this puts every operator on
/// its own level: `+` binds tighter than `-`, and `*` tighter than `/`.
pub const PRECEDENCE: [(Operator, Associativity); 7] = [(Operator::Pow, Associativity::Left),
                                                        (Operator::Mul, Associativity::Left),
                                                        (Operator::Times, Associativity::Left),
                                                        (Operator::Div, Associativity::Left),
                                                        (Operator::Mod, Associativity::Left),
                                                        (Operator::Add, Associativity::Left),
                                                        (Operator::Sub, Associativity::Left)];

impl Operator {
    /// Returns the operator's rank in [`PRECEDENCE`].
    ///
    /// # Example
    /// ```
    /// use rpncalc::notation::Operator;
    ///
    /// assert!(Operator::Mul.precedence() < Operator::Add.precedence());
    /// assert!(Operator::Add.precedence() < Operator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> usize {
        match self {
            Self::Pow => 0,
            Self::Mul => 1,
            Self::Times => 2,
            Self::Div => 3,
            Self::Mod => 4,
            Self::Add => 5,
            Self::Sub => 6,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        PRECEDENCE[self.precedence()].1
    }

    /// Whether `pending`, sitting on top of the expression stack, has to be
    /// emitted before `self` is pushed.
    #[must_use]
    pub const fn yields_to(self, pending: Self) -> bool {
        match self.associativity() {
            Associativity::Left => pending.precedence() <= self.precedence(),
            Associativity::Right => pending.precedence() < self.precedence(),
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Pow => '^',
            Self::Mul => '*',
            Self::Times => 'x',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Add => '+',
            Self::Sub => '-',
        }
    }

    /// Applies the operator to `left` and `right` using IEEE 754 double
    /// arithmetic. Division and remainder by zero yield infinity or NaN.
    ///
    /// # Example
    /// ```
    /// use rpncalc::notation::Operator;
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert_eq!(Operator::Mod.apply(-7.0, 3.0), -1.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Pow => left.powf(right),
            Self::Mul | Self::Times => left * right,
            Self::Div => left / right,
            Self::Mod => left % right,
            Self::Add => left + right,
            Self::Sub => left - right,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A numeric literal together with the text it was read from.
///
/// The lexeme is kept so postfix output reproduces the number as the user
/// wrote it (`2.50` stays `2.50`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal<'s> {
    /// The literal as written.
    pub lexeme: &'s str,
    /// The parsed value.
    pub value:  f64,
}

impl Literal<'static> {
    /// The `0` the normalizer puts in front of a signed term.
    pub const ZERO: Self = Self { lexeme: "0",
                                  value:  0.0, };
}

/// An infix term after signed terms have been expanded.
///
/// This is what the converter consumes; unary operators no longer exist at
/// this stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term<'s> {
    Number(Literal<'s>),
    Operator(Operator),
    LParen,
    RParen,
}

/// A single element of a postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixToken<'s> {
    Number(Literal<'s>),
    Operator(Operator),
}

impl std::fmt::Display for PostfixToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(literal) => write!(f, "{}", literal.lexeme),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// An expression in Reverse Polish order.
///
/// Each token is paired with the byte offset of the source text it came from,
/// so evaluation errors can point back into the original expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix<'s> {
    tokens: Vec<(PostfixToken<'s>, usize)>,
}

impl<'s> Postfix<'s> {
    #[must_use]
    pub const fn new(tokens: Vec<(PostfixToken<'s>, usize)>) -> Self {
        Self { tokens }
    }

    #[must_use]
    pub fn tokens(&self) -> &[(PostfixToken<'s>, usize)] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for Postfix<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.tokens.iter();
        if let Some((first, _)) = iter.next() {
            write!(f, "{first}")?;
        }
        for (token, _) in iter {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}
