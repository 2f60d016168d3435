//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//! Probe answers are stored as these types so the dispatcher can branch on
//! them while the compiler resolves the impl, without any runtime `if`.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: `If<Then, Else>` (general type selector).
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Type-level AND of two booleans.
pub type And<A, B> = <A as Bool>::And<B>;

/// Type-level OR of two booleans.
pub type Or<A, B> = <A as Bool>::Or<B>;

/// Conditional type alias driven by a type-level boolean.
pub type If<C, Then, Else> = <C as Bool>::If<Then, Else>;

/// Conditional type alias driven by a const bool.
pub type IfConst<const C: bool, Then, Else> = <<() as SelectBool<C>>::Out as Bool>::If<Then, Else>;

#[cfg(test)]
mod tests {
    use super::*;

    struct Yes;
    struct No;

    trait Name {
        const NAME: &'static str;
    }
    impl Name for Yes {
        const NAME: &'static str = "yes";
    }
    impl Name for No {
        const NAME: &'static str = "no";
    }

    #[test]
    fn test_bool_values() {
        assert!(Present::VALUE);
        assert!(!Absent::VALUE);
        assert!(!<<Present as Bool>::Not as Bool>::VALUE);
    }

    #[test]
    fn test_logic() {
        assert!(<And<Present, Present> as Bool>::VALUE);
        assert!(!<And<Present, Absent> as Bool>::VALUE);
        assert!(<Or<Absent, Present> as Bool>::VALUE);
        assert!(!<Or<Absent, Absent> as Bool>::VALUE);
    }

    #[test]
    fn test_if_selects_type() {
        assert_eq!(<If<Present, Yes, No> as Name>::NAME, "yes");
        assert_eq!(<If<Absent, Yes, No> as Name>::NAME, "no");
        assert_eq!(<IfConst<true, Yes, No> as Name>::NAME, "yes");
        assert_eq!(<IfConst<false, Yes, No> as Name>::NAME, "no");
    }
}
