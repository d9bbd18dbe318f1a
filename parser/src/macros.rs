/// Defines named single-character parsers from `char` patterns.
///
/// Each entry `name => pattern;` expands to a predicate `is_name(char) -> bool`
/// and a parser `name()` built with [`satisfy`](crate::primitive::satisfy),
/// labelled with the entry's name.
///
/// ```
/// lite_parsec::literals! {
///     pub hex_digit => '0' ..= '9' | 'a' ..= 'f' | 'A' ..= 'F';
/// }
///
/// assert!(is_hex_digit('c'));
/// assert_eq!(hex_digit().parse("F").values().len(), 1);
/// assert_eq!(hex_digit().parse("g").errors()[0].expected(), "hex_digit");
/// ```
#[macro_export]
macro_rules! literals {
    (
        $(
            $( #[ $attr:meta ] )*
            $vis:vis $name:ident => $($($value:literal)..=+)|+;
        )*
    ) => {
        $(
            $crate::literals!{
                IMPL
                $( #[ $attr ] )*
                $vis $name => $($($value)..=+)|+
            }
        )*
    };
    (
        IMPL
        $( #[ $attr:meta ] )*
        $vis:vis $name:ident => $($($value:literal)..=+)|+
    ) => (
        $crate::paste::paste! {
            #[allow(dead_code)]
            $vis fn [< is_ $name >](c: char) -> bool {
                match c {
                    $($($value)..=+)|+ => true,
                    _ => false
                }
            }

            $( #[ $attr ] )*
            #[allow(dead_code)]
            $vis fn $name() -> $crate::Parser<$crate::PChar> {
                $crate::primitive::satisfy([< is_ $name >], stringify!($name))
            }
        }
    );
}

#[cfg(test)]
mod tests {
    use crate::stream::Input;
    use crate::ParserError;

    crate::literals! {
        sign => '+' | '-';
        /// Lower-case vowels.
        pub vowel => 'a' | 'e' | 'i' | 'o' | 'u';
        octal => '0' ..= '7';
    }

    #[test]
    fn generates_predicates() {
        assert!(is_sign('+'));
        assert!(!is_sign('*'));
        assert!(is_octal('7'));
        assert!(!is_octal('8'));
        assert!(is_vowel('e'));
    }

    #[test]
    fn generates_labelled_parsers() {
        let (c, rest) = vowel().parse("ox").into_first().unwrap();
        assert_eq!(c.value, 'o');
        assert_eq!(rest.to_text(), "x");

        let input = Input::new("9");
        assert_eq!(
            octal().parse_input(&input).errors(),
            &[ParserError::new("octal", input)][..]
        );
    }
}
