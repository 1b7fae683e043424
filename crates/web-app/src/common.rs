/// Text input together with the value parsed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField<T> {
    pub input: String,
    pub parsed: Option<T>,
}

impl<T> Default for InputField<T> {
    fn default() -> Self {
        InputField {
            input: String::new(),
            parsed: None,
        }
    }
}

impl<T> InputField<T> {
    pub fn new<E>(input: String, parse: impl FnOnce(&str) -> Result<T, E>) -> Self {
        InputField {
            parsed: parse(&input).ok(),
            input,
        }
    }

    #[must_use]
    pub fn valid(&self) -> bool {
        self.parsed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use fitzone_domain::Name;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_input_field_default() {
        let field = InputField::<Name>::default();
        assert!(!field.valid());
        assert_eq!(field.input, "");
    }

    #[test]
    fn test_input_field_new() {
        let field = InputField::new(String::from(" Leg Day "), Name::new);
        assert!(field.valid());
        assert_eq!(field.input, " Leg Day ");
        assert_eq!(field.parsed.map(|n| n.to_string()), Some(String::from("Leg Day")));

        let field = InputField::new(String::from("  "), Name::new);
        assert!(!field.valid());
    }
}
