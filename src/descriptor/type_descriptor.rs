use crate::assembler;
use crate::comparator::Comparator;
use crate::descriptor::fields::Fields;
use crate::error::IntrospectionError;
use crate::strategy::{EqualityStrategy, select_strategy};
use crate::traits::comparable::Comparable;
use crate::traits::reflect::Reflect;
use core::any::type_name;
use core::fmt::{Debug, Display, Formatter};
use itertools::Itertools;
use strum::Display;

/// How a type treats missing values at the top level.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum ShapeCategory {
    /// A handle that may be null; null equals only null.
    Reference,
    /// A plain struct, never missing.
    Value,
    /// An optional struct; no value equals only no value.
    NullableValue,
}

/// Field layout and shape of `S`, derived once per comparator build.
pub struct TypeDescriptor<S: Comparable> {
    type_name: &'static str,
    shape: ShapeCategory,
    underlying: Option<&'static str>,
    fields: Fields<S::Target>,
}

impl<S: Comparable> TypeDescriptor<S> {
    /// Collects the fields of `S::Target` and classifies `S`.
    pub fn build() -> Result<Self, IntrospectionError> {
        let fields = S::Target::fields()?;
        if let Some(duplicate) =
            fields.iter().map(|field| field.name()).duplicates().next()
        {
            return Err(IntrospectionError::DuplicateField {
                type_name: type_name::<S::Target>(),
                field: duplicate.to_string(),
            });
        }

        let shape = S::SHAPE;
        Ok(TypeDescriptor {
            type_name: type_name::<S>(),
            shape,
            underlying: (shape == ShapeCategory::NullableValue)
                .then(type_name::<S::Target>),
            fields,
        })
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn shape(&self) -> ShapeCategory {
        self.shape
    }

    /// The wrapped struct of a [`ShapeCategory::NullableValue`].
    pub fn underlying(&self) -> Option<&'static str> {
        self.underlying
    }

    pub fn fields(&self) -> &Fields<S::Target> {
        &self.fields
    }

    /// The strategy each field is compared with, in comparison order.
    pub fn strategies(
        &self,
    ) -> impl Iterator<Item = (&str, EqualityStrategy)> + '_ {
        self.fields
            .iter()
            .map(|field| (field.name(), select_strategy(field)))
    }

    pub fn into_comparator(self) -> Comparator<S> {
        assembler::assemble(&self)
    }
}

impl<S: Comparable> Debug for TypeDescriptor<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("shape", &self.shape)
            .field("underlying", &self.underlying)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<S: Comparable> Display for TypeDescriptor<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.type_name, self.shape)?;
        if self.fields.is_empty() {
            return write!(f, " {{}}");
        }
        let fields = self
            .fields
            .iter()
            .map(|field| {
                format!(
                    "    {}: {} => {}",
                    field.name(),
                    field.declared_type(),
                    select_strategy(field)
                )
            })
            .join(",\n");
        write!(f, " {{\n{fields}\n}}")
    }
}

#[cfg(test)]
mod tests {
    use super::{ShapeCategory, TypeDescriptor};
    use crate::descriptor::Fields;
    use crate::error::IntrospectionError;
    use crate::traits::comparable::Comparable;
    use crate::traits::reflect::Reflect;
    use crate::StructuralEq;
    use core::any::type_name;
    use indoc::formatdoc;

    #[derive(StructuralEq)]
    struct Reading {
        sensor: u16,
        value: Option<f64>,
    }

    #[derive(StructuralEq)]
    struct Empty {}

    /// Lists `x` twice.
    struct Twice {
        x: u8,
    }

    impl Reflect for Twice {
        fn fields() -> Result<Fields<Self>, IntrospectionError> {
            Ok(Fields::new()
                .field("x", |twice: &Twice| &twice.x, crate::__field_equality!(u8))
                .field("x", |twice: &Twice| &twice.x, crate::__field_equality!(u8)))
        }
    }

    impl Comparable for Twice {
        type Target = Self;
        const SHAPE: ShapeCategory = ShapeCategory::Value;

        fn target(&self) -> Option<&Self> {
            Some(self)
        }
    }

    #[test]
    fn test_build_value() {
        let descriptor = TypeDescriptor::<Reading>::build().unwrap();
        assert_eq!(descriptor.shape(), ShapeCategory::Value);
        assert_eq!(descriptor.underlying(), None);
        let names = descriptor
            .fields()
            .iter()
            .map(|field| field.name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["sensor", "value"]);
    }

    #[test]
    fn test_build_nullable() {
        let descriptor = TypeDescriptor::<Option<Reading>>::build().unwrap();
        assert_eq!(descriptor.shape(), ShapeCategory::NullableValue);
        assert_eq!(descriptor.underlying(), Some(type_name::<Reading>()));
        assert_eq!(descriptor.fields().len(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = TypeDescriptor::<Reading>::build().unwrap();
        let second = TypeDescriptor::<Reading>::build().unwrap();
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_duplicate_field() {
        let err = TypeDescriptor::<Twice>::build().unwrap_err();
        assert_eq!(
            err,
            IntrospectionError::DuplicateField {
                type_name: type_name::<Twice>(),
                field: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_display() {
        let descriptor = TypeDescriptor::<Reading>::build().unwrap();
        let expected = formatdoc! {"
            {} (value) {{
                sensor: u16 => native_operator,
                value: {} => native_operator
            }}",
            type_name::<Reading>(),
            type_name::<Option<f64>>(),
        };
        assert_eq!(descriptor.to_string(), expected);

        let empty = TypeDescriptor::<Empty>::build().unwrap();
        assert_eq!(
            empty.to_string(),
            format!("{} (value) {{}}", type_name::<Empty>())
        );
    }
}
